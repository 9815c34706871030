use super::{ConstraintType, Problem, ProblemError, SolverError, Tableau};
use crate::algebra::*;
use num_traits::{One, Zero};

/// Outcome of a single primal or dual simplex run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimplexStatus {
    /// Primal simplex: no positive reduced cost remains.
    /// Dual simplex: every right-hand side is nonnegative.
    Optimal,
    /// An improving column has no positive entry to bound it
    Unbounded,
    /// No feasible point exists (dual simplex or phase one)
    Infeasible,
    /// The pivot cap was reached first
    MaxIterations,
}

/// Final state of a simplex run
#[derive(Debug, Clone)]
pub struct SimplexResult {
    pub status: SimplexStatus,
    /// Last tableau reached
    pub tableau: Tableau,
    /// Number of pivots performed
    pub iterations: u32,
}

impl SimplexResult {
    pub fn objective_value(&self) -> Rational {
        self.tableau.objective_value()
    }

    pub fn solution(&self) -> Vec<Rational> {
        self.tableau.structural_solution()
    }
}

/// Build the starting tableau of a problem in maximization form.
///
/// Every `<=` row receives a slack column with coefficient `+1` that starts
/// basic.  A `>=` row `a'x >= b` is stored as `-a'x + s = -b` so that its
/// surplus column is also a `+1` unit column, which leaves the row primal
/// infeasible whenever `b > 0`.  Equality rows are rejected.
pub fn initial_tableau(problem: &Problem) -> Result<Tableau, SolverError> {
    problem.validate()?;
    if let Some(row) = problem.first_equality() {
        return Err(SolverError::InvalidConstraintType { row });
    }

    let n = problem.num_variables();
    let m = problem.num_constraints();

    let mut names = problem.variable_names();
    names.extend((0..m).map(|i| format!("x{}", n + i + 1)));

    let mut objective = problem.max_sense_objective();
    objective.resize(n + m, Rational::zero());

    let mut matrix = Vec::with_capacity(m);
    let mut rhs = Vec::with_capacity(m);

    for (i, con) in problem.constraints.iter().enumerate() {
        let mut row = con.coefficients.clone();
        row.resize(n + m, Rational::zero());
        row[n + i] = Rational::one();

        let mut b = con.rhs.clone();
        if con.ctype == ConstraintType::GreaterEqual {
            row[..n].negate();
            b = -b;
        }
        matrix.push(row);
        rhs.push(b);
    }

    let basis = (n..n + m).collect();
    Tableau::new(matrix, rhs, objective, basis, names, n)
}

/// First column with the strictly largest positive reduced cost
pub fn entering_column(reduced_costs: &[Rational]) -> Option<usize> {
    reduced_costs
        .argmax()
        .filter(|&j| reduced_costs[j].is_positive())
}

/// First row attaining the strictly smallest ratio `rhs[i] / a[i][col]`
/// over rows with `a[i][col] > 0`
pub fn leaving_row(tableau: &Tableau, col: usize) -> Option<usize> {
    let mut best: Option<(usize, Rational)> = None;

    for (i, (row, b)) in tableau.matrix().iter().zip(tableau.rhs()).enumerate() {
        let a = &row[col];
        if !a.is_positive() {
            continue;
        }
        let ratio = b / a;
        match best {
            Some((_, ref r)) if ratio >= *r => {}
            _ => best = Some((i, ratio)),
        }
    }
    best.map(|(i, _)| i)
}

/// Primal simplex with Dantzig's entering rule and the minimum ratio test.
///
/// `on_pivot` is called with every tableau produced by a pivot, in order.
/// At most `max_iter` pivots are performed.
pub fn primal_simplex<F>(
    tableau: Tableau,
    max_iter: u32,
    mut on_pivot: F,
) -> Result<SimplexResult, SolverError>
where
    F: FnMut(&Tableau),
{
    let mut tableau = tableau;
    let mut iterations = 0;

    let status = loop {
        let reduced = tableau.reduced_costs();
        let Some(col) = entering_column(&reduced) else {
            break SimplexStatus::Optimal;
        };
        if iterations >= max_iter {
            break SimplexStatus::MaxIterations;
        }
        let Some(row) = leaving_row(&tableau, col) else {
            break SimplexStatus::Unbounded;
        };

        tableau = tableau.pivot(row, col)?;
        iterations += 1;
        on_pivot(&tableau);
    };

    Ok(SimplexResult {
        status,
        tableau,
        iterations,
    })
}

/// Find a primal feasible basis with a single artificial column.
///
/// An artificial variable `x0` with coefficient `-1` in every row is
/// appended and `-x0` maximized, starting from a pivot on the row with the
/// most negative right-hand side.  A negative auxiliary optimum means the
/// constraints admit no nonnegative solution.  On success the artificial
/// column is removed and the original objective restored, and the status
/// is [`Optimal`](SimplexStatus::Optimal) meaning "feasible basis found".
///
/// When the status is not `Optimal` the returned tableau still carries the
/// artificial column.
pub fn phase_one<F>(
    tableau: Tableau,
    max_iter: u32,
    mut on_pivot: F,
) -> Result<SimplexResult, SolverError>
where
    F: FnMut(&Tableau),
{
    let feasible = |tableau| SimplexResult {
        status: SimplexStatus::Optimal,
        tableau,
        iterations: 0,
    };

    let Some(start) = tableau.rhs().argmin() else {
        return Ok(feasible(tableau));
    };
    if !tableau.rhs()[start].is_negative() {
        return Ok(feasible(tableau));
    }

    let m = tableau.num_rows();
    let x0 = tableau.num_cols();
    let original = tableau.objective().to_vec();

    let mut aux_objective = vec![Rational::zero(); x0];
    aux_objective.push(-Rational::one());

    let aux = tableau
        .add_variable(vec![-Rational::one(); m], Rational::zero(), "x0".to_string())?
        .with_objective(aux_objective)?
        .pivot(start, x0)?;
    on_pivot(&aux);

    let result = primal_simplex(aux, max_iter, &mut on_pivot)?;
    let mut iterations = result.iterations + 1;

    match result.status {
        SimplexStatus::Optimal => {}
        SimplexStatus::Unbounded => {
            // -x0 <= 0 bounds the auxiliary objective
            return Err(ProblemError::InvalidTableau("unbounded auxiliary problem").into());
        }
        status => {
            return Ok(SimplexResult {
                status,
                tableau: result.tableau,
                iterations,
            })
        }
    }

    let mut t = result.tableau;
    if t.objective_value().is_negative() {
        return Ok(SimplexResult {
            status: SimplexStatus::Infeasible,
            tableau: t,
            iterations,
        });
    }

    // x0 is zero but may still be basic in a degenerate row
    if let Some(r) = t.basic_row_of(x0) {
        let col = (0..x0)
            .find(|&j| !t.matrix()[r][j].is_zero())
            .ok_or(ProblemError::InvalidTableau("artificial row has no other entry"))?;
        t = t.pivot(r, col)?;
        iterations += 1;
        on_pivot(&t);
    }

    let t = t.remove_last_variable()?.with_objective(original)?;

    Ok(SimplexResult {
        status: SimplexStatus::Optimal,
        tableau: t,
        iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::tableau::tests::{q, qv, small_lp};
    use crate::solver::Sense;

    #[test]
    fn test_initial_tableau_layout() {
        let p = Problem::new([1, 2], Sense::Minimize)
            .add_constraint([1, 1], ConstraintType::LessEqual, 4)
            .add_constraint([1, 3], ConstraintType::GreaterEqual, 2);
        let t = initial_tableau(&p).unwrap();

        assert_eq!(t.num_rows(), 2);
        assert_eq!(t.num_cols(), 4);
        assert_eq!(t.objective(), &qv(&[-1, -2, 0, 0])[..]);
        assert_eq!(t.matrix()[0], qv(&[1, 1, 1, 0]));
        assert_eq!(t.matrix()[1], qv(&[-1, -3, 0, 1]));
        assert_eq!(t.rhs(), &qv(&[4, -2])[..]);
        assert_eq!(t.basis(), &[2, 3]);
        assert_eq!(t.var_names(), &["x1", "x2", "x3", "x4"]);
        assert!(!t.is_primal_feasible());
    }

    #[test]
    fn test_initial_tableau_rejects_equality() {
        let p = Problem::new([1, 1], Sense::Maximize)
            .add_constraint([1, 0], ConstraintType::LessEqual, 4)
            .add_constraint([1, 1], ConstraintType::Equal, 2);
        assert_eq!(
            initial_tableau(&p).unwrap_err(),
            SolverError::InvalidConstraintType { row: 1 }
        );
    }

    #[test]
    fn test_entering_leaving_first_occurrence() {
        assert_eq!(entering_column(&qv(&[1, 3, 3, -2])), Some(1));
        assert_eq!(entering_column(&qv(&[0, -1])), None);

        // x1 ratios: 4/1 and 5/2
        let t = small_lp();
        assert_eq!(leaving_row(&t, 0), Some(1));

        // tied ratios choose the upper row
        let t = Tableau::new(
            vec![qv(&[1, 1, 0]), qv(&[2, 0, 1])],
            qv(&[2, 4]),
            qv(&[1, 0, 0]),
            vec![1, 2],
            ["x1", "x2", "x3"].map(String::from).to_vec(),
            1,
        )
        .unwrap();
        assert_eq!(leaving_row(&t, 0), Some(0));
    }

    #[test]
    fn test_primal_simplex_small_lp() {
        let mut seen = Vec::new();
        let res = primal_simplex(small_lp(), 100, |t| seen.push(t.objective_value())).unwrap();

        assert_eq!(res.status, SimplexStatus::Optimal);
        assert_eq!(res.objective_value(), Rational::from(9));
        assert_eq!(res.solution(), qv(&[1, 3]));
        assert_eq!(res.iterations, 2);
        assert_eq!(seen, vec![q("15/2"), Rational::from(9)]);
    }

    #[test]
    fn test_primal_simplex_iteration_cap() {
        let res = primal_simplex(small_lp(), 1, |_| {}).unwrap();
        assert_eq!(res.status, SimplexStatus::MaxIterations);
        assert_eq!(res.iterations, 1);

        // an optimal start needs no pivots even with a zero cap
        let opt = primal_simplex(small_lp(), 100, |_| {}).unwrap().tableau;
        let res = primal_simplex(opt, 0, |_| {}).unwrap();
        assert_eq!(res.status, SimplexStatus::Optimal);
    }

    #[test]
    fn test_primal_simplex_unbounded() {
        // max x1 + x2  s.t.  x1 - x2 <= 1
        let p = Problem::new([1, 1], Sense::Maximize).add_constraint(
            [1, -1],
            ConstraintType::LessEqual,
            1,
        );
        let t = initial_tableau(&p).unwrap();
        let res = primal_simplex(t, 100, |_| {}).unwrap();
        assert_eq!(res.status, SimplexStatus::Unbounded);
    }

    #[test]
    fn test_phase_one_finds_feasible_basis() {
        // max -x1 - x2  s.t.  x1 + x2 >= 2,  x1 <= 3
        let p = Problem::new([1, 1], Sense::Minimize)
            .add_constraint([1, 1], ConstraintType::GreaterEqual, 2)
            .add_constraint([1, 0], ConstraintType::LessEqual, 3)
            .add_constraint([0, 1], ConstraintType::LessEqual, 3);
        let t = initial_tableau(&p).unwrap();
        let cols = t.num_cols();

        let mut pivots = 0;
        let res = phase_one(t, 100, |_| pivots += 1).unwrap();
        assert_eq!(res.status, SimplexStatus::Optimal);
        assert!(res.tableau.is_primal_feasible());
        assert_eq!(res.tableau.num_cols(), cols);
        assert_eq!(res.iterations, pivots);
        assert_eq!(res.tableau.objective(), &qv(&[-1, -1, 0, 0, 0])[..]);
    }

    #[test]
    fn test_phase_one_detects_infeasibility() {
        // x1 >= 3 and x1 <= 1
        let p = Problem::new([1, 1], Sense::Maximize)
            .add_constraint([1, 0], ConstraintType::GreaterEqual, 3)
            .add_constraint([1, 0], ConstraintType::LessEqual, 1);
        let t = initial_tableau(&p).unwrap();
        let res = phase_one(t, 100, |_| {}).unwrap();
        assert_eq!(res.status, SimplexStatus::Infeasible);
    }

    #[test]
    fn test_phase_one_feasible_start_is_untouched() {
        let res = phase_one(small_lp(), 100, |_| {}).unwrap();
        assert_eq!(res.status, SimplexStatus::Optimal);
        assert_eq!(res.iterations, 0);
        assert_eq!(res.tableau, small_lp());
    }
}
