use super::{SimplexResult, SimplexStatus, SolverError, Tableau};
use crate::algebra::*;

/// First row with the most negative right-hand side, or `None` when the
/// tableau is primal feasible
pub fn dual_leaving_row(tableau: &Tableau) -> Option<usize> {
    let rhs = tableau.rhs();
    rhs.argmin().filter(|&i| rhs[i].is_negative())
}

/// First column with `a[row][j] < 0` minimizing `reduced[j] / a[row][j]`
/// among nonnegative ratios
pub fn dual_entering_column(
    tableau: &Tableau,
    reduced_costs: &[Rational],
    row: usize,
) -> Option<usize> {
    let mut best: Option<(usize, Rational)> = None;

    for (j, a) in tableau.matrix()[row].iter().enumerate() {
        if !a.is_negative() {
            continue;
        }
        let ratio = &reduced_costs[j] / a;
        if ratio.is_negative() {
            continue;
        }
        match best {
            Some((_, ref r)) if ratio >= *r => {}
            _ => best = Some((j, ratio)),
        }
    }
    best.map(|(j, _)| j)
}

/// Dual simplex for a dual feasible but primal infeasible tableau.
///
/// Used after a cut has been appended and, when the costs allow it, to
/// find a feasible start for problems with `>=` rows.  `on_pivot` is called
/// with every tableau produced by a pivot.  Reaching a row with no
/// eligible entering column reports [`Infeasible`](SimplexStatus::Infeasible).
pub fn dual_simplex<F>(
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
        let Some(row) = dual_leaving_row(&tableau) else {
            break SimplexStatus::Optimal;
        };
        if iterations >= max_iter {
            break SimplexStatus::MaxIterations;
        }
        let reduced = tableau.reduced_costs();
        let Some(col) = dual_entering_column(&tableau, &reduced, row) else {
            break SimplexStatus::Infeasible;
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
