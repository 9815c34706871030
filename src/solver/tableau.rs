use super::{ProblemError, SolverError};
use crate::algebra::*;
use num_traits::{One, Zero};
use std::collections::{BTreeMap, BTreeSet};

/// Simplex tableau in maximization form.
///
/// Rows are constraints and columns are all variables, structural first,
/// followed by slack, surplus and cut-slack columns in the order they were
/// created.  Every row has a basic column which is a unit vector with its
/// one in that row.
///
/// A `Tableau` is never modified after construction.  [`pivot`](Tableau::pivot)
/// and the column and row appending operations all return a new value, so
/// snapshots held in the solver history are independent of the live
/// tableau.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tableau {
    matrix: Vec<Vec<Rational>>,
    rhs: Vec<Rational>,
    objective: Vec<Rational>,
    basis: Vec<usize>,
    basic_costs: Vec<Rational>,
    var_names: Vec<String>,
    num_structural: usize,
}

fn invalid(reason: &'static str) -> SolverError {
    SolverError::MalformedProblem(ProblemError::InvalidTableau(reason))
}

impl Tableau {
    /// Create a tableau, checking dimensions and the unit basis property.
    pub fn new(
        matrix: Vec<Vec<Rational>>,
        rhs: Vec<Rational>,
        objective: Vec<Rational>,
        basis: Vec<usize>,
        var_names: Vec<String>,
        num_structural: usize,
    ) -> Result<Self, SolverError> {
        let m = matrix.len();
        let n = objective.len();

        if rhs.len() != m || basis.len() != m {
            return Err(invalid("rhs and basis must have one entry per row"));
        }
        if matrix.iter().any(|row| row.len() != n) {
            return Err(invalid("every row must have one entry per column"));
        }
        if var_names.len() != n {
            return Err(invalid("every column needs a name"));
        }
        if num_structural > n {
            return Err(invalid("more structural variables than columns"));
        }
        if basis.iter().any(|&j| j >= n) {
            return Err(invalid("basis index out of range"));
        }
        let distinct: BTreeSet<_> = basis.iter().collect();
        if distinct.len() != m {
            return Err(invalid("basis indices must be distinct"));
        }
        for (r, &j) in basis.iter().enumerate() {
            if !is_unit_column(&matrix, j, r) {
                return Err(invalid("basic column is not a unit vector"));
            }
        }

        let basic_costs = basis.iter().map(|&j| objective[j].clone()).collect();

        Ok(Self {
            matrix,
            rhs,
            objective,
            basis,
            basic_costs,
            var_names,
            num_structural,
        })
    }

    // ---------------------------------
    // accessors
    // ---------------------------------

    pub fn matrix(&self) -> &[Vec<Rational>] {
        &self.matrix
    }

    pub fn rhs(&self) -> &[Rational] {
        &self.rhs
    }

    pub fn objective(&self) -> &[Rational] {
        &self.objective
    }

    /// Basic column index of each row
    pub fn basis(&self) -> &[usize] {
        &self.basis
    }

    /// Objective coefficient of the basic column of each row
    pub fn basic_costs(&self) -> &[Rational] {
        &self.basic_costs
    }

    pub fn var_names(&self) -> &[String] {
        &self.var_names
    }

    /// Number of original problem variables
    pub fn num_structural(&self) -> usize {
        self.num_structural
    }

    pub fn num_rows(&self) -> usize {
        self.matrix.len()
    }

    pub fn num_cols(&self) -> usize {
        self.objective.len()
    }

    /// Row in which column `col` is basic, if any
    pub fn basic_row_of(&self, col: usize) -> Option<usize> {
        self.basis.iter().position(|&j| j == col)
    }

    // ---------------------------------
    // pivoting
    // ---------------------------------

    /// Make `col` basic in `row`.
    ///
    /// The pivot row is divided by the pivot element and `factor * pivot_row`
    /// is subtracted from every other row, where `factor` is that row's
    /// entry in `col`.
    pub fn pivot(&self, row: usize, col: usize) -> Result<Tableau, SolverError> {
        if row >= self.num_rows() || col >= self.num_cols() {
            return Err(invalid("pivot position out of range"));
        }
        let element = &self.matrix[row][col];
        if element.is_zero() {
            return Err(SolverError::ZeroPivotElement { row, col });
        }
        let inv = Rational::one().checked_div(element)?;

        let mut next = self.clone();

        next.matrix[row].scale(&inv);
        next.rhs[row] *= &inv;

        let pivot_row = next.matrix[row].clone();
        let pivot_rhs = next.rhs[row].clone();

        for i in 0..next.num_rows() {
            if i == row {
                continue;
            }
            let factor = next.matrix[i][col].clone();
            if factor.is_zero() {
                continue;
            }
            next.matrix[i].axpy(&-&factor, &pivot_row);
            next.rhs[i] -= &(&factor * &pivot_rhs);
        }

        next.basis[row] = col;
        next.basic_costs[row] = self.objective[col].clone();

        Ok(next)
    }

    // ---------------------------------
    // objective and optimality
    // ---------------------------------

    /// Objective value `z = sum_i cb_i * b_i` and the marginal
    /// `sum_i cb_i * a_ij` of every column.
    pub fn compute_objective_and_marginals(&self) -> (Rational, Vec<Rational>) {
        let z = self.basic_costs.dot(&self.rhs);

        let mut marginals = vec![Rational::zero(); self.num_cols()];
        for (cb, row) in self.basic_costs.iter().zip(&self.matrix) {
            if !cb.is_zero() {
                marginals.axpy(cb, row);
            }
        }
        (z, marginals)
    }

    pub fn objective_value(&self) -> Rational {
        self.basic_costs.dot(&self.rhs)
    }

    /// `objective_j - marginal_j` for every column
    pub fn reduced_costs(&self) -> Vec<Rational> {
        let (_, mut reduced) = self.compute_objective_and_marginals();
        reduced.negate().axpy(&Rational::one(), &self.objective);
        reduced
    }

    /// No column has a positive reduced cost
    pub fn is_primal_optimal(&self) -> bool {
        self.reduced_costs().is_nonpositive()
    }

    /// Every right-hand side is nonnegative
    pub fn is_primal_feasible(&self) -> bool {
        self.rhs.is_nonnegative()
    }

    /// Same test as [`is_primal_optimal`](Tableau::is_primal_optimal), named
    /// for its role as the precondition of the dual simplex.
    pub fn is_dual_feasible(&self) -> bool {
        self.is_primal_optimal()
    }

    // ---------------------------------
    // solution extraction
    // ---------------------------------

    /// Value of each structural variable.  Nonbasic variables are zero.
    pub fn structural_solution(&self) -> Vec<Rational> {
        let mut x = vec![Rational::zero(); self.num_structural];
        for (&j, b) in self.basis.iter().zip(&self.rhs) {
            if j < self.num_structural {
                x[j] = b.clone();
            }
        }
        x
    }

    /// Value of every column keyed by its name.
    ///
    /// Names are expected to be unique.  If two columns share a name the
    /// later column wins.
    pub fn solution_by_variable_name(&self) -> BTreeMap<String, Rational> {
        let mut values: Vec<Rational> = vec![Rational::zero(); self.num_cols()];
        for (&j, b) in self.basis.iter().zip(&self.rhs) {
            values[j] = b.clone();
        }
        self.var_names.iter().cloned().zip(values).collect()
    }

    /// `(name, value)` of the basic variable of each row
    pub fn basic_solution_values(&self) -> Vec<(&str, &Rational)> {
        self.basis
            .iter()
            .zip(&self.rhs)
            .map(|(&j, b)| (self.var_names[j].as_str(), b))
            .collect()
    }

    /// True if every variable in `integer_vars` currently has an integral value
    pub fn has_integer_solution(&self, integer_vars: &BTreeSet<usize>) -> bool {
        self.basis
            .iter()
            .zip(&self.rhs)
            .filter(|(j, _)| integer_vars.contains(*j))
            .all(|(_, b)| b.is_integer())
    }

    // ---------------------------------
    // structural transformations
    // ---------------------------------

    /// Append a nonbasic column with the given entries, objective
    /// coefficient and name.
    pub fn add_variable(
        &self,
        column: Vec<Rational>,
        cost: Rational,
        name: String,
    ) -> Result<Tableau, SolverError> {
        if column.len() != self.num_rows() {
            return Err(invalid("new column must have one entry per row"));
        }
        let mut next = self.clone();
        for (row, a) in next.matrix.iter_mut().zip(column) {
            row.push(a);
        }
        next.objective.push(cost);
        next.var_names.push(name);
        Ok(next)
    }

    /// Append a row with `basic_col` as its basic column.
    ///
    /// `basic_col` must currently be nonbasic, zero in every existing row and
    /// one in the new row.  The new row must be zero in every existing basic
    /// column so the unit basis is preserved.
    pub fn add_constraint_row(
        &self,
        row: Vec<Rational>,
        rhs: Rational,
        basic_col: usize,
    ) -> Result<Tableau, SolverError> {
        if row.len() != self.num_cols() {
            return Err(invalid("new row must have one entry per column"));
        }
        if basic_col >= self.num_cols() || self.basis.contains(&basic_col) {
            return Err(invalid("new basic column must exist and be nonbasic"));
        }
        if !row[basic_col].is_one() || self.matrix.iter().any(|r| !r[basic_col].is_zero()) {
            return Err(invalid("new basic column must be a unit vector"));
        }
        if self.basis.iter().any(|&j| !row[j].is_zero()) {
            return Err(invalid("new row must vanish on existing basic columns"));
        }

        let mut next = self.clone();
        next.matrix.push(row);
        next.rhs.push(rhs);
        next.basis.push(basic_col);
        next.basic_costs.push(self.objective[basic_col].clone());
        Ok(next)
    }

    /// Same tableau with a different objective row
    pub fn with_objective(&self, objective: Vec<Rational>) -> Result<Tableau, SolverError> {
        if objective.len() != self.num_cols() {
            return Err(invalid("objective must have one entry per column"));
        }
        let mut next = self.clone();
        next.basic_costs = self.basis.iter().map(|&j| objective[j].clone()).collect();
        next.objective = objective;
        Ok(next)
    }

    /// Drop the last column, which must be nonbasic
    pub fn remove_last_variable(&self) -> Result<Tableau, SolverError> {
        let last = self
            .num_cols()
            .checked_sub(1)
            .ok_or_else(|| invalid("no column to remove"))?;
        if last < self.num_structural || self.basis.contains(&last) {
            return Err(invalid("only a nonbasic auxiliary column can be removed"));
        }
        let mut next = self.clone();
        for row in next.matrix.iter_mut() {
            row.pop();
        }
        next.objective.pop();
        next.var_names.pop();
        Ok(next)
    }
}

fn is_unit_column(matrix: &[Vec<Rational>], col: usize, one_at: usize) -> bool {
    matrix.iter().enumerate().all(|(i, row)| {
        if i == one_at {
            row[col].is_one()
        } else {
            row[col].is_zero()
        }
    })
}
