use super::{ProblemError, SolverError, Tableau};
use crate::algebra::*;
use num_traits::{One, Zero};
use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Policy for choosing the source row of the next cut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CutSelection {
    /// Rows whose basic variable is required to be integral, most
    /// fractional right-hand side first
    #[default]
    IntegerBasic,
    /// Any row, most fractional right-hand side first.  The resulting cut is
    /// only valid when every variable, slacks included, is integral at every
    /// feasible point, i.e. pure integer problems with integer data.
    MostFractional,
}

/// A Gomory fractional cut derived from one tableau row.
///
/// For source row `sum_j a_j x_j = b` the cut is
/// `sum_j -frac(a_j) x_j + s = -frac(b)` with a new slack `s >= 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GomoryCut {
    /// Index of the source row
    pub source_row: usize,
    /// Name of the basic variable of the source row
    pub source_var: String,
    /// `frac(a_j)` for every column
    pub fractional_parts: Vec<Rational>,
    /// `frac(b)`, always in `(0, 1)`
    pub fractional_rhs: Rational,
    /// Cut row coefficients `-frac(a_j)`
    pub coefficients: Vec<Rational>,
    /// Cut right-hand side `-frac(b)`, always negative
    pub rhs: Rational,
}

/// Source row for the next cut under the default policy
pub fn find_cut_row(tableau: &Tableau, integer_vars: &BTreeSet<usize>) -> Option<usize> {
    find_cut_row_with(tableau, integer_vars, CutSelection::IntegerBasic)
}

/// Row with the strictly largest fractional right-hand side among the
/// candidates admitted by `selection`, ties going to the first row.
/// Returns `None` if every candidate row has an integral right-hand side.
pub fn find_cut_row_with(
    tableau: &Tableau,
    integer_vars: &BTreeSet<usize>,
    selection: CutSelection,
) -> Option<usize> {
    let mut best: Option<(usize, Rational)> = None;

    for (i, (j, b)) in tableau.basis().iter().zip(tableau.rhs()).enumerate() {
        let eligible = match selection {
            CutSelection::IntegerBasic => integer_vars.contains(j),
            CutSelection::MostFractional => true,
        };
        if !eligible {
            continue;
        }
        let frac = b.fractional_part();
        if frac.is_zero() {
            continue;
        }
        match best {
            Some((_, ref f)) if frac <= *f => {}
            _ => best = Some((i, frac)),
        }
    }
    best.map(|(i, _)| i)
}

/// Derive the Gomory fractional cut from `row`
pub fn generate_cut(tableau: &Tableau, row: usize) -> Result<GomoryCut, SolverError> {
    let (Some(a), Some(b)) = (tableau.matrix().get(row), tableau.rhs().get(row)) else {
        return Err(ProblemError::InvalidTableau("cut source row out of range").into());
    };

    let fractional_rhs = b.fractional_part();
    if fractional_rhs.is_zero() {
        return Err(SolverError::IntegralCutRow { row });
    }
    let fractional_parts = a.fractional_parts();

    let mut coefficients = fractional_parts.clone();
    coefficients.negate();

    Ok(GomoryCut {
        source_row: row,
        source_var: tableau.var_names()[tableau.basis()[row]].clone(),
        rhs: -&fractional_rhs,
        fractional_parts,
        fractional_rhs,
        coefficients,
    })
}

/// Append `cut` as a new row whose new slack column is basic.
///
/// The slack is named `x{k}` where `k` is the new column count.
pub fn add_cut(tableau: &Tableau, cut: &GomoryCut) -> Result<Tableau, SolverError> {
    let n = tableau.num_cols();
    let name = format!("x{}", n + 1);

    let mut row = cut.coefficients.clone();
    row.push(Rational::one());

    tableau
        .add_variable(vec![Rational::zero(); tableau.num_rows()], Rational::zero(), name)?
        .add_constraint_row(row, cut.rhs.clone(), n)
}
