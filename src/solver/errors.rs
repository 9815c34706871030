use crate::algebra::RationalError;
use thiserror::Error;

/// Error type returned by the solver and the tableau operations.
///
/// These all indicate a violated input contract or internal invariant.
/// Expected algorithmic outcomes such as unboundedness or an exhausted cut
/// budget are reported through [`SolverStatus`](crate::solver::SolverStatus)
/// instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// An equality constraint reached the initial tableau builder
    #[error("constraint {row} is an equality, only <= and >= rows are supported")]
    InvalidConstraintType { row: usize },
    /// A pivot was requested on a zero entry
    #[error("pivot element at row {row}, column {col} is zero")]
    ZeroPivotElement { row: usize, col: usize },
    /// Rational construction or division with a zero divisor
    #[error("division by zero")]
    DivisionByZero,
    /// A cut was requested from a row whose right-hand side is integral
    #[error("row {row} has an integral right-hand side, no cut can be derived")]
    IntegralCutRow { row: usize },
    /// Problem or tableau data are inconsistent
    #[error("malformed problem: {0}")]
    MalformedProblem(#[from] ProblemError),
    /// Solver settings are invalid
    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),
}

impl From<RationalError> for SolverError {
    fn from(e: RationalError) -> Self {
        match e {
            RationalError::DivisionByZero => SolverError::DivisionByZero,
            e => SolverError::MalformedProblem(ProblemError::InvalidCoefficient(e)),
        }
    }
}

/// Error type describing an inconsistent [`Problem`](crate::solver::Problem)
/// or [`Tableau`](crate::solver::Tableau).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProblemError {
    #[error("objective has no coefficients")]
    EmptyObjective,
    #[error("constraint {row} has {found} coefficients, expected {expected}")]
    ConstraintLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("integer variable index {index} is out of range for {num_vars} variables")]
    IntegerVarOutOfRange { index: usize, num_vars: usize },
    #[error("{found} variable names given for {expected} variables")]
    NameCount { expected: usize, found: usize },
    #[error("unknown objective sense {0:?}")]
    UnknownSense(String),
    #[error("unknown constraint type {0:?}")]
    UnknownConstraintType(String),
    #[error("invalid coefficient: {0}")]
    InvalidCoefficient(RationalError),
    #[error("inconsistent tableau: {0}")]
    InvalidTableau(&'static str),
}

/// Error type returned by settings validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}
