use thiserror::Error;

/// Error type returned by rational construction and division.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RationalError {
    /// A zero denominator was supplied, or a value was divided by zero
    #[error("division by zero")]
    DivisionByZero,
    /// Text could not be read as an integer, decimal or ratio
    #[error("cannot parse {input:?} as a rational: {reason}")]
    Parse { input: String, reason: &'static str },
    /// Floating point input was NaN or infinite
    #[error("cannot approximate a non-finite float")]
    NotFinite,
}
