//! Exact rational arithmetic.
//!
//! All solver arithmetic is carried out on [`Rational`] values, so pivots,
//! reduced costs and cut coefficients are free of rounding error.  Slices of
//! rationals gain row and column operations via the [`VectorMath`] trait.

mod error_types;
mod math_traits;
mod rational;
mod vecmath;

pub use error_types::*;
pub use math_traits::*;
pub use rational::*;
