use super::Rational;

/// Vector operations on slices of [`Rational`](crate::algebra::Rational)
pub trait VectorMath {
    /// Copy values from `src` to `self`
    fn copy_from(&mut self, src: &Self) -> &mut Self;

    /// Elementwise scaling.
    fn scale(&mut self, c: &Rational) -> &mut Self;

    /// Elementwise negation of entries.
    fn negate(&mut self) -> &mut Self;

    /// BLAS-like shift and scale in place.  Produces `self = a*x + self`
    fn axpy(&mut self, a: &Rational, x: &Self) -> &mut Self;

    /// Dot product
    fn dot(&self, y: &Self) -> Rational;

    /// Elementwise fractional parts `x - floor(x)`
    fn fractional_parts(&self) -> Vec<Rational>;

    /// True if every entry is `>= 0`
    fn is_nonnegative(&self) -> bool;

    /// True if every entry is `<= 0`
    fn is_nonpositive(&self) -> bool;

    /// Index of the smallest entry.  Ties resolve to the lowest index.
    fn argmin(&self) -> Option<usize>;

    /// Index of the largest entry.  Ties resolve to the lowest index.
    fn argmax(&self) -> Option<usize>;
}
