use super::{Rational, VectorMath};
use num_traits::Zero;
use std::iter::zip;

impl VectorMath for [Rational] {
    fn copy_from(&mut self, src: &[Rational]) -> &mut Self {
        self.clone_from_slice(src);
        self
    }

    fn scale(&mut self, c: &Rational) -> &mut Self {
        for x in &mut *self {
            *x *= c;
        }
        self
    }

    fn negate(&mut self) -> &mut Self {
        for x in &mut *self {
            *x = -&*x;
        }
        self
    }

    fn axpy(&mut self, a: &Rational, x: &[Rational]) -> &mut Self {
        assert_eq!(self.len(), x.len());
        if a.is_zero() {
            return self;
        }
        for (y, x) in zip(&mut *self, x) {
            if !x.is_zero() {
                *y += &(a * x);
            }
        }
        self
    }

    fn dot(&self, y: &[Rational]) -> Rational {
        assert_eq!(self.len(), y.len());
        zip(self, y).map(|(x, y)| x * y).sum()
    }

    fn fractional_parts(&self) -> Vec<Rational> {
        self.iter().map(Rational::fractional_part).collect()
    }

    fn is_nonnegative(&self) -> bool {
        self.iter().all(|x| !x.is_negative())
    }

    fn is_nonpositive(&self) -> bool {
        self.iter().all(|x| !x.is_positive())
    }

    fn argmin(&self) -> Option<usize> {
        // strict comparison keeps the first occurrence
        let mut best: Option<usize> = None;
        for (i, x) in self.iter().enumerate() {
            if best.map_or(true, |b| *x < self[b]) {
                best = Some(i);
            }
        }
        best
    }

    fn argmax(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, x) in self.iter().enumerate() {
            if best.map_or(true, |b| *x > self[b]) {
                best = Some(i);
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(xs: &[&str]) -> Vec<Rational> {
        xs.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_axpy_and_dot() {
        let mut y = v(&["1", "0", "1/2"]);
        let x = v(&["2", "3", "-1"]);
        y.axpy(&Rational::from(-1), &x);
        assert_eq!(y, v(&["-1", "-3", "3/2"]));
        assert_eq!(x.dot(&v(&["1", "1", "1"])), Rational::from(4));
    }

    #[test]
    fn test_sign_checks() {
        assert!(v(&["0", "1/2", "3"]).is_nonnegative());
        assert!(!v(&["0", "-1/2"]).is_nonnegative());
        assert!(v(&["0", "-1/2"]).is_nonpositive());
        assert!(Vec::<Rational>::new().is_nonpositive());
    }

    #[test]
    fn test_arg_extrema_first_occurrence() {
        let x = v(&["3", "-2", "5", "-2", "5"]);
        assert_eq!(x.argmin(), Some(1));
        assert_eq!(x.argmax(), Some(2));
        assert_eq!(Vec::<Rational>::new().argmin(), None);
    }

    #[test]
    fn test_fractional_parts() {
        let x = v(&["7/2", "-1/4", "2"]);
        assert_eq!(x.fractional_parts(), v(&["1/2", "3/4", "0"]));
    }

    #[test]
    fn test_scale_negate() {
        let mut x = v(&["1/2", "-3"]);
        x.scale(&Rational::from(2)).negate();
        assert_eq!(x, v(&["-1", "6"]));
        let mut y = v(&["0", "0"]);
        y.copy_from(&x);
        assert_eq!(y, x);
    }
}
