use super::RationalError;
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// Denominator bound used when converting `f64` input without an
/// explicit bound.
pub const DEFAULT_MAX_DENOMINATOR: u64 = 10_000;

/// Exact rational number backed by arbitrary precision integers.
///
/// Values are always held in canonical form: the numerator and denominator
/// share no common factor and the denominator is strictly positive.  Equality,
/// ordering and hashing all operate on that form, so `2/4 == 1/2`.
///
/// ```
/// use gomory::algebra::Rational;
///
/// let x: Rational = "-3/2".parse().unwrap();
/// assert_eq!(x.floor(), Rational::from(-2));
/// assert_eq!(x.fractional_part(), "1/2".parse::<Rational>().unwrap());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rational(BigRational);

impl Rational {
    /// Create `numer / denom`, reduced.  Fails if `denom` is zero.
    pub fn new(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Result<Self, RationalError> {
        let denom = denom.into();
        if denom.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Rational(BigRational::new(numer.into(), denom)))
    }

    /// Create an integer valued rational.
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Rational(BigRational::from_integer(value.into()))
    }

    /// Best rational approximation of `value` with denominator at most
    /// `max_denominator`.
    ///
    /// The float is first converted exactly and then reduced to the closest
    /// fraction within the bound, so `0.1` becomes `1/10` rather than the
    /// binary expansion actually stored.
    pub fn approximate_f64(value: f64, max_denominator: u64) -> Result<Self, RationalError> {
        if max_denominator == 0 {
            return Err(RationalError::DivisionByZero);
        }
        let exact = BigRational::from_float(value).ok_or(RationalError::NotFinite)?;
        let bound = BigInt::from(max_denominator);
        Ok(Rational(limit_denominator(&exact, &bound)))
    }

    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    /// Largest integer not greater than `self`, rounding toward negative infinity.
    pub fn floor(&self) -> Rational {
        Rational(self.0.floor())
    }

    /// `self - floor(self)`, always in `[0, 1)`.
    pub fn fractional_part(&self) -> Rational {
        Rational(&self.0 - self.0.floor())
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    pub fn abs(&self) -> Rational {
        Rational(self.0.abs())
    }

    /// Division that reports a zero divisor instead of panicking.
    pub fn checked_div(&self, rhs: &Rational) -> Result<Rational, RationalError> {
        if rhs.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Rational(&self.0 / &rhs.0))
    }

    /// Borrow the underlying `num_rational` value.
    pub fn as_big_rational(&self) -> &BigRational {
        &self.0
    }
}

// closest fraction to `exact` with denominator bounded by `max_den`,
// found by walking the continued fraction expansion.  `max_den >= 1`.
fn limit_denominator(exact: &BigRational, max_den: &BigInt) -> BigRational {
    if exact.denom() <= max_den {
        return exact.clone();
    }

    let (mut p0, mut q0) = (BigInt::zero(), BigInt::one());
    let (mut p1, mut q1) = (BigInt::one(), BigInt::zero());
    let mut n = exact.numer().clone();
    let mut d = exact.denom().clone();

    loop {
        let a = n.div_floor(&d);
        let q2 = &q0 + &a * &q1;
        if &q2 > max_den {
            break;
        }
        let p2 = &p0 + &a * &p1;
        p0 = std::mem::replace(&mut p1, p2);
        q0 = std::mem::replace(&mut q1, q2);
        let r = &n - &a * &d;
        n = std::mem::replace(&mut d, r);
    }

    let k = (max_den - &q0).div_floor(&q1);
    let lower = BigRational::new(&p0 + &k * &p1, &q0 + &k * &q1);
    let upper = BigRational::new(p1, q1);

    if (&upper - exact).abs() <= (&lower - exact).abs() {
        upper
    } else {
        lower
    }
}

// ---------------------------------
// conversions
// ---------------------------------

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Rational {
                fn from(value: $t) -> Self {
                    Rational::from_integer(value)
                }
            }
        )*
    };
}
impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Rational::from_integer(value)
    }
}

impl From<BigRational> for Rational {
    fn from(value: BigRational) -> Self {
        Rational(value)
    }
}

impl From<Rational> for BigRational {
    fn from(value: Rational) -> Self {
        value.0
    }
}

impl From<&Rational> for Rational {
    fn from(value: &Rational) -> Self {
        value.clone()
    }
}

impl TryFrom<f64> for Rational {
    type Error = RationalError;
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Rational::approximate_f64(value, DEFAULT_MAX_DENOMINATOR)
    }
}

impl TryFrom<&str> for Rational {
    type Error = RationalError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

fn parse_error(input: &str, reason: &'static str) -> RationalError {
    RationalError::Parse {
        input: input.to_string(),
        reason,
    }
}

// optional sign followed by ascii digits only
fn parse_integer(input: &str, text: &str) -> Result<BigInt, RationalError> {
    let (negative, digits) = split_sign(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(parse_error(input, "expected an integer"));
    }
    let value = BigInt::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| parse_error(input, "expected an integer"))?;
    Ok(if negative { -value } else { value })
}

fn split_sign(text: &str) -> (bool, &str) {
    match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    }
}

fn parse_decimal(input: &str, text: &str) -> Result<Rational, RationalError> {
    let (negative, body) = split_sign(text);
    let (whole, frac) = body.split_once('.').unwrap_or((body, ""));
    if whole.is_empty() && frac.is_empty() {
        return Err(parse_error(input, "expected digits"));
    }
    if !whole.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(parse_error(input, "expected a decimal number"));
    }

    let digits = format!("{}{}", whole, frac);
    let numer = BigInt::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| parse_error(input, "expected a decimal number"))?;
    let denom = num_traits::pow(BigInt::from(10u32), frac.len());
    let value = Rational::new(numer, denom)?;
    Ok(if negative { -value } else { value })
}

impl FromStr for Rational {
    type Err = RationalError;

    /// Accepts integers (`"-7"`), decimals (`"0.125"`) and ratios (`"3/4"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(parse_error(s, "empty input"));
        }
        if let Some((numer, denom)) = text.split_once('/') {
            let numer = parse_integer(s, numer.trim())?;
            let denom = parse_integer(s, denom.trim())?;
            Rational::new(numer, denom)
        } else if text.contains('.') {
            parse_decimal(s, text)
        } else {
            parse_integer(s, text).map(Rational::from_integer)
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_integer() {
            write!(f, "{}", self.0.numer())
        } else {
            write!(f, "{}/{}", self.0.numer(), self.0.denom())
        }
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// ---------------------------------
// arithmetic
// ---------------------------------

macro_rules! impl_binop {
    ($Trait:ident, $method:ident) => {
        impl $Trait<Rational> for Rational {
            type Output = Rational;
            fn $method(self, rhs: Rational) -> Rational {
                Rational(self.0.$method(rhs.0))
            }
        }
        impl<'a> $Trait<&'a Rational> for Rational {
            type Output = Rational;
            fn $method(self, rhs: &'a Rational) -> Rational {
                Rational(self.0.$method(&rhs.0))
            }
        }
        impl<'a> $Trait<Rational> for &'a Rational {
            type Output = Rational;
            fn $method(self, rhs: Rational) -> Rational {
                Rational((&self.0).$method(rhs.0))
            }
        }
        impl<'a, 'b> $Trait<&'b Rational> for &'a Rational {
            type Output = Rational;
            fn $method(self, rhs: &'b Rational) -> Rational {
                Rational((&self.0).$method(&rhs.0))
            }
        }
    };
}

impl_binop!(Add, add);
impl_binop!(Sub, sub);
impl_binop!(Mul, mul);
// NB: panics on a zero divisor.  Use `checked_div` where the
// divisor is not already known to be nonzero.
impl_binop!(Div, div);

impl AddAssign<&Rational> for Rational {
    fn add_assign(&mut self, rhs: &Rational) {
        self.0 += &rhs.0;
    }
}

impl SubAssign<&Rational> for Rational {
    fn sub_assign(&mut self, rhs: &Rational) {
        self.0 -= &rhs.0;
    }
}

impl MulAssign<&Rational> for Rational {
    fn mul_assign(&mut self, rhs: &Rational) {
        self.0 *= &rhs.0;
    }
}

impl Neg for Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        Rational(-self.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        Rational(-&self.0)
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Rational(BigRational::zero())
    }
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational::zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Rational(BigRational::one())
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |acc, x| acc + x)
    }
}

impl PartialEq<i64> for Rational {
    fn eq(&self, other: &i64) -> bool {
        self.0.is_integer() && *self.0.numer() == BigInt::from(*other)
    }
}

impl PartialOrd<i64> for Rational {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        self.0.partial_cmp(&BigRational::from_integer(BigInt::from(*other)))
    }
}

// ---------------------------------
// serialization as canonical text
// ---------------------------------

#[cfg(feature = "serde")]
impl serde::Serialize for Rational {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rational {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
