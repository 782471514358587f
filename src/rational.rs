//! # Exact Rational Numbers
//!
//! [`Rational`] is a signed fraction `N/D` over `i64`. It is the exponent type
//! of every [`BaseUnit`](crate::BaseUnit), which is what lets units carry
//! fractional powers such as the `m^1/2` produced by taking a square root.
//!
//! ## Reduction is explicit
//!
//! Arithmetic never reduces its result. `1/2 + 1/3` is `5/6`, but
//! `1/4 + 1/4` is `2/4`, and equality compares the stored pair, so
//! `2/4 != 1/2` until [`Rational::simplify`] is called:
//!
//! ```rust
//! use sciunits::Rational;
//!
//! let mut half = Rational::new(1, 4) + Rational::new(1, 4);
//! assert_eq!(half.to_string(), "2/4");
//! assert_ne!(half, Rational::new(1, 2));
//!
//! half.simplify();
//! assert_eq!(half, Rational::new(1, 2));
//! ```
//!
//! ## Sign
//!
//! The sign always lives in the numerator. Construction, [`Rational::invert`]
//! and division move a negative denominator's sign onto the numerator, which
//! keeps the cross-multiplication ordering meaningful.
//!
//! ## Zero denominators
//!
//! A zero denominator is representable (`Rational::new(1, 0)` succeeds) and is
//! only rejected when something divides by a zero value: [`Rational::checked_div`]
//! returns [`ArithmeticError::DivisionByZero`] and the `/` operators panic.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use num_traits::{Inv, One, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::parse::{ParseError, parse_rational};

/// Arithmetic failures on rationals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// The divisor has a zero numerator.
    #[error("Division by zero: {0} / {1}")]
    DivisionByZero(Rational, Rational),
}

/// An exact fraction with an `i64` numerator and denominator.
///
/// See the [module documentation](self) for the reduction and sign rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    num: i64,
    den: i64,
}

impl Rational {
    pub const ZERO: Rational = Rational::new(0, 1);
    pub const ONE: Rational = Rational::new(1, 1);

    /// Create `numerator/denominator` without reducing it.
    pub const fn new(numerator: i64, denominator: i64) -> Self {
        let mut value = Rational {
            num: numerator,
            den: denominator,
        };
        value.normalize_sign();
        value
    }

    /// Create the whole number `n/1`.
    pub const fn integer(n: i64) -> Self {
        Rational { num: n, den: 1 }
    }

    pub const fn numer(&self) -> i64 {
        self.num
    }

    pub const fn denom(&self) -> i64 {
        self.den
    }

    const fn normalize_sign(&mut self) {
        if self.den < 0 {
            self.num = -self.num;
            self.den = -self.den;
        }
    }

    /// Reduce to lowest terms in place.
    ///
    /// Factors of two are divided out first, then odd trial divisors up to
    /// the (shrinking) magnitude of the numerator. A zero numerator only
    /// halves the denominator while it is even, so `0/4` becomes `0/1` and
    /// `0/6` becomes `0/3`. Divisors equal to the numerator are tried as
    /// well, so `3/6` reduces all the way to `1/2`.
    pub fn simplify(&mut self) -> &mut Self {
        if self.num == 0 && self.den == 0 {
            return self;
        }

        while self.num % 2 == 0 && self.den % 2 == 0 {
            self.num /= 2;
            self.den /= 2;
        }

        let mut divisor: i64 = 3;
        while (divisor as u64) <= self.num.unsigned_abs() {
            while self.num % divisor == 0 && self.den % divisor == 0 {
                self.num /= divisor;
                self.den /= divisor;
            }
            divisor += 2;
        }
        self
    }

    /// Return a reduced copy.
    pub fn simplified(mut self) -> Self {
        self.simplify();
        self
    }

    /// Swap numerator and denominator in place. `0/d` becomes `d/0`.
    pub fn invert(&mut self) -> &mut Self {
        std::mem::swap(&mut self.num, &mut self.den);
        self.normalize_sign();
        self
    }

    pub fn negate(&mut self) -> &mut Self {
        self.num = -self.num;
        self
    }

    /// Add one whole unit: `num += den`.
    pub fn increment(&mut self) -> &mut Self {
        self.num += self.den;
        self
    }

    /// Subtract one whole unit: `num -= den`.
    pub fn decrement(&mut self) -> &mut Self {
        self.num -= self.den;
        self
    }

    /// Raise to an integer power. Negative powers invert first.
    pub fn powi(self, n: i32) -> Self {
        let mut base = self;
        if n < 0 {
            base.invert();
        }
        let exp = n.unsigned_abs();
        Rational::new(base.num.pow(exp), base.den.pow(exp))
    }

    /// Divide, failing instead of producing a zero denominator.
    pub fn checked_div(self, rhs: Rational) -> Result<Rational, ArithmeticError> {
        if rhs.num == 0 {
            return Err(ArithmeticError::DivisionByZero(self, rhs));
        }
        Ok(Rational::new(self.num * rhs.den, self.den * rhs.num))
    }

    pub fn to_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// Truncating integer value, `None` for a zero denominator.
    pub fn to_i64(&self) -> Option<i64> {
        self.num.checked_div(self.den)
    }

    fn cross(&self, other: &Rational) -> (i128, i128) {
        (
            self.num as i128 * other.den as i128,
            other.num as i128 * self.den as i128,
        )
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational::ZERO
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Rational::integer(n)
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Rational::integer(n as i64)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl FromStr for Rational {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rational(s)
    }
}

impl Serialize for Rational {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl PartialOrd for Rational {
    /// Orders by value using cross-multiplication.
    ///
    /// Equal values stored as different pairs (`1/2` and `2/4`) are not equal
    /// under `==`, so they compare as `None` rather than `Equal`.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        let (lhs, rhs) = self.cross(other);
        match lhs.cmp(&rhs) {
            Ordering::Equal => None,
            ordering => Some(ordering),
        }
    }
}

impl PartialEq<i64> for Rational {
    /// Value comparison: `2/2 == 1`.
    fn eq(&self, other: &i64) -> bool {
        self.num as i128 == *other as i128 * self.den as i128
    }
}

impl PartialOrd<i64> for Rational {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some((self.num as i128).cmp(&(*other as i128 * self.den as i128)))
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            num: -self.num,
            den: self.den,
        }
    }
}

impl AddAssign for Rational {
    fn add_assign(&mut self, rhs: Rational) {
        if self.den == rhs.den {
            self.num += rhs.num;
        } else {
            self.num = self.num * rhs.den + rhs.num * self.den;
            self.den *= rhs.den;
        }
    }
}

impl SubAssign for Rational {
    fn sub_assign(&mut self, rhs: Rational) {
        *self += -rhs;
    }
}

impl MulAssign for Rational {
    fn mul_assign(&mut self, rhs: Rational) {
        self.num *= rhs.num;
        self.den *= rhs.den;
    }
}

impl DivAssign for Rational {
    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`Rational::checked_div`] to recover.
    fn div_assign(&mut self, rhs: Rational) {
        match self.checked_div(rhs) {
            Ok(quotient) => *self = quotient,
            Err(err) => panic!("{}", err),
        }
    }
}

impl AddAssign<i64> for Rational {
    fn add_assign(&mut self, rhs: i64) {
        self.num += rhs * self.den;
    }
}

impl SubAssign<i64> for Rational {
    fn sub_assign(&mut self, rhs: i64) {
        self.num -= rhs * self.den;
    }
}

impl MulAssign<i64> for Rational {
    fn mul_assign(&mut self, rhs: i64) {
        self.num *= rhs;
    }
}

impl DivAssign<i64> for Rational {
    /// Scales the denominator: `r /= n` is `den *= n`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div_assign(&mut self, rhs: i64) {
        if rhs == 0 {
            panic!(
                "{}",
                ArithmeticError::DivisionByZero(*self, Rational::ZERO)
            );
        }
        self.den *= rhs;
        self.normalize_sign();
    }
}

macro_rules! rational_binop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident, $rhs:ty) => {
        impl $imp<$rhs> for Rational {
            type Output = Rational;

            fn $method(mut self, rhs: $rhs) -> Rational {
                $assign_imp::$assign_method(&mut self, rhs);
                self
            }
        }
    };
}

rational_binop!(Add, add, AddAssign, add_assign, Rational);
rational_binop!(Sub, sub, SubAssign, sub_assign, Rational);
rational_binop!(Mul, mul, MulAssign, mul_assign, Rational);
rational_binop!(Div, div, DivAssign, div_assign, Rational);
rational_binop!(Add, add, AddAssign, add_assign, i64);
rational_binop!(Sub, sub, SubAssign, sub_assign, i64);
rational_binop!(Mul, mul, MulAssign, mul_assign, i64);
rational_binop!(Div, div, DivAssign, div_assign, i64);

impl Zero for Rational {
    fn zero() -> Self {
        Rational::ZERO
    }

    /// Any `0/d` is zero.
    fn is_zero(&self) -> bool {
        self.num == 0
    }
}

impl One for Rational {
    fn one() -> Self {
        Rational::ONE
    }

    /// Any `d/d` with `d != 0` is one.
    fn is_one(&self) -> bool {
        self.den != 0 && self.num == self.den
    }
}

impl Inv for Rational {
    type Output = Rational;

    fn inv(mut self) -> Rational {
        self.invert();
        self
    }
}

impl ToPrimitive for Rational {
    fn to_i64(&self) -> Option<i64> {
        Rational::to_i64(self)
    }

    fn to_u64(&self) -> Option<u64> {
        Rational::to_i64(self).and_then(|n| u64::try_from(n).ok())
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Rational::to_f64(self))
    }
}
