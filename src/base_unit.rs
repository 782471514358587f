//! # Base Units
//!
//! A [`BaseUnit`] is one physical dimension raised to a rational power, such
//! as `kg`, `m^2` or `s^-1/2`. The symbol is the unit's identity: two base
//! units describe the same dimension exactly when their symbols match.
//!
//! ## Arithmetic
//!
//! The operators follow dimensional analysis rather than numeric arithmetic:
//!
//! | Operation   | Requirement  | Effect on the exponent |
//! |-------------|--------------|------------------------|
//! | `a + b`     | same symbol  | unchanged              |
//! | `a - b`     | same symbol  | unchanged              |
//! | `a * b`     | same symbol  | `a + b`                |
//! | `a / b`     | same symbol  | `a - b`                |
//! | `-a`        |              | negated                |
//!
//! Combining two `kg` quantities additively still yields `kg`, while
//! multiplying them yields `kg^2`. What happens when the symbols differ is
//! decided by the [check policy](crate::checks).
//!
//! ```rust
//! use sciunits::BaseUnit;
//!
//! let force = BaseUnit::new("kg", 2) * BaseUnit::new("kg", 3);
//! assert_eq!(force, BaseUnit::new("kg", 5));
//! assert_eq!(force.to_string(), "kg^5");
//! ```
//!
//! ## Text form
//!
//! `symbol`, `symbol^N` or `symbol^N/D`. An exponent whose value is one is
//! written as the bare symbol and an exponent whose value is zero is written
//! as the empty string.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{AddAssign, DivAssign, MulAssign, Neg, SubAssign};
use std::str::FromStr;

use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::checks::{self, PreconditionViolation, verify_symbols};
use crate::ops::forward_binops;
use crate::parse::{ParseError, parse_base_unit};
use crate::Rational;

/// A unit symbol with a rational exponent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseUnit {
    symbol: Cow<'static, str>,
    exponent: Rational,
}

impl BaseUnit {
    /// Create a base unit from a symbol and an integer or rational exponent.
    pub fn new(symbol: impl Into<Cow<'static, str>>, exponent: impl Into<Rational>) -> Self {
        BaseUnit {
            symbol: symbol.into(),
            exponent: exponent.into(),
        }
    }

    /// Const constructor for units with a static symbol, used by [`crate::si`].
    pub const fn from_static(symbol: &'static str, exponent: Rational) -> Self {
        BaseUnit {
            symbol: Cow::Borrowed(symbol),
            exponent,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn exponent(&self) -> Rational {
        self.exponent
    }

    pub fn set_exponent(&mut self, exponent: impl Into<Rational>) {
        self.exponent = exponent.into();
    }

    pub fn same_symbol(&self, other: &BaseUnit) -> bool {
        self.symbol == other.symbol
    }

    /// Negate the exponent.
    pub fn invert(&mut self) -> &mut Self {
        self.exponent.negate();
        self
    }

    /// Halve the exponent by doubling its denominator. `m^2` becomes `m^2/2`,
    /// which still displays as `m`.
    pub fn sqrt(&mut self) -> &mut Self {
        self.exponent /= 2i64;
        self
    }

    /// Multiply the exponent by `n`.
    pub fn pow(&mut self, n: impl Into<Rational>) -> &mut Self {
        self.exponent *= n.into();
        self
    }

    pub fn increment(&mut self) -> &mut Self {
        self.exponent.increment();
        self
    }

    pub fn decrement(&mut self) -> &mut Self {
        self.exponent.decrement();
        self
    }

    /// Reduce the exponent to lowest terms.
    pub fn simplify(&mut self) -> &mut Self {
        self.exponent.simplify();
        self
    }

    /// Additive consistency check that ignores the active policy.
    pub fn try_add_assign(&mut self, rhs: &BaseUnit) -> Result<(), PreconditionViolation> {
        verify_symbols("addition", &self.symbol, &rhs.symbol)
    }

    /// Multiply, returning a mismatch as an error instead of consulting the policy.
    pub fn try_mul_assign(&mut self, rhs: &BaseUnit) -> Result<(), PreconditionViolation> {
        verify_symbols("multiplication", &self.symbol, &rhs.symbol)?;
        self.exponent += rhs.exponent;
        Ok(())
    }

    /// Divide, returning a mismatch as an error instead of consulting the policy.
    pub fn try_div_assign(&mut self, rhs: &BaseUnit) -> Result<(), PreconditionViolation> {
        verify_symbols("division", &self.symbol, &rhs.symbol)?;
        self.exponent -= rhs.exponent;
        Ok(())
    }
}

impl fmt::Display for BaseUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exponent.is_zero() {
            Ok(())
        } else if self.exponent.is_one() {
            write!(f, "{}", self.symbol)
        } else {
            write!(f, "{}^{}", self.symbol, self.exponent)
        }
    }
}

impl FromStr for BaseUnit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (symbol, exponent) = parse_base_unit(s)?;
        Ok(BaseUnit::new(symbol.to_string(), exponent))
    }
}

impl Serialize for BaseUnit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BaseUnit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl PartialOrd for BaseUnit {
    /// Compares exponents of two units with the same symbol.
    ///
    /// With a permissive policy, units with different symbols are compared by
    /// exponent alone; equal exponents then give `None` since the units are
    /// not equal.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        checks::active().symbols("comparison", &self.symbol, &other.symbol);
        if self == other {
            return Some(Ordering::Equal);
        }
        match self.exponent.partial_cmp(&other.exponent) {
            Some(Ordering::Equal) => None,
            ordering => ordering,
        }
    }
}

impl Neg for BaseUnit {
    type Output = BaseUnit;

    fn neg(mut self) -> BaseUnit {
        self.invert();
        self
    }
}

impl Neg for &BaseUnit {
    type Output = BaseUnit;

    fn neg(self) -> BaseUnit {
        -self.clone()
    }
}

impl AddAssign<&BaseUnit> for BaseUnit {
    fn add_assign(&mut self, rhs: &BaseUnit) {
        checks::active().symbols("addition", &self.symbol, &rhs.symbol);
    }
}

impl SubAssign<&BaseUnit> for BaseUnit {
    fn sub_assign(&mut self, rhs: &BaseUnit) {
        checks::active().symbols("subtraction", &self.symbol, &rhs.symbol);
    }
}

impl MulAssign<&BaseUnit> for BaseUnit {
    fn mul_assign(&mut self, rhs: &BaseUnit) {
        checks::active().symbols("multiplication", &self.symbol, &rhs.symbol);
        self.exponent += rhs.exponent;
    }
}

impl DivAssign<&BaseUnit> for BaseUnit {
    fn div_assign(&mut self, rhs: &BaseUnit) {
        checks::active().symbols("division", &self.symbol, &rhs.symbol);
        self.exponent -= rhs.exponent;
    }
}

forward_binops!(BaseUnit =>
    Add add AddAssign add_assign,
    Sub sub SubAssign sub_assign,
    Mul mul MulAssign mul_assign,
    Div div DivAssign div_assign,
);
