//! # Compound Units
//!
//! A [`Unit`] is a product of [`BaseUnit`]s, e.g. `kg m^2 s^-3`. It behaves
//! like a multiset keyed by symbol:
//!
//! - Multiplication merges the right-hand side in: an entry whose symbol is
//!   already present has its exponent added, anything else is appended.
//! - Division multiplies by the inverse.
//! - Addition and subtraction are only defined between equal units and leave
//!   both sides untouched.
//! - Equality ignores the order of entries.
//!
//! ```rust
//! use sciunits::Unit;
//!
//! let power: Unit = "kg m^2 s^-3".parse().unwrap();
//! let acceleration: Unit = "m s^-2".parse().unwrap();
//!
//! assert_eq!(power * acceleration, "kg m^3 s^-5".parse::<Unit>().unwrap());
//! assert_eq!("kg m".parse::<Unit>(), "m kg".parse::<Unit>());
//! ```
//!
//! ## Text form
//!
//! Space separated base unit tokens. `Display` writes every entry followed by
//! a single space, trailing space included, so `kg m^2` prints as `"kg m^2 "`.
//! Entries are never pruned: `kg * kg^-1` keeps a `kg^0` entry, which prints
//! as an empty token and leaves a doubled space behind. Parsing skips empty
//! tokens, so printed units parse back to an equal unit as long as no
//! exponent is zero.

use std::fmt;
use std::ops::{AddAssign, DivAssign, Index, MulAssign, Neg, SubAssign};
use std::str::FromStr;

use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::checks::{self, PreconditionViolation, verify_units};
use crate::ops::forward_binops;
use crate::parse::ParseError;
use crate::{BaseUnit, Rational};

/// An unordered product of base units.
#[derive(Debug, Clone, Default)]
pub struct Unit {
    entries: Vec<BaseUnit>,
}

impl Unit {
    /// The dimensionless unit, with no entries.
    pub fn new() -> Self {
        Unit {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if every entry has a zero exponent (or there are none).
    pub fn is_dimensionless(&self) -> bool {
        self.entries.iter().all(|entry| entry.exponent().is_zero())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BaseUnit> {
        self.entries.iter()
    }

    /// Position of the first entry with `symbol`.
    pub fn find_symbol(&self, symbol: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.symbol() == symbol)
    }

    pub fn get(&self, symbol: &str) -> Option<&BaseUnit> {
        self.find_symbol(symbol).map(|index| &self.entries[index])
    }

    /// Multiply `other` into `self`, combining entries by symbol.
    pub fn merge_in(&mut self, other: &Unit) {
        for entry in &other.entries {
            self.merge_entry(entry);
        }
    }

    fn merge_entry(&mut self, entry: &BaseUnit) {
        match self.find_symbol(entry.symbol()) {
            Some(index) => self.entries[index] *= entry,
            None => self.entries.push(entry.clone()),
        }
    }

    /// Negate every exponent.
    pub fn invert(&mut self) -> &mut Self {
        for entry in &mut self.entries {
            entry.invert();
        }
        self
    }

    /// Multiply every exponent by `n`.
    pub fn pow(&mut self, n: impl Into<Rational>) -> &mut Self {
        let n = n.into();
        for entry in &mut self.entries {
            entry.pow(n);
        }
        self
    }

    /// Halve every exponent.
    pub fn sqrt(&mut self) -> &mut Self {
        for entry in &mut self.entries {
            entry.sqrt();
        }
        self
    }

    pub fn increment(&mut self) -> &mut Self {
        for entry in &mut self.entries {
            entry.increment();
        }
        self
    }

    pub fn decrement(&mut self) -> &mut Self {
        for entry in &mut self.entries {
            entry.decrement();
        }
        self
    }

    /// Reduce every exponent to lowest terms.
    pub fn simplify(&mut self) -> &mut Self {
        for entry in &mut self.entries {
            entry.simplify();
        }
        self
    }

    /// Additive consistency check that ignores the active policy.
    pub fn try_add_assign(&mut self, rhs: &Unit) -> Result<(), PreconditionViolation> {
        verify_units("addition", self, rhs)
    }

    fn count(&self, entry: &BaseUnit) -> usize {
        self.entries.iter().filter(|e| *e == entry).count()
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .all(|entry| self.count(entry) == other.count(entry))
    }
}

impl Eq for Unit {}

impl From<Vec<BaseUnit>> for Unit {
    fn from(entries: Vec<BaseUnit>) -> Self {
        Unit { entries }
    }
}

impl From<BaseUnit> for Unit {
    fn from(entry: BaseUnit) -> Self {
        Unit {
            entries: vec![entry],
        }
    }
}

impl FromIterator<BaseUnit> for Unit {
    fn from_iter<I: IntoIterator<Item = BaseUnit>>(iter: I) -> Self {
        Unit {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Unit {
    type Item = &'a BaseUnit;
    type IntoIter = std::slice::Iter<'a, BaseUnit>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Index<usize> for Unit {
    type Output = BaseUnit;

    fn index(&self, index: usize) -> &BaseUnit {
        &self.entries[index]
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            write!(f, "{} ", entry)?;
        }
        Ok(())
    }
}

impl FromStr for Unit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(BaseUnit::from_str).collect()
    }
}

impl Serialize for Unit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().trim_end())
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Neg for Unit {
    type Output = Unit;

    fn neg(mut self) -> Unit {
        self.invert();
        self
    }
}

impl Neg for &Unit {
    type Output = Unit;

    fn neg(self) -> Unit {
        -self.clone()
    }
}

impl AddAssign<&Unit> for Unit {
    fn add_assign(&mut self, rhs: &Unit) {
        checks::active().units("addition", self, rhs);
    }
}

impl SubAssign<&Unit> for Unit {
    fn sub_assign(&mut self, rhs: &Unit) {
        checks::active().units("subtraction", self, rhs);
    }
}

impl MulAssign<&Unit> for Unit {
    fn mul_assign(&mut self, rhs: &Unit) {
        self.merge_in(rhs);
    }
}

impl DivAssign<&Unit> for Unit {
    fn div_assign(&mut self, rhs: &Unit) {
        self.merge_in(&-rhs);
    }
}

impl MulAssign<&BaseUnit> for Unit {
    fn mul_assign(&mut self, rhs: &BaseUnit) {
        self.merge_entry(rhs);
    }
}

impl DivAssign<&BaseUnit> for Unit {
    fn div_assign(&mut self, rhs: &BaseUnit) {
        self.merge_entry(&-rhs);
    }
}

forward_binops!(Unit =>
    Add add AddAssign add_assign,
    Sub sub SubAssign sub_assign,
    Mul mul MulAssign mul_assign,
    Div div DivAssign div_assign,
);
