//! Exact rational arithmetic and symbolic physical units.
//!
//! [`Rational`] exponents, [`BaseUnit`] symbols raised to them, and compound
//! [`Unit`]s that merge base units by symbol. [`Quantity`] carries a measured
//! value with its uncertainty and unit, and [`Bound`] / [`Cyclic`] keep a value
//! inside an interval.

pub mod base_unit;
pub mod bounded;
pub mod checks;
pub mod error;
pub mod parse;
pub mod quantity;
pub mod rational;
pub mod si;
pub mod unit;

mod ops;

pub use crate::base_unit::BaseUnit;
pub use crate::bounded::{Bound, BoundPolicy, Bounded, Clamp, Cyclic, Wrap};
pub use crate::checks::{CheckPolicy, PreconditionViolation, check_policy, set_check_policy};
pub use crate::error::{Error, Result};
pub use crate::parse::ParseError;
pub use crate::quantity::{Quantity, QuantityError};
pub use crate::rational::{ArithmeticError, Rational};
pub use crate::unit::Unit;

#[cfg(test)]
mod test_utils;
