//! # Measured Quantities
//!
//! A [`Quantity`] is a value with an absolute uncertainty and a [`Unit`].
//! Arithmetic propagates uncertainty to first order assuming independent
//! errors, and checks units the way [`Unit`] does:
//!
//! | Operation        | Unit                       | Uncertainty                          |
//! |------------------|----------------------------|--------------------------------------|
//! | `a + b`, `a - b` | must be equal              | `hypot(ua, ub)`                      |
//! | `a * b`, `a / b` | merged / divided           | relative uncertainties in quadrature |
//! | `a * k`, `a / k` | unchanged                  | scaled by `|k|`                      |
//! | `a + k`, `a - k` | unchanged                  | unchanged                            |
//! | `a.powf(p)`      | exponents times `p`        | `|p * a^(p-1)| * ua`                 |
//!
//! Transcendental functions (`ln`, `exp`, `sin`, ...) are only defined for
//! dimensionless quantities and return [`QuantityError::NotDimensionless`]
//! otherwise.
//!
//! ```rust
//! use sciunits::Quantity;
//!
//! let distance = Quantity::parse_unit(100.0, 0.5, "m").unwrap();
//! let time = Quantity::parse_unit(9.58, 0.01, "s").unwrap();
//! let speed = distance / time;
//!
//! assert_eq!(speed.unit(), &"m s^-1".parse().unwrap());
//! assert!((speed.value() - 10.438).abs() < 1e-3);
//! ```

use std::f64::consts::LN_10;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use thiserror::Error;

use crate::parse::ParseError;
use crate::{Rational, Unit};

/// Errors raised by quantity operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityError {
    /// A function that needs a dimensionless argument got one with units.
    #[error("{operation} requires a dimensionless quantity, got unit '{unit}'")]
    NotDimensionless {
        operation: &'static str,
        unit: String,
    },
}

/// A value with an absolute uncertainty and a unit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Quantity {
    value: f64,
    uncertainty: f64,
    unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, uncertainty: f64, unit: Unit) -> Self {
        Quantity {
            value,
            uncertainty: uncertainty.abs(),
            unit,
        }
    }

    /// Create a quantity with a unit given in text form, e.g. `"kg m s^-2"`.
    pub fn parse_unit(value: f64, uncertainty: f64, unit: &str) -> Result<Self, ParseError> {
        Ok(Quantity::new(value, uncertainty, unit.parse()?))
    }

    pub fn dimensionless(value: f64, uncertainty: f64) -> Self {
        Quantity::new(value, uncertainty, Unit::new())
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn uncertainty(&self) -> f64 {
        self.uncertainty
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// `|uncertainty / value|`; infinite for a zero value with non-zero uncertainty.
    pub fn relative_uncertainty(&self) -> f64 {
        if self.uncertainty == 0.0 {
            0.0
        } else {
            (self.uncertainty / self.value).abs()
        }
    }

    pub fn abs(mut self) -> Self {
        self.value = self.value.abs();
        self
    }

    /// Round up, keeping the relative uncertainty.
    pub fn ceil(self) -> Self {
        self.round_with(f64::ceil)
    }

    /// Round down, keeping the relative uncertainty.
    pub fn floor(self) -> Self {
        self.round_with(f64::floor)
    }

    fn round_with(mut self, round: fn(f64) -> f64) -> Self {
        let relative = self.relative_uncertainty();
        self.value = round(self.value);
        if relative.is_finite() {
            self.uncertainty = (self.value * relative).abs();
        }
        self
    }

    /// Raise to a rational power. The unit's exponents are multiplied by `p`.
    pub fn powf(mut self, p: impl Into<Rational>) -> Self {
        let p = p.into();
        let exponent = p.to_f64();
        self.uncertainty = propagate(self.uncertainty, || {
            exponent * self.value.powf(exponent - 1.0)
        });
        self.value = self.value.powf(exponent);
        self.unit.pow(p);
        self
    }

    pub fn powi(self, n: i32) -> Self {
        self.powf(n)
    }

    pub fn sqrt(mut self) -> Self {
        self.value = self.value.sqrt();
        self.uncertainty = propagate(self.uncertainty, || 0.5 / self.value);
        self.unit.sqrt();
        self
    }

    fn dimensionless_map(
        self,
        operation: &'static str,
        f: impl Fn(f64) -> f64,
        derivative: impl Fn(f64) -> f64,
    ) -> Result<Self, QuantityError> {
        if !self.unit.is_dimensionless() {
            return Err(QuantityError::NotDimensionless {
                operation,
                unit: self.unit.to_string().trim_end().to_string(),
            });
        }
        Ok(Quantity {
            value: f(self.value),
            uncertainty: propagate(self.uncertainty, || derivative(self.value)),
            unit: self.unit,
        })
    }

    /// Logarithm in an arbitrary `base`.
    pub fn log(self, base: f64) -> Result<Self, QuantityError> {
        let scale = base.ln();
        self.dimensionless_map("log", |x| x.log(base), |x| 1.0 / (x * scale))
    }

    /// `base` raised to the power of this quantity.
    pub fn exp_base(self, base: f64) -> Result<Self, QuantityError> {
        let scale = base.ln();
        self.dimensionless_map("exp_base", |x| base.powf(x), |x| scale * base.powf(x))
    }

    pub fn ln(self) -> Result<Self, QuantityError> {
        self.dimensionless_map("ln", f64::ln, |x| 1.0 / x)
    }

    pub fn log10(self) -> Result<Self, QuantityError> {
        self.dimensionless_map("log10", f64::log10, |x| 1.0 / (x * LN_10))
    }

    pub fn exp(self) -> Result<Self, QuantityError> {
        self.dimensionless_map("exp", f64::exp, f64::exp)
    }

    pub fn sin(self) -> Result<Self, QuantityError> {
        self.dimensionless_map("sin", f64::sin, f64::cos)
    }

    pub fn cos(self) -> Result<Self, QuantityError> {
        self.dimensionless_map("cos", f64::cos, f64::sin)
    }

    pub fn tan(self) -> Result<Self, QuantityError> {
        self.dimensionless_map("tan", f64::tan, |x| 1.0 + x.tan().powi(2))
    }

    pub fn asin(self) -> Result<Self, QuantityError> {
        self.dimensionless_map("asin", f64::asin, |x| 1.0 / (1.0 - x * x).sqrt())
    }

    pub fn acos(self) -> Result<Self, QuantityError> {
        self.dimensionless_map("acos", f64::acos, |x| 1.0 / (1.0 - x * x).sqrt())
    }

    pub fn atan(self) -> Result<Self, QuantityError> {
        self.dimensionless_map("atan", f64::atan, |x| 1.0 / (1.0 + x * x))
    }

    pub fn sinh(self) -> Result<Self, QuantityError> {
        self.dimensionless_map("sinh", f64::sinh, f64::cosh)
    }

    pub fn cosh(self) -> Result<Self, QuantityError> {
        self.dimensionless_map("cosh", f64::cosh, f64::sinh)
    }

    pub fn tanh(self) -> Result<Self, QuantityError> {
        self.dimensionless_map("tanh", f64::tanh, |x| 1.0 / x.cosh().powi(2))
    }

    pub fn asinh(self) -> Result<Self, QuantityError> {
        self.dimensionless_map("asinh", f64::asinh, |x| 1.0 / (x * x + 1.0).sqrt())
    }

    pub fn acosh(self) -> Result<Self, QuantityError> {
        self.dimensionless_map("acosh", f64::acosh, |x| 1.0 / (x * x - 1.0).sqrt())
    }

    pub fn atanh(self) -> Result<Self, QuantityError> {
        self.dimensionless_map("atanh", f64::atanh, |x| 1.0 / (1.0 - x * x))
    }
}

/// First-order propagation `|slope| * uncertainty`. An exact input stays
/// exact, even where the slope is infinite or undefined.
fn propagate(uncertainty: f64, slope: impl FnOnce() -> f64) -> f64 {
    if uncertainty == 0.0 {
        0.0
    } else {
        (slope() * uncertainty).abs()
    }
}

/// `"v +- u unit"`. A precision (`{:.3}`) applies to both numbers, and the
/// alternate form (`{:#}`) leaves the uncertainty out.
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(digits) => write!(f, "{:.*}", digits, self.value)?,
            None => write!(f, "{}", self.value)?,
        }
        if self.uncertainty != 0.0 && !f.alternate() {
            match f.precision() {
                Some(digits) => write!(f, " +- {:.*}", digits, self.uncertainty)?,
                None => write!(f, " +- {}", self.uncertainty)?,
            }
        }
        if !self.unit.is_dimensionless() {
            write!(f, " {}", self.unit.to_string().trim_end())?;
        }
        Ok(())
    }
}

impl AddAssign<&Quantity> for Quantity {
    fn add_assign(&mut self, rhs: &Quantity) {
        self.unit += &rhs.unit;
        self.uncertainty = self.uncertainty.hypot(rhs.uncertainty);
        self.value += rhs.value;
    }
}

impl SubAssign<&Quantity> for Quantity {
    fn sub_assign(&mut self, rhs: &Quantity) {
        self.unit -= &rhs.unit;
        self.uncertainty = self.uncertainty.hypot(rhs.uncertainty);
        self.value -= rhs.value;
    }
}

impl MulAssign<&Quantity> for Quantity {
    fn mul_assign(&mut self, rhs: &Quantity) {
        self.unit *= &rhs.unit;
        self.uncertainty =
            (self.uncertainty * rhs.value).hypot(rhs.uncertainty * self.value);
        self.value *= rhs.value;
    }
}

impl DivAssign<&Quantity> for Quantity {
    fn div_assign(&mut self, rhs: &Quantity) {
        self.unit /= &rhs.unit;
        let quotient = self.value / rhs.value;
        self.uncertainty =
            (self.uncertainty / rhs.value).hypot(rhs.uncertainty * quotient / rhs.value);
        self.value = quotient;
    }
}

impl AddAssign<f64> for Quantity {
    fn add_assign(&mut self, rhs: f64) {
        self.value += rhs;
    }
}

impl SubAssign<f64> for Quantity {
    fn sub_assign(&mut self, rhs: f64) {
        self.value -= rhs;
    }
}

impl MulAssign<f64> for Quantity {
    fn mul_assign(&mut self, rhs: f64) {
        self.value *= rhs;
        self.uncertainty *= rhs.abs();
    }
}

impl DivAssign<f64> for Quantity {
    fn div_assign(&mut self, rhs: f64) {
        self.value /= rhs;
        self.uncertainty /= rhs.abs();
    }
}

crate::ops::forward_binops!(Quantity =>
    Add add AddAssign add_assign,
    Sub sub SubAssign sub_assign,
    Mul mul MulAssign mul_assign,
    Div div DivAssign div_assign,
);

macro_rules! scalar_binop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident) => {
        impl $imp<f64> for Quantity {
            type Output = Quantity;

            fn $method(mut self, rhs: f64) -> Quantity {
                $assign_imp::$assign_method(&mut self, rhs);
                self
            }
        }
    };
}

scalar_binop!(Add, add, AddAssign, add_assign);
scalar_binop!(Sub, sub, SubAssign, sub_assign);
scalar_binop!(Mul, mul, MulAssign, mul_assign);
scalar_binop!(Div, div, DivAssign, div_assign);
