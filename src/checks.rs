//! # Unit Consistency Checks
//!
//! Several unit operations have a precondition that the caller is expected to
//! uphold: multiplying `kg^2` by `kg^3` is fine, multiplying `kg` by `m` as
//! base units is not, and adding two compound units requires them to be
//! identical. How a violation is treated is a build/startup decision made once
//! for the whole process:
//!
//! - [`CheckPolicy::Strict`] panics with the [`PreconditionViolation`].
//! - [`CheckPolicy::Permissive`] skips the check and lets the operation carry
//!   on with whatever result it produces.
//!
//! [`CheckPolicy::from_build`] picks `Strict` in debug builds and `Permissive`
//! in release builds. The `strict-checks` feature forces `Strict`, and the
//! `permissive-checks` feature forces `Permissive` (it wins if both are set).
//! A binary may override the build default once, before the first unit
//! operation, with [`set_check_policy`].
//!
//! Code that wants to handle a mismatch instead of relying on the policy can
//! call the `try_*` methods on [`BaseUnit`](crate::BaseUnit) and
//! [`Unit`], which always verify and return the violation as an error.

use std::sync::OnceLock;

use log::{debug, trace};
use thiserror::Error;

use crate::Unit;

/// A unit operation was applied to operands it is not defined for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionViolation {
    /// Two base units with different symbols were combined or compared.
    #[error("Unit symbol mismatch in {operation}: '{lhs}' vs '{rhs}'")]
    SymbolMismatch {
        operation: &'static str,
        lhs: String,
        rhs: String,
    },

    /// Two compound units that should be identical are not.
    #[error("Unit mismatch in {operation}: '{lhs}' vs '{rhs}'")]
    UnitMismatch {
        operation: &'static str,
        lhs: String,
        rhs: String,
    },
}

/// Verify that two base unit symbols are the same.
pub fn verify_symbols(
    operation: &'static str,
    lhs: &str,
    rhs: &str,
) -> Result<(), PreconditionViolation> {
    if lhs == rhs {
        Ok(())
    } else {
        Err(PreconditionViolation::SymbolMismatch {
            operation,
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
        })
    }
}

/// Verify that two compound units are equal.
pub fn verify_units(
    operation: &'static str,
    lhs: &Unit,
    rhs: &Unit,
) -> Result<(), PreconditionViolation> {
    if lhs == rhs {
        Ok(())
    } else {
        Err(PreconditionViolation::UnitMismatch {
            operation,
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
        })
    }
}

/// How unit operations react to a precondition violation.
pub trait ConsistencyCheck: Send + Sync {
    /// Called before an operation that requires `lhs` and `rhs` to share a symbol.
    fn symbols(&self, operation: &'static str, lhs: &str, rhs: &str);

    /// Called before an operation that requires `lhs` and `rhs` to be the same unit.
    fn units(&self, operation: &'static str, lhs: &Unit, rhs: &Unit);
}

/// Panics on any violation.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictCheck;

impl ConsistencyCheck for StrictCheck {
    fn symbols(&self, operation: &'static str, lhs: &str, rhs: &str) {
        if let Err(violation) = verify_symbols(operation, lhs, rhs) {
            panic!("{}", violation);
        }
    }

    fn units(&self, operation: &'static str, lhs: &Unit, rhs: &Unit) {
        if let Err(violation) = verify_units(operation, lhs, rhs) {
            panic!("{}", violation);
        }
    }
}

/// Performs no verification.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveCheck;

impl ConsistencyCheck for PermissiveCheck {
    fn symbols(&self, operation: &'static str, _lhs: &str, _rhs: &str) {
        trace!("Skipping symbol check for {}", operation);
    }

    fn units(&self, operation: &'static str, _lhs: &Unit, _rhs: &Unit) {
        trace!("Skipping unit check for {}", operation);
    }
}

/// The process-wide choice of [`ConsistencyCheck`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckPolicy {
    Strict,
    Permissive,
}

impl CheckPolicy {
    /// The policy implied by the build configuration.
    pub const fn from_build() -> Self {
        if cfg!(feature = "permissive-checks") {
            CheckPolicy::Permissive
        } else if cfg!(any(debug_assertions, feature = "strict-checks")) {
            CheckPolicy::Strict
        } else {
            CheckPolicy::Permissive
        }
    }

    pub fn checker(self) -> &'static dyn ConsistencyCheck {
        match self {
            CheckPolicy::Strict => &StrictCheck,
            CheckPolicy::Permissive => &PermissiveCheck,
        }
    }
}

static POLICY: OnceLock<CheckPolicy> = OnceLock::new();

/// The active policy. The first call fixes it to the build default unless
/// [`set_check_policy`] ran earlier.
pub fn check_policy() -> CheckPolicy {
    *POLICY.get_or_init(|| {
        let policy = CheckPolicy::from_build();
        debug!("Unit check policy defaulted to {:?}", policy);
        policy
    })
}

/// Override the build default. Fails with the already active policy if the
/// policy was set, or already used, before this call.
pub fn set_check_policy(policy: CheckPolicy) -> Result<(), CheckPolicy> {
    POLICY.set(policy).map_err(|_| check_policy())?;
    debug!("Unit check policy set to {:?}", policy);
    Ok(())
}

pub(crate) fn active() -> &'static dyn ConsistencyCheck {
    check_policy().checker()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BaseUnit;

    #[test]
    fn test_verify_symbols() {
        assert!(verify_symbols("multiplication", "kg", "kg").is_ok());

        let err = verify_symbols("multiplication", "kg", "m").unwrap_err();
        assert_eq!(
            err,
            PreconditionViolation::SymbolMismatch {
                operation: "multiplication",
                lhs: "kg".to_string(),
                rhs: "m".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "Unit symbol mismatch in multiplication: 'kg' vs 'm'"
        );
    }

    #[test]
    fn test_verify_units_ignores_order() {
        let a: Unit = "kg m".parse().unwrap();
        let b: Unit = "m kg".parse().unwrap();
        let c: Unit = "kg s".parse().unwrap();

        assert!(verify_units("addition", &a, &b).is_ok());
        assert!(matches!(
            verify_units("addition", &a, &c),
            Err(PreconditionViolation::UnitMismatch { .. })
        ));
    }

    #[test]
    #[should_panic(expected = "Unit symbol mismatch in comparison")]
    fn test_strict_panics_on_symbol_mismatch() {
        StrictCheck.symbols("comparison", "kg", "m");
    }

    #[test]
    #[should_panic(expected = "Unit mismatch in addition")]
    fn test_strict_panics_on_unit_mismatch() {
        let a = Unit::from(BaseUnit::new("kg", 1));
        let b = Unit::from(BaseUnit::new("m", 1));
        StrictCheck.units("addition", &a, &b);
    }

    #[test]
    fn test_permissive_accepts_anything() {
        crate::test_utils::init_logging();
        let a = Unit::from(BaseUnit::new("kg", 1));
        let b = Unit::from(BaseUnit::new("m", 1));
        PermissiveCheck.symbols("comparison", "kg", "m");
        PermissiveCheck.units("addition", &a, &b);
    }

    #[test]
    fn test_policy_is_stable_once_used() {
        let policy = check_policy();
        assert_eq!(check_policy(), policy);
        assert_eq!(set_check_policy(CheckPolicy::Permissive), Err(policy));
    }

    #[test]
    fn test_build_default() {
        if cfg!(feature = "permissive-checks") {
            assert_eq!(CheckPolicy::from_build(), CheckPolicy::Permissive);
        } else if cfg!(debug_assertions) {
            assert_eq!(CheckPolicy::from_build(), CheckPolicy::Strict);
        }
    }
}
