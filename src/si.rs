//! SI base units as immutable statics.
//!
//! Each constant is the bare symbol with exponent one. Copy one out with
//! `.clone()` to build compound units:
//!
//! ```rust
//! use sciunits::{Unit, si};
//!
//! let velocity = Unit::from(si::M.clone()) / Unit::from(si::S.clone());
//! assert_eq!(velocity, "m s^-1".parse().unwrap());
//! ```

use crate::{BaseUnit, Rational};

pub static KG: BaseUnit = BaseUnit::from_static("kg", Rational::ONE);
pub static M: BaseUnit = BaseUnit::from_static("m", Rational::ONE);
pub static S: BaseUnit = BaseUnit::from_static("s", Rational::ONE);
pub static A: BaseUnit = BaseUnit::from_static("A", Rational::ONE);
pub static MOL: BaseUnit = BaseUnit::from_static("mol", Rational::ONE);
pub static K: BaseUnit = BaseUnit::from_static("K", Rational::ONE);
pub static CD: BaseUnit = BaseUnit::from_static("cd", Rational::ONE);

/// All SI base units, mass first.
pub fn base_units() -> [&'static BaseUnit; 7] {
    [&KG, &M, &S, &A, &MOL, &K, &CD]
}

/// Look up an SI base unit by symbol.
pub fn lookup(symbol: &str) -> Option<&'static BaseUnit> {
    base_units()
        .into_iter()
        .find(|unit| unit.symbol() == symbol)
}

/// True if every entry of `unit` uses an SI base symbol.
pub fn is_si(unit: &crate::Unit) -> bool {
    unit.iter().all(|entry| lookup(entry.symbol()).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Unit;

    #[test]
    fn test_constants_have_unit_exponent() {
        for unit in base_units() {
            assert_eq!(unit.exponent(), Rational::ONE);
            assert_eq!(unit.to_string(), unit.symbol());
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("mol"), Some(&MOL));
        assert_eq!(lookup("kg").map(BaseUnit::symbol), Some("kg"));
        assert_eq!(lookup("lb"), None);
    }

    #[test]
    fn test_constants_compose() {
        let mut newton = Unit::from(KG.clone());
        newton *= &M;
        newton /= &S;
        newton /= &S;
        assert_eq!(newton, "kg m s^-2".parse().unwrap());
        assert!(is_si(&newton));
        assert!(!is_si(&"kg ft".parse().unwrap()));
    }
}
