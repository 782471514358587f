//! End-to-end behaviour of measured quantities.

use sciunits::{Quantity, QuantityError, Rational, Unit};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_kinetic_energy_units_and_uncertainty() {
    let mass = Quantity::parse_unit(2.0, 0.02, "kg").unwrap();
    let speed = Quantity::parse_unit(3.0, 0.03, "m s^-1").unwrap();

    let energy = mass * speed.powi(2) * 0.5;

    let mut joule: Unit = "kg m^2 s^-2".parse().unwrap();
    joule.simplify();
    let mut unit = energy.unit().clone();
    unit.simplify();
    assert_eq!(unit, joule);

    assert!(approx(energy.value(), 9.0));
    // 1% on mass, 2% on speed squared.
    assert!(approx(energy.relative_uncertainty(), (0.01f64.powi(2) + 0.02f64.powi(2)).sqrt()));
}

#[test]
fn test_pendulum_period_from_length() {
    let length = Quantity::parse_unit(1.0, 0.01, "m").unwrap();
    let gravity = Quantity::parse_unit(9.81, 0.0, "m s^-2").unwrap();

    let period = (length / gravity).sqrt() * (2.0 * std::f64::consts::PI);
    let mut unit = period.unit().clone();
    unit.simplify();

    assert_eq!(unit.get("s").map(|s| s.exponent()), Some(Rational::ONE));
    assert_eq!(unit.get("m").map(|m| m.exponent()), Some(Rational::ZERO));
    assert!(approx(period.value(), 2.0 * std::f64::consts::PI / 9.81f64.sqrt()));
    assert!(approx(period.relative_uncertainty(), 0.005));
}

#[test]
fn test_dimensionless_ratio_allows_logarithms() {
    let a = Quantity::parse_unit(100.0, 1.0, "kg").unwrap();
    let b = Quantity::parse_unit(10.0, 0.0, "kg").unwrap();

    let decades = (a / b).log10().unwrap();
    assert!(approx(decades.value(), 1.0));
    assert!(approx(
        decades.uncertainty(),
        0.1 / (10.0 * std::f64::consts::LN_10)
    ));
}

#[test]
fn test_dimensioned_exponent_is_rejected() {
    let t = Quantity::parse_unit(2.0, 0.0, "s").unwrap();
    assert!(matches!(
        t.exp(),
        Err(QuantityError::NotDimensionless { operation: "exp", .. })
    ));
}

#[test]
fn test_invalid_unit_text_is_reported() {
    assert!(Quantity::parse_unit(1.0, 0.0, "kg^").is_err());
}
