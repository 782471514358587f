//! Property tests for text round trips and arithmetic identities.

use proptest::prelude::*;
use sciunits::{BaseUnit, Rational, Unit};

fn nonzero() -> impl Strategy<Value = i64> {
    prop_oneof![-1000i64..=-1, 1i64..=1000]
}

fn rational() -> impl Strategy<Value = Rational> {
    (-1000i64..=1000, 1i64..=1000).prop_map(|(n, d)| Rational::new(n, d))
}

fn nonzero_rational() -> impl Strategy<Value = Rational> {
    (nonzero(), 1i64..=1000).prop_map(|(n, d)| Rational::new(n, d))
}

fn symbol() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,4}"
}

fn unit() -> impl Strategy<Value = Unit> {
    proptest::collection::btree_map(symbol(), nonzero_rational(), 0..6).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(symbol, exponent)| BaseUnit::new(symbol, exponent.simplified()))
            .collect()
    })
}

proptest! {
    #[test]
    fn rational_text_round_trip(r in rational()) {
        let parsed: Rational = r.to_string().parse().unwrap();
        prop_assert_eq!(parsed, r);
    }

    #[test]
    fn rational_addition_matches_cross_multiplication(a in rational(), b in rational()) {
        let sum = a + b;
        if a.denom() != b.denom() {
            prop_assert_eq!(
                sum,
                Rational::new(a.numer() * b.denom() + b.numer() * a.denom(), a.denom() * b.denom())
            );
        }
        prop_assert!((sum.to_f64() - (a.to_f64() + b.to_f64())).abs() < 1e-9);
    }

    #[test]
    fn simplify_preserves_value(r in nonzero_rational()) {
        let reduced = r.simplified();
        prop_assert_eq!(reduced.numer() * r.denom(), r.numer() * reduced.denom());
        prop_assert!(reduced.denom() > 0);
        prop_assert_eq!(reduced.simplified(), reduced);
    }

    #[test]
    fn unit_text_round_trip(u in unit()) {
        let parsed: Unit = u.to_string().parse().unwrap();
        prop_assert_eq!(parsed, u);
    }

    #[test]
    fn unit_double_negation(u in unit()) {
        prop_assert_eq!(-(-u.clone()), u);
    }

    #[test]
    fn unit_times_inverse_is_dimensionless(u in unit()) {
        let product = &u * &(-&u);
        prop_assert!(product.is_dimensionless());
        prop_assert_eq!(product.len(), u.len());
    }
}
