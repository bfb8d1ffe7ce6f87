//! Property-based tests for fraction arithmetic.

use crate::math::MathContext;
use crate::{Fraction, Number};
use num_bigint::BigInt;
use proptest::prelude::*;

// Strategy for generating small integers
fn small_int() -> impl Strategy<Value = i64> {
    -1000i64..1000i64
}

// Strategy for generating non-zero integers
fn non_zero_int() -> impl Strategy<Value = i64> {
    prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
}

// Fractions with arbitrary signs on either part
fn fraction() -> impl Strategy<Value = Fraction> {
    (small_int(), non_zero_int()).prop_map(|(n, d)| Fraction::new(n, d).unwrap())
}

fn non_zero_fraction() -> impl Strategy<Value = Fraction> {
    (non_zero_int(), non_zero_int()).prop_map(|(n, d)| Fraction::new(n, d).unwrap())
}

proptest! {
    // Canonical form

    #[test]
    fn reduce_is_idempotent(f in fraction()) {
        let once = f.reduced();
        let twice = once.reduced();
        prop_assert_eq!(once.numerator(), twice.numerator());
        prop_assert_eq!(once.denominator(), twice.denominator());
    }

    #[test]
    fn reduce_makes_denominator_positive(n in small_int(), d in non_zero_int()) {
        let mut raw = Fraction::from(1);
        raw.set_numerator(n).unwrap();
        raw.set_denominator(d).unwrap();
        raw.reduce();
        prop_assert!(raw.denominator() > &BigInt::from(0));

        let mut raw = Fraction::from(1);
        raw.set_numerator(n).unwrap();
        raw.set_denominator(d).unwrap();
        raw.fix_negative();
        prop_assert!(raw.denominator() > &BigInt::from(0));
    }

    // Arithmetic identities

    #[test]
    fn plus_then_minus_is_identity(a in fraction(), b in fraction()) {
        prop_assert!(a.plus(&b).unwrap().minus(&b).unwrap().eq(&a));
    }

    #[test]
    fn times_then_divide_is_identity(a in fraction(), b in non_zero_fraction()) {
        prop_assert!(a.times(&b).unwrap().divide(&b).unwrap().eq(&a));
        prop_assert!(a.divide(&b).unwrap().times(&b).unwrap().eq(&a));
    }

    #[test]
    fn reciprocal_is_an_involution(a in non_zero_fraction()) {
        prop_assert!(a.reciprocal().unwrap().reciprocal().unwrap().eq(&a));
    }

    #[test]
    fn ordering_agrees_with_subtraction(a in fraction(), b in fraction()) {
        prop_assert_eq!(a < b, a.minus(&b).unwrap().is_negative());
        prop_assert_eq!(a.lt(&b), a < b);
    }

    // Parsing

    #[test]
    fn display_round_trips(f in fraction()) {
        match Fraction::parse_fraction(&f.to_string()) {
            Number::Finite(parsed) => prop_assert!(parsed.eq(&f)),
            Number::NaN => prop_assert!(false, "{} parsed as NaN", f),
        }
    }

    #[test]
    fn decimal_strings_round_trip(whole in 0u32..100_000, cents in 0u32..100) {
        let text = format!("{}.{:02}", whole, cents);
        prop_assert_eq!(text.parse::<Fraction>().unwrap().as_decimal(2), text);
    }

    // Math library

    #[test]
    fn sqrt_squares_back(n in 1i64..10_000) {
        let ctx = MathContext::new(20);
        let root = ctx.sqrt(n).unwrap();
        let error = root.times(&root).unwrap().minus(n).unwrap().abs();
        prop_assert!(error.lt("1e-15"));
    }

    #[test]
    fn integer_pow_matches_repeated_multiplication(f in non_zero_fraction(), k in 0u32..6) {
        let ctx = MathContext::fast();
        let mut expected = Fraction::one();
        for _ in 0..k {
            expected = expected.times(&f).unwrap();
        }
        prop_assert!(ctx.pow(&f, k).unwrap().eq(&expected));
        prop_assert!(ctx.pow(&f, -(k as i64)).unwrap().eq(expected.reciprocal().unwrap()));
    }
}
