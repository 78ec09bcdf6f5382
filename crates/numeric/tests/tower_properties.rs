//! Property-based tests for the numeric tower
//!
//! Exact results are checked against `BigInt` arithmetic, which never
//! overflows, so any wrapped or truncated machine result shows up as a
//! mismatch.

use std::cmp::Ordering;

use nebula_numeric::{Number, NumberKind, normalize};
use num_bigint::BigInt;
use proptest::prelude::*;

fn exact(n: &Number) -> BigInt {
    n.to_bigint().expect("exact result")
}

fn assert_canonical(n: &Number) -> Result<(), TestCaseError> {
    if let Number::Bignum(big) = n {
        prop_assert!(big.to_fixnum_checked().is_err(), "{} should be a fixnum", n);
    }
    Ok(())
}

/// Exact integers of either representation
fn any_exact() -> impl Strategy<Value = Number> {
    prop_oneof![
        any::<i64>().prop_map(Number::fixnum),
        (any::<i64>(), 1..4_usize).prop_map(|(x, words)| normalize(BigInt::from(x) << (64 * words))),
        any::<i128>().prop_map(Number::from),
    ]
}

// ===== OVERFLOW AND PROMOTION =====

proptest! {
    #[test]
    fn add_matches_bigint(a in any::<i64>(), b in any::<i64>()) {
        let sum = Number::fixnum(a).add(&Number::fixnum(b)).unwrap();
        prop_assert_eq!(exact(&sum), BigInt::from(a) + b);
        assert_canonical(&sum)?;
    }

    #[test]
    fn sub_matches_bigint(a in any::<i64>(), b in any::<i64>()) {
        let difference = Number::fixnum(a).sub(&Number::fixnum(b)).unwrap();
        prop_assert_eq!(exact(&difference), BigInt::from(a) - b);
        assert_canonical(&difference)?;
    }

    #[test]
    fn mul_matches_bigint(a in any::<i64>(), b in any::<i64>()) {
        let product = Number::fixnum(a).mul(&Number::fixnum(b)).unwrap();
        prop_assert_eq!(exact(&product), BigInt::from(a) * b);
        assert_canonical(&product)?;
    }

    #[test]
    fn exact_arithmetic_is_canonical(a in any_exact(), b in any_exact()) {
        for result in [a.add(&b), a.sub(&b), a.mul(&b), a.bitwise_and(&b), a.bitwise_xor(&b)] {
            assert_canonical(&result.unwrap())?;
        }
    }

    #[test]
    fn negation_round_trips(a in any_exact()) {
        let negated = a.unary_sub().unwrap();
        assert_canonical(&negated)?;
        prop_assert_eq!(negated.unary_sub().unwrap(), a);
    }
}

// ===== NORMALIZATION =====

proptest! {
    #[test]
    fn fixnum_round_trips_through_bigint(x in any::<i64>()) {
        prop_assert_eq!(normalize(BigInt::from(x)), Number::fixnum(x));
    }

    #[test]
    fn display_round_trips_through_parse(a in any_exact()) {
        let parsed: Number = a.to_string().parse().unwrap();
        prop_assert_eq!(parsed, a);
    }
}

// ===== DIVISION =====

proptest! {
    #[test]
    fn floor_division_identity(a in any_exact(), b in any_exact()) {
        prop_assume!(!b.is_zero());
        let q = a.floor_div(&b).unwrap();
        let r = a.modulo(&b).unwrap();
        assert_canonical(&q)?;
        assert_canonical(&r)?;
        prop_assert_eq!(exact(&q) * exact(&b) + exact(&r), exact(&a));
        // remainder takes the sign of the divisor
        prop_assert!(r.is_zero() || r.is_negative() == b.is_negative());
    }

    #[test]
    fn div_matches_floor_div_on_exact(a in any_exact(), b in any_exact()) {
        prop_assume!(!b.is_zero());
        prop_assert_eq!(a.div(&b), a.floor_div(&b));
    }
}

// ===== CONTAGION =====

proptest! {
    #[test]
    fn inexact_operand_is_contagious(x in any::<i64>(), f in -1e12..1e12_f64) {
        prop_assume!(x != 0);
        let exact = Number::fixnum(x);
        let inexact = Number::flonum(f);
        for result in [exact.add(&inexact), inexact.sub(&exact), exact.mul(&inexact), inexact.max(&exact)] {
            prop_assert_eq!(result.unwrap().kind(), NumberKind::Flonum);
        }
    }
}

// ===== SHIFTS, BITS AND ORDER =====

proptest! {
    #[test]
    fn shift_left_then_right_is_identity(a in any_exact(), n in 0..300_i64) {
        let shifted = a.shift_left(&Number::fixnum(n)).unwrap();
        prop_assert_eq!(exact(&shifted), exact(&a) << n as usize);
        prop_assert_eq!(shifted.shift_right(&Number::fixnum(n)).unwrap(), a);
    }

    #[test]
    fn bitwise_not_is_minus_x_minus_one(a in any_exact()) {
        let not = a.bitwise_not().unwrap();
        assert_canonical(&not)?;
        prop_assert_eq!(exact(&not), -exact(&a) - 1);
    }

    #[test]
    fn compare_matches_bigint_order(a in any_exact(), b in any_exact()) {
        prop_assert_eq!(a.compare(&b), Some(exact(&a).cmp(&exact(&b))));
    }

    #[test]
    fn compare_with_own_float_is_consistent(x in any::<i64>()) {
        // the double nearest to x compares exactly, never by rounding x
        let f = x as f64;
        let expected: Ordering = BigInt::from(x).cmp(&BigInt::from(f as i128));
        prop_assert_eq!(Number::fixnum(x).compare(&Number::flonum(f)), Some(expected));
    }
}
