#![cfg(feature = "serde")]

use nebula_numeric::{Number, NumberKind, NumericLimits};
use num_bigint::BigInt;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn numbers_keep_their_kind() {
    let values = [
        Number::fixnum(-42),
        Number::from_bigint(BigInt::from(1) << 100),
        Number::flonum(2.5),
    ];
    for n in values {
        let encoded = serde_json::to_string(&n).unwrap();
        let decoded: Number = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, n);
        assert_eq!(decoded.kind(), n.kind());
    }
}

#[test]
fn tagged_layout() {
    let encoded = serde_json::to_value(Number::fixnum(7)).unwrap();
    assert_eq!(encoded, json!({ "kind": "fixnum", "value": 7 }));

    let encoded = serde_json::to_value(Number::flonum(0.5)).unwrap();
    assert_eq!(encoded, json!({ "kind": "flonum", "value": 0.5 }));

    assert_eq!(serde_json::to_value(NumberKind::Bignum).unwrap(), json!("bignum"));
}

#[test]
fn non_canonical_bignum_is_rejected() {
    let small = serde_json::to_value(BigInt::from(5)).unwrap();
    let forged = json!({ "kind": "bignum", "value": small });
    assert!(serde_json::from_value::<Number>(forged).is_err());
}

#[test]
fn limits_round_trip() {
    let limits = NumericLimits::strict();
    let encoded = serde_json::to_value(limits).unwrap();
    assert_eq!(encoded, json!({ "max_integer_bits": 65536 }));
    assert_eq!(serde_json::from_value::<NumericLimits>(encoded).unwrap(), limits);
}
