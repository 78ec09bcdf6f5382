//! Literal conversion
//!
//! Decimal integer literals of any size become exact (and canonical);
//! literals with a decimal point or exponent become flonums. The special
//! flonums use the reader's spelling: `+inf.0`, `-inf.0`, `+nan.0`.

use std::str::FromStr;

use num_bigint::BigInt;

use super::number::Number;
use crate::error::NumericError;

impl FromStr for Number {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => return Err(NumericError::parse(s, "empty literal")),
            "+inf.0" => return Ok(Self::flonum(f64::INFINITY)),
            "-inf.0" => return Ok(Self::flonum(f64::NEG_INFINITY)),
            "+nan.0" | "-nan.0" => return Ok(Self::flonum(f64::NAN)),
            _ => {}
        }

        let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
        if digits.is_empty() {
            return Err(NumericError::parse(s, "sign without digits"));
        }

        if digits.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(small) = s.parse::<i64>() {
                return Ok(Self::fixnum(small));
            }
            return s
                .parse::<BigInt>()
                .map(Self::from_bigint)
                .map_err(|_| NumericError::parse(s, "invalid integer"));
        }

        let well_formed = digits.bytes().any(|b| b.is_ascii_digit())
            && digits
                .bytes()
                .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
        if !well_formed {
            return Err(NumericError::parse(s, "unexpected character"));
        }
        s.parse::<f64>()
            .map(Self::flonum)
            .map_err(|_| NumericError::parse(s, "invalid decimal"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NumberKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_fixnum() {
        assert_eq!("42".parse::<Number>(), Ok(Number::fixnum(42)));
        assert_eq!("-7".parse::<Number>(), Ok(Number::fixnum(-7)));
        assert_eq!("+7".parse::<Number>(), Ok(Number::fixnum(7)));
        assert_eq!(
            "-9223372036854775808".parse::<Number>(),
            Ok(Number::fixnum(i64::MIN))
        );
    }

    #[test]
    fn test_parse_bignum() {
        let n: Number = "9223372036854775808".parse().expect("valid");
        assert_eq!(n.kind(), NumberKind::Bignum);
        assert_eq!(n.to_string(), "9223372036854775808");

        let n: Number = "-10000000000000000000000000001".parse().expect("valid");
        assert_eq!(n.kind(), NumberKind::Bignum);
        assert!(n.is_negative());
    }

    #[test]
    fn test_parse_flonum() {
        assert_eq!("1.5".parse::<Number>(), Ok(Number::flonum(1.5)));
        assert_eq!("-2.0".parse::<Number>(), Ok(Number::flonum(-2.0)));
        assert_eq!("1e3".parse::<Number>(), Ok(Number::flonum(1000.0)));
        assert_eq!(".5".parse::<Number>(), Ok(Number::flonum(0.5)));
        assert_eq!("+inf.0".parse::<Number>(), Ok(Number::flonum(f64::INFINITY)));
        assert!("+nan.0".parse::<Number>().expect("valid").to_f64().is_nan());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "-", "abc", "12x", "1_000", "inf", "NaN", "1.2.3", "."] {
            let err = bad.parse::<Number>().unwrap_err();
            assert!(
                matches!(err, NumericError::Parse { .. }),
                "expected parse error for {bad:?}"
            );
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for literal in ["0", "-12", "123456789012345678901234567890", "2.5", "-0.125"] {
            let n: Number = literal.parse().expect("valid");
            assert_eq!(n.to_string(), literal);
        }
    }
}
