//! Canonical string encodings
//!
//! Scalars are 64 hex characters in big-endian order. Points are the hex of
//! Jubjub's 32-byte compressed encoding and ciphertexts are `CL ‖ CR`.
//! Parsing fails closed: a string that does not describe a canonical scalar
//! or a prime-order point is an error, never a default value.

use crate::errors::{
    CiphertextComponent, CryptoError, ParseError, PointFault, Result, ValidationError,
};
use crate::{Ciphertext, Point, Scalar};
use group::cofactor::CofactorGroup;
use group::GroupEncoding;
use jubjub::ExtendedPoint;
use serde_json::Number;

/// Size in bytes of an encoded scalar or point
pub const ELEMENT_SIZE: usize = 32;

/// Size in bytes of an encoded ciphertext
pub const CIPHERTEXT_SIZE: usize = 2 * ELEMENT_SIZE;

fn decode_hex<const N: usize>(
    field: &'static str,
    value: &str,
) -> std::result::Result<[u8; N], ParseError> {
    let value = value.strip_prefix("0x").unwrap_or(value);
    let bytes = hex::decode(value).map_err(|_| ParseError::InvalidHex { field })?;
    <[u8; N]>::try_from(bytes.as_slice()).map_err(|_| ParseError::InvalidLength {
        field,
        expected: N,
        actual: bytes.len(),
    })
}

/// Decode a little-endian scalar representation, rejecting values `≥ order`
pub fn decode_scalar(
    field: &'static str,
    bytes: &[u8; ELEMENT_SIZE],
) -> std::result::Result<Scalar, CryptoError> {
    Option::from(Scalar::from_bytes(bytes)).ok_or(CryptoError::NonCanonicalScalar { field })
}

/// Decode a compressed point, requiring it to be on the curve and in the prime-order subgroup
pub fn decode_point(bytes: &[u8; ELEMENT_SIZE]) -> std::result::Result<Point, PointFault> {
    let point = Option::<ExtendedPoint>::from(ExtendedPoint::from_bytes(bytes))
        .ok_or(PointFault::NotOnCurve)?;
    Option::from(point.into_subgroup()).ok_or(PointFault::NotInSubgroup)
}

/// Big-endian hex encoding of a scalar
pub fn scalar_to_hex(scalar: &Scalar) -> String {
    let mut bytes = scalar.to_bytes();
    bytes.reverse();
    hex::encode(bytes)
}

/// Parse a big-endian hex scalar
pub fn parse_scalar(field: &'static str, value: &str) -> Result<Scalar> {
    let mut bytes = decode_hex::<ELEMENT_SIZE>(field, value)?;
    bytes.reverse();
    Ok(decode_scalar(field, &bytes)?)
}

/// Hex encoding of a compressed point
pub fn point_to_hex(point: &Point) -> String {
    hex::encode(point.to_bytes())
}

/// Parse a hex point, validating curve and subgroup membership
pub fn parse_point(field: &'static str, value: &str) -> Result<Point> {
    let bytes = decode_hex::<ELEMENT_SIZE>(field, value)?;
    decode_point(&bytes).map_err(|fault| CryptoError::InvalidPoint { field, fault }.into())
}

/// Hex encoding of `CL ‖ CR`
pub fn ciphertext_to_hex(ciphertext: &Ciphertext) -> String {
    let mut bytes = Vec::with_capacity(CIPHERTEXT_SIZE);
    bytes.extend_from_slice(&ciphertext.left().to_bytes());
    bytes.extend_from_slice(&ciphertext.right().to_bytes());
    hex::encode(bytes)
}

/// Parse a hex ciphertext, validating both components
pub fn parse_ciphertext(field: &'static str, value: &str) -> Result<Ciphertext> {
    let bytes = decode_hex::<CIPHERTEXT_SIZE>(field, value)?;
    let mut left = [0u8; ELEMENT_SIZE];
    let mut right = [0u8; ELEMENT_SIZE];
    left.copy_from_slice(&bytes[..ELEMENT_SIZE]);
    right.copy_from_slice(&bytes[ELEMENT_SIZE..]);

    let left = decode_point(&left).map_err(|fault| CryptoError::InvalidCiphertext {
        field,
        component: CiphertextComponent::Left,
        fault,
    })?;
    let right = decode_point(&right).map_err(|fault| CryptoError::InvalidCiphertext {
        field,
        component: CiphertextComponent::Right,
        fault,
    })?;
    Ok(Ciphertext::new(left, right))
}

/// 2^64, the first float no `u64` can hold
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Convert a JSON number into an unsigned integer no larger than `max`
///
/// The sign is checked first, so a negative value (including `-0`) is always
/// a validation failure. A float above `max` is out of range. Any other float,
/// integral or not (`5.0`, `5e0`, `1.5`), is not an integer.
pub fn number_to_uint(field: &'static str, number: &Number, max: u64) -> Result<u64> {
    if let Some(value) = number.as_u64() {
        return if value <= max {
            Ok(value)
        } else {
            Err(ValidationError::OutOfRange { field, max }.into())
        };
    }
    if number.as_i64().is_some() {
        return Err(ValidationError::Negative { field }.into());
    }
    match number.as_f64() {
        Some(value) if value.is_sign_negative() => Err(ValidationError::Negative { field }.into()),
        Some(value) if value >= U64_LIMIT || value > max as f64 => {
            Err(ValidationError::OutOfRange { field, max }.into())
        }
        _ => Err(ParseError::NotAnInteger { field }.into()),
    }
}

/// A 32-bit protocol integer (indices, asset and chain ids)
pub fn number_to_u32(field: &'static str, number: &Number) -> Result<u32> {
    let value = number_to_uint(field, number, u32::MAX as u64)?;
    Ok(value as u32)
}

/// A 64-bit protocol integer (amounts, nonces)
pub fn number_to_u64(field: &'static str, number: &Number) -> Result<u64> {
    number_to_uint(field, number, u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::params;
    use ff::Field;
    use group::Group;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn number(text: &str) -> Number {
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn test_number_bounds() {
        assert_eq!(number_to_u32("asset_id", &number("0")).unwrap(), 0);
        assert_eq!(number_to_u32("asset_id", &number("4294967295")).unwrap(), u32::MAX);
        assert_eq!(
            number_to_u32("asset_id", &number("4294967296")),
            Err(Error::Validation(ValidationError::OutOfRange {
                field: "asset_id",
                max: u32::MAX as u64
            }))
        );
        assert_eq!(
            number_to_u64("amount", &number("18446744073709551615")).unwrap(),
            u64::MAX
        );
        assert_eq!(
            number_to_u64("amount", &number("18446744073709551616")),
            Err(Error::Validation(ValidationError::OutOfRange {
                field: "amount",
                max: u64::MAX
            }))
        );
    }

    #[test]
    fn test_number_sign_and_fraction() {
        assert_eq!(
            number_to_u32("account_index", &number("-1")),
            Err(Error::Validation(ValidationError::Negative {
                field: "account_index"
            }))
        );
        assert_eq!(
            number_to_u64("nonce", &number("-0.5")),
            Err(Error::Validation(ValidationError::Negative { field: "nonce" }))
        );
        assert_eq!(
            number_to_u64("nonce", &number("1.5")),
            Err(Error::Parse(ParseError::NotAnInteger { field: "nonce" }))
        );
    }

    #[test]
    fn test_integral_floats_and_negative_zero() {
        for text in ["5.0", "5e0", "4294967295.0"] {
            assert_eq!(
                number_to_u32("asset_id", &number(text)),
                Err(Error::Parse(ParseError::NotAnInteger { field: "asset_id" })),
                "{text}"
            );
        }
        assert_eq!(
            number_to_u32("asset_id", &number("4294967296.0")),
            Err(Error::Validation(ValidationError::OutOfRange {
                field: "asset_id",
                max: u32::MAX as u64
            }))
        );
        assert_eq!(
            number_to_u64("amount", &number("1e30")),
            Err(Error::Validation(ValidationError::OutOfRange {
                field: "amount",
                max: u64::MAX
            }))
        );
        for text in ["-0", "-0.0"] {
            assert_eq!(
                number_to_u64("nonce", &number(text)),
                Err(Error::Validation(ValidationError::Negative { field: "nonce" })),
                "{text}"
            );
        }
    }

    #[test]
    fn test_scalar_hex_is_big_endian() {
        let s = Scalar::from(0x0102u64);
        let encoded = scalar_to_hex(&s);
        assert_eq!(encoded.len(), 64);
        assert!(encoded.ends_with("0102"));
        assert_eq!(parse_scalar("s", &encoded).unwrap(), s);
        assert_eq!(parse_scalar("s", &format!("0x{encoded}")).unwrap(), s);
    }

    #[test]
    fn test_scalar_above_order_is_rejected() {
        let all_ones = "f".repeat(64);
        assert_eq!(
            parse_scalar("z_sk", &all_ones),
            Err(Error::Crypto(CryptoError::NonCanonicalScalar { field: "z_sk" }))
        );
    }

    #[test]
    fn test_malformed_strings() {
        assert_eq!(
            parse_point("pk", "zz"),
            Err(Error::Parse(ParseError::InvalidHex { field: "pk" }))
        );
        assert_eq!(
            parse_point("pk", "00"),
            Err(Error::Parse(ParseError::InvalidLength {
                field: "pk",
                expected: 32,
                actual: 1
            }))
        );
        assert!(matches!(
            parse_ciphertext("c_fee", &"00".repeat(32)),
            Err(Error::Parse(ParseError::InvalidLength { expected: 64, .. }))
        ));
    }

    #[test]
    fn test_point_roundtrip_and_off_curve() {
        let p = params().g * Scalar::from(7u64);
        assert_eq!(parse_point("pk", &point_to_hex(&p)).unwrap(), p);

        // v = 2 has no matching u on Jubjub
        let mut bytes = [0u8; 32];
        bytes[0] = 2;
        let err = parse_point("pk", &hex::encode(bytes)).unwrap_err();
        assert_eq!(
            err,
            Error::Crypto(CryptoError::InvalidPoint {
                field: "pk",
                fault: PointFault::NotOnCurve
            })
        );
    }

    #[test]
    fn test_small_order_point_is_rejected() {
        // (0, -1) has order two
        let small = jubjub::AffinePoint::from_raw_unchecked(crate::Base::ZERO, -crate::Base::ONE);
        let bytes = small.to_bytes();
        let err = parse_point("t_fee", &hex::encode(bytes)).unwrap_err();
        assert_eq!(
            err,
            Error::Crypto(CryptoError::InvalidPoint {
                field: "t_fee",
                fault: PointFault::NotInSubgroup
            })
        );
    }

    #[test]
    fn test_ciphertext_roundtrip_and_bad_component() {
        let mut rng = StdRng::seed_from_u64(3);
        let pk = Point::random(&mut rng);
        let c = Ciphertext::encrypt(42, &pk, &Scalar::random(&mut rng));
        assert_eq!(parse_ciphertext("c_fee", &ciphertext_to_hex(&c)).unwrap(), c);

        let mut bad = ciphertext_to_hex(&c);
        let mut bytes = [0u8; 32];
        bytes[0] = 2;
        bad.replace_range(64.., &hex::encode(bytes));
        assert_eq!(
            parse_ciphertext("c_fee", &bad).unwrap_err(),
            Error::Crypto(CryptoError::InvalidCiphertext {
                field: "c_fee",
                component: CiphertextComponent::Right,
                fault: PointFault::NotOnCurve
            })
        );
    }
}
