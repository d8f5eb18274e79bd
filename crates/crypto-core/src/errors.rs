//! Error taxonomy shared by every crate in the workspace
//!
//! Four closed kinds: a malformed external representation ([`ParseError`]),
//! a well-formed but semantically invalid value ([`ValidationError`]), a
//! failed curve/proof check ([`CryptoError`]) and a failure of the signature
//! primitive ([`SigningError`]). Variants carry structured context so callers
//! can branch on them.

use thiserror::Error;

/// Result type for operations that may fail with any error kind
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of a malformed JSON segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentFault {
    /// Not valid JSON
    Syntax,
    /// Valid JSON with a missing, unknown or wrongly typed field
    Data,
    /// Input ended early
    Eof,
    /// Underlying reader failed
    Io,
}

/// Malformed external representation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The segment could not be decoded into the expected schema
    #[error("malformed segment ({fault:?}) at line {line}, column {column}")]
    Segment {
        fault: SegmentFault,
        line: usize,
        column: usize,
    },

    /// A numeric field does not hold an integer
    #[error("field `{field}` is not an integer")]
    NotAnInteger { field: &'static str },

    /// A string field is not valid hex
    #[error("field `{field}` is not valid hex")]
    InvalidHex { field: &'static str },

    /// A decoded field has the wrong length
    #[error("field `{field}` decodes to {actual} bytes, expected {expected}")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        let fault = match err.classify() {
            Category::Syntax => SegmentFault::Syntax,
            Category::Data => SegmentFault::Data,
            Category::Eof => SegmentFault::Eof,
            Category::Io => SegmentFault::Io,
        };
        ParseError::Segment {
            fault,
            line: err.line(),
            column: err.column(),
        }
    }
}

/// Structurally valid value that violates a semantic rule
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A value that must be unsigned was negative
    #[error("field `{field}` must not be negative")]
    Negative { field: &'static str },

    /// A value does not fit its protocol integer width
    #[error("field `{field}` exceeds its maximum of {max}")]
    OutOfRange { field: &'static str, max: u64 },

    /// The fee is larger than the balance it is paid from
    #[error("fee {fee} exceeds balance {balance}")]
    InsufficientBalance { balance: u64, fee: u64 },

    /// Secret keys must be non-zero
    #[error("secret key must not be zero")]
    ZeroSecretKey,

    /// The supplied public key does not belong to the supplied secret key
    #[error("public key does not match secret key")]
    KeyMismatch,
}

/// Why a point encoding was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointFault {
    /// The encoding does not describe a point on the curve
    NotOnCurve,
    /// The point is on the curve but outside the prime-order subgroup
    NotInSubgroup,
}

/// Which half of a ciphertext was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CiphertextComponent {
    Left,
    Right,
}

/// Failed curve, ciphertext or proof check
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// A point failed on-curve or subgroup validation
    #[error("field `{field}` is not a valid point ({fault:?})")]
    InvalidPoint {
        field: &'static str,
        fault: PointFault,
    },

    /// A ciphertext component failed point validation
    #[error("field `{field}` is not a valid ciphertext ({component:?}: {fault:?})")]
    InvalidCiphertext {
        field: &'static str,
        component: CiphertextComponent,
        fault: PointFault,
    },

    /// A scalar encoding is not reduced modulo the group order
    #[error("field `{field}` is not a canonical scalar")]
    NonCanonicalScalar { field: &'static str },

    /// The identity point cannot serve as a public key
    #[error("public key is the identity point")]
    IdentityPublicKey,

    /// A ciphertext does not encrypt the claimed balance under the key
    #[error("ciphertext does not open to the claimed balance")]
    CiphertextMismatch,

    /// A proof failed native verification
    #[error("{proof} proof failed native verification")]
    ProofRejected { proof: &'static str },
}

/// Failure inside the signature primitive
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SigningError {
    /// The operating system RNG could not supply nonce material
    #[error("randomness source failed")]
    Randomness,

    /// The derived nonce was zero
    #[error("derived a zero nonce")]
    DegenerateNonce,
}

/// Any error produced by this workspace
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("signing error: {0}")]
    Signing(#[from] SigningError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_errors_are_classified() {
        let err = serde_json::from_str::<serde_json::Value>("{\"a\": ").unwrap_err();
        match ParseError::from(err) {
            ParseError::Segment { fault, line, .. } => {
                assert_eq!(fault, SegmentFault::Eof);
                assert_eq!(line, 1);
            }
            other => panic!("unexpected {other:?}"),
        }

        let err = serde_json::from_str::<serde_json::Value>("{a}").unwrap_err();
        assert!(matches!(
            ParseError::from(err),
            ParseError::Segment {
                fault: SegmentFault::Syntax,
                ..
            }
        ));
    }

    #[test]
    fn test_umbrella_conversion_keeps_kind() {
        let err: Error = ValidationError::Negative { field: "nonce" }.into();
        assert_eq!(err, Error::Validation(ValidationError::Negative { field: "nonce" }));

        let err: Error = CryptoError::ProofRejected { proof: "unlock" }.into();
        assert!(matches!(err, Error::Crypto(_)));
        assert_eq!(err.to_string(), "crypto error: unlock proof failed native verification");
    }
}
