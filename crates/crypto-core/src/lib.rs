//! # Crypto Core
//!
//! Curve-level building blocks for confidential balances on Jubjub, the
//! twisted Edwards curve embedded in the BLS12-381 scalar field.
//!
//! ## Components
//!
//! - [`config`]: process-wide curve parameters and generators
//! - [`elgamal`]: additively homomorphic twisted ElGamal ciphertexts
//! - [`transcript`]: Fiat-Shamir transcript utilities
//! - [`encoding`]: canonical string encodings of scalars, points and ciphertexts
//! - [`signature`]: Schnorr signatures over message hashes
//! - [`errors`]: the error taxonomy shared by the workspace

pub mod config;
pub mod elgamal;
pub mod encoding;
pub mod errors;
pub mod signature;
pub mod transcript;

// Re-export key types
pub use config::{params, AffineCoords, CurveParams, AMOUNT_BITS, SCALAR_BITS};
pub use elgamal::Ciphertext;
pub use errors::{
    CiphertextComponent, CryptoError, Error, ParseError, PointFault, Result, SegmentFault,
    SigningError, ValidationError,
};
pub use signature::{PrivateKey, PublicKey, Signature, Signer, SIGNATURE_SIZE};
pub use transcript::{Transcript, TranscriptRead, TranscriptWrite};

/// Scalar field of the Jubjub prime-order subgroup
pub type Scalar = jubjub::Fr;

/// Field over which Jubjub is defined; the BLS12-381 scalar field
pub type Base = bls12_381::Scalar;

/// Element of the Jubjub prime-order subgroup
pub type Point = jubjub::SubgroupPoint;
