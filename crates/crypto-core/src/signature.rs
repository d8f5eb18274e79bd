//! Schnorr signatures over Jubjub
//!
//! A signature is `(R, s)` with `R = k·G`, `s = k + e·sk` and
//! `e = H(R ‖ Pk ‖ msg)`. Nonces are hedged: derived from the secret key, the
//! message and fresh randomness, so a weak RNG alone never repeats `k`.

use crate::encoding::{
    decode_point, decode_scalar, parse_point, parse_scalar, point_to_hex, ELEMENT_SIZE,
};
use crate::errors::{CryptoError, ParseError, Result, SigningError, ValidationError};
use crate::{params, Point, Scalar};
use blake2::{Blake2b512, Digest};
use ff::Field;
use group::{Group, GroupEncoding};
use log::warn;
use rand::rngs::OsRng;
use rand_core::{CryptoRng, RngCore};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use zeroize::{DefaultIsZeroes, Zeroize, ZeroizeOnDrop};

/// Size in bytes of an encoded signature
pub const SIGNATURE_SIZE: usize = 2 * ELEMENT_SIZE;

const CHALLENGE_DOMAIN: &[u8] = b"crypto-core/schnorr/challenge/v1";
const NONCE_DOMAIN: &[u8] = b"crypto-core/schnorr/nonce/v1";

/// Anything that can sign a message hash
pub trait Signer {
    /// Key that verifies this signer's signatures
    fn public_key(&self) -> PublicKey;

    /// Sign a message hash
    fn sign(&self, message: &[u8]) -> std::result::Result<Signature, SigningError>;
}

#[derive(Clone, Copy, Default)]
struct SecretScalar(Scalar);

impl DefaultIsZeroes for SecretScalar {}

/// A non-zero secret scalar, wiped on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    secret: SecretScalar,
}

impl PrivateKey {
    /// Wrap a scalar, rejecting zero
    pub fn from_scalar(scalar: Scalar) -> std::result::Result<Self, ValidationError> {
        if bool::from(scalar.is_zero()) {
            return Err(ValidationError::ZeroSecretKey);
        }
        Ok(Self {
            secret: SecretScalar(scalar),
        })
    }

    /// Parse a big-endian hex scalar
    pub fn from_hex(value: &str) -> Result<Self> {
        let scalar = parse_scalar("sk", value)?;
        Ok(Self::from_scalar(scalar)?)
    }

    /// Sample a fresh key
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        loop {
            let scalar = Scalar::random(&mut *rng);
            if let Ok(key) = Self::from_scalar(scalar) {
                return key;
            }
        }
    }

    /// The secret scalar
    pub fn as_scalar(&self) -> &Scalar {
        &self.secret.0
    }

    /// Sign with nonce randomness drawn from `rng`
    pub fn sign_with_rng<R: RngCore + CryptoRng>(
        &self,
        message: &[u8],
        rng: &mut R,
    ) -> std::result::Result<Signature, SigningError> {
        let mut entropy = [0u8; 32];
        rng.try_fill_bytes(&mut entropy).map_err(|err| {
            warn!("nonce randomness unavailable: {err}");
            SigningError::Randomness
        })?;

        let mut sk_bytes = self.as_scalar().to_bytes();
        let digest = Blake2b512::new()
            .chain_update(NONCE_DOMAIN)
            .chain_update(sk_bytes)
            .chain_update(message)
            .chain_update(entropy)
            .finalize();
        sk_bytes.zeroize();
        entropy.zeroize();

        let mut wide = [0u8; 64];
        wide.copy_from_slice(&digest);
        let k = Scalar::from_bytes_wide(&wide);
        wide.zeroize();
        if bool::from(k.is_zero()) {
            return Err(SigningError::DegenerateNonce);
        }

        let pk = self.public_key();
        let r = params().g * k;
        let e = challenge(&r, pk.as_point(), message);
        Ok(Signature {
            r,
            s: k + e * self.as_scalar(),
        })
    }
}

impl Signer for PrivateKey {
    fn public_key(&self) -> PublicKey {
        PublicKey(params().g * self.as_scalar())
    }

    fn sign(&self, message: &[u8]) -> std::result::Result<Signature, SigningError> {
        self.sign_with_rng(message, &mut OsRng)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

/// A signature verification key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey(Point);

impl PublicKey {
    /// Wrap a subgroup point, rejecting the identity
    pub fn from_point(point: Point) -> std::result::Result<Self, CryptoError> {
        if bool::from(point.is_identity()) {
            return Err(CryptoError::IdentityPublicKey);
        }
        Ok(Self(point))
    }

    /// Parse the hex of a compressed point
    pub fn from_hex(value: &str) -> Result<Self> {
        Ok(Self::from_point(parse_point("pk", value)?)?)
    }

    pub fn to_hex(&self) -> String {
        point_to_hex(&self.0)
    }

    pub fn as_point(&self) -> &Point {
        &self.0
    }

    /// Check `s·G == R + e·Pk`
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        let e = challenge(&signature.r, &self.0, message);
        let valid = params().g * signature.s == signature.r + self.0 * e;
        if !valid {
            warn!("signature rejected for public key {}", self.to_hex());
        }
        valid
    }
}

/// A Schnorr signature `(R, s)`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature {
    r: Point,
    s: Scalar,
}

impl Signature {
    /// `R ‖ s`, each in its 32-byte little-endian encoding
    pub fn to_bytes(&self) -> [u8; SIGNATURE_SIZE] {
        let mut out = [0u8; SIGNATURE_SIZE];
        out[..ELEMENT_SIZE].copy_from_slice(&self.r.to_bytes());
        out[ELEMENT_SIZE..].copy_from_slice(&self.s.to_bytes());
        out
    }

    pub fn from_bytes(bytes: &[u8; SIGNATURE_SIZE]) -> Result<Self> {
        let mut r = [0u8; ELEMENT_SIZE];
        let mut s = [0u8; ELEMENT_SIZE];
        r.copy_from_slice(&bytes[..ELEMENT_SIZE]);
        s.copy_from_slice(&bytes[ELEMENT_SIZE..]);

        let r = decode_point(&r).map_err(|fault| CryptoError::InvalidPoint {
            field: "signature",
            fault,
        })?;
        let s = decode_scalar("signature", &s)?;
        Ok(Self { r, s })
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    pub fn from_hex(value: &str) -> Result<Self> {
        let bytes = hex::decode(value).map_err(|_| ParseError::InvalidHex { field: "signature" })?;
        let bytes = <[u8; SIGNATURE_SIZE]>::try_from(bytes.as_slice()).map_err(|_| {
            ParseError::InvalidLength {
                field: "signature",
                expected: SIGNATURE_SIZE,
                actual: bytes.len(),
            }
        })?;
        Self::from_bytes(&bytes)
    }
}

impl Serialize for Signature {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(D::Error::custom)
    }
}

fn challenge(r: &Point, pk: &Point, message: &[u8]) -> Scalar {
    let digest = Blake2b512::new()
        .chain_update(CHALLENGE_DOMAIN)
        .chain_update(r.to_bytes())
        .chain_update(pk.to_bytes())
        .chain_update(message)
        .finalize();
    let mut wide = [0u8; 64];
    wide.copy_from_slice(&digest);
    Scalar::from_bytes_wide(&wide)
}
