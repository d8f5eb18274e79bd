//! Transcript utilities for the Fiat-Shamir transformation
//!
//! A thin wrapper around Merlin. Field elements are absorbed as 32-byte
//! little-endian encodings, points as their affine `(u, v)` coordinates, and
//! challenges are 64 bytes of transcript output reduced into the scalar field.

use crate::config::AffineCoords;
use crate::{Base, Ciphertext, CurveParams, Scalar};
use ff::PrimeField;
use merlin::Transcript as MerlinTranscript;

/// Absorbing side of a Fiat-Shamir transcript
pub trait TranscriptWrite {
    fn append_message(&mut self, label: &'static [u8], message: &[u8]);

    /// Append a circuit field element
    fn append_base(&mut self, label: &'static [u8], value: &Base) {
        self.append_message(label, value.to_repr().as_ref());
    }

    /// Append a protocol integer, widened to a field element
    fn append_u64(&mut self, label: &'static [u8], value: u64) {
        self.append_base(label, &Base::from(value));
    }

    /// Append a point as its `u` then `v` coordinate
    fn append_point(&mut self, label: &'static [u8], point: &AffineCoords) {
        self.append_message(label, &[]);
        self.append_base(b"u", &point.u);
        self.append_base(b"v", &point.v);
    }

    /// Append a ciphertext as `CL` then `CR`
    fn append_ciphertext(&mut self, label: &'static [u8], ciphertext: &Ciphertext) {
        self.append_ciphertext_coords(
            label,
            &AffineCoords::from(ciphertext.left()),
            &AffineCoords::from(ciphertext.right()),
        );
    }

    /// Append a ciphertext given by the coordinates of its components
    fn append_ciphertext_coords(
        &mut self,
        label: &'static [u8],
        left: &AffineCoords,
        right: &AffineCoords,
    ) {
        self.append_message(label, &[]);
        self.append_point(b"cl", left);
        self.append_point(b"cr", right);
    }

    /// Append the curve header `a, d, G.u, G.v`
    fn append_curve_params(&mut self, params: &CurveParams) {
        for value in params.transcript_header().iter() {
            self.append_base(b"curve", value);
        }
    }
}

/// Squeezing side of a Fiat-Shamir transcript
pub trait TranscriptRead: TranscriptWrite {
    /// A Jubjub scalar reduced from 64 challenge bytes
    fn challenge_scalar(&mut self, label: &'static [u8]) -> Scalar;
}

/// Fiat-Shamir transcript backed by Merlin
#[derive(Clone)]
pub struct Transcript {
    inner: MerlinTranscript,
}

impl Transcript {
    pub fn new(label: &'static [u8]) -> Self {
        Self {
            inner: MerlinTranscript::new(label),
        }
    }
}

impl TranscriptWrite for Transcript {
    fn append_message(&mut self, label: &'static [u8], message: &[u8]) {
        self.inner.append_message(label, message);
    }
}

impl TranscriptRead for Transcript {
    fn challenge_scalar(&mut self, label: &'static [u8]) -> Scalar {
        let mut wide = [0u8; 64];
        self.inner.challenge_bytes(label, &mut wide);
        Scalar::from_bytes_wide(&wide)
    }
}
