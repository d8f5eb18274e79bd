//! Process-wide curve parameters
//!
//! The Jubjub curve constants, the two generators and the fixed-base tables
//! are computed once on first access and shared read-only afterwards. Every
//! component takes them through [`params`].

use crate::{Base, Point, Scalar};
use blake2::{Blake2b512, Digest};
use byteorder::{ByteOrder, LittleEndian};
use ff::Field;
use group::cofactor::CofactorGroup;
use group::{Group, GroupEncoding};
use jubjub::{AffinePoint, ExtendedPoint};
use log::debug;
use once_cell::sync::Lazy;

/// Bit length of the scalar field order
pub const SCALAR_BITS: usize = 252;

/// Bit length of plaintext amounts
pub const AMOUNT_BITS: usize = 64;

const AUXILIARY_GENERATOR_DOMAIN: &[u8] = b"crypto-core/jubjub/auxiliary-generator/v1";

static PARAMS: Lazy<CurveParams> = Lazy::new(CurveParams::generate);

/// Shared curve parameters, built on first use
pub fn params() -> &'static CurveParams {
    &PARAMS
}

/// Affine `(u, v)` coordinates of a curve point over the circuit field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AffineCoords {
    pub u: Base,
    pub v: Base,
}

impl AffineCoords {
    /// Coordinates of the neutral element
    pub fn identity() -> Self {
        Self {
            u: Base::ZERO,
            v: Base::ONE,
        }
    }

    /// `(u, v)` as a tuple, the form circuit gadgets consume
    pub fn to_pair(&self) -> (Base, Base) {
        (self.u, self.v)
    }
}

impl From<&Point> for AffineCoords {
    fn from(point: &Point) -> Self {
        let affine = AffinePoint::from(ExtendedPoint::from(*point));
        Self {
            u: affine.get_u(),
            v: affine.get_v(),
        }
    }
}

impl From<Point> for AffineCoords {
    fn from(point: Point) -> Self {
        Self::from(&point)
    }
}

/// Twisted Edwards curve `a·u² + v² = 1 + d·u²·v²` and its generators
#[derive(Clone, Debug)]
pub struct CurveParams {
    /// Coefficient `a` (equal to -1 on Jubjub)
    pub coeff_a: Base,
    /// Coefficient `d` (equal to -10240/10241 on Jubjub)
    pub coeff_d: Base,
    /// Base point of the prime-order subgroup
    pub g: Point,
    /// Auxiliary generator used to encode amounts
    pub h: Point,
    g_powers: Vec<AffineCoords>,
    h_powers: Vec<AffineCoords>,
}

impl CurveParams {
    fn generate() -> Self {
        let coeff_a = -Base::ONE;
        let inv = Option::<Base>::from(Base::from(10241u64).invert())
            .expect("10241 is non-zero in the base field");
        let coeff_d = -(Base::from(10240u64) * inv);

        let g = Point::generator();
        let h = derive_auxiliary_generator(&g);

        Self {
            coeff_a,
            coeff_d,
            g_powers: powers_of_two(&g, SCALAR_BITS),
            h_powers: powers_of_two(&h, AMOUNT_BITS),
            g,
            h,
        }
    }

    /// `2^i·G` for `i < SCALAR_BITS`
    pub fn g_powers(&self) -> &[AffineCoords] {
        &self.g_powers
    }

    /// `2^i·H` for `i < AMOUNT_BITS`
    pub fn h_powers(&self) -> &[AffineCoords] {
        &self.h_powers
    }

    /// The fixed curve elements written at the head of every transcript
    pub fn transcript_header(&self) -> [Base; 4] {
        let g = AffineCoords::from(&self.g);
        [self.coeff_a, self.coeff_d, g.u, g.v]
    }
}

fn powers_of_two(base: &Point, count: usize) -> Vec<AffineCoords> {
    let mut acc = *base;
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        out.push(AffineCoords::from(&acc));
        acc = acc.double();
    }
    out
}

/// Try-and-increment: hash a counter until the digest decodes to a point whose
/// cofactor-cleared image is a fresh subgroup generator.
fn derive_auxiliary_generator(g: &Point) -> Point {
    let mut counter = 0u32;
    loop {
        let digest = Blake2b512::new()
            .chain_update(AUXILIARY_GENERATOR_DOMAIN)
            .chain_update(counter.to_le_bytes())
            .finalize();
        let mut repr = [0u8; 32];
        repr.copy_from_slice(&digest[..32]);

        if let Some(candidate) = Option::<ExtendedPoint>::from(ExtendedPoint::from_bytes(&repr)) {
            let h = candidate.clear_cofactor();
            if !bool::from(h.is_identity()) && h != *g {
                debug!("auxiliary generator found at counter {counter}");
                return h;
            }
        }
        counter += 1;
    }
}

/// Embed a scalar into the circuit field; the scalar order is below the base modulus
pub fn scalar_to_base(scalar: &Scalar) -> Base {
    let bytes = scalar.to_bytes();
    let mut limbs = [0u64; 4];
    LittleEndian::read_u64_into(&bytes, &mut limbs);
    Base::from_raw(limbs)
}
