//! Circuit gadgets
//!
//! Every gadget carries the values it assigned, so callers can read results
//! back without re-evaluating linear combinations.

pub mod boolean;
pub mod edwards;
pub mod num;

pub use boolean::Boolean;
pub use edwards::{AllocatedPoint, EdwardsCurve};
pub use num::AllocatedNum;

use ff::PrimeField;

/// Little-endian bits of a field element
///
/// Fields used with these gadgets expose a little-endian canonical repr.
pub fn le_bits<F: PrimeField>(value: &F, count: usize) -> Vec<bool> {
    let repr = value.to_repr();
    let bytes = repr.as_ref();
    (0..count)
        .map(|i| bytes.get(i / 8).map_or(false, |byte| (byte >> (i % 8)) & 1 == 1))
        .collect()
}
