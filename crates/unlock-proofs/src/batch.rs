//! Batches of unlock proofs
//!
//! Proofs are independent, so native verification and witness building run
//! in parallel. A block circuit has a fixed number of unlock slots; unused
//! slots are padded with inert witnesses.

use crate::proof::UnlockProof;
use crate::witness::UnlockWitness;
use crate::{Result, UnlockError};
use crypto_core::CryptoError;
use log::debug;
use rayon::prelude::*;

/// Configuration for batched unlock verification
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Number of unlock slots in the block circuit
    pub slots: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { slots: 16 }
    }
}

/// Natively verify every proof, in parallel, preserving order
pub fn verify_batch(proofs: &[UnlockProof]) -> Vec<std::result::Result<bool, CryptoError>> {
    proofs.par_iter().map(UnlockProof::verify).collect()
}

/// Pad `witnesses` with empty slots up to `config.slots`
pub fn pad_witnesses(
    mut witnesses: Vec<UnlockWitness>,
    config: &BatchConfig,
) -> Result<Vec<UnlockWitness>> {
    if witnesses.len() > config.slots {
        return Err(UnlockError::BatchOverflow {
            slots: config.slots,
            got: witnesses.len(),
        });
    }
    debug!(
        "padding {} unlock witnesses with {} empty slots",
        witnesses.len(),
        config.slots - witnesses.len()
    );
    witnesses.resize(config.slots, UnlockWitness::empty());
    Ok(witnesses)
}

/// Build an enabled witness for every proof and pad to the slot count
///
/// Fails as a whole if any proof is invalid; no partial batch is returned.
pub fn build_batch(proofs: &[UnlockProof], config: &BatchConfig) -> Result<Vec<UnlockWitness>> {
    if proofs.len() > config.slots {
        return Err(UnlockError::BatchOverflow {
            slots: config.slots,
            got: proofs.len(),
        });
    }
    let witnesses = proofs
        .par_iter()
        .map(|proof| UnlockWitness::build(proof, true))
        .collect::<Result<Vec<_>>>()?;
    pad_witnesses(witnesses, config)
}
