//! Unlock proof generation
//!
//! With `α_sk`, `r̄` and `α_r` sampled fresh and `α_skInv = α_sk⁻¹`:
//!
//! - `A_pk = G·α_sk`
//! - `T_fee = G·r̄ + (b_fee − gas_fee)·H`
//! - `A_T_fee = G·α_r − α_skInv·CL`
//! - `Z_sk = α_sk + c·sk`, `Z_skInv = α_skInv + c·sk⁻¹`, `Z_bar_r_fee = α_r + c·r̄`

use crate::proof::{UnlockContext, UnlockProof};
use crate::Result;
use crypto_core::{params, Ciphertext, CryptoError, PrivateKey, Scalar, ValidationError};
use ff::Field;
use log::debug;
use rand_core::{CryptoRng, RngCore};

/// Everything the prover needs
#[derive(Clone, Debug)]
pub struct UnlockRequest {
    pub context: UnlockContext,
    pub sk: PrivateKey,
    /// Encrypted balance of the gas-fee asset
    pub c_fee: Ciphertext,
    /// Plaintext of `c_fee`
    pub b_fee: u64,
}

fn nonzero_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Scalar {
    loop {
        let s = Scalar::random(&mut *rng);
        if !bool::from(s.is_zero()) {
            return s;
        }
    }
}

/// Produce an unlock proof for `request`
pub fn prove_unlock<R: RngCore + CryptoRng>(
    rng: &mut R,
    request: &UnlockRequest,
) -> Result<UnlockProof> {
    let context = &request.context;
    if context.gas_fee > request.b_fee {
        return Err(ValidationError::InsufficientBalance {
            balance: request.b_fee,
            fee: context.gas_fee,
        }
        .into());
    }

    let sk = request.sk.as_scalar();
    if !request.c_fee.opens_to(sk, request.b_fee) {
        return Err(CryptoError::CiphertextMismatch.into());
    }
    let sk_inv = Option::<Scalar>::from(sk.invert()).ok_or(ValidationError::ZeroSecretKey)?;

    let params = params();
    let alpha_sk = nonzero_scalar(rng);
    let alpha_sk_inv = Option::<Scalar>::from(alpha_sk.invert())
        .ok_or(ValidationError::ZeroSecretKey)?;
    let r_bar = Scalar::random(&mut *rng);
    let alpha_r = Scalar::random(&mut *rng);

    let mut proof = UnlockProof {
        a_pk: params.g * alpha_sk,
        z_sk: Scalar::ZERO,
        z_sk_inv: Scalar::ZERO,
        pk: params.g * sk,
        chain_id: context.chain_id,
        asset_id: context.asset_id,
        balance: context.balance,
        delta_amount: context.delta_amount,
        a_t_fee: params.g * alpha_r - *request.c_fee.left() * alpha_sk_inv,
        z_bar_r_fee: Scalar::ZERO,
        c_fee: request.c_fee,
        t_fee: params.g * r_bar + params.h * Scalar::from(request.b_fee - context.gas_fee),
        gas_fee_asset_id: context.gas_fee_asset_id,
        gas_fee: context.gas_fee,
    };

    let c = proof.challenge();
    proof.z_sk = alpha_sk + c * sk;
    proof.z_sk_inv = alpha_sk_inv + c * sk_inv;
    proof.z_bar_r_fee = alpha_r + c * r_bar;

    debug!(
        "proved unlock of {} for asset {} on chain {}",
        context.delta_amount, context.asset_id, context.chain_id
    );
    Ok(proof)
}
