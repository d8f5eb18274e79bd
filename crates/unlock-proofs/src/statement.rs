//! Public statement of an unlock proof and its Fiat-Shamir challenge
//!
//! The statement is expressed in circuit-field form so that the prover, the
//! native verifier and the circuit all derive the challenge from exactly the
//! same absorbed values in exactly the same order.

use crypto_core::config::scalar_to_base;
use crypto_core::{params, AffineCoords, Base, Scalar, Transcript, TranscriptRead, TranscriptWrite};

/// Transcript domain label for unlock proofs
pub const TRANSCRIPT_LABEL: &[u8] = b"unlock-proof";

/// Every value bound into the unlock challenge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnlockStatement {
    pub pk: AffineCoords,
    pub a_pk: AffineCoords,
    pub chain_id: Base,
    pub asset_id: Base,
    pub balance: Base,
    pub delta_amount: Base,
    pub a_t_fee: AffineCoords,
    pub c_fee_left: AffineCoords,
    pub c_fee_right: AffineCoords,
    pub gas_fee_asset_id: Base,
    pub gas_fee: Base,
}

impl UnlockStatement {
    /// Absorb the statement in protocol order and squeeze the challenge
    ///
    /// Order: curve parameters, `Pk`, `A_pk`, chain id, asset id, balance,
    /// delta amount, `A_T_fee`, `C_fee` (`CL` then `CR`), gas-fee asset id,
    /// gas fee.
    pub fn challenge(&self) -> Scalar {
        let mut transcript = Transcript::new(TRANSCRIPT_LABEL);
        transcript.append_curve_params(params());
        transcript.append_point(b"pk", &self.pk);
        transcript.append_point(b"a_pk", &self.a_pk);
        transcript.append_base(b"chain_id", &self.chain_id);
        transcript.append_base(b"asset_id", &self.asset_id);
        transcript.append_base(b"balance", &self.balance);
        transcript.append_base(b"delta_amount", &self.delta_amount);
        transcript.append_point(b"a_t_fee", &self.a_t_fee);
        transcript.append_ciphertext_coords(b"c_fee", &self.c_fee_left, &self.c_fee_right);
        transcript.append_base(b"gas_fee_asset_id", &self.gas_fee_asset_id);
        transcript.append_base(b"gas_fee", &self.gas_fee);
        transcript.challenge_scalar(b"challenge")
    }

    /// Public inputs of the unlock circuit for this statement
    ///
    /// Order: chain id, asset id, balance, delta amount, gas-fee asset id,
    /// gas fee, then `(u, v)` of `Pk`, `A_pk`, `A_T_fee`, `CL`, `CR`, and
    /// finally the challenge embedded in the circuit field.
    pub fn public_inputs(&self) -> Vec<Base> {
        let mut inputs = vec![
            self.chain_id,
            self.asset_id,
            self.balance,
            self.delta_amount,
            self.gas_fee_asset_id,
            self.gas_fee,
        ];
        for point in [
            &self.pk,
            &self.a_pk,
            &self.a_t_fee,
            &self.c_fee_left,
            &self.c_fee_right,
        ] {
            inputs.extend([point.u, point.v]);
        }
        inputs.push(scalar_to_base(&self.challenge()));
        inputs
    }
}
