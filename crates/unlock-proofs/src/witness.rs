//! Circuit witness for an unlock proof
//!
//! A witness is only ever built from a proof that passed native
//! verification, or as an inert padding slot. Either way its challenge is the
//! transcript challenge of its own statement.

use crate::proof::UnlockProof;
use crate::statement::UnlockStatement;
use crate::Result;
use crypto_core::config::scalar_to_base;
use crypto_core::{params, AffineCoords, Base, Ciphertext, CryptoError};
use ff::Field;
use log::warn;

/// Circuit-field assignment of every unlock proof field plus the gate flag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnlockWitness {
    pub(crate) a_pk: AffineCoords,
    pub(crate) z_sk: Base,
    pub(crate) z_sk_inv: Base,
    pub(crate) pk: AffineCoords,
    pub(crate) chain_id: Base,
    pub(crate) asset_id: Base,
    pub(crate) balance: Base,
    pub(crate) delta_amount: Base,
    pub(crate) a_t_fee: AffineCoords,
    pub(crate) z_bar_r_fee: Base,
    pub(crate) c_fee_left: AffineCoords,
    pub(crate) c_fee_right: AffineCoords,
    pub(crate) t_fee: AffineCoords,
    pub(crate) gas_fee_asset_id: Base,
    pub(crate) gas_fee: Base,
    pub(crate) challenge: Base,
    pub(crate) is_enabled: bool,
}

impl UnlockWitness {
    /// Assign `proof` after checking it natively
    ///
    /// A proof that fails verification, or whose verification errors, yields
    /// no witness at all.
    pub fn build(proof: &UnlockProof, is_enabled: bool) -> Result<Self> {
        if !proof.verify()? {
            warn!("refusing to build a witness for an invalid unlock proof");
            return Err(CryptoError::ProofRejected { proof: "unlock" }.into());
        }
        Ok(Self::from_verified(proof, is_enabled))
    }

    pub(crate) fn from_verified(proof: &UnlockProof, is_enabled: bool) -> Self {
        let statement = proof.statement();
        Self {
            a_pk: statement.a_pk,
            z_sk: scalar_to_base(proof.z_sk()),
            z_sk_inv: scalar_to_base(proof.z_sk_inv()),
            pk: statement.pk,
            chain_id: statement.chain_id,
            asset_id: statement.asset_id,
            balance: statement.balance,
            delta_amount: statement.delta_amount,
            a_t_fee: statement.a_t_fee,
            z_bar_r_fee: scalar_to_base(proof.z_bar_r_fee()),
            c_fee_left: statement.c_fee_left,
            c_fee_right: statement.c_fee_right,
            t_fee: AffineCoords::from(proof.t_fee()),
            gas_fee_asset_id: statement.gas_fee_asset_id,
            gas_fee: statement.gas_fee,
            challenge: scalar_to_base(&statement.challenge()),
            is_enabled,
        }
    }

    /// An inert slot: base points, zero scalars, the zero ciphertext, disabled
    pub fn empty() -> Self {
        let base = AffineCoords::from(&params().g);
        let zero = Ciphertext::zero();
        let mut witness = Self {
            a_pk: base,
            z_sk: Base::ZERO,
            z_sk_inv: Base::ZERO,
            pk: base,
            chain_id: Base::ZERO,
            asset_id: Base::ZERO,
            balance: Base::ZERO,
            delta_amount: Base::ZERO,
            a_t_fee: base,
            z_bar_r_fee: Base::ZERO,
            c_fee_left: AffineCoords::from(zero.left()),
            c_fee_right: AffineCoords::from(zero.right()),
            t_fee: base,
            gas_fee_asset_id: Base::ZERO,
            gas_fee: Base::ZERO,
            challenge: Base::ZERO,
            is_enabled: false,
        };
        witness.challenge = scalar_to_base(&witness.statement().challenge());
        witness
    }

    pub fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    /// The statement the assigned values describe
    pub fn statement(&self) -> UnlockStatement {
        UnlockStatement {
            pk: self.pk,
            a_pk: self.a_pk,
            chain_id: self.chain_id,
            asset_id: self.asset_id,
            balance: self.balance,
            delta_amount: self.delta_amount,
            a_t_fee: self.a_t_fee,
            c_fee_left: self.c_fee_left,
            c_fee_right: self.c_fee_right,
            gas_fee_asset_id: self.gas_fee_asset_id,
            gas_fee: self.gas_fee,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::valid_proof;
    use crate::UnlockError;
    use crypto_core::Scalar;

    #[test]
    fn test_build_from_valid_proof() {
        let (proof, _) = valid_proof(20);
        let witness = UnlockWitness::build(&proof, true).unwrap();
        assert!(witness.is_enabled());
        assert_eq!(witness.statement(), proof.statement());
        assert_eq!(witness.statement().challenge(), proof.challenge());
        assert_eq!(witness.z_sk, scalar_to_base(proof.z_sk()));
        assert_eq!(witness.challenge, scalar_to_base(&proof.challenge()));

        let disabled = UnlockWitness::build(&proof, false).unwrap();
        assert!(!disabled.is_enabled());
    }

    #[test]
    fn test_invalid_proof_builds_nothing() {
        let (proof, _) = valid_proof(21);
        let bad = UnlockProof {
            z_sk_inv: proof.z_sk_inv + Scalar::ONE,
            ..proof
        };
        assert_eq!(
            UnlockWitness::build(&bad, true),
            Err(UnlockError::from(CryptoError::ProofRejected { proof: "unlock" }))
        );
    }

    #[test]
    fn test_empty_witness() {
        let empty = UnlockWitness::empty();
        assert!(!empty.is_enabled());
        assert_eq!(empty.pk, AffineCoords::from(&params().g));
        assert_eq!(empty.c_fee_left, AffineCoords::identity());
        assert_eq!(empty.c_fee_right, AffineCoords::identity());
        assert_eq!(empty.gas_fee, Base::ZERO);
        assert_eq!(empty.challenge, scalar_to_base(&empty.statement().challenge()));
    }
}
