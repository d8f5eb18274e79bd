//! Unlock proof data and native verification
//!
//! An unlock proof shows knowledge of the secret key behind `Pk` and that
//! debiting `gas_fee` from the balance encrypted in `C_fee` is consistent with
//! the revealed commitment `T_fee`. Verification checks two Schnorr-style
//! equations:
//!
//! 1. `G·Z_sk == c·Pk + A_pk`
//! 2. `G·Z_bar_r_fee + Z_skInv·(−CL) == A_T_fee + c·(T_fee − (CR − gas_fee·H))`
//!
//! where `c` is the challenge of [`UnlockStatement`].

use crate::statement::UnlockStatement;
use crate::witness::UnlockWitness;
use crate::Result;
use crypto_core::{params, AffineCoords, Base, Ciphertext, CryptoError, Point, Scalar};
use group::Group;
use log::{debug, warn};

/// A non-interactive unlock proof
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnlockProof {
    pub(crate) a_pk: Point,
    pub(crate) z_sk: Scalar,
    pub(crate) z_sk_inv: Scalar,
    pub(crate) pk: Point,
    pub(crate) chain_id: u32,
    pub(crate) asset_id: u32,
    pub(crate) balance: u64,
    pub(crate) delta_amount: u64,
    pub(crate) a_t_fee: Point,
    pub(crate) z_bar_r_fee: Scalar,
    pub(crate) c_fee: Ciphertext,
    pub(crate) t_fee: Point,
    pub(crate) gas_fee_asset_id: u32,
    pub(crate) gas_fee: u64,
}

impl UnlockProof {
    pub fn a_pk(&self) -> &Point {
        &self.a_pk
    }

    pub fn z_sk(&self) -> &Scalar {
        &self.z_sk
    }

    pub fn z_sk_inv(&self) -> &Scalar {
        &self.z_sk_inv
    }

    pub fn pk(&self) -> &Point {
        &self.pk
    }

    pub fn a_t_fee(&self) -> &Point {
        &self.a_t_fee
    }

    pub fn z_bar_r_fee(&self) -> &Scalar {
        &self.z_bar_r_fee
    }

    pub fn c_fee(&self) -> &Ciphertext {
        &self.c_fee
    }

    pub fn t_fee(&self) -> &Point {
        &self.t_fee
    }

    /// The public values this proof is bound to
    pub fn context(&self) -> UnlockContext {
        UnlockContext {
            chain_id: self.chain_id,
            asset_id: self.asset_id,
            balance: self.balance,
            delta_amount: self.delta_amount,
            gas_fee_asset_id: self.gas_fee_asset_id,
            gas_fee: self.gas_fee,
        }
    }

    /// The transcript statement of this proof
    pub fn statement(&self) -> UnlockStatement {
        UnlockStatement {
            pk: AffineCoords::from(&self.pk),
            a_pk: AffineCoords::from(&self.a_pk),
            chain_id: Base::from(self.chain_id as u64),
            asset_id: Base::from(self.asset_id as u64),
            balance: Base::from(self.balance),
            delta_amount: Base::from(self.delta_amount),
            a_t_fee: AffineCoords::from(&self.a_t_fee),
            c_fee_left: AffineCoords::from(self.c_fee.left()),
            c_fee_right: AffineCoords::from(self.c_fee.right()),
            gas_fee_asset_id: Base::from(self.gas_fee_asset_id as u64),
            gas_fee: Base::from(self.gas_fee),
        }
    }

    pub fn challenge(&self) -> Scalar {
        self.statement().challenge()
    }

    /// Evaluate both verification equations, gated by `is_enabled`
    ///
    /// A disabled slot passes without looking at the proof.
    pub fn check(&self, is_enabled: bool) -> std::result::Result<bool, CryptoError> {
        if !is_enabled {
            return Ok(true);
        }
        if bool::from(self.pk.is_identity()) {
            return Err(CryptoError::IdentityPublicKey);
        }

        let params = params();
        let c = self.challenge();

        let l1 = params.g * self.z_sk;
        let r1 = self.pk * c + self.a_pk;
        let key_ok = l1 == r1;

        let c_l_neg = -*self.c_fee.left();
        let c_r_prime = -(*self.c_fee.right() + -(params.h * Scalar::from(self.gas_fee)));
        let t_div_r_prime = self.t_fee + c_r_prime;
        let l2 = params.g * self.z_bar_r_fee + c_l_neg * self.z_sk_inv;
        let r2 = self.a_t_fee + t_div_r_prime * c;
        let fee_ok = l2 == r2;

        Ok(key_ok & fee_ok)
    }

    /// Native verification of an enabled proof
    pub fn verify(&self) -> std::result::Result<bool, CryptoError> {
        self.check(true)
    }
}

/// Public values the verifier expects a proof to be bound to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct UnlockContext {
    pub chain_id: u32,
    pub asset_id: u32,
    pub balance: u64,
    pub delta_amount: u64,
    pub gas_fee_asset_id: u32,
    pub gas_fee: u64,
}

impl UnlockContext {
    pub fn matches(&self, proof: &UnlockProof) -> bool {
        *self == proof.context()
    }
}

/// Outcome of the verification entry point
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verification {
    pub valid: bool,
    /// Present exactly when the proof is valid
    pub witness: Option<UnlockWitness>,
}

impl Verification {
    fn rejected() -> Self {
        Self {
            valid: false,
            witness: None,
        }
    }
}

/// Verify `proof` against the expected public values
///
/// On success the returned witness is ready for the circuit backend.
pub fn verify_unlock(proof: &UnlockProof, context: &UnlockContext) -> Result<Verification> {
    if !context.matches(proof) {
        warn!("unlock proof bound to different public values: {:?}", proof.context());
        return Ok(Verification::rejected());
    }
    if !proof.verify()? {
        warn!("unlock proof rejected by native verification");
        return Ok(Verification::rejected());
    }

    debug!("unlock proof verified for asset {}", proof.asset_id);
    Ok(Verification {
        valid: true,
        witness: Some(UnlockWitness::from_verified(proof, true)),
    })
}
