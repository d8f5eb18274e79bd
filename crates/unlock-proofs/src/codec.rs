//! String form of an unlock proof
//!
//! A proof travels as a flat JSON object. Scalars are big-endian hex, points
//! are compressed-point hex and `c_fee` is `CL ‖ CR`:
//!
//! ```json
//! {
//!   "a_pk": "<64 hex>", "z_sk": "<64 hex>", "z_sk_inv": "<64 hex>", "pk": "<64 hex>",
//!   "chain_id": 1, "asset_id": 2, "balance": 500, "delta_amount": 500,
//!   "a_t_fee": "<64 hex>", "z_bar_r_fee": "<64 hex>", "c_fee": "<128 hex>",
//!   "t_fee": "<64 hex>", "gas_fee_asset_id": 0, "gas_fee": 30
//! }
//! ```
//!
//! Decoding fails closed. Unknown fields, off-curve or small-order points and
//! scalars at or above the group order are rejected before a proof exists.

use crate::proof::UnlockProof;
use crate::Result;
use crypto_core::encoding::{
    ciphertext_to_hex, number_to_u32, number_to_u64, parse_ciphertext, parse_point, parse_scalar,
    point_to_hex, scalar_to_hex,
};
use crypto_core::ParseError;
use log::warn;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Number;

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawUnlockProof {
    a_pk: String,
    z_sk: String,
    z_sk_inv: String,
    pk: String,
    chain_id: Number,
    asset_id: Number,
    balance: Number,
    delta_amount: Number,
    a_t_fee: String,
    z_bar_r_fee: String,
    c_fee: String,
    t_fee: String,
    gas_fee_asset_id: Number,
    gas_fee: Number,
}

impl From<&UnlockProof> for RawUnlockProof {
    fn from(proof: &UnlockProof) -> Self {
        Self {
            a_pk: point_to_hex(&proof.a_pk),
            z_sk: scalar_to_hex(&proof.z_sk),
            z_sk_inv: scalar_to_hex(&proof.z_sk_inv),
            pk: point_to_hex(&proof.pk),
            chain_id: proof.chain_id.into(),
            asset_id: proof.asset_id.into(),
            balance: proof.balance.into(),
            delta_amount: proof.delta_amount.into(),
            a_t_fee: point_to_hex(&proof.a_t_fee),
            z_bar_r_fee: scalar_to_hex(&proof.z_bar_r_fee),
            c_fee: ciphertext_to_hex(&proof.c_fee),
            t_fee: point_to_hex(&proof.t_fee),
            gas_fee_asset_id: proof.gas_fee_asset_id.into(),
            gas_fee: proof.gas_fee.into(),
        }
    }
}

impl Serialize for UnlockProof {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        RawUnlockProof::from(self).serialize(serializer)
    }
}

/// Parse and validate the string form of an unlock proof
pub fn parse_unlock_proof(value: &str) -> Result<UnlockProof> {
    let raw: RawUnlockProof = serde_json::from_str(value).map_err(|err| {
        warn!("malformed unlock proof: {err}");
        ParseError::from(err)
    })?;

    Ok(UnlockProof {
        a_pk: parse_point("a_pk", &raw.a_pk)?,
        z_sk: parse_scalar("z_sk", &raw.z_sk)?,
        z_sk_inv: parse_scalar("z_sk_inv", &raw.z_sk_inv)?,
        pk: parse_point("pk", &raw.pk)?,
        chain_id: number_to_u32("chain_id", &raw.chain_id)?,
        asset_id: number_to_u32("asset_id", &raw.asset_id)?,
        balance: number_to_u64("balance", &raw.balance)?,
        delta_amount: number_to_u64("delta_amount", &raw.delta_amount)?,
        a_t_fee: parse_point("a_t_fee", &raw.a_t_fee)?,
        z_bar_r_fee: parse_scalar("z_bar_r_fee", &raw.z_bar_r_fee)?,
        c_fee: parse_ciphertext("c_fee", &raw.c_fee)?,
        t_fee: parse_point("t_fee", &raw.t_fee)?,
        gas_fee_asset_id: number_to_u32("gas_fee_asset_id", &raw.gas_fee_asset_id)?,
        gas_fee: number_to_u64("gas_fee", &raw.gas_fee)?,
    })
}
