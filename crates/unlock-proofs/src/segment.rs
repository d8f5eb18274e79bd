//! JSON input segment for the unlock prover
//!
//! ```json
//! {
//!   "chain_id": 1, "asset_id": 2, "balance": 500, "delta_amount": 500,
//!   "pk": "<64 hex>", "sk": "<64 hex>", "c_fee": "<128 hex>", "b_fee": 1000,
//!   "gas_fee_asset_id": 0, "gas_fee": 30
//! }
//! ```
//!
//! Decoding is schema-first: unknown fields are rejected, numbers are range
//! checked into their protocol widths and `pk` must belong to `sk`.

use crate::proof::UnlockContext;
use crate::prover::UnlockRequest;
use crate::Result;
use crypto_core::encoding::{number_to_u32, number_to_u64, parse_ciphertext};
use crypto_core::{ParseError, PrivateKey, PublicKey, Signer, ValidationError};
use log::warn;
use serde::Deserialize;
use serde_json::Number;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawUnlockSegment {
    chain_id: Number,
    asset_id: Number,
    balance: Number,
    delta_amount: Number,
    pk: String,
    sk: String,
    c_fee: String,
    b_fee: Number,
    gas_fee_asset_id: Number,
    gas_fee: Number,
}

/// Parse and validate a prover input segment
pub fn parse_unlock_segment(segment: &str) -> Result<UnlockRequest> {
    let raw: RawUnlockSegment = serde_json::from_str(segment).map_err(|err| {
        warn!("malformed unlock segment: {err}");
        ParseError::from(err)
    })?;

    let context = UnlockContext {
        chain_id: number_to_u32("chain_id", &raw.chain_id)?,
        asset_id: number_to_u32("asset_id", &raw.asset_id)?,
        balance: number_to_u64("balance", &raw.balance)?,
        delta_amount: number_to_u64("delta_amount", &raw.delta_amount)?,
        gas_fee_asset_id: number_to_u32("gas_fee_asset_id", &raw.gas_fee_asset_id)?,
        gas_fee: number_to_u64("gas_fee", &raw.gas_fee)?,
    };
    let b_fee = number_to_u64("b_fee", &raw.b_fee)?;

    let sk = PrivateKey::from_hex(&raw.sk)?;
    let pk = PublicKey::from_hex(&raw.pk)?;
    if sk.public_key() != pk {
        return Err(ValidationError::KeyMismatch.into());
    }
    let c_fee = parse_ciphertext("c_fee", &raw.c_fee)?;

    Ok(UnlockRequest {
        context,
        sk,
        c_fee,
        b_fee,
    })
}
