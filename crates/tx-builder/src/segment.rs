//! Schema-first decoding of JSON transaction segments
//!
//! Segments decode into raw structs that reject unknown fields and keep
//! numbers as [`Number`] until they are range checked into protocol widths.

use crypto_core::encoding::{number_to_u32, number_to_u64};
use crypto_core::{ParseError, Result};
use log::warn;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Number;

/// Decode `segment` into its raw schema
pub fn decode_segment<R: DeserializeOwned>(kind: &str, segment: &str) -> Result<R> {
    serde_json::from_str(segment).map_err(|err| {
        warn!("malformed {kind} segment: {err}");
        ParseError::from(err).into()
    })
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawSetNftPrice {
    pub account_index: Number,
    pub nft_index: Number,
    pub asset_id: Number,
    pub asset_amount: Number,
    pub gas_account_index: Number,
    pub gas_fee_asset_id: Number,
    pub gas_fee_asset_amount: Number,
    pub nonce: Number,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawTransferNft {
    pub account_index: Number,
    pub nft_index: Number,
    pub receiver_account_index: Number,
    pub gas_account_index: Number,
    pub gas_fee_asset_id: Number,
    pub gas_fee_asset_amount: Number,
    pub nonce: Number,
}

pub(crate) fn u32_field(field: &'static str, number: &Number) -> Result<u32> {
    number_to_u32(field, number).map_err(|err| {
        warn!("rejected segment field `{field}`: {err}");
        err
    })
}

pub(crate) fn u64_field(field: &'static str, number: &Number) -> Result<u64> {
    number_to_u64(field, number).map_err(|err| {
        warn!("rejected segment field `{field}`: {err}");
        err
    })
}
