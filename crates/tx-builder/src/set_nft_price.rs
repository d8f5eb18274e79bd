//! Listing an NFT for sale at a price

use crate::hash::MessageHasher;
use crate::segment::{decode_segment, u32_field, u64_field, RawSetNftPrice};
use crate::tx_info::{construct, SignedTx, TxBody};
use crypto_core::{Result, Signer};
use serde::Serialize;

/// Fields of a set-NFT-price transaction, in hash order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SetNftPrice {
    pub account_index: u32,
    pub nft_index: u32,
    pub asset_id: u32,
    pub asset_amount: u64,
    pub gas_account_index: u32,
    pub gas_fee_asset_id: u32,
    pub gas_fee_asset_amount: u64,
    pub nonce: u64,
}

pub type SetNftPriceTxInfo = SignedTx<SetNftPrice>;

impl TxBody for SetNftPrice {
    const KIND: &'static str = "set nft price";
    const DOMAIN: &'static [u8] = b"tx-builder/set-nft-price/v1";

    fn from_segment(segment: &str) -> Result<Self> {
        let raw: RawSetNftPrice = decode_segment(Self::KIND, segment)?;
        Ok(Self {
            account_index: u32_field("account_index", &raw.account_index)?,
            nft_index: u32_field("nft_index", &raw.nft_index)?,
            asset_id: u32_field("asset_id", &raw.asset_id)?,
            asset_amount: u64_field("asset_amount", &raw.asset_amount)?,
            gas_account_index: u32_field("gas_account_index", &raw.gas_account_index)?,
            gas_fee_asset_id: u32_field("gas_fee_asset_id", &raw.gas_fee_asset_id)?,
            gas_fee_asset_amount: u64_field("gas_fee_asset_amount", &raw.gas_fee_asset_amount)?,
            nonce: u64_field("nonce", &raw.nonce)?,
        })
    }

    fn write_fields(&self, hasher: &mut MessageHasher) {
        hasher
            .write_u32(self.account_index)
            .write_u32(self.nft_index)
            .write_u32(self.asset_id)
            .write_u64(self.asset_amount)
            .write_u32(self.gas_account_index)
            .write_u32(self.gas_fee_asset_id)
            .write_u64(self.gas_fee_asset_amount)
            .write_u64(self.nonce);
    }
}

/// Build and sign a set-NFT-price transaction from a JSON segment
pub fn construct_set_nft_price_tx<S: Signer + ?Sized>(
    signer: &S,
    segment: &str,
) -> Result<SetNftPriceTxInfo> {
    construct(signer, segment)
}
