//! Moving an NFT between accounts

use crate::hash::MessageHasher;
use crate::segment::{decode_segment, u32_field, u64_field, RawTransferNft};
use crate::tx_info::{construct, SignedTx, TxBody};
use crypto_core::{Result, Signer};
use serde::Serialize;

/// Fields of an NFT transfer, in hash order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TransferNft {
    pub account_index: u32,
    pub nft_index: u32,
    pub receiver_account_index: u32,
    pub gas_account_index: u32,
    pub gas_fee_asset_id: u32,
    pub gas_fee_asset_amount: u64,
    pub nonce: u64,
}

pub type TransferNftTxInfo = SignedTx<TransferNft>;

impl TxBody for TransferNft {
    const KIND: &'static str = "transfer nft";
    const DOMAIN: &'static [u8] = b"tx-builder/transfer-nft/v1";

    fn from_segment(segment: &str) -> Result<Self> {
        let raw: RawTransferNft = decode_segment(Self::KIND, segment)?;
        Ok(Self {
            account_index: u32_field("account_index", &raw.account_index)?,
            nft_index: u32_field("nft_index", &raw.nft_index)?,
            receiver_account_index: u32_field(
                "receiver_account_index",
                &raw.receiver_account_index,
            )?,
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
            .write_u32(self.receiver_account_index)
            .write_u32(self.gas_account_index)
            .write_u32(self.gas_fee_asset_id)
            .write_u64(self.gas_fee_asset_amount)
            .write_u64(self.nonce);
    }
}

/// Build and sign an NFT transfer from a JSON segment
pub fn construct_transfer_nft_tx<S: Signer + ?Sized>(
    signer: &S,
    segment: &str,
) -> Result<TransferNftTxInfo> {
    construct(signer, segment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tx_info::TxInfo;
    use crypto_core::{Error, ParseError, PrivateKey, ValidationError};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SEGMENT: &str = r#"{
        "account_index": 4,
        "nft_index": 17,
        "receiver_account_index": 9,
        "gas_account_index": 1,
        "gas_fee_asset_id": 0,
        "gas_fee_asset_amount": 3,
        "nonce": 12
    }"#;

    #[test]
    fn test_construct_and_verify() {
        let sk = PrivateKey::generate(&mut StdRng::seed_from_u64(10));
        let tx = construct_transfer_nft_tx(&sk, SEGMENT).unwrap();
        assert_eq!(tx.tx().receiver_account_index, 9);
        assert_eq!(tx.tx().nft_index, 17);
        assert!(tx.verify(&sk.public_key()));
    }

    #[test]
    fn test_swapping_accounts_changes_hash() {
        let tx = TransferNft::from_segment(SEGMENT).unwrap();
        let swapped = TransferNft {
            account_index: tx.receiver_account_index,
            receiver_account_index: tx.account_index,
            ..tx
        };
        assert_ne!(tx.msg_hash(), swapped.msg_hash());
    }

    #[test]
    fn test_distinct_from_set_nft_price_domain() {
        use crate::set_nft_price::SetNftPrice;
        assert_ne!(TransferNft::DOMAIN, SetNftPrice::DOMAIN);
    }

    #[test]
    fn test_nft_index_is_32_bit() {
        let widest = SEGMENT.replace("\"nft_index\": 17", "\"nft_index\": 4294967295");
        assert_eq!(TransferNft::from_segment(&widest).unwrap().nft_index, u32::MAX);

        let overflow = SEGMENT.replace("\"nft_index\": 17", "\"nft_index\": 4294967296");
        assert_eq!(
            TransferNft::from_segment(&overflow),
            Err(Error::Validation(ValidationError::OutOfRange {
                field: "nft_index",
                max: u32::MAX as u64
            }))
        );
    }

    #[test]
    fn test_rejects_bad_numbers() {
        let fractional = SEGMENT.replace("\"nonce\": 12", "\"nonce\": 1.5");
        assert_eq!(
            TransferNft::from_segment(&fractional),
            Err(Error::Parse(ParseError::NotAnInteger { field: "nonce" }))
        );

        let negative = SEGMENT.replace("\"nft_index\": 17", "\"nft_index\": -17");
        assert_eq!(
            TransferNft::from_segment(&negative),
            Err(Error::Validation(ValidationError::Negative { field: "nft_index" }))
        );

        let huge = SEGMENT.replace(
            "\"gas_fee_asset_amount\": 3",
            "\"gas_fee_asset_amount\": 18446744073709551616",
        );
        assert_eq!(
            TransferNft::from_segment(&huge),
            Err(Error::Validation(ValidationError::OutOfRange {
                field: "gas_fee_asset_amount",
                max: u64::MAX
            }))
        );
    }

    #[test]
    fn test_unexpected_field_name_is_rejected() {
        let renamed = SEGMENT.replace("receiver_account_index", "to_account_index");
        assert!(matches!(
            TransferNft::from_segment(&renamed),
            Err(Error::Parse(ParseError::Segment { .. }))
        ));
    }
}
