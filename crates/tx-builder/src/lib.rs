//! # Transaction Builder
//!
//! Turns loosely typed JSON segments into signed, fixed-width transactions.
//!
//! Construction runs in three steps that never interleave: decode and range
//! check every field, hash the fields in declared order, sign the hash. A
//! segment that fails the first step never reaches the signer.
//!
//! ## Example
//!
//! ```rust
//! use crypto_core::{PrivateKey, Signer};
//! use rand::rngs::OsRng;
//! use tx_builder::{construct_set_nft_price_tx, TxInfo};
//!
//! let sk = PrivateKey::generate(&mut OsRng);
//! let segment = r#"{"account_index":1,"nft_index":2,"asset_id":3,"asset_amount":100,
//!     "gas_account_index":0,"gas_fee_asset_id":0,"gas_fee_asset_amount":1,"nonce":5}"#;
//!
//! let tx = construct_set_nft_price_tx(&sk, segment).unwrap();
//! assert!(tx.verify(&sk.public_key()));
//! ```

pub mod hash;
pub mod segment;
pub mod set_nft_price;
pub mod transfer_nft;
pub mod tx_info;

// Re-export key types
pub use hash::{MessageHasher, MsgHash, MSG_HASH_SIZE};
pub use set_nft_price::{construct_set_nft_price_tx, SetNftPrice, SetNftPriceTxInfo};
pub use transfer_nft::{construct_transfer_nft_tx, TransferNft, TransferNftTxInfo};
pub use tx_info::{construct, SignedTx, TxBody, TxInfo};
