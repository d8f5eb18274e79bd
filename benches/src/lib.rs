//! # Ledger Benchmarks
//!
//! Criterion benchmarks for the confidential ledger core.
//!
//! ## Benchmark Categories
//!
//! - **elgamal**: encryption and homomorphic ciphertext arithmetic
//! - **unlock**: proving, native verification, witness building, circuit
//!   synthesis and batch verification of unlock proofs
//! - **transactions**: segment decoding, message hashing and signing
//!
//! ## Usage
//!
//! Run all benchmarks:
//! ```bash
//! cargo bench
//! ```
//!
//! Run one category:
//! ```bash
//! cargo bench --bench unlock
//! ```

use crypto_core::{params, Ciphertext, PrivateKey, Scalar};
use rand::rngs::StdRng;
use rand::SeedableRng;
use unlock_proofs::{UnlockContext, UnlockRequest};

/// A provable unlock request derived from `seed`
pub fn unlock_request(seed: u64) -> UnlockRequest {
    let mut rng = StdRng::seed_from_u64(seed);
    let sk = PrivateKey::generate(&mut rng);
    let pk = params().g * sk.as_scalar();
    UnlockRequest {
        context: UnlockContext {
            chain_id: 1,
            asset_id: 2,
            balance: 500,
            delta_amount: 500,
            gas_fee_asset_id: 0,
            gas_fee: 30,
        },
        sk,
        c_fee: Ciphertext::encrypt(1_000, &pk, &Scalar::from(seed.wrapping_add(1))),
        b_fee: 1_000,
    }
}

/// A set-NFT-price segment with the given nonce
pub fn set_nft_price_segment(nonce: u64) -> String {
    format!(
        r#"{{"account_index":1,"nft_index":2,"asset_id":3,"asset_amount":100,
            "gas_account_index":0,"gas_fee_asset_id":0,"gas_fee_asset_amount":1,
            "nonce":{nonce}}}"#
    )
}
