//! Deterministic proofs shared by the unit tests

use crate::proof::{UnlockContext, UnlockProof};
use crate::prover::{prove_unlock, UnlockRequest};
use crypto_core::{params, Ciphertext, PrivateKey, Scalar};
use ff::Field;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A request whose fee ciphertext encrypts `b_fee` under a fresh key
pub(crate) fn request(rng: &mut StdRng, b_fee: u64, gas_fee: u64) -> UnlockRequest {
    let sk = PrivateKey::generate(rng);
    let pk = params().g * sk.as_scalar();
    let c_fee = Ciphertext::encrypt(b_fee, &pk, &Scalar::random(&mut *rng));
    UnlockRequest {
        context: UnlockContext {
            chain_id: 1,
            asset_id: 2,
            balance: 500,
            delta_amount: 500,
            gas_fee_asset_id: 0,
            gas_fee,
        },
        sk,
        c_fee,
        b_fee,
    }
}

pub(crate) fn valid_proof(seed: u64) -> (UnlockProof, UnlockRequest) {
    let mut rng = StdRng::seed_from_u64(seed);
    let request = request(&mut rng, 1_000, 30);
    let proof = prove_unlock(&mut rng, &request).expect("fixture request is provable");
    (proof, request)
}

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Secret key behind [`PINNED_PROOF`]; its `c_fee` encrypts 1000
pub(crate) const PINNED_SK: &str =
    "07681f99534c6a55f1e206505db747f5c5c46f4ef900cdd5a3c548aea376aeb1";

/// A proof generated outside this crate, with `gas_fee = 30`
pub(crate) const PINNED_PROOF: &str = concat!(
    r#"{"a_pk": "772932f9ddceb7b9d90b437f38acfb17acc4773e796d3d4beed44799633fe931","#,
    r#""z_sk": "0332294e641fa30b5a70bf83fbda3138e44de30d5120260a2da1ecdf15e658fa","#,
    r#""z_sk_inv": "0139db0b0e1a37875aa406e030e2adcdb2cdc5ad985b9ce488180672a751aa47","#,
    r#""pk": "2fc067d5954f1941f182a430e5e2e9d0a425c011f208979ea0f41661d5c18754","#,
    r#""chain_id": 1, "asset_id": 2, "balance": 500, "delta_amount": 500,"#,
    r#""a_t_fee": "25fc4b54ead99833d3a50d35bb59eb16d2128a801c4b048c0d8fb373537cdc62","#,
    r#""z_bar_r_fee": "01dc59baac147e13074095ac85e368772c0bc909e064933ab54d3ee0f794d7ab","#,
    r#""c_fee": "15aff4afa788429ba71025c03f3575a1ba7fed44014106bc10d7e03053482314"#,
    r#"ad49c0b606b04ea58ae448a06e26dddf7e436068e4c357f37cfc08b7cfa96fe9","#,
    r#""t_fee": "83fe1e2ea358699bbe578cbb38f235db2c43a3f07296c97667c2854d727a4038","#,
    r#""gas_fee_asset_id": 0, "gas_fee": 30}"#,
);

/// Fiat-Shamir challenge of [`PINNED_PROOF`], big-endian hex
pub(crate) const PINNED_CHALLENGE: &str =
    "06f3cd1bc3442897d74e31a9fb55e7ea4f4bf27d28dcb3790d8f1ec713149285";
