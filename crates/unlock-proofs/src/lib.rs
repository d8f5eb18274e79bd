//! # Unlock Proofs
//!
//! Zero-knowledge proof that a requester may pay a gas fee out of an
//! encrypted balance: knowledge of the secret key behind `Pk`, and a correct
//! homomorphic debit of the fee from the fee ciphertext `C_fee`.
//!
//! ## Components
//!
//! - [`statement`]: transcript order and Fiat-Shamir challenge
//! - [`prover`]: proof generation from the secret key and fee balance
//! - [`proof`]: proof data, native verification and the verification entry point
//! - [`codec`]: fail-closed string form of a proof
//! - [`witness`]: circuit assignment of a natively verified proof
//! - [`circuit`]: the verification equations as R1CS constraints
//! - [`batch`]: parallel verification and slot padding
//! - [`segment`]: JSON input for the prover
//!
//! ## Example
//!
//! ```rust
//! use unlock_proofs::{prove_unlock, verify_unlock, UnlockContext, UnlockRequest};
//! use crypto_core::{params, Ciphertext, PrivateKey, Scalar};
//! use rand::rngs::OsRng;
//!
//! let sk = PrivateKey::generate(&mut OsRng);
//! let pk = params().g * sk.as_scalar();
//! let request = UnlockRequest {
//!     context: UnlockContext { gas_fee: 10, ..UnlockContext::default() },
//!     sk,
//!     c_fee: Ciphertext::encrypt(100, &pk, &Scalar::from(7u64)),
//!     b_fee: 100,
//! };
//!
//! let proof = prove_unlock(&mut OsRng, &request).unwrap();
//! let outcome = verify_unlock(&proof, &request.context).unwrap();
//! assert!(outcome.valid);
//! ```

pub mod batch;
pub mod circuit;
pub mod codec;
pub mod errors;
pub mod proof;
pub mod prover;
pub mod segment;
pub mod statement;
pub mod witness;

#[cfg(test)]
mod fixtures;

// Re-export key types
pub use batch::{build_batch, pad_witnesses, verify_batch, BatchConfig};
pub use circuit::UnlockCircuit;
pub use codec::parse_unlock_proof;
pub use errors::{Result, UnlockError};
pub use proof::{verify_unlock, UnlockContext, UnlockProof, Verification};
pub use prover::{prove_unlock, UnlockRequest};
pub use segment::parse_unlock_segment;
pub use statement::UnlockStatement;
pub use witness::UnlockWitness;
