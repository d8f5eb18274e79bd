//! Signed transactions
//!
//! A transaction body knows its domain tag and field order. Signing hashes the
//! body and wraps it with the signature; the result is never mutated.

use crate::hash::{MessageHasher, MsgHash};
use crypto_core::{PublicKey, Result, Signature, Signer};
use log::{debug, warn};
use serde::Serialize;

/// The typed fields of one transaction kind
pub trait TxBody: Sized {
    /// Human readable kind, used in logs
    const KIND: &'static str;

    /// Domain tag prefixed to the hashed fields
    const DOMAIN: &'static [u8];

    /// Decode and validate a JSON segment
    fn from_segment(segment: &str) -> Result<Self>;

    /// Write every field, in declared order
    fn write_fields(&self, hasher: &mut MessageHasher);

    fn msg_hash(&self) -> MsgHash {
        let mut hasher = MessageHasher::new(Self::DOMAIN);
        self.write_fields(&mut hasher);
        hasher.finalize()
    }
}

/// A signed transaction
pub trait TxInfo {
    fn msg_hash(&self) -> MsgHash;

    fn sig(&self) -> &Signature;

    /// Check the signature over the message hash
    fn verify(&self, pk: &PublicKey) -> bool {
        pk.verify(&self.msg_hash(), self.sig())
    }
}

/// A transaction body together with its signature
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignedTx<T> {
    #[serde(flatten)]
    tx: T,
    sig: Signature,
}

impl<T: TxBody> SignedTx<T> {
    /// Hash `tx` and sign the hash
    pub fn sign<S: Signer + ?Sized>(tx: T, signer: &S) -> Result<Self> {
        let msg_hash = tx.msg_hash();
        let sig = signer.sign(&msg_hash).map_err(|err| {
            warn!("failed to sign {} transaction: {err}", T::KIND);
            err
        })?;
        debug!("signed {} transaction", T::KIND);
        Ok(Self { tx, sig })
    }

    pub fn tx(&self) -> &T {
        &self.tx
    }
}

impl<T: TxBody> TxInfo for SignedTx<T> {
    fn msg_hash(&self) -> MsgHash {
        self.tx.msg_hash()
    }

    fn sig(&self) -> &Signature {
        &self.sig
    }
}

/// Decode, validate, hash and sign a segment
///
/// The signer is only reached once the whole segment has validated.
pub fn construct<T: TxBody, S: Signer + ?Sized>(signer: &S, segment: &str) -> Result<SignedTx<T>> {
    let tx = T::from_segment(segment)?;
    SignedTx::sign(tx, signer)
}
