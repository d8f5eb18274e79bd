//! Canonical message hashes
//!
//! Every field is widened to a 32-byte big-endian chunk, the width of one
//! circuit field element. Chunks follow a per-type domain tag and the whole
//! stream is hashed with Blake2b-512, then reduced into the base field.

use blake2::{Blake2b512, Digest};
use byteorder::{BigEndian, ByteOrder};
use crypto_core::Base;

/// Width of one serialized field
pub const CHUNK_SIZE: usize = 32;

/// Size of a message hash
pub const MSG_HASH_SIZE: usize = 32;

/// A message hash: the canonical encoding of a base field element
pub type MsgHash = [u8; MSG_HASH_SIZE];

pub(crate) fn chunk(value: u64) -> [u8; CHUNK_SIZE] {
    let mut chunk = [0u8; CHUNK_SIZE];
    BigEndian::write_u64(&mut chunk[CHUNK_SIZE - 8..], value);
    chunk
}

/// Streaming hasher over fixed-width transaction fields
pub struct MessageHasher {
    hasher: Blake2b512,
}

impl MessageHasher {
    pub fn new(domain: &[u8]) -> Self {
        let mut hasher = Blake2b512::new();
        hasher.update(domain);
        Self { hasher }
    }

    pub fn write_u32(&mut self, value: u32) -> &mut Self {
        self.write_u64(value as u64)
    }

    pub fn write_u64(&mut self, value: u64) -> &mut Self {
        self.hasher.update(chunk(value));
        self
    }

    /// Reduce the digest into the base field and encode it
    pub fn finalize(self) -> MsgHash {
        let mut wide = [0u8; 64];
        wide.copy_from_slice(&self.hasher.finalize());
        Base::from_bytes_wide(&wide).to_bytes()
    }
}
