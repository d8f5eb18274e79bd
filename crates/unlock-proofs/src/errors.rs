//! Error types for unlock proofs

use crypto_core::{CryptoError, ParseError, ValidationError};
use r1cs::R1CSError;
use thiserror::Error;

/// Result type for unlock proof operations
pub type Result<T> = std::result::Result<T, UnlockError>;

/// Errors from proving, verifying or arithmetizing an unlock proof
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnlockError {
    /// A parse, validation or crypto failure
    #[error(transparent)]
    Core(#[from] crypto_core::Error),

    /// The constraint system rejected the circuit layout
    #[error("circuit synthesis failed: {0}")]
    Synthesis(#[from] R1CSError),

    /// More witnesses than the batch has slots
    #[error("batch holds {slots} slots, got {got} witnesses")]
    BatchOverflow { slots: usize, got: usize },
}

impl From<CryptoError> for UnlockError {
    fn from(err: CryptoError) -> Self {
        UnlockError::Core(err.into())
    }
}

impl From<ValidationError> for UnlockError {
    fn from(err: ValidationError) -> Self {
        UnlockError::Core(err.into())
    }
}

impl From<ParseError> for UnlockError {
    fn from(err: ParseError) -> Self {
        UnlockError::Core(err.into())
    }
}
