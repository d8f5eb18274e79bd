//! Error types for constraint synthesis

use thiserror::Error;

/// Result type for constraint synthesis
pub type Result<T> = std::result::Result<T, R1CSError>;

/// Errors raised while building a constraint system
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum R1CSError {
    /// A constraint referenced a variable that was never allocated
    #[error("constraint `{annotation}` references unallocated variable {index}")]
    VariableOutOfBounds { annotation: String, index: usize },

    /// A bit decomposition was requested wider than the field allows
    #[error("cannot decompose into {requested} bits, field capacity is {capacity}")]
    DecompositionTooWide { requested: usize, capacity: u32 },

    /// A fixed-base table is shorter than the scalar it multiplies
    #[error("fixed-base table has {available} entries, {required} required")]
    TableTooShort { available: usize, required: usize },
}
