//! Variable representation in R1CS

use std::fmt;

/// Index into a constraint system's assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variable {
    pub index: usize,
}

impl Variable {
    /// The variable pinned to the constant one
    pub const ONE: Variable = Variable { index: 0 };

    pub fn new(index: usize) -> Self {
        Self { index }
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.index == 0 {
            write!(f, "one")
        } else {
            write!(f, "v{}", self.index)
        }
    }
}
