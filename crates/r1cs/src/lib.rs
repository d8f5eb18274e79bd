//! R1CS (Rank-1 Constraint System) implementation
//!
//! This crate provides a constraint system for expressing arithmetic circuits
//! as R1CS constraints of the form: A * B = C, where A, B, and C are linear
//! combinations of variables. Synthesis assigns values as it goes, so a built
//! system can be checked for satisfaction directly and handed to a proving
//! backend.
//!
//! The [`gadgets`] module builds booleans, bit decompositions and twisted
//! Edwards point arithmetic on top of the two primitive operations: assigning
//! a variable and enforcing a constraint.

#![forbid(unsafe_code)]

pub mod constraint;
pub mod errors;
pub mod gadgets;
pub mod linear_combination;
pub mod variable;

pub use constraint::*;
pub use errors::{R1CSError, Result};
pub use linear_combination::*;
pub use variable::*;

use ff::PrimeField;
use log::debug;

/// The operations circuit synthesis needs from a backend
pub trait ConstraintSystem<F: PrimeField> {
    /// Allocate a private variable holding `value`
    fn alloc(&mut self, value: F) -> Variable;

    /// Allocate a public input holding `value`
    fn alloc_input(&mut self, value: F) -> Variable;

    /// Record the constraint `⟨a⟩ · ⟨b⟩ = ⟨c⟩`
    fn enforce(
        &mut self,
        annotation: impl Into<String>,
        a: LinearCombination<F>,
        b: LinearCombination<F>,
        c: LinearCombination<F>,
    ) -> Result<()>;

    /// The constant "1" variable
    fn one() -> Variable {
        Variable::ONE
    }
}

/// R1CS constraint system with its assignment
#[derive(Debug, Clone)]
pub struct R1CS<F: PrimeField> {
    /// Values of every variable, index 0 holding the constant one
    assignment: Vec<F>,
    /// Indices of the public input variables, in allocation order
    inputs: Vec<usize>,
    /// Constraints in the system
    constraints: Vec<Constraint<F>>,
}

impl<F: PrimeField> R1CS<F> {
    /// Create a new empty R1CS instance
    pub fn new() -> Self {
        Self {
            assignment: vec![F::ONE],
            inputs: Vec::new(),
            constraints: Vec::new(),
        }
    }

    /// Number of variables, including the constant one
    pub fn num_variables(&self) -> usize {
        self.assignment.len()
    }

    /// Number of public input variables
    pub fn num_public_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Get the number of constraints
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn constraints(&self) -> &[Constraint<F>] {
        &self.constraints
    }

    /// The full assignment, index 0 holding the constant one
    pub fn assignment(&self) -> &[F] {
        &self.assignment
    }

    /// Values of the public inputs in allocation order
    pub fn public_inputs(&self) -> Vec<F> {
        self.inputs.iter().map(|&i| self.assignment[i]).collect()
    }

    /// Whether the assignment satisfies every constraint
    pub fn is_satisfied(&self) -> bool {
        self.which_is_unsatisfied().is_none()
    }

    /// Whether the assignment satisfies every constraint and its public
    /// inputs are exactly `expected`
    pub fn verify_with_inputs(&self, expected: &[F]) -> bool {
        if self.public_inputs() != expected {
            debug!("public inputs differ from the expected statement");
            return false;
        }
        self.is_satisfied()
    }

    /// Annotation of the first unsatisfied constraint
    pub fn which_is_unsatisfied(&self) -> Option<&str> {
        let failing = self
            .constraints
            .iter()
            .find(|constraint| !constraint.is_satisfied(&self.assignment))?;
        debug!("unsatisfied constraint: {}", failing.annotation);
        Some(failing.annotation.as_str())
    }
}

impl<F: PrimeField> ConstraintSystem<F> for R1CS<F> {
    fn alloc(&mut self, value: F) -> Variable {
        let var = Variable::new(self.assignment.len());
        self.assignment.push(value);
        var
    }

    fn alloc_input(&mut self, value: F) -> Variable {
        let var = self.alloc(value);
        self.inputs.push(var.index);
        var
    }

    fn enforce(
        &mut self,
        annotation: impl Into<String>,
        a: LinearCombination<F>,
        b: LinearCombination<F>,
        c: LinearCombination<F>,
    ) -> Result<()> {
        let constraint = Constraint::new(annotation, a, b, c);
        if let Some(index) = constraint.max_index() {
            if index >= self.assignment.len() {
                return Err(R1CSError::VariableOutOfBounds {
                    annotation: constraint.annotation,
                    index,
                });
            }
        }
        self.constraints.push(constraint);
        Ok(())
    }
}

impl<F: PrimeField> Default for R1CS<F> {
    fn default() -> Self {
        Self::new()
    }
}
