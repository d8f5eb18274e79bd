//! Linear combination representation for R1CS

use crate::Variable;
use ff::PrimeField;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// `coefficient · variable`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term<F: PrimeField> {
    pub coefficient: F,
    pub variable: Variable,
}

impl<F: PrimeField> Term<F> {
    pub fn new(coefficient: F, variable: Variable) -> Self {
        Self {
            coefficient,
            variable,
        }
    }
}

/// `Σ cᵢ·vᵢ`; constants are terms on [`Variable::ONE`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearCombination<F: PrimeField> {
    pub terms: Vec<Term<F>>,
}

impl<F: PrimeField> LinearCombination<F> {
    /// The empty sum
    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    pub fn from_variable(variable: Variable) -> Self {
        Self {
            terms: vec![Term::new(F::ONE, variable)],
        }
    }

    /// `constant · ONE`
    pub fn from_constant(constant: F) -> Self {
        Self {
            terms: vec![Term::new(constant, Variable::ONE)],
        }
    }

    pub fn add_term(&mut self, coefficient: F, variable: Variable) {
        self.terms.push(Term::new(coefficient, variable));
    }

    /// Builder form of [`Self::add_term`]
    pub fn with_term(mut self, coefficient: F, variable: Variable) -> Self {
        self.add_term(coefficient, variable);
        self
    }

    /// Scale every coefficient in place
    pub fn mul_scalar(&mut self, scalar: F) {
        for term in &mut self.terms {
            term.coefficient *= scalar;
        }
    }

    /// Evaluate the linear combination given a full assignment
    ///
    /// Out-of-range variables are rejected when a constraint is recorded, so
    /// every index here is in bounds.
    pub fn evaluate(&self, assignment: &[F]) -> F {
        self.terms
            .iter()
            .fold(F::ZERO, |acc, term| acc + term.coefficient * assignment[term.variable.index])
    }

    /// Largest variable index mentioned, if any
    pub fn max_index(&self) -> Option<usize> {
        self.terms.iter().map(|t| t.variable.index).max()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<F: PrimeField> Default for LinearCombination<F> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<F: PrimeField> From<Variable> for LinearCombination<F> {
    fn from(variable: Variable) -> Self {
        Self::from_variable(variable)
    }
}

impl<F: PrimeField> fmt::Display for LinearCombination<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }

        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{:?}*{}", term.coefficient, term.variable)?;
        }
        Ok(())
    }
}

// Arithmetic operations
impl<F: PrimeField> Add for LinearCombination<F> {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self.terms.extend_from_slice(&other.terms);
        self
    }
}

impl<F: PrimeField> Add<&LinearCombination<F>> for LinearCombination<F> {
    type Output = Self;

    fn add(mut self, other: &Self) -> Self {
        self.terms.extend_from_slice(&other.terms);
        self
    }
}

impl<F: PrimeField> Add<Variable> for LinearCombination<F> {
    type Output = Self;

    fn add(self, variable: Variable) -> Self {
        self.with_term(F::ONE, variable)
    }
}

impl<F: PrimeField> Neg for LinearCombination<F> {
    type Output = Self;

    fn neg(self) -> Self {
        self * -F::ONE
    }
}

impl<F: PrimeField> Sub for LinearCombination<F> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + (-other)
    }
}

impl<F: PrimeField> Sub<Variable> for LinearCombination<F> {
    type Output = Self;

    fn sub(self, variable: Variable) -> Self {
        self.with_term(-F::ONE, variable)
    }
}

impl<F: PrimeField> Mul<F> for LinearCombination<F> {
    type Output = Self;

    fn mul(mut self, scalar: F) -> Self {
        self.mul_scalar(scalar);
        self
    }
}
