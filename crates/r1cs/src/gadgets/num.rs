//! Allocated field elements

use super::{le_bits, Boolean};
use crate::{ConstraintSystem, LinearCombination, R1CSError, Result, Variable};
use ff::PrimeField;

/// A variable together with its assigned value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocatedNum<F: PrimeField> {
    variable: Variable,
    value: F,
}

impl<F: PrimeField> AllocatedNum<F> {
    pub fn alloc<CS: ConstraintSystem<F>>(cs: &mut CS, value: F) -> Self {
        Self {
            variable: cs.alloc(value),
            value,
        }
    }

    pub fn alloc_input<CS: ConstraintSystem<F>>(cs: &mut CS, value: F) -> Self {
        Self {
            variable: cs.alloc_input(value),
            value,
        }
    }

    /// Allocate a variable pinned to `value`
    pub fn constant<CS: ConstraintSystem<F>>(cs: &mut CS, value: F) -> Result<Self> {
        let num = Self::alloc(cs, value);
        cs.enforce(
            "constant",
            num.lc(),
            LinearCombination::from_constant(F::ONE),
            LinearCombination::from_constant(value),
        )?;
        Ok(num)
    }

    pub fn variable(&self) -> Variable {
        self.variable
    }

    pub fn value(&self) -> F {
        self.value
    }

    pub fn lc(&self) -> LinearCombination<F> {
        self.variable.into()
    }

    /// `self · other`
    pub fn mul<CS: ConstraintSystem<F>>(&self, cs: &mut CS, other: &Self) -> Result<Self> {
        let product = Self::alloc(cs, self.value * other.value);
        cs.enforce("mul", self.lc(), other.lc(), product.lc())?;
        Ok(product)
    }

    /// Decompose into `count` little-endian bits and enforce `Σ 2^i·b_i = self`
    ///
    /// A value that does not fit in `count` bits leaves the sum constraint
    /// unsatisfied.
    pub fn to_bits_le<CS: ConstraintSystem<F>>(
        &self,
        cs: &mut CS,
        count: usize,
    ) -> Result<Vec<Boolean>> {
        if count > F::CAPACITY as usize {
            return Err(R1CSError::DecompositionTooWide {
                requested: count,
                capacity: F::CAPACITY,
            });
        }

        let mut bits = Vec::with_capacity(count);
        let mut sum = LinearCombination::zero();
        let mut coeff = F::ONE;
        for bit in le_bits(&self.value, count) {
            let bit = Boolean::alloc(cs, bit)?;
            sum.add_term(coeff, bit.variable());
            coeff = coeff.double();
            bits.push(bit);
        }

        cs.enforce(
            "bit decomposition",
            sum,
            LinearCombination::from_constant(F::ONE),
            self.lc(),
        )?;
        Ok(bits)
    }

    /// Enforce `enabled · (self − other) = 0`
    pub fn enforce_equal_if<CS: ConstraintSystem<F>>(
        &self,
        cs: &mut CS,
        enabled: &Boolean,
        other: &Self,
    ) -> Result<()> {
        cs.enforce(
            "gated equality",
            enabled.lc(),
            self.lc() - other.lc(),
            LinearCombination::zero(),
        )
    }
}
