//! Boolean variables and selection

use super::num::AllocatedNum;
use crate::{ConstraintSystem, LinearCombination, Result, Variable};
use ff::PrimeField;

/// A variable constrained to 0 or 1
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Boolean {
    variable: Variable,
    value: bool,
}

impl Boolean {
    /// Allocate a bit and enforce `b·(1 − b) = 0`
    pub fn alloc<F, CS>(cs: &mut CS, value: bool) -> Result<Self>
    where
        F: PrimeField,
        CS: ConstraintSystem<F>,
    {
        let variable = cs.alloc(if value { F::ONE } else { F::ZERO });
        cs.enforce(
            "boolean",
            variable.into(),
            LinearCombination::from_constant(F::ONE) - variable,
            LinearCombination::zero(),
        )?;
        Ok(Self { variable, value })
    }

    pub fn variable(&self) -> Variable {
        self.variable
    }

    pub fn value(&self) -> bool {
        self.value
    }

    pub fn lc<F: PrimeField>(&self) -> LinearCombination<F> {
        self.variable.into()
    }

    /// `if self { if_true } else { if_false }` via `b·(t − f) = out − f`
    pub fn select<F, CS>(
        &self,
        cs: &mut CS,
        if_true: &AllocatedNum<F>,
        if_false: &AllocatedNum<F>,
    ) -> Result<AllocatedNum<F>>
    where
        F: PrimeField,
        CS: ConstraintSystem<F>,
    {
        let value = if self.value { if_true.value() } else { if_false.value() };
        let out = AllocatedNum::alloc(cs, value);
        cs.enforce(
            "select",
            self.lc(),
            if_true.lc() - if_false.lc(),
            out.lc() - if_false.lc(),
        )?;
        Ok(out)
    }

    /// Selection between two constants
    pub fn select_constant<F, CS>(
        &self,
        cs: &mut CS,
        if_true: F,
        if_false: F,
    ) -> Result<AllocatedNum<F>>
    where
        F: PrimeField,
        CS: ConstraintSystem<F>,
    {
        let value = if self.value { if_true } else { if_false };
        let out = AllocatedNum::alloc(cs, value);
        cs.enforce(
            "select constant",
            self.lc(),
            LinearCombination::from_constant(if_true - if_false),
            out.lc() - LinearCombination::from_constant(if_false),
        )?;
        Ok(out)
    }
}
