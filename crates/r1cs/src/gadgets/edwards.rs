//! Twisted Edwards point arithmetic
//!
//! Points on `a·u² + v² = 1 + d·u²·v²` are pairs of allocated coordinates.
//! The addition law is complete when `a` is a square and `d` is not, which
//! holds for Jubjub, so doubling and adding the identity need no special
//! cases.

use super::{AllocatedNum, Boolean};
use crate::{ConstraintSystem, LinearCombination, R1CSError, Result};
use ff::PrimeField;

/// Coefficients of a twisted Edwards curve
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdwardsCurve<F: PrimeField> {
    pub a: F,
    pub d: F,
}

impl<F: PrimeField> EdwardsCurve<F> {
    /// Native complete addition, used to assign the gadget's outputs
    ///
    /// A vanishing denominator cannot occur on a complete curve; if the
    /// inputs are off-curve it is assigned zero and the division constraint
    /// fails instead.
    pub fn add(&self, p: (F, F), q: (F, F)) -> (F, F) {
        let (x1, y1) = p;
        let (x2, y2) = q;
        let m = x1 * x2;
        let n = y1 * y2;
        let dt = self.d * m * n;
        let x_num = x1 * y2 + y1 * x2;
        let y_num = n - self.a * m;
        let x3 = Option::<F>::from((F::ONE + dt).invert()).map_or(F::ZERO, |inv| x_num * inv);
        let y3 = Option::<F>::from((F::ONE - dt).invert()).map_or(F::ZERO, |inv| y_num * inv);
        (x3, y3)
    }
}

/// A curve point with allocated `(u, v)` coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocatedPoint<F: PrimeField> {
    u: AllocatedNum<F>,
    v: AllocatedNum<F>,
}

impl<F: PrimeField> AllocatedPoint<F> {
    /// Allocate private coordinates; callers check curve membership separately
    pub fn alloc<CS: ConstraintSystem<F>>(cs: &mut CS, (u, v): (F, F)) -> Self {
        Self {
            u: AllocatedNum::alloc(cs, u),
            v: AllocatedNum::alloc(cs, v),
        }
    }

    /// Allocate public coordinates
    pub fn alloc_input<CS: ConstraintSystem<F>>(cs: &mut CS, (u, v): (F, F)) -> Self {
        Self {
            u: AllocatedNum::alloc_input(cs, u),
            v: AllocatedNum::alloc_input(cs, v),
        }
    }

    /// The neutral element `(0, 1)`
    pub fn identity<CS: ConstraintSystem<F>>(cs: &mut CS) -> Result<Self> {
        Ok(Self {
            u: AllocatedNum::constant(cs, F::ZERO)?,
            v: AllocatedNum::constant(cs, F::ONE)?,
        })
    }

    pub fn u(&self) -> &AllocatedNum<F> {
        &self.u
    }

    pub fn v(&self) -> &AllocatedNum<F> {
        &self.v
    }

    pub fn value(&self) -> (F, F) {
        (self.u.value(), self.v.value())
    }

    /// Enforce `a·u² + v² = 1 + d·u²·v²`
    pub fn assert_on_curve<CS: ConstraintSystem<F>>(
        &self,
        cs: &mut CS,
        curve: &EdwardsCurve<F>,
    ) -> Result<()> {
        let uu = self.u.mul(cs, &self.u)?;
        let vv = self.v.mul(cs, &self.v)?;
        let uuvv = uu.mul(cs, &vv)?;
        cs.enforce(
            "on curve",
            uu.lc() * curve.a + vv.variable(),
            LinearCombination::from_constant(F::ONE),
            LinearCombination::from_constant(F::ONE) + uuvv.lc() * curve.d,
        )
    }

    /// `(−u, v)`
    pub fn negate<CS: ConstraintSystem<F>>(&self, cs: &mut CS) -> Result<Self> {
        let u = AllocatedNum::alloc(cs, -self.u.value());
        cs.enforce(
            "negate",
            self.u.lc() + u.variable(),
            LinearCombination::from_constant(F::ONE),
            LinearCombination::zero(),
        )?;
        Ok(Self { u, v: self.v })
    }

    /// Complete twisted Edwards addition
    pub fn add<CS: ConstraintSystem<F>>(
        &self,
        cs: &mut CS,
        other: &Self,
        curve: &EdwardsCurve<F>,
    ) -> Result<Self> {
        let t = self.u.mul(cs, &other.v)?;
        let s = self.v.mul(cs, &other.u)?;
        let m = self.u.mul(cs, &other.u)?;
        let n = self.v.mul(cs, &other.v)?;
        let tp = m.mul(cs, &n)?;

        let (u3, v3) = curve.add(self.value(), other.value());
        let u3 = AllocatedNum::alloc(cs, u3);
        let v3 = AllocatedNum::alloc(cs, v3);

        // u3 · (1 + d·tp) = t + s
        cs.enforce(
            "edwards add u",
            u3.lc(),
            LinearCombination::from_constant(F::ONE) + tp.lc() * curve.d,
            t.lc() + s.variable(),
        )?;
        // v3 · (1 − d·tp) = n − a·m
        cs.enforce(
            "edwards add v",
            v3.lc(),
            LinearCombination::from_constant(F::ONE) - tp.lc() * curve.d,
            n.lc() - m.lc() * curve.a,
        )?;

        Ok(Self { u: u3, v: v3 })
    }

    pub fn double<CS: ConstraintSystem<F>>(
        &self,
        cs: &mut CS,
        curve: &EdwardsCurve<F>,
    ) -> Result<Self> {
        self.add(cs, self, curve)
    }

    /// `if cond { if_true } else { if_false }`
    pub fn select<CS: ConstraintSystem<F>>(
        cs: &mut CS,
        cond: &Boolean,
        if_true: &Self,
        if_false: &Self,
    ) -> Result<Self> {
        Ok(Self {
            u: cond.select(cs, &if_true.u, &if_false.u)?,
            v: cond.select(cs, &if_true.v, &if_false.v)?,
        })
    }

    /// Enforce equality of both coordinates when `enabled` is set
    pub fn enforce_equal_if<CS: ConstraintSystem<F>>(
        &self,
        cs: &mut CS,
        enabled: &Boolean,
        other: &Self,
    ) -> Result<()> {
        self.u.enforce_equal_if(cs, enabled, &other.u)?;
        self.v.enforce_equal_if(cs, enabled, &other.v)
    }

    /// Fixed-base multiplication from a table of `2^i·B`, bits little-endian
    pub fn mul_fixed<CS: ConstraintSystem<F>>(
        cs: &mut CS,
        bits: &[Boolean],
        table: &[(F, F)],
        curve: &EdwardsCurve<F>,
    ) -> Result<Self> {
        if table.len() < bits.len() {
            return Err(R1CSError::TableTooShort {
                available: table.len(),
                required: bits.len(),
            });
        }

        let mut acc: Option<Self> = None;
        for (bit, &(u, v)) in bits.iter().zip(table) {
            let addend = Self {
                u: bit.select_constant(cs, u, F::ZERO)?,
                v: bit.select_constant(cs, v, F::ONE)?,
            };
            acc = Some(match acc {
                Some(acc) => acc.add(cs, &addend, curve)?,
                None => addend,
            });
        }

        match acc {
            Some(acc) => Ok(acc),
            None => Self::identity(cs),
        }
    }

    /// Variable-base double-and-add, bits little-endian
    pub fn mul<CS: ConstraintSystem<F>>(
        &self,
        cs: &mut CS,
        bits: &[Boolean],
        curve: &EdwardsCurve<F>,
    ) -> Result<Self> {
        let mut acc = Self::identity(cs)?;
        let mut base = *self;
        for (i, bit) in bits.iter().enumerate() {
            let sum = acc.add(cs, &base, curve)?;
            acc = Self::select(cs, bit, &sum, &acc)?;
            if i + 1 < bits.len() {
                base = base.double(cs, curve)?;
            }
        }
        Ok(acc)
    }
}
