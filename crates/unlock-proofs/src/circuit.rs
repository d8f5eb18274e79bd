//! Unlock verification as rank-1 constraints
//!
//! The same two equations as native verification, with each final point
//! equality gated by the `is_enabled` bit. Public context values, the statement
//! points and the challenge are circuit inputs; `T_fee` and the responses are
//! private.
//!
//! The circuit does not hash. A verifier binds the challenge by checking the
//! public inputs against [`UnlockStatement::public_inputs`], whose last entry
//! is the transcript challenge of the same statement.
//!
//! [`UnlockStatement::public_inputs`]: crate::statement::UnlockStatement::public_inputs

use crate::witness::UnlockWitness;
use crate::Result;
use crypto_core::{params, AffineCoords, Base, AMOUNT_BITS, SCALAR_BITS};
use r1cs::gadgets::{AllocatedNum, AllocatedPoint, Boolean, EdwardsCurve};
use r1cs::{ConstraintSystem, R1CS};

/// The unlock circuit over one witness slot
#[derive(Clone, Debug)]
pub struct UnlockCircuit {
    witness: UnlockWitness,
}

fn table(powers: &[AffineCoords]) -> Vec<(Base, Base)> {
    powers.iter().map(AffineCoords::to_pair).collect()
}

fn alloc_point<CS: ConstraintSystem<Base>>(
    cs: &mut CS,
    coords: &AffineCoords,
    curve: &EdwardsCurve<Base>,
) -> Result<AllocatedPoint<Base>> {
    let point = AllocatedPoint::alloc(cs, coords.to_pair());
    point.assert_on_curve(cs, curve)?;
    Ok(point)
}

fn alloc_input_point<CS: ConstraintSystem<Base>>(
    cs: &mut CS,
    coords: &AffineCoords,
    curve: &EdwardsCurve<Base>,
) -> Result<AllocatedPoint<Base>> {
    let point = AllocatedPoint::alloc_input(cs, coords.to_pair());
    point.assert_on_curve(cs, curve)?;
    Ok(point)
}

fn alloc_bits<CS: ConstraintSystem<Base>>(
    cs: &mut CS,
    value: Base,
    count: usize,
) -> Result<Vec<Boolean>> {
    let num = AllocatedNum::alloc(cs, value);
    Ok(num.to_bits_le(cs, count)?)
}

impl UnlockCircuit {
    pub fn new(witness: UnlockWitness) -> Self {
        Self { witness }
    }

    /// Lay out the circuit and assign the witness
    pub fn synthesize<CS: ConstraintSystem<Base>>(&self, cs: &mut CS) -> Result<()> {
        let params = params();
        let curve = EdwardsCurve {
            a: params.coeff_a,
            d: params.coeff_d,
        };
        let g_table = table(params.g_powers());
        let h_table = table(params.h_powers());
        let w = &self.witness;

        let is_enabled = Boolean::alloc(cs, w.is_enabled)?;

        // public context
        AllocatedNum::alloc_input(cs, w.chain_id);
        AllocatedNum::alloc_input(cs, w.asset_id);
        AllocatedNum::alloc_input(cs, w.balance);
        AllocatedNum::alloc_input(cs, w.delta_amount);
        AllocatedNum::alloc_input(cs, w.gas_fee_asset_id);
        let gas_fee = AllocatedNum::alloc_input(cs, w.gas_fee);
        let gas_fee_bits = gas_fee.to_bits_le(cs, AMOUNT_BITS)?;

        // public statement points, in transcript order
        let pk = alloc_input_point(cs, &w.pk, &curve)?;
        let a_pk = alloc_input_point(cs, &w.a_pk, &curve)?;
        let a_t_fee = alloc_input_point(cs, &w.a_t_fee, &curve)?;
        let c_fee_left = alloc_input_point(cs, &w.c_fee_left, &curve)?;
        let c_fee_right = alloc_input_point(cs, &w.c_fee_right, &curve)?;

        let c = AllocatedNum::alloc_input(cs, w.challenge);
        let c = c.to_bits_le(cs, SCALAR_BITS)?;

        let t_fee = alloc_point(cs, &w.t_fee, &curve)?;
        let z_sk = alloc_bits(cs, w.z_sk, SCALAR_BITS)?;
        let z_sk_inv = alloc_bits(cs, w.z_sk_inv, SCALAR_BITS)?;
        let z_bar_r_fee = alloc_bits(cs, w.z_bar_r_fee, SCALAR_BITS)?;

        // G·Z_sk == c·Pk + A_pk
        let l1 = AllocatedPoint::mul_fixed(cs, &z_sk, &g_table, &curve)?;
        let r1 = pk.mul(cs, &c, &curve)?.add(cs, &a_pk, &curve)?;
        l1.enforce_equal_if(cs, &is_enabled, &r1)?;

        // G·Z_bar_r_fee + Z_skInv·(−CL) == A_T_fee + c·(T_fee − (CR − gas_fee·H))
        let fee_h = AllocatedPoint::mul_fixed(cs, &gas_fee_bits, &h_table, &curve)?;
        let fee_h_neg = fee_h.negate(cs)?;
        let c_r_delta = c_fee_right.add(cs, &fee_h_neg, &curve)?;
        let c_r_prime = c_r_delta.negate(cs)?;
        let t_div_r_prime = t_fee.add(cs, &c_r_prime, &curve)?;
        let c_l_neg = c_fee_left.negate(cs)?;

        let g_z_bar = AllocatedPoint::mul_fixed(cs, &z_bar_r_fee, &g_table, &curve)?;
        let c_l_z = c_l_neg.mul(cs, &z_sk_inv, &curve)?;
        let l2 = g_z_bar.add(cs, &c_l_z, &curve)?;
        let r2 = t_div_r_prime.mul(cs, &c, &curve)?;
        let r2 = a_t_fee.add(cs, &r2, &curve)?;
        l2.enforce_equal_if(cs, &is_enabled, &r2)?;

        Ok(())
    }

    /// Synthesize into a fresh constraint system
    pub fn to_r1cs(&self) -> Result<R1CS<Base>> {
        let mut cs = R1CS::new();
        self.synthesize(&mut cs)?;
        Ok(cs)
    }
}
