//! R1CS constraint representation

use crate::LinearCombination;
use ff::PrimeField;
use std::fmt;

/// An R1CS constraint: A * B = C
/// where A, B, and C are linear combinations of variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint<F: PrimeField> {
    pub annotation: String,
    pub a: LinearCombination<F>,
    pub b: LinearCombination<F>,
    pub c: LinearCombination<F>,
}

impl<F: PrimeField> Constraint<F> {
    /// Create a new constraint
    pub fn new(
        annotation: impl Into<String>,
        a: LinearCombination<F>,
        b: LinearCombination<F>,
        c: LinearCombination<F>,
    ) -> Self {
        Self {
            annotation: annotation.into(),
            a,
            b,
            c,
        }
    }

    /// Check if the constraint is satisfied by the given assignment
    pub fn is_satisfied(&self, assignment: &[F]) -> bool {
        let a_val = self.a.evaluate(assignment);
        let b_val = self.b.evaluate(assignment);
        let c_val = self.c.evaluate(assignment);

        a_val * b_val == c_val
    }

    /// Largest variable index referenced by any side
    pub fn max_index(&self) -> Option<usize> {
        [self.a.max_index(), self.b.max_index(), self.c.max_index()]
            .into_iter()
            .flatten()
            .max()
    }
}

impl<F: PrimeField> fmt::Display for Constraint<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ({}) * ({}) = ({})", self.annotation, self.a, self.b, self.c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Variable;
    use bls12_381::Scalar as Fr;

    #[test]
    fn test_constraint_satisfaction() {
        let x = Variable::new(1);
        let y = Variable::new(2);
        let z = Variable::new(3);

        // Constraint: x * y = z
        let constraint = Constraint::<Fr>::new("mul", x.into(), y.into(), z.into());
        assert_eq!(constraint.max_index(), Some(3));

        // Satisfying assignment: [1, 3, 4, 12]
        let assignment = vec![Fr::from(1u64), Fr::from(3u64), Fr::from(4u64), Fr::from(12u64)];
        assert!(constraint.is_satisfied(&assignment));

        let bad_assignment = vec![Fr::from(1u64), Fr::from(3u64), Fr::from(4u64), Fr::from(13u64)];
        assert!(!constraint.is_satisfied(&bad_assignment));
    }
}
