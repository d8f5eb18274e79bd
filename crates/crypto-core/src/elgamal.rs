//! Twisted ElGamal ciphertexts over Jubjub
//!
//! `Encrypt(b, Pk, r) = { CL = r·Pk, CR = r·G + b·H }`. Ciphertexts under the
//! same key add component-wise, and the sum encrypts the sum of the amounts
//! under the sum of the randomness.

use crate::{params, Point, Scalar};
use group::Group;
use jubjub::ExtendedPoint;
use std::ops::{Add, Neg, Sub};
use subtle::ConstantTimeEq;

/// An encrypted amount
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ciphertext {
    left: Point,
    right: Point,
}

impl Ciphertext {
    /// Build a ciphertext from already validated components
    pub fn new(left: Point, right: Point) -> Self {
        Self { left, right }
    }

    /// Encrypt `amount` under `pk` with randomness `r`
    pub fn encrypt(amount: u64, pk: &Point, r: &Scalar) -> Self {
        let params = params();
        Self {
            left: *pk * r,
            right: params.g * r + params.h * Scalar::from(amount),
        }
    }

    /// The identity pair; decrypts to zero under every key
    pub fn zero() -> Self {
        Self {
            left: Point::identity(),
            right: Point::identity(),
        }
    }

    /// Randomness component `CL`
    pub fn left(&self) -> &Point {
        &self.left
    }

    /// Value component `CR`
    pub fn right(&self) -> &Point {
        &self.right
    }

    /// Subtract a known plaintext by adding `-amount·H` to `CR`
    pub fn sub_plain(&self, amount: u64) -> Self {
        Self {
            left: self.left,
            right: self.right - params().h * Scalar::from(amount),
        }
    }

    /// Whether `CR − sk⁻¹·CL == amount·H`
    ///
    /// A zero key never opens anything.
    pub fn opens_to(&self, sk: &Scalar, amount: u64) -> bool {
        match Option::<Scalar>::from(sk.invert()) {
            Some(sk_inv) => {
                let opened = ExtendedPoint::from(self.right - self.left * sk_inv);
                let expected = ExtendedPoint::from(params().h * Scalar::from(amount));
                opened.ct_eq(&expected).into()
            }
            None => false,
        }
    }
}

impl Add for Ciphertext {
    type Output = Ciphertext;

    fn add(self, rhs: Ciphertext) -> Ciphertext {
        Ciphertext {
            left: self.left + rhs.left,
            right: self.right + rhs.right,
        }
    }
}

impl Neg for Ciphertext {
    type Output = Ciphertext;

    fn neg(self) -> Ciphertext {
        Ciphertext {
            left: -self.left,
            right: -self.right,
        }
    }
}

impl Sub for Ciphertext {
    type Output = Ciphertext;

    fn sub(self, rhs: Ciphertext) -> Ciphertext {
        self + (-rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ff::Field;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn keypair(seed: u64) -> (Scalar, Point) {
        let mut rng = StdRng::seed_from_u64(seed);
        let sk = Scalar::random(&mut rng);
        (sk, params().g * sk)
    }

    #[test]
    fn test_encrypt_opens() {
        let (sk, pk) = keypair(1);
        let c = Ciphertext::encrypt(1_000, &pk, &Scalar::from(77u64));
        assert!(c.opens_to(&sk, 1_000));
        assert!(!c.opens_to(&sk, 999));
        assert!(!c.opens_to(&Scalar::ZERO, 1_000));
    }

    #[test]
    fn test_sub_plain() {
        let (sk, pk) = keypair(2);
        let c = Ciphertext::encrypt(50, &pk, &Scalar::from(5u64));
        let debited = c.sub_plain(20);
        assert_eq!(debited.left(), c.left());
        assert!(debited.opens_to(&sk, 30));
    }

    #[test]
    fn test_zero_is_neutral() {
        let (sk, pk) = keypair(3);
        let c = Ciphertext::encrypt(9, &pk, &Scalar::from(4u64));
        assert_eq!(c + Ciphertext::zero(), c);
        assert_eq!(c - c, Ciphertext::zero());
        assert!(Ciphertext::zero().opens_to(&sk, 0));
    }

    proptest! {
        #[test]
        fn prop_addition_is_homomorphic(
            a in any::<u32>(),
            b in any::<u32>(),
            r1 in any::<u64>(),
            r2 in any::<u64>(),
        ) {
            let (sk, pk) = keypair(4);
            let (r1, r2) = (Scalar::from(r1), Scalar::from(r2));
            let sum = Ciphertext::encrypt(a as u64, &pk, &r1)
                + Ciphertext::encrypt(b as u64, &pk, &r2);
            let expected = Ciphertext::encrypt(a as u64 + b as u64, &pk, &(r1 + r2));
            prop_assert_eq!(sum, expected);
            prop_assert!(sum.opens_to(&sk, a as u64 + b as u64));
        }
    }
}
