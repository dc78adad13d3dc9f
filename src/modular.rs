//! Integer GCD and modular inverses over the unsigned value of a vector.

use num_bigint::BigInt;
use num_traits::{One, Zero};
use tracing::debug;

use crate::{
    BitVector,
    error::{Error, Result},
};

/// Outcome of a multiplicative inverse computation.
///
/// Both the integer inverse ([`BitVector::multiplicative_inverse`]) and the
/// GF(2^n) inverse ([`BitVector::gf_multiplicative_inverse`]) report a
/// missing inverse as a value rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inverse {
    /// The inverse exists.
    Found(BitVector),
    /// The operand and the modulus share a factor.
    NotInvertible {
        /// Greatest common divisor of operand and modulus
        gcd: BitVector,
    },
}

impl Inverse {
    /// Returns the inverse, if there is one.
    #[must_use]
    pub fn found(self) -> Option<BitVector> {
        match self {
            Self::Found(bv) => Some(bv),
            Self::NotInvertible { .. } => None,
        }
    }

    /// Returns `true` if an inverse exists.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl BitVector {
    /// Greatest common divisor of the unsigned values, as the shortest
    /// vector holding it.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitvector::BitVector;
    ///
    /// let a = BitVector::from_integer(91u8);
    /// let b = BitVector::from_integer(143u8);
    /// assert_eq!(a.gcd(&b), BitVector::from_integer(13u8));
    /// ```
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let (mut a, mut b) = (self.to_biguint(), other.to_biguint());
        if a < b {
            core::mem::swap(&mut a, &mut b);
        }
        while !b.is_zero() {
            let r = &a % &b;
            a = b;
            b = r;
        }
        Self::from_integer(a)
    }

    /// Multiplicative inverse of the unsigned value modulo `modulus`.
    ///
    /// The inverse is returned as the shortest vector holding it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroModulus`] if `modulus` has value zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitvector::{BitVector, Inverse};
    ///
    /// let a = BitVector::from_integer(17u8);
    /// let m = BitVector::from_integer(32u8);
    /// assert_eq!(a.multiplicative_inverse(&m)?, Inverse::Found(BitVector::from_integer(17u8)));
    ///
    /// let even = BitVector::from_integer(6u8);
    /// assert!(!even.multiplicative_inverse(&m)?.is_found());
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    pub fn multiplicative_inverse(&self, modulus: &Self) -> Result<Inverse> {
        let modulus_value = modulus.to_biguint();
        if modulus_value.is_zero() {
            return Err(Error::ZeroModulus);
        }

        let mut num = BigInt::from(self.to_biguint());
        let mut rem = BigInt::from(modulus_value.clone());
        let (mut x, mut x_old) = (BigInt::zero(), BigInt::one());
        while !rem.is_zero() {
            let quotient = &num / &rem;
            let next_rem = &num % &rem;
            num = core::mem::replace(&mut rem, next_rem);
            let next_x = &x_old - &x * &quotient;
            x_old = core::mem::replace(&mut x, next_x);
        }

        let gcd = num.to_biguint().unwrap_or_default();
        if !gcd.is_one() {
            debug!(value = %self, %gcd, "no multiplicative inverse");
            return Ok(Inverse::NotInvertible {
                gcd: Self::from_integer(gcd),
            });
        }

        let modulus_signed = BigInt::from(modulus_value);
        let inverse = ((x_old % &modulus_signed) + &modulus_signed) % &modulus_signed;
        Ok(Inverse::Found(Self::from_integer(
            inverse.to_biguint().unwrap_or_default(),
        )))
    }

    /// Returns `true` if the unsigned value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.as_words().iter().all(|&w| w == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use num_bigint::BigUint;

    #[test]
    fn test_gcd_zero_operands() {
        let zero = BitVector::from_integer(0u8);
        let seven = BitVector::from_integer(7u8);
        assert_eq!(zero.gcd(&seven), seven);
        assert_eq!(seven.gcd(&zero), seven);
        assert_eq!(zero.gcd(&zero).to_string(), "0");
    }

    #[test]
    fn test_gcd_ignores_padding() {
        let a = BitVector::from_integer_sized(102u8, 20).unwrap();
        let b = BitVector::from_integer(26u8);
        assert_eq!(a.gcd(&b).to_biguint(), BigUint::from(2u8));
    }

    #[test]
    fn test_inverse_reports_gcd() {
        let a = BitVector::from_integer(12u8);
        let m = BitVector::from_integer(18u8);
        assert_eq!(
            a.multiplicative_inverse(&m).unwrap(),
            Inverse::NotInvertible {
                gcd: BitVector::from_integer(6u8)
            }
        );
    }

    #[test]
    fn test_inverse_is_reduced() {
        let m = BitVector::from_integer(101u8);
        for v in 1u8..101 {
            let a = BitVector::from_integer(v);
            let inv = a.multiplicative_inverse(&m).unwrap().found().unwrap();
            let product = a.to_biguint() * inv.to_biguint() % 101u32;
            assert!(product.is_one(), "{v}");
        }
    }

    #[test]
    fn test_inverse_zero_modulus() {
        let a = BitVector::from_integer(3u8);
        assert!(matches!(
            a.multiplicative_inverse(&BitVector::zeros(4)),
            Err(Error::ZeroModulus)
        ));
    }
}
