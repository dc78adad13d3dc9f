//! Miller-Rabin primality testing and random prime candidates.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};
use rand::Rng;
use tracing::{debug, trace};

use crate::{
    BitVector,
    error::{Error, Result},
};

/// Fixed Miller-Rabin witnesses.
pub const WITNESSES: [u32; 7] = [2, 3, 5, 7, 11, 13, 17];

/// Confidence reported when every witness passes: `1 - 4^-7`.
pub const PROBABLE_PRIME_CONFIDENCE: f64 = 1.0 - 1.0 / 16384.0;

/// Verdict of [`BitVector::test_for_primality`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primality {
    /// Certainly composite (or below 2).
    Composite,
    /// Certainly prime: the value is one of the witnesses.
    Prime,
    /// Survived every witness.
    Probable {
        /// Probability that the value is prime
        confidence: f64,
    },
}

impl Primality {
    /// Probability that the value is prime: 0, 1, or the Miller-Rabin
    /// confidence.
    #[must_use]
    pub const fn confidence(&self) -> f64 {
        match *self {
            Self::Composite => 0.0,
            Self::Prime => 1.0,
            Self::Probable { confidence } => confidence,
        }
    }

    /// Returns `true` unless the value is known to be composite.
    #[must_use]
    pub const fn is_probably_prime(&self) -> bool {
        !matches!(self, Self::Composite)
    }
}

impl BitVector {
    /// Runs the Miller-Rabin test on the unsigned value with the witnesses
    /// `2, 3, 5, 7, 11, 13, 17`.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitvector::{BitVector, Primality, PROBABLE_PRIME_CONFIDENCE};
    ///
    /// let p = BitVector::from_integer(233u8);
    /// assert_eq!(
    ///     p.test_for_primality(),
    ///     Primality::Probable { confidence: PROBABLE_PRIME_CONFIDENCE }
    /// );
    /// assert_eq!(BitVector::from_integer(13u8).test_for_primality(), Primality::Prime);
    /// assert_eq!(BitVector::from_integer(221u8).test_for_primality(), Primality::Composite);
    /// ```
    #[must_use]
    pub fn test_for_primality(&self) -> Primality {
        let p = self.to_biguint();
        let verdict = miller_rabin(&p);
        debug!(value = %p, ?verdict, "primality verdict");
        verdict
    }

    /// Generates `width` random bits for use as a prime candidate.
    ///
    /// The two most significant bits and the least significant bit are
    /// forced to 1, so the candidate is odd and spans the full width.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WidthTooSmall`] if `width` is below 2.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitvector::BitVector;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let candidate = BitVector::gen_rand_bits_for_prime(32, &mut rng)?;
    /// assert_eq!(candidate.len(), 32);
    /// assert!(candidate.get(0)? && candidate.get(1)? && candidate.get(-1)?);
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    pub fn gen_rand_bits_for_prime<R: Rng + ?Sized>(width: usize, rng: &mut R) -> Result<Self> {
        if width < 2 {
            return Err(Error::WidthTooSmall(width));
        }
        let mut candidate = Self::zeros(width);
        for word in candidate.array.iter_mut() {
            *word = rng.next_u64();
        }
        candidate.clear_tail();
        for pos in [0, 1, width - 1] {
            candidate.put(pos, true);
        }
        trace!(width, %candidate, "generated prime candidate");
        Ok(candidate)
    }

    /// [`gen_rand_bits_for_prime`](Self::gen_rand_bits_for_prime) with the
    /// thread-local generator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WidthTooSmall`] if `width` is below 2.
    #[cfg(feature = "std")]
    pub fn random_prime_candidate(width: usize) -> Result<Self> {
        Self::gen_rand_bits_for_prime(width, &mut rand::thread_rng())
    }
}

fn miller_rabin(p: &BigUint) -> Primality {
    if p < &BigUint::from(2u8) {
        return Primality::Composite;
    }
    if let Some(small) = p.to_u32()
        && WITNESSES.contains(&small)
    {
        return Primality::Prime;
    }
    if WITNESSES.iter().any(|&a| (p % a).is_zero()) {
        return Primality::Composite;
    }

    // p - 1 = 2^k * q with q odd
    let p_minus_one = p - 1u32;
    let k = p_minus_one.trailing_zeros().unwrap_or(0);
    let q = &p_minus_one >> k;

    'witness: for a in WITNESSES {
        let mut x = BigUint::from(a).modpow(&q, p);
        if x.is_one() || x == p_minus_one {
            continue;
        }
        for _ in 1..k {
            x = x.modpow(&BigUint::from(2u8), p);
            if x == p_minus_one {
                continue 'witness;
            }
        }
        return Primality::Composite;
    }

    Primality::Probable {
        confidence: PROBABLE_PRIME_CONFIDENCE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_small_values() {
        for v in 0u8..2 {
            assert_eq!(
                BitVector::from_integer(v).test_for_primality(),
                Primality::Composite
            );
        }
        assert_eq!(BitVector::new().test_for_primality(), Primality::Composite);
        assert_eq!(BitVector::from_integer(17u8).test_for_primality(), Primality::Prime);
        assert_eq!(BitVector::from_integer(21u8).test_for_primality(), Primality::Composite);
    }

    #[test]
    fn test_agrees_with_trial_division() {
        for n in 2u32..2000 {
            let expected = (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0);
            let verdict = BitVector::from_integer(n).test_for_primality();
            assert_eq!(verdict.is_probably_prime(), expected, "{n}");
        }
    }

    #[test]
    fn test_carmichael_number_is_composite() {
        // 19 * 199 * 271, no factor among the witnesses
        let bv = BitVector::from_integer(1_024_651u32);
        assert_eq!(bv.test_for_primality(), Primality::Composite);
    }

    #[test]
    fn test_candidate_width_checks() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            BitVector::gen_rand_bits_for_prime(1, &mut rng),
            Err(Error::WidthTooSmall(1))
        ));
        let two = BitVector::gen_rand_bits_for_prime(2, &mut rng).unwrap();
        assert_eq!(two.count_ones(), 2);

        for width in [3, 64, 65, 200] {
            let c = BitVector::gen_rand_bits_for_prime(width, &mut rng).unwrap();
            assert_eq!(c.len(), width);
            assert!(c.get(0).unwrap() && c.get(1).unwrap() && c.get(-1).unwrap());
            assert_eq!(c.as_words().last().unwrap() & !crate::storage::tail_mask(width), 0);
        }
    }
}
