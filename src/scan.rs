//! Population counts, set-bit scans, rank queries and runs.

use alloc::vec::Vec;

use crate::{
    BitVector,
    error::{Error, Result},
    iter::Ones,
};

/// A maximal run of identical bits, as returned by [`BitVector::runs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    /// The repeated bit
    pub bit: bool,
    /// Number of consecutive copies, at least one
    pub len: usize,
}

impl BitVector {
    /// Counts the set bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitvector::BitVector;
    ///
    /// let bv = BitVector::from_integer_sized(45u8, 16)?;
    /// assert_eq!(bv.count_ones(), 4);
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.as_words()
            .iter()
            .map(|w| w.count_ones() as usize)
            .sum()
    }

    /// Counts the set bits by clearing the lowest set bit of each word until
    /// it is zero.
    ///
    /// The work is proportional to the number of set bits, which pays off for
    /// long, mostly-zero vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitvector::BitVector;
    ///
    /// let mut bv = BitVector::zeros(2_000_000);
    /// for pos in [345, 1233, 20003, 999999, 1999999] {
    ///     bv.set(pos, true)?;
    /// }
    /// assert_eq!(bv.count_ones_sparse(), 5);
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    #[must_use]
    pub fn count_ones_sparse(&self) -> usize {
        let mut count = 0;
        for &word in self.as_words() {
            let mut w = word;
            while w != 0 {
                w &= w - 1;
                count += 1;
            }
        }
        count
    }

    /// Returns the smallest position `>= from` holding a one.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitvector::BitVector;
    ///
    /// let bv = BitVector::from_bit_str("00000000000001")?;
    /// assert_eq!(bv.next_set_bit(5), Some(13));
    /// assert_eq!(bv.next_set_bit(14), None);
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    #[must_use]
    pub fn next_set_bit(&self, from: usize) -> Option<usize> {
        Ones::new(self, from).next()
    }

    /// Returns the number of ones in `[0, position]`, given that the bit at
    /// `position` is itself set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `position` is not a bit of the
    /// vector and [`Error::BitNotSet`] if the bit there is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitvector::BitVector;
    ///
    /// let bv = BitVector::from_bit_str("01010101011100")?;
    /// assert_eq!(bv.rank_at(10)?, 6);
    /// assert!(bv.rank_at(0).is_err());
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    pub fn rank_at(&self, position: usize) -> Result<usize> {
        if !self.get(position)? {
            return Err(Error::BitNotSet(position));
        }
        let (wi, bi) = (position >> 6, position & 63);
        let full: usize = self.as_words()[..wi]
            .iter()
            .map(|w| w.count_ones() as usize)
            .sum();
        let mask = if bi == 63 { !0 } else { (1u64 << (bi + 1)) - 1 };
        Ok(full + (self.as_words()[wi] & mask).count_ones() as usize)
    }

    /// Splits the vector into maximal runs of identical bits, left to right.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyVector`] if the vector has no bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitvector::{BitVector, Run};
    ///
    /// let bv = BitVector::from_bit_str("1100011")?;
    /// assert_eq!(
    ///     bv.runs()?,
    ///     vec![
    ///         Run { bit: true, len: 2 },
    ///         Run { bit: false, len: 3 },
    ///         Run { bit: true, len: 2 },
    ///     ]
    /// );
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    pub fn runs(&self) -> Result<Vec<Run>> {
        let mut bits = self.iter();
        let Some(first) = bits.next() else {
            return Err(Error::EmptyVector("runs"));
        };

        let mut runs = Vec::new();
        let mut current = Run { bit: first, len: 1 };
        for bit in bits {
            if bit == current.bit {
                current.len += 1;
            } else {
                runs.push(current);
                current = Run { bit, len: 1 };
            }
        }
        runs.push(current);
        Ok(runs)
    }

    /// Returns `true` if the unsigned value is a power of two.
    ///
    /// Evaluated as `v & (v - 1) == 0` with zero excluded.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitvector::BitVector;
    ///
    /// assert!(BitVector::from_bit_str("00100")?.is_power_of_two());
    /// assert!(!BitVector::from_bit_str("00110")?.is_power_of_two());
    /// assert!(!BitVector::zeros(8).is_power_of_two());
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    #[must_use]
    pub fn is_power_of_two(&self) -> bool {
        let value = self.to_biguint();
        if value.bits() == 0 {
            return false;
        }
        let below = &value - 1u32;
        (value & below).bits() == 0
    }

    /// Same as [`is_power_of_two`](Self::is_power_of_two), decided by a
    /// sparse population count of exactly one.
    #[must_use]
    pub fn is_power_of_two_sparse(&self) -> bool {
        self.count_ones_sparse() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_set_bit_skips_zero_words() {
        let mut bv = BitVector::zeros(300);
        bv.set(257, true).unwrap();
        assert_eq!(bv.next_set_bit(0), Some(257));
        assert_eq!(bv.next_set_bit(257), Some(257));
        assert_eq!(bv.next_set_bit(258), None);
        assert_eq!(bv.next_set_bit(1000), None);
    }

    #[test]
    fn test_rank_across_words() {
        let bv = BitVector::ones(150);
        assert_eq!(bv.rank_at(0).unwrap(), 1);
        assert_eq!(bv.rank_at(63).unwrap(), 64);
        assert_eq!(bv.rank_at(149).unwrap(), 150);
        assert!(bv.rank_at(150).is_err());
    }

    #[test]
    fn test_counts_agree() {
        let bv = BitVector::from_integer(0xdead_beef_u32).concat(&BitVector::ones(100));
        assert_eq!(bv.count_ones(), bv.count_ones_sparse());
        assert_eq!(bv.count_ones(), 24 + 100);
    }

    #[test]
    fn test_single_run() {
        let bv = BitVector::zeros(65);
        assert_eq!(bv.runs().unwrap(), [Run { bit: false, len: 65 }]);
        assert!(BitVector::new().runs().is_err());
    }

    #[test]
    fn test_power_of_two_variants_agree() {
        for s in ["1", "10", "0001000", "11", "0", "101"] {
            let bv = BitVector::from_bit_str(s).unwrap();
            assert_eq!(bv.is_power_of_two(), bv.is_power_of_two_sparse(), "{s}");
        }
    }
}
