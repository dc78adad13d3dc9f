//! Boolean algebra, concatenation and comparison for `BitVector`.
//!
//! Binary operations on vectors of different sizes first pad the shorter
//! operand with zeros on the left, so the operands line up by integer value
//! and the result has the larger of the two sizes.

use alloc::borrow::Cow;
use core::cmp::Ordering;

use crate::{
    BitVector, BitVectorBuilder,
    error::{Error, Result},
};

impl BitVector {
    /// Lines up two operands, left-padding the shorter one with zeros.
    fn aligned<'a>(&'a self, other: &'a Self) -> (Cow<'a, Self>, Cow<'a, Self>) {
        match self.len().cmp(&other.len()) {
            Ordering::Equal => (Cow::Borrowed(self), Cow::Borrowed(other)),
            Ordering::Less => (
                Cow::Owned(self.padded_left(other.len() - self.len())),
                Cow::Borrowed(other),
            ),
            Ordering::Greater => (
                Cow::Borrowed(self),
                Cow::Owned(other.padded_left(self.len() - other.len())),
            ),
        }
    }

    /// Combines two vectors word by word.
    ///
    /// `op` must map a pair of zero words to zero so the tail stays clear.
    #[inline(always)]
    fn zip_words(&self, other: &Self, op: impl Fn(u64, u64) -> u64) -> Self {
        let (a, b) = self.aligned(other);
        let mut out = a.into_owned();
        for (dst, src) in out.array.iter_mut().zip(b.as_words()) {
            *dst = op(*dst, *src);
        }
        out
    }

    /// Returns the bitwise AND of two vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitvector::BitVector;
    ///
    /// let a = BitVector::from_integer(6u8);
    /// let b = BitVector::from_integer(13u8);
    /// assert_eq!(a.and(&b).to_string(), "0100");
    /// ```
    #[must_use]
    pub fn and(&self, other: &Self) -> Self {
        self.zip_words(other, |a, b| a & b)
    }

    /// Returns the bitwise OR of two vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitvector::BitVector;
    ///
    /// let a = BitVector::from_integer(6u8);
    /// let b = BitVector::from_integer(13u8);
    /// assert_eq!(a.or(&b).to_string(), "1111");
    /// ```
    #[must_use]
    pub fn or(&self, other: &Self) -> Self {
        self.zip_words(other, |a, b| a | b)
    }

    /// Returns the bitwise XOR of two vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitvector::BitVector;
    ///
    /// let a = BitVector::from_integer(1u8);
    /// let b = BitVector::from_integer(13u8);
    /// assert_eq!(a.xor(&b).to_string(), "1100");
    /// ```
    #[must_use]
    pub fn xor(&self, other: &Self) -> Self {
        self.zip_words(other, |a, b| a ^ b)
    }

    /// Returns a new vector with every bit inverted.
    #[must_use]
    pub fn not(&self) -> Self {
        let mut out = self.clone();
        out.invert();
        out
    }

    /// Inverts every bit in place.
    pub fn invert(&mut self) {
        for word in self.array.iter_mut() {
            *word = !*word;
        }
        self.clear_tail();
    }

    /// Returns `self` followed by `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitvector::BitVector;
    ///
    /// let a = BitVector::from_bit_str("110")?;
    /// let b = BitVector::from_bit_str("01")?;
    /// assert_eq!(a.concat(&b).to_string(), "11001");
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut builder = BitVectorBuilder::with_capacity(self.len() + other.len());
        builder.extend_from_bitvector(self);
        builder.extend_from_bitvector(other);
        builder.finalize()
    }

    /// Returns `true` if `needle` occurs at some offset of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyVector`] if `self` is empty and
    /// [`Error::PatternTooLong`] if `needle` is longer than `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitvector::BitVector;
    ///
    /// let hay = BitVector::from_bit_str("0011001100")?;
    /// assert!(hay.contains(&BitVector::from_bit_str("011")?)?);
    /// assert!(!hay.contains(&BitVector::from_bit_str("111")?)?);
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    pub fn contains(&self, needle: &Self) -> Result<bool> {
        if self.is_empty() {
            return Err(Error::EmptyVector("contains"));
        }
        if needle.len() > self.len() {
            return Err(Error::PatternTooLong {
                needle: needle.len(),
                haystack: self.len(),
            });
        }
        Ok((0..=self.len() - needle.len())
            .any(|start| (0..needle.len()).all(|i| self.bit(start + i) == needle.bit(i))))
    }

    fn ensure_same_size(&self, other: &Self) -> Result<()> {
        if self.len() != other.len() {
            return Err(Error::LengthMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }
        Ok(())
    }

    /// Number of positions at which two equal-sized vectors differ.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the sizes differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitvector::BitVector;
    ///
    /// let a = BitVector::from_bit_str("11111111")?;
    /// let b = BitVector::from_bit_str("00101011")?;
    /// assert_eq!(a.hamming_distance(&b)?, 4);
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    pub fn hamming_distance(&self, other: &Self) -> Result<usize> {
        self.ensure_same_size(other)?;
        Ok(self
            .as_words()
            .iter()
            .zip(other.as_words())
            .map(|(a, b)| (a ^ b).count_ones() as usize)
            .sum())
    }

    /// Size of the intersection of the set bits over the size of their
    /// union.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the sizes differ and
    /// [`Error::BothZero`] if neither vector has a set bit.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitvector::BitVector;
    ///
    /// let a = BitVector::from_bit_str("11111111")?;
    /// let b = BitVector::from_bit_str("00101011")?;
    /// assert_eq!(a.jaccard_similarity(&b)?, 0.5);
    /// assert_eq!(a.jaccard_distance(&b)?, 0.5);
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    pub fn jaccard_similarity(&self, other: &Self) -> Result<f64> {
        self.ensure_same_size(other)?;
        let (mut inter, mut union) = (0usize, 0usize);
        for (a, b) in self.as_words().iter().zip(other.as_words()) {
            inter += (a & b).count_ones() as usize;
            union += (a | b).count_ones() as usize;
        }
        if union == 0 {
            return Err(Error::BothZero);
        }
        Ok(inter as f64 / union as f64)
    }

    /// `1 - jaccard_similarity`.
    ///
    /// # Errors
    ///
    /// Same as [`jaccard_similarity`](Self::jaccard_similarity).
    pub fn jaccard_distance(&self, other: &Self) -> Result<f64> {
        Ok(1.0 - self.jaccard_similarity(other)?)
    }

    /// Compares the unsigned integer values of two vectors.
    ///
    /// Sizes do not matter: `"0011"` and `"11"` compare equal here even
    /// though they are different vectors under `==`.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use packed_bitvector::BitVector;
    ///
    /// let a = BitVector::from_bit_str("0011")?;
    /// let b = BitVector::from_bit_str("11")?;
    /// let c = BitVector::from_bit_str("100")?;
    /// assert_eq!(a.cmp_value(&b), Ordering::Equal);
    /// assert_eq!(a.cmp_value(&c), Ordering::Less);
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    #[must_use]
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        let (a, b) = self.aligned(other);
        // Equal sizes now; word 0 holds the most significant bits.
        for (wa, wb) in a.as_words().iter().zip(b.as_words()) {
            if wa != wb {
                // Within a word the lowest bit is the most significant.
                let diff = wa ^ wb;
                let first = diff.trailing_zeros();
                return if (wa >> first) & 1 == 1 {
                    Ordering::Greater
                } else {
                    Ordering::Less
                };
            }
        }
        Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn bv(s: &str) -> BitVector {
        BitVector::from_bit_str(s).unwrap()
    }

    #[test]
    fn test_padding_lines_up_by_value() {
        assert_eq!(bv("1").or(&bv("1000")).to_string(), "1001");
        assert_eq!(bv("1000").or(&bv("1")).to_string(), "1001");
        assert_eq!(bv("").xor(&bv("101")).to_string(), "101");
    }

    #[test]
    fn test_invert_keeps_tail_clear() {
        let v = BitVector::zeros(65).not();
        assert_eq!(v.as_words(), &[!0, 1]);
    }

    #[test]
    fn test_cmp_value_across_words() {
        let mut big = BitVector::zeros(130);
        big.set(0, true).unwrap();
        let mut small = BitVector::zeros(130);
        small.set(129, true).unwrap();
        assert_eq!(big.cmp_value(&small), Ordering::Greater);
        assert_eq!(small.cmp_value(&big), Ordering::Less);
        assert_eq!(bv("").cmp_value(&bv("000")), Ordering::Equal);
    }

    #[test]
    fn test_contains_edges() {
        assert_eq!(bv("").contains(&bv("")).unwrap_err().kind(), crate::ErrorKind::InvalidOperation);
        assert!(bv("10").contains(&bv("101")).is_err());
        assert!(bv("10").contains(&bv("10")).unwrap());
        assert!(bv("10").contains(&bv("")).unwrap());
    }

    #[test]
    fn test_jaccard_errors() {
        assert!(matches!(bv("000").jaccard_similarity(&bv("000")), Err(Error::BothZero)));
        assert!(bv("01").jaccard_similarity(&bv("011")).is_err());
    }
}
