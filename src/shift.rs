//! In-place circular and non-circular shifts.
//!
//! "Left" moves bits toward index 0, the most significant end. Because bits
//! sit LSB-first inside each word, a logical left shift is a right shift of
//! the words with carries flowing from word `w + 1` down into word `w`.

use crate::{
    BitVector,
    error::{Error, Result},
};

impl BitVector {
    /// Shifts every word one bit toward index 0 and returns the bit that
    /// fell off the left end.
    fn step_left(&mut self) -> bool {
        let first = self.bit(0);
        let words = &mut *self.array;
        for w in 0..words.len() {
            let carry = words.get(w + 1).map_or(0, |next| next & 1);
            words[w] = (words[w] >> 1) | (carry << 63);
        }
        first
    }

    /// Shifts every word one bit away from index 0 and returns the bit that
    /// fell off the right end.
    fn step_right(&mut self) -> bool {
        let last = self.bit(self.size - 1);
        let mut carry = 0;
        for word in self.array.iter_mut() {
            let out = *word >> 63;
            *word = (*word << 1) | carry;
            carry = out;
        }
        self.clear_tail();
        last
    }

    fn circular_left_by_one(&mut self) {
        let wrapped = self.step_left();
        let pos = self.size - 1;
        self.put(pos, wrapped);
    }

    fn circular_right_by_one(&mut self) {
        let wrapped = self.step_right();
        self.put(0, wrapped);
    }

    /// Rotates left by `n`, doing nothing on an empty vector.
    pub(crate) fn rotate_left_by(&mut self, n: usize) {
        if self.is_empty() {
            return;
        }
        for _ in 0..n % self.size {
            self.circular_left_by_one();
        }
    }

    /// Rotates right by `n`, doing nothing on an empty vector.
    pub(crate) fn rotate_right_by(&mut self, n: usize) {
        if self.is_empty() {
            return;
        }
        for _ in 0..n % self.size {
            self.circular_right_by_one();
        }
    }

    /// Rotates the bits `n` positions toward index 0, in place.
    ///
    /// Bits leaving the left end re-enter on the right. A negative `n`
    /// rotates right instead.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyVector`] if the vector has no bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitvector::BitVector;
    ///
    /// let mut bv = BitVector::from_bit_str("1000110")?;
    /// bv.circular_shift_left(2)?;
    /// assert_eq!(bv.to_string(), "0011010");
    /// bv.circular_shift_left(-2)?;
    /// assert_eq!(bv.to_string(), "1000110");
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    pub fn circular_shift_left(&mut self, n: isize) -> Result<&mut Self> {
        if self.is_empty() {
            return Err(Error::EmptyVector("circular shift"));
        }
        if n < 0 {
            self.rotate_right_by(n.unsigned_abs());
        } else {
            self.rotate_left_by(n.unsigned_abs());
        }
        Ok(self)
    }

    /// Rotates the bits `n` positions away from index 0, in place.
    ///
    /// A negative `n` rotates left instead.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyVector`] if the vector has no bits.
    pub fn circular_shift_right(&mut self, n: isize) -> Result<&mut Self> {
        if self.is_empty() {
            return Err(Error::EmptyVector("circular shift"));
        }
        if n < 0 {
            self.rotate_left_by(n.unsigned_abs());
        } else {
            self.rotate_right_by(n.unsigned_abs());
        }
        Ok(self)
    }

    /// Shifts the bits `n` positions toward index 0, filling with zeros on
    /// the right. The size never changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitvector::BitVector;
    ///
    /// let mut bv = BitVector::from_bit_str("10101101")?;
    /// assert_eq!(bv.shift_left(3).to_string(), "01101000");
    /// assert_eq!(bv.shift_left(20).to_string(), "00000000");
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    pub fn shift_left(&mut self, n: usize) -> &mut Self {
        if self.is_empty() {
            return self;
        }
        for _ in 0..n.min(self.size) {
            self.step_left();
            let pos = self.size - 1;
            self.put(pos, false);
        }
        self
    }

    /// Shifts the bits `n` positions away from index 0, filling with zeros on
    /// the left. The size never changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitvector::BitVector;
    ///
    /// let mut bv = BitVector::from_bit_str("10101101")?;
    /// assert_eq!(bv.shift_right(3).to_string(), "00010101");
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    pub fn shift_right(&mut self, n: usize) -> &mut Self {
        if self.is_empty() {
            return self;
        }
        for _ in 0..n.min(self.size) {
            self.step_right();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_rotation_crosses_words() {
        let mut bv = BitVector::zeros(130);
        bv.set(0, true).unwrap();
        bv.circular_shift_left(1).unwrap();
        assert!(bv.get(129).unwrap());
        assert_eq!(bv.count_ones(), 1);
        assert_eq!(bv.as_words()[2], 0b10);

        bv.circular_shift_right(1).unwrap();
        assert!(bv.get(0).unwrap());

        bv.circular_shift_right(64).unwrap();
        assert!(bv.get(64).unwrap());
        assert_eq!(bv.count_ones(), 1);
    }

    #[test]
    fn test_right_rotation_keeps_tail_clear() {
        let mut bv = BitVector::ones(70);
        bv.circular_shift_right(3).unwrap();
        assert_eq!(bv.as_words()[1] >> 6, 0);
        assert_eq!(bv.count_ones(), 70);
    }

    #[test]
    fn test_shift_by_multiple_of_size_is_identity() {
        let mut bv = BitVector::from_bit_str("10110").unwrap();
        bv.circular_shift_left(10).unwrap();
        assert_eq!(bv.to_string(), "10110");
        bv.circular_shift_right(-5).unwrap();
        assert_eq!(bv.to_string(), "10110");
    }

    #[test]
    fn test_empty_vector_shifts() {
        let mut bv = BitVector::new();
        assert!(bv.circular_shift_left(1).is_err());
        assert!(bv.circular_shift_right(0).is_err());
        assert!(bv.shift_left(3).is_empty());
        assert!(bv.shift_right(3).is_empty());
    }

    #[test]
    fn test_shift_returns_self() {
        let mut bv = BitVector::from_bit_str("0110").unwrap();
        let addr = &bv as *const BitVector;
        let returned = bv.circular_shift_left(1).unwrap() as *const BitVector;
        assert_eq!(addr, returned);
    }
}
