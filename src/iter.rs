//! Iterator implementations for `BitVector`.

use core::{
    borrow::Borrow,
    iter::{FromIterator, FusedIterator},
};

use crate::{BitVector, BitVectorBuilder, macros::bitpos};

/// A borrowing iterator over the bits of a [`BitVector`], leftmost first.
///
/// Created by [`BitVector::iter`].
pub type Iter<'a> = Bits<&'a BitVector>;

/// An owning iterator over the bits of a [`BitVector`], leftmost first.
///
/// Created by the [`IntoIterator`] implementation for [`BitVector`].
pub type IntoIter = Bits<BitVector>;

/// An iterator over the bits of a vector as `bool`s.
///
/// The iterator is double-ended, so `rev()` walks from the least significant
/// bit back to the most significant one.
///
/// # Examples
///
/// ```
/// use packed_bitvector::BitVector;
///
/// let bv = BitVector::from_bit_str("1101")?;
/// let bits: Vec<bool> = bv.iter().collect();
/// assert_eq!(bits, vec![true, true, false, true]);
///
/// let back: String = bv.iter().rev().map(|b| if b { '1' } else { '0' }).collect();
/// assert_eq!(back, "1011");
/// # Ok::<(), packed_bitvector::Error>(())
/// ```
#[derive(Clone)]
pub struct Bits<S: Borrow<BitVector>> {
    source: S,
    front: usize,
    back: usize,
}

impl<S: Borrow<BitVector>> Bits<S> {
    fn new(source: S) -> Self {
        let back = source.borrow().len();
        Self {
            source,
            front: 0,
            back,
        }
    }
}

impl<S: Borrow<BitVector>> Iterator for Bits<S> {
    type Item = bool;

    #[inline]
    fn next(&mut self) -> Option<bool> {
        if self.front >= self.back {
            return None;
        }
        let bit = self.source.borrow().bit(self.front);
        self.front += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len();
        (n, Some(n))
    }

    fn nth(&mut self, n: usize) -> Option<bool> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<S: Borrow<BitVector>> DoubleEndedIterator for Bits<S> {
    #[inline]
    fn next_back(&mut self) -> Option<bool> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.source.borrow().bit(self.back))
    }
}

impl<S: Borrow<BitVector>> ExactSizeIterator for Bits<S> {
    fn len(&self) -> usize {
        self.back.saturating_sub(self.front)
    }
}

impl<S: Borrow<BitVector>> FusedIterator for Bits<S> {}

/// An iterator over the positions of set bits, in ascending order.
///
/// Created by [`BitVector::iter_ones`]. Whole zero words are skipped in one step.
///
/// # Examples
///
/// ```
/// use packed_bitvector::BitVector;
///
/// let bv = BitVector::from_bit_str("0100100001")?;
/// assert_eq!(bv.iter_ones().collect::<Vec<_>>(), vec![1, 4, 9]);
/// assert_eq!(bv.iter_ones().rev().next(), Some(9));
/// # Ok::<(), packed_bitvector::Error>(())
/// ```
#[derive(Clone)]
pub struct Ones<'a> {
    words: &'a [u64],
    pos: usize,  // next position to examine (forward)
    rpos: usize, // one past the last position to examine (reverse)
}

impl<'a> Ones<'a> {
    pub(crate) fn new(bv: &'a BitVector, from: usize) -> Self {
        Self {
            words: bv.as_words(),
            pos: from.min(bv.len()),
            rpos: bv.len(),
        }
    }
}

impl Iterator for Ones<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.pos < self.rpos {
            let (mut wi, bi) = bitpos!(self.pos);
            let word = self.words[wi] >> bi;
            if word == 0 {
                wi += 1;
                while wi < self.words.len() && self.words[wi] == 0 {
                    wi += 1;
                }
                self.pos = wi * 64;
                continue;
            }

            let result = self.pos + word.trailing_zeros() as usize;
            if result >= self.rpos {
                self.pos = self.rpos;
                return None;
            }
            self.pos = result + 1;
            return Some(result);
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len();
        (n, Some(n))
    }
}

impl DoubleEndedIterator for Ones<'_> {
    fn next_back(&mut self) -> Option<usize> {
        while self.rpos > self.pos {
            let (wi, bi) = bitpos!(self.rpos - 1);
            let mask = if bi == 63 { !0 } else { (1u64 << (bi + 1)) - 1 };
            let word = self.words[wi] & mask;
            if word == 0 {
                self.rpos = wi * 64;
                continue;
            }

            let result = wi * 64 + 63 - word.leading_zeros() as usize;
            if result < self.pos {
                self.rpos = self.pos;
                return None;
            }
            self.rpos = result;
            return Some(result);
        }

        None
    }
}

impl ExactSizeIterator for Ones<'_> {
    fn len(&self) -> usize {
        if self.pos >= self.rpos {
            return 0;
        }

        let (wmin, bmin) = bitpos!(self.pos);
        let (wmax, bmax) = bitpos!(self.rpos);
        let low = !((1u64 << bmin) - 1);

        if wmin == wmax {
            let high = (1u64 << bmax) - 1;
            return (self.words[wmin] & low & high).count_ones() as usize;
        }

        let mut count = (self.words[wmin] & low).count_ones() as usize;
        count += self.words[wmin + 1..wmax]
            .iter()
            .map(|w| w.count_ones() as usize)
            .sum::<usize>();
        if bmax > 0 {
            count += (self.words[wmax] & ((1u64 << bmax) - 1)).count_ones() as usize;
        }
        count
    }
}

impl FusedIterator for Ones<'_> {}

impl BitVector {
    /// Returns an iterator over the bits, leftmost first.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Bits::new(self)
    }

    /// Returns an iterator over the positions of the set bits.
    #[must_use]
    pub fn iter_ones(&self) -> Ones<'_> {
        Ones::new(self, 0)
    }
}

impl<'a> IntoIterator for &'a BitVector {
    type IntoIter = Iter<'a>;
    type Item = bool;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for BitVector {
    type IntoIter = IntoIter;
    type Item = bool;

    fn into_iter(self) -> Self::IntoIter {
        Bits::new(self)
    }
}

impl FromIterator<bool> for BitVector {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut builder = BitVectorBuilder::with_capacity(iter.size_hint().0);
        builder.extend(iter);
        builder.finalize()
    }
}

/// Appends bits to the right end, growing the vector.
impl Extend<bool> for BitVector {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let mut builder = BitVectorBuilder::with_capacity(self.len() + iter.size_hint().0);
        builder.extend_from_bitvector(self);
        builder.extend(iter);
        builder.finalize_into(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_ones_across_words() {
        let mut bv = BitVector::zeros(200);
        for pos in [0, 63, 64, 130, 199] {
            bv.set(pos, true).unwrap();
        }
        assert_eq!(bv.iter_ones().collect::<Vec<_>>(), [0, 63, 64, 130, 199]);
        assert_eq!(bv.iter_ones().rev().collect::<Vec<_>>(), [199, 130, 64, 63, 0]);
        assert_eq!(bv.iter_ones().len(), 5);
    }

    #[test]
    fn test_ones_meet_in_middle() {
        let bv = BitVector::ones(70);
        let mut it = bv.iter_ones();
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.next_back(), Some(69));
        assert_eq!(it.len(), 68);
        assert_eq!(it.by_ref().count(), 68);
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_ones_from_offset() {
        let bv = BitVector::from_bit_str("1001001").unwrap();
        assert_eq!(Ones::new(&bv, 1).collect::<Vec<_>>(), [3, 6]);
        assert_eq!(Ones::new(&bv, 7).next(), None);
    }

    #[test]
    fn test_bits_double_ended() {
        let bv = BitVector::from_bit_str("10").unwrap();
        let mut it = bv.iter();
        assert_eq!(it.len(), 2);
        assert_eq!(it.next_back(), Some(false));
        assert_eq!(it.next(), Some(true));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_extend_grows_right() {
        let mut bv = BitVector::from_bit_str("1").unwrap();
        bv.extend([false, true]);
        assert_eq!(bv.len(), 3);
        assert_eq!(bv.into_iter().collect::<Vec<_>>(), [true, false, true]);
    }
}
