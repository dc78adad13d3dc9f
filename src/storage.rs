//! Internal storage representation and management for the bit vector.

use alloc::{boxed::Box, vec, vec::Vec};
use core::{
    borrow::Borrow,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut, Index, IndexMut},
};

use crate::{BitVector, macros::bitpos};

/// Width of a storage word in bits.
pub const WORD_BITS: usize = u64::BITS as usize;

/// Number of 64-bit words that can be stored inline
pub(crate) const WORDS_INLINE: usize = 2;
pub(crate) const BITS_INLINE: usize = WORD_BITS * WORDS_INLINE;

/// Number of words needed to hold `bits` bits.
#[inline(always)]
pub(crate) const fn words_for(bits: usize) -> usize {
    bits.div_ceil(WORD_BITS)
}

/// Mask selecting the bits of the last word that belong to a vector of
/// `bits` bits.
#[inline(always)]
pub(crate) const fn tail_mask(bits: usize) -> u64 {
    match bits & 63 {
        0 => !0,
        rem => (1 << rem) - 1,
    }
}

/// Word storage for a bit vector.
///
/// Vectors of up to [`BITS_INLINE`] bits keep their words in the struct
/// itself; longer vectors own a boxed slice sized exactly to
/// `ceil(size / 64)` words. Either way the slice view has exactly the word
/// count the vector needs, so callers never see spare words.
#[derive(Clone)]
pub(crate) enum BitArray {
    /// Inline words plus the number of them in use
    Inline([u64; WORDS_INLINE], usize),
    /// Heap-allocated words
    External(Box<[u64]>),
}

impl Default for BitArray {
    fn default() -> Self {
        Self::Inline([0; WORDS_INLINE], 0)
    }
}

impl From<Vec<u64>> for BitArray {
    fn from(vec: Vec<u64>) -> Self {
        if vec.len() <= WORDS_INLINE {
            let mut array = [0; WORDS_INLINE];
            array[..vec.len()].copy_from_slice(&vec);
            return Self::Inline(array, vec.len());
        }
        Self::External(vec.into_boxed_slice())
    }
}

impl BitArray {
    /// Allocates zeroed storage for `bits` bits.
    pub(crate) fn zeroed(bits: usize) -> Self {
        let words = words_for(bits);
        if bits <= BITS_INLINE {
            Self::Inline([0; WORDS_INLINE], words)
        } else {
            Self::External(vec![0; words].into_boxed_slice())
        }
    }

    /// Returns `true` if the words live on the heap.
    pub(crate) const fn is_spilled(&self) -> bool {
        matches!(self, Self::External(_))
    }
}

impl Deref for BitArray {
    type Target = [u64];

    fn deref(&self) -> &Self::Target {
        match self {
            Self::External(vec) => vec,
            Self::Inline(array, n) => &array[..*n],
        }
    }
}

impl DerefMut for BitArray {
    fn deref_mut(&mut self) -> &mut Self::Target {
        match self {
            Self::External(vec) => vec,
            Self::Inline(array, n) => &mut array[..*n],
        }
    }
}

impl AsRef<[u64]> for BitArray {
    fn as_ref(&self) -> &[u64] {
        self
    }
}

impl Borrow<[u64]> for BitArray {
    fn borrow(&self) -> &[u64] {
        self
    }
}

impl Index<usize> for BitArray {
    type Output = u64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.deref()[index]
    }
}

impl IndexMut<usize> for BitArray {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.deref_mut()[index]
    }
}

impl PartialEq for BitArray {
    fn eq(&self, other: &Self) -> bool {
        self.deref() == other.deref()
    }
}

impl Eq for BitArray {}

impl Hash for BitArray {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.deref().hash(state);
    }
}

/// A builder that packs bits, most significant first, into a
/// [`BitVector`].
///
/// Every constructor and every operation that changes a vector's length goes
/// through the builder, so freshly built vectors always own storage sized for
/// exactly their bit count with the unused tail bits cleared.
///
/// # Examples
///
/// ```
/// use packed_bitvector::BitVectorBuilder;
///
/// let mut builder = BitVectorBuilder::with_capacity(6);
/// builder.push(true);
/// builder.push_zeros(3);
/// builder.push_byte_bits(0b11, 2);
/// let bv = builder.finalize();
///
/// assert_eq!(bv.to_string(), "100011");
/// ```
#[derive(Debug, Default, Clone)]
pub struct BitVectorBuilder {
    words: Vec<u64>,
    bits: usize,
}

impl BitVectorBuilder {
    /// Creates a new builder with room for `bits` bits.
    #[must_use]
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            words: Vec::with_capacity(words_for(bits)),
            bits: 0,
        }
    }

    /// Number of bits pushed so far.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bits
    }

    /// Returns `true` if no bits have been pushed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Appends one bit.
    pub fn push(&mut self, bit: bool) {
        let (wi, bi) = bitpos!(self.bits);
        if bi == 0 {
            self.words.push(0);
        }
        if bit {
            self.words[wi] |= 1 << bi;
        }
        self.bits += 1;
    }

    /// Appends `n` zero bits.
    pub fn push_zeros(&mut self, n: usize) {
        self.bits += n;
        self.words.resize(words_for(self.bits), 0);
    }

    /// Appends the low `width` bits of `byte`, most significant of them
    /// first.
    ///
    /// # Panics
    ///
    /// Panics if `width` is greater than 8.
    pub fn push_byte_bits(&mut self, byte: u8, width: u32) {
        assert!(width <= 8, "a byte holds at most 8 bits");
        for shift in (0..width).rev() {
            self.push((byte >> shift) & 1 == 1);
        }
    }

    /// Appends all 8 bits of `byte`, most significant first.
    pub fn push_byte(&mut self, byte: u8) {
        if self.bits & 7 != 0 {
            self.push_byte_bits(byte, 8);
            return;
        }
        // Byte aligned, so the whole byte lands inside one word.
        let (wi, bi) = bitpos!(self.bits);
        if bi == 0 {
            self.words.push(0);
        }
        self.words[wi] |= u64::from(byte.reverse_bits()) << bi;
        self.bits += 8;
    }

    /// Appends every bit of `other`, left to right.
    pub fn extend_from_bitvector(&mut self, other: &BitVector) {
        if self.bits & 63 == 0 {
            // Word aligned: the source tail bits are already zero.
            self.words.extend_from_slice(other.as_words());
            self.bits += other.len();
            return;
        }
        self.words.reserve(words_for(self.bits + other.len()) - self.words.len());
        for bit in other.iter() {
            self.push(bit);
        }
    }

    /// Consumes the builder and returns the packed vector.
    #[must_use]
    pub fn finalize(self) -> BitVector {
        debug_assert_eq!(self.words.len(), words_for(self.bits));
        BitVector {
            array: BitArray::from(self.words),
            size: self.bits,
        }
    }

    /// Replaces the contents of `target` with the built bits.
    pub(crate) fn finalize_into(self, target: &mut BitVector) {
        *target = self.finalize();
    }
}

impl Extend<bool> for BitVectorBuilder {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        for bit in iter {
            self.push(bit);
        }
    }
}

impl From<BitVectorBuilder> for BitVector {
    fn from(builder: BitVectorBuilder) -> Self {
        builder.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_for() {
        assert_eq!(words_for(0), 0);
        assert_eq!(words_for(1), 1);
        assert_eq!(words_for(64), 1);
        assert_eq!(words_for(65), 2);
    }

    #[test]
    fn test_tail_mask() {
        assert_eq!(tail_mask(64), !0);
        assert_eq!(tail_mask(3), 0b111);
        assert_eq!(tail_mask(65), 1);
    }

    #[test]
    fn test_zeroed_inline_and_external() {
        let small = BitArray::zeroed(100);
        assert!(!small.is_spilled());
        assert_eq!(small.len(), 2);

        let large = BitArray::zeroed(200);
        assert!(large.is_spilled());
        assert_eq!(large.len(), 4);

        let empty = BitArray::zeroed(0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_builder_word_boundary() {
        let mut builder = BitVectorBuilder::with_capacity(65);
        builder.push_zeros(64);
        builder.push(true);
        let bv = builder.finalize();
        assert_eq!(bv.len(), 65);
        assert_eq!(bv.as_words(), &[0, 1]);
    }

    #[test]
    fn test_builder_extend_unaligned() {
        let src = BitVector::from_bit_str("1101").unwrap();
        let mut builder = BitVectorBuilder::default();
        builder.push(false);
        builder.extend_from_bitvector(&src);
        builder.extend_from_bitvector(&src);
        assert_eq!(builder.finalize().to_string(), "011011101");
    }
}
