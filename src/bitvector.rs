//! `BitVector` struct and core implementation.

use alloc::{string::String, vec, vec::Vec};
use core::ops::{Bound, RangeBounds};

use num_bigint::BigUint;

use crate::{
    error::{Error, Result},
    macros::bitpos,
    storage::{BitArray, BitVectorBuilder, tail_mask},
};

/// A fixed-size vector of bits packed into 64-bit words.
///
/// # Overview
///
/// A `BitVector` holds exactly [`len`](Self::len) bits. Bit `0` is the
/// leftmost, most significant bit, so the vector reads like a binary number:
/// `"1011"` has the integer value 11 and its bit `0` is `1`.
///
/// # Storage
///
/// Bits are packed into `ceil(len / 64)` words. Logical position `p` lives in
/// word `p / 64` at bit `p % 64`, i.e. words are filled LSB-first even though
/// the vector is indexed MSB-first. Unused high bits of the last word are
/// always zero. Vectors of up to 128 bits keep their words inline.
///
/// # Indexing
///
/// [`get`](Self::get) and [`set`](Self::set) accept negative indices, which
/// count from the end: `-1` is the last bit. Every index is range-checked.
///
/// # Examples
///
/// ```
/// use packed_bitvector::BitVector;
///
/// let mut bv = BitVector::from_bit_str("110001")?;
/// assert!(bv.get(0)?);
/// assert!(bv.get(-1)?);
///
/// bv.set(1, 0)?;
/// assert_eq!(bv.to_string(), "100001");
/// assert_eq!(bv.to_biguint(), 33u32.into());
/// # Ok::<(), packed_bitvector::Error>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitVector {
    pub(crate) array: BitArray,
    pub(crate) size: usize,
}

impl BitVector {
    /// Creates an empty bit vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packed_bitvector::BitVector;
    /// let bv = BitVector::new();
    /// assert!(bv.is_empty());
    /// assert_eq!(bv.to_string(), "");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::zeros(0)
    }

    /// Creates a vector of `size` zero bits.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packed_bitvector::BitVector;
    /// let bv = BitVector::zeros(5);
    /// assert_eq!(bv.to_string(), "00000");
    /// ```
    #[must_use]
    pub fn zeros(size: usize) -> Self {
        Self {
            array: BitArray::zeroed(size),
            size,
        }
    }

    /// Creates a vector of `size` one bits.
    #[must_use]
    pub fn ones(size: usize) -> Self {
        let mut bv = Self::zeros(size);
        bv.fill(true);
        bv
    }

    /// Creates a vector from a sequence of bits, leftmost first.
    ///
    /// Accepts `bool`s or integers; integers must be `0` or `1`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBit`] for any integer other than 0 or 1.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packed_bitvector::BitVector;
    /// let bv = BitVector::from_bits([1, 1, 0, 1])?;
    /// assert_eq!(bv.to_string(), "1101");
    ///
    /// assert!(BitVector::from_bits([0, 2]).is_err());
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    pub fn from_bits<I>(bits: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: ToBit,
    {
        let iter = bits.into_iter();
        let mut builder = BitVectorBuilder::with_capacity(iter.size_hint().0);
        for bit in iter {
            builder.push(bit.to_bit()?);
        }
        Ok(builder.finalize())
    }

    /// Parses a string of `'0'` and `'1'` characters, leftmost bit first.
    ///
    /// The empty string yields the empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChar`] for any other character.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packed_bitvector::BitVector;
    /// let bv = BitVector::from_bit_str("00110011")?;
    /// assert_eq!(bv.len(), 8);
    /// assert!(BitVector::from_bit_str("0b11").is_err());
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    pub fn from_bit_str(s: &str) -> Result<Self> {
        let mut builder = BitVectorBuilder::with_capacity(s.len());
        for (pos, ch) in s.chars().enumerate() {
            match ch {
                '0' => builder.push(false),
                '1' => builder.push(true),
                _ => return Err(Error::InvalidChar { ch, pos }),
            }
        }
        Ok(builder.finalize())
    }

    /// Creates the shortest vector holding the unsigned integer `value`.
    ///
    /// Zero is represented by the single bit `"0"`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packed_bitvector::BitVector;
    /// assert_eq!(BitVector::from_integer(5678u32).to_string(), "1011000101110");
    /// assert_eq!(BitVector::from_integer(0u8).to_string(), "0");
    /// ```
    #[must_use]
    pub fn from_integer(value: impl Into<BigUint>) -> Self {
        let value = value.into();
        let required = (value.bits() as usize).max(1);
        Self::pack_integer(&value, required)
    }

    /// Creates a vector of exactly `size` bits holding `value`, zero-padded
    /// on the left.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeTooSmall`] if `size` is smaller than the shortest
    /// representation of `value` (one bit for zero).
    ///
    /// # Examples
    ///
    /// ```
    /// # use packed_bitvector::BitVector;
    /// let bv = BitVector::from_integer_sized(45u32, 16)?;
    /// assert_eq!(bv.to_string(), "0000000000101101");
    ///
    /// assert!(BitVector::from_integer_sized(45u32, 5).is_err());
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    pub fn from_integer_sized(value: impl Into<BigUint>, size: usize) -> Result<Self> {
        let value = value.into();
        let required = (value.bits() as usize).max(1);
        if size < required {
            return Err(Error::SizeTooSmall {
                requested: size,
                required,
            });
        }
        Ok(Self::pack_integer(&value, size))
    }

    fn pack_integer(value: &BigUint, size: usize) -> Self {
        let mut bv = Self::zeros(size);
        // Integer bit k is logical position size - 1 - k.
        for (di, digit) in value.iter_u64_digits().enumerate() {
            let mut rem = digit;
            while rem != 0 {
                let k = di * 64 + rem.trailing_zeros() as usize;
                bv.put(size - 1 - k, true);
                rem &= rem - 1;
            }
        }
        bv
    }

    /// Parses hexadecimal digits, four bits per digit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChar`] for a non-hex character.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packed_bitvector::BitVector;
    /// let bv = BitVector::from_hex_str("68656c6c6f")?;
    /// assert_eq!(bv.len(), 40);
    /// assert_eq!(bv.to_hex()?, "68656c6c6f");
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    pub fn from_hex_str(s: &str) -> Result<Self> {
        let mut builder = BitVectorBuilder::with_capacity(s.len() * 4);
        for (pos, ch) in s.chars().enumerate() {
            let nibble = ch.to_digit(16).ok_or(Error::InvalidChar { ch, pos })?;
            builder.push_byte_bits(nibble as u8, 4);
        }
        Ok(builder.finalize())
    }

    /// Encodes text eight bits per character.
    ///
    /// Characters are taken as Latin-1 code points, so only `U+0000` to
    /// `U+00FF` are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChar`] for a character above `U+00FF`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packed_bitvector::BitVector;
    /// let bv = BitVector::from_text("hello\njello")?;
    /// assert_eq!(bv.to_text()?, "hello\njello");
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    pub fn from_text(s: &str) -> Result<Self> {
        let mut builder = BitVectorBuilder::with_capacity(s.len() * 8);
        for (pos, ch) in s.chars().enumerate() {
            let byte = u8::try_from(ch).map_err(|_| Error::InvalidChar { ch, pos })?;
            builder.push_byte(byte);
        }
        Ok(builder.finalize())
    }

    /// Unpacks raw bytes, eight bits per byte, most significant bit first.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packed_bitvector::BitVector;
    /// let bv = BitVector::from_bytes(&[0x0a, 0x80]);
    /// assert_eq!(bv.to_string(), "0000101010000000");
    /// ```
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut builder = BitVectorBuilder::with_capacity(bytes.len() * 8);
        for &byte in bytes {
            builder.push_byte(byte);
        }
        builder.finalize()
    }

    /// Returns the number of bits.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the vector holds no bits at all.
    ///
    /// Note that a vector of zero bits is not empty; see
    /// [`count_ones`](Self::count_ones).
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` if the words are heap allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packed_bitvector::BitVector;
    /// assert!(!BitVector::zeros(128).is_spilled());
    /// assert!(BitVector::zeros(129).is_spilled());
    /// ```
    #[must_use]
    pub const fn is_spilled(&self) -> bool {
        self.array.is_spilled()
    }

    /// Get the storage words.
    ///
    /// Word `w` holds logical bits `64 * w ..` with the lowest-numbered bit in
    /// the least significant position.
    #[must_use]
    pub fn as_words(&self) -> &[u64] {
        &self.array
    }

    /// Returns the bit at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] unless `-len <= index < len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packed_bitvector::BitVector;
    /// let bv = BitVector::from_bit_str("110001")?;
    /// assert_eq!(bv.get(2)?, false);
    /// assert_eq!(bv.get(-6)?, true);
    /// assert!(bv.get(6).is_err());
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    #[inline]
    pub fn get(&self, index: impl BitIndex) -> Result<bool> {
        let pos = index.resolve(self.size)?;
        Ok(self.bit(pos))
    }

    /// Sets the bit at `index` to `bit`.
    ///
    /// Writing the value a bit already holds leaves the storage untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBit`] if `bit` is an integer other than 0 or
    /// 1, and [`Error::IndexOutOfRange`] unless `-len <= index < len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packed_bitvector::BitVector;
    /// let mut bv = BitVector::from_bit_str("1111")?;
    /// bv.set(0, 0)?;
    /// bv.set(-1, false)?;
    /// assert_eq!(bv.to_string(), "0110");
    /// assert!(bv.set(0, 7).is_err());
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    pub fn set(&mut self, index: impl BitIndex, bit: impl ToBit) -> Result<()> {
        let bit = bit.to_bit()?;
        let pos = index.resolve(self.size)?;
        if self.bit(pos) != bit {
            self.put(pos, bit);
        }
        Ok(())
    }

    /// Reads the bit at an already validated position.
    #[inline(always)]
    pub(crate) fn bit(&self, pos: usize) -> bool {
        debug_assert!(pos < self.size, "position {pos} out of bounds");
        let (wi, bi) = bitpos!(pos);
        (self.array[wi] >> bi) & 1 != 0
    }

    /// Writes the bit at an already validated position.
    #[inline(always)]
    pub(crate) fn put(&mut self, pos: usize, bit: bool) {
        debug_assert!(pos < self.size, "position {pos} out of bounds");
        let (wi, bi) = bitpos!(pos);
        let mask = 1 << bi;
        if bit {
            self.array[wi] |= mask;
        } else {
            self.array[wi] &= !mask;
        }
    }

    /// Forces the unused bits of the last word back to zero.
    #[inline]
    pub(crate) fn clear_tail(&mut self) {
        if let Some(last) = self.array.last_mut() {
            *last &= tail_mask(self.size);
        }
    }

    /// Sets every bit to `bit`.
    pub(crate) fn fill(&mut self, bit: bool) {
        self.array.fill(if bit { !0 } else { 0 });
        self.clear_tail();
    }

    /// Sets every bit to `val` and returns the vector for chaining.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBit`] if `val` is not 0 or 1; the vector is
    /// left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packed_bitvector::BitVector;
    /// let mut bv = BitVector::from_bit_str("0101001010")?;
    /// assert_eq!(bv.reset(1)?.to_string(), "1111111111");
    /// assert_eq!(bv.slice(3..9)?.reset(0)?.to_string(), "000000");
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    pub fn reset(&mut self, val: impl ToBit) -> Result<&mut Self> {
        let bit = val.to_bit()?;
        self.fill(bit);
        Ok(self)
    }

    /// Replaces the size and contents of this vector with `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packed_bitvector::BitVector;
    /// let mut bv = BitVector::from_integer_sized(7u8, 16)?;
    /// bv.set_value(BitVector::from_integer(45u8));
    /// assert_eq!(bv.to_string(), "101101");
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    pub fn set_value(&mut self, value: Self) {
        *self = value;
    }

    /// Resolves a range against `len`, clamping an end bound past the end.
    fn clamped_range(&self, range: impl RangeBounds<usize>) -> Result<(usize, usize)> {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => self.size,
        }
        .min(self.size);
        if start > end {
            return Err(Error::SliceOutOfRange {
                start,
                end,
                size: self.size,
            });
        }
        Ok((start, end))
    }

    /// Returns a new vector holding the bits in `range`.
    ///
    /// An end bound past the last bit is clamped to [`len`](Self::len).
    /// Bounds are unsigned positions from the left; unlike [`get`](Self::get)
    /// and [`set`](Self::set), negative indices are not accepted, so count
    /// from the right with `len() - k` instead.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SliceOutOfRange`] if the start lies beyond the
    /// (clamped) end.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packed_bitvector::BitVector;
    /// let bv = BitVector::from_bit_str("0100000100100000011010000111")?;
    /// assert_eq!(bv.slice(5..22)?.to_string(), "00100100000011010");
    /// assert_eq!(bv.slice(20..100)?.len(), 8);
    /// assert_eq!(bv.slice(bv.len() - 3..)?.to_string(), "111");
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Result<Self> {
        let (start, end) = self.clamped_range(range)?;
        let mut builder = BitVectorBuilder::with_capacity(end - start);
        builder.extend((start..end).map(|pos| self.bit(pos)));
        Ok(builder.finalize())
    }

    /// Overwrites the bits in `range` with the bits of `src`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SliceOutOfRange`] if the range does not lie within the
    /// vector and [`Error::LengthMismatch`] if its length differs from
    /// `src.len()`. On error the vector is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packed_bitvector::BitVector;
    /// let mut bv = BitVector::zeros(10);
    /// bv.set_slice(6..9, &BitVector::from_bit_str("101")?)?;
    /// assert_eq!(bv.to_string(), "0000001010");
    ///
    /// let head = bv.slice(5..10)?;
    /// bv.set_slice(..5, &head)?;
    /// assert_eq!(bv.to_string(), "0101001010");
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    pub fn set_slice(&mut self, range: impl RangeBounds<usize>, src: &Self) -> Result<()> {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => self.size,
        };
        if start > end || end > self.size {
            return Err(Error::SliceOutOfRange {
                start,
                end,
                size: self.size,
            });
        }
        if end - start != src.len() {
            return Err(Error::LengthMismatch {
                expected: end - start,
                actual: src.len(),
            });
        }
        for (offset, bit) in src.iter().enumerate() {
            self.put(start + offset, bit);
        }
        Ok(())
    }

    /// Returns a copy of this vector with `n` zeros prepended.
    pub(crate) fn padded_left(&self, n: usize) -> Self {
        let mut builder = BitVectorBuilder::with_capacity(self.size + n);
        builder.push_zeros(n);
        builder.extend_from_bitvector(self);
        builder.finalize()
    }

    /// Prepends `n` zero bits, leaving the integer value unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packed_bitvector::BitVector;
    /// let mut bv = BitVector::from_bit_str("101010")?;
    /// bv.pad_left(4);
    /// assert_eq!(bv.to_string(), "0000101010");
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    pub fn pad_left(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        let padded = self.padded_left(n);
        self.set_value(padded);
    }

    /// Appends `n` zero bits.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packed_bitvector::BitVector;
    /// let mut bv = BitVector::from_bit_str("0000101010")?;
    /// bv.pad_right(4);
    /// assert_eq!(bv.to_string(), "00001010100000");
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    pub fn pad_right(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        let mut builder = BitVectorBuilder::with_capacity(self.size + n);
        builder.extend_from_bitvector(self);
        builder.push_zeros(n);
        builder.finalize_into(self);
    }

    /// Splits an even-sized vector into its left and right halves.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Misaligned`] if the size is odd.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packed_bitvector::BitVector;
    /// let bv = BitVector::from_bit_str("01100001")?;
    /// let (left, right) = bv.divide_into_two()?;
    /// assert_eq!(left.to_string(), "0110");
    /// assert_eq!(right.to_string(), "0001");
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    pub fn divide_into_two(&self) -> Result<(Self, Self)> {
        if self.size % 2 != 0 {
            return Err(Error::Misaligned {
                size: self.size,
                unit: 2,
            });
        }
        let half = self.size / 2;
        Ok((self.slice(..half)?, self.slice(half..)?))
    }

    /// Gathers bits in the order given by `permutation`.
    ///
    /// Output bit `i` is input bit `permutation[i]`, so the result has
    /// `permutation.len()` bits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadPermutation`] for an entry that is not a valid
    /// position.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packed_bitvector::BitVector;
    /// let bv = BitVector::from_bit_str("1001101")?;
    /// assert_eq!(bv.permute(&[6, 2, 0, 1])?.to_string(), "1010");
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    pub fn permute(&self, permutation: &[usize]) -> Result<Self> {
        self.check_permutation(permutation)?;
        let mut builder = BitVectorBuilder::with_capacity(permutation.len());
        builder.extend(permutation.iter().map(|&pos| self.bit(pos)));
        Ok(builder.finalize())
    }

    /// Scatters bits back to the positions given by `permutation`, undoing
    /// [`permute`](Self::permute).
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if `permutation` does not have one
    /// entry per bit and [`Error::BadPermutation`] for an invalid entry.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packed_bitvector::BitVector;
    /// let bv = BitVector::from_bit_str("1100")?;
    /// let perm = [2, 0, 3, 1];
    /// assert_eq!(bv.permute(&perm)?.unpermute(&perm)?, bv);
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    pub fn unpermute(&self, permutation: &[usize]) -> Result<Self> {
        if permutation.len() != self.size {
            return Err(Error::LengthMismatch {
                expected: self.size,
                actual: permutation.len(),
            });
        }
        self.check_permutation(permutation)?;
        let mut out = Self::zeros(self.size);
        for (i, &pos) in permutation.iter().enumerate() {
            out.put(pos, self.bit(i));
        }
        Ok(out)
    }

    fn check_permutation(&self, permutation: &[usize]) -> Result<()> {
        match permutation.iter().find(|&&pos| pos >= self.size) {
            Some(&index) => Err(Error::BadPermutation {
                index,
                size: self.size,
            }),
            None => Ok(()),
        }
    }

    /// Returns a new vector with the bits in reverse order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packed_bitvector::BitVector;
    /// let bv = BitVector::from_bit_str("0001101")?;
    /// assert_eq!(bv.reverse().to_string(), "1011000");
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut builder = BitVectorBuilder::with_capacity(self.size);
        builder.extend(self.iter().rev());
        builder.finalize()
    }

    /// Returns the unsigned integer value of the bits.
    ///
    /// The empty vector has value zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packed_bitvector::BitVector;
    /// let bv = BitVector::from_bit_str("11110001001000000")?;
    /// assert_eq!(bv.to_biguint(), 123456u32.into());
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    #[must_use]
    pub fn to_biguint(&self) -> BigUint {
        let mut digits = vec![0u32; self.size.div_ceil(32)];
        for pos in self.iter_ones() {
            let k = self.size - 1 - pos;
            digits[k >> 5] |= 1 << (k & 31);
        }
        BigUint::new(digits)
    }

    /// Reads the byte starting at bit `8 * i`, most significant bit first.
    #[inline]
    pub(crate) fn byte_at(&self, i: usize) -> u8 {
        debug_assert!(8 * i + 8 <= self.size);
        let (wi, bi) = bitpos!(8 * i);
        ((self.array[wi] >> bi) as u8).reverse_bits()
    }

    /// Packs the vector into bytes, eight bits per byte, most significant bit
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Misaligned`] unless the size is a multiple of 8.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packed_bitvector::BitVector;
    /// let bv = BitVector::from_bit_str("0000101010000000")?;
    /// assert_eq!(bv.to_bytes()?, vec![0x0a, 0x80]);
    /// assert!(BitVector::zeros(7).to_bytes().is_err());
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.ensure_multiple_of(8)?;
        Ok((0..self.size / 8).map(|i| self.byte_at(i)).collect())
    }

    /// Decodes the vector as Latin-1 text, eight bits per character.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Misaligned`] unless the size is a multiple of 8.
    pub fn to_text(&self) -> Result<String> {
        self.ensure_multiple_of(8)?;
        Ok((0..self.size / 8).map(|i| char::from(self.byte_at(i))).collect())
    }

    /// Renders the vector as lowercase hex, four bits per digit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Misaligned`] unless the size is a multiple of 4.
    pub fn to_hex(&self) -> Result<String> {
        self.ensure_multiple_of(4)?;
        Ok((0..self.size / 4)
            .map(|i| {
                // Nibbles never straddle a word.
                let (wi, bi) = bitpos!(4 * i);
                let raw = ((self.array[wi] >> bi) & 0xf) as u8;
                let nibble = raw.reverse_bits() >> 4;
                char::from_digit(u32::from(nibble), 16).unwrap_or('0')
            })
            .collect())
    }

    pub(crate) fn ensure_multiple_of(&self, unit: usize) -> Result<()> {
        if self.size % unit != 0 {
            return Err(Error::Misaligned {
                size: self.size,
                unit,
            });
        }
        Ok(())
    }
}

impl Default for BitVector {
    fn default() -> Self {
        Self::new()
    }
}

/// Values accepted as a single bit.
///
/// `bool` always converts; integers convert only when they are 0 or 1,
/// otherwise the conversion fails with [`Error::InvalidBit`].
pub trait ToBit: Copy {
    /// Converts the value to a bit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBit`] if the value is not 0 or 1.
    fn to_bit(self) -> Result<bool>;
}

impl ToBit for bool {
    #[inline(always)]
    fn to_bit(self) -> Result<bool> {
        Ok(self)
    }
}

macro_rules! impl_to_bit {
    ($($t:ty),* $(,)?) => {
        $(
            impl ToBit for $t {
                #[inline]
                fn to_bit(self) -> Result<bool> {
                    match self {
                        0 => Ok(false),
                        1 => Ok(true),
                        value => Err(Error::InvalidBit {
                            value: value as i128,
                        }),
                    }
                }
            }
        )*
    };
}

impl_to_bit!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Index types accepted by [`BitVector::get`] and [`BitVector::set`].
///
/// Signed indices may be negative and then count back from the end of the
/// vector.
pub trait BitIndex: Copy {
    /// Resolves the index against a vector of `size` bits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] unless `-size <= self < size`.
    fn resolve(self, size: usize) -> Result<usize>;
}

macro_rules! impl_unsigned_index {
    ($($t:ty),* $(,)?) => {
        $(
            impl BitIndex for $t {
                #[inline]
                fn resolve(self, size: usize) -> Result<usize> {
                    match usize::try_from(self) {
                        Ok(pos) if pos < size => Ok(pos),
                        _ => Err(Error::IndexOutOfRange {
                            index: self as i128,
                            size,
                        }),
                    }
                }
            }
        )*
    };
}

macro_rules! impl_signed_index {
    ($($t:ty),* $(,)?) => {
        $(
            impl BitIndex for $t {
                #[inline]
                fn resolve(self, size: usize) -> Result<usize> {
                    let index = self as i128;
                    let size_i = size as i128;
                    if index >= size_i || index < -size_i {
                        return Err(Error::IndexOutOfRange { index, size });
                    }
                    Ok(if index < 0 { size_i + index } else { index } as usize)
                }
            }
        )*
    };
}

impl_unsigned_index!(u32, u64, usize);
impl_signed_index!(i32, i64, isize);
