//! Trait implementations for `BitVector`.

use core::{
    convert::TryFrom,
    fmt,
    ops::{
        Add, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, ShlAssign,
        ShrAssign,
    },
    str::FromStr,
};

use crate::{BitVector, error::Error};

impl fmt::Display for BitVector {
    /// Writes the `0`/`1` string, leftmost bit first.
    ///
    /// The empty vector renders as the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Binary for BitVector {
    /// Formats the vector as a binary number of exactly `len()` digits.
    ///
    /// Leading zeros are kept, so the width always matches the vector size.
    /// The alternate flag adds the `0b` prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitvector::BitVector;
    ///
    /// let bv = BitVector::from_integer_sized(5u8, 6)?;
    /// assert_eq!(format!("{bv:b}"), "000101");
    /// assert_eq!(format!("{bv:#b}"), "0b000101");
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0b")?;
        }
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitVector({}: {self})", self.len())
    }
}

impl FromStr for BitVector {
    type Err = Error;

    /// Parses a `0`/`1` string; see [`BitVector::from_bit_str`].
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitvector::BitVector;
    ///
    /// let bv: BitVector = "0110".parse()?;
    /// assert_eq!(bv.len(), 4);
    /// assert!("01x0".parse::<BitVector>().is_err());
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bit_str(s)
    }
}

// ============================================================================
// Bitwise Operator Implementations
// ============================================================================

macro_rules! impl_binary_op {
    ($tr:ident, $method:ident, $assign_tr:ident, $assign_method:ident, $op:ident) => {
        impl $tr for BitVector {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                BitVector::$op(&self, &rhs)
            }
        }

        impl $tr for &BitVector {
            type Output = BitVector;

            fn $method(self, rhs: Self) -> BitVector {
                BitVector::$op(self, rhs)
            }
        }

        impl $tr<&BitVector> for BitVector {
            type Output = Self;

            fn $method(self, rhs: &BitVector) -> Self {
                BitVector::$op(&self, rhs)
            }
        }

        impl $assign_tr<&Self> for BitVector {
            fn $assign_method(&mut self, rhs: &Self) {
                *self = BitVector::$op(self, rhs);
            }
        }

        impl $assign_tr for BitVector {
            fn $assign_method(&mut self, rhs: Self) {
                *self = BitVector::$op(self, &rhs);
            }
        }
    };
}

impl_binary_op!(BitAnd, bitand, BitAndAssign, bitand_assign, and);
impl_binary_op!(BitOr, bitor, BitOrAssign, bitor_assign, or);
impl_binary_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, xor);

impl Not for BitVector {
    type Output = Self;

    /// Inverts every bit in place and returns the vector.
    fn not(mut self) -> Self {
        self.invert();
        self
    }
}

impl Not for &BitVector {
    type Output = BitVector;

    fn not(self) -> BitVector {
        BitVector::not(self)
    }
}

impl Add for &BitVector {
    type Output = BitVector;

    /// Concatenates two vectors; see [`BitVector::concat`].
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitvector::BitVector;
    ///
    /// let a: BitVector = "10".parse()?;
    /// let b: BitVector = "011".parse()?;
    /// assert_eq!((&a + &b).to_string(), "10011");
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    fn add(self, rhs: Self) -> BitVector {
        self.concat(rhs)
    }
}

impl Add for BitVector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.concat(&rhs)
    }
}

impl ShlAssign<usize> for BitVector {
    /// Rotates left by `n` positions. Rotating an empty vector does nothing.
    fn shl_assign(&mut self, n: usize) {
        self.rotate_left_by(n);
    }
}

impl ShrAssign<usize> for BitVector {
    /// Rotates right by `n` positions. Rotating an empty vector does nothing.
    fn shr_assign(&mut self, n: usize) {
        self.rotate_right_by(n);
    }
}

// ============================================================================
// Primitive Integer Conversions
// ============================================================================

macro_rules! impl_int_conversions {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for BitVector {
                /// Creates the shortest vector holding `value`; zero becomes
                /// `"0"`.
                fn from(value: $t) -> Self {
                    Self::from_integer(value)
                }
            }

            impl TryFrom<&BitVector> for $t {
                type Error = Error;

                /// Reads the unsigned value of the vector.
                ///
                /// # Errors
                ///
                /// Returns [`Error::ValueTooLarge`] if the value needs more
                /// bits than the target type has. Leading zeros do not count.
                fn try_from(bv: &BitVector) -> Result<Self, Self::Error> {
                    let bits = match bv.iter_ones().next() {
                        Some(first) => bv.len() - first,
                        None => return Ok(0),
                    };
                    if bits > <$t>::BITS as usize {
                        return Err(Error::ValueTooLarge {
                            bits,
                            max_bits: <$t>::BITS as usize,
                        });
                    }
                    let start = bv.len() - bits;
                    Ok((start..bv.len()).fold(0, |acc: $t, pos| (acc << 1) | <$t>::from(bv.bit(pos))))
                }
            }
        )*
    };
}

impl_int_conversions!(u8, u16, u32, u64, u128);

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{format, string::ToString};

    #[test]
    fn test_display_empty() {
        assert_eq!(BitVector::new().to_string(), "");
        assert_eq!(format!("{:#b}", BitVector::new()), "0b");
    }

    #[test]
    fn test_debug_shows_size() {
        let bv = BitVector::from_bit_str("101").unwrap();
        assert_eq!(format!("{bv:?}"), "BitVector(3: 101)");
    }

    #[test]
    fn test_try_from_ignores_leading_zeros() {
        let bv = BitVector::from_integer_sized(200u8, 40).unwrap();
        assert_eq!(u8::try_from(&bv).unwrap(), 200);

        let wide = BitVector::from(300u16);
        assert!(u8::try_from(&wide).is_err());
        assert_eq!(u16::try_from(&wide).unwrap(), 300);
    }

    #[test]
    fn test_u128_round_trip() {
        let value = u128::MAX - 12345;
        let bv = BitVector::from(value);
        assert_eq!(bv.len(), 128);
        assert_eq!(u128::try_from(&bv).unwrap(), value);
    }

    #[test]
    fn test_assign_ops_pad() {
        let mut a = BitVector::from_bit_str("1").unwrap();
        a ^= BitVector::from_bit_str("1100").unwrap();
        assert_eq!(a.to_string(), "1101");
        a &= &BitVector::from_bit_str("0110").unwrap();
        assert_eq!(a.to_string(), "0100");
    }
}
