//! Polynomial arithmetic over GF(2) and GF(2^n).
//!
//! A vector is read as a polynomial whose coefficients are its bits, with
//! bit 0 the coefficient of the highest power. `"100011011"` is therefore
//! `x^8 + x^4 + x^3 + x + 1`, the AES modulus.

use alloc::vec::Vec;

use tracing::debug;

use crate::{
    BitVector,
    error::{Error, Result},
    modular::Inverse,
};

impl BitVector {
    /// Degree of the polynomial, or `None` for the zero polynomial.
    pub(crate) fn degree(&self) -> Option<usize> {
        self.next_set_bit(0).map(|first| self.len() - first - 1)
    }

    /// Returns `true` if the unsigned value is exactly one.
    pub(crate) fn is_one(&self) -> bool {
        self.degree() == Some(0)
    }

    /// Multiplies two polynomials over GF(2) without reduction.
    ///
    /// The product has `self.len() + other.len()` bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitvector::BitVector;
    ///
    /// let a = BitVector::from_bit_str("0110001")?;
    /// let b = BitVector::from_bit_str("0110")?;
    /// assert_eq!(a.gf_multiply(&b).to_string(), "00010100110");
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    #[must_use]
    pub fn gf_multiply(&self, other: &Self) -> Self {
        let width = self.len() + other.len();
        let base = self.padded_left(other.len());
        let mut product = Self::zeros(width);
        for i in other.iter_ones() {
            let power = other.len() - i - 1;
            let mut term = base.clone();
            term.shift_left(power);
            for (dst, src) in product.array.iter_mut().zip(term.as_words()) {
                *dst ^= src;
            }
        }
        product
    }

    /// Divides `self` by `modulus` over GF(2), returning
    /// `(quotient, remainder)`.
    ///
    /// The quotient has the dividend's size. The remainder is returned with
    /// exactly `n` bits: its last `n` bits if longer, zero-padded on the left
    /// if shorter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ModulusTooWide`] if `modulus` has more than `n + 1`
    /// bits and [`Error::ZeroModulus`] if it is the zero polynomial.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitvector::BitVector;
    ///
    /// let dividend = BitVector::from_bit_str("11100010110001")?;
    /// let aes = BitVector::from_bit_str("100011011")?;
    /// let (q, r) = dividend.gf_divide(&aes, 8)?;
    /// assert_eq!(q.to_string(), "00000000111010");
    /// assert_eq!(r.to_string(), "10001111");
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    pub fn gf_divide(&self, modulus: &Self, n: usize) -> Result<(Self, Self)> {
        if modulus.len() > n + 1 {
            return Err(Error::ModulusTooWide {
                bits: modulus.len(),
                n,
            });
        }
        let mod_degree = modulus.degree().ok_or(Error::ZeroModulus)?;
        let mod_terms: Vec<usize> = modulus
            .iter_ones()
            .map(|j| modulus.len() - j - 1)
            .collect();

        let size = self.len();
        let mut quotient = Self::zeros(size);
        let mut remainder = self.clone();
        while let Some(rem_degree) = remainder.degree()
            && rem_degree >= mod_degree
        {
            let shift = rem_degree - mod_degree;
            quotient.put(size - shift - 1, true);
            for &term in &mod_terms {
                let pos = size - 1 - (term + shift);
                remainder.put(pos, !remainder.bit(pos));
            }
        }

        let remainder = if size >= n {
            remainder.slice(size - n..)?
        } else {
            remainder.padded_left(n - size)
        };
        Ok((quotient, remainder))
    }

    /// Multiplies two polynomials and reduces the product modulo `modulus`
    /// in GF(2^n).
    ///
    /// # Errors
    ///
    /// Same as [`gf_divide`](Self::gf_divide).
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitvector::BitVector;
    ///
    /// let a = BitVector::from_bit_str("0110001")?;
    /// let b = BitVector::from_bit_str("0110")?;
    /// let aes = BitVector::from_bit_str("100011011")?;
    /// assert_eq!(a.gf_multiply_modular(&b, &aes, 8)?.to_string(), "10100110");
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    pub fn gf_multiply_modular(&self, other: &Self, modulus: &Self, n: usize) -> Result<Self> {
        let (_, remainder) = self.gf_multiply(other).gf_divide(modulus, n)?;
        Ok(remainder)
    }

    /// Computes the multiplicative inverse of `self` in GF(2^n) with the
    /// extended Euclidean algorithm over polynomials.
    ///
    /// The inverse comes back as an `n`-bit vector. If `self` shares a
    /// factor with `modulus` the result is [`Inverse::NotInvertible`]
    /// carrying the polynomial GCD.
    ///
    /// # Errors
    ///
    /// Same as [`gf_divide`](Self::gf_divide).
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitvector::{BitVector, Inverse};
    ///
    /// let aes = BitVector::from_bit_str("100011011")?;
    /// let a = BitVector::from_bit_str("00110011")?;
    /// let inv = a.gf_multiplicative_inverse(&aes, 8)?;
    /// assert_eq!(inv, Inverse::Found(BitVector::from_bit_str("01101100")?));
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    pub fn gf_multiplicative_inverse(&self, modulus: &Self, n: usize) -> Result<Inverse> {
        if modulus.len() > n + 1 {
            return Err(Error::ModulusTooWide {
                bits: modulus.len(),
                n,
            });
        }
        if modulus.degree().is_none() {
            return Err(Error::ZeroModulus);
        }

        let mut num = self.clone();
        let mut rem = modulus.clone();
        let mut x = Self::zeros(modulus.len());
        let mut x_old = Self::from_integer_sized(1u8, modulus.len())?;
        while rem.degree().is_some() {
            let (quotient, remainder) = num.gf_divide(&rem, n)?;
            num = core::mem::replace(&mut rem, remainder);
            let next = x_old.xor(&quotient.gf_multiply(&x));
            x_old = core::mem::replace(&mut x, next);
        }

        if !num.is_one() {
            debug!(value = %self, gcd = %num, "no multiplicative inverse in GF(2^n)");
            return Ok(Inverse::NotInvertible { gcd: num });
        }
        let (_, inverse) = x_old.gf_divide(modulus, n)?;
        Ok(Inverse::Found(inverse))
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
    fn test_degree() {
        assert_eq!(bv("0001011").degree(), Some(3));
        assert_eq!(bv("0000").degree(), None);
        assert!(bv("0001").is_one());
        assert!(!bv("0010").is_one());
    }

    #[test]
    fn test_divide_exact() {
        // (x^2 + 1) = (x + 1)^2 over GF(2)
        let (q, r) = bv("101").gf_divide(&bv("11"), 2).unwrap();
        assert_eq!(q.to_string(), "011");
        assert_eq!(r.to_string(), "00");
    }

    #[test]
    fn test_divide_pads_short_remainder() {
        let (q, r) = bv("11").gf_divide(&bv("100011011"), 8).unwrap();
        assert_eq!(q.to_string(), "00");
        assert_eq!(r.to_string(), "00000011");
    }

    #[test]
    fn test_divide_rejects_bad_modulus() {
        assert!(matches!(
            bv("1010").gf_divide(&bv("100011011"), 7),
            Err(Error::ModulusTooWide { bits: 9, n: 7 })
        ));
        assert!(matches!(bv("1010").gf_divide(&bv("000"), 2), Err(Error::ZeroModulus)));
    }

    #[test]
    fn test_gf8_inverses() {
        let modulus = bv("1011");
        let inverses: Vec<_> = (1u8..8)
            .map(|v| {
                let a = BitVector::from_integer_sized(v, 3).unwrap();
                match a.gf_multiplicative_inverse(&modulus, 3).unwrap() {
                    Inverse::Found(inv) => inv.to_string(),
                    Inverse::NotInvertible { .. } => panic!("{v} should be invertible"),
                }
            })
            .collect();
        assert_eq!(inverses, ["001", "101", "110", "111", "010", "011", "100"]);
    }

    #[test]
    fn test_zero_has_no_inverse() {
        let modulus = bv("1011");
        let inv = bv("000").gf_multiplicative_inverse(&modulus, 3).unwrap();
        assert_eq!(inv, Inverse::NotInvertible { gcd: modulus });
    }
}
