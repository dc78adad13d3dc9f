//! Fixed-size packed bit vectors with boolean algebra, shifts and Galois-field
//! arithmetic.
//!
//! This crate provides [`BitVector`], a vector of exactly `len()` bits packed
//! into 64-bit words. Bit 0 is the leftmost and most significant bit, so a
//! vector reads like a binary number and doubles as a polynomial over GF(2).
//!
//! # Features
//!
//! - **Many builders**: sizes, bit sequences, `0`/`1` strings, integers of any
//!   width, hex, Latin-1 text and raw bytes
//! - **Boolean algebra** that left-pads the shorter operand, plus
//!   concatenation and value comparison
//! - **In-place shifts**, both circular and zero-filling
//! - **Scans**: dense and sparse population counts, next-set-bit, rank and
//!   runs
//! - **GF(2^n) arithmetic**: multiply, divide, modular multiply and inverse
//! - **Miller-Rabin** primality testing and random prime candidates
//! - **Stream I/O** in packed and character form (`std` feature)
//! - **Serialization support** via serde (optional)
//! - **`no_std` support** with `alloc`
//!
//! # Examples
//!
//! ```
//! use packed_bitvector::{BitVector, Inverse};
//!
//! let a = BitVector::from_integer(6u8);
//! let b = BitVector::from_integer(13u8);
//! assert_eq!((&a ^ &b).to_string(), "1011");
//!
//! // Shifts mutate in place and chain.
//! let mut bv: BitVector = "1000110".parse()?;
//! bv.circular_shift_left(2)?.circular_shift_right(2)?;
//! assert_eq!(bv.to_string(), "1000110");
//!
//! // Inverse of x^5 + x^4 + x + 1 in the AES field.
//! let aes = BitVector::from_bit_str("100011011")?;
//! let x = BitVector::from_bit_str("00110011")?;
//! let inv = x.gf_multiplicative_inverse(&aes, 8)?;
//! assert_eq!(inv, Inverse::Found("01101100".parse()?));
//! # Ok::<(), packed_bitvector::Error>(())
//! ```
//!
//! # Storage Strategy
//!
//! - **Inline storage**: up to 128 bits live directly in the struct
//! - **Heap storage**: longer vectors own a boxed slice of exactly
//!   `ceil(len / 64)` words
//!
//! Unused bits of the last word are always zero, so equality, hashing and
//! counting work on whole words.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod bitvector;
mod bitwise;
mod error;
mod gf;
mod iter;
mod macros;
mod modular;
mod prime;
mod scan;
mod shift;
pub mod storage;
mod traits;

#[cfg(feature = "std")]
mod io;

#[cfg(feature = "serde")]
pub mod serde;

pub use bitvector::{BitIndex, BitVector, ToBit};
pub use error::{Error, ErrorKind, Result};
#[cfg(feature = "std")]
pub use io::BitReader;
pub use iter::{Bits, IntoIter, Iter, Ones};
pub use modular::Inverse;
pub use prime::{PROBABLE_PRIME_CONFIDENCE, Primality, WITNESSES};
pub use scan::Run;
pub use storage::BitVectorBuilder;
