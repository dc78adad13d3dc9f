//! Error type shared by every fallible [`BitVector`](crate::BitVector)
//! operation.

use thiserror::Error;

/// Broad category of an [`Error`].
///
/// Every error maps onto exactly one kind, which lets callers branch on the
/// class of failure without matching individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An index or slice bound fell outside the vector.
    Range,
    /// A supplied bit (or bit-like character) was not 0 or 1.
    InvalidValue,
    /// An argument was well-typed but unusable (length mismatch, bad
    /// modulus, too-small size, ...).
    InvalidArgument,
    /// The request is undefined for the receiver's current shape.
    InvalidOperation,
    /// The underlying reader or writer failed.
    Io,
}

/// Errors produced by bit vector operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A bit index outside `[-size, size)`.
    #[error("index {index} out of range for bit vector of size {size}")]
    IndexOutOfRange {
        /// The offending index, before negative resolution
        index: i128,
        /// Size of the vector
        size: usize,
    },

    /// A slice bound outside the vector.
    #[error("slice {start}..{end} out of range for bit vector of size {size}")]
    SliceOutOfRange {
        /// Start of the requested range
        start: usize,
        /// End of the requested range
        end: usize,
        /// Size of the vector
        size: usize,
    },

    /// A bit value other than 0 or 1.
    #[error("invalid bit value {value}, expected 0 or 1")]
    InvalidBit {
        /// The rejected value
        value: i128,
    },

    /// A character that is not valid for the textual form being parsed.
    #[error("invalid character '{ch}' at position {pos}")]
    InvalidChar {
        /// The invalid character found
        ch: char,
        /// The position of the invalid character
        pos: usize,
    },

    /// Two operands (or an operand and a range) must have the same length.
    #[error("length mismatch: expected {expected} bits, got {actual}")]
    LengthMismatch {
        /// Required length
        expected: usize,
        /// Supplied length
        actual: usize,
    },

    /// The requested size cannot hold the integer value.
    #[error("size {requested} is smaller than the {required} bits needed for the value")]
    SizeTooSmall {
        /// Size the caller asked for
        requested: usize,
        /// Minimum number of bits for the value
        required: usize,
    },

    /// The modulus does not fit the field size.
    #[error("modulus of {bits} bits is too long for GF(2^{n})")]
    ModulusTooWide {
        /// Length of the modulus bit pattern
        bits: usize,
        /// Field exponent
        n: usize,
    },

    /// Division by the zero polynomial or a zero integer modulus.
    #[error("modulus is zero")]
    ZeroModulus,

    /// A permutation entry that does not address a bit of the vector.
    #[error("permutation index {index} out of range for bit vector of size {size}")]
    BadPermutation {
        /// The offending permutation entry
        index: usize,
        /// Size of the vector
        size: usize,
    },

    /// Candidate width too small to force the leading and trailing bits.
    #[error("prime candidate width must be at least 2 bits, got {0}")]
    WidthTooSmall(usize),

    /// The operation is meaningless on an empty vector.
    #[error("{0} is undefined for an empty bit vector")]
    EmptyVector(&'static str),

    /// The needle of a membership test is longer than the haystack.
    #[error("pattern of {needle} bits cannot occur in a vector of {haystack} bits")]
    PatternTooLong {
        /// Length of the searched pattern
        needle: usize,
        /// Length of the searched vector
        haystack: usize,
    },

    /// The vector length is not a multiple of the required unit.
    #[error("bit vector of size {size} is not a multiple of {unit} bits")]
    Misaligned {
        /// Size of the vector (or block)
        size: usize,
        /// Required unit in bits
        unit: usize,
    },

    /// A read block size that is not a whole number of bytes.
    #[error("block size {0} is not a multiple of 8")]
    BlockSize(usize),

    /// The rank of a bit that is not set was requested.
    #[error("bit at position {0} is not set")]
    BitNotSet(usize),

    /// The unsigned value does not fit the target integer type.
    #[error("value needs {bits} bits but the target type holds {max_bits}")]
    ValueTooLarge {
        /// Significant bits of the value
        bits: usize,
        /// Width of the target type
        max_bits: usize,
    },

    /// The Jaccard coefficient of two all-zero vectors.
    #[error("jaccard similarity is undefined for two all-zero vectors")]
    BothZero,

    /// I/O failure while reading or writing bits.
    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the category of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitvector::{BitVector, ErrorKind};
    ///
    /// let bv = BitVector::zeros(4);
    /// assert_eq!(bv.get(4).unwrap_err().kind(), ErrorKind::Range);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::IndexOutOfRange { .. } | Self::SliceOutOfRange { .. } => ErrorKind::Range,
            Self::BadPermutation { .. } => ErrorKind::Range,
            Self::InvalidBit { .. } | Self::InvalidChar { .. } => ErrorKind::InvalidValue,
            Self::LengthMismatch { .. }
            | Self::SizeTooSmall { .. }
            | Self::ModulusTooWide { .. }
            | Self::ZeroModulus
            | Self::WidthTooSmall(_)
            | Self::BlockSize(_)
            | Self::ValueTooLarge { .. } => ErrorKind::InvalidArgument,
            Self::EmptyVector(_)
            | Self::PatternTooLong { .. }
            | Self::Misaligned { .. }
            | Self::BitNotSet(_)
            | Self::BothZero => ErrorKind::InvalidOperation,
            #[cfg(feature = "std")]
            Self::Io(_) => ErrorKind::Io,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
