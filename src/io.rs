//! Byte-oriented and character-oriented stream I/O.
//!
//! Packed form: each byte carries eight bits, most significant bit first.
//! Character form: one ASCII `'0'` or `'1'` per bit.

use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind as IoErrorKind, Read, Write},
    path::Path,
};

use tracing::trace;

use crate::{
    BitVector,
    error::{Error, Result},
};

/// Reads fixed-size blocks of bits from a byte stream.
///
/// After a full block is read the reader peeks at the stream, so
/// [`more_to_read`](Self::more_to_read) turns `false` as soon as the data is
/// exhausted rather than one read later.
///
/// # Examples
///
/// ```
/// use packed_bitvector::BitReader;
///
/// let mut reader = BitReader::new(&b"hello"[..]);
/// let block = reader.read_bits(16)?;
/// assert_eq!(block.to_text()?, "he");
/// assert!(reader.more_to_read());
///
/// let rest = reader.read_bits(64)?;
/// assert_eq!(rest.to_text()?, "llo");
/// assert!(!reader.more_to_read());
/// # Ok::<(), packed_bitvector::Error>(())
/// ```
#[derive(Debug)]
pub struct BitReader<R> {
    inner: BufReader<R>,
    more_to_read: bool,
}

impl BitReader<File> {
    /// Opens a file for block reads.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(File::open(path)?))
    }
}

impl<R: Read> BitReader<R> {
    /// Wraps a byte stream.
    pub fn new(inner: R) -> Self {
        Self {
            inner: BufReader::new(inner),
            more_to_read: true,
        }
    }

    /// Returns `false` once the stream is known to be exhausted.
    #[must_use]
    pub const fn more_to_read(&self) -> bool {
        self.more_to_read
    }

    /// Reads the next `blocksize` bits.
    ///
    /// A short final block yields however many whole bytes remain; an
    /// exhausted stream yields the empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BlockSize`] unless `blocksize` is a multiple of 8,
    /// and [`Error::Io`] if the stream fails.
    pub fn read_bits(&mut self, blocksize: usize) -> Result<BitVector> {
        if blocksize % 8 != 0 {
            return Err(Error::BlockSize(blocksize));
        }

        let want = blocksize / 8;
        let mut buf = Vec::with_capacity(want);
        (&mut self.inner).take(want as u64).read_to_end(&mut buf)?;

        if buf.len() < want || self.at_eof()? {
            self.more_to_read = false;
        }
        trace!(
            requested = blocksize,
            read = buf.len() * 8,
            more = self.more_to_read,
            "read bit block"
        );
        Ok(BitVector::from_bytes(&buf))
    }

    fn at_eof(&mut self) -> Result<bool> {
        loop {
            match self.inner.fill_buf() {
                Ok(peek) => return Ok(peek.is_empty()),
                Err(e) if e.kind() == IoErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Unwraps the reader. Buffered but unread bytes are lost.
    pub fn into_inner(self) -> R {
        self.inner.into_inner()
    }
}

impl BitVector {
    /// Writes the packed bytes of the vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Misaligned`] unless the size is a multiple of 8, and
    /// [`Error::Io`] if the writer fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitvector::BitVector;
    ///
    /// let mut out = Vec::new();
    /// BitVector::from_text("hi")?.write_to(&mut out)?;
    /// assert_eq!(out, b"hi");
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        let bytes = self.to_bytes()?;
        writer.write_all(&bytes)?;
        Ok(())
    }

    /// Writes the `0`/`1` character form of the vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the writer fails.
    pub fn write_bit_chars<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        let chars: Vec<u8> = self.iter().map(|b| if b { b'1' } else { b'0' }).collect();
        writer.write_all(&chars)?;
        Ok(())
    }

    /// Reads a vector from a stream of `0`/`1` characters.
    ///
    /// Leading and trailing ASCII whitespace is ignored, so a trailing
    /// newline in a file is fine.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChar`] for any other character and
    /// [`Error::Io`] if the stream fails or is not UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitvector::BitVector;
    ///
    /// let bv = BitVector::read_bit_chars(&b"0110\n"[..])?;
    /// assert_eq!(bv.to_string(), "0110");
    ///
    /// let mut out = Vec::new();
    /// bv.write_bit_chars(&mut out)?;
    /// assert_eq!(out, b"0110");
    /// # Ok::<(), packed_bitvector::Error>(())
    /// ```
    pub fn read_bit_chars<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_bit_str(text.trim_ascii())
    }
}
