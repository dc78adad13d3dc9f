//! Serde implementations for `BitVector`.
//!
//! The default form is a two-element tuple: the bit count, then the packed
//! bytes (most significant bit first, the last byte zero-padded on the
//! right). The [`bit_string`] module offers the `0`/`1` string form instead.

use alloc::vec::Vec;
use core::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
    ser::SerializeTuple,
};

use crate::BitVector;

/// Serializes a byte slice through `serialize_bytes`.
struct Bytes<'a>(&'a [u8]);

impl Serialize for Bytes<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(self.0)
    }
}

/// Accepts packed bytes in any of the shapes serializers produce for them.
struct ByteBuf(Vec<u8>);

impl<'de> Deserialize<'de> for ByteBuf {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ByteBufVisitor;

        impl<'de> Visitor<'de> for ByteBufVisitor {
            type Value = ByteBuf;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("packed bytes")
            }

            fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
                Ok(ByteBuf(v.to_vec()))
            }

            fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<Self::Value, E> {
                Ok(ByteBuf(v))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(byte) = seq.next_element::<u8>()? {
                    bytes.push(byte);
                }
                Ok(ByteBuf(bytes))
            }
        }

        deserializer.deserialize_bytes(ByteBufVisitor)
    }
}

/// Packs the vector into whole bytes, zero-filling the last one.
fn packed_bytes(bv: &BitVector) -> Vec<u8> {
    let mut padded = bv.clone();
    padded.pad_right((8 - bv.len() % 8) % 8);
    (0..padded.len() / 8).map(|i| padded.byte_at(i)).collect()
}

/// Rebuilds a vector from its size and packed bytes.
fn unpack<E: de::Error>(size: u64, bytes: &[u8]) -> Result<BitVector, E> {
    let size = usize::try_from(size)
        .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(size), &"a bit count"))?;
    if bytes.len() != size.div_ceil(8) {
        return Err(E::invalid_length(bytes.len(), &"ceil(size / 8) bytes"));
    }
    let full = BitVector::from_bytes(bytes);
    if full.next_set_bit(size).is_some() {
        return Err(E::invalid_value(
            de::Unexpected::Bytes(bytes),
            &"zero padding after the last bit",
        ));
    }
    full.slice(..size).map_err(E::custom)
}

impl Serialize for BitVector {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let bytes = packed_bytes(self);
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&(self.len() as u64))?;
        tuple.serialize_element(&Bytes(&bytes))?;
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for BitVector {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BitVectorVisitor;

        impl<'de> Visitor<'de> for BitVectorVisitor {
            type Value = BitVector;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a (size, packed bytes) pair")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let size: u64 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let ByteBuf(bytes) = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                unpack(size, &bytes)
            }
        }

        deserializer.deserialize_tuple(2, BitVectorVisitor)
    }
}

/// Serde adapter serializing a [`BitVector`] as its `0`/`1` string.
///
/// # Examples
///
/// ```
/// use packed_bitvector::BitVector;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Key {
///     #[serde(with = "packed_bitvector::serde::bit_string")]
///     bits: BitVector,
/// }
///
/// let key = Key { bits: BitVector::from_bit_str("1011")? };
/// assert_eq!(serde_json::to_string(&key).unwrap(), r#"{"bits":"1011"}"#);
/// # Ok::<(), packed_bitvector::Error>(())
/// ```
pub mod bit_string {
    use super::*;

    /// Serialize the vector as a string of `0` and `1` characters.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails.
    pub fn serialize<S>(bv: &BitVector, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(bv)
    }

    /// Deserialize the vector from a string of `0` and `1` characters.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a string or holds any other
    /// character.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<BitVector, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BitStringVisitor;

        impl Visitor<'_> for BitStringVisitor {
            type Value = BitVector;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string of 0 and 1 characters")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                BitVector::from_bit_str(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(BitStringVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::serde::{Deserialize, Serialize};
    use alloc::string::ToString;
    use serde_test::{Token, assert_de_tokens_error, assert_tokens};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct BitStringWrapper {
        #[serde(with = "bit_string")]
        bits: BitVector,
    }

    #[test]
    fn test_default_tokens() {
        let bv = BitVector::from_bit_str("101").unwrap();
        assert_tokens(
            &bv,
            &[
                Token::Tuple { len: 2 },
                Token::U64(3),
                Token::Bytes(&[0b1010_0000]),
                Token::TupleEnd,
            ],
        );
    }

    #[test]
    fn test_empty_tokens() {
        assert_tokens(
            &BitVector::new(),
            &[
                Token::Tuple { len: 2 },
                Token::U64(0),
                Token::Bytes(&[]),
                Token::TupleEnd,
            ],
        );
    }

    #[test]
    fn test_rejects_wrong_byte_count() {
        assert_de_tokens_error::<BitVector>(
            &[
                Token::Tuple { len: 2 },
                Token::U64(9),
                Token::Bytes(&[0xff]),
                Token::TupleEnd,
            ],
            "invalid length 1, expected ceil(size / 8) bytes",
        );
    }

    #[test]
    fn test_rejects_dirty_padding() {
        let buf = postcard::to_allocvec(&(3u64, Bytes(&[0b1010_0001]))).unwrap();
        assert!(postcard::from_bytes::<BitVector>(&buf).is_err());
    }

    #[test]
    fn test_bit_string_tokens() {
        let wrapper = BitStringWrapper {
            bits: BitVector::from_bit_str("0110").unwrap(),
        };
        assert_tokens(
            &wrapper,
            &[
                Token::Struct {
                    name: "BitStringWrapper",
                    len: 1,
                },
                Token::Str("bits"),
                Token::Str("0110"),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn test_json_round_trip() {
        let bv = BitVector::from_text("hello").unwrap().concat(&BitVector::ones(3));
        let json = serde_json::to_string(&bv).unwrap();
        let back: BitVector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bv);
        assert_eq!(back.to_string().len(), 43);
    }

    #[test]
    fn test_postcard_round_trip_large() {
        let mut bv = BitVector::zeros(1000);
        for pos in (0..1000).step_by(13) {
            bv.set(pos, true).unwrap();
        }
        let buf = postcard::to_allocvec(&bv).unwrap();
        let back: BitVector = postcard::from_bytes(&buf).unwrap();
        assert_eq!(back, bv);
    }
}
