macro_rules! bitpos {
    ($idx:expr) => {{
        let idx = $idx;
        (idx >> 6, idx & 63)
    }};
}

pub(crate) use bitpos;

/// Builds a [`BitVector`](crate::BitVector) from literal bits, most
/// significant bit first.
///
/// Every element must be `0` or `1`; anything else panics, the same way an
/// out-of-bounds index panics in `vec![]`-style literals.
///
/// # Examples
///
/// ```
/// use packed_bitvector::bits;
///
/// let bv = bits![1, 0, 1, 1];
/// assert_eq!(bv.to_string(), "1011");
/// assert!(bits![].is_empty());
/// ```
#[macro_export]
macro_rules! bits {
    () => {
        $crate::BitVector::zeros(0)
    };
    ($($bit:expr),+ $(,)?) => {{
        let mut builder = $crate::BitVectorBuilder::with_capacity([$(stringify!($bit)),+].len());
        $(
            match $bit {
                0 => builder.push(false),
                1 => builder.push(true),
                other => panic!("bits! element must be 0 or 1, got {}", other),
            }
        )+
        builder.finalize()
    }};
}
