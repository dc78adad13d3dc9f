use packed_bitvector::{BitVector, BitVectorBuilder};

#[test]
fn test_pad_spills_to_heap() {
    let mut bv = BitVector::ones(100);
    assert!(!bv.is_spilled());

    bv.pad_right(28);
    assert_eq!(bv.len(), 128);
    assert!(!bv.is_spilled());

    bv.pad_left(1);
    assert_eq!(bv.len(), 129);
    assert!(bv.is_spilled());
    assert_eq!(bv.count_ones(), 100);
    assert!(!bv.get(0).unwrap());
    assert!(bv.get(1).unwrap());
    assert!(!bv.get(-1).unwrap());
}

#[test]
fn test_slice_returns_to_inline() {
    let big = BitVector::ones(1000);
    assert!(big.is_spilled());

    let small = big.slice(900..).unwrap();
    assert_eq!(small.len(), 100);
    assert!(!small.is_spilled());
    assert_eq!(small, BitVector::ones(100));
}

#[test]
fn test_word_count_tracks_size() {
    for size in [0, 1, 63, 64, 65, 127, 128, 129, 1000] {
        let bv = BitVector::ones(size);
        assert_eq!(bv.as_words().len(), size.div_ceil(64), "size {size}");
    }
}

#[test]
fn test_tail_bits_stay_zero() {
    let mut bv = BitVector::zeros(70);
    bv.invert();
    assert_eq!(bv.as_words(), &[u64::MAX, 0b11_1111]);

    bv.circular_shift_left(5).unwrap();
    assert_eq!(bv.as_words()[1] >> 6, 0);

    bv.reset(1).unwrap();
    assert_eq!(bv.as_words()[1], 0b11_1111);

    let flipped = !&BitVector::zeros(3);
    assert_eq!(flipped.as_words(), &[0b111]);
}

#[test]
fn test_equal_vectors_hash_equal() {
    use std::collections::HashSet;

    let mut set = HashSet::new();
    set.insert(BitVector::from_integer(45u8));
    set.insert("101101".parse::<BitVector>().unwrap());
    set.insert(BitVector::from_integer_sized(45u8, 8).unwrap());
    assert_eq!(set.len(), 2);
}

#[test]
fn test_builder_mixed_pushes() {
    let mut builder = BitVectorBuilder::with_capacity(80);
    builder.push(true);
    builder.push_byte(0xa5);
    builder.push_zeros(60);
    builder.push_byte(0xff);
    builder.push_byte_bits(0b10, 2);
    assert_eq!(builder.len(), 79);

    let bv = builder.finalize();
    assert_eq!(bv.slice(..9).unwrap().to_string(), "110100101");
    assert_eq!(bv.slice(69..77).unwrap().to_string(), "11111111");
    assert_eq!(bv.slice(77..).unwrap().to_string(), "10");
    assert_eq!(bv.count_ones(), 1 + 4 + 8 + 1);
}

#[test]
fn test_builder_aligned_extend() {
    let mut builder = BitVectorBuilder::default();
    builder.extend_from_bitvector(&BitVector::ones(64));
    builder.extend_from_bitvector(&BitVector::from_bit_str("101").unwrap());
    builder.extend_from_bitvector(&BitVector::from_bit_str("01").unwrap());
    let bv: BitVector = builder.into();
    assert_eq!(bv.len(), 69);
    assert_eq!(bv.slice(64..).unwrap().to_string(), "10101");
}
