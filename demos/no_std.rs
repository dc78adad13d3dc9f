//! Example demonstrating `no_std` usage with `BitVector`
// #![no_std]

extern crate alloc;
use alloc::vec::Vec;
use packed_bitvector::{BitVector, bits};

fn main() {
    // Construction works the same in no_std
    let mut bv = BitVector::zeros(16);
    bv.set(3, true).ok();
    bv.set(-1, 1).ok();

    // Count set bits
    let count = bv.count_ones();
    // println!("Set bits: {count}");
    core::hint::black_box(count);

    // Collect from an iterator - uses alloc::vec
    let pattern: Vec<bool> = (0..16).map(|i| i % 3 == 0).collect();
    let other: BitVector = pattern.into_iter().collect();

    // Logic and shifts
    let mixed = &bv ^ &other;
    core::hint::black_box(mixed.count_ones());
    let mut rotated = bits![1, 0, 0, 1, 1];
    rotated.shift_left(2);
    core::hint::black_box(rotated.as_words());

    // Field arithmetic needs no allocator beyond alloc
    if let Ok(aes) = BitVector::from_bit_str("100011011")
        && let Ok(inverse) = BitVector::from_integer(0x53u8).gf_multiplicative_inverse(&aes, 8)
    {
        core::hint::black_box(inverse.is_found());
    }

    // Large vectors use alloc for heap storage
    let large = BitVector::zeros(1000);
    // println!("Large vector spilled to heap: {}", large.is_spilled());
    core::hint::black_box(large.is_spilled());
}
