//! Basic usage examples for `BitVector`

use packed_bitvector::{BitVector, Result};

fn main() -> Result<()> {
    println!("=== BitVector Basic Usage ===\n");

    // Several ways to build the same kind of value
    let from_int = BitVector::from_integer(5678u32);
    let sized = BitVector::from_integer_sized(45u8, 16)?;
    let from_str: BitVector = "0011010".parse()?;
    let from_text = BitVector::from_text("hi")?;
    println!("from_integer(5678)      = {from_int}");
    println!("from_integer_sized(45)  = {sized}");
    println!("parsed \"0011010\"        = {from_str}");
    println!("from_text(\"hi\")         = {from_text} ({})", from_text.to_hex()?);
    println!("Is using heap storage? {}\n", from_int.is_spilled());

    // Indexing from either end
    let mut bv = BitVector::zeros(10);
    bv.set(0, 1)?;
    bv.set(-1, true)?;
    println!("After setting bits 0 and -1: {bv}");
    println!("  bit 0  = {}", bv.get(0)?);
    println!("  bit -2 = {}", bv.get(-2)?);
    if let Err(e) = bv.get(10) {
        println!("  bit 10 -> {e}\n");
    }

    // Logic pads the shorter operand on the left
    let a = BitVector::from_integer(6u8);
    let b = BitVector::from_integer(13u8);
    println!("{a} ^ {b} = {}", &a ^ &b);
    println!("{a} & {b} = {}", &a & &b);
    println!("{a} | {b} = {}", &a | &b);
    println!("!{a} = {}", !&a);
    println!("{a} + {b} = {}\n", &a + &b);

    // Shifts mutate in place and chain
    let mut shifting: BitVector = "1000110".parse()?;
    shifting.circular_shift_left(3)?.shift_right(1);
    println!("rotate 3 then shift right 1: {shifting}");

    // Slicing and slice assignment
    let mut canvas = BitVector::zeros(25);
    canvas.set_slice(6..9, &"101".parse()?)?;
    let window = canvas.slice(5..10)?;
    canvas.set_slice(..5, &window)?;
    println!("canvas: {canvas}");

    // Scans
    let scanned: BitVector = "01010101011100".parse()?;
    println!("\n{scanned}");
    println!("  set bits:    {:?}", scanned.iter_ones().collect::<Vec<_>>());
    println!("  count:       {}", scanned.count_ones());
    println!("  next from 8: {:?}", scanned.next_set_bit(8));
    println!("  rank at 10:  {}", scanned.rank_at(10)?);
    for run in scanned.runs()? {
        print!("{}x{} ", u8::from(run.bit), run.len);
    }
    println!();

    // Similarity
    let x: BitVector = "11111111".parse()?;
    let y: BitVector = "00101011".parse()?;
    println!("\nhamming({x}, {y}) = {}", x.hamming_distance(&y)?);
    println!("jaccard({x}, {y}) = {}", x.jaccard_similarity(&y)?);

    Ok(())
}
