//! Reading and writing bit vectors through files.
//!
//! Usage: `cargo run --example file_io -- [PATH]`

use std::{fs::File, path::PathBuf};

use packed_bitvector::{BitReader, BitVector, Result};

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .map_or_else(|| std::env::temp_dir().join("packed_bitvector_demo.bin"), PathBuf::from);

    let message = BitVector::from_text("Hello, packed bits!")?;
    message.write_to(&mut File::create(&path)?)?;
    println!("wrote {} bits to {}", message.len(), path.display());

    // Read it back in 64-bit blocks
    let mut reader = BitReader::open(&path)?;
    let mut block_no = 0;
    while reader.more_to_read() {
        let block = reader.read_bits(64)?;
        println!("  block {block_no}: {block} {:?}", block.to_text()?);
        block_no += 1;
    }

    // Character form round trip
    let chars_path = path.with_extension("txt");
    let key: BitVector = "1011001110001111".parse()?;
    key.write_bit_chars(&mut File::create(&chars_path)?)?;
    let back = BitVector::read_bit_chars(File::open(&chars_path)?)?;
    println!("character form round trip: {back} (equal: {})", back == key);

    std::fs::remove_file(&path)?;
    std::fs::remove_file(&chars_path)?;
    Ok(())
}
