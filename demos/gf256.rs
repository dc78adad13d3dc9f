//! Arithmetic in GF(2^8) with the AES modulus.
//!
//! Run with `RUST_LOG=debug` to see the elements that have no inverse.

use packed_bitvector::{BitVector, Inverse, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let aes = BitVector::from_bit_str("100011011")?;
    println!("modulus: {aes} (x^8 + x^4 + x^3 + x + 1)\n");

    let a = BitVector::from_integer_sized(0x57u8, 8)?;
    let b = BitVector::from_integer_sized(0x83u8, 8)?;
    let product = a.gf_multiply_modular(&b, &aes, 8)?;
    println!("{} * {} = {}", a.to_hex()?, b.to_hex()?, product.to_hex()?);

    let raw = a.gf_multiply(&b);
    let (quotient, remainder) = raw.gf_divide(&aes, 8)?;
    println!("unreduced product {raw}");
    println!("  quotient  {quotient}");
    println!("  remainder {remainder}\n");

    // Print the inverse table, sixteen entries per row
    println!("inverse table:");
    for row in 0u8..16 {
        let mut line = String::new();
        for col in 0u8..16 {
            let value = BitVector::from_integer_sized(row << 4 | col, 8)?;
            let cell = match value.gf_multiplicative_inverse(&aes, 8)? {
                Inverse::Found(inv) => inv.to_hex()?,
                Inverse::NotInvertible { .. } => "--".to_string(),
            };
            line.push_str(&cell);
            line.push(' ');
        }
        println!("  {line}");
    }

    // A reducible modulus leaves some elements without an inverse
    let reducible = BitVector::from_bit_str("10001")?;
    println!("\nmodulo {reducible} in GF(2^4):");
    for v in 1u8..16 {
        let value = BitVector::from_integer_sized(v, 4)?;
        match value.gf_multiplicative_inverse(&reducible, 4)? {
            Inverse::Found(inv) => println!("  {value} -> {inv}"),
            Inverse::NotInvertible { gcd } => println!("  {value} shares factor {gcd}"),
        }
    }

    Ok(())
}
