//! Searching for probable primes of a fixed bit width.
//!
//! Usage: `cargo run --example prime_candidates -- [WIDTH]`

use packed_bitvector::{BitVector, Primality, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let width = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(64);

    for known in [179u32, 233, 283, 561] {
        let verdict = BitVector::from_integer(known).test_for_primality();
        println!("{known}: {verdict:?}");
    }

    println!("\nsearching for a {width}-bit probable prime...");
    let mut attempts = 0;
    let prime = loop {
        attempts += 1;
        let candidate = BitVector::random_prime_candidate(width)?;
        match candidate.test_for_primality() {
            Primality::Composite => continue,
            verdict => {
                println!(
                    "found after {attempts} candidates (confidence {})",
                    verdict.confidence()
                );
                break candidate;
            }
        }
    };

    println!("  bits:    {prime}");
    println!("  decimal: {}", prime.to_biguint());
    Ok(())
}
