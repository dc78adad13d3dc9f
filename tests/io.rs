#![cfg(feature = "std")]

use std::{fs, io::Write};

use packed_bitvector::{BitReader, BitVector, ErrorKind};

fn scratch_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("packed-bitvector-{}-{name}", std::process::id()))
}

#[test]
fn test_file_round_trip_in_blocks() {
    let path = scratch_path("blocks.bin");
    let message = "Hello from a packed bit vector";
    {
        let mut file = fs::File::create(&path).unwrap();
        BitVector::from_text(message).unwrap().write_to(&mut file).unwrap();
        file.flush().unwrap();
    }

    let mut reader = BitReader::open(&path).unwrap();
    let mut text = String::new();
    let mut blocks = 0;
    while reader.more_to_read() {
        let block = reader.read_bits(64).unwrap();
        text.push_str(&block.to_text().unwrap());
        blocks += 1;
    }
    fs::remove_file(&path).unwrap();

    assert_eq!(text, message);
    assert_eq!(blocks, message.len().div_ceil(8));
}

#[test]
fn test_open_missing_file() {
    let err = BitReader::open(scratch_path("missing.bin")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_character_form_round_trip() {
    let bv = BitVector::from_hex_str("deadbeef").unwrap().concat(&"101".parse().unwrap());
    let mut out = Vec::new();
    bv.write_bit_chars(&mut out).unwrap();
    assert_eq!(out.len(), 35);

    out.extend_from_slice(b"\r\n");
    let back = BitVector::read_bit_chars(out.as_slice()).unwrap();
    assert_eq!(back, bv);
}

#[test]
fn test_write_to_appends() {
    let mut out = b"> ".to_vec();
    BitVector::from_bytes(&[0x01, 0x02]).write_to(&mut out).unwrap();
    assert_eq!(out, [b'>', b' ', 0x01, 0x02]);
}
