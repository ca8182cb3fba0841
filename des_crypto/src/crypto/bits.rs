use crate::crypto::error::CipherError;
use bitvec::prelude::*;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Decode a hexadecimal string into exactly `width` bits.
///
/// The textual entry point is fixed-width: the string must carry
/// exactly `width / 4` digits, so a 15-digit string for a 64-bit field
/// is rejected instead of being zero-padded. Index 0 of the result is
/// position 1 in the standard permutation tables.
pub fn bits_from_hex(text: &str, width: usize) -> Result<BitVec, CipherError> {
    debug_assert_eq!(width % 4, 0, "bit width must be a whole number of nibbles");

    let expected = width / 4;
    if text.len() != expected {
        return Err(CipherError::Format(format!(
            "expected {} hex digits for a {}-bit value, got {}",
            expected,
            width,
            text.len()
        )));
    }

    let mut bits = BitVec::with_capacity(width);
    for ch in text.chars() {
        let nibble = ch
            .to_digit(16)
            .ok_or_else(|| CipherError::Format(format!("invalid hex digit {ch:?}")))?;
        for shift in (0..4).rev() {
            bits.push((nibble >> shift) & 1 != 0);
        }
    }
    Ok(bits)
}

/// Decode a non-negative integer into exactly `width` bits,
/// left-zero-padded. Fails when the value does not fit in `width` bits
/// rather than returning an over-length sequence.
pub fn bits_from_int(value: u64, width: usize) -> Result<BitVec, CipherError> {
    debug_assert!(width <= 64, "integer entry point is capped at 64 bits");

    if width < 64 && value >> width != 0 {
        return Err(CipherError::Format(format!(
            "value {value:#X} does not fit in {width} bits"
        )));
    }

    let mut bits = BitVec::with_capacity(width);
    for shift in (0..width).rev() {
        bits.push((value >> shift) & 1 != 0);
    }
    Ok(bits)
}

/// Encode a bit sequence as fixed-width uppercase hex: `len / 4`
/// digits, leading zeros preserved. The length must be a whole number
/// of nibbles (every width in this cipher is).
pub fn bits_to_hex(bits: &BitSlice) -> String {
    debug_assert_eq!(bits.len() % 4, 0, "bit length must be a whole number of nibbles");

    bits.chunks(4)
        .map(|nibble| {
            let mut value = 0usize;
            for bit in nibble.iter().by_vals() {
                value = (value << 1) | bit as usize;
            }
            HEX_DIGITS[value] as char
        })
        .collect()
}

/// Byte-level companions to the hex codec for callers that hold key or
/// block material as raw bytes rather than hex text. The cipher
/// pipeline itself works on bit sequences and hex strings only.
pub fn bytes_to_bits(input: &[u8]) -> BitVec {
    let mut bits = BitVec::with_capacity(input.len() * 8);
    for &byte in input {
        for i in (0..8).rev() {
            bits.push((byte >> i) & 1 != 0);
        }
    }
    bits
}

pub fn bits_to_bytes(bits: &BitSlice) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(bits.len() / 8);
    for chunk in bits.chunks(8) {
        let mut byte = 0u8;
        for (i, bit) in chunk.iter().by_vals().enumerate() {
            if bit {
                byte |= 1 << (7 - i);
            }
        }
        bytes.push(byte);
    }
    bytes
}
