use crate::crypto::des_tables::{PC1, PC2};
use crate::crypto::permutation::permute;
use bitvec::prelude::*;

pub const ROUNDS: usize = 16;

/// Per-round left-rotation amounts for the C and D key halves.
pub const SHIFT_BITS: [usize; 16] = [
    1, 1, 2, 2, 2, 2, 2, 2,
    1, 2, 2, 2, 2, 2, 2, 1,
];

/// Derive the 16 ordered 48-bit round subkeys from a 64-bit master key.
///
/// PC-1 drops the parity bits, the 56-bit result splits into two 28-bit
/// halves, and the loop carries the halves as its state: round `i`
/// rotates round `i - 1`'s already-rotated halves, so the rotations
/// accumulate across the schedule. Each round's subkey is PC-2 of the
/// concatenated halves.
pub fn generate_round_keys(key: &BitSlice) -> Vec<BitVec> {
    debug_assert_eq!(key.len(), 64, "master key must be 64 bits");

    let permuted = permute(key, &PC1);
    let mut c = permuted[..28].to_bitvec();
    let mut d = permuted[28..].to_bitvec();

    let mut round_keys = Vec::with_capacity(ROUNDS);
    for &shift in &SHIFT_BITS {
        c.rotate_left(shift);
        d.rotate_left(shift);

        let mut cd = BitVec::with_capacity(56);
        cd.extend_from_bitslice(&c);
        cd.extend_from_bitslice(&d);

        round_keys.push(permute(&cd, &PC2));
    }

    round_keys
}
