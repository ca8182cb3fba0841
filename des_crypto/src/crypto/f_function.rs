use crate::crypto::des_tables::{E, P, S_BOXES};
use crate::crypto::permutation::permute;
use bitvec::prelude::*;

/// The DES round function: expand the 32-bit half-block to 48 bits,
/// mix in the subkey, push each 6-bit chunk through its S-box and
/// permute the concatenated nibbles.
///
/// This is the only nonlinear step of the cipher. The lookups are plain
/// array indexing with fixed shape, so there are no data-dependent
/// branches.
pub fn round_function(half_block: &BitSlice, round_key: &BitSlice) -> BitVec {
    debug_assert_eq!(half_block.len(), 32, "half-block must be 32 bits");
    debug_assert_eq!(round_key.len(), 48, "round key must be 48 bits");

    let expanded = permute(half_block, &E);
    let mixed: BitVec = expanded
        .iter()
        .by_vals()
        .zip(round_key.iter().by_vals())
        .map(|(a, b)| a ^ b)
        .collect();

    let mut substituted = BitVec::with_capacity(32);
    for (box_index, chunk) in mixed.chunks(6).enumerate() {
        // Row from the chunk's outer bits, column from the middle four.
        let row = ((chunk[0] as usize) << 1) | chunk[5] as usize;
        let mut col = 0usize;
        for bit in chunk[1..5].iter().by_vals() {
            col = (col << 1) | bit as usize;
        }

        let nibble = S_BOXES[box_index][row * 16 + col];
        for shift in (0..4).rev() {
            substituted.push((nibble >> shift) & 1 != 0);
        }
    }

    permute(&substituted, &P)
}
