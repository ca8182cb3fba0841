use crate::crypto::error::CipherError;
use bitvec::prelude::*;

/// Apply a 1-based permutation table: output bit `i` is the input bit
/// at position `table[i]`. The table's length sets the output width, so
/// one operation covers contraction (PC-1, PC-2), reordering (IP, FP,
/// P) and expansion with repeated indices (E).
///
/// Tables are trusted here; [`validate_table`] is run over every
/// constant at startup, so an out-of-range entry never reaches a data
/// path.
pub fn permute(input: &BitSlice, table: &[usize]) -> BitVec {
    table.iter().map(|&pos| input[pos - 1]).collect()
}

/// Range-check one permutation table against its input width.
pub fn validate_table(name: &str, table: &[usize], input_width: usize) -> Result<(), CipherError> {
    for (i, &pos) in table.iter().enumerate() {
        if pos == 0 || pos > input_width {
            return Err(CipherError::Configuration(format!(
                "{name}[{i}] = {pos}, outside 1..={input_width}"
            )));
        }
    }
    Ok(())
}
