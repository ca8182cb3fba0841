use crate::crypto::error::CipherError;
use bitvec::prelude::*;

/// A fixed-width block transform and its inverse.
pub trait BlockCipher {
    fn encrypt_block(&self, block: &BitSlice) -> Result<BitVec, CipherError>;
    fn decrypt_block(&self, block: &BitSlice) -> Result<BitVec, CipherError>;
    fn block_bits(&self) -> usize;
}
