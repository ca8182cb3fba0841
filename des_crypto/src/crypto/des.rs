use crate::crypto::bits::{bits_from_hex, bits_to_hex};
use crate::crypto::cipher_traits::BlockCipher;
use crate::crypto::des_tables::{FP, IP};
use crate::crypto::error::CipherError;
use crate::crypto::f_function::round_function;
use crate::crypto::key_schedule::{generate_round_keys, ROUNDS};
use crate::crypto::permutation::permute;
use bitvec::prelude::*;

pub const BLOCK_BITS: usize = 64;

enum Direction {
    Encrypt,
    Decrypt,
}

/// The 16-round DES Feistel pipeline over one 64-bit block.
///
/// The subkey schedule is derived once at construction; each block
/// transform is a pure function of the block and the stored schedule,
/// so one instance can serve any number of concurrent callers.
#[derive(Clone, Debug)]
pub struct Des {
    round_keys: Vec<BitVec>,
}

impl Des {
    pub fn new(key: &BitSlice) -> Result<Self, CipherError> {
        if key.len() != BLOCK_BITS {
            return Err(CipherError::Format(format!(
                "DES key must be {} bits, got {}",
                BLOCK_BITS,
                key.len()
            )));
        }
        Ok(Des {
            round_keys: generate_round_keys(key),
        })
    }

    pub fn from_hex_key(key: &str) -> Result<Self, CipherError> {
        Des::new(&bits_from_hex(key, BLOCK_BITS)?)
    }

    /// Encrypt one 64-bit block: IP, 16 Feistel rounds, the final
    /// half-swap, FP.
    pub fn encrypt_block(&self, block: &BitSlice) -> Result<BitVec, CipherError> {
        self.transform_block(block, Direction::Encrypt)
    }

    /// Decrypt one 64-bit block: the same pipeline with the subkeys
    /// consumed in reverse round order.
    pub fn decrypt_block(&self, block: &BitSlice) -> Result<BitVec, CipherError> {
        self.transform_block(block, Direction::Decrypt)
    }

    pub fn encrypt_hex(&self, plaintext: &str) -> Result<String, CipherError> {
        let block = bits_from_hex(plaintext, BLOCK_BITS)?;
        Ok(bits_to_hex(&self.encrypt_block(&block)?))
    }

    pub fn decrypt_hex(&self, ciphertext: &str) -> Result<String, CipherError> {
        let block = bits_from_hex(ciphertext, BLOCK_BITS)?;
        Ok(bits_to_hex(&self.decrypt_block(&block)?))
    }

    fn transform_block(
        &self,
        block: &BitSlice,
        direction: Direction,
    ) -> Result<BitVec, CipherError> {
        if block.len() != BLOCK_BITS {
            return Err(CipherError::Format(format!(
                "block must be {} bits, got {}",
                BLOCK_BITS,
                block.len()
            )));
        }

        let permuted = permute(block, &IP);
        let mut left = permuted[..32].to_bitvec();
        let mut right = permuted[32..].to_bitvec();

        // Always exactly 16 rounds; each round consumes the previous
        // round's halves.
        for index in 0..ROUNDS {
            let round_key = match direction {
                Direction::Encrypt => &self.round_keys[index],
                Direction::Decrypt => &self.round_keys[ROUNDS - 1 - index],
            };
            let f_out = round_function(&right, round_key);
            let new_right: BitVec = left
                .iter()
                .by_vals()
                .zip(f_out.iter().by_vals())
                .map(|(a, b)| a ^ b)
                .collect();
            left = right;
            right = new_right;
        }

        // The pre-output block swaps the halves of the last round.
        let mut preoutput = BitVec::with_capacity(BLOCK_BITS);
        preoutput.extend_from_bitslice(&right);
        preoutput.extend_from_bitslice(&left);

        Ok(permute(&preoutput, &FP))
    }
}

impl BlockCipher for Des {
    fn encrypt_block(&self, block: &BitSlice) -> Result<BitVec, CipherError> {
        Des::encrypt_block(self, block)
    }

    fn decrypt_block(&self, block: &BitSlice) -> Result<BitVec, CipherError> {
        Des::decrypt_block(self, block)
    }

    fn block_bits(&self) -> usize {
        BLOCK_BITS
    }
}
