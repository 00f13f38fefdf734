#![allow(dead_code)]

use symmetric_cipher::crypto::cipher_traits::SymmetricCipher;
use symmetric_cipher::crypto::error::{CipherError, CipherResult};
use symmetric_cipher::crypto::random::EntropySource;

pub const TOY_BLOCK: usize = 8;

/// Byte-wise XOR with a key followed by a 3-bit rotation. Useless as a
/// cipher, but invertible and easy to reason about when checking chaining.
pub struct ToyCipher {
    pub key: [u8; TOY_BLOCK],
}

impl ToyCipher {
    pub fn new() -> Self {
        Self {
            key: [0x13, 0x37, 0xC0, 0xDE, 0x42, 0x99, 0x0F, 0xF0],
        }
    }
}

impl SymmetricCipher for ToyCipher {
    fn name(&self) -> &'static str {
        "TOY"
    }

    fn block_size(&self) -> usize {
        TOY_BLOCK
    }

    fn encrypt_block(&self, block: &[u8]) -> CipherResult<Vec<u8>> {
        check_block(block)?;
        Ok(block
            .iter()
            .zip(self.key)
            .map(|(b, k)| (b ^ k).rotate_left(3))
            .collect())
    }

    fn decrypt_block(&self, block: &[u8]) -> CipherResult<Vec<u8>> {
        check_block(block)?;
        Ok(block
            .iter()
            .zip(self.key)
            .map(|(b, k)| b.rotate_right(3) ^ k)
            .collect())
    }
}

fn check_block(block: &[u8]) -> CipherResult<()> {
    if block.len() != TOY_BLOCK {
        return Err(CipherError::InvalidBlockSize {
            expected: TOY_BLOCK,
            actual: block.len(),
        });
    }
    Ok(())
}

/// Fills every request with the same byte.
pub struct FixedEntropy(pub u8);

impl EntropySource for FixedEntropy {
    fn try_fill(&self, dest: &mut [u8]) -> CipherResult<()> {
        dest.fill(self.0);
        Ok(())
    }
}

pub struct FailingEntropy;

impl EntropySource for FailingEntropy {
    fn try_fill(&self, _dest: &mut [u8]) -> CipherResult<()> {
        Err(CipherError::RandomnessUnavailable("entropy pool closed".into()))
    }
}

pub fn random_message(len: usize) -> Vec<u8> {
    use rand::RngCore;
    let mut buf = vec![0u8; len];
    rand::rng().fill_bytes(&mut buf);
    // Zeros padding cannot keep a trailing zero byte.
    if let Some(last) = buf.last_mut() {
        *last |= 0x01;
    }
    buf
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
