use crate::crypto::key_schedule::Rc5KeyExpansion;
use crate::crypto::{BLOCK_BYTES, ROUNDS, TABLE_WORDS};
use log::debug;
use symmetric_cipher::crypto::cipher_traits::{KeyExpansion, SymmetricCipher};
use symmetric_cipher::crypto::error::{CipherError, CipherResult};
use symmetric_cipher::crypto::utils::{load_words_le, store_words_le};

/// RC5-32/12/16 block cipher over 8-byte blocks.
///
/// Rotation amounts are data dependent and always taken modulo 32.
#[derive(Clone)]
pub struct Rc5 {
    s: [u32; TABLE_WORDS],
}

impl Rc5 {
    pub fn new(key: &[u8]) -> CipherResult<Self> {
        let round_keys = Rc5KeyExpansion.generate_round_keys(key)?;
        let s: [u32; TABLE_WORDS] = round_keys.try_into().map_err(|keys: Vec<u32>| {
            CipherError::InvalidKeyLength {
                algorithm: "RC5",
                expected: "26 expanded words",
                actual: keys.len(),
            }
        })?;
        debug!("RC5 key schedule ready ({} words)", s.len());
        Ok(Self { s })
    }

    fn words(&self, block: &[u8]) -> CipherResult<[u32; 2]> {
        if block.len() != BLOCK_BYTES {
            return Err(CipherError::InvalidBlockSize {
                expected: BLOCK_BYTES,
                actual: block.len(),
            });
        }
        load_words_le::<2>(block)
    }
}

impl SymmetricCipher for Rc5 {
    fn name(&self) -> &'static str {
        "RC5"
    }

    fn block_size(&self) -> usize {
        BLOCK_BYTES
    }

    fn encrypt_block(&self, block: &[u8]) -> CipherResult<Vec<u8>> {
        let [a, b] = self.words(block)?;
        let mut a = a.wrapping_add(self.s[0]);
        let mut b = b.wrapping_add(self.s[1]);

        for i in 1..=ROUNDS {
            a = (a ^ b).rotate_left(b).wrapping_add(self.s[2 * i]);
            b = (b ^ a).rotate_left(a).wrapping_add(self.s[2 * i + 1]);
        }

        Ok(store_words_le(&[a, b]))
    }

    fn decrypt_block(&self, block: &[u8]) -> CipherResult<Vec<u8>> {
        let [mut a, mut b] = self.words(block)?;

        for i in (1..=ROUNDS).rev() {
            b = b.wrapping_sub(self.s[2 * i + 1]).rotate_right(a) ^ a;
            a = a.wrapping_sub(self.s[2 * i]).rotate_right(b) ^ b;
        }

        let b = b.wrapping_sub(self.s[1]);
        let a = a.wrapping_sub(self.s[0]);
        Ok(store_words_le(&[a, b]))
    }
}
