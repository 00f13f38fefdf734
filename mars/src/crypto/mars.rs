use crate::crypto::key_schedule::MarsKeyExpansion;
use crate::crypto::sboxes::{S, s0, s1};
use crate::crypto::{BLOCK_BYTES, ROUND_KEY_WORDS};
use log::debug;
use symmetric_cipher::crypto::cipher_traits::{KeyExpansion, SymmetricCipher};
use symmetric_cipher::crypto::error::{CipherError, CipherResult};
use symmetric_cipher::crypto::utils::{load_words_le, store_words_le};

const MIXING_ROUNDS: usize = 8;
const CORE_ROUNDS: usize = 16;

/// MARS over 16-byte blocks: key whitening, unkeyed forward mixing, a keyed
/// core built on the E-function, unkeyed backward mixing and whitening again.
#[derive(Clone)]
pub struct Mars {
    k: [u32; ROUND_KEY_WORDS],
}

impl Mars {
    pub fn new(key: &[u8]) -> CipherResult<Self> {
        let round_keys = MarsKeyExpansion.generate_round_keys(key)?;
        let k: [u32; ROUND_KEY_WORDS] = round_keys.try_into().map_err(|keys: Vec<u32>| {
            CipherError::InvalidKeyLength {
                algorithm: "MARS",
                expected: "40 expanded words",
                actual: keys.len(),
            }
        })?;
        debug!("MARS key schedule ready for a {}-byte key", key.len());
        Ok(Self { k })
    }

    fn words(&self, block: &[u8]) -> CipherResult<[u32; 4]> {
        if block.len() != BLOCK_BYTES {
            return Err(CipherError::InvalidBlockSize {
                expected: BLOCK_BYTES,
                actual: block.len(),
            });
        }
        load_words_le::<4>(block)
    }

    /// Returns `(L, M, R)`; `k_mul` is the multiplication key, `k_add` the addition key.
    fn e_function(a: u32, k_mul: u32, k_add: u32) -> (u32, u32, u32) {
        let m = a.wrapping_add(k_add);
        let r = a.rotate_left(13).wrapping_mul(k_mul).rotate_left(5);
        let l = S[(m & 0x1FF) as usize] ^ r;
        let m = m.rotate_left(r & 0x1F);
        let r = r.rotate_left(5);
        let l = (l ^ r).rotate_left(r & 0x1F);
        (l, m, r)
    }

    fn core_keys(&self, round: usize) -> (u32, u32) {
        (self.k[2 * round + 5], self.k[2 * round + 4])
    }
}

impl SymmetricCipher for Mars {
    fn name(&self) -> &'static str {
        "MARS"
    }

    fn block_size(&self) -> usize {
        BLOCK_BYTES
    }

    fn encrypt_block(&self, block: &[u8]) -> CipherResult<Vec<u8>> {
        let [a, b, c, d] = self.words(block)?;
        let mut a = a.wrapping_add(self.k[0]);
        let mut b = b.wrapping_add(self.k[1]);
        let mut c = c.wrapping_add(self.k[2]);
        let mut d = d.wrapping_add(self.k[3]);

        for i in 0..MIXING_ROUNDS {
            b = (b ^ s0(a)).wrapping_add(s1(a >> 8));
            c = c.wrapping_add(s0(a >> 16));
            d ^= s1(a >> 24);
            a = a.rotate_right(24);
            match i {
                1 | 5 => a = a.wrapping_add(b),
                0 | 4 => a = a.wrapping_add(d),
                _ => {}
            }
            (a, b, c, d) = (b, c, d, a);
        }

        for i in 0..CORE_ROUNDS {
            let (k_mul, k_add) = self.core_keys(i);
            let (l, m, r) = Self::e_function(a, k_mul, k_add);
            c = c.wrapping_add(m);
            if i < CORE_ROUNDS / 2 {
                b = b.wrapping_add(l);
                d ^= r;
            } else {
                d = d.wrapping_add(l);
                b ^= r;
            }
            (a, b, c, d) = (b, c, d, a.rotate_left(13));
        }

        for i in 0..MIXING_ROUNDS {
            match i {
                3 | 7 => a = a.wrapping_sub(b),
                2 | 6 => a = a.wrapping_sub(d),
                _ => {}
            }
            b ^= s1(a);
            c = c.wrapping_sub(s0(a.rotate_left(8)));
            d = d.wrapping_sub(s1(a.rotate_left(16))) ^ s0(a.rotate_left(24));
            (a, b, c, d) = (b, c, d, a.rotate_left(24));
        }

        Ok(store_words_le(&[
            a.wrapping_sub(self.k[36]),
            b.wrapping_sub(self.k[37]),
            c.wrapping_sub(self.k[38]),
            d.wrapping_sub(self.k[39]),
        ]))
    }

    fn decrypt_block(&self, block: &[u8]) -> CipherResult<Vec<u8>> {
        let [a, b, c, d] = self.words(block)?;
        let mut a = a.wrapping_add(self.k[36]);
        let mut b = b.wrapping_add(self.k[37]);
        let mut c = c.wrapping_add(self.k[38]);
        let mut d = d.wrapping_add(self.k[39]);

        for i in (0..MIXING_ROUNDS).rev() {
            (a, b, c, d) = (d.rotate_right(24), a, b, c);
            d = (d ^ s0(a.rotate_left(24))).wrapping_add(s1(a.rotate_left(16)));
            c = c.wrapping_add(s0(a.rotate_left(8)));
            b ^= s1(a);
            match i {
                3 | 7 => a = a.wrapping_add(b),
                2 | 6 => a = a.wrapping_add(d),
                _ => {}
            }
        }

        for i in (0..CORE_ROUNDS).rev() {
            (a, b, c, d) = (d.rotate_right(13), a, b, c);
            let (k_mul, k_add) = self.core_keys(i);
            let (l, m, r) = Self::e_function(a, k_mul, k_add);
            c = c.wrapping_sub(m);
            if i < CORE_ROUNDS / 2 {
                b = b.wrapping_sub(l);
                d ^= r;
            } else {
                d = d.wrapping_sub(l);
                b ^= r;
            }
        }

        for i in (0..MIXING_ROUNDS).rev() {
            (a, b, c, d) = (d, a, b, c);
            match i {
                1 | 5 => a = a.wrapping_sub(b),
                0 | 4 => a = a.wrapping_sub(d),
                _ => {}
            }
            a = a.rotate_left(24);
            d ^= s1(a >> 24);
            c = c.wrapping_sub(s0(a >> 16));
            b = b.wrapping_sub(s1(a >> 8)) ^ s0(a);
        }

        Ok(store_words_le(&[
            a.wrapping_sub(self.k[0]),
            b.wrapping_sub(self.k[1]),
            c.wrapping_sub(self.k[2]),
            d.wrapping_sub(self.k[3]),
        ]))
    }
}
