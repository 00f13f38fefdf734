use crate::crypto::sboxes::{B, S};
use crate::crypto::{MAX_KEY_BYTES, MIN_KEY_BYTES, ROUND_KEY_WORDS};
use symmetric_cipher::crypto::cipher_traits::KeyExpansion;
use symmetric_cipher::crypto::error::{CipherError, CipherResult};

const T_WORDS: usize = 15;
const PASSES: usize = 4;
const STIR_ROUNDS: usize = 4;
const WORDS_PER_PASS: usize = ROUND_KEY_WORDS / PASSES;

/// MARS key expansion: 4 to 56 key bytes (whole words) into 40 round keys.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarsKeyExpansion;

impl KeyExpansion for MarsKeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> CipherResult<Vec<u32>> {
        if key.len() % 4 != 0 || !(MIN_KEY_BYTES..=MAX_KEY_BYTES).contains(&key.len()) {
            return Err(CipherError::InvalidKeyLength {
                algorithm: "MARS",
                expected: "a multiple of 4 bytes between 4 and 56",
                actual: key.len(),
            });
        }

        let n = key.len() / 4;
        let mut t = [0u32; T_WORDS];
        for (word, chunk) in t.iter_mut().zip(key.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        t[n] = n as u32;

        let mut k = [0u32; ROUND_KEY_WORDS];
        for pass in 0..PASSES {
            for i in 0..T_WORDS {
                let mixed = (t[(i + 8) % T_WORDS] ^ t[(i + 13) % T_WORDS]).rotate_left(3);
                t[i] ^= mixed ^ (4 * i + pass) as u32;
            }

            for _ in 0..STIR_ROUNDS {
                for i in 0..T_WORDS {
                    let index = (t[(i + 14) % T_WORDS] & 0x1FF) as usize;
                    t[i] = t[i].wrapping_add(S[index]).rotate_left(9);
                }
            }

            for i in 0..WORDS_PER_PASS {
                k[WORDS_PER_PASS * pass + i] = t[(4 * i) % T_WORDS];
            }
        }

        // Multiplication keys must not carry long runs of equal bits.
        for i in (5..=35).step_by(2) {
            let j = (k[i] & 3) as usize;
            let w = k[i] | 3;
            let p = B[j].rotate_left(k[i - 1] & 0x1F);
            k[i] = w ^ (p & weak_bits_mask(w));
        }

        Ok(k.to_vec())
    }
}

/// Bit `l` is set iff it sits strictly inside a run of at least 10 equal
/// bits of `w` and `2 <= l <= 30`.
pub(crate) fn weak_bits_mask(w: u32) -> u32 {
    let mut mask = 0u32;
    let mut start = 0u32;
    while start < 32 {
        let bit = (w >> start) & 1;
        let mut end = start + 1;
        while end < 32 && (w >> end) & 1 == bit {
            end += 1;
        }
        if end - start >= 10 {
            for l in (start + 1).max(2)..(end - 1).min(31) {
                mask |= 1 << l;
            }
        }
        start = end;
    }
    mask
}
