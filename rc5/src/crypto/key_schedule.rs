use crate::crypto::{KEY_BYTES, TABLE_WORDS};
use symmetric_cipher::crypto::cipher_traits::KeyExpansion;
use symmetric_cipher::crypto::error::{CipherError, CipherResult};

/// Magic constants for 32-bit words: Odd((e - 2) * 2^32) and Odd((phi - 1) * 2^32).
pub const P32: u32 = 0xB7E1_5163;
pub const Q32: u32 = 0x9E37_79B9;

/// Expands a 16-byte key into the 26-word table `S`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rc5KeyExpansion;

impl KeyExpansion for Rc5KeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> CipherResult<Vec<u32>> {
        if key.len() != KEY_BYTES {
            return Err(CipherError::InvalidKeyLength {
                algorithm: "RC5",
                expected: "16 bytes",
                actual: key.len(),
            });
        }

        // Key bytes packed into little-endian words; c = ceil(b / 4), at least 1.
        let c = key.len().div_ceil(4).max(1);
        let mut l = vec![0u32; c];
        for (i, &byte) in key.iter().enumerate().rev() {
            l[i / 4] = (l[i / 4] << 8).wrapping_add(u32::from(byte));
        }

        let mut s = [0u32; TABLE_WORDS];
        s[0] = P32;
        for i in 1..TABLE_WORDS {
            s[i] = s[i - 1].wrapping_add(Q32);
        }

        let (mut a, mut b) = (0u32, 0u32);
        let (mut i, mut j) = (0usize, 0usize);
        for _ in 0..3 * TABLE_WORDS.max(c) {
            s[i] = s[i].wrapping_add(a).wrapping_add(b).rotate_left(3);
            a = s[i];
            l[j] = l[j].wrapping_add(a).wrapping_add(b).rotate_left(a.wrapping_add(b));
            b = l[j];
            i = (i + 1) % TABLE_WORDS;
            j = (j + 1) % c;
        }

        Ok(s.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_26_words() {
        let s = Rc5KeyExpansion.generate_round_keys(&[0u8; 16]).unwrap();
        assert_eq!(s.len(), TABLE_WORDS);
    }

    #[test]
    fn different_keys_differ() {
        let a = Rc5KeyExpansion.generate_round_keys(&[0u8; 16]).unwrap();
        let b = Rc5KeyExpansion.generate_round_keys(&[1u8; 16]).unwrap();
        assert_ne!(a, b);
    }
}
