use crate::crypto::error::{CipherError, CipherResult};
use bitvec::prelude::*;

// Byte-sequence forms of the `u32` rotate and wrapping add/sub/xor that the
// RC5 and MARS rounds use on machine words.

/// Rotates the low `width_bits` bits of `bytes`, read as a big-endian
/// unsigned integer, to the left. Bits above the width are left untouched.
///
/// `shift` is reduced modulo the width, so a negative shift rotates right.
pub fn rotate_left(bytes: &[u8], shift: i64, width_bits: usize) -> CipherResult<Vec<u8>> {
    rotate_window(bytes, shift, width_bits)
}

/// Inverse of [`rotate_left`].
pub fn rotate_right(bytes: &[u8], shift: i64, width_bits: usize) -> CipherResult<Vec<u8>> {
    let width = width_bits.max(1) as i64;
    rotate_window(bytes, width - shift.rem_euclid(width), width_bits)
}

fn rotate_window(bytes: &[u8], shift: i64, width_bits: usize) -> CipherResult<Vec<u8>> {
    let total_bits = bytes.len() * 8;
    if width_bits == 0 || width_bits > total_bits {
        return Err(CipherError::LengthMismatch {
            left: width_bits,
            right: total_bits,
        });
    }

    let by = shift.rem_euclid(width_bits as i64) as usize;
    if by == 0 {
        return Ok(bytes.to_vec());
    }

    // Msb0 over big-endian bytes: index 0 is the most significant bit, so a
    // slice rotation towards index 0 is an integer rotation to the left.
    let mut bits = BitVec::<u8, Msb0>::from_slice(bytes);
    bits[total_bits - width_bits..].rotate_left(by);
    Ok(bits.into_vec())
}

/// Little-endian ripple-carry addition modulo `2^(8 * max(len))`.
pub fn add_mod(a: &[u8], b: &[u8]) -> Vec<u8> {
    let len = a.len().max(b.len());
    let mut carry = 0u16;
    (0..len)
        .map(|i| {
            let sum = u16::from(byte_at(a, i)) + u16::from(byte_at(b, i)) + carry;
            carry = sum >> 8;
            sum as u8
        })
        .collect()
}

/// Little-endian ripple-borrow subtraction modulo `2^(8 * max(len))`.
pub fn sub_mod(a: &[u8], b: &[u8]) -> Vec<u8> {
    let len = a.len().max(b.len());
    let mut borrow = 0i16;
    (0..len)
        .map(|i| {
            let mut diff = i16::from(byte_at(a, i)) - i16::from(byte_at(b, i)) - borrow;
            borrow = 0;
            if diff < 0 {
                diff += 256;
                borrow = 1;
            }
            diff as u8
        })
        .collect()
}

#[inline]
fn byte_at(bytes: &[u8], index: usize) -> u8 {
    bytes.get(index).copied().unwrap_or(0)
}

pub fn xor(a: &[u8], b: &[u8]) -> CipherResult<Vec<u8>> {
    if a.len() != b.len() {
        return Err(CipherError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter().zip(b).map(|(x, y)| x ^ y).collect())
}

/// Adds one to a big-endian counter block; all-`0xFF` wraps to all-zero.
#[inline]
pub fn increment_counter(block: &mut [u8]) {
    for byte in block.iter_mut().rev() {
        let (res, overflow) = byte.overflowing_add(1);
        *byte = res;
        if !overflow {
            break;
        }
    }
}

/// Splits a block into `N` little-endian 32-bit words.
pub fn load_words_le<const N: usize>(bytes: &[u8]) -> CipherResult<[u32; N]> {
    if bytes.len() != N * 4 {
        return Err(CipherError::InvalidBlockSize {
            expected: N * 4,
            actual: bytes.len(),
        });
    }
    let mut words = [0u32; N];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    Ok(words)
}

pub fn store_words_le(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}
