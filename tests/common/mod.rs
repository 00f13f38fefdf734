#![allow(dead_code)]

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use chat_crypto::{Algorithm, InMemoryKeyStore};
use symmetric_cipher::crypto::cipher_traits::SymmetricCipher;

pub const CHAT: i64 = 42;
pub const ALICE: i64 = 1;
pub const BOB: i64 = 2;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// 32 bytes of key material: enough for MARS as is, and RC5 keeps the first 16.
pub fn key_material() -> Vec<u8> {
    (0u8..32).map(|i| i.wrapping_mul(37).wrapping_add(11)).collect()
}

pub fn store_with(material: &[u8]) -> InMemoryKeyStore {
    let store = InMemoryKeyStore::new();
    store.insert(CHAT, ALICE, BASE64.encode(material));
    store
}

/// Deterministic message whose last byte is never zero, so Zeros padding
/// can be stripped without eating message bytes.
pub fn message(len: usize) -> Vec<u8> {
    let mut data: Vec<u8> = (0..len).map(|i| (i * 7 + 3) as u8).collect();
    if let Some(last) = data.last_mut() {
        *last |= 1;
    }
    data
}

pub fn block_size(algorithm: Algorithm) -> usize {
    algorithm.build_cipher(&key_material()).unwrap().block_size()
}

pub fn aligned_lengths(algorithm: Algorithm) -> [usize; 3] {
    let block = block_size(algorithm);
    [0, block, 5 * block]
}
