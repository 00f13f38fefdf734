//! Where cipher keys come from: a Base64 public value looked up per chat and
//! user, or a Diffie-Hellman shared secret encoded the same way.

use crate::error::{ServiceError, ServiceResult};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use dh_crypto::{DiffieHellman, KeyExchangeAlgorithm, shared_secret_to_key};
use num_bigint::BigUint;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::RwLock;

/// Looks up the Base64 key material a chat participant published.
pub trait KeyMaterialSource: Send + Sync {
    fn fetch(&self, chat_id: i64, user_id: i64) -> Option<String>;
}

#[derive(Debug, Default)]
pub struct InMemoryKeyStore {
    keys: RwLock<HashMap<(i64, i64), String>>,
}

impl InMemoryKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, chat_id: i64, user_id: i64, material: impl Into<String>) {
        // A poisoned map still holds consistent entries.
        let mut keys = self.keys.write().unwrap_or_else(|e| e.into_inner());
        keys.insert((chat_id, user_id), material.into());
    }

    pub fn remove(&self, chat_id: i64, user_id: i64) -> Option<String> {
        let mut keys = self.keys.write().unwrap_or_else(|e| e.into_inner());
        keys.remove(&(chat_id, user_id))
    }
}

impl KeyMaterialSource for InMemoryKeyStore {
    fn fetch(&self, chat_id: i64, user_id: i64) -> Option<String> {
        let keys = self.keys.read().unwrap_or_else(|e| e.into_inner());
        keys.get(&(chat_id, user_id)).cloned()
    }
}

pub fn decode_key_material(encoded: &str) -> ServiceResult<Vec<u8>> {
    BASE64
        .decode(encoded.trim())
        .map_err(|e| ServiceError::KeyMaterial(format!("invalid Base64: {e}")))
}

/// Base64 of the big-endian magnitude, the form peers exchange.
pub fn encode_public_key(public_key: &BigUint) -> String {
    BASE64.encode(public_key.to_bytes_be())
}

pub fn decode_public_key(encoded: &str) -> ServiceResult<BigUint> {
    Ok(BigUint::from_bytes_be(&decode_key_material(encoded)?))
}

/// Computes the DH shared secret with a peer and returns `len` bytes of it
/// as Base64, ready to be stored where a [`KeyMaterialSource`] finds it.
pub fn shared_key_material(
    dh: &DiffieHellman,
    own_private_key: &BigUint,
    peer_public_key: &str,
    len: usize,
) -> ServiceResult<String> {
    let peer = decode_public_key(peer_public_key)?;
    let secret = dh.compute_shared_secret(own_private_key, &peer)?;
    Ok(BASE64.encode(shared_secret_to_key(&secret, len)))
}

/// Short SHA-256 prefix of a key, safe to log.
pub fn fingerprint(key: &[u8]) -> String {
    let digest = Sha256::digest(key);
    hex::encode(&digest[..4])
}
