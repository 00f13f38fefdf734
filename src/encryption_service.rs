use crate::config::CryptoConfig;
use crate::error::{ServiceError, ServiceResult};
use crate::key_material::{KeyMaterialSource, decode_key_material, fingerprint};
use std::sync::Arc;
use symmetric_cipher::crypto::cipher_context::CipherContext;
use symmetric_cipher::crypto::cipher_traits::SymmetricCipher;
use symmetric_cipher::crypto::error::CipherError;

/// What travels to the peer: `IV || ciphertext`, plus the RD deltas when the
/// chat runs in RD mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncryptedMessage {
    pub wire: Vec<u8>,
    pub deltas: Option<Vec<u8>>,
}

/// Encrypts chat payloads with the key published for a `(chat, user)` pair.
pub struct EncryptionService<S: KeyMaterialSource> {
    keys: S,
}

impl<S: KeyMaterialSource> EncryptionService<S> {
    pub fn new(keys: S) -> Self {
        Self { keys }
    }

    pub fn key_source(&self) -> &S {
        &self.keys
    }

    pub async fn encrypt(
        &self,
        data: &[u8],
        config: &CryptoConfig,
        chat_id: i64,
        user_id: i64,
    ) -> ServiceResult<EncryptedMessage> {
        let cipher = self.cipher_for(config, chat_id, user_id)?;
        let mut context = CipherContext::new(cipher, config.mode, config.padding, None)?;
        let iv = context.iv().to_vec();

        let ciphertext = context.encrypt_async(data.to_vec()).await?;
        log::info!(
            "chat {chat_id}: encrypted {} bytes with {} {} {}",
            data.len(),
            config.algorithm,
            config.mode,
            config.padding
        );

        let mut wire = Vec::with_capacity(iv.len() + ciphertext.len());
        wire.extend(iv);
        wire.extend(ciphertext);
        Ok(EncryptedMessage {
            wire,
            deltas: context.last_deltas().map(<[u8]>::to_vec),
        })
    }

    pub async fn decrypt(
        &self,
        message: &EncryptedMessage,
        config: &CryptoConfig,
        chat_id: i64,
        user_id: i64,
    ) -> ServiceResult<Vec<u8>> {
        let cipher = self.cipher_for(config, chat_id, user_id)?;
        let block_size = cipher.block_size();
        if message.wire.len() < block_size {
            return Err(CipherError::BlockSizeMismatch {
                length: message.wire.len(),
                block_size,
            }
            .into());
        }
        let (iv, ciphertext) = message.wire.split_at(block_size);

        let mut context =
            CipherContext::new(cipher, config.mode, config.padding, Some(iv.to_vec()))?;
        if let Some(deltas) = &message.deltas {
            context = context.with_deltas(deltas.clone());
        }

        let plaintext = context.decrypt_async(ciphertext.to_vec()).await?;
        log::info!(
            "chat {chat_id}: decrypted {} bytes with {}",
            plaintext.len(),
            config.algorithm
        );
        Ok(plaintext)
    }

    fn cipher_for(
        &self,
        config: &CryptoConfig,
        chat_id: i64,
        user_id: i64,
    ) -> ServiceResult<Arc<dyn SymmetricCipher>> {
        let encoded = self.keys.fetch(chat_id, user_id).ok_or_else(|| {
            ServiceError::KeyMaterial(format!("no key for chat {chat_id}, user {user_id}"))
        })?;
        let material = decode_key_material(&encoded)?;
        let key = config.algorithm.key_from_material(&material);
        log::debug!(
            "chat {chat_id}: {} key {} ({} bytes)",
            config.algorithm,
            fingerprint(key),
            key.len()
        );
        Ok(config.algorithm.build_cipher(key)?)
    }
}
