use crate::crypto::cipher_modes::{CipherModeEngine, ModeOutput};
use crate::crypto::cipher_traits::SymmetricCipher;
use crate::crypto::cipher_types::{CipherMode, PaddingMode};
use crate::crypto::error::{CipherError, CipherResult};
use crate::crypto::padding::{apply_padding, remove_padding};
use crate::crypto::random::{EntropySource, OsEntropy, random_bytes};
use log::{debug, trace};
use std::sync::Arc;

/// One cipher bound to a mode, a padding scheme and an IV.
///
/// Encryption takes `&mut self` because RD mode keeps the deltas of the last
/// call for the matching [`CipherContext::decrypt`]. A context therefore
/// serves a single logical operation at a time.
#[derive(Clone)]
pub struct CipherContext {
    algorithm: Arc<dyn SymmetricCipher>,
    mode: CipherMode,
    padding: PaddingMode,
    iv: Vec<u8>,
    deltas: Option<Vec<u8>>,
    entropy: Arc<dyn EntropySource>,
}

impl CipherContext {
    /// Builds a context; `iv: None` draws a fresh IV from the OS CSPRNG.
    pub fn new(
        algorithm: Arc<dyn SymmetricCipher>,
        mode: CipherMode,
        padding: PaddingMode,
        iv: Option<Vec<u8>>,
    ) -> CipherResult<Self> {
        Self::with_entropy(algorithm, mode, padding, iv, Arc::new(OsEntropy))
    }

    pub fn with_entropy(
        algorithm: Arc<dyn SymmetricCipher>,
        mode: CipherMode,
        padding: PaddingMode,
        iv: Option<Vec<u8>>,
        entropy: Arc<dyn EntropySource>,
    ) -> CipherResult<Self> {
        let block_size = algorithm.block_size();
        let iv = match iv {
            Some(iv) if iv.len() != block_size => {
                return Err(CipherError::InvalidModeState(format!(
                    "IV must be {block_size} bytes for {}, got {}",
                    algorithm.name(),
                    iv.len()
                )));
            }
            Some(iv) => iv,
            None => {
                debug!("generating {block_size}-byte IV for {}", algorithm.name());
                random_bytes(entropy.as_ref(), block_size)?
            }
        };

        debug!(
            "cipher context: algorithm={} mode={mode} padding={padding}",
            algorithm.name()
        );

        Ok(Self {
            algorithm,
            mode,
            padding,
            iv,
            deltas: None,
            entropy,
        })
    }

    /// Installs RD deltas received out of band, for a context that only decrypts.
    pub fn with_deltas(mut self, deltas: Vec<u8>) -> Self {
        self.deltas = Some(deltas);
        self
    }

    pub fn mode(&self) -> CipherMode {
        self.mode
    }

    pub fn padding(&self) -> PaddingMode {
        self.padding
    }

    pub fn block_size(&self) -> usize {
        self.algorithm.block_size()
    }

    pub fn iv(&self) -> &[u8] {
        &self.iv
    }

    /// Deltas produced by the last RD encryption on this context.
    pub fn last_deltas(&self) -> Option<&[u8]> {
        self.deltas.as_deref()
    }

    pub fn encrypt(&mut self, plaintext: &[u8]) -> CipherResult<Vec<u8>> {
        let output = self.encrypt_with_deltas(plaintext)?;
        self.deltas = output.deltas;
        Ok(output.ciphertext)
    }

    /// Encrypts without touching the context; RD deltas are handed back to
    /// the caller, who must carry them to wherever decryption happens.
    pub fn encrypt_with_deltas(&self, plaintext: &[u8]) -> CipherResult<ModeOutput> {
        let block_size = self.block_size();
        let prepared = if self.mode.is_padded() {
            apply_padding(plaintext.to_vec(), block_size, self.padding, self.entropy.as_ref())?
        } else {
            self.check_length(plaintext)?;
            plaintext.to_vec()
        };

        trace!(
            "{} {} encrypt: {} bytes -> {} padded",
            self.algorithm.name(),
            self.mode,
            plaintext.len(),
            prepared.len()
        );

        CipherModeEngine::new(self.algorithm.as_ref()).encrypt(
            self.mode,
            &prepared,
            Some(&self.iv),
            self.entropy.as_ref(),
        )
    }

    /// Decrypts with the bound IV; RD mode uses the deltas kept from the last
    /// [`CipherContext::encrypt`].
    pub fn decrypt(&self, ciphertext: &[u8]) -> CipherResult<Vec<u8>> {
        self.process_decrypt(ciphertext, &self.iv, self.deltas.as_deref())
    }

    pub fn decrypt_with_deltas(&self, ciphertext: &[u8], deltas: &[u8]) -> CipherResult<Vec<u8>> {
        self.process_decrypt(ciphertext, &self.iv, Some(deltas))
    }

    /// Encrypts and lays the result out as `IV || ciphertext`.
    pub fn seal(&mut self, plaintext: &[u8]) -> CipherResult<Vec<u8>> {
        let ciphertext = self.encrypt(plaintext)?;
        let mut wire = Vec::with_capacity(self.iv.len() + ciphertext.len());
        wire.extend_from_slice(&self.iv);
        wire.extend(ciphertext);
        Ok(wire)
    }

    /// Reverses [`CipherContext::seal`], taking the IV from the wire prefix.
    pub fn open(&self, wire: &[u8]) -> CipherResult<Vec<u8>> {
        let block_size = self.block_size();
        if wire.len() < block_size {
            return Err(CipherError::BlockSizeMismatch {
                length: wire.len(),
                block_size,
            });
        }
        let (iv, ciphertext) = wire.split_at(block_size);
        self.process_decrypt(ciphertext, iv, self.deltas.as_deref())
    }

    pub async fn encrypt_async(&mut self, plaintext: Vec<u8>) -> CipherResult<Vec<u8>> {
        let this = self.clone();
        let output = tokio::task::spawn_blocking(move || this.encrypt_with_deltas(&plaintext))
            .await
            .map_err(|e| CipherError::WorkerFailed(e.to_string()))??;
        self.deltas = output.deltas;
        Ok(output.ciphertext)
    }

    pub async fn decrypt_async(&self, ciphertext: Vec<u8>) -> CipherResult<Vec<u8>> {
        let this = self.clone();
        tokio::task::spawn_blocking(move || this.decrypt(&ciphertext))
            .await
            .map_err(|e| CipherError::WorkerFailed(e.to_string()))?
    }

    fn process_decrypt(
        &self,
        ciphertext: &[u8],
        iv: &[u8],
        deltas: Option<&[u8]>,
    ) -> CipherResult<Vec<u8>> {
        self.check_length(ciphertext)?;

        let decrypted = CipherModeEngine::new(self.algorithm.as_ref()).decrypt(
            self.mode,
            ciphertext,
            Some(iv),
            deltas,
        )?;

        if self.mode.is_padded() {
            remove_padding(decrypted, self.block_size(), self.padding)
        } else {
            Ok(decrypted)
        }
    }

    fn check_length(&self, data: &[u8]) -> CipherResult<()> {
        let block_size = self.block_size();
        if data.len() % block_size != 0 {
            return Err(CipherError::BlockSizeMismatch {
                length: data.len(),
                block_size,
            });
        }
        Ok(())
    }
}
