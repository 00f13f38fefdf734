use crate::crypto::error::{CipherError, CipherResult};

/// A keyed block cipher. The round keys are derived once at construction,
/// so implementations are immutable and safe to share between threads.
pub trait SymmetricCipher: Send + Sync {
    /// Short algorithm name used in logs and errors.
    fn name(&self) -> &'static str;

    fn block_size(&self) -> usize;

    fn encrypt_block(&self, block: &[u8]) -> CipherResult<Vec<u8>>;

    fn decrypt_block(&self, block: &[u8]) -> CipherResult<Vec<u8>>;
}

/// Block-by-block transform of a block-aligned buffer without any chaining.
pub trait CipherAlgorithm {
    fn encrypt(&self, data: &[u8]) -> CipherResult<Vec<u8>>;
    fn decrypt(&self, data: &[u8]) -> CipherResult<Vec<u8>>;
}

impl<T: SymmetricCipher + ?Sized> CipherAlgorithm for T {
    fn encrypt(&self, data: &[u8]) -> CipherResult<Vec<u8>> {
        ensure_aligned(data, self.block_size())?;
        let mut out = Vec::with_capacity(data.len());
        for block in data.chunks_exact(self.block_size()) {
            out.extend(self.encrypt_block(block)?);
        }
        Ok(out)
    }

    fn decrypt(&self, data: &[u8]) -> CipherResult<Vec<u8>> {
        ensure_aligned(data, self.block_size())?;
        let mut out = Vec::with_capacity(data.len());
        for block in data.chunks_exact(self.block_size()) {
            out.extend(self.decrypt_block(block)?);
        }
        Ok(out)
    }
}

/// Derives the round-key schedule of a cipher from its master key.
pub trait KeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> CipherResult<Vec<u32>>;
}

pub(crate) fn ensure_aligned(data: &[u8], block_size: usize) -> CipherResult<()> {
    if block_size == 0 || data.len() % block_size != 0 {
        return Err(CipherError::BlockSizeMismatch {
            length: data.len(),
            block_size,
        });
    }
    Ok(())
}
