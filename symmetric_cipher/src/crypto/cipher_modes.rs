use crate::crypto::cipher_traits::{SymmetricCipher, ensure_aligned};
use crate::crypto::cipher_types::CipherMode;
use crate::crypto::error::{CipherError, CipherResult};
use crate::crypto::random::{EntropySource, random_bytes};
use crate::crypto::utils::{increment_counter, xor};
use rayon::prelude::*;

// Smallest number of blocks handed to one rayon worker in ECB.
const ECB_MIN_BLOCKS_PER_TASK: usize = 64;

/// Result of a mode encryption. `deltas` is only set by the RD mode and has
/// the same length as the ciphertext.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModeOutput {
    pub ciphertext: Vec<u8>,
    pub deltas: Option<Vec<u8>>,
}

/// Chaining modes over any block cipher. Input must already be a multiple
/// of the cipher's block size.
///
/// Only ECB and NONE are processed in parallel. Every other mode feeds the
/// output of block `i` into block `i + 1` and runs strictly in order.
pub struct CipherModeEngine<'a, C: SymmetricCipher + ?Sized> {
    cipher: &'a C,
    block_size: usize,
}

impl<'a, C: SymmetricCipher + ?Sized> CipherModeEngine<'a, C> {
    pub fn new(cipher: &'a C) -> Self {
        Self {
            cipher,
            block_size: cipher.block_size(),
        }
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn encrypt(
        &self,
        mode: CipherMode,
        data: &[u8],
        iv: Option<&[u8]>,
        entropy: &dyn EntropySource,
    ) -> CipherResult<ModeOutput> {
        self.check_input(data)?;
        let ciphertext = match mode {
            CipherMode::ECB | CipherMode::None => self.ecb(data, true)?,
            CipherMode::CBC => self.cbc_encrypt(data, self.require_iv(mode, iv)?)?,
            CipherMode::PCBC => self.pcbc_encrypt(data, self.require_iv(mode, iv)?)?,
            CipherMode::CFB => self.cfb(data, self.require_iv(mode, iv)?, true)?,
            CipherMode::OFB => self.ofb(data, self.require_iv(mode, iv)?)?,
            CipherMode::CTR => self.ctr(data, self.require_iv(mode, iv)?)?,
            CipherMode::RandomDelta => {
                let iv = self.require_iv(mode, iv)?;
                let deltas = random_bytes(entropy, data.len())?;
                let ciphertext = self.rd_encrypt(data, iv, &deltas)?;
                return Ok(ModeOutput {
                    ciphertext,
                    deltas: Some(deltas),
                });
            }
        };
        Ok(ModeOutput {
            ciphertext,
            deltas: None,
        })
    }

    pub fn decrypt(
        &self,
        mode: CipherMode,
        data: &[u8],
        iv: Option<&[u8]>,
        deltas: Option<&[u8]>,
    ) -> CipherResult<Vec<u8>> {
        self.check_input(data)?;
        match mode {
            CipherMode::ECB | CipherMode::None => self.ecb(data, false),
            CipherMode::CBC => self.cbc_decrypt(data, self.require_iv(mode, iv)?),
            CipherMode::PCBC => self.pcbc_decrypt(data, self.require_iv(mode, iv)?),
            CipherMode::CFB => self.cfb(data, self.require_iv(mode, iv)?, false),
            CipherMode::OFB => self.ofb(data, self.require_iv(mode, iv)?),
            CipherMode::CTR => self.ctr(data, self.require_iv(mode, iv)?),
            CipherMode::RandomDelta => {
                let iv = self.require_iv(mode, iv)?;
                let deltas = deltas.ok_or_else(|| {
                    CipherError::InvalidModeState("RD decryption requires the encryption deltas".into())
                })?;
                if deltas.len() != data.len() {
                    return Err(CipherError::InvalidModeState(format!(
                        "RD deltas cover {} bytes, ciphertext has {}",
                        deltas.len(),
                        data.len()
                    )));
                }
                self.rd_decrypt(data, iv, deltas)
            }
        }
    }

    fn check_input(&self, data: &[u8]) -> CipherResult<()> {
        ensure_aligned(data, self.block_size).map_err(|_| {
            CipherError::InvalidModeState(format!(
                "input of {} bytes is not aligned to the {}-byte block",
                data.len(),
                self.block_size
            ))
        })
    }

    fn require_iv<'b>(&self, mode: CipherMode, iv: Option<&'b [u8]>) -> CipherResult<&'b [u8]> {
        match iv {
            None => Err(CipherError::InvalidModeState(format!("{mode} requires an IV"))),
            Some(iv) if iv.len() != self.block_size => Err(CipherError::InvalidModeState(format!(
                "{mode} IV must be {} bytes, got {}",
                self.block_size,
                iv.len()
            ))),
            Some(iv) => Ok(iv),
        }
    }

    fn ecb(&self, data: &[u8], encrypt: bool) -> CipherResult<Vec<u8>> {
        let blocks = data
            .par_chunks(self.block_size)
            .with_min_len(ECB_MIN_BLOCKS_PER_TASK)
            .map(|block| {
                if encrypt {
                    self.cipher.encrypt_block(block)
                } else {
                    self.cipher.decrypt_block(block)
                }
            })
            .collect::<CipherResult<Vec<_>>>()?;
        Ok(blocks.concat())
    }

    fn cbc_encrypt(&self, data: &[u8], iv: &[u8]) -> CipherResult<Vec<u8>> {
        let mut result = Vec::with_capacity(data.len());
        let mut prev = iv.to_vec();
        for block in data.chunks_exact(self.block_size) {
            prev = self.cipher.encrypt_block(&xor(block, &prev)?)?;
            result.extend_from_slice(&prev);
        }
        Ok(result)
    }

    fn cbc_decrypt(&self, data: &[u8], iv: &[u8]) -> CipherResult<Vec<u8>> {
        let mut result = Vec::with_capacity(data.len());
        let mut prev = iv;
        for block in data.chunks_exact(self.block_size) {
            let decrypted = self.cipher.decrypt_block(block)?;
            result.extend(xor(&decrypted, prev)?);
            prev = block;
        }
        Ok(result)
    }

    // chain = P[i] ^ C[i], so both plaintext and ciphertext errors propagate.
    fn pcbc_encrypt(&self, data: &[u8], iv: &[u8]) -> CipherResult<Vec<u8>> {
        let mut result = Vec::with_capacity(data.len());
        let mut chain = iv.to_vec();
        for block in data.chunks_exact(self.block_size) {
            let encrypted = self.cipher.encrypt_block(&xor(block, &chain)?)?;
            chain = xor(block, &encrypted)?;
            result.extend(encrypted);
        }
        Ok(result)
    }

    fn pcbc_decrypt(&self, data: &[u8], iv: &[u8]) -> CipherResult<Vec<u8>> {
        let mut result = Vec::with_capacity(data.len());
        let mut chain = iv.to_vec();
        for block in data.chunks_exact(self.block_size) {
            let plain = xor(&self.cipher.decrypt_block(block)?, &chain)?;
            chain = xor(&plain, block)?;
            result.extend(plain);
        }
        Ok(result)
    }

    // This CFB variant feeds back the plaintext block, on both sides.
    fn cfb(&self, data: &[u8], iv: &[u8], encrypt: bool) -> CipherResult<Vec<u8>> {
        let mut result = Vec::with_capacity(data.len());
        let mut feedback = iv.to_vec();
        for block in data.chunks_exact(self.block_size) {
            let keystream = self.cipher.encrypt_block(&feedback)?;
            let out = xor(block, &keystream)?;
            feedback = if encrypt { block.to_vec() } else { out.clone() };
            result.extend(out);
        }
        Ok(result)
    }

    fn ofb(&self, data: &[u8], iv: &[u8]) -> CipherResult<Vec<u8>> {
        let mut result = Vec::with_capacity(data.len());
        let mut keystream = iv.to_vec();
        for block in data.chunks_exact(self.block_size) {
            keystream = self.cipher.encrypt_block(&keystream)?;
            result.extend(xor(block, &keystream)?);
        }
        Ok(result)
    }

    fn ctr(&self, data: &[u8], iv: &[u8]) -> CipherResult<Vec<u8>> {
        let mut result = Vec::with_capacity(data.len());
        let mut counter = iv.to_vec();
        for block in data.chunks_exact(self.block_size) {
            let keystream = self.cipher.encrypt_block(&counter)?;
            result.extend(xor(block, &keystream)?);
            increment_counter(&mut counter);
        }
        Ok(result)
    }

    fn rd_encrypt(&self, data: &[u8], iv: &[u8], deltas: &[u8]) -> CipherResult<Vec<u8>> {
        let mut result = Vec::with_capacity(data.len());
        let mut prev = iv.to_vec();
        for (block, delta) in data
            .chunks_exact(self.block_size)
            .zip(deltas.chunks_exact(self.block_size))
        {
            let mixed = xor(&xor(block, delta)?, &prev)?;
            prev = self.cipher.encrypt_block(&mixed)?;
            result.extend_from_slice(&prev);
        }
        Ok(result)
    }

    fn rd_decrypt(&self, data: &[u8], iv: &[u8], deltas: &[u8]) -> CipherResult<Vec<u8>> {
        let mut result = Vec::with_capacity(data.len());
        let mut prev = iv;
        for (block, delta) in data
            .chunks_exact(self.block_size)
            .zip(deltas.chunks_exact(self.block_size))
        {
            let decrypted = self.cipher.decrypt_block(block)?;
            result.extend(xor(&xor(&decrypted, delta)?, prev)?);
            prev = block;
        }
        Ok(result)
    }
}
