//! Block-cipher plumbing shared by the RC5 and MARS crates.

pub mod cipher_context;
pub mod cipher_modes;
pub mod cipher_traits;
pub mod cipher_types;
pub mod error;
pub mod padding;
pub mod random;
pub mod utils;

use std::sync::Arc;
use crate::crypto::cipher_traits::SymmetricCipher;
use crate::crypto::error::CipherResult;

impl SymmetricCipher for Arc<dyn SymmetricCipher> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn block_size(&self) -> usize {
        (**self).block_size()
    }

    fn encrypt_block(&self, block: &[u8]) -> CipherResult<Vec<u8>> {
        (**self).encrypt_block(block)
    }

    fn decrypt_block(&self, block: &[u8]) -> CipherResult<Vec<u8>> {
        (**self).decrypt_block(block)
    }
}
