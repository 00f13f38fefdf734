use crate::algorithm::Algorithm;
use dh_crypto::ParameterGenerator;
use symmetric_cipher::crypto::cipher_types::{CipherMode, PaddingMode};
use symmetric_cipher::crypto::error::CipherResult;

pub const DEFAULT_MILLER_RABIN_ROUNDS: usize = 20;
pub const DEFAULT_DH_PRIME_BITS: u64 = 1024;

/// Cipher and key-exchange settings for one chat.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CryptoConfig {
    pub algorithm: Algorithm,
    pub mode: CipherMode,
    pub padding: PaddingMode,
    pub miller_rabin_rounds: usize,
    pub dh_prime_bits: u64,
}

impl Default for CryptoConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Rc5,
            mode: CipherMode::CBC,
            padding: PaddingMode::PKCS7,
            miller_rabin_rounds: DEFAULT_MILLER_RABIN_ROUNDS,
            dh_prime_bits: DEFAULT_DH_PRIME_BITS,
        }
    }
}

impl CryptoConfig {
    pub fn new(algorithm: Algorithm, mode: CipherMode, padding: PaddingMode) -> Self {
        Self {
            algorithm,
            mode,
            padding,
            ..Self::default()
        }
    }

    /// Parses the string tokens chat clients send, e.g. `("rc5", "CBC", "PKCS7")`.
    /// Algorithm tokens are case-insensitive; mode and padding tokens are exact.
    pub fn from_tokens(algorithm: &str, mode: &str, padding: &str) -> CipherResult<Self> {
        Ok(Self::new(algorithm.parse()?, mode.parse()?, padding.parse()?))
    }

    pub fn with_miller_rabin_rounds(mut self, rounds: usize) -> Self {
        self.miller_rabin_rounds = rounds;
        self
    }

    pub fn with_dh_prime_bits(mut self, bits: u64) -> Self {
        self.dh_prime_bits = bits;
        self
    }

    pub fn parameter_generator(&self) -> ParameterGenerator {
        ParameterGenerator::new(self.miller_rabin_rounds)
    }
}
