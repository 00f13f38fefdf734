//! Error type shared by every cipher, mode and padding operation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("invalid key length for {algorithm}: got {actual} bytes, expected {expected}")]
    InvalidKeyLength {
        algorithm: &'static str,
        expected: &'static str,
        actual: usize,
    },

    #[error("invalid block size: got {actual} bytes, expected {expected}")]
    InvalidBlockSize { expected: usize, actual: usize },

    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("unsupported algorithm `{0}`")]
    UnsupportedAlgorithm(String),

    #[error("unsupported cipher mode `{0}`")]
    UnsupportedMode(String),

    #[error("unsupported padding `{0}`")]
    UnsupportedPadding(String),

    #[error("invalid padding: {0}")]
    InvalidPadding(&'static str),

    #[error("data length {length} is not a multiple of the block size {block_size}")]
    BlockSizeMismatch { length: usize, block_size: usize },

    #[error("invalid mode state: {0}")]
    InvalidModeState(String),

    #[error("randomness unavailable: {0}")]
    RandomnessUnavailable(String),

    #[error("background worker failed: {0}")]
    WorkerFailed(String),
}

pub type CipherResult<T> = std::result::Result<T, CipherError>;
