use dh_crypto::DhError;
use symmetric_cipher::crypto::error::CipherError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("cipher error: {0}")]
    Cipher(#[from] CipherError),

    #[error("key exchange error: {0}")]
    KeyExchange(#[from] DhError),

    #[error("key material unavailable: {0}")]
    KeyMaterial(String),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
