//! Chat-facing facade over the RC5 and MARS engines: algorithm selection,
//! key material lookup and the `IV || ciphertext` wire layout.

pub mod algorithm;
pub mod config;
pub mod encryption_service;
pub mod error;
pub mod key_material;

pub use algorithm::Algorithm;
pub use config::CryptoConfig;
pub use encryption_service::{EncryptedMessage, EncryptionService};
pub use error::{ServiceError, ServiceResult};
pub use key_material::{
    InMemoryKeyStore, KeyMaterialSource, decode_key_material, encode_public_key, fingerprint,
    shared_key_material,
};
