//! Diffie-Hellman key agreement over a prime field.

pub mod diffie_hellman_algorithm;
pub mod key_exchange_traits;
pub mod parameters;

pub use self::diffie_hellman_algorithm::{DhParameters, DiffieHellman};
pub use self::key_exchange_traits::{KeyExchangeAlgorithm, KeyPair};
