pub mod crypto;
pub use crypto::cipher_context::*;
pub use crypto::cipher_modes::{CipherModeEngine, ModeOutput};
pub use crypto::cipher_traits::*;
pub use crypto::cipher_types::*;
pub use crypto::error::{CipherError, CipherResult};
pub use crypto::random::{EntropySource, OsEntropy};
