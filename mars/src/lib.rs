pub mod crypto;
pub use crypto::key_schedule::MarsKeyExpansion;
pub use crypto::mars::Mars;
