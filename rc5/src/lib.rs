pub mod crypto;
pub use crypto::key_schedule::Rc5KeyExpansion;
pub use crypto::rc5::Rc5;
