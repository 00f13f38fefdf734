pub mod key_schedule;
pub mod mars;
pub mod sboxes;

pub const BLOCK_BYTES: usize = 16;
pub const ROUND_KEY_WORDS: usize = 40;
pub const MIN_KEY_BYTES: usize = 4;
pub const MAX_KEY_BYTES: usize = 56;
