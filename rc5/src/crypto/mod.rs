//! RC5-32/12/16: 32-bit words, 12 rounds, 16-byte key.

pub mod key_schedule;
pub mod rc5;

pub const ROUNDS: usize = 12;
pub const KEY_BYTES: usize = 16;
pub const BLOCK_BYTES: usize = 8;
/// Size of the expanded key table, `2 * (ROUNDS + 1)`.
pub const TABLE_WORDS: usize = 2 * (ROUNDS + 1);
