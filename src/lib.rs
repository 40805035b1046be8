//! Mixes a circle of integers and reads the grove coordinates out of it.

pub mod circle;
pub mod input;
pub mod mixer;

pub type Int = i64;

pub use circle::{CircularList, ListIndex};
pub use input::read_ints;
pub use mixer::{apply_decryption_key, mix, MixError, DECRYPTION_KEY, GROVE_OFFSETS, MAX_NODES};
