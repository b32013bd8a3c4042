//! Parsing of ffprobe chapter output.
//!
//! - `blocks`: split the raw output into `[CHAPTER]` blocks
//! - `chapter`: parse one block and render it as a CUE track
//! - `timestamp`: `H*:MM:SS.MICROS` timestamps and their CUE form

pub mod blocks;
pub mod chapter;
pub mod timestamp;

pub use blocks::split_chapter_blocks;
pub use chapter::{CHAPTER_END, CHAPTER_START, Chapter};
pub use timestamp::Timestamp;
