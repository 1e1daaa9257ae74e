//! Text codec for FIR filter descriptor files.
//!
//! This module separates the three concerns of descriptor persistence:
//! - `encode`: translate FilterDescriptor → file text (pure, no I/O)
//! - `decode`: translate file text → FilterDescriptor (pure, no I/O)
//! - `store`: own the filesystem, read files and replace them atomically
//!
//! The encode/decode functions are pure so the whole grammar can be
//! tested without touching the filesystem.

pub mod decode;
pub mod encode;
pub mod store;

pub use decode::decode;
pub use encode::encode;
pub use store::{read_filter, write_filter};

/// First character of a comment line. Only recognized at the start of a
/// line (after leading whitespace); it does not open a trailing comment.
pub const COMMENT_MARKER: char = '#';

/// Metadata keys, exactly as they appear in a descriptor file.
/// Matching is case-sensitive: `type` is a parse error, not a key.
pub const KEY_TYPE: &str = "TYPE";
pub const KEY_NAME: &str = "NAME";
pub const KEY_ORDER: &str = "ORDER";
pub const KEY_SFREQ: &str = "SFREQ";

/// Comment placed at the top of every file this library writes.
pub const FILE_BANNER: &str = "# FIR filter descriptor";
