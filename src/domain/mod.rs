//! Core domain types
//!
//! Pure types with no I/O dependencies. These represent the core concepts
//! of a stored FIR filter: the descriptor value, its category, and the
//! errors its file format can produce.

pub mod error;
pub mod types;

pub use error::*;
pub use types::*;
