//! FIR filter descriptor persistence.
//!
//! The canonical on-disk representation of a FIR filter — tap coefficients
//! plus identifying metadata — and the operations that move descriptors
//! between durable storage and memory. Filter *design* and filter
//! *application* live elsewhere; this crate only stores their results.
//!
//! ## Architecture
//!
//! - `domain/` - Pure domain types, no I/O dependencies
//! - `codec/` - File format: pure encode/decode plus the filesystem store
//!
//! ## File format
//!
//! Line-oriented UTF-8 text. `#` opens a comment line, `KEY value` lines
//! carry the `TYPE` / `NAME` / `ORDER` / `SFREQ` metadata, and every other
//! non-blank line is one tap coefficient. A filter of order N carries
//! exactly N + 1 coefficients.
//!
//! ```
//! use firkin::{decode, encode, FilterDescriptor, FilterKind};
//!
//! let d = FilterDescriptor::new(FilterKind::LowPass, "moving average", 8000.0, vec![0.5, 0.5]);
//! let text = encode(&d);
//! assert_eq!(decode(&text).unwrap(), d);
//! ```

// Core domain (pure, no I/O)
pub mod domain;

// File format (pure codec + filesystem store)
pub mod codec;

pub use codec::{decode, encode, read_filter, write_filter};
pub use domain::{FilterDescriptor, FilterFileError, FilterFileResult, FilterKind};
