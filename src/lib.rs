//! RIFF/WAVE chunk inspection and audio payload extraction.
//!
//! The core is a chunk walker over an in-memory byte view of the file, a
//! family of per-tag decoders for the recognized metadata chunks, and two
//! sinks: an ordered `key: value` report and a verbatim payload copy.

// Correctness and logic
#![warn(clippy::unit_cmp)]
#![warn(clippy::match_same_arms)]

// Style and idiomatic Rust
#![warn(clippy::redundant_clone)]
#![warn(clippy::needless_return)]
#![warn(clippy::manual_map)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::panic)]

// Maintainability
#![warn(clippy::missing_safety_doc)]

pub mod error;
pub mod extract;
pub mod logging;
pub mod report;
pub mod riff;
pub mod source;

pub use crate::error::{WaveMetaError, WaveMetaResult};
pub use crate::extract::{COPY_BLOCK_SIZE, copy_data};
pub use crate::report::{DurationStyle, write_report};
pub use crate::riff::{DataRegion, ScanOutcome, locate_data, scan};
pub use crate::source::FileBytes;
