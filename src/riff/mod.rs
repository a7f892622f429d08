pub mod bext;
pub mod cart;
pub mod chunks;
pub mod error;
pub mod fmt;
pub mod list;
pub mod misc;
pub mod reader;
pub mod scan;
pub mod walker;

#[cfg(test)]
pub(crate) mod testing;

pub use chunks::{ChunkDesc, ChunkId};
pub use error::RiffError;
pub use fmt::AudioEncoding;
pub use scan::{DataRegion, DecodedField, FieldValue, ScanOutcome, ScanWarning, locate_data, scan};
pub use walker::{NUL_SCAN_CAP, locate_sub_chunk, read_riff_header};
