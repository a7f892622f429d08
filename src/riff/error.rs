use thiserror::Error;

use crate::riff::chunks::ChunkId;

/// Unrecoverable parse failures; any of these aborts the whole traversal.
///
/// Unsupported chunk sub-variants and unrecognized tags are deliberately not
/// errors -- they surface as [`ScanWarning`](crate::riff::scan::ScanWarning)
/// values and traversal continues past them.
#[derive(Debug, Clone, Error)]
pub enum RiffError {
    #[error("unsupported container: expected '{expected}', found '{found}' at byte offset {offset}")]
    UnsupportedContainer {
        expected: ChunkId,
        found: ChunkId,
        offset: usize,
    },

    #[error("truncated chunk: failed to read '{field}' at byte offset {offset}")]
    Truncated { field: String, offset: usize },

    #[error("unable to locate next chunk: no tag within {scanned} bytes of offset {offset}")]
    UnlocatableChunk { offset: usize, scanned: usize },
}

impl RiffError {
    pub fn truncated(field: impl Into<String>, offset: usize) -> Self {
        RiffError::Truncated {
            field: field.into(),
            offset,
        }
    }
}
