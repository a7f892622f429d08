use std::io;

use thiserror::Error;

use crate::riff::error::RiffError;

/// Result type for wavemeta operations
pub type WaveMetaResult<T> = Result<T, WaveMetaError>;

/// Top-level error type for wavemeta operations
#[derive(Debug, Error)]
pub enum WaveMetaError {
    /// File I/O errors (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("RIFF error: {0}")]
    Riff(#[from] RiffError),
}

impl WaveMetaError {
    /// True if the failure was a short read against a fixed binary layout.
    ///
    /// Callers that map errors to exit statuses treat truncation separately
    /// from other fatal parse or I/O failures.
    pub const fn is_truncation(&self) -> bool {
        matches!(self, WaveMetaError::Riff(RiffError::Truncated { .. }))
    }
}
