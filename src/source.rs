use std::{
    fs::File,
    io::{BufReader, Read},
    ops::Deref,
    path::Path,
};

use memmap2::Mmap;
use tracing::debug;

/// Unified view over the input file's bytes.
///
/// The whole file is materialized up front (its length is taken once, from
/// this view); the walker then works purely with offsets into it.
#[non_exhaustive]
pub enum FileBytes<'a> {
    /// Owned heap-allocated byte buffer
    Owned(Vec<u8>),

    /// Memory-mapped file (zero-copy, OS-backed)
    MemoryMapped(Mmap),

    /// Borrowed byte slice
    Borrowed(&'a [u8]),
}

impl<'a> FileBytes<'a> {
    /// Open a file for parsing, memory-mapping it when the platform allows.
    ///
    /// Falls back to a buffered read into an owned buffer when mapping fails
    /// (empty files, special filesystems).
    pub fn open<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let file = File::open(path.as_ref())?;

        match unsafe { Mmap::map(&file) } {
            Ok(mmap) => {
                debug!(len = mmap.len(), "memory-mapped input file");
                Ok(FileBytes::MemoryMapped(mmap))
            }
            Err(err) => {
                debug!(%err, "mmap failed, reading into owned buffer");
                let mut bytes = Vec::new();
                BufReader::new(file).read_to_end(&mut bytes)?;
                Ok(FileBytes::Owned(bytes))
            }
        }
    }

    /// Returns the file data as a contiguous byte slice
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            FileBytes::Owned(data) => data.as_slice(),
            FileBytes::MemoryMapped(mmap) => mmap.as_ref(),
            FileBytes::Borrowed(slice) => slice,
        }
    }

    /// Total byte length, queried once and reused by the traversal
    #[inline]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Deref for FileBytes<'_> {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_bytes()
    }
}

impl<'a> From<&'a [u8]> for FileBytes<'a> {
    fn from(value: &'a [u8]) -> Self {
        FileBytes::Borrowed(value)
    }
}

impl From<Vec<u8>> for FileBytes<'_> {
    fn from(value: Vec<u8>) -> Self {
        FileBytes::Owned(value)
    }
}

impl AsRef<[u8]> for FileBytes<'_> {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
