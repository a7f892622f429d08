use core::fmt::{Display, Formatter, Result as FmtResult};

/// FourCC chunk identifier wrapper -- does not own the data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ChunkId {
    pub id: [u8; 4],
}

impl AsRef<[u8]> for ChunkId {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.id
    }
}

impl Display for ChunkId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match core::str::from_utf8(&self.id) {
            Ok(s) => write!(f, "{}", s),
            Err(_) => write!(
                f,
                "0x{:02X}{:02X}{:02X}{:02X}",
                self.id[0], self.id[1], self.id[2], self.id[3]
            ),
        }
    }
}

impl From<&[u8; 4]> for ChunkId {
    fn from(value: &[u8; 4]) -> Self {
        ChunkId { id: *value }
    }
}

impl ChunkId {
    #[inline]
    pub const fn new(id: &[u8; 4]) -> Self {
        ChunkId { id: *id }
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.id
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.id).ok()
    }
}

/// Lightweight description of a RIFF/WAVE chunk located in the byte view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkDesc {
    pub id: ChunkId,
    /// Offset of the 8-byte chunk header
    pub offset: usize,
    /// Declared content size from the header; untrusted, bounds-checked on use
    pub size: u32,
}

impl ChunkDesc {
    /// Offset of the first content byte
    #[inline]
    pub const fn content_start(&self) -> usize {
        self.offset + 8
    }

    /// Offset of the next sibling chunk.
    ///
    /// Computed arithmetically from the declared size, independent of how
    /// many bytes a decoder actually consumed. No word-alignment padding is
    /// added; real-world producers advance by the exact declared size.
    #[inline]
    pub const fn next_offset(&self) -> usize {
        self.content_start() + self.size as usize
    }
}

impl Display for ChunkDesc {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "Chunk ID: {}, Offset: {}, Size: {}",
            self.id, self.offset, self.size
        )
    }
}

pub const RIFF_CHUNK: ChunkId = ChunkId::new(b"RIFF");
pub const WAVE_FORM: ChunkId = ChunkId::new(b"WAVE");
pub const FMT_CHUNK: ChunkId = ChunkId::new(b"fmt ");
pub const DATA_CHUNK: ChunkId = ChunkId::new(b"data");
pub const BEXT_CHUNK: ChunkId = ChunkId::new(b"bext");
pub const MEXT_CHUNK: ChunkId = ChunkId::new(b"mext");
pub const FACT_CHUNK: ChunkId = ChunkId::new(b"fact");
pub const DISP_CHUNK: ChunkId = ChunkId::new(b"DISP");
pub const CART_CHUNK: ChunkId = ChunkId::new(b"cart");
pub const LIST_CHUNK: ChunkId = ChunkId::new(b"LIST");
pub const JUNK_CHUNK: ChunkId = ChunkId::new(b"JUNK");
pub const INFO_LIST: ChunkId = ChunkId::new(b"INFO");
