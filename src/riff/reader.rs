use crate::riff::error::RiffError;

/// Sequential little-endian reader over one chunk's content bytes.
///
/// `base` is the file offset of the first content byte, so truncation errors
/// report absolute positions. The slice handed in is clamped to what the file
/// actually contains; a declared size larger than the remaining file shows up
/// here as a short read.
#[derive(Debug)]
pub struct FieldReader<'a> {
    bytes: &'a [u8],
    pos: usize,
    base: usize,
}

impl<'a> FieldReader<'a> {
    pub const fn new(bytes: &'a [u8], base: usize) -> Self {
        FieldReader {
            bytes,
            pos: 0,
            base,
        }
    }

    #[inline]
    pub const fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    /// Absolute file offset of the next unread byte
    #[inline]
    pub const fn position(&self) -> usize {
        self.base + self.pos
    }

    /// Take exactly `len` raw bytes, or fail with a truncation error naming `field`.
    pub fn take(&mut self, len: usize, field: &str) -> Result<&'a [u8], RiffError> {
        if self.remaining() < len {
            return Err(RiffError::truncated(field, self.position()));
        }
        let out = &self.bytes[self.pos..self.pos + len];
        self.pos += len;
        Ok(out)
    }

    pub fn tag(&mut self, field: &str) -> Result<[u8; 4], RiffError> {
        let raw = self.take(4, field)?;
        Ok([raw[0], raw[1], raw[2], raw[3]])
    }

    pub fn u16_le(&mut self, field: &str) -> Result<u16, RiffError> {
        let raw = self.take(2, field)?;
        Ok(u16::from_le_bytes([raw[0], raw[1]]))
    }

    pub fn u32_le(&mut self, field: &str) -> Result<u32, RiffError> {
        let raw = self.take(4, field)?;
        Ok(u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
    }
}

/// Decode a fixed-width text buffer, capping at the first NUL byte.
///
/// Producers do not reliably NUL-terminate these fields; a buffer filled to
/// the brim with printable characters ends at the declared width.
pub fn fixed_text(raw: &[u8]) -> String {
    let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
    String::from_utf8_lossy(&raw[..end]).into_owned()
}
