use tracing::debug;

use crate::riff::{
    chunks::{ChunkDesc, ChunkId, RIFF_CHUNK, WAVE_FORM},
    error::RiffError,
    reader::FieldReader,
};

/// Longest run of stray NUL padding bytes tolerated before a sub-chunk tag.
///
/// Some encoders leave one or two NUL bytes between the end of a chunk's
/// declared content and the next tag. Scanning past them is unbounded in the
/// wild; the cap keeps a corrupt file from degenerating into a whole-file scan.
pub const NUL_SCAN_CAP: usize = 64;

/// Read and validate the top-level container header at `offset`.
///
/// The 12-byte prologue must be `RIFF`, a u32 little-endian content size, and
/// the form tag `WAVE`. Sub-chunks start at `offset + 12` and the container's
/// content ends at the returned descriptor's `next_offset()`.
pub fn read_riff_header(bytes: &[u8], offset: usize) -> Result<ChunkDesc, RiffError> {
    let window = bytes.get(offset..).unwrap_or_default();
    let mut r = FieldReader::new(window, offset);

    let id = ChunkId::new(&r.tag("chunk type")?);
    if id != RIFF_CHUNK {
        return Err(RiffError::UnsupportedContainer {
            expected: RIFF_CHUNK,
            found: id,
            offset,
        });
    }

    let size = r.u32_le("chunk size")?;

    let form = ChunkId::new(&r.tag("chunk format")?);
    if form != WAVE_FORM {
        return Err(RiffError::UnsupportedContainer {
            expected: WAVE_FORM,
            found: form,
            offset: offset + 8,
        });
    }

    debug!(offset, size, "RIFF/WAVE container header");

    Ok(ChunkDesc {
        id,
        offset,
        size,
    })
}

/// Locate the sub-chunk header at or just after `offset`.
///
/// A tag window starting with a NUL byte is assumed to be stray padding; the
/// candidate offset advances one byte at a time until a non-NUL first byte is
/// found, at most [`NUL_SCAN_CAP`] bytes. The caller computes the sibling
/// offset arithmetically from the returned descriptor.
pub fn locate_sub_chunk(bytes: &[u8], offset: usize) -> Result<ChunkDesc, RiffError> {
    let mut start = offset;
    loop {
        match bytes.get(start) {
            None => return Err(RiffError::truncated("sub chunk type", start)),
            Some(0) => {
                if start - offset >= NUL_SCAN_CAP {
                    return Err(RiffError::UnlocatableChunk {
                        offset,
                        scanned: NUL_SCAN_CAP,
                    });
                }
                debug!(offset = start, "sub-chunk tag starts with a NUL byte, skipping");
                start += 1;
            }
            Some(_) => break,
        }
    }

    let window = bytes.get(start..).unwrap_or_default();
    let mut r = FieldReader::new(window, start);
    let id = ChunkId::new(&r.tag("sub chunk type")?);
    let size = r.u32_le("sub chunk size")?;

    debug!(offset = start, %id, size, "sub-chunk header");

    Ok(ChunkDesc {
        id,
        offset: start,
        size,
    })
}
