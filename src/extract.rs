use std::io::Write;

use tracing::debug;

use crate::{
    error::{WaveMetaError, WaveMetaResult},
    riff::{error::RiffError, scan::DataRegion},
};

/// Block size for streaming the payload to the sink; the final block is
/// rounded down to the remaining byte count.
pub const COPY_BLOCK_SIZE: usize = 2048;

/// Stream the `data` chunk's payload to `sink`, byte for byte.
///
/// A declared payload length that reaches past end-of-file is a truncation
/// error rather than a silent short copy.
pub fn copy_data<W: Write>(
    bytes: &[u8],
    region: &DataRegion,
    sink: &mut W,
) -> WaveMetaResult<()> {
    let end = region
        .offset
        .checked_add(region.len as usize)
        .filter(|&end| end <= bytes.len())
        .ok_or_else(|| {
            WaveMetaError::Riff(RiffError::truncated("data payload", bytes.len()))
        })?;

    debug!(offset = region.offset, len = region.len, "copying data chunk payload");

    for block in bytes[region.offset..end].chunks(COPY_BLOCK_SIZE) {
        sink.write_all(block)?;
    }

    Ok(())
}
