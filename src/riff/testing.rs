//! Synthetic WAV image builders shared by the unit tests.

/// Build a complete RIFF/WAVE byte image from (tag, content) pairs.
///
/// The RIFF size field covers the WAVE form tag plus every sub-chunk,
/// headers included, with no padding between chunks.
pub fn wav_image(chunks: &[(&[u8; 4], Vec<u8>)]) -> Vec<u8> {
    let mut body = b"WAVE".to_vec();
    for (tag, content) in chunks {
        body.extend_from_slice(*tag);
        body.extend_from_slice(&(content.len() as u32).to_le_bytes());
        body.extend_from_slice(content);
    }

    let mut image = b"RIFF".to_vec();
    image.extend_from_slice(&(body.len() as u32).to_le_bytes());
    image.extend_from_slice(&body);
    image
}

/// Build `fmt ` chunk content; `bits_per_sample` is appended only when given.
pub fn fmt_content(
    format_code: u16,
    channels: u16,
    sample_rate: u32,
    byte_rate: u32,
    block_align: u16,
    bits_per_sample: Option<u16>,
) -> Vec<u8> {
    let mut content = Vec::new();
    content.extend_from_slice(&format_code.to_le_bytes());
    content.extend_from_slice(&channels.to_le_bytes());
    content.extend_from_slice(&sample_rate.to_le_bytes());
    content.extend_from_slice(&byte_rate.to_le_bytes());
    content.extend_from_slice(&block_align.to_le_bytes());
    if let Some(bits) = bits_per_sample {
        content.extend_from_slice(&bits.to_le_bytes());
    }
    content
}
