use crate::riff::{
    error::RiffError,
    reader::{FieldReader, fixed_text},
    scan::ScanOutcome,
};

/// Fixed-width text prologue of the broadcast extension chunk
const TEXT_FIELDS: [(&str, usize); 5] = [
    ("bext-description", 256),
    ("bext-originator", 32),
    ("bext-originator-reference", 32),
    ("bext-origination-date", 10),
    ("bext-origination-time", 8),
];

/// Byte count of the version-1 numeric tail (time reference + version)
const NUMERIC_TAIL_LEN: usize = 4 + 4 + 2;

/// Decode a `bext` (BWF broadcast extension) chunk.
///
/// The text fields are fixed-width buffers with no terminator guarantee. The
/// numeric tail was added in a later revision of the format, so it is only
/// decoded when the chunk is long enough to carry it.
pub fn decode(r: &mut FieldReader<'_>, out: &mut ScanOutcome) -> Result<(), RiffError> {
    for (name, width) in TEXT_FIELDS {
        let raw = r.take(width, name)?;
        out.push_text(name, fixed_text(raw));
    }

    if r.remaining() >= NUMERIC_TAIL_LEN {
        out.push_uint(
            "bext-time-reference-low",
            r.u32_le("bext-time-reference-low")?,
        );
        out.push_uint(
            "bext-time-reference-high",
            r.u32_le("bext-time-reference-high")?,
        );
        out.push_uint("bext-version", r.u16_le("bext-version")? as u32);
    }

    Ok(())
}
