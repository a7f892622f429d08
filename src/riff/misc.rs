use tracing::debug;

use crate::riff::{
    error::RiffError,
    reader::{FieldReader, fixed_text},
    scan::{ScanOutcome, ScanWarning},
};

/// Windows clipboard format carried by DISP chunks; only text is decoded
pub const CF_TEXT: u32 = 1;

/// Decode a `mext` (MPEG extension) chunk: five u16 words, reserved discarded.
pub fn decode_mext(r: &mut FieldReader<'_>, out: &mut ScanOutcome) -> Result<(), RiffError> {
    out.push_hex(
        "mext-sound-information",
        r.u16_le("mext-sound-information")? as u64,
        2,
    );
    out.push_uint("mext-frame-size", r.u16_le("mext-frame-size")? as u32);
    out.push_uint(
        "mext-ancillary-data-length",
        r.u16_le("mext-ancillary-data-length")? as u32,
    );
    out.push_uint(
        "mext-ancillary-data-def",
        r.u16_le("mext-ancillary-data-def")? as u32,
    );
    let _ = r.u16_le("mext-reserved")?;
    Ok(())
}

/// Decode a `fact` chunk: a single u32 sample count.
pub fn decode_fact(r: &mut FieldReader<'_>, out: &mut ScanOutcome) -> Result<(), RiffError> {
    out.push_uint("fact-sample-count", r.u32_le("fact-sample-count")?);
    Ok(())
}

/// Decode a `DISP` chunk.
///
/// The remaining `size - 4` bytes are only meaningful for the text clipboard
/// format; other formats warn and leave their bytes unconsumed (the walker
/// does not depend on decoder consumption).
pub fn decode_disp(
    r: &mut FieldReader<'_>,
    size: u32,
    out: &mut ScanOutcome,
) -> Result<(), RiffError> {
    let kind = r.u32_le("DISP chunk type")?;
    debug!(kind, "DISP clipboard format");

    if kind == CF_TEXT {
        let raw = r.take(size as usize - 4, "disp-title")?;
        out.push_text("disp-title", fixed_text(raw));
    } else {
        out.warn(ScanWarning::UnknownDispType(kind));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::riff::scan::FieldValue;

    #[test]
    fn mext_renders_sound_information_in_hex() {
        let mut content = Vec::new();
        for word in [0x1Au16, 768, 0, 2, 0xFFFF] {
            content.extend_from_slice(&word.to_le_bytes());
        }
        let mut out = ScanOutcome::default();
        decode_mext(&mut FieldReader::new(&content, 0), &mut out).unwrap();

        assert_eq!(
            out.field("mext-sound-information"),
            Some(&FieldValue::Hex {
                value: 0x1A,
                digits: 2
            })
        );
        assert_eq!(out.field("mext-frame-size"), Some(&FieldValue::Uint(768)));
        // Reserved word is consumed but never emitted
        assert_eq!(out.fields.len(), 4);
    }

    #[test]
    fn fact_sample_count() {
        let content = 123_456u32.to_le_bytes();
        let mut out = ScanOutcome::default();
        decode_fact(&mut FieldReader::new(&content, 0), &mut out).unwrap();
        assert_eq!(
            out.field("fact-sample-count"),
            Some(&FieldValue::Uint(123_456))
        );
    }

    #[test]
    fn disp_text_is_decoded_as_title() {
        let mut content = CF_TEXT.to_le_bytes().to_vec();
        content.extend_from_slice(b"My Clip\0");
        let mut out = ScanOutcome::default();
        decode_disp(
            &mut FieldReader::new(&content, 0),
            content.len() as u32,
            &mut out,
        )
        .unwrap();
        assert_eq!(
            out.field("disp-title"),
            Some(&FieldValue::Text("My Clip".into()))
        );
    }

    #[test]
    fn disp_non_text_warns() {
        let content = 8u32.to_le_bytes(); // CF_DIB
        let mut out = ScanOutcome::default();
        decode_disp(&mut FieldReader::new(&content, 0), 4, &mut out).unwrap();
        assert!(out.fields.is_empty());
        assert_eq!(out.warnings, vec![ScanWarning::UnknownDispType(8)]);
    }

    #[test]
    fn disp_declared_larger_than_content_is_truncation() {
        let content = CF_TEXT.to_le_bytes();
        let mut out = ScanOutcome::default();
        let err = decode_disp(&mut FieldReader::new(&content, 0), 20, &mut out).unwrap_err();
        assert!(err.to_string().contains("disp-title"));
    }

    #[test]
    fn mext_truncated_errors() {
        let content = [0u8; 6];
        let mut out = ScanOutcome::default();
        let err = decode_mext(&mut FieldReader::new(&content, 0), &mut out).unwrap_err();
        assert!(err.to_string().contains("mext-ancillary-data-def"));
    }
}
