use crate::riff::{
    chunks::{ChunkId, INFO_LIST},
    error::RiffError,
    reader::{FieldReader, fixed_text},
    scan::{ScanOutcome, ScanWarning},
};

/// Normalize a 4-byte tag into a stable lowercase field-name component.
///
/// Uppercase ASCII letters are case-folded; anything outside `0x40..=0x7E`
/// becomes `?` so arbitrary producer bytes cannot leak into field names.
pub(crate) fn normalize_tag(raw: &[u8]) -> String {
    raw.iter()
        .map(|&b| match b {
            0x41..=0x5A => (b + 0x20) as char,
            0x40..=0x7E => b as char,
            _ => '?',
        })
        .collect()
}

/// Decode a `LIST` chunk.
///
/// Only the `INFO` list type is understood; anything else is reported once
/// and left undecoded (the walker advances past it arithmetically). Every
/// INFO sub-item is decoded as text under the name `info-<tag>`.
pub fn decode(r: &mut FieldReader<'_>, out: &mut ScanOutcome) -> Result<(), RiffError> {
    let list_type = ChunkId::new(&r.tag("LIST type")?);
    if list_type != INFO_LIST {
        out.warn(ScanWarning::UnsupportedListType(list_type));
        return Ok(());
    }

    while r.remaining() > 0 {
        let sub_tag = r.tag("INFO sub-type")?;
        let sub_size = r.u32_le("INFO sub-size")?;
        let raw = r.take(sub_size as usize, "INFO text")?;
        out.push_text(format!("info-{}", normalize_tag(&sub_tag)), fixed_text(raw));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::riff::scan::FieldValue;

    fn info_list(items: &[(&[u8; 4], &[u8])]) -> Vec<u8> {
        let mut content = b"INFO".to_vec();
        for (tag, text) in items {
            content.extend_from_slice(*tag);
            content.extend_from_slice(&(text.len() as u32).to_le_bytes());
            content.extend_from_slice(text);
        }
        content
    }

    fn decode_list(content: &[u8]) -> Result<ScanOutcome, RiffError> {
        let mut out = ScanOutcome::default();
        let mut r = FieldReader::new(content, 0);
        decode(&mut r, &mut out)?;
        Ok(out)
    }

    #[test]
    fn info_sub_tags_are_lowercased() {
        let content = info_list(&[(b"INAM", b"My Song\0")]);
        let out = decode_list(&content).unwrap();
        assert_eq!(
            out.field("info-inam"),
            Some(&FieldValue::Text("My Song".into()))
        );
    }

    #[test]
    fn bytes_outside_accepted_range_become_question_marks() {
        let content = info_list(&[(&[b'I', 0x2A, b'A', b'M'], b"x")]);
        let out = decode_list(&content).unwrap();
        assert_eq!(out.field("info-i?am"), Some(&FieldValue::Text("x".into())));
    }

    #[test]
    fn multiple_items_in_order() {
        let content = info_list(&[(b"IART", b"Someone"), (b"ICMT", b"A comment\0pad")]);
        let out = decode_list(&content).unwrap();
        assert_eq!(out.fields[0].name, "info-iart");
        assert_eq!(out.fields[1].name, "info-icmt");
        assert_eq!(
            out.field("info-icmt"),
            Some(&FieldValue::Text("A comment".into()))
        );
    }

    #[test]
    fn non_info_list_warns_and_decodes_nothing() {
        let mut content = b"adtl".to_vec();
        content.extend_from_slice(&[1, 2, 3, 4]);
        let out = decode_list(&content).unwrap();
        assert!(out.fields.is_empty());
        assert_eq!(
            out.warnings,
            vec![ScanWarning::UnsupportedListType(ChunkId::new(b"adtl"))]
        );
    }

    #[test]
    fn sub_item_size_overrun_is_truncation() {
        let mut content = b"INFO".to_vec();
        content.extend_from_slice(b"INAM");
        content.extend_from_slice(&100u32.to_le_bytes());
        content.extend_from_slice(b"short");
        let err = decode_list(&content).unwrap_err();
        assert!(err.to_string().contains("INFO text"));
    }

    #[test]
    fn normalize_keeps_in_range_punctuation() {
        // '@' (0x40) and '~' (0x7E) sit inside the accepted range
        assert_eq!(normalize_tag(b"@A~z"), "@a~z");
    }
}
