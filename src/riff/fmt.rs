use core::fmt::{Display, Formatter, Result as FmtResult};

use crate::riff::{error::RiffError, reader::FieldReader, scan::ScanOutcome};

/// WAV format codes (wFormatTag) as labelled by the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum AudioEncoding {
    /// PCM (uncompressed)
    Pcm,
    /// MPEG audio
    Mpeg,
    /// MPEG Layer 3
    MpegLayer3,
    /// Mu-law
    MuLaw,
    /// A-law
    ALaw,
    /// ADPCM
    Adpcm,
    /// Unknown or unsupported format
    Unknown(u16),
}

impl AudioEncoding {
    pub const fn const_from(code: u16) -> Self {
        match code {
            1 => AudioEncoding::Pcm,
            80 => AudioEncoding::Mpeg,
            85 => AudioEncoding::MpegLayer3,
            257 => AudioEncoding::MuLaw,
            258 => AudioEncoding::ALaw,
            259 => AudioEncoding::Adpcm,
            other => AudioEncoding::Unknown(other),
        }
    }

    /// Canonical numeric WAV format tag
    pub const fn as_u16(self) -> u16 {
        match self {
            AudioEncoding::Pcm => 1,
            AudioEncoding::Mpeg => 80,
            AudioEncoding::MpegLayer3 => 85,
            AudioEncoding::MuLaw => 257,
            AudioEncoding::ALaw => 258,
            AudioEncoding::Adpcm => 259,
            AudioEncoding::Unknown(code) => code,
        }
    }

    pub const fn is_pcm(self) -> bool {
        matches!(self, AudioEncoding::Pcm)
    }
}

impl From<u16> for AudioEncoding {
    fn from(code: u16) -> Self {
        Self::const_from(code)
    }
}

impl Display for AudioEncoding {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AudioEncoding::Pcm => write!(f, "PCM"),
            AudioEncoding::Mpeg => write!(f, "MPEG"),
            AudioEncoding::MpegLayer3 => write!(f, "MPEG Layer 3"),
            AudioEncoding::MuLaw => write!(f, "MULAW"),
            AudioEncoding::ALaw => write!(f, "ALAW"),
            AudioEncoding::Adpcm => write!(f, "ADPCM"),
            AudioEncoding::Unknown(code) => write!(f, "Unknown ({})", code),
        }
    }
}

/// Decode a `fmt ` chunk.
///
/// The trailing sample-size word is only present for PCM; compressed formats
/// end at block align. The byte rate is recorded on the outcome for the final
/// duration calculation.
pub fn decode(r: &mut FieldReader<'_>, out: &mut ScanOutcome) -> Result<(), RiffError> {
    let encoding = AudioEncoding::from(r.u16_le("fmt-audio-format")?);
    out.push_text("fmt-audio-format", encoding.to_string());

    out.push_uint("fmt-num-channels", r.u16_le("fmt-num-channels")? as u32);
    out.push_uint("fmt-sample-rate", r.u32_le("fmt-sample-rate")?);

    let byte_rate = r.u32_le("fmt-byte-rate")?;
    out.byte_rate = Some(byte_rate);
    out.push_uint("fmt-byte-rate", byte_rate);

    out.push_uint("fmt-block-align", r.u16_le("fmt-block-align")? as u32);

    if encoding.is_pcm() {
        out.push_uint("fmt-sample-size", r.u16_le("fmt-sample-size")? as u32);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::riff::{scan::FieldValue, testing::fmt_content};

    fn decode_fmt(content: &[u8]) -> Result<ScanOutcome, RiffError> {
        let mut out = ScanOutcome::default();
        let mut r = FieldReader::new(content, 20);
        decode(&mut r, &mut out)?;
        Ok(out)
    }

    #[test]
    fn pcm_reports_sample_size() {
        let out = decode_fmt(&fmt_content(1, 2, 44_100, 176_400, 4, Some(16))).unwrap();
        assert_eq!(
            out.field("fmt-audio-format"),
            Some(&FieldValue::Text("PCM".into()))
        );
        assert_eq!(out.field("fmt-sample-size"), Some(&FieldValue::Uint(16)));
        assert_eq!(out.byte_rate, Some(176_400));
    }

    #[test]
    fn mpeg_layer3_omits_sample_size() {
        let out = decode_fmt(&fmt_content(85, 2, 44_100, 16_000, 1, None)).unwrap();
        assert_eq!(
            out.field("fmt-audio-format"),
            Some(&FieldValue::Text("MPEG Layer 3".into()))
        );
        assert_eq!(out.field("fmt-sample-size"), None);
    }

    #[test]
    fn unknown_code_is_labelled_numerically() {
        let out = decode_fmt(&fmt_content(2, 1, 8_000, 4_000, 1, None)).unwrap();
        assert_eq!(
            out.field("fmt-audio-format"),
            Some(&FieldValue::Text("Unknown (2)".into()))
        );
    }

    #[test]
    fn truncated_fmt_chunk_errors() {
        let err = decode_fmt(&[1, 0, 2, 0]).unwrap_err();
        assert!(matches!(err, RiffError::Truncated { .. }));
        assert!(err.to_string().contains("fmt-sample-rate"));
    }

    #[test]
    fn pcm_fmt_missing_sample_size_errors() {
        // 14 bytes: everything up to block align, but PCM wants 16
        let content = &fmt_content(1, 2, 44_100, 176_400, 4, Some(16))[..14];
        let err = decode_fmt(content).unwrap_err();
        assert!(err.to_string().contains("fmt-sample-size"));
    }

    #[test]
    fn encoding_round_trip() {
        for code in [1u16, 80, 85, 257, 258, 259, 7777] {
            assert_eq!(AudioEncoding::const_from(code).as_u16(), code);
        }
    }
}
