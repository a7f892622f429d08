use core::fmt::{Display, Formatter, Result as FmtResult};

use tracing::debug;

use crate::riff::{
    bext, cart,
    chunks::{
        BEXT_CHUNK, CART_CHUNK, ChunkDesc, ChunkId, DATA_CHUNK, DISP_CHUNK, FACT_CHUNK, FMT_CHUNK,
        JUNK_CHUNK, LIST_CHUNK, MEXT_CHUNK,
    },
    error::RiffError,
    fmt, list, misc,
    reader::FieldReader,
    walker::{locate_sub_chunk, read_riff_header},
};

/// One decoded metadata field, in emission order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedField {
    pub name: String,
    pub value: FieldValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Uint(u32),
    /// Zero-padded hexadecimal rendering, e.g. `0x00002c` with 6 digits.
    /// Wide enough for file offsets past 4 GiB.
    Hex { value: u64, digits: usize },
    Text(String),
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            FieldValue::Uint(v) => write!(f, "{}", v),
            FieldValue::Hex { value, digits } => write!(f, "0x{:0width$x}", value, width = digits),
            FieldValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Non-fatal decode diagnostics; traversal continues past all of these
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanWarning {
    UnsupportedListType(ChunkId),
    UnknownDispType(u32),
    UnhandledChunk(ChunkId),
}

impl Display for ScanWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ScanWarning::UnsupportedListType(id) => write!(f, "Unsupported LIST type '{}'", id),
            ScanWarning::UnknownDispType(kind) => write!(f, "Unknown DISP chunk type {}", kind),
            ScanWarning::UnhandledChunk(id) => write!(f, "Unhandled sub-chunk type '{}'", id),
        }
    }
}

/// Location of the raw audio payload inside the byte view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataRegion {
    /// Offset of the first payload byte
    pub offset: usize,
    /// Declared payload length; may overrun the file on malformed input
    pub len: u32,
}

/// Everything discovered during one full traversal.
///
/// Replaces the process-wide accumulator a streaming decoder would carry:
/// byte rate and payload length are recorded as they are observed and read
/// once at the end for the duration calculation. Last writer wins if a
/// malformed file carries more than one `fmt ` or `data` chunk.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub fields: Vec<DecodedField>,
    pub warnings: Vec<ScanWarning>,
    /// Byte rate from the most recent `fmt ` chunk
    pub byte_rate: Option<u32>,
    /// Payload region from the most recent `data` chunk
    pub data: Option<DataRegion>,
}

impl ScanOutcome {
    pub fn push_uint(&mut self, name: impl Into<String>, value: u32) {
        self.fields.push(DecodedField {
            name: name.into(),
            value: FieldValue::Uint(value),
        });
    }

    pub fn push_hex(&mut self, name: impl Into<String>, value: u64, digits: usize) {
        self.fields.push(DecodedField {
            name: name.into(),
            value: FieldValue::Hex { value, digits },
        });
    }

    pub fn push_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push(DecodedField {
            name: name.into(),
            value: FieldValue::Text(value.into()),
        });
    }

    pub fn warn(&mut self, warning: ScanWarning) {
        self.warnings.push(warning);
    }

    /// Lookup by field name; duplicate names return the first occurrence
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| &f.value)
    }

    /// Playback duration derived from payload length and byte rate.
    ///
    /// `None` when no `fmt ` chunk was seen or its byte rate was zero; a
    /// missing `data` chunk counts as a zero-length payload.
    pub fn duration_secs(&self) -> Option<f64> {
        match self.byte_rate {
            Some(rate) if rate > 0 => {
                let len = self.data.map(|d| d.len).unwrap_or(0);
                Some(len as f64 / rate as f64)
            }
            _ => None,
        }
    }
}

/// Walk the whole file and decode every recognized chunk.
pub fn scan(bytes: &[u8]) -> Result<ScanOutcome, RiffError> {
    traverse(bytes, true)
}

/// Walk the file for offset bookkeeping only and report the `data` region.
///
/// Metadata chunks are not decoded, so files with malformed metadata that
/// still carry a sound payload remain extractable.
pub fn locate_data(bytes: &[u8]) -> Result<Option<DataRegion>, RiffError> {
    traverse(bytes, false).map(|outcome| outcome.data)
}

fn traverse(bytes: &[u8], decode_metadata: bool) -> Result<ScanOutcome, RiffError> {
    let mut outcome = ScanOutcome::default();

    // Top-level chunks until the computed next offset passes end-of-file
    let mut offset = 0;
    while offset < bytes.len() {
        let container = read_riff_header(bytes, offset)?;
        let container_end = container.next_offset();

        // Sub-chunks sit after the 4-byte WAVE form tag
        let mut sub = offset + 12;
        while sub < container_end {
            let desc = locate_sub_chunk(bytes, sub)?;
            dispatch(bytes, &desc, decode_metadata, &mut outcome)?;
            sub = desc.next_offset();
        }

        offset = container_end;
    }

    Ok(outcome)
}

fn dispatch(
    bytes: &[u8],
    desc: &ChunkDesc,
    decode_metadata: bool,
    out: &mut ScanOutcome,
) -> Result<(), RiffError> {
    if desc.id == DATA_CHUNK {
        out.data = Some(DataRegion {
            offset: desc.content_start(),
            len: desc.size,
        });
        if decode_metadata {
            out.push_hex("data-offset", desc.content_start() as u64, 6);
            out.push_uint("data-size", desc.size);
        }
        return Ok(());
    }

    if !decode_metadata {
        return Ok(());
    }

    // Content handed to decoders is bounded by the declared size and by what
    // the file actually contains; reads past either end are truncation errors.
    let start = desc.content_start();
    let available = bytes.get(start..).unwrap_or_default();
    let content = &available[..available.len().min(desc.size as usize)];
    let mut reader = FieldReader::new(content, start);

    match desc.id {
        FMT_CHUNK => fmt::decode(&mut reader, out)?,
        BEXT_CHUNK => bext::decode(&mut reader, out)?,
        MEXT_CHUNK => misc::decode_mext(&mut reader, out)?,
        FACT_CHUNK => misc::decode_fact(&mut reader, out)?,
        DISP_CHUNK => misc::decode_disp(&mut reader, desc.size, out)?,
        CART_CHUNK => cart::decode(&mut reader, out)?,
        LIST_CHUNK => list::decode(&mut reader, out)?,
        JUNK_CHUNK => {
            debug!(offset = desc.offset, size = desc.size, "skipping JUNK chunk");
        }
        other => out.warn(ScanWarning::UnhandledChunk(other)),
    }

    Ok(())
}
