use crate::riff::{
    error::RiffError,
    list::normalize_tag,
    reader::{FieldReader, fixed_text},
    scan::ScanOutcome,
};

/// Fixed-width string fields of the AES46-2002 cart chunk, in layout order
const STRING_FIELDS: [(&str, usize); 15] = [
    ("cart-version", 4),
    ("cart-title", 64),
    ("cart-artist", 64),
    ("cart-cut-id", 64),
    ("cart-client-id", 64),
    ("cart-category", 64),
    ("cart-classification", 64),
    ("cart-out-cue", 64),
    ("cart-start-date", 10),
    ("cart-start-time", 8),
    ("cart-end-date", 10),
    ("cart-end-time", 8),
    ("cart-producer-app-id", 64),
    ("cart-producer-app-version", 64),
    ("cart-user-defined", 64),
];

/// Number of post timer slots; the layout always carries all of them
const TIMER_SLOTS: usize = 8;

/// Decode a `cart` chunk.
///
/// After the string block and the level reference come exactly eight timer
/// slots. A slot whose usage tag is all zero bytes is vacant and emits no
/// field; a single trailing space in the usage tag is stripped before the
/// tag is folded into the field name.
pub fn decode(r: &mut FieldReader<'_>, out: &mut ScanOutcome) -> Result<(), RiffError> {
    for (name, width) in STRING_FIELDS {
        let raw = r.take(width, name)?;
        out.push_text(name, fixed_text(raw));
    }

    out.push_uint("cart-level-reference", r.u32_le("cart-level-reference")?);

    for _ in 0..TIMER_SLOTS {
        let usage = r.tag("cart-timer-usage")?;
        let value = r.u32_le("cart-timer-value")?;

        if usage == [0u8; 4] {
            continue;
        }

        let tag = if usage[3] == b' ' {
            &usage[..3]
        } else {
            &usage[..]
        };
        out.push_uint(format!("cart-timer-{}", normalize_tag(tag)), value);
    }

    Ok(())
}
