use std::io::{self, Write};

use crate::riff::scan::ScanOutcome;

/// How the final `wave-duration` line is rendered.
///
/// Different tool variants want different units; the sink is parameterized
/// rather than hard-coding one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurationStyle {
    /// Seconds as a fixed-precision float, e.g. `0.000045`
    #[default]
    Seconds,
    /// Whole milliseconds, rounded
    Milliseconds,
}

/// Emit the report: one `name: value` line per decoded field in decode order,
/// warnings to the diagnostic stream, then the derived duration.
///
/// When no non-zero byte rate was observed the duration line reads
/// `wave-duration: unknown` instead of risking a division by zero.
pub fn write_report<W: Write, D: Write>(
    outcome: &ScanOutcome,
    style: DurationStyle,
    out: &mut W,
    diag: &mut D,
) -> io::Result<()> {
    for field in &outcome.fields {
        writeln!(out, "{}: {}", field.name, field.value)?;
    }

    for warning in &outcome.warnings {
        writeln!(diag, "Warning: {}.", warning)?;
    }

    match outcome.duration_secs() {
        Some(secs) => match style {
            DurationStyle::Seconds => writeln!(out, "wave-duration: {:.6}", secs)?,
            DurationStyle::Milliseconds => {
                writeln!(out, "wave-duration: {}", (secs * 1000.0).round() as u64)?
            }
        },
        None => writeln!(out, "wave-duration: unknown")?,
    }

    Ok(())
}
