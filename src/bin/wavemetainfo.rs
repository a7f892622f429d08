//! Report tool: prints a WAVE file's decoded metadata as `key: value` lines.

use std::{io, path::PathBuf, process};

use clap::Parser;

use wavemeta::{
    DurationStyle, FileBytes, WaveMetaError, WaveMetaResult, logging, scan, write_report,
};

/// Usage errors; runtime failures use [`EXIT_FATAL`] or [`EXIT_TRUNCATED`].
const EXIT_USAGE: i32 = 1;
/// Fatal I/O or malformed-container failures
const EXIT_FATAL: i32 = 2;
/// Short read against a fixed chunk layout
const EXIT_TRUNCATED: i32 = 3;

/// Displays information about a WAVE file in RFC822 style format
#[derive(Debug, Parser)]
#[command(name = "wavemetainfo", version)]
struct Args {
    /// Print chunk traversal diagnostics to stderr
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Report the duration as whole milliseconds instead of seconds
    #[arg(long = "millis")]
    millis: bool,

    /// WAVE file to inspect
    input: PathBuf,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            process::exit(EXIT_USAGE);
        }
    };

    logging::init(args.debug);

    if let Err(err) = run(&args) {
        eprintln!("Error: {err}");
        process::exit(exit_code(&err));
    }
}

fn run(args: &Args) -> WaveMetaResult<()> {
    let bytes = FileBytes::open(&args.input)?;
    let outcome = scan(&bytes)?;

    let style = if args.millis {
        DurationStyle::Milliseconds
    } else {
        DurationStyle::Seconds
    };

    write_report(
        &outcome,
        style,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;
    Ok(())
}

fn exit_code(err: &WaveMetaError) -> i32 {
    if err.is_truncation() {
        EXIT_TRUNCATED
    } else {
        EXIT_FATAL
    }
}
