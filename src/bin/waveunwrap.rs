//! Extraction tool: writes a WAVE file's raw audio payload to a new file.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
    process,
};

use clap::Parser;

use wavemeta::{FileBytes, WaveMetaError, WaveMetaResult, copy_data, locate_data, logging};

const EXIT_USAGE: i32 = 1;
const EXIT_FATAL: i32 = 2;
const EXIT_TRUNCATED: i32 = 3;

/// Extracts the raw audio data from a WAVE file
#[derive(Debug, Parser)]
#[command(name = "waveunwrap", version)]
struct Args {
    /// Print chunk traversal diagnostics to stderr
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// WAVE file to read
    input: PathBuf,

    /// Destination for the raw payload bytes
    output: PathBuf,
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
    let region = locate_data(&bytes)?;

    // The output file is created even when the input carries no data chunk,
    // leaving an empty file behind.
    let mut sink = BufWriter::new(File::create(&args.output)?);
    if let Some(region) = region {
        copy_data(&bytes, &region, &mut sink)?;
    }

    sink.flush()?;
    Ok(())
}

fn exit_code(err: &WaveMetaError) -> i32 {
    if err.is_truncation() {
        EXIT_TRUNCATED
    } else {
        EXIT_FATAL
    }
}
