//! Command-line entry point for the OpenAPI document splitter.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::{Level, info, warn};

use openapi_splitter_core::split::{DocumentSplitExt, SplitByEntry};
use openapi_splitter_core::{
    read_document, validate_input_file, validate_output_dir, write_split_result,
};

const USAGE: &str = "\
Usage: openapi-splitter -i <input-file> -o <output-directory>

Split an OpenAPI specification file into multiple files.

Options:
  -i, --input <file>   Input OpenAPI YAML file (must exist)
  -o, --output <dir>   Output directory (must exist, be writable, and be empty)
  -q, --quiet          Only log warnings and errors
  -h, --help           Print this help";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            eprintln!();
            eprintln!("{USAGE}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let mut pargs = pico_args::Arguments::from_env();
    if pargs.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return Ok(());
    }

    let args = valid_inputs(&mut pargs)?;
    tracing_subscriber::fmt()
        .with_max_level(if args.quiet { Level::WARN } else { Level::INFO })
        .init();

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        warn!(?remaining, "unused arguments left");
    }

    println!("Input file: {}", args.input.display());
    println!("Output directory: {}", args.output.display());

    let document = read_document(&args.input).context("reading input document")?;
    let result = document.split_with(SplitByEntry::new());
    info!(fragments = result.fragment_count(), "split input document");
    write_split_result(&result, &args.output).context("writing output documents")?;

    Ok(())
}

/// Parses the remaining arguments and checks every path precondition before
/// any document I/O happens.
fn valid_inputs(pargs: &mut pico_args::Arguments) -> Result<AppArgs> {
    let args = AppArgs::parse(pargs)?;
    validate_input_file(&args.input)?;
    validate_output_dir(&args.output)?;
    Ok(args)
}

#[derive(Debug)]
struct AppArgs {
    input: PathBuf,
    output: PathBuf,
    quiet: bool,
}

impl AppArgs {
    fn parse(pargs: &mut pico_args::Arguments) -> Result<Self> {
        let quiet = pargs.contains(["-q", "--quiet"]);

        let input = pargs
            .value_from_os_str(["-i", "--input"], parse_path)
            .context("input file is required")?;

        let output = pargs
            .value_from_os_str(["-o", "--output"], parse_path)
            .context("output directory is required")?;

        Ok(Self {
            input,
            output,
            quiet,
        })
    }
}

fn parse_path(value: &std::ffi::OsStr) -> Result<PathBuf, std::convert::Infallible> {
    Ok(PathBuf::from(value))
}
