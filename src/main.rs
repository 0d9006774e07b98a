//! datanorm CLI - parse tabular files into normalized JSON rows

use clap::Parser;
use datanorm::FileParser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Parse CSV, Excel, JSON, or delimited text files into normalized rows.
///
/// Each file is parsed into `{"filename","fileType","rows"}` JSON with
/// date-shaped string values rewritten to YYYY-MM-DD.
#[derive(Parser, Debug)]
#[command(name = "datanorm")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file(s) to parse
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Skip date normalization and emit rows exactly as parsed
    #[arg(long)]
    raw: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut parser = FileParser::new();
    parser.normalize_dates(!args.raw);

    let mut exit_code = ExitCode::SUCCESS;

    for file in &args.files {
        if let Err(e) = parse_file(&parser, file, args.pretty) {
            eprintln!("Error processing {}: {}", file.display(), e);
            exit_code = ExitCode::FAILURE;
        }
    }

    exit_code
}

fn parse_file(
    parser: &FileParser,
    path: &PathBuf,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = parser.parse_path(path)?;

    let output = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{output}");

    Ok(())
}
