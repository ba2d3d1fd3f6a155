//! Stage 2 CLI: decode fixed-layout vocabulary records to tab-separated
//! output.
//!
//! Usage:
//!   vocab-decode <records.txt>
//!   vocab-decode <records.txt> -o <decoded.tsv> --on-error skip
//!
//! If no output file is specified, writes to stdout.

use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::process;
use vocab_pipe::{ErrorPolicy, decode_stream};

/// Decode `[8-char hex][base64][NUL base64]` records into
/// `field2 TAB field3 TAB decimal-id` lines.
#[derive(Parser)]
#[command(name = "vocab-decode")]
struct Cli {
    /// Input records file, one record per line
    input: Option<String>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// What to do with a malformed record
    #[arg(long, value_enum, default_value = "abort")]
    on_error: ErrorPolicy,

    /// Show record counts on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let Some(input) = cli.input else {
        println!("Please specify input filename");
        process::exit(1);
    };

    let file = match File::open(&input) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error reading input file '{input}': {e}");
            process::exit(1);
        }
    };
    let reader = BufReader::new(file);

    let result = match &cli.output {
        Some(out_path) => match File::create(out_path) {
            Ok(f) => decode_stream(reader, BufWriter::new(f), cli.on_error),
            Err(e) => {
                eprintln!("Error creating output file '{out_path}': {e}");
                process::exit(1);
            }
        },
        None => decode_stream(reader, BufWriter::new(io::stdout().lock()), cli.on_error),
    };

    match result {
        Ok(summary) => {
            if cli.verbose {
                eprintln!(
                    "Processed {} -> {} records ({} skipped)",
                    summary.lines_read, summary.records_written, summary.records_skipped
                );
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
