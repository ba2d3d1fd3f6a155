//! Stage 1 CLI: split a vocabulary data file into space-delimited tokens.
//!
//! Usage:
//!   vocab-tokenize <input.data>
//!   vocab-tokenize <input.data> -o <tokens.txt>
//!
//! If no output file is specified, writes to stdout.

use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::process;
use vocab_pipe::tokenize;

/// Split a byte stream into tokens on the ASCII space byte, one per line.
#[derive(Parser)]
#[command(name = "vocab-tokenize")]
struct Cli {
    /// Input data file
    input: Option<String>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Show the token count on stderr
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
            Ok(f) => tokenize(reader, BufWriter::new(f)),
            Err(e) => {
                eprintln!("Error creating output file '{out_path}': {e}");
                process::exit(1);
            }
        },
        None => tokenize(reader, BufWriter::new(io::stdout().lock())),
    };

    match result {
        Ok(count) => {
            if cli.verbose {
                eprintln!("Emitted {count} tokens");
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
