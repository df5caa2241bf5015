//! json2csv: Write a JSON object out as a two-column CSV
//!
//! Usage:
//!   # Read input.json, write output.csv
//!   json2csv
//!
//!   # Explicit paths
//!   json2csv settings.json settings.csv
//!
//!   # Semicolon-separated output, with progress logs
//!   RUST_LOG=info json2csv data.json data.csv --delimiter ';'

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::Parser;
use json2csv::{convert_file, ConvertConfig};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "json2csv")]
#[command(about = "Write a JSON object as col1,col2 CSV rows", long_about = None)]
struct Args {
    /// Input JSON file (default: input.json)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output CSV file, overwritten if present (default: output.csv)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Single ASCII character separating the two columns (default: ",").
    /// Quotes and line breaks are rejected.
    #[arg(long, value_parser = parse_delimiter)]
    delimiter: Option<u8>,
}

fn parse_delimiter(s: &str) -> std::result::Result<u8, String> {
    match s.as_bytes() {
        [b'"' | b'\n' | b'\r'] => Err(format!(
            "delimiter cannot be a quote or line break, got {:?}",
            s
        )),
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(format!("delimiter must be one ASCII character, got {:?}", s)),
    }
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = ConvertConfig::default();
    if let Some(input) = args.input {
        config.input_path = input;
    }
    if let Some(output) = args.output {
        config.output_path = output;
    }
    if let Some(delimiter) = args.delimiter {
        config.delimiter = delimiter;
    }

    convert_file(&config.input_path, &config.output_path, &config).with_context(|| {
        format!(
            "Failed to convert {} to {}",
            config.input_path.display(),
            config.output_path.display()
        )
    })?;

    Ok(())
}
