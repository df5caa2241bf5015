//! # json2csv - flatten a JSON object into a two-column CSV
//!
//! Reads one JSON document whose top level is an object and writes it as
//! CSV: a `col1,col2` header, then one `key,value` row per top-level key in
//! document order. Non-string values are written as compact JSON text.
//!
//! ## Quick Start
//!
//! ```rust
//! use json2csv::{convert, ConvertConfig};
//!
//! # fn main() -> anyhow::Result<()> {
//! let input = br#"{"a": 1, "b": "x"}"#;
//! let mut output = Vec::new();
//!
//! let rows = convert(&input[..], &mut output, &ConvertConfig::default())?;
//!
//! assert_eq!(rows, 2);
//! assert_eq!(String::from_utf8(output)?, "col1,col2\na,1\nb,x\n");
//! # Ok(())
//! # }
//! ```

use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info};

pub mod document;
pub mod error;
pub mod types;
pub mod writer;

pub use document::{stringify, Document};
pub use error::{Error, Result};
pub use types::{ConvertConfig, Row};
pub use writer::CsvRowWriter;

/// Convert the JSON object read from `reader` into CSV written to `writer`.
///
/// Returns the number of data rows (header excluded).
pub fn convert<R: Read, W: Write>(reader: R, writer: W, config: &ConvertConfig) -> Result<usize> {
    let document = Document::from_reader(reader)?;
    write_document(&document, CsvRowWriter::new(writer, config))
}

/// Convert the file at `input` into a CSV file at `output`.
///
/// The input is parsed before `output` is opened, so a parse failure never
/// creates or truncates the destination.
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    config: &ConvertConfig,
) -> Result<usize> {
    let input = input.as_ref();
    let output = output.as_ref();

    let bytes = std::fs::read(input).map_err(|e| Error::io(input, e))?;
    let document = Document::from_slice(&bytes)?;
    debug!(path = %input.display(), keys = document.len(), "parsed input");

    let rows = write_document(&document, CsvRowWriter::create(output, config)?)?;
    info!(path = %output.display(), rows, "wrote CSV");
    Ok(rows)
}

fn write_document<W: Write>(document: &Document, mut writer: CsvRowWriter<W>) -> Result<usize> {
    writer.write_header()?;
    for row in document.rows() {
        writer.write_row(&row)?;
    }
    let rows = writer.rows_written();
    writer.finish()?;
    Ok(rows)
}
