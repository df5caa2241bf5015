use serde::Serialize;
use std::path::PathBuf;

/// One CSV data row: a top-level key and its stringified value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub key: String,
    pub value: String,
}

impl Row {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Row {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Configuration for the conversion
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Field delimiter (ASCII)
    pub delimiter: u8,

    /// Where the JSON object is read from
    pub input_path: PathBuf,

    /// Where the CSV is written to, overwritten if present
    pub output_path: PathBuf,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        ConvertConfig {
            delimiter: b',',
            input_path: PathBuf::from("input.json"),
            output_path: PathBuf::from("output.csv"),
        }
    }
}
