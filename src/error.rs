use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while converting a JSON object into CSV rows
#[derive(Debug, Error)]
pub enum Error {
    /// Input is not valid JSON
    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Input is valid JSON but the top level is not an object
    #[error("expected a top-level JSON object, found {found}")]
    NotAnObject { found: &'static str },

    /// Opening, reading or creating a file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing or flushing CSV rows failed
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// True for malformed or non-object input
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse(_) | Error::NotAnObject { .. })
    }

    /// True for failures reading the input or writing the output
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io { .. } | Error::Csv(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
