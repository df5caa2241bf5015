use crate::error::{Error, Result};
use crate::types::{ConvertConfig, Row};
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const HEADER: [&str; 2] = ["col1", "col2"];

/// Writes a header and key/value rows as two-column CSV
pub struct CsvRowWriter<W: Write> {
    inner: csv::Writer<W>,
    rows_written: usize,
}

impl CsvRowWriter<File> {
    /// Create (or truncate) the file at `path`.
    ///
    /// Parent directories are not created; a missing directory is an error.
    pub fn create<P: AsRef<Path>>(path: P, config: &ConvertConfig) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        Ok(Self::new(file, config))
    }
}

impl<W: Write> CsvRowWriter<W> {
    pub fn new(writer: W, config: &ConvertConfig) -> Self {
        let inner = WriterBuilder::new()
            .has_headers(false)
            .delimiter(config.delimiter)
            .from_writer(writer);

        CsvRowWriter {
            inner,
            rows_written: 0,
        }
    }

    pub fn write_header(&mut self) -> Result<()> {
        self.inner.write_record(HEADER)?;
        Ok(())
    }

    pub fn write_row(&mut self, row: &Row) -> Result<()> {
        self.inner.serialize(row)?;
        self.rows_written += 1;
        Ok(())
    }

    /// Data rows written so far, header excluded
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush buffered rows and hand back the underlying writer
    pub fn finish(self) -> Result<W> {
        self.inner
            .into_inner()
            .map_err(|e| Error::Csv(csv::Error::from(e.into_error())))
    }
}
