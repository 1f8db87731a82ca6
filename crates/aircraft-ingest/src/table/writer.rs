use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{Terminator, Writer, WriterBuilder};
use serde::Serialize;
use tracing::debug;

use crate::error::{IngestError, Result};

/// A headerless CSV file being written.
///
/// Fields are comma separated and quoted only when necessary; records end
/// with CRLF.
pub struct CsvOutput {
    path: PathBuf,
    writer: Writer<File>,
    rows: usize,
}

impl CsvOutput {
    pub fn create(path: &Path) -> Result<Self> {
        let writer = WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .terminator(Terminator::CRLF)
            .from_path(path)
            .map_err(|e| IngestError::csv_write(path, &e))?;
        Ok(Self {
            path: path.to_path_buf(),
            writer,
            rows: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Write one raw row.
    pub fn write_row<I, T>(&mut self, row: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        self.writer
            .write_record(row)
            .map_err(|e| IngestError::csv_write(&self.path, &e))?;
        self.rows += 1;
        Ok(())
    }

    /// Write one typed record, fields in declaration order.
    pub fn write_record<S: Serialize>(&mut self, record: &S) -> Result<()> {
        self.writer
            .serialize(record)
            .map_err(|e| IngestError::csv_write(&self.path, &e))?;
        self.rows += 1;
        Ok(())
    }

    /// Flush and close the file, returning the number of rows written.
    pub fn finish(mut self) -> Result<usize> {
        self.writer
            .flush()
            .map_err(|e| IngestError::write(&self.path, e))?;
        debug!(path = %self.path.display(), rows = self.rows, "wrote csv");
        Ok(self.rows)
    }
}

/// Write raw rows to a new headerless CSV file.
pub fn write_rows<I, R>(path: &Path, rows: I) -> Result<usize>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[String]>,
{
    let mut output = CsvOutput::create(path)?;
    for row in rows {
        output.write_row(row.as_ref())?;
    }
    output.finish()
}

/// Write typed records to a new headerless CSV file.
pub fn write_records<S: Serialize>(path: &Path, records: &[S]) -> Result<usize> {
    let mut output = CsvOutput::create(path)?;
    for record in records {
        output.write_record(record)?;
    }
    output.finish()
}
