use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::engine::errors::StorageError;
use crate::engine::query::ResultRow;

pub const HEADER: [&str; 4] = ["Date", "Station", "Category", "Value"];

/// Writes scan results as `Date,Station,Category,Value` CSV.
pub struct ResultWriter<W: Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl ResultWriter<File> {
    /// Truncates `path` and writes the header.
    pub fn create(path: &Path) -> Result<Self, StorageError> {
        let file = File::create(path).map_err(|e| StorageError::from_io(path, e))?;
        Self::new(file)
    }
}

impl<W: Write> ResultWriter<W> {
    pub fn new(inner: W) -> Result<Self, StorageError> {
        let mut writer = csv::Writer::from_writer(inner);
        writer.write_record(HEADER)?;
        Ok(Self { writer, rows: 0 })
    }

    pub fn write_rows(&mut self, rows: &[ResultRow]) -> Result<(), StorageError> {
        for row in rows {
            self.writer.write_record([
                row.date.as_str(),
                row.group_key.as_str(),
                row.category.as_str(),
                row.value.as_str(),
            ])?;
        }
        self.rows += rows.len();
        Ok(())
    }

    /// Flushes and hands back the underlying writer.
    pub fn finish(self) -> Result<W, StorageError> {
        let rows = self.rows;
        let inner = self
            .writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))?;
        info!(target: "col_db::output", rows, "Scan results written");
        Ok(inner)
    }
}
