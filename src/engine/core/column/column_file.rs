use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use tracing::debug;

use crate::engine::errors::StorageError;

/// One persisted cell: row position plus its textual value (or the empty-data
/// sentinel for nulls).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRecord {
    pub position: usize,
    pub text: String,
}

impl ColumnRecord {
    pub fn new(position: usize, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
        }
    }
}

/// Shortest round-trip rendering of a real value, always with a fractional
/// part (`25.0`, `24.7`). Both backends render through here.
pub fn render_real(value: f64) -> String {
    let mut buf = ryu::Buffer::new();
    buf.format(value).to_string()
}

const CELL_ESCAPE: char = '\\';

/// Cell text for a value, or `empty_data_symbol` for a null.
///
/// Values that equal the sentinel or start with the escape character get one
/// escape character prepended, so [`decode_cell`] can tell them from nulls.
pub fn encode_cell(value: Option<&str>, empty_data_symbol: &str) -> String {
    match value {
        None => empty_data_symbol.to_string(),
        Some(text) if text == empty_data_symbol || text.starts_with(CELL_ESCAPE) => {
            format!("{}{}", CELL_ESCAPE, text)
        }
        Some(text) => text.to_string(),
    }
}

/// Inverse of [`encode_cell`].
pub fn decode_cell(mut text: String, empty_data_symbol: &str) -> Option<String> {
    if text == empty_data_symbol {
        return None;
    }
    if text.starts_with(CELL_ESCAPE) {
        text.remove(0);
    }
    Some(text)
}

/// Writes `id,<field>` followed by one line per record.
pub fn write_column_file(
    path: &Path,
    field: &str,
    records: &[ColumnRecord],
) -> Result<(), StorageError> {
    let file = File::create(path).map_err(|e| StorageError::from_io(path, e))?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));
    writer.write_record(["id", field])?;

    let mut id = itoa::Buffer::new();
    for record in records {
        writer.write_record([id.format(record.position), record.text.as_str()])?;
    }
    writer.flush().map_err(|e| StorageError::from_io(path, e))?;

    debug!(target: "col_db::storage", field = %field, rows = records.len(), path = %path.display(), "Wrote column file");
    Ok(())
}

/// Reads a column file back into value texts indexed by position.
///
/// Records must be dense and in position order; anything else means the file
/// was not produced by [`write_column_file`].
pub fn read_column_file(path: &Path) -> Result<Vec<String>, StorageError> {
    let file = File::open(path).map_err(|e| StorageError::from_io(path, e))?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let mut texts = Vec::new();
    for (expected, row) in reader.records().enumerate() {
        let row = row?;
        if row.len() != 2 {
            return Err(StorageError::corrupt(
                path,
                format!("record {} has {} fields", expected, row.len()),
            ));
        }
        let id: usize = row[0].parse().map_err(|_| {
            StorageError::corrupt(path, format!("record {} has non-numeric id", expected))
        })?;
        if id != expected {
            return Err(StorageError::corrupt(
                path,
                format!("record id {} found at position {}", id, expected),
            ));
        }
        texts.push(row[1].to_string());
    }
    Ok(texts)
}
