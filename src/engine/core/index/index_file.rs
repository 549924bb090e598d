use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::core::bitmap::Bitmap;
use crate::engine::errors::StorageError;
use crate::shared::storage_header::{FileKind, MagicFile};

/// On-disk form of one category's bitmap: storage header, then the raw
/// little-endian bitmap bytes.
pub struct BitmapFile;

impl MagicFile for BitmapFile {
    const MAGIC: [u8; 8] = FileKind::CategoryBitmap.magic();
}

impl BitmapFile {
    pub fn save(path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
        let io = |e| StorageError::from_io(path, e);
        let mut w = BufWriter::new(File::create(path).map_err(io)?);
        Self::write_header(&mut w).map_err(io)?;
        w.write_all(bytes).map_err(io)?;
        w.flush().map_err(io)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Bitmap, StorageError> {
        let data = std::fs::read(path).map_err(|e| StorageError::from_io(path, e))?;
        let mut cursor = &data[..];
        Self::read_and_validate_header(&mut cursor)
            .map_err(|e| StorageError::corrupt(path, e.to_string()))?;
        Ok(Bitmap::from_bytes(cursor))
    }
}

/// Lists the categories persisted for one field, so a reader can tell an
/// unseen category from a lost bitmap file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCatalog {
    pub field: String,
    pub categories: BTreeSet<String>,
}

impl CategoryCatalog {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            categories: BTreeSet::new(),
        }
    }

    pub fn contains(&self, category: &str) -> bool {
        self.categories.contains(category)
    }

    pub fn save(&self, path: &Path) -> Result<(), StorageError> {
        let file = File::create(path).map_err(|e| StorageError::from_io(path, e))?;
        let mut w = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut w, self)?;
        w.flush().map_err(|e| StorageError::from_io(path, e))?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, StorageError> {
        let file = File::open(path).map_err(|e| StorageError::from_io(path, e))?;
        let catalog: Self = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| StorageError::corrupt(path, e.to_string()))?;
        Ok(catalog)
    }
}
