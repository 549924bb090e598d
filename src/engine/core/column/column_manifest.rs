use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::errors::{ColumnError, StorageError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Real,
    Text,
    Categorical,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Real => "real",
            ColumnKind::Text => "text",
            ColumnKind::Categorical => "categorical",
        }
    }
}

/// Every persisted column and its kind. Only fields listed here exist on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnManifest {
    pub columns: BTreeMap<String, ColumnKind>,
}

impl ColumnManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, kind: ColumnKind) {
        self.columns.insert(field.into(), kind);
    }

    pub fn kind_of(&self, field: &str) -> Result<ColumnKind, ColumnError> {
        self.columns
            .get(field)
            .copied()
            .ok_or_else(|| ColumnError::UnknownField(field.to_string()))
    }

    /// Fails unless `field` is listed with kind `expected`.
    pub fn expect_kind(&self, field: &str, expected: ColumnKind) -> Result<(), ColumnError> {
        let found = self.kind_of(field)?;
        if found != expected {
            return Err(ColumnError::TypeMismatch {
                field: field.to_string(),
                expected: expected.as_str(),
                found: found.as_str(),
            });
        }
        Ok(())
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.keys().map(String::as_str)
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
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| StorageError::corrupt(path, e.to_string()))
    }
}
