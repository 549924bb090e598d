use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::engine::core::bitmap::{Bitmap, intersect_all};
use crate::engine::core::column::{
    ColumnKind, ColumnManifest, decode_cell, read_column_file, write_column_file,
};
use crate::engine::core::index::{BitmapFile, CategoryCatalog, IndexManager};
use crate::engine::core::store::{ColumnStore, MinMaxScanner};
use crate::engine::errors::{ColumnError, QueryError, StorageError};
use crate::engine::query::{MinMaxPositions, QueryBackend, QueryPredicates};
use crate::shared::path::StorageLayout;

/// Answers queries from persisted column and index files.
///
/// Holds no column or index state: every query reads exactly the files it
/// needs and drops them before returning.
#[derive(Debug, Clone)]
pub struct DiskDatabase {
    layout: StorageLayout,
    empty_data_symbol: String,
    parallel_reads: bool,
}

impl DiskDatabase {
    pub fn new(layout: StorageLayout, empty_data_symbol: impl Into<String>) -> Self {
        Self {
            layout,
            empty_data_symbol: empty_data_symbol.into(),
            parallel_reads: false,
        }
    }

    /// Read the bitmaps of one query on the rayon pool.
    pub fn with_parallel_reads(mut self, enabled: bool) -> Self {
        self.parallel_reads = enabled;
        self
    }

    pub fn layout(&self) -> &StorageLayout {
        &self.layout
    }

    /// Writes every column and every index of the given in-memory state.
    pub fn persist(&self, store: &ColumnStore, indexes: &IndexManager) -> Result<(), StorageError> {
        self.persist_columns(store)?;
        self.persist_indexes(indexes)?;
        info!(
            target: "col_db::storage",
            column_dir = %self.layout.column_dir.display(),
            index_dir = %self.layout.index_dir.display(),
            "Persisted columns and indexes"
        );
        Ok(())
    }

    /// One `id,<field>` file per column plus the column manifest. Files of
    /// columns listed by a previous manifest but absent now are removed.
    pub fn persist_columns(&self, store: &ColumnStore) -> Result<(), StorageError> {
        create_dir(&self.layout.column_dir)?;
        let manifest_path = self.layout.column_manifest_path();
        let previous = match ColumnManifest::load(&manifest_path) {
            Ok(previous) => Some(previous),
            Err(StorageError::MissingResource(_)) => None,
            Err(e) => return Err(e),
        };

        let mut manifest = ColumnManifest::new();
        for (field, column) in store.columns() {
            let records = column.to_records(&self.empty_data_symbol);
            write_column_file(&self.layout.column_path(field), field, &records)?;
            manifest.insert(field, column.kind());
        }

        if let Some(previous) = previous {
            for stale in previous.fields().filter(|f| store.column(f).is_err()) {
                let path = self.layout.column_path(stale);
                match fs::remove_file(&path) {
                    Ok(()) => debug!(target: "col_db::storage", field = %stale, "Removed stale column file"),
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                    Err(e) => return Err(StorageError::from_io(&path, e)),
                }
            }
        }
        manifest.save(&manifest_path)
    }

    /// One bitmap file per (field, category) plus a catalog per field.
    /// Anything previously stored for a field is replaced.
    pub fn persist_indexes(&self, indexes: &IndexManager) -> Result<(), StorageError> {
        let fields: Vec<&str> = indexes.fields().collect();
        for field in fields {
            let Some(entries) = indexes.serialise_index(field) else {
                continue;
            };
            let dir = self.layout.field_index_dir(field);
            if dir.exists() {
                fs::remove_dir_all(&dir).map_err(|e| StorageError::from_io(&dir, e))?;
            }
            create_dir(&dir)?;

            let mut catalog = CategoryCatalog::new(field);
            for (category, bytes) in &entries {
                BitmapFile::save(&self.layout.bitmap_path(field, category), bytes)?;
                catalog.categories.insert(category.clone());
            }
            catalog.save(&self.layout.catalog_path(field))?;
            debug!(
                target: "col_db::storage",
                field = %field,
                categories = entries.len(),
                "Persisted index"
            );
        }
        Ok(())
    }

    fn load_catalog(&self, field: &str) -> Result<CategoryCatalog, QueryError> {
        let dir = self.layout.field_index_dir(field);
        if !dir.is_dir() {
            return Err(QueryError::UnknownIndex(field.to_string()));
        }
        Ok(CategoryCatalog::load(&self.layout.catalog_path(field))?)
    }

    fn load_bitmaps(&self, paths: &[PathBuf]) -> Result<Vec<Bitmap>, StorageError> {
        if self.parallel_reads {
            paths.par_iter().map(|p| BitmapFile::load(p)).collect()
        } else {
            paths.iter().map(|p| BitmapFile::load(p)).collect()
        }
    }

    /// Decoded values of a listed column, after checking its kind when
    /// `expected` is given.
    fn read_values(
        &self,
        field: &str,
        expected: Option<ColumnKind>,
    ) -> Result<Vec<Option<String>>, QueryError> {
        let manifest = ColumnManifest::load(&self.layout.column_manifest_path())?;
        match expected {
            Some(kind) => manifest.expect_kind(field, kind)?,
            None => {
                manifest.kind_of(field)?;
            }
        }
        let texts = read_column_file(&self.layout.column_path(field))?;
        Ok(texts
            .into_iter()
            .map(|t| decode_cell(t, &self.empty_data_symbol))
            .collect())
    }
}

impl QueryBackend for DiskDatabase {
    fn name(&self) -> &'static str {
        "disk"
    }

    fn evaluate(&self, predicates: &QueryPredicates) -> Result<Vec<usize>, QueryError> {
        let mut catalogs = Vec::with_capacity(predicates.len());
        for (field, category) in predicates.iter() {
            catalogs.push((field, category, self.load_catalog(field)?));
        }

        let mut paths = Vec::with_capacity(catalogs.len());
        for (field, category, catalog) in &catalogs {
            if !catalog.contains(category) {
                debug!(
                    target: "col_db::query",
                    field = %field,
                    category = %category,
                    "Category not persisted, query matches nothing"
                );
                return Ok(Vec::new());
            }
            paths.push(self.layout.bitmap_path(field, category));
        }

        let bitmaps = self.load_bitmaps(&paths)?;
        let positions = intersect_all(&bitmaps).to_positions();
        debug!(
            target: "col_db::query",
            predicates = %predicates,
            files = paths.len(),
            matched = positions.len(),
            "Predicates evaluated from disk"
        );
        Ok(positions)
    }

    fn min_max_among(
        &self,
        field: &str,
        positions: &[usize],
    ) -> Result<MinMaxPositions, QueryError> {
        if positions.is_empty() {
            return Ok(MinMaxPositions::default());
        }

        let path = self.layout.column_path(field);
        let values = self.read_values(field, Some(ColumnKind::Real))?;
        let mut scanner = MinMaxScanner::new();
        for &position in positions {
            let value = values.get(position).ok_or_else(|| ColumnError::OutOfRange {
                field: field.to_string(),
                position,
                len: values.len(),
            })?;
            let number = match value {
                Some(text) => Some(text.parse::<f64>().map_err(|_| {
                    StorageError::corrupt(&path, format!("non-numeric value {:?}", text))
                })?),
                None => None,
            };
            scanner.observe(position, number);
        }
        Ok(scanner.finish())
    }

    fn texts_at(
        &self,
        field: &str,
        positions: &[usize],
    ) -> Result<Vec<Option<String>>, QueryError> {
        if positions.is_empty() {
            return Ok(Vec::new());
        }
        let values = self.read_values(field, None)?;
        positions
            .iter()
            .map(|&position| {
                values.get(position).cloned().ok_or_else(|| {
                    QueryError::from(ColumnError::OutOfRange {
                        field: field.to_string(),
                        position,
                        len: values.len(),
                    })
                })
            })
            .collect()
    }
}

fn create_dir(dir: &Path) -> Result<(), StorageError> {
    fs::create_dir_all(dir).map_err(|e| StorageError::from_io(dir, e))
}
