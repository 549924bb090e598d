use std::collections::HashMap;

use tracing::{debug, info};

use crate::engine::core::bitmap::{Bitmap, intersect_all};
use crate::engine::core::column::CategoricalColumn;
use crate::engine::core::index::CategoricalBitmapIndex;
use crate::engine::core::store::ColumnStore;
use crate::engine::errors::QueryError;
use crate::engine::query::QueryPredicates;

/// Owns one bitmap index per categorical field and answers conjunctive
/// equality queries against them.
#[derive(Debug, Default, Clone)]
pub struct IndexManager {
    indexes: HashMap<String, CategoricalBitmapIndex<String>>,
}

impl IndexManager {
    pub fn new() -> Self {
        Self {
            indexes: HashMap::new(),
        }
    }

    /// Indexes every categorical column of `store`.
    pub fn from_store(store: &ColumnStore) -> Self {
        let mut manager = Self::new();
        manager.build_all(store);
        manager
    }

    /// Builds (or rebuilds, replacing) the index for `field`.
    pub fn build_index(&mut self, field: &str, column: &CategoricalColumn<String>) {
        let index = CategoricalBitmapIndex::build(column);
        debug!(
            target: "col_db::index",
            field = %field,
            categories = index.len(),
            rows = column.len(),
            "Built bitmap index"
        );
        self.indexes.insert(field.to_string(), index);
    }

    pub fn build_all(&mut self, store: &ColumnStore) {
        for (field, column) in store.categorical_columns() {
            self.build_index(field, column);
        }
        info!(target: "col_db::index", fields = self.indexes.len(), "Bitmap indexes ready");
    }

    pub fn index(&self, field: &str) -> Option<&CategoricalBitmapIndex<String>> {
        self.indexes.get(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> + '_ {
        self.indexes.keys().map(String::as_str)
    }

    /// Bitmap for `category` in `field`; `Ok(None)` if the category was never seen.
    pub fn bitmap_for(&self, field: &str, category: &str) -> Result<Option<&Bitmap>, QueryError> {
        let index = self
            .indexes
            .get(field)
            .ok_or_else(|| QueryError::UnknownIndex(field.to_string()))?;
        Ok(index.bitmap_for(category))
    }

    /// Ascending positions satisfying every predicate.
    ///
    /// All fields are resolved before any category is looked up, so an unknown
    /// field is always an error no matter where it sits among the terms. An
    /// unseen category then yields an empty result. No terms selects nothing.
    pub fn evaluate(&self, predicates: &QueryPredicates) -> Result<Vec<usize>, QueryError> {
        let mut resolved = Vec::with_capacity(predicates.len());
        for (field, category) in predicates.iter() {
            let index = self
                .indexes
                .get(field)
                .ok_or_else(|| QueryError::UnknownIndex(field.to_string()))?;
            resolved.push((index, category));
        }

        let mut bitmaps = Vec::with_capacity(resolved.len());
        for (index, category) in resolved {
            match index.bitmap_for(category) {
                Some(bitmap) => bitmaps.push(bitmap),
                None => {
                    debug!(
                        target: "col_db::query",
                        field = %index.field(),
                        category = %category,
                        "Category not indexed, query matches nothing"
                    );
                    return Ok(Vec::new());
                }
            }
        }

        let positions = intersect_all(bitmaps).to_positions();
        debug!(
            target: "col_db::query",
            predicates = %predicates,
            matched = positions.len(),
            "Predicates evaluated in memory"
        );
        Ok(positions)
    }

    /// `(category, bitmap bytes)` for every category of `field`, sorted by
    /// category. `None` if `field` has no index.
    pub fn serialise_index(&self, field: &str) -> Option<Vec<(String, Vec<u8>)>> {
        let index = self.indexes.get(field)?;
        let mut out: Vec<(String, Vec<u8>)> = index
            .iter()
            .map(|(category, bitmap)| (category.clone(), bitmap.to_bytes()))
            .collect();
        out.sort_by(|a, b| a.0.cmp(&b.0));
        Some(out)
    }
}
