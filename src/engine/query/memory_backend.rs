use tracing::info;

use crate::engine::core::index::IndexManager;
use crate::engine::core::store::ColumnStore;
use crate::engine::errors::QueryError;
use crate::engine::query::{MinMaxPositions, QueryBackend, QueryPredicates};

/// Keeps every column and index resident and answers queries from them.
#[derive(Debug)]
pub struct MemoryDatabase {
    store: ColumnStore,
    indexes: IndexManager,
}

impl MemoryDatabase {
    /// Takes ownership of a fully loaded store and indexes its categorical
    /// columns. Queries are only possible once this returns.
    pub fn new(store: ColumnStore) -> Self {
        let indexes = IndexManager::from_store(&store);
        info!(
            target: "col_db::query",
            rows = store.row_count(),
            "In-memory database ready"
        );
        Self { store, indexes }
    }

    pub fn store(&self) -> &ColumnStore {
        &self.store
    }

    pub fn indexes(&self) -> &IndexManager {
        &self.indexes
    }
}

impl QueryBackend for MemoryDatabase {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn evaluate(&self, predicates: &QueryPredicates) -> Result<Vec<usize>, QueryError> {
        self.indexes.evaluate(predicates)
    }

    fn min_max_among(
        &self,
        field: &str,
        positions: &[usize],
    ) -> Result<MinMaxPositions, QueryError> {
        Ok(self.store.min_max_among(field, positions)?)
    }

    fn texts_at(
        &self,
        field: &str,
        positions: &[usize],
    ) -> Result<Vec<Option<String>>, QueryError> {
        positions
            .iter()
            .map(|&position| self.store.text_at(field, position).map_err(QueryError::from))
            .collect()
    }
}
