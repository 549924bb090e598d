use std::collections::HashSet;
use std::hash::Hash;

use crate::engine::core::column::ColumnVector;
use crate::engine::errors::ColumnError;

/// Column of low-cardinality values that also remembers every distinct
/// non-null value it has seen. The category set only ever grows.
#[derive(Debug, Clone)]
pub struct CategoricalColumn<T> {
    vector: ColumnVector<T>,
    categories: HashSet<T>,
}

impl<T: Clone + Default + Eq + Hash> CategoricalColumn<T> {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            vector: ColumnVector::new(field),
            categories: HashSet::new(),
        }
    }

    pub fn field(&self) -> &str {
        self.vector.field()
    }

    pub fn append(&mut self, value: Option<T>) {
        if let Some(v) = &value {
            if !self.categories.contains(v) {
                self.categories.insert(v.clone());
            }
        }
        self.vector.append(value);
    }

    pub fn categories(&self) -> &HashSet<T> {
        &self.categories
    }

    pub fn get(&self, position: usize) -> Result<&T, ColumnError> {
        self.vector.get(position)
    }

    pub fn is_null(&self, position: usize) -> Result<bool, ColumnError> {
        self.vector.is_null(position)
    }

    pub fn len(&self) -> usize {
        self.vector.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vector.is_empty()
    }

    pub fn null_count(&self) -> usize {
        self.vector.null_count()
    }

    pub fn as_vector(&self) -> &ColumnVector<T> {
        &self.vector
    }
}
