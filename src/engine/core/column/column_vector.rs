use crate::engine::core::bitmap::Bitmap;
use crate::engine::errors::ColumnError;

/// Append-only column of one value type.
///
/// Position `i` is the `i`-th append. A null keeps its slot: the value slot holds
/// `T::default()` as a placeholder and the validity bit stays unset.
#[derive(Debug, Clone)]
pub struct ColumnVector<T> {
    field: String,
    values: Vec<T>,
    valid: Bitmap,
    null_count: usize,
}

impl<T: Clone + Default> ColumnVector<T> {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            values: Vec::new(),
            valid: Bitmap::new(),
            null_count: 0,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn append(&mut self, value: Option<T>) {
        let position = self.values.len();
        match value {
            Some(v) => {
                self.valid.insert(position);
                self.values.push(v);
            }
            None => {
                self.null_count += 1;
                self.values.push(T::default());
            }
        }
    }

    /// Stored value at `position`. For null slots this is the placeholder,
    /// so check [`is_null`](Self::is_null) first.
    pub fn get(&self, position: usize) -> Result<&T, ColumnError> {
        self.values
            .get(position)
            .ok_or_else(|| self.out_of_range(position))
    }

    pub fn is_null(&self, position: usize) -> Result<bool, ColumnError> {
        if position >= self.values.len() {
            return Err(self.out_of_range(position));
        }
        Ok(!self.valid.contains(position))
    }

    /// `None` for null slots, otherwise the value.
    pub fn value_at(&self, position: usize) -> Result<Option<&T>, ColumnError> {
        if self.is_null(position)? {
            return Ok(None);
        }
        self.get(position).map(Some)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of null appends since creation.
    pub fn null_count(&self) -> usize {
        self.null_count
    }

    pub fn validity(&self) -> &Bitmap {
        &self.valid
    }

    /// `(position, value)` pairs in position order, `None` for nulls.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<&T>)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, v)| (i, self.valid.contains(i).then_some(v)))
    }

    fn out_of_range(&self, position: usize) -> ColumnError {
        ColumnError::OutOfRange {
            field: self.field.clone(),
            position,
            len: self.values.len(),
        }
    }
}
