use indexmap::IndexMap;
use tracing::debug;

use crate::engine::core::column::{
    CategoricalColumn, ColumnKind, ColumnRecord, ColumnVector, encode_cell, render_real,
};
use crate::engine::core::store::{MinMaxPositions, MinMaxScanner};
use crate::engine::errors::ColumnError;

/// A named column of one of the supported kinds.
#[derive(Debug, Clone)]
pub enum StoredColumn {
    Real(ColumnVector<f64>),
    Text(ColumnVector<String>),
    Categorical(CategoricalColumn<String>),
}

impl StoredColumn {
    pub fn kind(&self) -> ColumnKind {
        match self {
            StoredColumn::Real(_) => ColumnKind::Real,
            StoredColumn::Text(_) => ColumnKind::Text,
            StoredColumn::Categorical(_) => ColumnKind::Categorical,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            StoredColumn::Real(c) => c.len(),
            StoredColumn::Text(c) => c.len(),
            StoredColumn::Categorical(c) => c.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(position, text)` records in position order, encoded with
    /// [`encode_cell`] so nulls become `empty_data_symbol`.
    pub fn to_records(&self, empty_data_symbol: &str) -> Vec<ColumnRecord> {
        let text_records = |c: &ColumnVector<String>| -> Vec<ColumnRecord> {
            c.iter()
                .map(|(i, v)| ColumnRecord::new(i, encode_cell(v.map(String::as_str), empty_data_symbol)))
                .collect()
        };
        match self {
            StoredColumn::Real(c) => c
                .iter()
                .map(|(i, v)| {
                    let text = v.map(|v| render_real(*v));
                    ColumnRecord::new(i, encode_cell(text.as_deref(), empty_data_symbol))
                })
                .collect(),
            StoredColumn::Text(c) => text_records(c),
            StoredColumn::Categorical(c) => text_records(c.as_vector()),
        }
    }
}

/// Owns every column of a dataset, keyed by field name in definition order.
#[derive(Debug, Default, Clone)]
pub struct ColumnStore {
    columns: IndexMap<String, StoredColumn>,
}

impl ColumnStore {
    pub fn new() -> Self {
        Self {
            columns: IndexMap::new(),
        }
    }

    pub fn define_real(&mut self, field: &str) -> Result<(), ColumnError> {
        self.define(field, StoredColumn::Real(ColumnVector::new(field)))
    }

    pub fn define_text(&mut self, field: &str) -> Result<(), ColumnError> {
        self.define(field, StoredColumn::Text(ColumnVector::new(field)))
    }

    pub fn define_categorical(&mut self, field: &str) -> Result<(), ColumnError> {
        self.define(
            field,
            StoredColumn::Categorical(CategoricalColumn::new(field)),
        )
    }

    fn define(&mut self, field: &str, column: StoredColumn) -> Result<(), ColumnError> {
        if self.columns.contains_key(field) {
            return Err(ColumnError::DuplicateField(field.to_string()));
        }
        debug!(target: "col_db::store", field = %field, kind = column.kind().as_str(), "Defined column");
        self.columns.insert(field.to_string(), column);
        Ok(())
    }

    pub fn append_real(&mut self, field: &str, value: Option<f64>) -> Result<(), ColumnError> {
        match self.column_mut(field)? {
            StoredColumn::Real(c) => {
                c.append(value);
                Ok(())
            }
            other => Err(mismatch(field, ColumnKind::Real, other)),
        }
    }

    pub fn append_text(&mut self, field: &str, value: Option<String>) -> Result<(), ColumnError> {
        match self.column_mut(field)? {
            StoredColumn::Text(c) => {
                c.append(value);
                Ok(())
            }
            other => Err(mismatch(field, ColumnKind::Text, other)),
        }
    }

    pub fn append_category(
        &mut self,
        field: &str,
        value: Option<String>,
    ) -> Result<(), ColumnError> {
        match self.column_mut(field)? {
            StoredColumn::Categorical(c) => {
                c.append(value);
                Ok(())
            }
            other => Err(mismatch(field, ColumnKind::Categorical, other)),
        }
    }

    pub fn column(&self, field: &str) -> Result<&StoredColumn, ColumnError> {
        self.columns
            .get(field)
            .ok_or_else(|| ColumnError::UnknownField(field.to_string()))
    }

    fn column_mut(&mut self, field: &str) -> Result<&mut StoredColumn, ColumnError> {
        self.columns
            .get_mut(field)
            .ok_or_else(|| ColumnError::UnknownField(field.to_string()))
    }

    pub fn real_column(&self, field: &str) -> Result<&ColumnVector<f64>, ColumnError> {
        match self.column(field)? {
            StoredColumn::Real(c) => Ok(c),
            other => Err(mismatch(field, ColumnKind::Real, other)),
        }
    }

    pub fn text_column(&self, field: &str) -> Result<&ColumnVector<String>, ColumnError> {
        match self.column(field)? {
            StoredColumn::Text(c) => Ok(c),
            other => Err(mismatch(field, ColumnKind::Text, other)),
        }
    }

    pub fn categorical_column(
        &self,
        field: &str,
    ) -> Result<&CategoricalColumn<String>, ColumnError> {
        match self.column(field)? {
            StoredColumn::Categorical(c) => Ok(c),
            other => Err(mismatch(field, ColumnKind::Categorical, other)),
        }
    }

    pub fn real_at(&self, field: &str, position: usize) -> Result<Option<f64>, ColumnError> {
        Ok(self.real_column(field)?.value_at(position)?.copied())
    }

    /// Value text at `position` for any column kind; nulls render as `None`.
    pub fn text_at(&self, field: &str, position: usize) -> Result<Option<String>, ColumnError> {
        let text = match self.column(field)? {
            StoredColumn::Real(c) => c.value_at(position)?.map(|v| render_real(*v)),
            StoredColumn::Text(c) => c.value_at(position)?.cloned(),
            StoredColumn::Categorical(c) => c.as_vector().value_at(position)?.cloned(),
        };
        Ok(text)
    }

    pub fn categorical_columns(
        &self,
    ) -> impl Iterator<Item = (&str, &CategoricalColumn<String>)> + '_ {
        self.columns.iter().filter_map(|(name, col)| match col {
            StoredColumn::Categorical(c) => Some((name.as_str(), c)),
            _ => None,
        })
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &StoredColumn)> + '_ {
        self.columns.iter().map(|(name, col)| (name.as_str(), col))
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.keys().map(String::as_str)
    }

    /// Rows ingested so far, taken from the longest column.
    pub fn row_count(&self) -> usize {
        self.columns.values().map(StoredColumn::len).max().unwrap_or(0)
    }

    /// Positions among `positions` holding the minimum and maximum non-null
    /// value of the real column `field`.
    pub fn min_max_among(
        &self,
        field: &str,
        positions: &[usize],
    ) -> Result<MinMaxPositions, ColumnError> {
        if positions.is_empty() {
            return Ok(MinMaxPositions::default());
        }

        let column = self.real_column(field)?;
        let mut scanner = MinMaxScanner::new();
        for &position in positions {
            scanner.observe(position, column.value_at(position)?.copied());
        }

        if tracing::enabled!(tracing::Level::DEBUG) {
            debug!(
                target: "col_db::store",
                field = %field,
                candidates = positions.len(),
                extremes = ?scanner.extremes(),
                "Min/max scan finished"
            );
        }
        Ok(scanner.finish())
    }
}

fn mismatch(field: &str, expected: ColumnKind, found: &StoredColumn) -> ColumnError {
    ColumnError::TypeMismatch {
        field: field.to_string(),
        expected: expected.as_str(),
        found: found.kind().as_str(),
    }
}
