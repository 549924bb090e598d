pub mod column_store;
pub mod min_max;

pub use column_store::{ColumnStore, StoredColumn};
pub use min_max::{MinMaxPositions, MinMaxScanner};

#[cfg(test)]
mod min_max_test;
