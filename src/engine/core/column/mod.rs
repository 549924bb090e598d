pub mod categorical_column;
pub mod column_file;
pub mod column_manifest;
pub mod column_vector;

pub use categorical_column::CategoricalColumn;
pub use column_file::{
    ColumnRecord, decode_cell, encode_cell, read_column_file, render_real, write_column_file,
};
pub use column_manifest::{ColumnKind, ColumnManifest};
pub use column_vector::ColumnVector;

#[cfg(test)]
mod categorical_column_test;
#[cfg(test)]
mod column_vector_test;
