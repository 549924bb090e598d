pub mod categorical_index;
pub mod index_file;
pub mod index_manager;

pub use categorical_index::CategoricalBitmapIndex;
pub use index_file::{BitmapFile, CategoryCatalog};
pub use index_manager::IndexManager;
