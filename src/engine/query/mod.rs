pub mod backend;
pub mod disk_backend;
pub mod memory_backend;
pub mod predicate;
pub mod result;

pub use crate::engine::core::store::MinMaxPositions;
pub use backend::QueryBackend;
pub use disk_backend::DiskDatabase;
pub use memory_backend::MemoryDatabase;
pub use predicate::QueryPredicates;
pub use result::{ResultRow, RowFields, min_max_rows};

#[cfg(test)]
mod result_test;
