pub mod core;
pub mod errors;
pub mod query;

pub use errors::*;
