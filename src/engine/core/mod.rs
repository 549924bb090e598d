pub mod bitmap;
pub mod column;
pub mod index;
pub mod store;
