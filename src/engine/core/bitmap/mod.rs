pub mod bitmap;

pub use bitmap::{Bitmap, intersect_all};
