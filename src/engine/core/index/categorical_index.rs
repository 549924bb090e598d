use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use crate::engine::core::bitmap::Bitmap;
use crate::engine::core::column::CategoricalColumn;

/// Category -> positions holding it, for one categorical column.
///
/// Only [`build`](Self::build) creates one, and nothing mutates it afterwards.
/// Null positions appear in no bitmap and bitmaps are pairwise disjoint.
#[derive(Debug, Clone)]
pub struct CategoricalBitmapIndex<T> {
    field: String,
    bitmaps: HashMap<T, Bitmap>,
}

impl<T: Clone + Default + Eq + Hash> CategoricalBitmapIndex<T> {
    pub fn build(column: &CategoricalColumn<T>) -> Self {
        let mut bitmaps: HashMap<T, Bitmap> = column
            .categories()
            .iter()
            .map(|c| (c.clone(), Bitmap::new()))
            .collect();

        for (position, value) in column.as_vector().iter() {
            let Some(value) = value else {
                continue;
            };
            if let Some(bitmap) = bitmaps.get_mut(value) {
                bitmap.insert(position);
            }
        }

        Self {
            field: column.field().to_string(),
            bitmaps,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// `None` when the category was never seen; callers treat that as no match.
    pub fn bitmap_for<Q>(&self, category: &Q) -> Option<&Bitmap>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.bitmaps.get(category)
    }

    pub fn categories(&self) -> impl Iterator<Item = &T> + '_ {
        self.bitmaps.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, &Bitmap)> + '_ {
        self.bitmaps.iter()
    }

    pub fn len(&self) -> usize {
        self.bitmaps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bitmaps.is_empty()
    }
}
