use crate::error::{GalleryError, Result};
use std::ops::Index;

/// Ordered, fixed-length, non-empty sequence of assets.
///
/// There is no way to add or remove items after construction, so any index in
/// `0..len()` stays valid for the lifetime of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetList<T> {
    items: Box<[T]>,
}

impl<T> AssetList<T> {
    /// Build a list for the gallery called `gallery`.
    ///
    /// # Errors
    ///
    /// [`GalleryError::InvalidConfiguration`] if `items` is empty.
    pub fn new(gallery: &str, items: Vec<T>) -> Result<Self> {
        if items.is_empty() {
            return Err(GalleryError::InvalidConfiguration {
                gallery: gallery.to_string(),
                reason: "asset list must not be empty".to_string(),
            });
        }

        Ok(Self {
            items: items.into_boxed_slice(),
        })
    }

    /// Always at least 1.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; present for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn first(&self) -> &T {
        &self.items[0]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Index<usize> for AssetList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a AssetList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
