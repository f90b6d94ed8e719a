// memsample-data/src/datasets/traits.rs

use memsample_core::MemSampleError;
use std::sync::Arc;

/// Represents a dataset that can be accessed by index.
///
/// A dataset is a collection of items, where each item can be a single value,
/// a tuple (e.g., `(features, label)`), or any other custom type
/// that implements `Send + 'static`.
pub trait Dataset {
    /// The type of a single item returned by the dataset.
    ///
    /// This type must be `Send` and `'static` so batches can be handed to
    /// another thread.
    type Item: Send + 'static;

    /// Returns the item at the given index.
    ///
    /// # Errors
    ///
    /// Returns `MemSampleError::IndexOutOfBounds` if the index is out of bounds.
    fn get(&self, index: usize) -> Result<Self::Item, MemSampleError>;

    /// Returns the total number of items in the dataset.
    fn len(&self) -> usize;

    /// Checks if the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<D: Dataset + ?Sized> Dataset for &D {
    type Item = D::Item;

    fn get(&self, index: usize) -> Result<Self::Item, MemSampleError> {
        (**self).get(index)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<D: Dataset + ?Sized> Dataset for Arc<D> {
    type Item = D::Item;

    fn get(&self, index: usize) -> Result<Self::Item, MemSampleError> {
        (**self).get(index)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// The only view of a dataset a sampler needs: how many items it holds.
///
/// Every [`Dataset`] is a `DataSource`. Samplers never call anything else on it.
pub trait DataSource {
    /// Number of items, i.e. the exclusive upper bound on valid indices.
    fn size(&self) -> usize;
}

impl<D: Dataset + ?Sized> DataSource for D {
    fn size(&self) -> usize {
        self.len()
    }
}
