// memsample-data/src/samplers/traits.rs

use memsample_core::MemSampleError;
use std::fmt::Debug;

/// Boxed index stream returned by [`Sampler::iter`].
///
/// The stream owns its state, so it can outlive the borrow of the sampler
/// (a `DataLoader` keeps one next to the sampler that produced it).
pub type IndexIter = Box<dyn Iterator<Item = usize> + Send>;

/// A Sampler trait that defines how to iterate over indices of a dataset.
///
/// Samplers are used by `DataLoader` to generate a sequence of indices
/// to fetch data from a `Dataset`. A sampler holds the data source it draws
/// from, so both its length and its indices are known without extra arguments.
pub trait Sampler: Debug + Send + Sync {
    /// Starts a new pass over the sampler and returns its indices.
    ///
    /// Every call is independent: no cursor or random state carries over
    /// from a previous pass.
    ///
    /// # Errors
    ///
    /// Returns an error when the sampler cannot produce the indices it promised
    /// (see the implementors for the exact conditions).
    fn iter(&self) -> Result<IndexIter, MemSampleError>;

    /// Returns the total number of indices a full pass yields.
    fn len(&self) -> usize;

    /// Returns true if a pass yields no indices.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
