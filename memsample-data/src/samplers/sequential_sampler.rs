// memsample-data/src/samplers/sequential_sampler.rs

use super::traits::{IndexIter, Sampler};
use crate::datasets::DataSource;
use memsample_core::MemSampleError;
use std::fmt::Debug;

/// Samples elements sequentially, always in the same order.
#[derive(Debug, Clone)]
pub struct SequentialSampler<D> {
    source: D,
}

impl<D: DataSource> SequentialSampler<D> {
    /// Creates a new `SequentialSampler` over `source`.
    pub fn new(source: D) -> Self {
        SequentialSampler { source }
    }
}

impl<D: DataSource + Debug + Send + Sync> Sampler for SequentialSampler<D> {
    fn iter(&self) -> Result<IndexIter, MemSampleError> {
        Ok(Box::new(0..self.source.size()))
    }

    fn len(&self) -> usize {
        self.source.size()
    }
}

#[cfg(test)]
#[path = "sequential_sampler_test.rs"]
mod tests;
