// memsample-data/src/samplers/nsamples_random_sampler.rs

//! Random sampler that yields an exact, caller-chosen number of indices.
//!
//! The stream is built from consecutive random permutations ("blocks") of
//! `0..size`. Every block is consumed from its first element, and the last one
//! is cut short so that exactly `nsamples` indices come out. Within a block no
//! index repeats; a new block may of course reuse indices seen in earlier ones.

use super::traits::{IndexIter, Sampler};
use crate::datasets::DataSource;
use log::debug;
use memsample_core::rng::{self, RandomSource};
use memsample_core::MemSampleError;
use rand::rngs::StdRng;
use std::fmt::{Debug, Display};
use std::iter::FusedIterator;
use std::sync::atomic::{AtomicU64, Ordering};

/// Draws `nsamples` indices from a data source, without repeats inside any
/// pass of `size` consecutive indices.
///
/// `nsamples` may be smaller than, equal to, larger than, or not a multiple of
/// the source size.
///
/// # Errors
///
/// * Construction fails with `MemSampleError::InvalidArgument` when the
///   requested count is negative or does not fit in a `usize`.
/// * [`Sampler::iter`] fails with `MemSampleError::EmptySource` when
///   `nsamples > 0` and the source is empty. The check runs on every call,
///   before any index is produced. `nsamples == 0` never fails.
///
/// # Example
///
/// ```
/// use memsample_data::datasets::VecDataset;
/// use memsample_data::samplers::{NSamplesRandomSampler, Sampler};
///
/// let dataset = VecDataset::new((0..10).collect::<Vec<u32>>());
/// let sampler = NSamplesRandomSampler::new(&dataset, 14).unwrap().with_seed(7);
/// assert_eq!(sampler.len(), 14);
/// let indices: Vec<usize> = sampler.iter().unwrap().collect();
/// assert_eq!(indices.len(), 14);
/// assert!(indices.iter().all(|&i| i < 10));
/// ```
#[derive(Debug)]
pub struct NSamplesRandomSampler<D> {
    source: D,
    nsamples: usize,
    random_source: RandomSource,
    // Number of passes started so far; selects the generator of the next one.
    passes: AtomicU64,
}

impl<D: DataSource> NSamplesRandomSampler<D> {
    /// Creates a sampler yielding `nsamples` indices per pass.
    ///
    /// Accepts any integer type; negative values are rejected.
    pub fn new<N>(source: D, nsamples: N) -> Result<Self, MemSampleError>
    where
        N: TryInto<usize> + Copy + Display,
    {
        let count: usize = nsamples.try_into().map_err(|_| {
            MemSampleError::invalid_argument(
                "nsamples",
                format!("must be a non-negative integer, got {}", nsamples),
            )
        })?;
        debug!(
            "NSamplesRandomSampler: created with nsamples = {}, source size = {}",
            count,
            source.size()
        );
        Ok(NSamplesRandomSampler {
            source,
            nsamples: count,
            random_source: RandomSource::default(),
            passes: AtomicU64::new(0),
        })
    }

    /// Creates a sampler sized for `iterations` steps of `batch_size` samples each.
    ///
    /// This is how a training run that counts iterations rather than epochs
    /// sizes its sampler.
    pub fn for_iterations(
        source: D,
        iterations: usize,
        batch_size: usize,
    ) -> Result<Self, MemSampleError> {
        if batch_size == 0 {
            return Err(MemSampleError::invalid_argument(
                "batch_size",
                "must be a positive integer, got 0",
            ));
        }
        let nsamples = iterations.checked_mul(batch_size).ok_or_else(|| {
            MemSampleError::invalid_argument(
                "iterations",
                format!(
                    "{} iterations of batch size {} overflow the sample count",
                    iterations, batch_size
                ),
            )
        })?;
        Self::new(source, nsamples)
    }

    /// Makes every pass reproducible: pass `k` draws from a generator seeded with `seed + k`.
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_random_source(RandomSource::Seeded(seed))
    }

    pub fn with_random_source(mut self, random_source: RandomSource) -> Self {
        self.random_source = random_source;
        self
    }

    pub fn source(&self) -> &D {
        &self.source
    }

    pub fn nsamples(&self) -> usize {
        self.nsamples
    }

    pub fn random_source(&self) -> RandomSource {
        self.random_source
    }

    /// Starts a new pass and returns its concrete iterator.
    ///
    /// Same contract as [`Sampler::iter`], without the boxing.
    pub fn indices(&self) -> Result<NSamplesIter, MemSampleError> {
        let size = self.source.size();
        if self.nsamples > 0 && size == 0 {
            return Err(MemSampleError::EmptySource {
                requested: self.nsamples,
            });
        }
        let pass = self.passes.fetch_add(1, Ordering::Relaxed);
        debug!(
            "NSamplesRandomSampler: pass {} over {} indices, {} samples",
            pass, size, self.nsamples
        );
        Ok(NSamplesIter {
            size,
            remaining: self.nsamples,
            block: Vec::new(),
            cursor: 0,
            blocks_drawn: 0,
            rng: self.random_source.rng_for_pass(pass),
        })
    }
}

impl<D: Clone> Clone for NSamplesRandomSampler<D> {
    fn clone(&self) -> Self {
        NSamplesRandomSampler {
            source: self.source.clone(),
            nsamples: self.nsamples,
            random_source: self.random_source,
            passes: AtomicU64::new(self.passes.load(Ordering::Relaxed)),
        }
    }
}

impl<D: DataSource + Debug + Send + Sync> Sampler for NSamplesRandomSampler<D> {
    fn iter(&self) -> Result<IndexIter, MemSampleError> {
        Ok(Box::new(self.indices()?))
    }

    /// Always `nsamples`, whatever the size of the source.
    fn len(&self) -> usize {
        self.nsamples
    }
}

/// One pass of an [`NSamplesRandomSampler`].
///
/// Holds a single permutation buffer of `size` indices, allocated on the
/// first call to `next`. Dropping it early is fine.
#[derive(Debug)]
pub struct NSamplesIter {
    size: usize,
    remaining: usize,
    block: Vec<usize>,
    cursor: usize,
    blocks_drawn: usize,
    rng: StdRng,
}

impl NSamplesIter {
    /// Number of permutation blocks generated so far in this pass.
    pub fn blocks_drawn(&self) -> usize {
        self.blocks_drawn
    }

    fn next_block(&mut self) {
        if self.blocks_drawn == 0 {
            self.block = rng::permutation(self.size, &mut self.rng);
        } else {
            rng::reshuffle(&mut self.block, &mut self.rng);
        }
        self.cursor = 0;
        self.blocks_drawn += 1;
        debug!(
            "NSamplesIter: block {} drawn, {} samples remaining",
            self.blocks_drawn,
            self.remaining
        );
    }
}

impl Iterator for NSamplesIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        if self.cursor == self.block.len() {
            self.next_block();
        }
        // `size > 0` whenever samples remain, so the fresh block is never empty.
        let index = *self.block.get(self.cursor)?;
        self.cursor += 1;
        self.remaining -= 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for NSamplesIter {}

impl FusedIterator for NSamplesIter {}

#[cfg(test)]
#[path = "nsamples_random_sampler_test.rs"]
mod tests;
