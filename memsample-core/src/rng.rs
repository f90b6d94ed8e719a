// memsample-core/src/rng.rs

//! Randomness used by the samplers.
//!
//! Every pass over a sampler owns its own [`StdRng`]. Nothing here touches a
//! process-global generator, so two passes running on different threads never
//! share mutable state.

use log::trace;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Where a sampler draws the randomness for each of its passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RandomSource {
    /// A fresh OS-seeded generator for every pass.
    #[default]
    Entropy,
    /// A generator seeded with `seed + pass`, reproducible across runs.
    Seeded(u64),
}

impl RandomSource {
    /// Builds the generator for the `pass`-th iteration of a sampler.
    ///
    /// With [`RandomSource::Seeded`], the same `(seed, pass)` pair always yields the
    /// same generator, and consecutive passes get different streams.
    pub fn rng_for_pass(&self, pass: u64) -> StdRng {
        match *self {
            RandomSource::Entropy => StdRng::from_entropy(),
            RandomSource::Seeded(seed) => {
                let derived = seed.wrapping_add(pass);
                trace!("RandomSource: pass {} seeded with {}", pass, derived);
                StdRng::seed_from_u64(derived)
            }
        }
    }
}

/// Returns a uniformly random permutation of `0..size`.
pub fn permutation<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<usize> {
    let mut block: Vec<usize> = (0..size).collect();
    block.shuffle(rng);
    block
}

/// Shuffles `block` in place (Fisher-Yates).
///
/// The result is a uniform permutation of the block's elements whatever order
/// they were in, so a spent permutation can be reused as the next one.
pub fn reshuffle<R: Rng + ?Sized>(block: &mut [usize], rng: &mut R) {
    block.shuffle(rng);
}

#[cfg(test)]
#[path = "rng_test.rs"]
mod tests;
