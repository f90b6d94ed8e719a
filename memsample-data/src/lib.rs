//! Datasets, index samplers and batching for memsample.
//!
//! The centerpiece is [`NSamplesRandomSampler`], which yields an exact number of
//! random indices built from consecutive permutations of the dataset.

pub mod dataloader;
pub mod datasets;
pub mod samplers;

// Re-export main components
pub use dataloader::DataLoader;
pub use datasets::{DataSource, Dataset, VecDataset};
pub use samplers::{NSamplesRandomSampler, Sampler, SequentialSampler};
