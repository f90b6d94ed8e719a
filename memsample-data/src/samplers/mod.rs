pub mod traits;
pub mod sequential_sampler;
pub mod nsamples_random_sampler;

pub use traits::{IndexIter, Sampler};
pub use sequential_sampler::SequentialSampler;
pub use nsamples_random_sampler::{NSamplesIter, NSamplesRandomSampler};
