// Core building blocks shared by the memsample crates.

pub mod error;
pub mod rng;

// Ré-exporte les types les plus utilisés pour qu'ils soient accessibles directement via `memsample_core::...`
pub use error::MemSampleError;
pub use rng::RandomSource;
