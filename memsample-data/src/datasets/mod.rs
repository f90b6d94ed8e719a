pub mod traits;
pub mod vec_dataset;

pub use traits::{DataSource, Dataset};
pub use vec_dataset::VecDataset;
