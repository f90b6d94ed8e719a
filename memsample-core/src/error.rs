use thiserror::Error;

/// Custom error type for the memsample crates.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum MemSampleError {
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("Cannot draw {requested} samples from an empty data source")]
    EmptySource { requested: usize },

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl MemSampleError {
    /// Shorthand for building an [`MemSampleError::InvalidArgument`].
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        MemSampleError::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
