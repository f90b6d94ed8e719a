use memsample_core::MemSampleError;
use memsample_data::datasets::Dataset;
use std::collections::HashSet;

/// Dataset whose item at `idx` is `(idx, idx)`; only its length matters to samplers.
#[derive(Debug, Clone, Copy)]
pub struct IndexDataset {
    pub elements: usize,
}

impl Dataset for IndexDataset {
    type Item = (usize, usize);

    fn get(&self, index: usize) -> Result<Self::Item, MemSampleError> {
        if index < self.elements {
            Ok((index, index))
        } else {
            Err(MemSampleError::IndexOutOfBounds {
                index,
                len: self.elements,
            })
        }
    }

    fn len(&self) -> usize {
        self.elements
    }
}

// Checks that every run of `size` consecutive indices (the last one possibly shorter) is duplicate-free.
#[allow(dead_code)]
pub fn assert_unique_per_pass(indices: &[usize], size: usize) {
    for (pass, chunk) in indices.chunks(size).enumerate() {
        let unique: HashSet<&usize> = chunk.iter().collect();
        assert_eq!(unique.len(), chunk.len(), "pass {} repeats an index: {:?}", pass, chunk);
    }
}
