// memsample-data/src/samplers/nsamples_random_sampler_test.rs

use super::*;
use crate::datasets::VecDataset;
use std::collections::HashSet;
use std::sync::Arc;

fn dataset(size: usize) -> VecDataset<usize> {
    VecDataset::new((0..size).collect())
}

fn draw(size: usize, nsamples: usize, seed: u64) -> Vec<usize> {
    let data = dataset(size);
    let sampler = NSamplesRandomSampler::new(&data, nsamples).unwrap().with_seed(seed);
    sampler.iter().unwrap().collect()
}

// Each consecutive chunk of `size` indices comes from one permutation block.
fn assert_blocks_distinct(indices: &[usize], size: usize) {
    for chunk in indices.chunks(size) {
        let unique: HashSet<usize> = chunk.iter().copied().collect();
        assert_eq!(unique.len(), chunk.len(), "duplicate index inside block {:?}", chunk);
    }
}

#[test]
fn test_nsamples_len_is_requested_count() {
    for (size, nsamples) in [(10, 14), (14, 10), (1, 5), (5, 1), (10, 0), (0, 0), (0, 3)] {
        let data = dataset(size);
        let sampler = NSamplesRandomSampler::new(&data, nsamples).unwrap();
        assert_eq!(sampler.len(), nsamples);
        assert_eq!(sampler.nsamples(), nsamples);
        assert_eq!(sampler.is_empty(), nsamples == 0);
    }
}

#[test]
fn test_nsamples_more_than_size() {
    let indices = draw(10, 14, 1);
    assert_eq!(indices.len(), 14);

    let mut first_block = indices[..10].to_vec();
    first_block.sort_unstable();
    assert_eq!(first_block, (0..10).collect::<Vec<_>>());

    let tail: HashSet<usize> = indices[10..].iter().copied().collect();
    assert_eq!(tail.len(), 4);
    assert!(tail.iter().all(|&i| i < 10));
}

#[test]
fn test_nsamples_less_than_size() {
    let indices = draw(14, 10, 2);
    assert_eq!(indices.len(), 10);
    let unique: HashSet<usize> = indices.iter().copied().collect();
    assert_eq!(unique.len(), 10);
    assert!(indices.iter().all(|&i| i < 14));
}

#[test]
fn test_nsamples_single_element_source() {
    assert_eq!(draw(1, 5, 3), vec![0; 5]);
}

#[test]
fn test_nsamples_single_sample() {
    let indices = draw(5, 1, 4);
    assert_eq!(indices.len(), 1);
    assert!(indices[0] < 5);
}

#[test]
fn test_nsamples_zero_requested() {
    assert!(draw(10, 0, 5).is_empty());

    let empty = dataset(0);
    let sampler = NSamplesRandomSampler::new(&empty, 0).unwrap();
    let mut iter = sampler.indices().unwrap();
    assert_eq!(iter.next(), None);
    assert_eq!(iter.blocks_drawn(), 0);
}

#[test]
fn test_nsamples_empty_source_fails_on_iter() {
    let empty = dataset(0);
    let sampler = NSamplesRandomSampler::new(&empty, 1).unwrap();
    assert_eq!(sampler.len(), 1);
    match sampler.iter() {
        Err(MemSampleError::EmptySource { requested }) => assert_eq!(requested, 1),
        Err(e) => panic!("Expected EmptySource, got {:?}", e),
        Ok(_) => panic!("Expected EmptySource, got an iterator"),
    }
    // Deterministic: every attempt fails the same way.
    assert_eq!(
        sampler.indices().unwrap_err(),
        MemSampleError::EmptySource { requested: 1 }
    );
}

#[test]
fn test_nsamples_negative_count_rejected() {
    let data = dataset(4);
    let err = NSamplesRandomSampler::new(&data, -1i64).unwrap_err();
    assert!(matches!(err, MemSampleError::InvalidArgument { ref name, .. } if name == "nsamples"));
    assert!(NSamplesRandomSampler::new(&data, 0i64).is_ok());
    assert_eq!(NSamplesRandomSampler::new(&data, 6u64).unwrap().len(), 6);
}

#[test]
fn test_nsamples_blocks_are_duplicate_free() {
    for size in 1..12 {
        for nsamples in [0, 1, size - 1, size, size + 1, 2 * size, 3 * size + 2] {
            let indices = draw(size, nsamples, (size * 31 + nsamples) as u64);
            assert_eq!(indices.len(), nsamples);
            assert!(indices.iter().all(|&i| i < size));
            assert_blocks_distinct(&indices, size);
        }
    }
}

#[test]
fn test_nsamples_exact_multiple_uses_full_blocks() {
    let size = 6;
    let indices = draw(size, 3 * size, 9);
    for chunk in indices.chunks(size) {
        let mut block = chunk.to_vec();
        block.sort_unstable();
        assert_eq!(block, (0..size).collect::<Vec<_>>());
    }
}

#[test]
fn test_nsamples_block_count() {
    let data = dataset(10);

    let sampler = NSamplesRandomSampler::new(&data, 4).unwrap();
    let mut iter = sampler.indices().unwrap();
    iter.by_ref().for_each(drop);
    assert_eq!(iter.blocks_drawn(), 1);

    let sampler = NSamplesRandomSampler::new(&data, 25).unwrap();
    let mut iter = sampler.indices().unwrap();
    iter.by_ref().for_each(drop);
    assert_eq!(iter.blocks_drawn(), 3);
}

#[test]
fn test_nsamples_iter_is_exact_size_and_fused() {
    let data = dataset(3);
    let sampler = NSamplesRandomSampler::new(&data, 7).unwrap();
    let mut iter = sampler.indices().unwrap();
    assert_eq!(iter.len(), 7);
    iter.next();
    iter.next();
    assert_eq!(iter.size_hint(), (5, Some(5)));
    assert_eq!(iter.by_ref().count(), 5);
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_nsamples_reiteration_is_fresh() {
    let size = 50;
    let data = dataset(size);
    let sampler = NSamplesRandomSampler::new(&data, 120).unwrap().with_seed(11);

    let first: Vec<usize> = sampler.iter().unwrap().collect();
    let second: Vec<usize> = sampler.iter().unwrap().collect();
    for indices in [&first, &second] {
        assert_eq!(indices.len(), 120);
        assert_blocks_distinct(indices, size);
    }
    assert_ne!(first, second, "a new pass must draw new permutations");
}

#[test]
fn test_nsamples_partial_consumption_does_not_leak() {
    let data = dataset(8);
    let sampler = NSamplesRandomSampler::new(&data, 20).unwrap();
    {
        let mut partial = sampler.iter().unwrap();
        partial.next();
        partial.next();
    }
    assert_eq!(sampler.iter().unwrap().count(), 20);
}

#[test]
fn test_nsamples_seed_is_reproducible() {
    let data = dataset(30);
    let a = NSamplesRandomSampler::new(&data, 45).unwrap().with_seed(99);
    let b = NSamplesRandomSampler::new(&data, 45).unwrap().with_seed(99);
    for _ in 0..3 {
        let from_a: Vec<usize> = a.iter().unwrap().collect();
        let from_b: Vec<usize> = b.iter().unwrap().collect();
        assert_eq!(from_a, from_b);
    }
    assert_eq!(a.random_source(), RandomSource::Seeded(99));
}

#[test]
fn test_nsamples_clone_continues_pass_counter() {
    let data = dataset(30);
    let sampler = NSamplesRandomSampler::new(&data, 30).unwrap().with_seed(5);
    sampler.iter().unwrap().for_each(drop);
    let cloned = sampler.clone();
    let from_original: Vec<usize> = sampler.iter().unwrap().collect();
    let from_clone: Vec<usize> = cloned.iter().unwrap().collect();
    assert_eq!(from_original, from_clone);
}

#[test]
fn test_nsamples_for_iterations() {
    let data = dataset(10);
    let sampler = NSamplesRandomSampler::for_iterations(&data, 7, 4).unwrap();
    assert_eq!(sampler.len(), 28);
    assert_eq!(sampler.iter().unwrap().count(), 28);

    let err = NSamplesRandomSampler::for_iterations(&data, 7, 0).unwrap_err();
    assert!(matches!(err, MemSampleError::InvalidArgument { ref name, .. } if name == "batch_size"));

    let err = NSamplesRandomSampler::for_iterations(&data, usize::MAX, 2).unwrap_err();
    assert!(matches!(err, MemSampleError::InvalidArgument { ref name, .. } if name == "iterations"));
}

#[test]
fn test_nsamples_concurrent_passes() {
    let size = 16;
    let sampler = Arc::new(NSamplesRandomSampler::new(Arc::new(dataset(size)), 40).unwrap());
    std::thread::scope(|scope| {
        for _ in 0..4 {
            let sampler = Arc::clone(&sampler);
            scope.spawn(move || {
                let indices: Vec<usize> = sampler.iter().unwrap().collect();
                assert_eq!(indices.len(), 40);
                assert_blocks_distinct(&indices, size);
            });
        }
    });
}

#[test]
fn test_nsamples_source_is_only_read() {
    let data = dataset(5);
    let sampler = NSamplesRandomSampler::new(data.clone(), 12).unwrap();
    sampler.iter().unwrap().for_each(drop);
    assert_eq!(sampler.source().clone().into_inner(), data.into_inner());
}
