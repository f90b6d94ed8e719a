//! Exemple d'utilisation du DataLoader avec NSamplesRandomSampler.
//!
//! Une boucle d'entraînement qui compte en itérations (et non en epochs) a besoin
//! d'exactement `iterations * batch_size` samples, quelle que soit la taille du dataset.

use memsample_data::dataloader::DataLoader;
use memsample_data::datasets::VecDataset;
use memsample_data::samplers::{NSamplesRandomSampler, Sampler, SequentialSampler};
use std::sync::Arc;

fn main() {
    // Dataset synthétique : (features, label)
    let samples: Vec<([f32; 3], u8)> = (0..10)
        .map(|i| ([i as f32, (i * 2) as f32, (i * 3) as f32], (i % 2) as u8))
        .collect();
    let dataset = Arc::new(VecDataset::new(samples));

    let iterations = 7;
    let batch_size = 4;
    let sampler = NSamplesRandomSampler::for_iterations(Arc::clone(&dataset), iterations, batch_size)
        .expect("Paramètres valides")
        .with_seed(1234);
    println!("\n--- {} samples pour {} itérations ---", sampler.len(), iterations);

    let mut train_loader = DataLoader::new(Arc::clone(&dataset), batch_size, sampler, false, None)
        .expect("Dataset non vide");
    for (i, batch) in train_loader.by_ref().enumerate() {
        let batch = batch.expect("Pas d'erreur attendue");
        let labels: Vec<u8> = batch.iter().map(|(_, label)| *label).collect();
        println!("Itération {i} : {} samples, labels {:?}", batch.len(), labels);
    }

    // Évaluation : un passage ordonné sur tout le dataset
    let test_loader =
        DataLoader::with_default_collate(Arc::clone(&dataset), batch_size, SequentialSampler::new(dataset), false)
            .expect("Configuration valide");
    println!("\n--- Évaluation ---");
    for (i, batch) in test_loader.enumerate() {
        let batch = batch.expect("Pas d'erreur attendue");
        println!("Batch {i} : {} samples", batch.len());
    }
}
