// dataloader.rs
//! # DataLoader
//!
//! Le module `DataLoader` assemble en batches les items d'un dataset, dans l'ordre
//! des indices fournis par un [`Sampler`].
//!
//! ## Exemple d'utilisation basique
//!
//! ```rust
//! use memsample_data::dataloader::DataLoader;
//! use memsample_data::datasets::VecDataset;
//! use memsample_data::samplers::NSamplesRandomSampler;
//! use std::sync::Arc;
//!
//! let dataset = Arc::new(VecDataset::new(vec![1, 2, 3, 4, 5, 6]));
//! let sampler = NSamplesRandomSampler::new(Arc::clone(&dataset), 10).unwrap();
//! let loader = DataLoader::new(dataset, 4, sampler, false, None).unwrap();
//! for batch in loader {
//!     let batch = batch.expect("Pas d'erreur attendue");
//!     println!("Batch : {:?}", batch);
//! }
//! ```
//!
//! ## Fonctionnalités principales
//!
//! - Batching automatique des données
//! - Sampling flexible via le trait `Sampler`
//! - Fonction de collation personnalisable
//! - Option pour ignorer le dernier batch incomplet (`drop_last`)

use crate::datasets::Dataset;
use crate::samplers::{IndexIter, Sampler};
use log::{debug, warn};
use memsample_core::MemSampleError;

/// Type pour la fonction de collation personnalisée.
///
/// Cette fonction prend un vecteur de samples (issus du dataset) et retourne un batch prêt à être utilisé.
pub type CollateFn<D> = Box<
    dyn Fn(Vec<<D as Dataset>::Item>) -> Result<Vec<<D as Dataset>::Item>, MemSampleError>
        + Send
        + Sync,
>;

/// DataLoader générique pour le batching et le sampling de données.
///
/// # Paramètres de type
/// - `D`: Le type du dataset, qui doit implémenter le trait [`Dataset`].
/// - `S`: Le type du sampler, qui doit implémenter le trait [`Sampler`].
///
/// Un passage complet produit `sampler.len()` items. Le DataLoader ne vérifie
/// pas que le sampler porte sur le même dataset : un indice hors limites
/// remonte comme `MemSampleError::IndexOutOfBounds`.
pub struct DataLoader<D: Dataset, S: Sampler> {
    /// Le dataset source.
    pub dataset: D,
    /// La taille des batches.
    pub batch_size: usize,
    /// Le sampler utilisé pour générer les indices.
    pub sampler: S,
    /// Si vrai, le dernier batch est ignoré s'il est incomplet.
    pub drop_last: bool,
    /// Fonction de collation optionnelle pour assembler les samples en batch.
    pub collate_fn: Option<CollateFn<D>>,
    indices_iter: IndexIter,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    /// Crée un nouveau DataLoader et démarre un premier passage du sampler.
    ///
    /// # Erreurs
    /// - `InvalidArgument` si `batch_size == 0`.
    /// - Toute erreur renvoyée par `sampler.iter()` (par exemple `EmptySource`).
    pub fn new(
        dataset: D,
        batch_size: usize,
        sampler: S,
        drop_last: bool,
        collate_fn: Option<CollateFn<D>>,
    ) -> Result<Self, MemSampleError> {
        if batch_size == 0 {
            return Err(MemSampleError::invalid_argument(
                "batch_size",
                "must be a positive integer, got 0",
            ));
        }
        if drop_last && sampler.len() < batch_size {
            warn!(
                "DataLoader: drop_last with {} samples and batch_size {} yields no batch.",
                sampler.len(),
                batch_size
            );
        }
        let indices_iter = sampler.iter()?;
        debug!(
            "DataLoader: {} samples, batch_size = {}, drop_last = {}",
            sampler.len(),
            batch_size,
            drop_last
        );
        Ok(Self {
            dataset,
            batch_size,
            sampler,
            drop_last,
            collate_fn,
            indices_iter,
        })
    }

    /// Crée un DataLoader avec la fonction de collation par défaut (simple agrégation en `Vec`).
    pub fn with_default_collate(
        dataset: D,
        batch_size: usize,
        sampler: S,
        drop_last: bool,
    ) -> Result<Self, MemSampleError> {
        let collate_fn: CollateFn<D> = Box::new(|batch: Vec<<D as Dataset>::Item>| Ok(batch));
        Self::new(dataset, batch_size, sampler, drop_last, Some(collate_fn))
    }

    /// Nombre de batches produits par un passage complet.
    pub fn num_batches(&self) -> usize {
        let samples = self.sampler.len();
        if self.drop_last {
            samples / self.batch_size
        } else {
            samples.div_ceil(self.batch_size)
        }
    }

    /// Abandonne le passage en cours et en démarre un nouveau (nouvel aléa pour les samplers aléatoires).
    pub fn reset(&mut self) -> Result<(), MemSampleError> {
        self.indices_iter = self.sampler.iter()?;
        debug!("DataLoader: reset, new pass started");
        Ok(())
    }
}

impl<D: Dataset, S: Sampler> Iterator for DataLoader<D, S> {
    type Item = Result<Vec<<D as Dataset>::Item>, MemSampleError>;

    /// Renvoie le prochain batch de données.
    ///
    /// # Retour
    /// - `Some(Ok(batch))` : Un batch de données prêt à l'emploi.
    /// - `Some(Err(e))` : Une erreur lors de la récupération d'un item.
    /// - `None` : Plus de données à itérer.
    fn next(&mut self) -> Option<Self::Item> {
        // `batch_size` may exceed what the pass can still yield.
        let capacity = self.batch_size.min(self.indices_iter.size_hint().0);
        let mut batch = Vec::with_capacity(capacity);
        for idx in self.indices_iter.by_ref().take(self.batch_size) {
            match self.dataset.get(idx) {
                Ok(item) => batch.push(item),
                Err(e) => return Some(Err(e)),
            }
        }
        if batch.is_empty() || (self.drop_last && batch.len() < self.batch_size) {
            return None;
        }
        match self.collate_fn {
            Some(ref collate_fn) => Some(collate_fn(batch)),
            None => Some(Ok(batch)),
        }
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
