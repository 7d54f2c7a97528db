use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::LoadConfig;
use crate::dataset::loader::{DatasetLoader, LoadError};
use crate::dataset::Dataset;

/// Shared, atomically replaceable dataset.
///
/// Readers take a snapshot with [`DatasetHandle::current`] and keep using it
/// for as long as they hold the `Arc`; a concurrent reload never changes what
/// an existing snapshot sees.
pub struct DatasetHandle {
    snap: ArcSwap<Dataset>,
    loader: DatasetLoader,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadOutcome {
    Replaced,
    Unchanged,
}

impl DatasetHandle {
    pub fn new(dataset: Dataset) -> Self {
        Self::with_loader(dataset, DatasetLoader::default())
    }

    pub fn with_loader(dataset: Dataset, loader: DatasetLoader) -> Self {
        Self {
            snap: ArcSwap::from_pointee(dataset),
            loader,
        }
    }

    pub fn current(&self) -> Arc<Dataset> {
        self.snap.load_full()
    }

    /// Build a new dataset from `config` and publish it. The old dataset stays
    /// published on failure, and when the sources hash to the same version.
    pub fn reload(&self, config: &LoadConfig) -> Result<ReloadOutcome, LoadError> {
        let next = self.loader.load(config)?;
        Ok(self.publish(next))
    }

    /// Publish an already built dataset unless its version matches the
    /// current one.
    pub fn publish(&self, next: Dataset) -> ReloadOutcome {
        if next.version == self.snap.load().version {
            tracing::info!(version = %next.version, "Dataset unchanged, keeping current");
            return ReloadOutcome::Unchanged;
        }

        tracing::info!(version = %next.version, "Publishing new dataset");
        self.snap.store(Arc::new(next));
        ReloadOutcome::Replaced
    }
}
