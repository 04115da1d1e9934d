//! The active dataset.
//!
//! Readers take a snapshot (`Arc<Dataset>`) and never observe a partially
//! replaced dataset. Uploads swap the whole dataset in one write.

use std::sync::{Arc, PoisonError, RwLock};

use portal_model::Dataset;
use tracing::info;

/// Shared holder of the most recently accepted dataset.
///
/// Cloning a store yields another handle to the same dataset.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    current: Arc<RwLock<Option<Arc<Dataset>>>>,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dataset(dataset: Dataset) -> Self {
        let store = Self::new();
        store.replace(dataset);
        store
    }

    /// Replaces the active dataset and returns the new snapshot.
    pub fn replace(&self, dataset: Dataset) -> Arc<Dataset> {
        let dataset = Arc::new(dataset);
        info!(
            rows = dataset.len(),
            columns = dataset.column_count(),
            "active dataset replaced"
        );
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = Some(Arc::clone(&dataset));
        dataset
    }

    /// Returns the active dataset, if any.
    pub fn snapshot(&self) -> Option<Arc<Dataset>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear(&self) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// True when a dataset with at least one record is active.
    pub fn has_data(&self) -> bool {
        self.snapshot().is_some_and(|dataset| !dataset.is_empty())
    }
}
