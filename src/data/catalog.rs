//! Table Catalog Resolver: which datasets exist in BOTH stores.

use {
    crate::{
        config::DF,
        data::SeriesStore,
        domain::DatasetId,
        errors::PipelineError,
    },
    std::collections::BTreeSet,
};

/// Actual-store table names intersected with suffix-stripped prediction-store table names.
/// An empty result is valid and not an error.
pub fn list_common_datasets(
    actual_store: &impl SeriesStore,
    prediction_store: &impl SeriesStore,
) -> Result<BTreeSet<DatasetId>, PipelineError> {
    let actual: BTreeSet<DatasetId> = actual_store
        .list_tables()?
        .into_iter()
        .map(DatasetId::new)
        .collect();

    let predicted: BTreeSet<DatasetId> = prediction_store
        .list_tables()?
        .iter()
        .filter_map(|table| DatasetId::from_prediction_table(table))
        .collect();

    let common: BTreeSet<DatasetId> = actual.intersection(&predicted).cloned().collect();

    if DF.log_catalog {
        log::info!(
            "Catalog: {} actual tables, {} prediction tables, {} in common",
            actual.len(),
            predicted.len(),
            common.len()
        );
    }

    Ok(common)
}

/// Resolved once at startup. Every identifier reaching a store query is checked here first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    datasets: BTreeSet<DatasetId>,
}

impl Catalog {
    pub fn resolve(
        actual_store: &impl SeriesStore,
        prediction_store: &impl SeriesStore,
    ) -> Result<Self, PipelineError> {
        Ok(Self {
            datasets: list_common_datasets(actual_store, prediction_store)?,
        })
    }

    pub fn validate(&self, name: &str) -> Result<DatasetId, PipelineError> {
        let id = DatasetId::new(name);
        if self.datasets.contains(&id) {
            Ok(id)
        } else {
            Err(PipelineError::UnknownDataset(name.to_string()))
        }
    }

    pub fn contains(&self, id: &DatasetId) -> bool {
        self.datasets.contains(id)
    }

    /// Sorted for display
    pub fn iter(&self) -> impl Iterator<Item = &DatasetId> {
        self.datasets.iter()
    }

    pub fn first(&self) -> Option<&DatasetId> {
        self.datasets.iter().next()
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}
