//! In-memory `SeriesStore` for exercising the catalog and pipeline without SQLite.

use {
    crate::{
        data::SeriesStore,
        domain::{DatasetId, LoadedSeries, Observation, SeriesKind, StoreRole},
        errors::PipelineError,
    },
    std::{collections::BTreeMap, path::PathBuf},
};

pub(crate) struct MemoryStore {
    role: StoreRole,
    available: bool,
    tables: BTreeMap<String, LoadedSeries>,
}

impl MemoryStore {
    pub fn new(role: StoreRole) -> Self {
        Self {
            role,
            available: true,
            tables: BTreeMap::new(),
        }
    }

    pub fn with_tables(role: StoreRole, names: &[&str]) -> Self {
        let mut store = Self::new(role);
        for name in names {
            store.tables.insert(name.to_string(), LoadedSeries::default());
        }
        store
    }

    pub fn unavailable(role: StoreRole) -> Self {
        Self {
            available: false,
            ..Self::new(role)
        }
    }

    /// Rows are kept in the given order; callers pass them already timestamp-descending.
    pub fn insert(&mut self, table: &str, observations: Vec<Observation>) {
        self.tables.insert(
            table.to_string(),
            LoadedSeries {
                observations,
                unparseable_rows: 0,
            },
        );
    }

    fn check_available(&self) -> Result<(), PipelineError> {
        if self.available {
            Ok(())
        } else {
            Err(PipelineError::StoreUnavailable {
                store: self.role,
                location: PathBuf::from(":memory:"),
                source: rusqlite::Error::InvalidPath(PathBuf::from(":memory:")),
            })
        }
    }
}

impl SeriesStore for MemoryStore {
    fn list_tables(&self) -> Result<Vec<String>, PipelineError> {
        self.check_available()?;
        Ok(self.tables.keys().cloned().collect())
    }

    fn load_series(
        &self,
        dataset: &DatasetId,
        kind: SeriesKind,
    ) -> Result<LoadedSeries, PipelineError> {
        self.check_available()?;
        self.tables
            .get(&kind.table_name(dataset))
            .cloned()
            .ok_or_else(|| PipelineError::DatasetNotFound {
                dataset: dataset.clone(),
                store: self.role,
            })
    }
}
