use {
    crate::domain::{DatasetId, StoreRole},
    std::path::PathBuf,
};

/// All pipeline errors, categorized by where they surface.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    // ── Store connectivity ──
    #[error("Cannot open {store} store at {}: {source}", location.display())]
    StoreUnavailable {
        store: StoreRole,
        location: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Query against {store} store failed: {source}")]
    Query {
        store: StoreRole,
        #[source]
        source: rusqlite::Error,
    },

    // ── Dataset lookup ──
    #[error("Dataset '{dataset}' not found in {store} store")]
    DatasetNotFound { dataset: DatasetId, store: StoreRole },

    #[error("'{0}' is not an available dataset")]
    UnknownDataset(String),

    // ── Range ──
    #[error("No predicted data to range over for '{0}'")]
    NoDataToRange(DatasetId),
}

impl PipelineError {
    /// Short heading for the fullscreen error message.
    pub fn title(&self) -> &'static str {
        match self {
            Self::StoreUnavailable { .. } | Self::Query { .. } => "Store Unavailable",
            Self::DatasetNotFound { .. } | Self::UnknownDataset(_) => "Dataset Missing",
            Self::NoDataToRange(_) => "No Data",
        }
    }

    /// Store connectivity. Fatal at startup; later on it only aborts the current render.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::StoreUnavailable { .. })
    }
}
