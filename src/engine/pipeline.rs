use crate::{
    config::{DF, StoreConfig},
    data::{Catalog, SeriesStore, SqliteStore},
    domain::{DatasetId, DateRange, LoadedSeries, SeriesKind, StoreRole},
    engine::{PipelineOutput, RenderRequest, SeriesStats},
    errors::PipelineError,
    models::{apply_range, normalize, render, select_range},
    utils::AppInstant,
};

/// Read -> normalize -> range -> render, re-run in full for every interaction.
/// Owns the two store handles and the catalog resolved at startup; no other state.
pub struct Pipeline<S: SeriesStore = SqliteStore> {
    actual_store: S,
    prediction_store: S,
    catalog: Catalog,
}

impl Pipeline<SqliteStore> {
    pub fn open(config: &StoreConfig) -> Result<Self, PipelineError> {
        log::info!(
            "Opening stores: actual={} predictions={}",
            config.actual_store_location.display(),
            config.prediction_store_location.display()
        );
        Self::with_stores(
            SqliteStore::new(StoreRole::Actual, &config.actual_store_location),
            SqliteStore::new(StoreRole::Predictions, &config.prediction_store_location),
        )
    }
}

impl<S: SeriesStore> Pipeline<S> {
    /// Resolves the catalog once. Fails if either store is unreachable.
    pub fn with_stores(actual_store: S, prediction_store: S) -> Result<Self, PipelineError> {
        let catalog = Catalog::resolve(&actual_store, &prediction_store)?;
        Ok(Self {
            actual_store,
            prediction_store,
            catalog,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Series Loader. The identifier must already be a catalog member.
    pub fn load_series(
        &self,
        dataset: &DatasetId,
        kind: SeriesKind,
    ) -> Result<LoadedSeries, PipelineError> {
        if !self.catalog.contains(dataset) {
            return Err(PipelineError::UnknownDataset(dataset.to_string()));
        }
        match kind {
            SeriesKind::Actual => self.actual_store.load_series(dataset, kind),
            SeriesKind::Predicted => self.prediction_store.load_series(dataset, kind),
        }
    }

    pub fn handle(&self, request: &RenderRequest) -> Result<PipelineOutput, PipelineError> {
        self.render_pipeline(&request.dataset, request.range)
    }

    /// One full top-to-bottom run. `selected_range` None means the full bounds.
    pub fn render_pipeline(
        &self,
        selected_identifier: &str,
        selected_range: Option<DateRange>,
    ) -> Result<PipelineOutput, PipelineError> {
        let start = AppInstant::now();
        let dataset = self.catalog.validate(selected_identifier)?;

        let (actual_raw, predicted_raw) = crate::trace_time!("Load series", 50_000, {
            (
                self.load_series(&dataset, SeriesKind::Actual)?,
                self.load_series(&dataset, SeriesKind::Predicted)?,
            )
        });

        let actual = normalize(&actual_raw.observations);
        let predicted = normalize(&predicted_raw.observations);

        // Bounds come from the predicted series only. Empty predictions stop here, before any render.
        let bounds = select_range(&dataset, &predicted)?;
        let range = selected_range
            .map(|r| r.clamp_to(&bounds))
            .unwrap_or(bounds);

        let actual_in_range = apply_range(&actual, &range);
        let predicted_in_range = apply_range(&predicted, &range);

        let chart = render(&actual_in_range, &predicted_in_range, &dataset);

        let output = PipelineOutput {
            chart,
            bounds,
            range,
            actual_stats: SeriesStats::new(&actual_raw, actual.len(), actual_in_range.len()),
            predicted_stats: SeriesStats::new(
                &predicted_raw,
                predicted.len(),
                predicted_in_range.len(),
            ),
            duration_ms: start.elapsed().as_millis(),
        };

        if DF.log_pipeline {
            log::info!(
                "{} [{}]: actual {}/{} rows kept, predicted {}/{} rows kept ({}ms)",
                dataset,
                range,
                output.actual_stats.in_range,
                output.actual_stats.loaded,
                output.predicted_stats.in_range,
                output.predicted_stats.loaded,
                output.duration_ms
            );
        }

        Ok(output)
    }
}
