use crate::{
    domain::{DateRange, LoadedSeries},
    models::Chart,
};

/// One interaction's worth of input: what the controls currently say.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub dataset: String,
    /// None = full available range
    pub range: Option<DateRange>,
}

/// Row counts for one series as it moves through the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeriesStats {
    pub loaded: usize,
    pub unparseable: usize,
    pub normalized: usize,
    pub in_range: usize,
}

impl SeriesStats {
    pub(crate) fn new(loaded: &LoadedSeries, normalized: usize, in_range: usize) -> Self {
        Self {
            loaded: loaded.total_rows(),
            unparseable: loaded.unparseable_rows,
            normalized,
            in_range,
        }
    }
}

/// The result handed back to the UI shell
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub chart: Chart,
    /// Extent of the normalized predicted series
    pub bounds: DateRange,
    /// The range actually applied (request clamped into `bounds`)
    pub range: DateRange,
    pub actual_stats: SeriesStats,
    pub predicted_stats: SeriesStats,
    pub duration_ms: u128,
}
