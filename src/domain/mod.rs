mod dataset;
mod observation;
mod range;

pub use dataset::{DatasetId, SeriesKind, StoreRole};
pub use observation::{LoadedSeries, Observation};
pub use range::DateRange;
