pub mod chart;
pub mod normalize;
pub mod range;

pub use chart::{AxisKind, AxisSpec, BoxGrouping, BoxSummary, Chart, Trace, render};
pub use normalize::{RawValue, coerce_row, normalize};
pub use range::{apply_range, date_bounds, select_range};
