//! Configuration module for the prediction lens dashboard.

// Can all be private now because we have a public re-export.
mod debug;
mod persistence;
mod session;
mod stores;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use debug::DF;
pub use persistence::PERSISTENCE;
pub use plot::PLOT_CONFIG;
pub use session::{MARKET_SESSION, MarketSession, STORE_SCHEMA, StoreSchema};
pub use stores::{STORE_DEFAULTS, StoreConfig};

/// Activates the trace_time! macro. Mirrors DF.log_performance so the macro can read a plain const.
pub const LOG_PERFORMANCE: bool = DF.log_performance;
