#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for make_demo_db.rs and tests/)
pub use app::App;
pub use config::{PERSISTENCE, STORE_DEFAULTS, StoreConfig};
pub use data::{Catalog, SeriesStore, SqliteStore, list_common_datasets};
pub use domain::{DatasetId, DateRange, Observation, SeriesKind, StoreRole};
pub use engine::{Pipeline, PipelineOutput, RenderRequest, SeriesStats};
pub use errors::PipelineError;
pub use models::{Chart, normalize, render};

// CLI argument parsing
use {clap::Parser, std::path::PathBuf};

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file with `actual_store_location` and/or `prediction_store_location`
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Actual-values SQLite store (overrides the config file)
    #[arg(long)]
    pub actual_db: Option<PathBuf>,

    /// Predictions SQLite store (overrides the config file)
    #[arg(long)]
    pub prediction_db: Option<PathBuf>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
