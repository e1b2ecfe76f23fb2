//! Store locations. Built-in defaults, overridden by an optional JSON file, overridden by CLI flags.

use {
    anyhow::{Context, Result},
    serde::{Deserialize, Serialize},
    std::{
        fs,
        path::{Path, PathBuf},
    },
};

pub struct StoreDefaults {
    pub actual_store_location: &'static str,
    pub prediction_store_location: &'static str,
}

pub const STORE_DEFAULTS: StoreDefaults = StoreDefaults {
    actual_store_location: "nifty50_data_v1.db",
    prediction_store_location: "predictions/predictions.db",
};

/// Where the two SQLite stores live. Passed into the pipeline at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub actual_store_location: PathBuf,
    pub prediction_store_location: PathBuf,
}

/// On-disk shape of the config file. Every field optional so a file can override just one store.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct StoreConfigFile {
    actual_store_location: Option<PathBuf>,
    prediction_store_location: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            actual_store_location: PathBuf::from(STORE_DEFAULTS.actual_store_location),
            prediction_store_location: PathBuf::from(STORE_DEFAULTS.prediction_store_location),
        }
    }
}

impl StoreConfig {
    pub fn new(actual: impl Into<PathBuf>, prediction: impl Into<PathBuf>) -> Self {
        Self {
            actual_store_location: actual.into(),
            prediction_store_location: prediction.into(),
        }
    }

    /// Layer: defaults <- config file <- explicit overrides.
    pub fn resolve(
        config_file: Option<&Path>,
        actual_override: Option<PathBuf>,
        prediction_override: Option<PathBuf>,
    ) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = config_file {
            let file = Self::read_file(path)?;
            if let Some(actual) = file.actual_store_location {
                config.actual_store_location = actual;
            }
            if let Some(prediction) = file.prediction_store_location {
                config.prediction_store_location = prediction;
            }
        }

        if let Some(actual) = actual_override {
            config.actual_store_location = actual;
        }
        if let Some(prediction) = prediction_override {
            config.prediction_store_location = prediction;
        }

        Ok(config)
    }

    fn read_file(path: &Path) -> Result<StoreConfigFile> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Invalid store config in {}", path.display()))
    }
}
