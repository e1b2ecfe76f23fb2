use {
    crate::config::{PLOT_CONFIG, STORE_SCHEMA},
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Name of one instrument. A plain table name in the actual-values store,
/// `<name>_predictions` in the predictions store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DatasetId(String);

impl DatasetId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Inverse of `prediction_table`. Only names that actually carry the suffix qualify.
    pub fn from_prediction_table(table: &str) -> Option<Self> {
        table
            .strip_suffix(STORE_SCHEMA.prediction_suffix)
            .filter(|name| !name.is_empty())
            .map(Self::new)
    }

    pub fn prediction_table(&self) -> String {
        format!("{}{}", self.0, STORE_SCHEMA.prediction_suffix)
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreRole {
    Actual,
    Predictions,
}

impl fmt::Display for StoreRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Actual => f.write_str("actual-values"),
            Self::Predictions => f.write_str("predictions"),
        }
    }
}

/// Which of the two series a table holds. Decides table name and value column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    Actual,
    Predicted,
}

impl SeriesKind {
    pub fn table_name(&self, dataset: &DatasetId) -> String {
        match self {
            Self::Actual => dataset.as_str().to_string(),
            Self::Predicted => dataset.prediction_table(),
        }
    }

    pub fn value_column(&self) -> &'static str {
        match self {
            Self::Actual => STORE_SCHEMA.actual_value_column,
            Self::Predicted => STORE_SCHEMA.predicted_value_column,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Actual => PLOT_CONFIG.actual_label,
            Self::Predicted => PLOT_CONFIG.predicted_label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_suffix_round_trips_through_table_name() {
        let id = DatasetId::new("RELIANCE_NS");
        assert_eq!(id.prediction_table(), "RELIANCE_NS_predictions");
        assert_eq!(
            DatasetId::from_prediction_table("RELIANCE_NS_predictions"),
            Some(id)
        );
    }

    #[test]
    fn tables_without_suffix_are_not_prediction_tables() {
        assert_eq!(DatasetId::from_prediction_table("RELIANCE_NS"), None);
        assert_eq!(DatasetId::from_prediction_table("_predictions"), None);
        // Only the trailing suffix is stripped
        assert_eq!(
            DatasetId::from_prediction_table("A_predictions_predictions"),
            Some(DatasetId::new("A_predictions"))
        );
    }

    #[test]
    fn series_kind_picks_value_column() {
        assert_eq!(SeriesKind::Actual.value_column(), "Close");
        assert_eq!(SeriesKind::Predicted.value_column(), "Predicted_Close");
        assert_eq!(
            SeriesKind::Predicted.table_name(&DatasetId::new("ABC")),
            "ABC_predictions"
        );
    }
}
