use chrono::{NaiveDate, NaiveDateTime};

/// One timestamped value. `timestamp` is timezone-naive by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub timestamp: NaiveDateTime,
    pub value: f64,
}

impl Observation {
    pub fn new(timestamp: NaiveDateTime, value: f64) -> Self {
        Self { timestamp, value }
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// Output of one table read. Rows that could not be coerced are counted, not returned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedSeries {
    /// In store order (timestamp descending)
    pub observations: Vec<Observation>,
    pub unparseable_rows: usize,
}

impl LoadedSeries {
    pub fn total_rows(&self) -> usize {
        self.observations.len() + self.unparseable_rows
    }
}
