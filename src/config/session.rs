//! Market session window and the store table/column conventions.

use chrono::NaiveTime;

/// Daily time-of-day admission window. Both ends inclusive.
pub struct MarketSession {
    pub open_hour: u32,
    pub open_minute: u32,
    pub close_hour: u32,
    pub close_minute: u32,
}

impl MarketSession {
    pub fn open(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.open_hour, self.open_minute, 0).unwrap_or(NaiveTime::MIN)
    }

    pub fn close(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.close_hour, self.close_minute, 0).unwrap_or(NaiveTime::MIN)
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        time >= self.open() && time <= self.close()
    }
}

pub const MARKET_SESSION: MarketSession = MarketSession {
    open_hour: 9,
    open_minute: 15,
    close_hour: 15,
    close_minute: 30,
};

/// Naming conventions shared by the actual-values store and the predictions store.
pub struct StoreSchema {
    /// Prediction tables are named `<identifier><suffix>`
    pub prediction_suffix: &'static str,
    pub datetime_column: &'static str,
    pub actual_value_column: &'static str,
    pub predicted_value_column: &'static str,
}

pub const STORE_SCHEMA: StoreSchema = StoreSchema {
    prediction_suffix: "_predictions",
    datetime_column: "Datetime",
    actual_value_column: "Close",
    predicted_value_column: "Predicted_Close",
};
