use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

pub type AppInstant = std::time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const STANDARD_DATE_FORMAT: &str = "%Y-%m-%d";

    // Tried in order. Offsets first: a naive pattern would reject the trailing offset anyway.
    const OFFSET_FORMATS: &[&str] = &[
        "%Y-%m-%d %H:%M:%S%.f%:z",
        "%Y-%m-%d %H:%M:%S%:z",
        "%Y-%m-%d %H:%M:%S%z",
        "%Y-%m-%dT%H:%M:%S%.f%:z",
        "%Y-%m-%dT%H:%M:%S%:z",
        "%Y-%m-%dT%H:%M:%S%z",
        "%Y-%m-%d %H:%M%:z",
        "%Y-%m-%d %H:%M%z",
    ];
    const NAIVE_FORMATS: &[&str] = &[
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
    ];

    /// Coerce a stored timestamp string to a naive wall-clock time.
    /// Any UTC offset is discarded without converting, so `09:15+05:30` stays `09:15`.
    pub fn parse_naive(text: &str) -> Option<NaiveDateTime> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Some(dt.naive_local());
        }
        for fmt in Self::OFFSET_FORMATS {
            if let Ok(dt) = DateTime::parse_from_str(text, fmt) {
                return Some(dt.naive_local());
            }
        }
        // "Z" suffix outside strict RFC 3339 (e.g. space separator)
        if let Some(stripped) = text.strip_suffix('Z') {
            if let Some(naive) = Self::parse_plain(stripped) {
                return Some(naive);
            }
        }
        Self::parse_plain(text)
    }

    fn parse_plain(text: &str) -> Option<NaiveDateTime> {
        for fmt in Self::NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
                return Some(naive);
            }
        }
        NaiveDate::parse_from_str(text, Self::STANDARD_DATE_FORMAT)
            .ok()
            .map(|date| date.and_time(NaiveTime::MIN))
    }

    pub fn format_date(date: NaiveDate) -> String {
        date.format(Self::STANDARD_DATE_FORMAT).to_string()
    }
}

// Time Helper functions

/// Epoch milliseconds read as a naive (UTC wall clock) timestamp.
pub fn epoch_ms_to_naive(epoch_ms: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(epoch_ms).map(|dt| dt.naive_utc())
}

/// Plot X coordinate for a naive timestamp.
pub fn naive_to_epoch_ms(ts: NaiveDateTime) -> i64 {
    ts.and_utc().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn offsets_are_stripped_keeping_wall_clock() {
        assert_eq!(
            TimeUtils::parse_naive("2024-01-02 09:15:00+05:30"),
            Some(at(9, 15, 0))
        );
        assert_eq!(
            TimeUtils::parse_naive("2024-01-02T09:15:00+0530"),
            Some(at(9, 15, 0))
        );
        assert_eq!(
            TimeUtils::parse_naive("2024-01-02T15:30:00Z"),
            Some(at(15, 30, 0))
        );
        assert_eq!(
            TimeUtils::parse_naive("2024-01-02 15:30:00Z"),
            Some(at(15, 30, 0))
        );
    }

    #[test]
    fn naive_variants_parse() {
        assert_eq!(TimeUtils::parse_naive("2024-01-02 09:15:00"), Some(at(9, 15, 0)));
        assert_eq!(TimeUtils::parse_naive("2024-01-02 09:15"), Some(at(9, 15, 0)));
        assert_eq!(TimeUtils::parse_naive(" 2024-01-02T10:00:05 "), Some(at(10, 0, 5)));
        assert_eq!(TimeUtils::parse_naive("2024-01-02"), Some(at(0, 0, 0)));
        assert_eq!(
            TimeUtils::parse_naive("2024-01-02 09:15:00.250").map(|t| t.and_utc().timestamp_subsec_millis()),
            Some(250)
        );
    }

    #[test]
    fn garbage_does_not_parse() {
        assert_eq!(TimeUtils::parse_naive(""), None);
        assert_eq!(TimeUtils::parse_naive("not a date"), None);
        assert_eq!(TimeUtils::parse_naive("2024-13-45 09:15:00"), None);
    }

    #[test]
    fn epoch_ms_round_trip() {
        let ts = at(9, 15, 0);
        assert_eq!(epoch_ms_to_naive(naive_to_epoch_ms(ts)), Some(ts));
    }
}
