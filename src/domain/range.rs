use {
    crate::utils::TimeUtils,
    chrono::{Days, NaiveDate},
    std::fmt,
};

/// Inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Re-orders the ends so `start <= end` always holds.
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of calendar days covered, both ends counted.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Pull a user range back inside `bounds`.
    pub fn clamp_to(&self, bounds: &DateRange) -> DateRange {
        let clamp = |d: NaiveDate| d.clamp(bounds.start, bounds.end);
        DateRange::new(clamp(self.start), clamp(self.end))
    }

    /// Day offset from `start` (slider value) back to a date.
    pub fn date_at_offset(&self, offset: i64) -> NaiveDate {
        let offset = offset.clamp(0, self.days() - 1) as u64;
        self.start
            .checked_add_days(Days::new(offset))
            .unwrap_or(self.end)
    }

    pub fn offset_of(&self, date: NaiveDate) -> i64 {
        (date - self.start).num_days().clamp(0, self.days() - 1)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.format(TimeUtils::STANDARD_DATE_FORMAT),
            self.end.format(TimeUtils::STANDARD_DATE_FORMAT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn new_orders_the_ends() {
        let r = DateRange::new(d(2024, 1, 5), d(2024, 1, 2));
        assert_eq!(r.start, d(2024, 1, 2));
        assert_eq!(r.end, d(2024, 1, 5));
        assert_eq!(r.days(), 4);
    }

    #[test]
    fn clamp_pulls_range_inside_bounds() {
        let bounds = DateRange::new(d(2024, 1, 2), d(2024, 1, 10));
        let wide = DateRange::new(d(2023, 12, 1), d(2024, 2, 1));
        assert_eq!(wide.clamp_to(&bounds), bounds);

        let outside = DateRange::new(d(2024, 3, 1), d(2024, 3, 5));
        assert_eq!(
            outside.clamp_to(&bounds),
            DateRange::new(d(2024, 1, 10), d(2024, 1, 10))
        );
    }

    #[test]
    fn offsets_map_to_dates_and_back() {
        let bounds = DateRange::new(d(2024, 1, 30), d(2024, 2, 2));
        assert_eq!(bounds.date_at_offset(0), d(2024, 1, 30));
        assert_eq!(bounds.date_at_offset(2), d(2024, 2, 1));
        assert_eq!(bounds.date_at_offset(99), d(2024, 2, 2));
        assert_eq!(bounds.offset_of(d(2024, 2, 1)), 2);
        assert_eq!(bounds.to_string(), "2024-01-30 to 2024-02-02");
    }
}
