//! Range Selector: bounds come from the predicted series only.

use {
    crate::{
        domain::{DatasetId, DateRange, Observation},
        errors::PipelineError,
    },
    itertools::Itertools,
};

/// Calendar-date extent of a series. None when empty.
pub fn date_bounds(series: &[Observation]) -> Option<DateRange> {
    series
        .iter()
        .map(Observation::date)
        .minmax()
        .into_option()
        .map(|(start, end)| DateRange::new(start, end))
}

/// Bounds for the range control, derived from the normalized PREDICTED series.
pub fn select_range(
    dataset: &DatasetId,
    normalized_predicted: &[Observation],
) -> Result<DateRange, PipelineError> {
    date_bounds(normalized_predicted).ok_or_else(|| PipelineError::NoDataToRange(dataset.clone()))
}

/// Keep observations whose calendar date lies inside `range` (inclusive). Time of day is ignored.
pub fn apply_range(series: &[Observation], range: &DateRange) -> Vec<Observation> {
    series
        .iter()
        .filter(|obs| range.contains(obs.date()))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        chrono::{Datelike, NaiveDate, NaiveDateTime},
        proptest::prelude::*,
    };

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn at(day: u32, h: u32) -> NaiveDateTime {
        d(day).and_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn bounds_span_min_to_max_date() {
        let series = vec![
            Observation::new(at(5, 10), 1.0),
            Observation::new(at(2, 15), 2.0),
            Observation::new(at(9, 9), 3.0),
        ];
        let range = select_range(&DatasetId::new("ABC"), &series).unwrap();
        assert_eq!(range, DateRange::new(d(2), d(9)));
    }

    #[test]
    fn empty_predicted_series_has_no_range() {
        let err = select_range(&DatasetId::new("ABC"), &[]).unwrap_err();
        assert!(matches!(err, PipelineError::NoDataToRange(ref id) if id.as_str() == "ABC"));
    }

    #[test]
    fn apply_range_compares_dates_inclusively() {
        let series = vec![
            Observation::new(at(1, 15), 1.0),
            Observation::new(at(2, 9), 2.0),
            Observation::new(at(3, 15), 3.0),
            Observation::new(at(4, 9), 4.0),
        ];
        let kept: Vec<f64> = apply_range(&series, &DateRange::new(d(2), d(3)))
            .iter()
            .map(|o| o.value)
            .collect();
        assert_eq!(kept, vec![2.0, 3.0]);
    }

    proptest! {
        #[test]
        fn widening_never_removes_observations(
            days in prop::collection::vec(1u32..28, 0..40),
            a in 1u32..28, b in 1u32..28, widen_lo in 0u32..5, widen_hi in 0u32..5,
        ) {
            let series: Vec<Observation> = days.iter().map(|&day| Observation::new(at(day, 10), day as f64)).collect();
            let narrow = DateRange::new(d(a), d(b));
            let wide = DateRange::new(
                d(narrow.start.day().saturating_sub(widen_lo).max(1)),
                d((narrow.end.day() + widen_hi).min(28)),
            );
            let narrow_out = apply_range(&series, &narrow);
            let wide_out = apply_range(&series, &wide);
            for o in &narrow_out {
                prop_assert!(wide_out.contains(o));
            }
        }
    }
}
