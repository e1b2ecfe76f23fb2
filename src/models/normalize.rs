//! Series normalization: coerce, dedupe, restrict to session hours.
//!
//! Coercion happens per row while a table is read (see `coerce_row`), so every
//! `Observation` is already parsed and timezone-naive by the time `normalize` sees it.

use {
    crate::{config::MARKET_SESSION, domain::Observation, utils::TimeUtils},
    chrono::NaiveDateTime,
    std::collections::HashSet,
};

/// A single stored cell, independent of the store backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue<'a> {
    Null,
    Integer(i64),
    Real(f64),
    Text(&'a str),
}

/// Strings go through the text parser (offsets dropped); numbers are epoch milliseconds.
/// Note: pandas-written integer datetimes would be epoch nanoseconds; stores here carry ms.
pub fn coerce_timestamp(raw: RawValue<'_>) -> Option<NaiveDateTime> {
    match raw {
        RawValue::Text(text) => TimeUtils::parse_naive(text),
        RawValue::Integer(ms) => crate::utils::epoch_ms_to_naive(ms),
        RawValue::Real(ms) if ms.is_finite() => crate::utils::epoch_ms_to_naive(ms as i64),
        _ => None,
    }
}

pub fn coerce_value(raw: RawValue<'_>) -> Option<f64> {
    let value = match raw {
        RawValue::Integer(v) => v as f64,
        RawValue::Real(v) => v,
        RawValue::Text(text) => text.trim().parse::<f64>().ok()?,
        RawValue::Null => return None,
    };
    value.is_finite().then_some(value)
}

/// None means the row is unparseable and must be dropped.
pub fn coerce_row(datetime: RawValue<'_>, value: RawValue<'_>) -> Option<Observation> {
    Some(Observation::new(
        coerce_timestamp(datetime)?,
        coerce_value(value)?,
    ))
}

/// Dedupe by timestamp (keep LAST occurrence in input order), then drop anything outside the session window.
/// Surviving rows keep their relative input order.
pub fn normalize(series: &[Observation]) -> Vec<Observation> {
    let deduped = dedupe_keep_last(series);
    restrict_to_session(&deduped)
}

/// Walk backwards so the first sighting of a timestamp is its last occurrence.
fn dedupe_keep_last(series: &[Observation]) -> Vec<Observation> {
    let mut seen = HashSet::with_capacity(series.len());
    let mut kept: Vec<Observation> = series
        .iter()
        .rev()
        .filter(|obs| seen.insert(obs.timestamp))
        .copied()
        .collect();
    kept.reverse();
    kept
}

fn restrict_to_session(series: &[Observation]) -> Vec<Observation> {
    series
        .iter()
        .filter(|obs| MARKET_SESSION.contains(obs.timestamp.time()))
        .copied()
        .collect()
}
