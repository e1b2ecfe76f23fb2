use anyhow::{Context, Result};
use chrono::{Datelike, Days, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use clap::Parser;
use rusqlite::{Connection, params};
use std::{fs, path::Path};
use prediction_lens::config::STORE_SCHEMA;
use prediction_lens::{STORE_DEFAULTS, StoreConfig};

// Tickers written to both stores (these show up in the dropdown)
const COMMON_TICKERS: &[(&str, f64)] = &[("NIFTY50", 21_500.0), ("RELIANCE", 2_900.0), ("TCS", 3_800.0)];
// Only in one store each, so they must NOT show up
const ACTUAL_ONLY: &[(&str, f64)] = &[("INFY", 1_600.0)];
const PREDICTION_ONLY: &[(&str, f64)] = &[("HDFCBANK", 1_450.0)];

const BAR_MINUTES: i64 = 5;

#[derive(Parser, Debug)]
#[command(about = "Write a pair of synthetic SQLite stores for trying the dashboard")]
struct DemoArgs {
    #[arg(long, default_value = STORE_DEFAULTS.actual_store_location)]
    actual_db: String,
    #[arg(long, default_value = STORE_DEFAULTS.prediction_store_location)]
    prediction_db: String,
    /// Calendar days of history ending at --end
    #[arg(long, default_value_t = 30)]
    days: u64,
    #[arg(long, default_value = "2024-03-28")]
    end: NaiveDate,
}

/// Deterministic wobble so reruns write identical files
fn noise(seed: u64) -> f64 {
    let mut x = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
    x ^= x >> 33;
    (x % 10_000) as f64 / 10_000.0 - 0.5
}

fn trading_days(end: NaiveDate, days: u64) -> Vec<NaiveDate> {
    let start = end.checked_sub_days(Days::new(days.saturating_sub(1))).unwrap_or(end);
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .collect()
}

/// 09:00 to 15:45: a few bars either side of the session on purpose.
fn day_bars(day: NaiveDate) -> Vec<NaiveDateTime> {
    let first = day.and_time(NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN));
    let last = day.and_time(NaiveTime::from_hms_opt(15, 45, 0).unwrap_or(NaiveTime::MIN));
    std::iter::successors(Some(first), |t| Some(*t + Duration::minutes(BAR_MINUTES)))
        .take_while(|t| *t <= last)
        .collect()
}

fn price_path(base: f64, bars: &[NaiveDateTime], salt: u64) -> Vec<f64> {
    let mut price = base;
    bars.iter()
        .enumerate()
        .map(|(i, _)| {
            price *= 1.0 + noise(salt.wrapping_add(i as u64)) * 0.004;
            price
        })
        .collect()
}

fn recreate(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to replace {}", path.display()))?;
    }
    Connection::open(path).with_context(|| format!("Failed to create {}", path.display()))
}

fn write_actual(conn: &mut Connection, ticker: &str, base: f64, bars: &[NaiveDateTime]) -> Result<usize> {
    let tx = conn.transaction()?;
    tx.execute_batch(&format!(
        r#"CREATE TABLE "{ticker}" ("{dt}" TEXT, "Open" REAL, "High" REAL, "Low" REAL, "{close}" REAL, "Volume" INTEGER)"#,
        dt = STORE_SCHEMA.datetime_column,
        close = STORE_SCHEMA.actual_value_column,
    ))?;
    let closes = price_path(base, bars, base as u64);
    {
        let mut stmt = tx.prepare(&format!(
            r#"INSERT INTO "{ticker}" VALUES (?1, ?2, ?3, ?4, ?5, ?6)"#
        ))?;
        for (i, (ts, close)) in bars.iter().zip(&closes).enumerate() {
            // Exchange-local offset in the text, as the vendor feed writes it
            let stamp = format!("{}+05:30", ts.format("%Y-%m-%d %H:%M:%S"));
            let spread = close * 0.001;
            stmt.execute(params![stamp, close - spread * 0.5, close + spread, close - spread, close, 1_000 + (i % 97) as i64])?;
        }
        // A re-sent bar: same timestamp, corrected close. Last one wins.
        if let (Some(ts), Some(close)) = (bars.get(10), closes.get(10)) {
            let stamp = format!("{}+05:30", ts.format("%Y-%m-%d %H:%M:%S"));
            stmt.execute(params![stamp, close, close, close, close * 1.0005, 0])?;
        }
    }
    tx.commit()?;
    Ok(bars.len() + 1)
}

fn write_predictions(conn: &mut Connection, ticker: &str, base: f64, bars: &[NaiveDateTime]) -> Result<usize> {
    let table = format!("{}{}", ticker, STORE_SCHEMA.prediction_suffix);
    let tx = conn.transaction()?;
    tx.execute_batch(&format!(
        r#"CREATE TABLE "{table}" ("{dt}" TEXT, "{pred}" REAL)"#,
        dt = STORE_SCHEMA.datetime_column,
        pred = STORE_SCHEMA.predicted_value_column,
    ))?;
    let predicted = price_path(base, bars, base as u64 + 7);
    {
        let mut stmt = tx.prepare(&format!(r#"INSERT INTO "{table}" VALUES (?1, ?2)"#))?;
        for (i, (ts, value)) in bars.iter().zip(&predicted).enumerate() {
            let stamp = ts.format("%Y-%m-%d %H:%M:%S").to_string();
            // Every so often the model wrote garbage
            if i % 211 == 0 {
                stmt.execute(params![stamp, "N/A"])?;
            } else {
                stmt.execute(params![stamp, value])?;
            }
        }
    }
    tx.commit()?;
    Ok(bars.len())
}

fn main() -> Result<()> {
    // 1. Setup Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = DemoArgs::parse();
    let config = StoreConfig::new(&args.actual_db, &args.prediction_db);

    // 2. Calendar
    let days = trading_days(args.end, args.days);
    if days.is_empty() {
        anyhow::bail!("No trading days in the last {} days before {}", args.days, args.end);
    }
    let all_bars: Vec<NaiveDateTime> = days.iter().flat_map(|d| day_bars(*d)).collect();
    // Predictions only cover the later part of the history
    let predicted_from = days[days.len() / 3];
    let predicted_bars: Vec<NaiveDateTime> =
        all_bars.iter().copied().filter(|t| t.date() >= predicted_from).collect();

    log::info!(
        "🚀 Building demo stores: {} trading days, predictions from {}",
        days.len(),
        predicted_from
    );

    // 3. Actual-values store
    let mut actual = recreate(&config.actual_store_location)?;
    for &(ticker, base) in COMMON_TICKERS.iter().chain(ACTUAL_ONLY) {
        let rows = write_actual(&mut actual, ticker, base, &all_bars)
            .with_context(|| format!("Failed writing actual table {}", ticker))?;
        log::info!("   {} -> {} rows", ticker, rows);
    }

    // 4. Predictions store
    let mut predictions = recreate(&config.prediction_store_location)?;
    for &(ticker, base) in COMMON_TICKERS.iter().chain(PREDICTION_ONLY) {
        let rows = write_predictions(&mut predictions, ticker, base, &predicted_bars)
            .with_context(|| format!("Failed writing prediction table {}", ticker))?;
        log::info!("   {}{} -> {} rows", ticker, STORE_SCHEMA.prediction_suffix, rows);
    }

    log::info!("✅ Success!");
    log::info!(
        "Run: prediction-lens --actual-db {} --prediction-db {}",
        config.actual_store_location.display(),
        config.prediction_store_location.display()
    );

    Ok(())
}
