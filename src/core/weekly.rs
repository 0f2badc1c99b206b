use chrono::{Datelike, Days, NaiveDate};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::Candle;
use crate::core::primitives::epoch_seconds_to_local_date;

/// ISO-8601 week-of-year for a calendar date.
///
/// The date is moved to the Thursday of its Monday-based week (Sunday counts
/// as day 7) and the week index is taken from that Thursday's day-of-year,
/// so days near a year boundary land in the week that owns the Thursday.
#[must_use]
pub fn iso_week_number(date: NaiveDate) -> u32 {
    let weekday = date.weekday().number_from_monday();
    let thursday = if weekday <= 4 {
        date.checked_add_days(Days::new(u64::from(4 - weekday)))
    } else {
        date.checked_sub_days(Days::new(u64::from(weekday - 4)))
    };
    let Some(thursday) = thursday else {
        return date.iso_week().week();
    };
    (thursday.ordinal0() + 1).div_ceil(7)
}

/// ISO week of a timestamp, evaluated on its local calendar date.
#[must_use]
pub fn week_number_of(timestamp: i64) -> Option<u32> {
    epoch_seconds_to_local_date(timestamp).map(iso_week_number)
}

/// Folds one week's candles into a single weekly candle.
///
/// Open comes from the earliest candle and close from the latest; high/low
/// are the extremes, volume is the sum with non-finite volumes counted as
/// zero. A `NaN` high or low anywhere in the bucket makes the weekly
/// extreme `NaN`. Returns `None` for an empty bucket.
#[must_use]
pub fn aggregate_week(bucket: &[Candle]) -> Option<Candle> {
    let first = bucket.iter().min_by_key(|candle| candle.timestamp)?;
    let last = bucket.iter().max_by_key(|candle| candle.timestamp)?;

    let high = bucket.iter().map(|candle| candle.high).reduce(nan_max)?;
    let low = bucket.iter().map(|candle| candle.low).reduce(nan_min)?;
    let volume = bucket.iter().map(|candle| candle.volume_or_zero()).sum();

    Some(Candle {
        timestamp: first.timestamp,
        open: first.open,
        high,
        low,
        close: last.close,
        volume,
    })
}

// `f64::max`/`f64::min` drop NaN operands; the weekly extremes must keep them.
fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

/// Resamples daily candles into weekly candles, sorted by timestamp.
///
/// Input does not need to be sorted. Consecutive candles (in time order)
/// sharing an ISO week number form one bucket; only the week number is
/// compared, not the year.
#[must_use]
pub fn aggregate_to_weekly(candles: &[Candle]) -> Vec<Candle> {
    if candles.is_empty() {
        return Vec::new();
    }

    let mut sorted = candles.to_vec();
    sorted.sort_unstable_by_key(|candle| candle.timestamp);

    let mut weekly = Vec::new();
    let mut bucket: SmallVec<[Candle; 7]> = SmallVec::new();
    let mut last_week: Option<Option<u32>> = None;

    for candle in sorted {
        let week = week_number_of(candle.timestamp);
        if last_week.is_some_and(|last| last != week) && !bucket.is_empty() {
            weekly.extend(aggregate_week(&bucket));
            bucket.clear();
        }
        bucket.push(candle);
        last_week = Some(week);
    }
    weekly.extend(aggregate_week(&bucket));

    debug!(
        daily_count = candles.len(),
        weekly_count = weekly.len(),
        "aggregated weekly candles"
    );
    weekly
}
