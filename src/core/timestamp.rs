use chrono::{DateTime, Days, Months, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde_json::Value;

use crate::core::primitives::{local_datetime_to_epoch_seconds, local_midnight_epoch_seconds};

/// Numeric timestamps above this magnitude are treated as epoch milliseconds.
pub const MILLISECONDS_THRESHOLD: f64 = 1_000_000_000_000.0;

/// Date-time layouts interpreted as wall-clock time in the host time zone.
const LOCAL_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Timestamp field of an ingested record, before classification.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "Value")]
pub enum RawTimestamp {
    Number(f64),
    Text(String),
    /// Missing, `null`, or a JSON shape that can never be a timestamp.
    #[default]
    Unsupported,
}

impl From<Value> for RawTimestamp {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(number) => number.as_f64().map_or(Self::Unsupported, Self::Number),
            Value::String(text) => Self::Text(text),
            _ => Self::Unsupported,
        }
    }
}

impl From<f64> for RawTimestamp {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for RawTimestamp {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for RawTimestamp {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RawTimestamp {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Encoding a raw timestamp was recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampEncoding {
    /// Numeric epoch value, seconds or milliseconds.
    Epoch,
    /// String made only of ASCII digits.
    EpochDigits,
    /// `D{1,2}/M{1,2}/YYYY`.
    DayMonthYear,
    /// Anything else that might be a calendar date.
    CalendarText,
    Unsupported,
}

impl RawTimestamp {
    #[must_use]
    pub fn encoding(&self) -> TimestampEncoding {
        match self {
            Self::Number(_) => TimestampEncoding::Epoch,
            Self::Text(text) if is_all_digits(text) => TimestampEncoding::EpochDigits,
            Self::Text(text) if split_day_month_year(text).is_some() => {
                TimestampEncoding::DayMonthYear
            }
            Self::Text(_) => TimestampEncoding::CalendarText,
            Self::Unsupported => TimestampEncoding::Unsupported,
        }
    }
}

/// Converts any supported timestamp encoding to whole epoch seconds.
///
/// Returns `None` for anything that does not resolve to a finite,
/// non-negative instant. `None` is terminal for the record.
#[must_use]
pub fn normalize_timestamp(input: &RawTimestamp) -> Option<i64> {
    match (input.encoding(), input) {
        (TimestampEncoding::Epoch, RawTimestamp::Number(value)) => normalize_epoch(*value),
        (TimestampEncoding::EpochDigits, RawTimestamp::Text(text)) => {
            text.parse::<f64>().ok().and_then(normalize_epoch)
        }
        (TimestampEncoding::DayMonthYear, RawTimestamp::Text(text)) => {
            let (day, month, year) = split_day_month_year(text)?;
            let date = roll_over_calendar_date(day, month, year)?;
            local_midnight_epoch_seconds(date).filter(|seconds| *seconds >= 0)
        }
        (TimestampEncoding::CalendarText, RawTimestamp::Text(text)) => {
            parse_calendar_text(text).filter(|seconds| *seconds >= 0)
        }
        _ => None,
    }
}

/// Applies the milliseconds heuristic to a numeric epoch value.
#[must_use]
pub fn normalize_epoch(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }

    let seconds = if value > MILLISECONDS_THRESHOLD {
        (value / 1000.0).floor()
    } else {
        value.floor()
    };

    if seconds < 0.0 || seconds >= i64::MAX as f64 {
        return None;
    }
    Some(seconds as i64)
}

fn is_all_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|byte| byte.is_ascii_digit())
}

fn split_day_month_year(text: &str) -> Option<(u32, u32, i32)> {
    let mut parts = text.split('/');
    let day = parts.next()?;
    let month = parts.next()?;
    let year = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let shape_ok = (1..=2).contains(&day.len())
        && (1..=2).contains(&month.len())
        && year.len() == 4
        && [day, month, year].iter().all(|part| is_all_digits(part));
    if !shape_ok {
        return None;
    }

    Some((day.parse().ok()?, month.parse().ok()?, year.parse().ok()?))
}

/// Builds a calendar date, letting out-of-range day/month components spill
/// into neighbouring months and years (day 0 is the last day of the
/// previous month, month 13 is January of the next year).
fn roll_over_calendar_date(day: u32, month: u32, year: i32) -> Option<NaiveDate> {
    let first_of_year = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let first_of_month = match month {
        0 => first_of_year.checked_sub_months(Months::new(1))?,
        _ => first_of_year.checked_add_months(Months::new(month - 1))?,
    };
    match day {
        0 => first_of_month.checked_sub_days(Days::new(1)),
        _ => first_of_month.checked_add_days(Days::new(u64::from(day - 1))),
    }
}

fn parse_calendar_text(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(time) = DateTime::parse_from_rfc3339(text) {
        return Some(time.timestamp());
    }
    if let Ok(time) = DateTime::parse_from_rfc2822(text) {
        return Some(time.timestamp());
    }
    // Date-only ISO strings denote UTC midnight.
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp());
    }
    for format in LOCAL_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return local_datetime_to_epoch_seconds(naive);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y/%m/%d") {
        return local_midnight_epoch_seconds(date);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_encodings() {
        assert_eq!(RawTimestamp::from(1.0).encoding(), TimestampEncoding::Epoch);
        assert_eq!(
            RawTimestamp::from("1700000000").encoding(),
            TimestampEncoding::EpochDigits
        );
        assert_eq!(
            RawTimestamp::from("1/2/2024").encoding(),
            TimestampEncoding::DayMonthYear
        );
        assert_eq!(
            RawTimestamp::from("2024-02-01").encoding(),
            TimestampEncoding::CalendarText
        );
        assert_eq!(
            RawTimestamp::from("1/2/24").encoding(),
            TimestampEncoding::CalendarText
        );
        assert_eq!(
            RawTimestamp::Unsupported.encoding(),
            TimestampEncoding::Unsupported
        );
    }

    #[test]
    fn day_month_year_split_rejects_wrong_shapes() {
        assert_eq!(split_day_month_year("31/01/2024"), Some((31, 1, 2024)));
        assert_eq!(split_day_month_year("123/01/2024"), None);
        assert_eq!(split_day_month_year("1/1/2024/1"), None);
        assert_eq!(split_day_month_year("a/1/2024"), None);
        assert_eq!(split_day_month_year("1/1/202"), None);
    }

    #[test]
    fn calendar_rollover_follows_overflowing_components() {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("valid date");
        assert_eq!(roll_over_calendar_date(32, 1, 2024), Some(date(2024, 2, 1)));
        assert_eq!(roll_over_calendar_date(1, 13, 2024), Some(date(2025, 1, 1)));
        assert_eq!(roll_over_calendar_date(0, 3, 2024), Some(date(2024, 2, 29)));
        assert_eq!(roll_over_calendar_date(1, 0, 2024), Some(date(2023, 12, 1)));
    }

    #[test]
    fn epoch_heuristic_floors_fractional_values() {
        assert_eq!(normalize_epoch(1_700_000_000.75), Some(1_700_000_000));
        assert_eq!(normalize_epoch(1_700_000_000_999.0), Some(1_700_000_000));
        assert_eq!(normalize_epoch(-5.0), None);
        assert_eq!(normalize_epoch(f64::NAN), None);
    }
}
