use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Resolves a wall-clock time in the host time zone to epoch seconds.
///
/// Ambiguous local times (DST fold) resolve to the earlier instant; times
/// that do not exist locally (DST gap) yield `None`.
#[must_use]
pub fn local_datetime_to_epoch_seconds(naive: NaiveDateTime) -> Option<i64> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|time| time.timestamp())
}

#[must_use]
pub fn local_midnight_epoch_seconds(date: NaiveDate) -> Option<i64> {
    local_datetime_to_epoch_seconds(date.and_hms_opt(0, 0, 0)?)
}

/// Calendar date of an epoch-seconds timestamp in the host time zone.
#[must_use]
pub fn epoch_seconds_to_local_date(timestamp: i64) -> Option<NaiveDate> {
    let utc = DateTime::from_timestamp(timestamp, 0)?;
    Some(utc.with_timezone(&Local).date_naive())
}
