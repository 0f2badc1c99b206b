use chrono::{DateTime, Local};
use smallvec::SmallVec;

use crate::core::{Candle, CoordinateMapper};
use crate::render::AxisTick;

pub const X_TICK_COUNT: usize = 4;
pub const X_TICK_LABEL_FORMAT: &str = "%d/%m/%Y";
pub const INVALID_DATE_LABEL: &str = "Invalid Date";

/// Samples up to four evenly spaced candles for time-axis labels.
///
/// The index step is `max(1, len / 4)` and indices are clamped to the last
/// candle, so short data sets repeat their final tick.
#[must_use]
pub fn generate_x_ticks(
    data: &[Candle],
    mapper: &CoordinateMapper,
) -> SmallVec<[AxisTick; X_TICK_COUNT]> {
    if data.is_empty() {
        return SmallVec::new();
    }

    let step = (data.len() / X_TICK_COUNT).max(1);
    (0..X_TICK_COUNT)
        .map(|i| {
            let candle = &data[(i * step).min(data.len() - 1)];
            AxisTick {
                x: mapper.scale_x(candle.timestamp),
                label: format_tick_label(candle.timestamp),
            }
        })
        .collect()
}

/// `dd/mm/yyyy` in the host time zone.
#[must_use]
pub fn format_tick_label(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0).map_or_else(
        || INVALID_DATE_LABEL.to_owned(),
        |time| {
            time.with_timezone(&Local)
                .format(X_TICK_LABEL_FORMAT)
                .to_string()
        },
    )
}
