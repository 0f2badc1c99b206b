use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(360, 300)
    }
}

/// Canonical OHLCV record with a whole-second epoch timestamp.
///
/// Price ordering (`low <= open/close <= high`) is not enforced: upstream
/// feeds may violate it and values are carried through as given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    #[must_use]
    pub fn new(timestamp: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Converts strongly-typed temporal/decimal input into a candle.
    pub fn from_decimal_time(
        time: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: Decimal,
    ) -> ChartResult<Self> {
        let timestamp = time.timestamp();
        if timestamp < 0 {
            return Err(ChartError::InvalidData(
                "candle time must not precede the unix epoch".to_owned(),
            ));
        }

        Ok(Self::new(
            timestamp,
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
            decimal_to_f64(volume, "volume")?,
        ))
    }

    /// Volume as summed by aggregation: missing or non-finite counts as zero.
    #[must_use]
    pub fn volume_or_zero(self) -> f64 {
        if self.volume.is_finite() {
            self.volume
        } else {
            0.0
        }
    }
}

/// Time domain of the current data set in epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XBounds {
    pub min_x: f64,
    pub max_x: f64,
}

impl Default for XBounds {
    fn default() -> Self {
        Self {
            min_x: 0.0,
            max_x: 1.0,
        }
    }
}

/// Value domain spanned by every visible series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YBounds {
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for YBounds {
    fn default() -> Self {
        Self {
            min_y: 0.0,
            max_y: 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl ChartBounds {
    #[must_use]
    pub fn from_parts(x: XBounds, y: YBounds) -> Self {
        Self {
            min_x: x.min_x,
            max_x: x.max_x,
            min_y: y.min_y,
            max_y: y.max_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_input_converts_to_candle() {
        let time = DateTime::from_timestamp(1_704_067_200, 0).expect("valid time");
        let candle = Candle::from_decimal_time(
            time,
            Decimal::new(10_050, 2),
            Decimal::new(102, 0),
            Decimal::new(995, 1),
            Decimal::new(101, 0),
            Decimal::new(2_500, 0),
        )
        .expect("valid candle");

        assert_eq!(candle.timestamp, 1_704_067_200);
        assert_eq!(candle.open, 100.5);
        assert_eq!(candle.low, 99.5);
        assert_eq!(candle.volume, 2_500.0);
    }

    #[test]
    fn pre_epoch_decimal_time_is_rejected() {
        let time = DateTime::from_timestamp(-60, 0).expect("valid time");
        let zero = Decimal::ZERO;
        assert!(matches!(
            Candle::from_decimal_time(time, zero, zero, zero, zero, zero),
            Err(ChartError::InvalidData(_))
        ));
    }

    #[test]
    fn non_finite_volume_counts_as_zero() {
        let candle = Candle::new(0, 1.0, 1.0, 1.0, 1.0, f64::NAN);
        assert_eq!(candle.volume_or_zero(), 0.0);
    }
}
