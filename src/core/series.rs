use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{Candle, CoordinateMapper};

/// The four price series a chart can draw, in legend order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKey {
    Open,
    High,
    Low,
    Close,
}

impl SeriesKey {
    pub const ALL: [SeriesKey; 4] = [Self::Open, Self::High, Self::Low, Self::Close];

    #[must_use]
    pub fn value_of(self, candle: &Candle) -> f64 {
        match self {
            Self::Open => candle.open,
            Self::High => candle.high,
            Self::Low => candle.low,
            Self::Close => candle.close,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::High => "high",
            Self::Low => "low",
            Self::Close => "close",
        }
    }
}

/// Which series are toggled on. Owned by the host, read by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesVisibility {
    pub open: bool,
    pub high: bool,
    pub low: bool,
    pub close: bool,
}

impl Default for SeriesVisibility {
    fn default() -> Self {
        Self {
            open: true,
            high: false,
            low: false,
            close: true,
        }
    }
}

impl SeriesVisibility {
    #[must_use]
    pub fn all() -> Self {
        Self {
            open: true,
            high: true,
            low: true,
            close: true,
        }
    }

    #[must_use]
    pub fn none() -> Self {
        Self {
            open: false,
            high: false,
            low: false,
            close: false,
        }
    }

    #[must_use]
    pub fn only(key: SeriesKey) -> Self {
        let mut visibility = Self::none();
        visibility.set(key, true);
        visibility
    }

    #[must_use]
    pub fn is_visible(self, key: SeriesKey) -> bool {
        match key {
            SeriesKey::Open => self.open,
            SeriesKey::High => self.high,
            SeriesKey::Low => self.low,
            SeriesKey::Close => self.close,
        }
    }

    pub fn set(&mut self, key: SeriesKey, visible: bool) {
        match key {
            SeriesKey::Open => self.open = visible,
            SeriesKey::High => self.high = visible,
            SeriesKey::Low => self.low = visible,
            SeriesKey::Close => self.close = visible,
        }
    }

    /// Flips one series and returns its new visibility.
    pub fn toggle(&mut self, key: SeriesKey) -> bool {
        let visible = !self.is_visible(key);
        self.set(key, visible);
        visible
    }

    #[must_use]
    pub fn none_visible(self) -> bool {
        SeriesKey::ALL.iter().all(|key| !self.is_visible(*key))
    }

    pub fn visible_keys(self) -> impl Iterator<Item = SeriesKey> {
        SeriesKey::ALL
            .into_iter()
            .filter(move |key| self.is_visible(*key))
    }
}

/// Cosmetic color identifiers per series, as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesColors {
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
}

impl Default for SeriesColors {
    fn default() -> Self {
        Self {
            open: "#000066".to_owned(),
            high: "#e57399".to_owned(),
            low: "#2cd5c4".to_owned(),
            close: "#9d75e5".to_owned(),
        }
    }
}

impl SeriesColors {
    #[must_use]
    pub fn color_of(&self, key: SeriesKey) -> &str {
        match key {
            SeriesKey::Open => &self.open,
            SeriesKey::High => &self.high,
            SeriesKey::Low => &self.low,
            SeriesKey::Close => &self.close,
        }
    }
}

/// One series ready for path generation: `(pixel_x, value)` pairs in data order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub key: SeriesKey,
    pub color: String,
    pub values: Vec<(f64, f64)>,
}

/// Builds all four series for the current data set.
///
/// Every series is produced regardless of visibility; the frame filters
/// them for the legend. Empty data yields no series at all.
#[must_use]
pub fn create_chart_series(
    data: &[Candle],
    mapper: &CoordinateMapper,
    colors: &SeriesColors,
) -> Vec<LineSeries> {
    if data.is_empty() {
        return Vec::new();
    }

    SeriesKey::ALL
        .into_iter()
        .map(|key| LineSeries {
            key,
            color: colors.color_of(key).to_owned(),
            values: project_series(data, mapper, key),
        })
        .collect()
}

fn project_series(data: &[Candle], mapper: &CoordinateMapper, key: SeriesKey) -> Vec<(f64, f64)> {
    #[cfg(feature = "parallel-projection")]
    {
        data.par_iter()
            .map(|candle| (mapper.scale_x(candle.timestamp), key.value_of(candle)))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        data.iter()
            .map(|candle| (mapper.scale_x(candle.timestamp), key.value_of(candle)))
            .collect()
    }
}
