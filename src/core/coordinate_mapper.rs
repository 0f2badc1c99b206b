use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Candle, ChartBounds, LinearScale, SeriesVisibility, Viewport, XBounds, YBounds};

/// Fraction of the raw value range added above and below the Y domain.
pub const Y_RANGE_PADDING_RATIO: f64 = 0.1;

/// Pixel geometry the mapper projects into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl PlotArea {
    #[must_use]
    pub fn new(viewport: Viewport, padding: f64) -> Self {
        Self {
            width: f64::from(viewport.width),
            height: f64::from(viewport.height),
            padding,
        }
    }

    /// Horizontal pixel range the time axis spans.
    #[must_use]
    pub fn x_range(self) -> (f64, f64) {
        (self.padding, self.width - self.padding)
    }

    /// Vertical extent of the value axis, measured upward from the plot floor.
    #[must_use]
    pub fn y_range(self) -> (f64, f64) {
        (0.0, self.height - self.padding * 2.0)
    }
}

/// Time extent of the data set, `{0, 1}` when there is no data.
#[must_use]
pub fn compute_x_bounds(data: &[Candle]) -> XBounds {
    let mut timestamps = data.iter().map(|candle| candle.timestamp);
    let Some(first) = timestamps.next() else {
        return XBounds::default();
    };
    let (min, max) = timestamps.fold((first, first), |(min, max), ts| (min.min(ts), max.max(ts)));
    XBounds {
        min_x: min as f64,
        max_x: max as f64,
    }
}

/// Joint value extent of every visible series, padded by 10% each side.
///
/// Non-finite values are skipped. With nothing visible or nothing valid the
/// fixed fallback `{0, 100}` is returned. The result always covers the whole
/// data set; the live pan/zoom transform does not narrow it.
#[must_use]
pub fn compute_y_bounds(data: &[Candle], visibility: SeriesVisibility) -> YBounds {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for candle in data {
        for key in visibility.visible_keys() {
            let value = key.value_of(candle);
            if !value.is_finite() {
                continue;
            }
            min_y = min_y.min(value);
            max_y = max_y.max(value);
        }
    }

    if min_y == f64::INFINITY || max_y == f64::NEG_INFINITY {
        return YBounds::default();
    }

    let padding_y = (max_y - min_y) * Y_RANGE_PADDING_RATIO;
    YBounds {
        min_y: min_y - padding_y,
        max_y: max_y + padding_y,
    }
}

/// Time/value to pixel projection for one data snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateMapper {
    area: PlotArea,
    x_bounds: XBounds,
    y_bounds: YBounds,
    x_scale: LinearScale,
    y_scale: LinearScale,
}

impl CoordinateMapper {
    #[must_use]
    pub fn new(data: &[Candle], visibility: SeriesVisibility, area: PlotArea) -> Self {
        let x_bounds = compute_x_bounds(data);
        let y_bounds = compute_y_bounds(data, visibility);
        trace!(?x_bounds, ?y_bounds, "computed chart bounds");
        Self::from_bounds(x_bounds, y_bounds, area)
    }

    #[must_use]
    pub fn from_bounds(x_bounds: XBounds, y_bounds: YBounds, area: PlotArea) -> Self {
        Self {
            area,
            x_bounds,
            y_bounds,
            x_scale: LinearScale::new((x_bounds.min_x, x_bounds.max_x), area.x_range()),
            y_scale: LinearScale::new((y_bounds.min_y, y_bounds.max_y), area.y_range()),
        }
    }

    #[must_use]
    pub fn area(&self) -> PlotArea {
        self.area
    }

    #[must_use]
    pub fn x_bounds(&self) -> XBounds {
        self.x_bounds
    }

    #[must_use]
    pub fn y_bounds(&self) -> YBounds {
        self.y_bounds
    }

    #[must_use]
    pub fn bounds(&self) -> ChartBounds {
        ChartBounds::from_parts(self.x_bounds, self.y_bounds)
    }

    /// Maps a timestamp into `[padding, width - padding]`.
    #[must_use]
    pub fn scale_x(&self, timestamp: i64) -> f64 {
        self.x_scale.domain_to_pixel(timestamp as f64)
    }

    /// Maps a value into `[0, height - 2 * padding]`, measured from the plot floor.
    #[must_use]
    pub fn scale_y(&self, value: f64) -> f64 {
        self.y_scale.domain_to_pixel(value)
    }

    /// Screen-space y of a value, with the origin at the top of the viewport.
    #[must_use]
    pub fn plot_y(&self, value: f64) -> f64 {
        self.area.height - self.area.padding - self.scale_y(value)
    }

    /// Timestamp under an untransformed x pixel.
    #[must_use]
    pub fn x_to_time(&self, pixel: f64) -> Option<f64> {
        self.x_scale.pixel_to_domain(pixel)
    }
}
