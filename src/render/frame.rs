use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{
    Candle, ChartBounds, CoordinateMapper, LineSeries, SeriesKey, SeriesVisibility, Viewport,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{ChartMode, ViewTransform};
use crate::render::Color;

/// Labelled position on the time axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub x: f64,
    pub label: String,
}

/// Vertical scrub cursor in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrubLine {
    pub x: f64,
    pub y1: f64,
    pub y2: f64,
}

/// Scrub cursor plus the candle it currently reads out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrubReadout {
    pub line: ScrubLine,
    pub candle: Option<Candle>,
}

/// Consistent snapshot of everything a renderer needs for one pass.
///
/// All fields derive from the same inputs; a frame never mixes data from one
/// chart mode with bounds or ticks from another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    pub viewport: Viewport,
    pub padding: f64,
    pub mode: ChartMode,
    pub data: Arc<[Candle]>,
    pub bounds: ChartBounds,
    pub mapper: CoordinateMapper,
    pub series: Vec<LineSeries>,
    pub visibility: SeriesVisibility,
    pub x_ticks: SmallVec<[AxisTick; 4]>,
    pub transform: ViewTransform,
    pub scrub: Option<ScrubReadout>,
}

impl ChartFrame {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn series(&self, key: SeriesKey) -> Option<&LineSeries> {
        self.series.iter().find(|line| line.key == key)
    }

    /// Series toggled on, in legend order.
    pub fn visible_lines(&self) -> impl Iterator<Item = &LineSeries> {
        self.series
            .iter()
            .filter(|line| self.visibility.is_visible(line.key))
    }

    /// Screen-space polyline for one series, before the live transform.
    #[must_use]
    pub fn plot_points(&self, key: SeriesKey) -> Vec<(f64, f64)> {
        self.series(key)
            .map(|line| {
                line.values
                    .iter()
                    .map(|&(x, value)| (x, self.mapper.plot_y(value)))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(ChartError::InvalidData(
                "frame padding must be finite and >= 0".to_owned(),
            ));
        }
        if self.x_ticks.len() > 4 {
            return Err(ChartError::InvalidData(
                "frame carries more than 4 axis ticks".to_owned(),
            ));
        }
        for line in self.visible_lines() {
            Color::from_hex(&line.color)?.validate()?;
        }
        Ok(())
    }
}
