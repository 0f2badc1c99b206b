use serde::{Deserialize, Serialize};

use crate::core::{SeriesColors, SeriesVisibility, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{ChartMode, GestureTuning};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default = "default_padding")]
    pub padding: f64,
    #[serde(default)]
    pub series_colors: SeriesColors,
    #[serde(default)]
    pub gestures: GestureTuning,
    #[serde(default)]
    pub initial_mode: ChartMode,
    #[serde(default)]
    pub initial_visibility: SeriesVisibility,
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl ChartEngineConfig {
    /// Creates a config with reference padding, colors and thresholds.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            padding: default_padding(),
            series_colors: SeriesColors::default(),
            gestures: GestureTuning::default(),
            initial_mode: ChartMode::default(),
            initial_visibility: SeriesVisibility::default(),
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_series_colors(mut self, colors: SeriesColors) -> Self {
        self.series_colors = colors;
        self
    }

    #[must_use]
    pub fn with_gestures(mut self, gestures: GestureTuning) -> Self {
        self.gestures = gestures;
        self
    }

    /// Sets the mode the chart starts in and returns to on reset.
    #[must_use]
    pub fn with_initial_mode(mut self, mode: ChartMode) -> Self {
        self.initial_mode = mode;
        self
    }

    #[must_use]
    pub fn with_initial_visibility(mut self, visibility: SeriesVisibility) -> Self {
        self.initial_visibility = visibility;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_layout(self.viewport, self.padding)?;
        self.gestures.validate()?;
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::Serialization(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

/// Checks that `padding` leaves a non-empty plot area inside `viewport`.
pub(super) fn validate_layout(viewport: Viewport, padding: f64) -> ChartResult<()> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    if !padding.is_finite() || padding < 0.0 {
        return Err(ChartError::InvalidConfig(
            "padding must be finite and >= 0".to_owned(),
        ));
    }
    let min_side = f64::from(viewport.width.min(viewport.height));
    if padding * 2.0 >= min_side {
        return Err(ChartError::InvalidConfig(format!(
            "padding {padding} leaves no plot area in {}x{}",
            viewport.width, viewport.height
        )));
    }
    Ok(())
}

fn default_padding() -> f64 {
    50.0
}
