use std::sync::Arc;

use crate::core::{Candle, NormalizationReport, SeriesVisibility, Viewport};
use crate::error::ChartResult;
use crate::interaction::{ChartMode, InteractionState};
use crate::render::{ChartFrame, Renderer};

use super::engine_config::ChartEngineConfig;
use super::frame_builder::{FrameInputs, build_chart_frame};

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the normalized daily data, its weekly aggregate, series
/// visibility and the gesture state, and keeps one [`ChartFrame`] derived
/// from all of them. Every mutation ends in a full recompute of that frame.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartEngineConfig,
    pub(super) daily: Arc<[Candle]>,
    pub(super) weekly: Arc<[Candle]>,
    pub(super) last_report: NormalizationReport,
    pub(super) visibility: SeriesVisibility,
    pub(super) interaction: InteractionState,
    pub(super) frame: ChartFrame,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        config.validate()?;

        let interaction = InteractionState::new(
            config.initial_mode,
            config.gestures,
            f64::from(config.viewport.width),
        );
        let visibility = config.initial_visibility;
        let empty: Arc<[Candle]> = Arc::from(Vec::new());
        let frame = build_chart_frame(FrameInputs {
            data: Arc::clone(&empty),
            visibility,
            viewport: config.viewport,
            padding: config.padding,
            colors: &config.series_colors,
            interaction,
        });

        Ok(Self {
            renderer,
            config,
            daily: Arc::clone(&empty),
            weekly: empty,
            last_report: NormalizationReport::default(),
            visibility,
            interaction,
            frame,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn chart_mode(&self) -> ChartMode {
        self.interaction.chart_mode()
    }

    #[must_use]
    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    /// Latest consistent snapshot.
    #[must_use]
    pub fn frame(&self) -> &ChartFrame {
        &self.frame
    }

    pub fn render(&mut self) -> ChartResult<()> {
        self.renderer.render(&self.frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn recompute(&mut self) {
        let data = match self.interaction.chart_mode() {
            ChartMode::Daily => Arc::clone(&self.daily),
            ChartMode::Weekly => Arc::clone(&self.weekly),
        };
        self.frame = build_chart_frame(FrameInputs {
            data,
            visibility: self.visibility,
            viewport: self.config.viewport,
            padding: self.config.padding,
            colors: &self.config.series_colors,
            interaction: self.interaction,
        });
    }
}
