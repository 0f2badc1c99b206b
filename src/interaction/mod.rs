//! Gesture-driven view state.
//!
//! Pinch, long-press and pan recognizers run simultaneously on the host and
//! all feed one [`InteractionState`]. The scrub flag decides whether a pan
//! update moves the view or the scrub cursor, so `translate_x` never gets
//! two writers at once.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{ChartError, ChartResult};

/// Resampling level of the displayed series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartMode {
    Daily,
    #[default]
    Weekly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Panning,
    Scrubbing,
}

/// Live pan/zoom transform.
///
/// `scale` and `translate_x` follow the gesture in progress;
/// `saved_translate_x` is the baseline committed by the last finished gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub scale: f64,
    pub translate_x: f64,
    pub saved_translate_x: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translate_x: 0.0,
            saved_translate_x: 0.0,
        }
    }
}

impl ViewTransform {
    #[must_use]
    pub fn is_identity(self) -> bool {
        self == Self::default()
    }

    /// Applies the transform to a content x, scaling about `origin_x`.
    #[must_use]
    pub fn project_x(self, x: f64, origin_x: f64) -> f64 {
        origin_x + self.translate_x + self.scale * (x - origin_x)
    }

    /// Screen x back to content x.
    #[must_use]
    pub fn unproject_x(self, screen_x: f64, origin_x: f64) -> f64 {
        origin_x + (screen_x - origin_x - self.translate_x) / self.scale
    }
}

/// Tooltip cursor state. Active only between a long-press and gesture end.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrubState {
    pub active: bool,
    pub pointer_x: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GesturePhase {
    Start,
    Update,
    End,
}

/// One recognizer callback, as delivered by the host input pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureEvent {
    PinchStart,
    /// `scale` is the cumulative pinch factor of the gesture in progress.
    PinchUpdate {
        scale: f64,
        focal_x: f64,
    },
    PinchEnd,
    LongPressStart {
        x: f64,
        held_ms: u64,
    },
    PanStart,
    /// `x` is the pointer position, `translation_x` the drag distance since start.
    PanUpdate {
        x: f64,
        translation_x: f64,
    },
    PanEnd,
}

impl GestureEvent {
    #[must_use]
    pub fn phase(self) -> GesturePhase {
        match self {
            Self::PinchStart | Self::LongPressStart { .. } | Self::PanStart => GesturePhase::Start,
            Self::PinchUpdate { .. } | Self::PanUpdate { .. } => GesturePhase::Update,
            Self::PinchEnd | Self::PanEnd => GesturePhase::End,
        }
    }
}

/// Recognition and mode-switch thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureTuning {
    /// Pinch factors above this request the daily view.
    pub zoom_in_threshold: f64,
    /// Pinch factors below this request the weekly view.
    pub zoom_out_threshold: f64,
    pub long_press_min_duration_ms: u64,
}

impl Default for GestureTuning {
    fn default() -> Self {
        Self {
            zoom_in_threshold: 1.2,
            zoom_out_threshold: 0.8,
            long_press_min_duration_ms: 300,
        }
    }
}

impl GestureTuning {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.zoom_in_threshold.is_finite() || !self.zoom_out_threshold.is_finite() {
            return Err(ChartError::InvalidConfig(
                "pinch thresholds must be finite".to_owned(),
            ));
        }
        if self.zoom_out_threshold <= 0.0
            || self.zoom_out_threshold > 1.0
            || self.zoom_in_threshold < 1.0
        {
            return Err(ChartError::InvalidConfig(
                "pinch thresholds must satisfy 0 < zoom_out <= 1 <= zoom_in".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Mode a pinch factor asks for; `None` inside the hysteresis band.
    #[must_use]
    pub fn requested_mode(self, pinch_factor: f64) -> Option<ChartMode> {
        if pinch_factor > self.zoom_in_threshold {
            Some(ChartMode::Daily)
        } else if pinch_factor < self.zoom_out_threshold {
            Some(ChartMode::Weekly)
        } else {
            None
        }
    }
}

/// Emitted when a gesture switches the resampling level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeChangeRequest {
    pub from: ChartMode,
    pub to: ChartMode,
}

/// Result of feeding one event to the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub state: InteractionState,
    pub mode_change: Option<ModeChangeRequest>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionState {
    mode: InteractionMode,
    transform: ViewTransform,
    scrub: ScrubState,
    chart_mode: ChartMode,
    tuning: GestureTuning,
    viewport_width: f64,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new(ChartMode::default(), GestureTuning::default(), 0.0)
    }
}

impl InteractionState {
    #[must_use]
    pub fn new(chart_mode: ChartMode, tuning: GestureTuning, viewport_width: f64) -> Self {
        Self {
            mode: InteractionMode::Idle,
            transform: ViewTransform::default(),
            scrub: ScrubState::default(),
            chart_mode,
            tuning,
            viewport_width,
        }
    }

    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn transform(self) -> ViewTransform {
        self.transform
    }

    #[must_use]
    pub fn scrub(self) -> ScrubState {
        self.scrub
    }

    #[must_use]
    pub fn chart_mode(self) -> ChartMode {
        self.chart_mode
    }

    #[must_use]
    pub fn tuning(self) -> GestureTuning {
        self.tuning
    }

    #[must_use]
    pub fn viewport_width(self) -> f64 {
        self.viewport_width
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
    }

    /// Pure transition: the state after `event`, plus any mode switch it caused.
    #[must_use]
    pub fn transition(mut self, event: GestureEvent) -> Transition {
        let mode_change = self.apply(event);
        Transition {
            state: self,
            mode_change,
        }
    }

    /// Applies `event` in place and returns the mode switch it caused, if any.
    pub fn apply(&mut self, event: GestureEvent) -> Option<ModeChangeRequest> {
        trace!(?event, mode = ?self.mode, "gesture event");
        match event {
            GestureEvent::PinchStart => None,
            GestureEvent::PinchUpdate { scale, focal_x } => self.on_pinch_update(scale, focal_x),
            GestureEvent::PinchEnd => {
                self.transform.saved_translate_x = self.transform.translate_x;
                None
            }
            GestureEvent::LongPressStart { x, held_ms } => {
                self.on_long_press_start(x, held_ms);
                None
            }
            GestureEvent::PanStart => {
                if !self.scrub.active {
                    self.transform.saved_translate_x = self.transform.translate_x;
                    self.mode = InteractionMode::Panning;
                }
                None
            }
            GestureEvent::PanUpdate { x, translation_x } => {
                self.on_pan_update(x, translation_x);
                None
            }
            GestureEvent::PanEnd => {
                self.scrub.active = false;
                self.mode = InteractionMode::Idle;
                None
            }
        }
    }

    /// Switches chart mode directly, outside of any gesture.
    pub fn request_mode(&mut self, target: ChartMode) -> Option<ModeChangeRequest> {
        if self.chart_mode == target {
            return None;
        }
        let change = ModeChangeRequest {
            from: self.chart_mode,
            to: target,
        };
        self.chart_mode = target;
        debug!(from = ?change.from, to = ?change.to, "chart mode changed");
        Some(change)
    }

    /// Restores the identity transform, ends scrubbing and selects `chart_mode`.
    pub fn reset(&mut self, chart_mode: ChartMode) -> Option<ModeChangeRequest> {
        self.transform = ViewTransform::default();
        self.scrub = ScrubState::default();
        self.mode = InteractionMode::Idle;
        self.request_mode(chart_mode)
    }

    fn on_pinch_update(&mut self, factor: f64, focal_x: f64) -> Option<ModeChangeRequest> {
        if !factor.is_finite() || factor <= 0.0 || !focal_x.is_finite() {
            trace!(factor, focal_x, "ignoring unusable pinch sample");
            return None;
        }

        self.transform.scale = factor;
        self.transform.translate_x =
            self.transform.saved_translate_x * factor + focal_x - self.viewport_width / 2.0;

        let target = self.tuning.requested_mode(factor)?;
        self.request_mode(target)
    }

    fn on_long_press_start(&mut self, x: f64, held_ms: u64) {
        if held_ms < self.tuning.long_press_min_duration_ms {
            trace!(held_ms, "long press shorter than recognition threshold");
            return;
        }
        self.scrub = ScrubState {
            active: true,
            pointer_x: x,
        };
        self.mode = InteractionMode::Scrubbing;
    }

    fn on_pan_update(&mut self, x: f64, translation_x: f64) {
        if self.scrub.active {
            self.scrub.pointer_x = x;
            return;
        }
        self.transform.translate_x =
            self.transform.saved_translate_x + translation_x * self.transform.scale;
    }
}
