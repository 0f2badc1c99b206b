use tracing::debug;

use crate::core::Viewport;
use crate::error::ChartResult;
use crate::interaction::{GestureEvent, ModeChangeRequest};
use crate::render::Renderer;

use super::ChartEngine;
use super::engine_config::validate_layout;

impl<R: Renderer> ChartEngine<R> {
    /// Feeds one recognizer callback to the state machine and rebuilds the frame.
    ///
    /// Returns the chart-mode switch the event caused, if any; the frame is
    /// already built from the new mode's data when this returns.
    pub fn handle_gesture(&mut self, event: GestureEvent) -> Option<ModeChangeRequest> {
        let mode_change = self.interaction.apply(event);
        if let Some(change) = mode_change {
            debug!(from = ?change.from, to = ?change.to, "gesture switched chart mode");
        }
        self.recompute();
        mode_change
    }

    /// Applies a batch of events, rebuilding the frame once at the end.
    pub fn handle_gestures(
        &mut self,
        events: impl IntoIterator<Item = GestureEvent>,
    ) -> Vec<ModeChangeRequest> {
        let changes = events
            .into_iter()
            .filter_map(|event| self.interaction.apply(event))
            .collect();
        self.recompute();
        changes
    }

    /// Resets zoom and pan, ends scrubbing and restores the initial chart mode.
    pub fn reset_view(&mut self) -> Option<ModeChangeRequest> {
        let mode_change = self.interaction.reset(self.config.initial_mode);
        debug!(mode = ?self.interaction.chart_mode(), "view reset");
        self.recompute();
        mode_change
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        validate_layout(viewport, self.config.padding)?;
        self.config.viewport = viewport;
        self.interaction.set_viewport_width(f64::from(viewport.width));
        self.recompute();
        Ok(())
    }
}
