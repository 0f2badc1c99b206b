use crate::error::ChartResult;
use crate::render::{ChartFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid frames before
/// a real backend draws them.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_visible_line_count: usize,
    pub last_tick_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &ChartFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_visible_line_count = frame.visible_lines().count();
        self.last_tick_count = frame.x_ticks.len();
        Ok(())
    }
}
