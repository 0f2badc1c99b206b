mod frame;
mod null_renderer;
mod primitives;

pub use frame::{AxisTick, ChartFrame, ScrubLine, ScrubReadout};
pub use null_renderer::NullRenderer;
pub use primitives::Color;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `ChartFrame` so drawing code stays
/// isolated from data transformation and gesture handling.
pub trait Renderer {
    fn render(&mut self, frame: &ChartFrame) -> ChartResult<()>;
}
