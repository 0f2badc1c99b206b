use std::sync::Arc;

use tracing::trace;

use crate::core::{
    Candle, CoordinateMapper, PlotArea, SeriesColors, SeriesVisibility, Viewport,
    create_chart_series,
};
use crate::interaction::InteractionState;
use crate::render::ChartFrame;

use super::axis_ticks::generate_x_ticks;
use super::scrub_resolver::resolve_scrub_readout;

/// Everything a frame is derived from.
///
/// `data` is shared with the engine, so a frame never copies the candles.
#[derive(Debug, Clone)]
pub struct FrameInputs<'a> {
    pub data: Arc<[Candle]>,
    pub visibility: SeriesVisibility,
    pub viewport: Viewport,
    pub padding: f64,
    pub colors: &'a SeriesColors,
    pub interaction: InteractionState,
}

/// Recompute-all pass: bounds, series, ticks and scrub readout are derived
/// together from one set of inputs, never patched individually.
#[must_use]
pub fn build_chart_frame(inputs: FrameInputs<'_>) -> ChartFrame {
    let area = PlotArea::new(inputs.viewport, inputs.padding);
    let mapper = CoordinateMapper::new(&inputs.data, inputs.visibility, area);
    let series = create_chart_series(&inputs.data, &mapper, inputs.colors);
    let x_ticks = generate_x_ticks(&inputs.data, &mapper);
    let transform = inputs.interaction.transform();
    let scrub = resolve_scrub_readout(
        &inputs.data,
        &mapper,
        transform,
        inputs.interaction.scrub(),
    );

    trace!(
        mode = ?inputs.interaction.chart_mode(),
        candles = inputs.data.len(),
        ticks = x_ticks.len(),
        scrubbing = scrub.is_some(),
        "built chart frame"
    );

    ChartFrame {
        viewport: inputs.viewport,
        padding: inputs.padding,
        mode: inputs.interaction.chart_mode(),
        data: inputs.data,
        bounds: mapper.bounds(),
        mapper,
        series,
        visibility: inputs.visibility,
        x_ticks,
        transform,
        scrub,
    }
}
