use ordered_float::OrderedFloat;

use crate::core::{Candle, CoordinateMapper};
use crate::interaction::{ScrubState, ViewTransform};
use crate::render::{ScrubLine, ScrubReadout};

/// Gap between the scrub line's top end and the plot's top edge.
const SCRUB_LINE_TOP_INSET_PX: f64 = 6.0;
/// Gap between the scrub line's bottom end and the plot floor.
const SCRUB_LINE_BOTTOM_INSET_PX: f64 = 4.0;

pub(super) fn resolve_scrub_readout(
    data: &[Candle],
    mapper: &CoordinateMapper,
    transform: ViewTransform,
    scrub: ScrubState,
) -> Option<ScrubReadout> {
    if !scrub.active {
        return None;
    }

    let area = mapper.area();
    let line = ScrubLine {
        x: scrub.pointer_x,
        y1: area.padding + SCRUB_LINE_TOP_INSET_PX,
        y2: area.height - area.padding - SCRUB_LINE_BOTTOM_INSET_PX,
    };

    Some(ScrubReadout {
        line,
        candle: nearest_candle(data, mapper, transform, scrub.pointer_x),
    })
}

/// Candle drawn closest to a screen x, with the live transform undone.
fn nearest_candle(
    data: &[Candle],
    mapper: &CoordinateMapper,
    transform: ViewTransform,
    pointer_x: f64,
) -> Option<Candle> {
    let origin_x = mapper.area().width / 2.0;
    let content_x = transform.unproject_x(pointer_x, origin_x);
    if !content_x.is_finite() {
        return None;
    }

    data.iter()
        .min_by_key(|candle| OrderedFloat((mapper.scale_x(candle.timestamp) - content_x).abs()))
        .copied()
}
