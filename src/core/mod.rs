pub mod coordinate_mapper;
pub mod normalize;
pub mod primitives;
pub mod record;
pub mod scale;
pub mod series;
pub mod timestamp;
pub mod types;
pub mod weekly;

pub use coordinate_mapper::{
    CoordinateMapper, PlotArea, Y_RANGE_PADDING_RATIO, compute_x_bounds, compute_y_bounds,
};
pub use normalize::{NormalizationReport, normalize_records, normalize_records_with_report};
pub use record::{RawRecord, RawValue};
pub use scale::LinearScale;
pub use series::{LineSeries, SeriesColors, SeriesKey, SeriesVisibility, create_chart_series};
pub use timestamp::{
    MILLISECONDS_THRESHOLD, RawTimestamp, TimestampEncoding, normalize_epoch, normalize_timestamp,
};
pub use types::{Candle, ChartBounds, Viewport, XBounds, YBounds};
pub use weekly::{aggregate_to_weekly, aggregate_week, iso_week_number, week_number_of};
