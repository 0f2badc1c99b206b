//! market-chart-rs: headless engine behind an interactive OHLC price chart.
//!
//! Raw candle records are normalized, optionally resampled to weekly
//! candles, and projected into a padded pixel viewport. Pinch, pan and
//! long-press gestures drive one explicit view state, and every change
//! produces a single consistent [`render::ChartFrame`] for a rendering
//! backend to draw.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
