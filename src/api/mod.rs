mod axis_ticks;
mod data_controller;
mod engine;
mod engine_config;
mod frame_builder;
mod interaction_coordinator;
mod json_contract;
mod scrub_resolver;

pub use axis_ticks::{
    INVALID_DATE_LABEL, X_TICK_COUNT, X_TICK_LABEL_FORMAT, format_tick_label, generate_x_ticks,
};
pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use frame_builder::{FrameInputs, build_chart_frame};
pub use json_contract::{CHART_FRAME_JSON_SCHEMA_V1, ChartFrameJsonContractV1};
