use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{ChartFrame, Renderer};

use super::ChartEngine;

pub const CHART_FRAME_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFrameJsonContractV1 {
    pub schema_version: u32,
    pub frame: ChartFrame,
}

impl ChartFrame {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartFrameJsonContractV1 {
            schema_version: CHART_FRAME_JSON_SCHEMA_V1,
            frame: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize frame contract v1: {e}"))
        })
    }

    /// Accepts either a bare frame or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(frame) = serde_json::from_str::<ChartFrame>(input) {
            return Ok(frame);
        }
        let payload: ChartFrameJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse frame json payload: {e}"))
        })?;
        if payload.schema_version != CHART_FRAME_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported frame schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.frame)
    }
}

impl<R: Renderer> ChartEngine<R> {
    pub fn frame_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.frame.to_json_contract_v1_pretty()
    }
}
