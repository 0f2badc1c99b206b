use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::core::RawTimestamp;
use crate::error::{ChartError, ChartResult};

/// Unverified numeric field of an ingested record.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "Value")]
pub enum RawValue {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl From<Value> for RawValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(number) => number.as_f64().map_or(Self::Missing, Self::Number),
            Value::String(text) => Self::Text(text),
            _ => Self::Missing,
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl RawValue {
    /// Numeric reading of the field.
    ///
    /// Text that does not parse and missing values read as `NaN`; nothing is
    /// rejected here, non-finite values flow on into the scaling math.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Number(value) => *value,
            Self::Text(text) => text.trim().parse::<f64>().unwrap_or(f64::NAN),
            Self::Missing => f64::NAN,
        }
    }
}

/// One record as delivered by the data-fetch layer.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub timestamp: RawTimestamp,
    #[serde(default)]
    pub open: RawValue,
    #[serde(default)]
    pub high: RawValue,
    #[serde(default)]
    pub low: RawValue,
    #[serde(default)]
    pub close: RawValue,
    #[serde(default)]
    pub volume: RawValue,
}

impl RawRecord {
    #[must_use]
    pub fn new(
        timestamp: impl Into<RawTimestamp>,
        open: impl Into<RawValue>,
        high: impl Into<RawValue>,
        low: impl Into<RawValue>,
        close: impl Into<RawValue>,
        volume: impl Into<RawValue>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            open: open.into(),
            high: high.into(),
            low: low.into(),
            close: close.into(),
            volume: volume.into(),
        }
    }

    /// Extracts records from an arbitrary JSON payload.
    ///
    /// Anything other than an array (`null`, objects, scalars) is treated as
    /// "no data". Array elements that are not objects are skipped.
    #[must_use]
    pub fn from_json_value(payload: Value) -> Vec<Self> {
        let Value::Array(items) = payload else {
            if !payload.is_null() {
                warn!("record payload is not an array; treating as empty");
            }
            return Vec::new();
        };

        items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| {
                if !item.is_object() {
                    warn!(index, "skipping non-object record");
                    return None;
                }
                match serde_json::from_value::<Self>(item) {
                    Ok(record) => Some(record),
                    Err(err) => {
                        warn!(index, error = %err, "skipping undecodable record");
                        None
                    }
                }
            })
            .collect()
    }

    /// Parses a JSON document and extracts its records.
    pub fn parse_json_array(input: &str) -> ChartResult<Vec<Self>> {
        let payload: Value = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse records json: {e}")))?;
        Ok(Self::from_json_value(payload))
    }
}
