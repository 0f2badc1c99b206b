use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{Candle, RawRecord, normalize_timestamp};

/// Advisory counts produced by a normalization pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NormalizationReport {
    pub original_count: usize,
    pub normalized_count: usize,
}

impl NormalizationReport {
    #[must_use]
    pub fn dropped_count(self) -> usize {
        self.original_count - self.normalized_count
    }
}

/// Maps raw records to candles, dropping records whose timestamp cannot be
/// parsed. Survivors keep their input order; no sorting happens here.
#[must_use]
pub fn normalize_records(records: &[RawRecord]) -> Vec<Candle> {
    normalize_records_with_report(records).0
}

pub fn normalize_records_with_report(records: &[RawRecord]) -> (Vec<Candle>, NormalizationReport) {
    let candles: Vec<Candle> = records
        .iter()
        .filter_map(|record| {
            let Some(timestamp) = normalize_timestamp(&record.timestamp) else {
                warn!(timestamp = ?record.timestamp, "could not parse timestamp");
                return None;
            };
            Some(Candle {
                timestamp,
                open: record.open.as_f64(),
                high: record.high.as_f64(),
                low: record.low.as_f64(),
                close: record.close.as_f64(),
                volume: record.volume.as_f64(),
            })
        })
        .collect();

    let report = NormalizationReport {
        original_count: records.len(),
        normalized_count: candles.len(),
    };
    debug!(
        original_count = report.original_count,
        normalized_count = report.normalized_count,
        "normalized records"
    );
    (candles, report)
}
