use serde_json::Value;
use tracing::{debug, warn};

use crate::core::{
    Candle, NormalizationReport, RawRecord, SeriesKey, SeriesVisibility, aggregate_to_weekly,
    normalize_records_with_report,
};
use crate::interaction::ChartMode;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Replaces the data set with freshly fetched records.
    ///
    /// Records with unparsable timestamps are dropped; the weekly aggregate
    /// is rebuilt from the survivors.
    pub fn set_records(&mut self, records: &[RawRecord]) -> NormalizationReport {
        let (daily, report) = normalize_records_with_report(records);
        if report.dropped_count() > 0 {
            warn!(
                dropped_count = report.dropped_count(),
                "dropped records with unparsable timestamps"
            );
        }
        self.replace_daily(daily, report);
        report
    }

    /// Accepts whatever the fetch layer delivered; a missing value is "no data".
    pub fn set_optional_records(&mut self, records: Option<&[RawRecord]>) -> NormalizationReport {
        self.set_records(records.unwrap_or_default())
    }

    /// Loads records from a JSON payload.
    ///
    /// `null`, non-array payloads and malformed JSON all load as "no data".
    pub fn set_records_json(&mut self, input: &str) -> NormalizationReport {
        let records = RawRecord::parse_json_array(input).unwrap_or_else(|err| {
            warn!(error = %err, "treating malformed records payload as empty");
            Vec::new()
        });
        self.set_records(&records)
    }

    pub fn set_records_value(&mut self, payload: Value) -> NormalizationReport {
        self.set_records(&RawRecord::from_json_value(payload))
    }

    /// Replaces the data set with already-normalized daily candles.
    pub fn set_candles(&mut self, candles: Vec<Candle>) {
        let report = NormalizationReport {
            original_count: candles.len(),
            normalized_count: candles.len(),
        };
        self.replace_daily(candles, report);
    }

    pub fn clear_data(&mut self) {
        self.replace_daily(Vec::new(), NormalizationReport::default());
    }

    /// Daily candles in ingestion order.
    #[must_use]
    pub fn daily_data(&self) -> &[Candle] {
        &self.daily
    }

    #[must_use]
    pub fn weekly_data(&self) -> &[Candle] {
        &self.weekly
    }

    /// Candles selected by the current chart mode.
    #[must_use]
    pub fn current_data(&self) -> &[Candle] {
        match self.chart_mode() {
            ChartMode::Daily => &self.daily,
            ChartMode::Weekly => &self.weekly,
        }
    }

    #[must_use]
    pub fn last_normalization_report(&self) -> NormalizationReport {
        self.last_report
    }

    #[must_use]
    pub fn series_visibility(&self) -> SeriesVisibility {
        self.visibility
    }

    pub fn set_series_visibility(&mut self, visibility: SeriesVisibility) {
        self.visibility = visibility;
        self.warn_if_no_series_visible();
        self.recompute();
    }

    /// Flips one series and returns its new visibility.
    pub fn toggle_series(&mut self, key: SeriesKey) -> bool {
        let visible = self.visibility.toggle(key);
        debug!(series = key.name(), visible, "toggled series");
        self.warn_if_no_series_visible();
        self.recompute();
        visible
    }

    fn replace_daily(&mut self, daily: Vec<Candle>, report: NormalizationReport) {
        self.weekly = aggregate_to_weekly(&daily).into();
        self.daily = daily.into();
        self.last_report = report;
        debug!(
            daily_count = self.daily.len(),
            weekly_count = self.weekly.len(),
            "data set replaced"
        );
        self.recompute();
    }

    fn warn_if_no_series_visible(&self) {
        if self.visibility.none_visible() {
            warn!("no series selected for display");
        }
    }
}
