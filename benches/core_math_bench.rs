use criterion::{Criterion, criterion_group, criterion_main};
use market_chart::api::{FrameInputs, build_chart_frame};
use market_chart::core::{
    Candle, LinearScale, RawRecord, SeriesColors, SeriesVisibility, Viewport, aggregate_to_weekly,
    normalize_records,
};
use market_chart::interaction::{ChartMode, GestureTuning, InteractionState};
use std::hint::black_box;
use std::sync::Arc;

const DAY_SECONDS: i64 = 86_400;
const START: i64 = 1_577_880_000; // 2020-01-01T12:00:00Z

fn daily_candles(count: i64) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let base = 100.0 + (i as f64 * 0.05).sin() * 20.0;
            let close = if i % 2 == 0 { base + 1.0 } else { base - 1.0 };
            Candle::new(
                START + i * DAY_SECONDS,
                base,
                base.max(close) + 0.75,
                base.min(close) - 0.75,
                close,
                1_000.0 + i as f64,
            )
        })
        .collect()
}

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new((0.0, 10_000.0), (50.0, 1_870.0));

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.domain_to_pixel(black_box(4_321.123));
            let _ = scale.pixel_to_domain(px);
        })
    });
}

fn bench_normalize_mixed_records_5k(c: &mut Criterion) {
    let records: Vec<RawRecord> = (0..5_000_i64)
        .map(|i| {
            let ts = START + i * DAY_SECONDS;
            let timestamp = match i % 3 {
                0 => serde_json::json!(ts),
                1 => serde_json::json!(ts * 1_000),
                _ => serde_json::json!(ts.to_string()),
            };
            RawRecord::new(timestamp, 10.0, 11.0, 9.0, "10.5", 100.0)
        })
        .collect();

    c.bench_function("normalize_mixed_records_5k", |b| {
        b.iter(|| normalize_records(black_box(&records)))
    });
}

fn bench_weekly_aggregation_5y(c: &mut Criterion) {
    let candles = daily_candles(5 * 365);

    c.bench_function("weekly_aggregation_5y", |b| {
        b.iter(|| aggregate_to_weekly(black_box(&candles)))
    });
}

fn bench_chart_frame_5y(c: &mut Criterion) {
    let candles: Arc<[Candle]> = daily_candles(5 * 365).into();
    let colors = SeriesColors::default();
    let interaction = InteractionState::new(ChartMode::Daily, GestureTuning::default(), 1_600.0);

    c.bench_function("chart_frame_5y", |b| {
        b.iter(|| {
            build_chart_frame(FrameInputs {
                data: Arc::clone(black_box(&candles)),
                visibility: SeriesVisibility::all(),
                viewport: Viewport::new(1_600, 900),
                padding: 50.0,
                colors: &colors,
                interaction,
            })
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_normalize_mixed_records_5k,
    bench_weekly_aggregation_5y,
    bench_chart_frame_5y
);
criterion_main!(benches);
