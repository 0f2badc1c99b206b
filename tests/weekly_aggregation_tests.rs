use chrono::{Local, NaiveDate, TimeZone};
use market_chart::core::{Candle, aggregate_to_weekly, week_number_of};

fn local_noon(year: i32, month: u32, day: u32) -> i64 {
    let naive = NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid date")
        .and_hms_opt(12, 0, 0)
        .expect("valid time");
    Local
        .from_local_datetime(&naive)
        .earliest()
        .expect("local noon exists")
        .timestamp()
}

fn candle(ts: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Candle {
    Candle::new(ts, open, high, low, close, volume)
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(aggregate_to_weekly(&[]).is_empty());
}

#[test]
fn single_week_folds_into_one_candle() {
    // Monday 2024-01-08 .. Friday 2024-01-12.
    let week = vec![
        candle(local_noon(2024, 1, 8), 10.0, 12.0, 9.0, 11.0, 100.0),
        candle(local_noon(2024, 1, 9), 11.0, 15.0, 10.5, 14.0, 150.0),
        candle(local_noon(2024, 1, 10), 14.0, 14.5, 8.0, 9.0, 200.0),
        candle(local_noon(2024, 1, 11), 9.0, 11.0, 8.5, 10.0, 50.0),
        candle(local_noon(2024, 1, 12), 10.0, 13.0, 9.5, 12.5, 75.0),
    ];

    let weekly = aggregate_to_weekly(&week);
    assert_eq!(weekly.len(), 1);
    let folded = weekly[0];
    assert_eq!(folded.timestamp, local_noon(2024, 1, 8));
    assert_eq!(folded.open, 10.0);
    assert_eq!(folded.close, 12.5);
    assert_eq!(folded.high, 15.0);
    assert_eq!(folded.low, 8.0);
    assert_eq!(folded.volume, 575.0);
}

#[test]
fn unsorted_input_is_sorted_before_bucketing() {
    let week = vec![
        candle(local_noon(2024, 1, 12), 10.0, 13.0, 9.5, 12.5, 1.0),
        candle(local_noon(2024, 1, 8), 10.0, 12.0, 9.0, 11.0, 1.0),
        candle(local_noon(2024, 1, 10), 14.0, 14.5, 8.0, 9.0, 1.0),
    ];

    let weekly = aggregate_to_weekly(&week);
    assert_eq!(weekly.len(), 1);
    assert_eq!(weekly[0].timestamp, local_noon(2024, 1, 8));
    assert_eq!(weekly[0].open, 10.0);
    assert_eq!(weekly[0].close, 12.5);
}

#[test]
fn week_boundary_splits_into_two_buckets() {
    // Thursday/Friday of one week, then Monday/Tuesday of the next.
    let days = vec![
        candle(local_noon(2024, 3, 7), 1.0, 5.0, 0.5, 2.0, 10.0),
        candle(local_noon(2024, 3, 8), 2.0, 6.0, 1.5, 3.0, 20.0),
        candle(local_noon(2024, 3, 11), 3.0, 4.0, 2.0, 3.5, 30.0),
        candle(local_noon(2024, 3, 12), 3.5, 8.0, 3.0, 7.0, 40.0),
    ];

    let weekly = aggregate_to_weekly(&days);
    assert_eq!(weekly.len(), 2);

    assert_eq!(weekly[0].timestamp, local_noon(2024, 3, 7));
    assert_eq!(weekly[0].open, 1.0);
    assert_eq!(weekly[0].close, 3.0);
    assert_eq!(weekly[0].high, 6.0);
    assert_eq!(weekly[0].low, 0.5);
    assert_eq!(weekly[0].volume, 30.0);

    assert_eq!(weekly[1].timestamp, local_noon(2024, 3, 11));
    assert_eq!(weekly[1].open, 3.0);
    assert_eq!(weekly[1].close, 7.0);
    assert_eq!(weekly[1].high, 8.0);
    assert_eq!(weekly[1].low, 2.0);
    assert_eq!(weekly[1].volume, 70.0);
}

#[test]
fn sunday_belongs_to_the_preceding_monday_week() {
    let days = vec![
        candle(local_noon(2024, 3, 4), 1.0, 1.0, 1.0, 1.0, 1.0),
        candle(local_noon(2024, 3, 10), 2.0, 2.0, 2.0, 2.0, 1.0),
        candle(local_noon(2024, 3, 11), 3.0, 3.0, 3.0, 3.0, 1.0),
    ];

    let weekly = aggregate_to_weekly(&days);
    assert_eq!(weekly.len(), 2);
    assert_eq!(weekly[0].close, 2.0);
    assert_eq!(weekly[1].open, 3.0);
}

#[test]
fn year_boundary_week_stays_together() {
    // 2024-12-30 (Mon) and 2025-01-02 (Thu) are both ISO week 1 of 2025.
    let days = vec![
        candle(local_noon(2024, 12, 30), 1.0, 2.0, 0.5, 1.5, 1.0),
        candle(local_noon(2025, 1, 2), 1.5, 3.0, 1.0, 2.5, 1.0),
    ];
    assert_eq!(week_number_of(days[0].timestamp), Some(1));
    assert_eq!(week_number_of(days[1].timestamp), Some(1));
    assert_eq!(aggregate_to_weekly(&days).len(), 1);
}

#[test]
fn same_week_number_in_different_years_merges_without_intervening_week() {
    // Week 10 of 2023 followed directly by week 10 of 2024: only the week
    // number is compared, so these fold into one bucket.
    let days = vec![
        candle(local_noon(2023, 3, 7), 1.0, 2.0, 0.5, 1.5, 1.0),
        candle(local_noon(2024, 3, 5), 5.0, 6.0, 4.0, 5.5, 2.0),
    ];
    assert_eq!(
        week_number_of(days[0].timestamp),
        week_number_of(days[1].timestamp)
    );

    let weekly = aggregate_to_weekly(&days);
    assert_eq!(weekly.len(), 1);
    assert_eq!(weekly[0].open, 1.0);
    assert_eq!(weekly[0].close, 5.5);
    assert_eq!(weekly[0].volume, 3.0);
}

#[test]
fn single_candle_weeks_are_valid_buckets() {
    let days = vec![
        candle(local_noon(2024, 5, 6), 1.0, 2.0, 0.5, 1.5, 4.0),
        candle(local_noon(2024, 5, 14), 2.0, 3.0, 1.5, 2.5, 5.0),
        candle(local_noon(2024, 5, 22), 3.0, 4.0, 2.5, 3.5, 6.0),
    ];
    let weekly = aggregate_to_weekly(&days);
    assert_eq!(weekly, days);
}

#[test]
fn inverted_ohlc_values_are_propagated_not_rejected() {
    let days = vec![candle(local_noon(2024, 5, 6), 5.0, 1.0, 9.0, 5.0, 0.0)];
    let weekly = aggregate_to_weekly(&days);
    assert_eq!(weekly[0].high, 1.0);
    assert_eq!(weekly[0].low, 9.0);
}

#[test]
fn nan_high_or_low_propagates_into_weekly_extremes() {
    let days = vec![
        candle(local_noon(2024, 5, 6), 1.0, 5.0, 0.5, 1.5, 1.0),
        candle(local_noon(2024, 5, 7), 1.5, f64::NAN, f64::NAN, 2.0, 1.0),
        candle(local_noon(2024, 5, 8), 2.0, 6.0, 0.4, 2.5, 1.0),
    ];
    let weekly = aggregate_to_weekly(&days);
    assert_eq!(weekly.len(), 1);
    assert!(weekly[0].high.is_nan());
    assert!(weekly[0].low.is_nan());
    assert_eq!(weekly[0].open, 1.0);
    assert_eq!(weekly[0].close, 2.5);
}

#[test]
fn nan_in_last_candle_of_week_still_propagates() {
    let days = vec![
        candle(local_noon(2024, 5, 6), 1.0, 5.0, 0.5, 1.5, 1.0),
        candle(local_noon(2024, 5, 7), 1.5, 4.0, f64::NAN, 2.0, 1.0),
    ];
    let weekly = aggregate_to_weekly(&days);
    assert_eq!(weekly[0].high, 5.0);
    assert!(weekly[0].low.is_nan());
}
