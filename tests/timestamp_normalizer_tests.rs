use chrono::{Local, NaiveDate, TimeZone};
use market_chart::core::{RawTimestamp, normalize_timestamp};
use proptest::prelude::*;

fn local_midnight(year: i32, month: u32, day: u32) -> i64 {
    let naive = NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid date")
        .and_hms_opt(0, 0, 0)
        .expect("valid time");
    Local
        .from_local_datetime(&naive)
        .earliest()
        .expect("local midnight exists")
        .timestamp()
}

#[test]
fn seconds_pass_through_unchanged() {
    assert_eq!(
        normalize_timestamp(&RawTimestamp::from(1_706_659_200_i64)),
        Some(1_706_659_200)
    );
}

#[test]
fn milliseconds_are_floored_to_seconds() {
    assert_eq!(
        normalize_timestamp(&RawTimestamp::from(1_706_659_200_999_i64)),
        Some(1_706_659_200)
    );
}

#[test]
fn threshold_itself_is_treated_as_seconds() {
    assert_eq!(
        normalize_timestamp(&RawTimestamp::from(1_000_000_000_000_i64)),
        Some(1_000_000_000_000)
    );
}

#[test]
fn digit_strings_follow_the_numeric_heuristic() {
    assert_eq!(
        normalize_timestamp(&RawTimestamp::from("1706659200")),
        Some(1_706_659_200)
    );
    assert_eq!(
        normalize_timestamp(&RawTimestamp::from("1706659200123")),
        Some(1_706_659_200)
    );
}

#[test]
fn day_month_year_is_not_month_day_year() {
    assert_eq!(
        normalize_timestamp(&RawTimestamp::from("31/01/2024")),
        Some(local_midnight(2024, 1, 31))
    );
    assert_eq!(
        normalize_timestamp(&RawTimestamp::from("5/3/2024")),
        Some(local_midnight(2024, 3, 5))
    );
}

#[test]
fn day_month_year_overflow_rolls_into_next_month() {
    assert_eq!(
        normalize_timestamp(&RawTimestamp::from("30/02/2024")),
        Some(local_midnight(2024, 3, 1))
    );
}

#[test]
fn iso_date_only_strings_are_utc_midnight() {
    assert_eq!(
        normalize_timestamp(&RawTimestamp::from("2024-01-31")),
        Some(1_706_659_200)
    );
}

#[test]
fn rfc3339_strings_honor_their_offset() {
    assert_eq!(
        normalize_timestamp(&RawTimestamp::from("2024-01-31T00:00:00Z")),
        Some(1_706_659_200)
    );
    assert_eq!(
        normalize_timestamp(&RawTimestamp::from("2024-01-31T02:00:00+02:00")),
        Some(1_706_659_200)
    );
}

#[test]
fn rfc2822_strings_are_accepted() {
    assert_eq!(
        normalize_timestamp(&RawTimestamp::from("Wed, 31 Jan 2024 00:00:00 +0000")),
        Some(1_706_659_200)
    );
}

#[test]
fn naive_datetime_strings_are_local_time() {
    let expected = local_midnight(2024, 1, 31) + 10 * 3600 + 30 * 60;
    assert_eq!(
        normalize_timestamp(&RawTimestamp::from("2024-01-31T10:30:00")),
        Some(expected)
    );
    assert_eq!(
        normalize_timestamp(&RawTimestamp::from("2024-01-31 10:30")),
        Some(expected)
    );
}

#[test]
fn unparsable_inputs_yield_none() {
    for input in ["", "not a date", "31-01-2024x", "12/2024", "-1700000000"] {
        assert_eq!(
            normalize_timestamp(&RawTimestamp::from(input)),
            None,
            "{input:?}"
        );
    }
    assert_eq!(normalize_timestamp(&RawTimestamp::from(f64::NAN)), None);
    assert_eq!(normalize_timestamp(&RawTimestamp::from(f64::INFINITY)), None);
    assert_eq!(normalize_timestamp(&RawTimestamp::Unsupported), None);
}

proptest! {
    #[test]
    fn numeric_timestamps_follow_millisecond_heuristic(t in 0_i64..4_000_000_000_000) {
        let expected = if t > 1_000_000_000_000 { t.div_euclid(1000) } else { t };
        prop_assert_eq!(normalize_timestamp(&RawTimestamp::from(t)), Some(expected));
    }

    #[test]
    fn digit_strings_match_their_numeric_value(t in 0_i64..4_000_000_000_000) {
        prop_assert_eq!(
            normalize_timestamp(&RawTimestamp::from(t.to_string())),
            normalize_timestamp(&RawTimestamp::from(t))
        );
    }
}
