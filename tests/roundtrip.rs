//! Property tests for the forward and backward conversions.

use apside::{calendar_date, julian_day};
use proptest::prelude::*;

/// Time of day in microseconds.
fn micros_of_day(hour: i32, minute: i32, second: i32, microsecond: i32) -> i64 {
    ((i64::from(hour) * 60 + i64::from(minute)) * 60 + i64::from(second)) * 1_000_000
        + i64::from(microsecond)
}

proptest! {
    // Near JD 3e6 one ulp is ~40 µs, so the time of day is compared with a
    // 100 µs tolerance.  The last 100 µs of the day may round up to 24:00,
    // which wraps the clock without advancing the day, so they are skipped.
    #[test]
    fn calendar_survives_forward_then_backward(
        year in -4000i64..=4000,
        month in 1i32..=12,
        day in 1i32..=28,
        hour in 0i32..=23,
        minute in 0i32..60,
        second in 0i32..60,
        microsecond in 0i32..1_000_000,
    ) {
        prop_assume!(!(year == 1582 && month == 10 && (5..15).contains(&day)));
        let expected = micros_of_day(hour, minute, second, microsecond);
        prop_assume!(expected < 86_400_000_000 - 100);

        let jd = julian_day(year, month, day, hour, minute, second, microsecond);
        let back = calendar_date(jd);

        prop_assert_eq!((back.year, back.month, back.day), (year, month, day));
        let actual = micros_of_day(back.hour, back.minute, back.second, back.microsecond);
        prop_assert!((expected - actual).abs() <= 100, "{} vs {}", expected, actual);
    }

    #[test]
    fn julian_day_survives_backward_then_forward(jd in -50_000.0f64..3_000_000.0) {
        // A fraction within half a microsecond of 1.0 hits the hour-24 wrap.
        prop_assume!((jd + 0.5).rem_euclid(1.0) < 1.0 - 1e-8);

        let back = calendar_date(jd).julian_day();
        prop_assert!((back - jd).abs() < 1e-9, "{} came back as {}", jd, back);
    }

    #[test]
    fn consecutive_days_differ_by_one(
        year in -4000i64..=4000,
        month in 1i32..=12,
        day in 1i32..=27,
    ) {
        prop_assume!(!(year == 1582 && month == 10 && (4..15).contains(&day)));

        let today = julian_day(year, month, day, 0, 0, 0, 0);
        let tomorrow = julian_day(year, month, day + 1, 0, 0, 0, 0);
        prop_assert_eq!(tomorrow - today, 1.0);
    }
}

#[test]
fn last_julian_and_first_gregorian_days_are_adjacent() {
    let last_julian = julian_day(1582, 10, 4, 0, 0, 0, 0);
    let first_gregorian = julian_day(1582, 10, 15, 0, 0, 0, 0);
    assert_eq!(first_gregorian - last_julian, 1.0);
}
