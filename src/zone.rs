// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Timestamp → Julian Day adapter.
//!
//! Timestamps are normalised to UTC and their calendar fields are handed to
//! [`julian_day`](crate::julian_day) unchanged; nothing here does calendar
//! arithmetic.  The fields are taken at face value: chrono labels every date
//! in the proleptic Gregorian calendar, while the forward conversion reads
//! dates before 1582-10-15 as Julian-calendar dates.
//!
//! Naive wall-clock times need a zone to be placed on the time line.  The
//! zone is always passed in explicitly; [`julian_day_from_local`] is the only
//! entry point that reads the host's zone, via [`chrono::Local`].

use chrono::{
    DateTime, Datelike, Local, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone, Timelike,
    Utc,
};
use tracing::debug;

use crate::calendar::CivilDateTime;

/// Calendar fields of a UTC timestamp.
///
/// Sub-microsecond precision is truncated.  A chrono leap second
/// (nanosecond ≥ 10⁹) is passed through as a microsecond ≥ 10⁶, which the
/// forward conversion folds into the next second.
pub fn utc_fields(datetime: &DateTime<Utc>) -> CivilDateTime {
    CivilDateTime::new(
        i64::from(datetime.year()),
        datetime.month() as i32,
        datetime.day() as i32,
        datetime.hour() as i32,
        datetime.minute() as i32,
        datetime.second() as i32,
        (datetime.nanosecond() / 1_000) as i32,
    )
}

/// Julian Day of an offset-carrying timestamp.
///
/// ```
/// use apside::julian_day_from_datetime;
/// use chrono::{FixedOffset, TimeZone, Utc};
///
/// let utc = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
/// let tokyo = FixedOffset::east_opt(9 * 3600)
///     .unwrap()
///     .with_ymd_and_hms(2000, 1, 1, 21, 0, 0)
///     .unwrap();
/// assert_eq!(julian_day_from_datetime(&utc), 2_451_545.0);
/// assert_eq!(julian_day_from_datetime(&tokyo), 2_451_545.0);
/// ```
pub fn julian_day_from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> f64 {
    utc_fields(&datetime.with_timezone(&Utc)).julian_day()
}

/// Julian Day of a naive wall-clock time read in `zone`.
///
/// Never fails.  A wall time that occurs twice (clocks turned back)
/// resolves to the earlier instant.  A wall time skipped by the zone (clocks
/// turned forward) is read with the offset in force after the jump, so
/// 02:30 in a 02:00→03:00 gap lands on the same instant as 01:30 before it.
pub fn julian_day_from_naive<Z: TimeZone>(naive: NaiveDateTime, zone: &Z) -> f64 {
    let utc = match zone.from_local_datetime(&naive) {
        LocalResult::Single(datetime) => datetime.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, latest) => {
            debug!(
                %naive,
                earliest = %earliest.with_timezone(&Utc),
                latest = %latest.with_timezone(&Utc),
                "ambiguous local time, using earliest"
            );
            earliest.with_timezone(&Utc)
        }
        LocalResult::None => {
            let utc = resolve_gap(naive, zone);
            debug!(%naive, %utc, "local time skipped by zone, using offset after the gap");
            utc
        }
    };
    julian_day_from_datetime(&utc)
}

/// UTC instant of a wall time that falls in a forward transition.
///
/// The offset a day earlier is the one before the gap; reading the wall time
/// with it lands past the transition, where the later offset is in force.
fn resolve_gap<Z: TimeZone>(naive: NaiveDateTime, zone: &Z) -> DateTime<Utc> {
    let day_before = naive.checked_sub_signed(TimeDelta::days(1)).unwrap_or(naive);
    let before = zone.offset_from_utc_datetime(&day_before).fix();
    let after = zone.offset_from_utc_datetime(&(naive - before)).fix();
    (naive - after).and_utc()
}

/// [`julian_day_from_naive`] in the host's local time zone.
pub fn julian_day_from_local(naive: NaiveDateTime) -> f64 {
    julian_day_from_naive(naive, &Local)
}
