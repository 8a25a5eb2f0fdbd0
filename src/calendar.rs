// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil calendar ⇄ Julian Day conversion.
//!
//! Dates are reckoned in the **Julian calendar** up to 1582-10-04 and in the
//! **Gregorian calendar** from 1582-10-15 onwards, both extended proleptically
//! and using astronomical year numbering (year 0 exists, 1 BCE = 0).
//!
//! The forward and backward conversions follow Meeus, *Astronomical
//! Algorithms* (2nd ed. 1998), ch. 7, with `floor` everywhere so negative
//! years come out right.  Both are total: any input produces a number, and
//! nonsensical fields (month 13, day −4, …) are extrapolated rather than
//! rejected.  Use [`CivilDateTime::validate`] when a checked path is needed.
//!
//! ```
//! use apside::{calendar_date, julian_day, CivilDateTime};
//!
//! assert_eq!(julian_day(2000, 1, 1, 12, 0, 0, 0), 2_451_545.0);
//! assert_eq!(
//!     calendar_date(2_451_545.0),
//!     CivilDateTime::date(2000, 1, 1).with_time(12, 0, 0)
//! );
//! ```

use crate::error::{CalendarError, Result};

/// First day number `floor(JD + 0.5)` reckoned in the Gregorian calendar
/// (1582-10-15).
pub const GREGORIAN_REFORM_DAY_NUMBER: f64 = 2_299_161.0;

/// JD of 0000-03-01 minus the month term, i.e. the constant of Meeus eq. 7.1.
const JULIAN_DAY_OFFSET: f64 = 1_720_994.5;

/// A calendar date and time of day.
///
/// Fields are plain integers so the forward conversion can accept anything,
/// including out-of-range values.  [`calendar_date`] always produces
/// canonical values except for the hour-24 wrap described there.
///
/// The derived ordering is chronological for canonical values.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CivilDateTime {
    /// Astronomical year (… −1, 0, 1, …).
    pub year: i64,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
    pub microsecond: i32,
}

impl CivilDateTime {
    /// Build from every field.
    #[inline]
    pub const fn new(
        year: i64,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
        microsecond: i32,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            microsecond,
        }
    }

    /// Midnight at the start of the given date.
    #[inline]
    pub const fn date(year: i64, month: i32, day: i32) -> Self {
        Self::new(year, month, day, 0, 0, 0, 0)
    }

    /// Replace hour, minute and second, keeping the microsecond.
    #[inline]
    pub const fn with_time(self, hour: i32, minute: i32, second: i32) -> Self {
        Self {
            hour,
            minute,
            second,
            ..self
        }
    }

    #[inline]
    pub const fn with_microsecond(self, microsecond: i32) -> Self {
        Self {
            microsecond,
            ..self
        }
    }

    /// Day of month plus the time of day as a fraction of a day.
    pub fn fractional_day(&self) -> f64 {
        fractional_day(
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.microsecond,
        )
    }

    /// Whether this date falls on or after the Gregorian reform
    /// (1582-10-15).
    pub fn is_gregorian(&self) -> bool {
        is_gregorian(self.year, self.month, self.fractional_day())
    }

    /// Julian Day of this date-time.  See [`julian_day`].
    #[inline]
    pub fn julian_day(&self) -> f64 {
        julian_day(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.microsecond,
        )
    }

    /// Calendar date-time of a Julian Day.  See [`calendar_date`].
    #[inline]
    pub fn from_julian_day(jd: f64) -> Self {
        calendar_date(jd)
    }

    /// Like [`from_julian_day`](Self::from_julian_day) but rejects NaN and
    /// infinities instead of returning saturated fields.
    pub fn try_from_julian_day(jd: f64) -> Result<Self> {
        if !jd.is_finite() {
            return Err(CalendarError::NonFiniteJulianDay(jd));
        }
        Ok(calendar_date(jd))
    }

    /// Check that every field is in its canonical range and that the date
    /// exists in the calendar in force at the time.
    ///
    /// This is an optional pre-check; the conversions never call it.
    pub fn validate(&self) -> Result<()> {
        check_field("month", self.month, 1, 12)?;
        check_field("hour", self.hour, 0, 23)?;
        check_field("minute", self.minute, 0, 59)?;
        check_field("second", self.second, 0, 59)?;
        check_field("microsecond", self.microsecond, 0, 999_999)?;

        let last = days_in_month(self.year, self.month).unwrap_or(31);
        if self.day < 1 || self.day > last {
            return Err(CalendarError::DayOutOfRange {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        if self.year == 1582 && self.month == 10 && (5..15).contains(&self.day) {
            return Err(CalendarError::ReformGap { day: self.day });
        }
        Ok(())
    }
}

fn check_field(field: &'static str, value: i32, min: i32, max: i32) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(CalendarError::FieldOutOfRange { field, value })
    }
}

impl From<(i64, i32, i32, i32, i32, i32, i32)> for CivilDateTime {
    fn from(
        (year, month, day, hour, minute, second, microsecond): (i64, i32, i32, i32, i32, i32, i32),
    ) -> Self {
        Self::new(year, month, day, hour, minute, second, microsecond)
    }
}

impl From<CivilDateTime> for (i64, i32, i32, i32, i32, i32, i32) {
    fn from(c: CivilDateTime) -> Self {
        (
            c.year,
            c.month,
            c.day,
            c.hour,
            c.minute,
            c.second,
            c.microsecond,
        )
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Calendar rules
// ═══════════════════════════════════════════════════════════════════════════

/// Leap-year rule of the calendar in force: Julian (every 4th year) before
/// 1582, Gregorian from 1582 on.
pub const fn is_leap_year(year: i64) -> bool {
    if year < 1582 {
        year % 4 == 0
    } else {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }
}

/// Number of days in `month` of `year`, or `None` for a month outside 1–12.
///
/// October 1582 reports 31: its day numbers run to 31 even though
/// 5–14 were skipped.
pub const fn days_in_month(year: i64, month: i32) -> Option<i32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

/// Gregorian iff on or after 1582-10-15; `day` carries the time of day.
#[inline]
fn is_gregorian(year: i64, month: i32, day: f64) -> bool {
    year > 1582 || (year == 1582 && (month > 10 || (month == 10 && day >= 15.0)))
}

#[inline]
fn fractional_day(day: i32, hour: i32, minute: i32, second: i32, microsecond: i32) -> f64 {
    f64::from(day)
        + (f64::from(hour)
            + f64::from(minute) / 60.0
            + f64::from(second) / 3_600.0
            + f64::from(microsecond) / 3.6e9)
            / 24.0
}

// ═══════════════════════════════════════════════════════════════════════════
// Forward: calendar → JD
// ═══════════════════════════════════════════════════════════════════════════

/// Julian Day of a calendar date-time (Meeus eq. 7.1).
///
/// Midnight maps to a JD ending in `.5`.  Dates before 1582-10-15 are read
/// in the Julian calendar, later dates in the Gregorian calendar.  Never
/// fails: out-of-range fields are extrapolated.
///
/// ```
/// use apside::julian_day;
///
/// // Origin of the Julian Day count: noon, 1 January 4713 BCE (Julian).
/// assert_eq!(julian_day(-4712, 1, 1, 12, 0, 0, 0), 0.0);
/// // The last Julian and first Gregorian days are consecutive.
/// assert_eq!(julian_day(1582, 10, 4, 0, 0, 0, 0), 2_299_159.5);
/// assert_eq!(julian_day(1582, 10, 15, 0, 0, 0, 0), 2_299_160.5);
/// ```
pub fn julian_day(
    year: i64,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: i32,
    microsecond: i32,
) -> f64 {
    let day = fractional_day(day, hour, minute, second, microsecond);
    let gregorian = is_gregorian(year, month, day);

    // January and February count as months 13 and 14 of the previous year.
    let (year, month) = if month <= 2 {
        (year as f64 - 1.0, f64::from(month) + 12.0)
    } else {
        (year as f64, f64::from(month))
    };

    let a = (year / 100.0).floor();
    let b = if gregorian {
        2.0 - a + (a / 4.0).floor()
    } else {
        0.0
    };
    let c = (365.25 * year).floor();
    let d = (30.6001 * (month + 1.0)).floor();

    b + c + d + day + JULIAN_DAY_OFFSET
}

// ═══════════════════════════════════════════════════════════════════════════
// Backward: JD → calendar
// ═══════════════════════════════════════════════════════════════════════════

/// Calendar date-time of a Julian Day (Meeus ch. 7).
///
/// The calendar is chosen from the day number: `floor(JD + 0.5) ≥ 2 299 161`
/// is Gregorian, anything earlier Julian.  The time of day is peeled off the
/// day fraction hour, minute, second in turn, and the remainder is rounded
/// to the nearest microsecond.  A rounded-up microsecond carries into the
/// second, minute and hour; an hour that reaches 24 wraps to 0 **without**
/// advancing the day.
///
/// Never fails.  Fields are produced with saturating float-to-int casts, so
/// non-finite input decays to zero (or saturated) fields; use
/// [`CivilDateTime::try_from_julian_day`] to reject it.
pub fn calendar_date(jd: f64) -> CivilDateTime {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;

    let a = if z >= GREGORIAN_REFORM_DAY_NUMBER {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    } else {
        z
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    let day_number = day.floor();
    let mut frac = day - day_number;
    let hours = (frac * 24.0).floor();
    frac = frac * 24.0 - hours;
    let minutes = (frac * 60.0).floor();
    frac = frac * 60.0 - minutes;
    let seconds = (frac * 60.0).floor();
    frac = frac * 60.0 - seconds;
    let micros = (frac * 1_000_000.0).round_ties_even();

    let mut hour = hours as i32;
    let mut minute = minutes as i32;
    let mut second = seconds as i32;
    let mut microsecond = micros as i32;

    if microsecond == 1_000_000 {
        microsecond = 0;
        second += 1;
    }
    if second == 60 {
        second = 0;
        minute += 1;
    }
    if minute == 60 {
        minute = 0;
        hour += 1;
    }
    if hour == 24 {
        // The day is left as is; only the clock wraps.
        hour = 0;
    }

    CivilDateTime::new(
        year as i64,
        month as i32,
        day_number as i32,
        hour,
        minute,
        second,
        microsecond,
    )
}
