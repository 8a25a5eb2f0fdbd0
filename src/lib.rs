// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date ⇄ civil calendar conversion.
//!
//! This crate converts calendar date-times to and from the **Julian Date**,
//! the continuous day count used in astronomy, so that elapsed time between
//! historical events can be computed as a plain subtraction.  Dates before
//! 1582-10-15 are read in the Julian calendar and later dates in the
//! Gregorian calendar; years use astronomical numbering (year 0 exists).
//!
//! # Core operations
//!
//! - [`julian_day`]: calendar fields → JD.
//! - [`calendar_date`]: JD → calendar fields.
//! - [`julian_day_from_datetime`] / [`julian_day_from_naive`] /
//!   [`julian_day_from_local`]: timestamps → UTC fields → JD.
//!
//! The conversions are total: they never fail and never validate.
//! [`CivilDateTime::validate`] is available as a separate pre-check.
//!
//! # Typed instants
//!
//! - [`Time<S>`]: generic instant parameterised by a [`TimeScale`] marker.
//! - [`JulianDate`]: type alias for `Time<JD>`.
//! - [`ModifiedJulianDate`]: type alias for `Time<MJD>`.
//!
//! | Marker | Scale |
//! |--------|-------|
//! | [`JD`] | Julian Date |
//! | [`MJD`] | Modified Julian Date |
//! | [`UnixTime`] | Days since the Unix epoch |
//!
//! ```
//! use apside::{CivilDateTime, JulianDate};
//!
//! let fall_of_rome = JulianDate::from_calendar(&CivilDateTime::date(476, 9, 4));
//! let columbus = JulianDate::from_calendar(&CivilDateTime::date(1492, 10, 12));
//! let elapsed = columbus - fall_of_rome;
//! assert_eq!(elapsed.value(), 371_132.0);
//! ```

mod calendar;
mod error;
pub(crate) mod instant;
mod julian_date_ext;
pub(crate) mod scales;
mod zone;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{
    calendar_date, days_in_month, is_leap_year, julian_day, CivilDateTime,
    GREGORIAN_REFORM_DAY_NUMBER,
};
pub use error::{CalendarError, Result};
pub use instant::{Time, TimeScale};
pub use scales::{UnixTime, JD, MJD};
pub use zone::{
    julian_day_from_datetime, julian_day_from_local, julian_day_from_naive, utc_fields,
};

// ── Type aliases ──────────────────────────────────────────────────────────

/// Julian Date: continuous count of days since noon, 1 January 4713 BCE
/// (Julian calendar).
///
/// This is a type alias for [`Time<JD>`].
pub type JulianDate = Time<JD>;

/// Modified Julian Date: `JD − 2 400 000.5`.
///
/// This is a type alias for [`Time<MJD>`].
pub type ModifiedJulianDate = Time<MJD>;
