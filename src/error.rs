// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for the checked edges of the crate.
//!
//! The calendar ↔ Julian Day arithmetic itself is total and never fails.
//! Errors only arise when a caller opts into validation.

use thiserror::Error;

/// Result alias used by the fallible entry points.
pub type Result<T> = std::result::Result<T, CalendarError>;

/// Errors raised by the validation layer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalendarError {
    /// A calendar field lies outside its canonical range.
    #[error("{field} out of range: {value}")]
    FieldOutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// Value that was supplied.
        value: i32,
    },

    /// The day exceeds the length of its month.
    #[error("day {day} does not exist in {year:04}-{month:02}")]
    DayOutOfRange { year: i64, month: i32, day: i32 },

    /// 1582-10-05 through 1582-10-14 were skipped by the Gregorian reform.
    #[error("1582-10-{day:02} falls in the Gregorian reform gap")]
    ReformGap { day: i32 },

    /// NaN or infinite Julian Day.
    #[error("Julian Day is not finite: {0}")]
    NonFiniteJulianDay(f64),
}
