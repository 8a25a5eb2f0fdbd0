// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date (`Time<JD>`) specific extensions.

use chrono::Weekday;
use qtty::*;

use super::instant::Time;
use super::scales::{JD, MJD};

impl Time<JD> {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// Midnight starting 1582-10-15, the first day of the Gregorian calendar.
    pub const GREGORIAN_REFORM: Self = Self::new(2_299_160.5);

    /// One Julian year expressed in days.
    pub const JULIAN_YEAR: Days = Days::new(365.25);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// Julian centuries since J2000.0.
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new(
            ((*self - Self::J2000) / Self::JULIAN_CENTURY)
                .simplify()
                .value(),
        )
    }

    /// Julian years since J2000.0.
    #[inline]
    pub fn julian_years(&self) -> JulianYears {
        JulianYears::new(
            ((*self - Self::J2000) / Self::JULIAN_YEAR)
                .simplify()
                .value(),
        )
    }

    /// Day of the week of the calendar date containing this instant.
    ///
    /// Meeus ch. 7: `floor(JD + 1.5) mod 7`, with 0 = Sunday.  The weekday
    /// cycle is unbroken by the calendar reform.
    pub fn weekday(&self) -> Weekday {
        match (self.value() + 1.5).floor().rem_euclid(7.0) as u8 {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }

    /// Convenience: MJD value corresponding to this JD.
    #[inline]
    pub fn to_mjd(&self) -> Time<MJD> {
        self.to::<MJD>()
    }
}

impl From<JulianYears> for Time<JD> {
    fn from(years: JulianYears) -> Self {
        Self::J2000 + years.to::<Day>()
    }
}

impl From<Time<JD>> for JulianYears {
    fn from(jd: Time<JD>) -> Self {
        jd.julian_years()
    }
}

impl From<Centuries> for Time<JD> {
    fn from(centuries: Centuries) -> Self {
        // `Centuries` are interpreted as Julian centuries relative to J2000.
        Self::J2000 + Days::new(centuries.value() * Self::JULIAN_CENTURY.value())
    }
}

impl From<Time<JD>> for Centuries {
    fn from(jd: Time<JD>) -> Self {
        jd.julian_centuries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CivilDateTime;

    #[test]
    fn gregorian_reform_constant_matches_calendar() {
        let first = Time::<JD>::from_calendar(&CivilDateTime::date(1582, 10, 15));
        assert_eq!(first, Time::<JD>::GREGORIAN_REFORM);
        assert_eq!(
            Time::<JD>::GREGORIAN_REFORM.to_calendar(),
            CivilDateTime::date(1582, 10, 15)
        );
    }

    #[test]
    fn julian_centuries_and_years() {
        let jd = Time::<JD>::J2000 + Days::new(36_525.0 * 3.0);
        assert!((jd.julian_centuries() - Centuries::new(3.0)).abs() < Centuries::new(1e-12));
        assert!((jd.julian_years() - JulianYears::new(300.0)).abs() < JulianYears::new(1e-9));
    }

    #[test]
    fn into_julian_years_roundtrip() {
        let jd = Time::<JD>::J2000 + Days::new(365.25 * 2.0);
        let years: JulianYears = jd.into();
        assert!((years - JulianYears::new(2.0)).abs() < JulianYears::new(1e-12));

        let roundtrip = Time::<JD>::from(years);
        assert!((roundtrip.quantity() - jd.quantity()).abs() < Days::new(1e-9));
    }

    #[test]
    fn into_centuries_roundtrip() {
        let centuries = Centuries::new(-1.5);
        let jd = Time::<JD>::from(centuries);
        assert_eq!(jd.value(), 2_451_545.0 - 54_787.5);
        let back: Centuries = jd.into();
        assert!((back - centuries).abs() < Centuries::new(1e-12));
    }

    #[test]
    fn weekdays() {
        // 2000-01-01 was a Saturday.
        assert_eq!(Time::<JD>::J2000.weekday(), Weekday::Sat);
        // Meeus example 7.e: 1954-06-30 was a Wednesday.
        let jd = Time::<JD>::from_calendar(&CivilDateTime::date(1954, 6, 30));
        assert_eq!(jd.weekday(), Weekday::Wed);
        // Thursday 4 October 1582 was followed by Friday 15 October.
        let last_julian = Time::<JD>::from_calendar(&CivilDateTime::date(1582, 10, 4));
        assert_eq!(last_julian.weekday(), Weekday::Thu);
        assert_eq!(Time::<JD>::GREGORIAN_REFORM.weekday(), Weekday::Fri);
        // Negative JD: the cycle continues backwards.
        let origin = Time::<JD>::new(0.0);
        assert_eq!(origin.weekday(), Weekday::Mon);
        assert_eq!((origin - Days::new(7.0)).weekday(), Weekday::Mon);
        assert_eq!((origin - Days::new(1.0)).weekday(), Weekday::Sun);
    }

    #[test]
    fn to_mjd() {
        assert_eq!(Time::<JD>::J2000.to_mjd().value(), 51_544.5);
    }
}
