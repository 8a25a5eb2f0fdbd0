use apside::{
    calendar_date, julian_day, julian_day_from_datetime, julian_day_from_naive, CivilDateTime,
    JulianDate, ModifiedJulianDate,
};
use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use qtty::Days;

#[test]
fn j2000_reference_point() {
    assert_eq!(julian_day(2000, 1, 1, 12, 0, 0, 0), 2_451_545.0);
    assert_eq!(
        JulianDate::from_calendar(&CivilDateTime::date(2000, 1, 1).with_time(12, 0, 0)),
        JulianDate::J2000
    );
}

#[test]
fn origin_of_the_day_count() {
    assert_eq!(julian_day(-4712, 1, 1, 12, 0, 0, 0), 0.0);
}

#[test]
fn reform_boundary_both_directions() {
    assert_eq!(julian_day(1582, 10, 4, 0, 0, 0, 0), 2_299_159.5);
    assert_eq!(julian_day(1582, 10, 15, 0, 0, 0, 0), 2_299_160.5);
    assert_eq!(
        calendar_date(2_299_159.5),
        CivilDateTime::date(1582, 10, 4)
    );
    assert_eq!(
        calendar_date(2_299_160.5),
        CivilDateTime::date(1582, 10, 15)
    );
    assert_eq!(
        calendar_date(2_299_161.0),
        CivilDateTime::date(1582, 10, 15).with_time(12, 0, 0)
    );
}

#[test]
fn backward_then_forward_recovers_sample_days() {
    for jd in [0.0, 2_451_545.0, 2_299_160.5, 2_299_161.0, -1000.25, -12_345.75] {
        let back = calendar_date(jd).julian_day();
        assert!((back - jd).abs() < 1e-9, "JD {jd} came back as {back}");
    }
}

#[test]
fn timezone_adapter_matches_utc() {
    let utc = Utc.with_ymd_and_hms(1969, 7, 20, 20, 17, 40).unwrap();
    let houston = FixedOffset::west_opt(5 * 3_600)
        .unwrap()
        .with_ymd_and_hms(1969, 7, 20, 15, 17, 40)
        .unwrap();
    let naive_houston = NaiveDate::from_ymd_opt(1969, 7, 20)
        .unwrap()
        .and_hms_opt(15, 17, 40)
        .unwrap();
    let zone = FixedOffset::west_opt(5 * 3_600).unwrap();

    let jd = julian_day_from_datetime(&utc);
    assert_eq!(julian_day_from_datetime(&houston), jd);
    assert_eq!(julian_day_from_naive(naive_houston, &zone), jd);
    assert_eq!(jd, julian_day(1969, 7, 20, 20, 17, 40, 0));
}

#[test]
fn elapsed_days_between_historical_events() {
    // Julius Caesar's death (Julian calendar) to the Moon landing.
    let ides = JulianDate::from_calendar(&CivilDateTime::date(-43, 3, 15));
    let apollo = JulianDate::from_utc(Utc.with_ymd_and_hms(1969, 7, 20, 0, 0, 0).unwrap());
    let elapsed = apollo - ides;
    assert_eq!(elapsed, Days::new(2_440_422.5 - 1_705_425.5));
}

#[test]
fn mjd_round_trip_through_calendar() {
    let mjd = ModifiedJulianDate::new(60_000.25);
    let civil = mjd.to_calendar();
    assert_eq!(
        (civil.year, civil.month, civil.day, civil.hour),
        (2023, 2, 25, 6)
    );
    let back = ModifiedJulianDate::from_calendar(&civil);
    assert!((back - mjd).abs() < Days::new(1e-9));
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trips_civil_date_time_and_time() {
    let civil = CivilDateTime::date(1582, 10, 15).with_time(12, 30, 0);
    let json = serde_json::to_string(&civil).unwrap();
    assert!(json.contains("\"microsecond\":0"));
    let back: CivilDateTime = serde_json::from_str(&json).unwrap();
    assert_eq!(back, civil);

    let jd = JulianDate::J2000;
    let json = serde_json::to_string(&jd).unwrap();
    assert_eq!(json, "2451545.0");
    let back: JulianDate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, jd);
}
