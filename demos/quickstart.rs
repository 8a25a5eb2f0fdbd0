use apside::{calendar_date, CivilDateTime, JulianDate, ModifiedJulianDate, MJD};
use chrono::Utc;

fn main() {
    let now_jd = JulianDate::from_utc(Utc::now());
    let now_mjd: ModifiedJulianDate = now_jd.to::<MJD>();

    println!("JD: {now_jd}");
    println!("MJD: {now_mjd}");
    println!("Weekday: {}", now_jd.weekday());
    println!("Calendar: {:?}", now_jd.to_calendar());

    let reform = CivilDateTime::date(1582, 10, 15);
    println!("Gregorian reform: JD {}", reform.julian_day());
    println!("Day before: {:?}", calendar_date(reform.julian_day() - 1.0));
}
