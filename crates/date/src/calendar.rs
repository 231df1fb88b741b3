use chrono::{DateTime, Datelike, Duration, NaiveDateTime, Offset, TimeZone, Utc};

/// Weekday names from Sunday (index 0) to Saturday.
pub const WEEKDAYS_CN: [&str; 7] = ["日", "一", "二", "三", "四", "五", "六"];

/// Gregorian leap-year rule.
///
/// # Examples
///
/// ```
/// use handy_date::is_leap_year;
///
/// assert!(is_leap_year(2012));
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// assert!(!is_leap_year(2017));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Leap-year test on the year of a date.
pub fn is_leap_year_of<D: Datelike>(date: &D) -> bool {
    is_leap_year(date.year())
}

/// Number of days in `month` (1-12) of `year`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Number of days in the month a date falls in.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use handy_date::get_day_num;
///
/// assert_eq!(get_day_num(&NaiveDate::from_ymd_opt(2012, 2, 10).unwrap()), 29);
/// assert_eq!(get_day_num(&NaiveDate::from_ymd_opt(2017, 4, 1).unwrap()), 30);
/// ```
pub fn get_day_num<D: Datelike>(date: &D) -> u32 {
    days_in_month(date.year(), date.month())
}

/// Weekday name of the date's UTC day (not its local day).
pub fn get_utc_day_cn<Tz: TimeZone>(date: &DateTime<Tz>) -> &'static str {
    let weekday = date.with_timezone(&Utc).weekday();
    WEEKDAYS_CN[weekday.num_days_from_sunday() as usize]
}

/// Pin a wall-clock time to an instant in `tz`.
///
/// An ambiguous time (clocks turned back) takes the earlier instant. A time
/// skipped by a forward jump is read with the offset in force before the
/// jump, which moves it forward by the jump's length (`02:30` in a one-hour
/// gap becomes `03:30`). `None` only when the result is out of range.
pub fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: &NaiveDateTime) -> Option<DateTime<Tz>> {
    if let Some(date) = tz.from_local_datetime(naive).earliest() {
        return Some(date);
    }
    let before = naive.checked_sub_signed(Duration::days(1))?;
    let offset = tz.offset_from_utc_datetime(&before).fix();
    let utc = naive.checked_sub_signed(Duration::seconds(i64::from(offset.local_minus_utc())))?;
    tracing::trace!(%naive, "wall-clock time skipped by the zone, moved forward");
    Some(tz.from_utc_datetime(&utc))
}
