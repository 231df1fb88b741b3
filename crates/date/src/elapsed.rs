use chrono::{DateTime, Datelike, TimeZone, Timelike};

use crate::parse::string2date_in;

/// Elapsed time between two instants as `HH:MM:SS`.
///
/// Whole seconds only; hours keep counting past 24. Returns an empty string
/// when `end` is before `start`.
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use handy_date::diff_time;
///
/// let tz = FixedOffset::east_opt(8 * 3600).unwrap();
/// let start = tz.with_ymd_and_hms(2018, 7, 6, 9, 29, 57).unwrap();
/// let end = tz.with_ymd_and_hms(2018, 7, 6, 18, 15, 32).unwrap();
/// assert_eq!(diff_time(&start, &end), "08:45:35");
/// assert_eq!(diff_time(&end, &start), "");
/// ```
pub fn diff_time<A: TimeZone, B: TimeZone>(start: &DateTime<A>, end: &DateTime<B>) -> String {
    let diff_ms = end.timestamp_millis() - start.timestamp_millis();
    if diff_ms < 0 {
        return String::new();
    }
    let secs = diff_ms / 1000;
    format!("{:02}:{:02}:{:02}", secs / 3600, secs % 3600 / 60, secs % 60)
}

/// The wall-clock fields read as one `YYYYMMDDHHMMSS` decimal number.
fn compact_stamp<Tz: TimeZone>(date: &DateTime<Tz>) -> i64 {
    let date_part = i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day());
    let time_part = i64::from(date.hour()) * 10_000 + i64::from(date.minute()) * 100 + i64::from(date.second());
    date_part * 1_000_000 + time_part
}

/// Age in whole years at `now` for someone born at `birthday`.
///
/// Both instants are read as `YYYYMMDDHHMMSS` numbers and subtracted; the
/// year digits of the difference are the age. A year is only counted once
/// the month, day and time of the birthday have been reached, and a
/// birthday after `now` gives a negative age.
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use handy_date::calc_age;
///
/// let tz = FixedOffset::east_opt(8 * 3600).unwrap();
/// let born = tz.with_ymd_and_hms(2000, 3, 2, 0, 0, 0).unwrap();
/// assert_eq!(calc_age(&tz.with_ymd_and_hms(2018, 3, 1, 23, 59, 59).unwrap(), &born), 17);
/// assert_eq!(calc_age(&tz.with_ymd_and_hms(2018, 3, 2, 0, 0, 0).unwrap(), &born), 18);
/// ```
pub fn calc_age<A: TimeZone, B: TimeZone>(now: &DateTime<A>, birthday: &DateTime<B>) -> i64 {
    (compact_stamp(now) - compact_stamp(birthday)).div_euclid(10_000_000_000)
}

/// [`calc_age`] with the birthday given as a date string, read in `now`'s
/// zone. `None` when the string is not a date.
pub fn calc_age_str<Tz: TimeZone>(now: &DateTime<Tz>, birthday: &str) -> Option<i64> {
    let birthday = string2date_in(birthday, &now.timezone())?;
    Some(calc_age(now, &birthday))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, Utc};

    fn at(y: i32, m: u32, d: u32, h: u32, i: u32, s: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(8 * 3600)
            .unwrap()
            .with_ymd_and_hms(y, m, d, h, i, s)
            .unwrap()
    }

    #[test]
    fn test_diff_time_same_instant() {
        let t = at(2018, 7, 6, 9, 0, 0);
        assert_eq!(diff_time(&t, &t), "00:00:00");
    }

    #[test]
    fn test_diff_time_hours_accumulate() {
        assert_eq!(diff_time(&at(2018, 7, 6, 0, 0, 0), &at(2018, 7, 8, 1, 2, 3)), "49:02:03");
    }

    #[test]
    fn test_diff_time_drops_fraction() {
        let start = at(2018, 7, 6, 0, 0, 0);
        let naive = NaiveDate::from_ymd_opt(2018, 7, 6).unwrap().and_hms_milli_opt(0, 0, 1, 999).unwrap();
        let end = start.timezone().from_local_datetime(&naive).unwrap();
        assert_eq!(diff_time(&start, &end), "00:00:01");
    }

    #[test]
    fn test_diff_time_across_zones() {
        let start = at(2018, 7, 6, 9, 0, 0);
        let end = Utc.with_ymd_and_hms(2018, 7, 6, 2, 30, 0).unwrap();
        assert_eq!(diff_time(&start, &end), "01:30:00");
    }

    #[test]
    fn test_compact_stamp() {
        assert_eq!(compact_stamp(&at(2017, 1, 2, 3, 4, 5)), 20_170_102_030_405);
    }

    #[test]
    fn test_calc_age_boundaries() {
        let born = at(2000, 2, 29, 12, 0, 0);
        assert_eq!(calc_age(&at(2000, 2, 29, 12, 0, 0), &born), 0);
        assert_eq!(calc_age(&at(2001, 2, 28, 23, 59, 59), &born), 0);
        assert_eq!(calc_age(&at(2001, 3, 1, 0, 0, 0), &born), 1);
        assert_eq!(calc_age(&at(2004, 2, 29, 11, 59, 59), &born), 3);
        assert_eq!(calc_age(&at(2004, 2, 29, 12, 0, 0), &born), 4);
    }

    #[test]
    fn test_calc_age_not_year_subtraction() {
        let born = at(1990, 12, 31, 0, 0, 0);
        let now = at(2018, 1, 1, 0, 0, 0);
        assert_eq!(calc_age(&now, &born), 27);
    }

    #[test]
    fn test_calc_age_future_birthday() {
        assert_eq!(calc_age(&at(2018, 1, 1, 0, 0, 0), &at(2018, 6, 1, 0, 0, 0)), -1);
    }

    #[test]
    fn test_calc_age_str() {
        let now = at(2018, 7, 6, 9, 0, 0);
        assert_eq!(calc_age_str(&now, "19800706"), Some(38));
        assert_eq!(calc_age_str(&now, "1980-07-07"), Some(37));
        assert_eq!(calc_age_str(&now, "1980-07-06 09:00:01"), Some(37));
        assert_eq!(calc_age_str(&now, "July 1980"), None);
    }
}
