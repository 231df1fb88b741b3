use std::fmt::Write;

use chrono::{DateTime, Datelike, TimeZone, Timelike};

use crate::calendar::get_utc_day_cn;
use crate::clock::{Clock, SystemClock};

/// Format used when none is given: `2017-10-18 15:38:34`.
pub const DEFAULT_FORMAT: &str = "Y-m-d H:i:s";

/// Render a date through a token string.
///
/// | token | output |
/// |-------|--------|
/// | `Y` | full year |
/// | `y` | year without its first two digits |
/// | `m` / `n` | month, zero-padded / bare |
/// | `d` / `j` | day of month, zero-padded / bare |
/// | `H` `i` `s` | hour, minute, second, zero-padded |
/// | `M` | milliseconds, three digits |
/// | `N` | weekday name of the UTC day, see [`get_utc_day_cn`] |
///
/// Any other character is copied as-is. Fields are read in the date's own
/// zone.
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use handy_date::format;
///
/// let tz = FixedOffset::east_opt(8 * 3600).unwrap();
/// let date = tz.with_ymd_and_hms(2017, 10, 18, 15, 38, 34).unwrap();
/// assert_eq!(format(&date, "Y-m-d H:i:s"), "2017-10-18 15:38:34");
/// assert_eq!(format(&date, "Y年m月d日 星期N"), "2017年10月18日 星期三");
/// ```
pub fn format<Tz: TimeZone>(date: &DateTime<Tz>, format_str: &str) -> String {
    let mut out = String::with_capacity(format_str.len() * 2);
    for c in format_str.chars() {
        let _ = match c {
            'Y' => write!(out, "{}", date.year()),
            'y' => out.write_str(date.year().to_string().get(2..).unwrap_or_default()),
            'm' => write!(out, "{:02}", date.month()),
            'n' => write!(out, "{}", date.month()),
            'd' => write!(out, "{:02}", date.day()),
            'j' => write!(out, "{}", date.day()),
            'H' => write!(out, "{:02}", date.hour()),
            'i' => write!(out, "{:02}", date.minute()),
            's' => write!(out, "{:02}", date.second()),
            'M' => write!(out, "{:03}", date.timestamp_subsec_millis() % 1000),
            'N' => out.write_str(get_utc_day_cn(date)),
            other => out.write_char(other),
        };
    }
    out
}

/// [`format`] with [`DEFAULT_FORMAT`].
pub fn format_default<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    format(date, DEFAULT_FORMAT)
}

/// Format the current local time.
pub fn format_now(format_str: &str) -> String {
    format_now_with(&SystemClock, format_str)
}

/// Format the time read from `clock`.
pub fn format_now_with<C: Clock>(clock: &C, format_str: &str) -> String {
    format(&clock.now(), format_str)
}
