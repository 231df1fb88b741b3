use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Timelike};

use crate::calendar::resolve_local;

const MIDNIGHT: &str = " 00:00:00";

const DATE_TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Render a compact numeric date/time string in display form.
///
/// | input length | output |
/// |---|---|
/// | 17 | `YYYY-MM-DD HH:MM:SS:MMM` |
/// | 14 | `YYYY-MM-DD HH:MM:SS` |
/// | 12 | `YYYY-MM-DD HH:MM` |
/// | 8 | `YYYY-MM-DD` |
/// | 6 | `HH:MM:SS` |
/// | 4 | `HH:MM` |
///
/// Any other length comes back unchanged.
///
/// # Examples
///
/// ```
/// use handy_date::string2dtl;
///
/// assert_eq!(string2dtl("20171018153834"), "2017-10-18 15:38:34");
/// assert_eq!(string2dtl("20171018"), "2017-10-18");
/// assert_eq!(string2dtl("1538"), "15:38");
/// assert_eq!(string2dtl("2017-10-18"), "2017-10-18");
/// ```
pub fn string2dtl(v: &str) -> String {
    let chars: Vec<char> = v.chars().collect();
    let part = |start: usize, len: usize| -> String { chars[start..start + len].iter().collect() };
    match chars.len() {
        len @ (17 | 14 | 12) => {
            let mut s = format!(
                "{}-{}-{} {}:{}",
                part(0, 4),
                part(4, 2),
                part(6, 2),
                part(8, 2),
                part(10, 2)
            );
            if len >= 14 {
                s.push(':');
                s.push_str(&part(12, 2));
            }
            if len >= 17 {
                s.push(':');
                s.push_str(&part(14, 3));
            }
            s
        }
        8 => format!("{}-{}-{}", part(0, 4), part(4, 2), part(6, 2)),
        6 => format!("{}:{}:{}", part(0, 2), part(2, 2), part(4, 2)),
        4 => format!("{}:{}", part(0, 2), part(2, 2)),
        _ => v.to_string(),
    }
}

/// Milliseconds written after the seconds, as in `:123` or `.5`.
fn trailing_millis(tail: &str) -> Option<u32> {
    if tail.is_empty() || tail.len() > 3 || !tail.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: u32 = tail.parse().ok()?;
    Some(value * 10u32.pow(3 - tail.len() as u32))
}

fn parse_slashed(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, DATE_TIME_FORMAT) {
        return Some(dt);
    }
    let (head, tail) = s.rsplit_once([':', '.'])?;
    let millis = trailing_millis(tail)?;
    NaiveDateTime::parse_from_str(head, DATE_TIME_FORMAT)
        .ok()?
        .with_nanosecond(millis * 1_000_000)
}

/// Parse a date string to wall-clock fields without a zone.
///
/// The string is first put through [`string2dtl`]. Anything shorter than a
/// full date (10 characters) is rejected; a missing time of day is filled
/// with midnight (`2017-10-18 15:38` reads as `15:38:00`). `-` and `/` both
/// separate the date fields, and milliseconds may follow the seconds after
/// `:` or `.`. Impossible dates such as February 30 are rejected.
///
/// # Examples
///
/// ```
/// use handy_date::parse_date_time;
///
/// let dt = parse_date_time("201710181538").unwrap();
/// assert_eq!(dt.to_string(), "2017-10-18 15:38:00");
/// assert!(parse_date_time("1538").is_none());
/// ```
pub fn parse_date_time(v: &str) -> Option<NaiveDateTime> {
    let normalized = string2dtl(v);
    let len = normalized.chars().count();
    if len < 10 {
        tracing::trace!(input = %v, "date string too short");
        return None;
    }
    let mut s = normalized.replace('-', "/");
    if len < 19 {
        s.push_str(MIDNIGHT.get(len - 10..).unwrap_or_default());
    }
    let parsed = parse_slashed(&s);
    if parsed.is_none() {
        tracing::trace!(input = %v, normalized = %s, "date string not parseable");
    }
    parsed
}

/// Parse a date string as local wall-clock time in `tz`.
///
/// See [`parse_date_time`] for the accepted forms. `None` when the string is
/// not a date. Times skipped or repeated by the zone resolve as in
/// [`resolve_local`](crate::resolve_local).
pub fn string2date_in<Tz: TimeZone>(v: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let naive = parse_date_time(v)?;
    resolve_local(tz, &naive)
}

/// Parse a date string as host-local time.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS`, `YYYYMMDD`, `YYYYMMDDHHMMSS`
/// and the other forms listed under [`parse_date_time`].
pub fn string2date(v: &str) -> Option<DateTime<Local>> {
    string2date_in(v, &Local)
}

/// Whether date string `a` is strictly later than date string `b`.
///
/// Both are read as wall-clock times in the same zone. Equal times, and
/// strings that are not dates, give `false`.
///
/// # Examples
///
/// ```
/// use handy_date::compare_date_time;
///
/// assert!(compare_date_time("2018-07-06 18:15:32", "2018-07-06 09:29:57"));
/// assert!(!compare_date_time("2018-07-06", "2018/07/06 00:00:00"));
/// assert!(!compare_date_time("soon", "2018-07-06"));
/// ```
pub fn compare_date_time(a: &str, b: &str) -> bool {
    match (parse_date_time(a), parse_date_time(b)) {
        (Some(a), Some(b)) => a > b,
        _ => false,
    }
}
