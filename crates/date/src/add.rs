use chrono::{DateTime, Datelike, NaiveDate, TimeZone};

use crate::calendar::{days_in_month, resolve_local};
use crate::format::format;
use crate::offset::{DateOffset, DateUnit, OffsetParseError};

/// Years of larger magnitude are out of range.
const MAX_YEAR_SPAN: f64 = 1_000_000.0;

impl DateOffset {
    /// Apply this offset to `date`, returning a new instant.
    ///
    /// Years and months move the wall-clock calendar fields: the day of month
    /// is pinned to 1 while the month changes, then restored and clamped to
    /// the target month's last day (so `2012-02-29 + 1Y` is `2013-02-28`).
    /// Fractional amounts are truncated after being added to the field.
    /// Days and smaller units add a fixed number of milliseconds. A calendar
    /// step landing in a skipped wall-clock hour moves forward past it.
    ///
    /// Returns `None` when the result is not representable.
    pub fn apply<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        match self.unit.millis() {
            Some(unit_ms) => add_millis(date, self.amount * unit_ms),
            None => add_calendar(date, self.amount, self.unit),
        }
    }
}

fn add_millis<Tz: TimeZone>(date: &DateTime<Tz>, delta: f64) -> Option<DateTime<Tz>> {
    let ms = (date.timestamp_millis() as f64 + delta).trunc();
    if !ms.is_finite() || ms.abs() > i64::MAX as f64 {
        return None;
    }
    date.timezone().timestamp_millis_opt(ms as i64).single()
}

fn add_calendar<Tz: TimeZone>(date: &DateTime<Tz>, amount: f64, unit: DateUnit) -> Option<DateTime<Tz>> {
    let local = date.naive_local();
    let (year, month0) = match unit {
        DateUnit::Year => ((f64::from(local.year()) + amount).trunc(), i64::from(local.month0())),
        _ => {
            let total = (f64::from(local.month0()) + amount).trunc();
            if !total.is_finite() || total.abs() > MAX_YEAR_SPAN * 12.0 {
                return None;
            }
            let total = total as i64;
            (
                f64::from(local.year()) + total.div_euclid(12) as f64,
                total.rem_euclid(12),
            )
        }
    };
    if !year.is_finite() || year.abs() > MAX_YEAR_SPAN {
        return None;
    }
    let year = year as i32;
    let month = month0 as u32 + 1;
    let day = local.day().min(days_in_month(year, month));
    let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_time(local.time());
    resolve_local(&date.timezone(), &naive)
}

/// Step a date by an offset string such as `1Y`, `-2m`, `3d`, `12H`, `30i`
/// or `10s`. The input is left untouched.
///
/// An empty string or an unknown unit leaves the instant unchanged. A known
/// unit without a readable amount, or a result outside the representable
/// range, gives `None`.
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use handy_date::{add, format_default};
///
/// let tz = FixedOffset::east_opt(8 * 3600).unwrap();
/// let leap_day = tz.with_ymd_and_hms(2012, 2, 29, 16, 4, 0).unwrap();
/// let next = add(&leap_day, "1Y").unwrap();
/// assert_eq!(format_default(&next), "2013-02-28 16:04:00");
/// ```
pub fn add<Tz: TimeZone>(date: &DateTime<Tz>, spec: &str) -> Option<DateTime<Tz>> {
    match spec.parse::<DateOffset>() {
        Ok(offset) => offset.apply(date),
        Err(err @ (OffsetParseError::Empty | OffsetParseError::UnknownUnit(_))) => {
            tracing::trace!(%spec, error = %err, "date offset ignored");
            Some(date.clone())
        }
        Err(err) => {
            tracing::debug!(%spec, error = %err, "date offset rejected");
            None
        }
    }
}

/// [`add`], then [`format`] the result with `format_str`.
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use handy_date::add_format;
///
/// let tz = FixedOffset::east_opt(8 * 3600).unwrap();
/// let date = tz.with_ymd_and_hms(2017, 10, 18, 16, 4, 0).unwrap();
/// assert_eq!(add_format(&date, "-2m", "Y-m-d H:i:s").as_deref(), Some("2017-08-18 16:04:00"));
/// ```
pub fn add_format<Tz: TimeZone>(date: &DateTime<Tz>, spec: &str, format_str: &str) -> Option<String> {
    add(date, spec).map(|d| format(&d, format_str))
}
