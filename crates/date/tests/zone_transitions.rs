//! Wall-clock times that a zone skips or repeats.
//!
//! Runs in its own test binary so the host zone can be pinned through `TZ`.

use chrono::{Local, Offset, TimeZone, Timelike};
use handy_date::{add, format_default, string2date};

/// US Eastern rules: clocks jump 02:00 -> 03:00 on the second Sunday of March
/// and fall back 02:00 -> 01:00 on the first Sunday of November.
fn eastern_host_zone() {
    std::env::set_var("TZ", "EST5EDT,M3.2.0,M11.1.0");
}

#[test]
fn add_month_into_skipped_hour_moves_forward() {
    eastern_host_zone();
    let date = Local.with_ymd_and_hms(2017, 2, 12, 2, 30, 0).unwrap();
    let next = add(&date, "1m").unwrap();
    assert_eq!(format_default(&next), "2017-03-12 03:30:00");
}

#[test]
fn add_year_into_skipped_hour_moves_forward() {
    eastern_host_zone();
    let date = Local.with_ymd_and_hms(2016, 3, 12, 2, 15, 0).unwrap();
    let next = add(&date, "1Y").unwrap();
    assert_eq!(format_default(&next), "2017-03-12 03:15:00");
}

#[test]
fn string2date_in_skipped_hour_moves_forward() {
    eastern_host_zone();
    let date = string2date("2017-03-12 02:30:00").unwrap();
    assert_eq!(format_default(&date), "2017-03-12 03:30:00");
    assert_eq!(date.offset().fix().local_minus_utc(), -4 * 3600);
}

#[test]
fn string2date_in_repeated_hour_takes_earlier() {
    eastern_host_zone();
    let date = string2date("2017-11-05 01:30:00").unwrap();
    assert_eq!((date.hour(), date.minute()), (1, 30));
    assert_eq!(date.offset().fix().local_minus_utc(), -4 * 3600);
}
