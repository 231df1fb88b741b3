//! handy-date - Calendar arithmetic, token formatting and lenient parsing.
//!
//! Instants are `chrono::DateTime<Tz>` for any zone. Calendar fields are read
//! in the instant's own zone, except the weekday name, which always follows
//! the UTC day. Date strings are parsed as wall-clock time in a zone the
//! caller picks ([`string2date_in`]) or the host zone ([`string2date`]).
//!
//! # Example
//!
//! ```
//! use chrono::{FixedOffset, TimeZone};
//! use handy_date::{add, format, string2date_in};
//!
//! let tz = FixedOffset::east_opt(8 * 3600).unwrap();
//! let date = string2date_in("20171018153834", &tz).unwrap();
//! let next_month = add(&date, "1m").unwrap();
//! assert_eq!(format(&next_month, "Y/n/j H:i"), "2017/11/18 15:38");
//! ```

pub mod add;
pub mod calendar;
pub mod clock;
pub mod elapsed;
pub mod format;
pub mod offset;
pub mod parse;

pub use add::{add, add_format};
pub use calendar::{
    days_in_month, get_day_num, get_utc_day_cn, is_leap_year, is_leap_year_of, resolve_local,
    WEEKDAYS_CN,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use elapsed::{calc_age, calc_age_str, diff_time};
pub use format::{format, format_default, format_now, format_now_with, DEFAULT_FORMAT};
pub use offset::{DateOffset, DateUnit, OffsetParseError};
pub use parse::{compare_date_time, parse_date_time, string2date, string2date_in, string2dtl};
