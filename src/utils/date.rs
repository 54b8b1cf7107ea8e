//! Calendar-day helpers
//!
//! This module provides the month and week arithmetic the date grid is built
//! on. Everything works on `chrono::NaiveDate` at calendar-day granularity;
//! there are no time-of-day semantics anywhere in the crate.

use chrono::{Datelike, Duration, Local, Months, NaiveDate, Weekday};

/// Standard date format used for parsing, form values and logging
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Current local calendar day
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// First day of the month containing `d`
pub fn start_of_month(d: NaiveDate) -> NaiveDate {
    d.with_day(1).unwrap_or(d)
}

/// Last day of the month containing `d`
pub fn end_of_month(d: NaiveDate) -> NaiveDate {
    add_months(start_of_month(d), 1) - Duration::days(1)
}

/// Shift a date by whole calendar months.
///
/// The day of month is preserved where valid and clamped to the target
/// month's last day otherwise (Jan 31 + 1 month = Feb 28/29). Out-of-range
/// results fall back to the input date.
pub fn add_months(d: NaiveDate, delta: i32) -> NaiveDate {
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        d.checked_add_months(months)
    } else {
        d.checked_sub_months(months)
    };
    shifted.unwrap_or(d)
}

/// First day of the week containing `d`, for the given week-start convention
pub fn start_of_week(d: NaiveDate, week_start: Weekday) -> NaiveDate {
    d - Duration::days(i64::from(d.weekday().days_since(week_start)))
}

/// Whether two days fall in the same calendar month (month identity)
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Three-letter weekday abbreviation for grid headers
pub fn weekday_abbrev(w: Weekday) -> &'static str {
    match w {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}
