use chrono::{NaiveDate, Weekday};
use dategrid::utils::date::*;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_format_ymd() {
    assert_eq!(format_ymd(d(1995, 6, 18)), "1995-06-18");
}

#[test]
fn test_parse_date_roundtrip() {
    let date = parse_date("1995-06-18").unwrap();
    assert_eq!(date, d(1995, 6, 18));
    assert_eq!(format_ymd(date), "1995-06-18");
}

#[test]
fn test_parse_date_rejects_garbage() {
    assert!(parse_date("june 18th").is_err());
}

#[test]
fn test_start_of_month() {
    assert_eq!(start_of_month(d(1995, 6, 18)), d(1995, 6, 1));
    assert_eq!(start_of_month(d(1995, 6, 1)), d(1995, 6, 1));
}

#[test]
fn test_end_of_month() {
    assert_eq!(end_of_month(d(1995, 6, 18)), d(1995, 6, 30));
    assert_eq!(end_of_month(d(1995, 2, 10)), d(1995, 2, 28));
    // leap year
    assert_eq!(end_of_month(d(1996, 2, 10)), d(1996, 2, 29));
    assert_eq!(end_of_month(d(1995, 12, 31)), d(1995, 12, 31));
}

#[test]
fn test_add_months_plain() {
    assert_eq!(add_months(d(1995, 6, 18), 1), d(1995, 7, 18));
    assert_eq!(add_months(d(1995, 6, 18), -1), d(1995, 5, 18));
}

#[test]
fn test_add_months_clamps_to_target_month_length() {
    assert_eq!(add_months(d(2023, 1, 31), 1), d(2023, 2, 28));
    assert_eq!(add_months(d(1995, 5, 31), 1), d(1995, 6, 30));
    assert_eq!(add_months(d(1995, 3, 31), -1), d(1995, 2, 28));
}

#[test]
fn test_add_months_crosses_year() {
    assert_eq!(add_months(d(1995, 12, 15), 1), d(1996, 1, 15));
    assert_eq!(add_months(d(1995, 1, 15), -1), d(1994, 12, 15));
}

#[test]
fn test_start_of_week_sunday() {
    // June 1 1995 was a Thursday
    assert_eq!(start_of_week(d(1995, 6, 1), Weekday::Sun), d(1995, 5, 28));
    // already a Sunday
    assert_eq!(start_of_week(d(1995, 6, 18), Weekday::Sun), d(1995, 6, 18));
}

#[test]
fn test_start_of_week_monday() {
    assert_eq!(start_of_week(d(1995, 6, 1), Weekday::Mon), d(1995, 5, 29));
}

#[test]
fn test_same_month() {
    assert!(same_month(d(1995, 6, 1), d(1995, 6, 30)));
    assert!(!same_month(d(1995, 6, 30), d(1995, 7, 1)));
    assert!(!same_month(d(1994, 6, 18), d(1995, 6, 18)));
}

#[test]
fn test_weekday_abbrev() {
    assert_eq!(weekday_abbrev(Weekday::Sun), "Sun");
    assert_eq!(weekday_abbrev(Weekday::Wed), "Wed");
}
