use chrono::NaiveDate;
use dategrid::calendar::policy::{is_disabled, is_within_bounds, Bounds};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_no_bounds_everything_in_range() {
    assert!(is_within_bounds(d(1995, 6, 18), None, None));
    assert!(is_within_bounds(d(1, 1, 1), None, None));
}

#[test]
fn test_min_is_inclusive() {
    let min = Some(d(1995, 6, 15));
    assert!(is_within_bounds(d(1995, 6, 15), min, None));
    assert!(is_within_bounds(d(1995, 6, 16), min, None));
    assert!(!is_within_bounds(d(1995, 6, 14), min, None));
}

#[test]
fn test_max_is_inclusive() {
    let max = Some(d(1995, 7, 15));
    assert!(is_within_bounds(d(1995, 7, 15), None, max));
    assert!(is_within_bounds(d(1995, 7, 14), None, max));
    assert!(!is_within_bounds(d(1995, 7, 16), None, max));
}

#[test]
fn test_single_day_range() {
    let day = d(1995, 6, 18);
    assert!(is_within_bounds(day, Some(day), Some(day)));
    assert!(!is_within_bounds(d(1995, 6, 17), Some(day), Some(day)));
    assert!(!is_within_bounds(d(1995, 6, 19), Some(day), Some(day)));
}

#[test]
fn test_within_bounds_is_monotonic() {
    let min = Some(d(1995, 6, 1));
    let max = Some(d(1995, 6, 30));
    let d1 = d(1995, 6, 1);
    let d2 = d(1995, 6, 15);
    let d3 = d(1995, 6, 30);
    assert!(d1 <= d2 && d2 <= d3);
    assert!(is_within_bounds(d1, min, max));
    assert!(is_within_bounds(d3, min, max));
    assert!(is_within_bounds(d2, min, max));
}

#[test]
fn test_bounds_contains() {
    let bounds = Bounds::new(Some(d(1995, 6, 1)), Some(d(1995, 6, 30)));
    assert!(bounds.contains(d(1995, 6, 18)));
    assert!(!bounds.contains(d(1995, 5, 31)));
    assert!(!bounds.contains(d(1995, 7, 1)));

    assert!(Bounds::default().contains(d(1995, 6, 18)));
}

#[test]
fn test_is_disabled_composes_predicate_with_bounds() {
    let bounds = Bounds::new(Some(d(1995, 6, 1)), Some(d(1995, 6, 30)));
    let reject_18th: &dategrid::calendar::policy::DisabledPredicate =
        &|day: NaiveDate| day == d(1995, 6, 18);

    // out of bounds, regardless of predicate
    assert!(is_disabled(d(1995, 5, 31), bounds, None));
    assert!(is_disabled(d(1995, 5, 31), bounds, Some(reject_18th)));

    // within bounds but rejected by the predicate
    assert!(is_disabled(d(1995, 6, 18), bounds, Some(reject_18th)));

    // within bounds and accepted
    assert!(!is_disabled(d(1995, 6, 17), bounds, Some(reject_18th)));
    assert!(!is_disabled(d(1995, 6, 18), bounds, None));
}
