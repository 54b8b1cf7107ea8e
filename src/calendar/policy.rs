//! Date range and availability policy
//!
//! Pure functions deciding whether a day is navigable/selectable. Bounds are
//! inclusive on both ends: a day equal to `min` or `max` is in range and
//! selectable. A host-supplied predicate can disable additional days; it is
//! OR-composed with the bounds check.

use chrono::NaiveDate;

/// Host-supplied predicate marking extra days unselectable
pub type DisabledPredicate = dyn Fn(NaiveDate) -> bool;

/// Inclusive minimum/maximum navigable and selectable date range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

impl Bounds {
    pub fn new(min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        Self { min, max }
    }

    /// Method form of [`is_within_bounds`]
    pub fn contains(&self, day: NaiveDate) -> bool {
        is_within_bounds(day, self.min, self.max)
    }
}

/// True when `day` lies in the inclusive range `[min, max]`.
///
/// An absent endpoint leaves that side open; with both absent every day is in
/// range. Same-day equality with either endpoint counts as satisfying it.
pub fn is_within_bounds(day: NaiveDate, min: Option<NaiveDate>, max: Option<NaiveDate>) -> bool {
    min.map_or(true, |m| day >= m) && max.map_or(true, |m| day <= m)
}

/// Final per-day disabled state: out of bounds, or rejected by the host
/// predicate when one is supplied.
pub fn is_disabled(day: NaiveDate, bounds: Bounds, predicate: Option<&DisabledPredicate>) -> bool {
    !bounds.contains(day) || predicate.is_some_and(|p| p(day))
}
