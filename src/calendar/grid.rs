//! Month grid generation
//!
//! Produces the visible 6x7 window of days for an anchor month. The window
//! always holds exactly 42 consecutive days starting on the week containing
//! the 1st of the month, so the layout never shifts between 28 and 31 day
//! months. Leading and trailing cells belong to adjacent months; callers mark
//! those by month identity against the anchor, never by range bounds.

use chrono::{Duration, NaiveDate, Weekday};

use crate::utils::date::{same_month, start_of_month, start_of_week};

/// Days per grid row
pub const WEEK_LEN: usize = 7;
/// Rows in the visible grid
pub const GRID_WEEKS: usize = 6;
/// Total cells in the visible grid
pub const GRID_LEN: usize = WEEK_LEN * GRID_WEEKS;

/// The 42-day window rendered for one anchor month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleGrid {
    anchor: NaiveDate,
    days: Vec<NaiveDate>,
}

impl VisibleGrid {
    /// All 42 days in render order
    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    /// The grid split into its 6 week rows
    pub fn weeks(&self) -> impl Iterator<Item = &[NaiveDate]> {
        self.days.chunks(WEEK_LEN)
    }

    /// First cell of the grid (top-left)
    pub fn first(&self) -> NaiveDate {
        self.days[0]
    }

    /// Last cell of the grid (bottom-right)
    pub fn last(&self) -> NaiveDate {
        self.days[GRID_LEN - 1]
    }

    /// First day of the anchor month this grid was generated for
    pub fn anchor_month(&self) -> NaiveDate {
        self.anchor
    }

    /// Whether a cell belongs to an adjacent month rather than the anchor
    pub fn is_outside_month(&self, day: NaiveDate) -> bool {
        !same_month(day, self.anchor)
    }

    /// Day at a 0-based (row, column) position, when inside the grid
    pub fn day_at(&self, row: usize, col: usize) -> Option<NaiveDate> {
        if row >= GRID_WEEKS || col >= WEEK_LEN {
            return None;
        }
        self.days.get(row * WEEK_LEN + col).copied()
    }
}

/// Generate the visible grid for the month containing `anchor`.
///
/// Locates the 1st of the anchor's month, backs up to the week start, then
/// emits 42 consecutive days.
pub fn visible_grid(anchor: NaiveDate, week_start: Weekday) -> VisibleGrid {
    let month_start = start_of_month(anchor);
    let grid_start = start_of_week(month_start, week_start);
    let days = (0..GRID_LEN as i64)
        .map(|n| grid_start + Duration::days(n))
        .collect();

    VisibleGrid {
        anchor: month_start,
        days,
    }
}
