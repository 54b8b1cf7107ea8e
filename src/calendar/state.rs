//! Calendar state machine
//!
//! [`CalendarState`] owns the active date (logical keyboard focus), the
//! selected date (last committed choice) and the bounds. It is mutated only
//! through [`CalendarState::apply`], which processes one [`CalendarAction`]
//! at a time and reports what happened as a [`Transition`]. The active month
//! is always derived from the active date, never stored.

use chrono::{Duration, NaiveDate};

use crate::calendar::policy::Bounds;
use crate::utils::date::{add_months, format_ymd, start_of_month};

/// Discrete inputs to the reducer.
///
/// The enum is closed and `apply` matches it exhaustively, so an unknown
/// action is unrepresentable rather than a runtime error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarAction {
    /// Commit a day as the user's choice (also makes it active)
    Select(NaiveDate),
    /// Move logical keyboard focus to a day without selecting it
    SetActive(NaiveDate),
    /// Advance the active date by one calendar month
    NextMonth,
    /// Retreat the active date by one calendar month
    PrevMonth,
}

/// Outcome of applying an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A new selection was committed
    Committed(NaiveDate),
    /// The active date moved; the selection is untouched
    Moved,
    /// The action was absorbed as a no-op
    Ignored,
}

impl Transition {
    pub fn changed_state(&self) -> bool {
        !matches!(self, Transition::Ignored)
    }
}

/// State of one date-grid widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarState {
    active_date: NaiveDate,
    selected_date: NaiveDate,
    bounds: Bounds,
    keyboard_interaction: bool,
}

impl CalendarState {
    /// Seed state from the initial day; it starts both active and selected.
    pub fn new(initial: NaiveDate, bounds: Bounds) -> Self {
        Self {
            active_date: initial,
            selected_date: initial,
            bounds,
            keyboard_interaction: false,
        }
    }

    /// The day currently holding logical keyboard focus
    pub fn active_date(&self) -> NaiveDate {
        self.active_date
    }

    /// The last committed user choice
    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// First day of the displayed month, derived from the active date
    pub fn active_month(&self) -> NaiveDate {
        start_of_month(self.active_date)
    }

    /// Whether the latest accepted transition came from keyboard navigation
    /// and has not yet been consumed by focus reconciliation
    pub fn keyboard_interaction(&self) -> bool {
        self.keyboard_interaction
    }

    /// Consume the keyboard-interaction marker (focus reconciliation step)
    pub fn take_keyboard_interaction(&mut self) -> bool {
        std::mem::take(&mut self.keyboard_interaction)
    }

    /// Apply one action and report the resulting transition.
    pub fn apply(&mut self, action: CalendarAction) -> Transition {
        match action {
            CalendarAction::Select(day) => {
                // Idempotence: re-selecting the committed day is a no-op
                if day == self.selected_date {
                    return Transition::Ignored;
                }
                self.selected_date = day;
                self.active_date = day;
                log::info!("selection committed: {}", format_ymd(day));
                Transition::Committed(day)
            }
            CalendarAction::SetActive(day) => {
                if !self.bounds.contains(day) {
                    log::debug!("active date {} outside bounds, dropped", format_ymd(day));
                    return Transition::Ignored;
                }
                self.active_date = day;
                self.keyboard_interaction = true;
                Transition::Moved
            }
            CalendarAction::NextMonth => {
                let mut target = add_months(self.active_date, 1);
                if let Some(max) = self.bounds.max {
                    if target > max {
                        // Fallback anchor: the first day of the target month
                        target = start_of_month(target);
                        if target > max {
                            log::debug!("next month has no day within bounds, rejected");
                            return Transition::Ignored;
                        }
                    }
                }
                self.active_date = target;
                Transition::Moved
            }
            CalendarAction::PrevMonth => {
                let mut target = add_months(self.active_date, -1);
                if let Some(min) = self.bounds.min {
                    // Anchor to the precise boundary day, not the 1st
                    if target < min {
                        target = min;
                    }
                }
                self.active_date = target;
                Transition::Moved
            }
        }
    }

    /// One-way controlled-component sync: when the host-supplied date differs
    /// from the current selection by same-day comparison, realign through the
    /// reducer. Callers treat the result as programmatic (no focus movement,
    /// no selection callback).
    pub fn sync_with_host(&mut self, day: NaiveDate) -> Transition {
        if day == self.selected_date {
            return Transition::Ignored;
        }
        let transition = self.apply(CalendarAction::Select(day));
        self.keyboard_interaction = false;
        transition
    }

    /// Whether the previous month is reachable: false when even the last day
    /// of the prior month is before `min`.
    pub fn can_decrement_month(&self) -> bool {
        match self.bounds.min {
            Some(min) => self.active_month() - Duration::days(1) >= min,
            None => true,
        }
    }

    /// Whether the next month is reachable: false when even the first day of
    /// the next month is after `max`.
    pub fn can_increment_month(&self) -> bool {
        match self.bounds.max {
            Some(max) => add_months(self.active_month(), 1) <= max,
            None => true,
        }
    }
}
