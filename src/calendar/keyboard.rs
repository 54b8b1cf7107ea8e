//! Keyboard navigation controller
//!
//! Translates directional key input into reducer actions and keeps the focus
//! bookkeeping that assistive technology depends on. Movement is plain
//! calendar-day arithmetic (one day left/right, seven days up/down), never
//! row/column indexing, so stepping past the rendered window's edge resolves
//! to a real day and simply re-anchors the month.

use chrono::{Duration, NaiveDate, Weekday};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::calendar::grid::visible_grid;
use crate::calendar::state::{CalendarAction, CalendarState, Transition};
use crate::utils::date::end_of_month;

/// Per-day availability check, bounds and host predicate combined
pub type DisabledFn<'a> = &'a dyn Fn(NaiveDate) -> bool;

/// Keyboard state machine layered on the reducer.
///
/// Whenever a key it handled changes state, the controller records the new
/// active date as the pending focus target. The view consumes that target
/// after the next render; state changes that never pass through the
/// controller (host syncs) leave it empty, so programmatic updates cannot
/// steal focus.
pub struct KeyboardNavigationController {
    week_start: Weekday,
    pending_focus: Option<NaiveDate>,
}

impl KeyboardNavigationController {
    pub fn new(week_start: Weekday) -> Self {
        Self {
            week_start,
            pending_focus: None,
        }
    }

    /// Focus target awaiting reconciliation, if any
    pub fn pending_focus(&self) -> Option<NaiveDate> {
        self.pending_focus
    }

    /// Consume the pending focus target (post-render step)
    pub fn take_pending_focus(&mut self) -> Option<NaiveDate> {
        self.pending_focus.take()
    }

    /// Handle one key press against the current state.
    ///
    /// `disabled` is the composed availability check used to guard commits
    /// and to pick Home/End targets; pure navigation is constrained by
    /// bounds alone, inside the reducer.
    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        state: &mut CalendarState,
        disabled: DisabledFn,
    ) -> Transition {
        let active = state.active_date();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        let action = match key.code {
            KeyCode::Up => Some(CalendarAction::SetActive(active - Duration::days(7))),
            KeyCode::Down => Some(CalendarAction::SetActive(active + Duration::days(7))),
            KeyCode::Left => Some(CalendarAction::SetActive(active - Duration::days(1))),
            KeyCode::Right => Some(CalendarAction::SetActive(active + Duration::days(1))),
            KeyCode::Home if ctrl => {
                let grid = visible_grid(active, self.week_start);
                Some(CalendarAction::SetActive(grid.first()))
            }
            KeyCode::End if ctrl => {
                let grid = visible_grid(active, self.week_start);
                Some(CalendarAction::SetActive(grid.last()))
            }
            KeyCode::Home => first_selectable(state, disabled).map(CalendarAction::SetActive),
            KeyCode::End => last_selectable(state, disabled).map(CalendarAction::SetActive),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if disabled(active) {
                    None
                } else {
                    Some(CalendarAction::Select(active))
                }
            }
            _ => None,
        };

        let Some(action) = action else {
            return Transition::Ignored;
        };

        let transition = state.apply(action);
        if transition.changed_state() {
            self.pending_focus = Some(state.active_date());
        }
        transition
    }
}

/// First non-disabled day of the active month, scanning forward
fn first_selectable(state: &CalendarState, disabled: DisabledFn) -> Option<NaiveDate> {
    let mut day = state.active_month();
    let last = end_of_month(day);
    while day <= last {
        if !disabled(day) {
            return Some(day);
        }
        day = day + Duration::days(1);
    }
    None
}

/// Last non-disabled day of the active month, scanning backward
fn last_selectable(state: &CalendarState, disabled: DisabledFn) -> Option<NaiveDate> {
    let first = state.active_month();
    let mut day = end_of_month(first);
    while day >= first {
        if !disabled(day) {
            return Some(day);
        }
        day = day - Duration::days(1);
    }
    None
}
