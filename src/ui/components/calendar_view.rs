//! Date-grid picker component
//!
//! The presentational layer over the calendar engine: renders the month
//! title live region, the prev/next month controls, and the 6x7 day grid,
//! and forwards key presses and mouse clicks into the reducer. Focus and
//! tab-stop bookkeeping are derived from state on every pass; the only
//! imperative step is the post-render focus reconciliation.

use chrono::{Datelike, NaiveDate, Weekday};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use crate::calendar::accessibility::{self, CellFlags, LiveRegion, Politeness};
use crate::calendar::grid::{visible_grid, VisibleGrid, GRID_WEEKS, WEEK_LEN};
use crate::calendar::keyboard::KeyboardNavigationController;
use crate::calendar::policy::{self, Bounds};
use crate::calendar::state::{CalendarAction, CalendarState, Transition};
use crate::constants::{
    CELL_SPACING, CELL_WIDTH, MONTH_TITLE_FORMAT, NEXT_MONTH_LABEL, PREV_MONTH_LABEL,
};
use crate::ui::core::{Action, Component};
use crate::utils::date::{format_ymd, today, weekday_abbrev};

/// Host predicate marking extra days unselectable
pub type DisabledDateFn = Box<dyn Fn(NaiveDate) -> bool>;
/// Host callback producing per-day supplementary cell content
pub type TileContentFn = Box<dyn Fn(NaiveDate) -> Option<String>>;

/// Host-facing configuration of one picker instance
pub struct CalendarOptions {
    /// Seed date; defaults to today at construction time
    pub initial_date: Option<NaiveDate>,
    /// Inclusive lower bound on navigable/selectable dates
    pub min: Option<NaiveDate>,
    /// Inclusive upper bound on navigable/selectable dates
    pub max: Option<NaiveDate>,
    /// First day of the week in the grid
    pub week_start: Weekday,
    /// Announcement urgency of the title live region
    pub politeness: Politeness,
    /// Month/year title format
    pub title_format: String,
    /// When set, the selection is exposed as a named submittable value
    pub name: Option<String>,
    pub disabled_date: Option<DisabledDateFn>,
    pub tile_content: Option<TileContentFn>,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            initial_date: None,
            min: None,
            max: None,
            week_start: Weekday::Sun,
            politeness: Politeness::default(),
            title_format: MONTH_TITLE_FORMAT.to_string(),
            name: None,
            disabled_date: None,
            tile_content: None,
        }
    }
}

/// The date-grid picker widget
pub struct CalendarView {
    state: CalendarState,
    keyboard: KeyboardNavigationController,
    options: CalendarOptions,
    live_region: LiveRegion,
    /// Cell holding real input focus, reconciled post-render
    focused_cell: Option<NaiveDate>,
    // Hit-testing geometry from the last render pass
    grid_area: Option<Rect>,
    prev_area: Option<Rect>,
    next_area: Option<Rect>,
}

impl CalendarView {
    pub fn new(options: CalendarOptions) -> Self {
        let initial = options.initial_date.unwrap_or_else(today);
        let bounds = Bounds::new(options.min, options.max);
        let state = CalendarState::new(initial, bounds);
        let mut live_region = LiveRegion::new(options.politeness);
        // Seed the region so mounting does not count as a month change
        live_region.announce(
            &state
                .active_month()
                .format(options.title_format.as_str())
                .to_string(),
        );

        Self {
            keyboard: KeyboardNavigationController::new(options.week_start),
            state,
            options,
            live_region,
            focused_cell: None,
            grid_area: None,
            prev_area: None,
            next_area: None,
        }
    }

    pub fn state(&self) -> &CalendarState {
        &self.state
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.state.selected_date()
    }

    pub fn active_date(&self) -> NaiveDate {
        self.state.active_date()
    }

    /// Month/year title for the current active month
    pub fn title(&self) -> String {
        self.state
            .active_month()
            .format(self.options.title_format.as_str())
            .to_string()
    }

    pub fn live_region(&self) -> &LiveRegion {
        &self.live_region
    }

    /// Cell identity referenced as the grid's active descendant
    pub fn active_descendant(&self) -> String {
        accessibility::cell_id(self.state.active_date())
    }

    /// The single cell in the tab order, derived from state
    pub fn tab_stop(&self) -> NaiveDate {
        self.state.active_date()
    }

    /// Cell holding real input focus, if focus has entered the grid
    pub fn focused_cell(&self) -> Option<NaiveDate> {
        self.focused_cell
    }

    /// Named submittable value of the current selection
    pub fn form_value(&self) -> Option<(&str, String)> {
        self.options
            .name
            .as_deref()
            .map(|name| (name, format_ymd(self.state.selected_date())))
    }

    /// The 42-day window for the current active month
    pub fn grid(&self) -> VisibleGrid {
        visible_grid(self.state.active_month(), self.options.week_start)
    }

    /// Composed availability check: bounds plus host predicate
    pub fn is_day_disabled(&self, day: NaiveDate) -> bool {
        policy::is_disabled(day, self.state.bounds(), self.options.disabled_date.as_deref())
    }

    /// Flags for one cell; all of them may co-occur
    pub fn cell_flags(&self, day: NaiveDate) -> CellFlags {
        self.flags_for(day, &self.grid(), today())
    }

    /// One-way host sync: realign the widget to an externally controlled
    /// date. Never emits a selection action and never moves focus.
    pub fn set_date(&mut self, day: NaiveDate) {
        if self.state.sync_with_host(day).changed_state() {
            log::debug!("host sync realigned selection to {}", format_ymd(day));
        }
    }

    /// Pointer selection of a specific day, guarded by the disabled check
    pub fn click(&mut self, day: NaiveDate) -> Action {
        if self.is_day_disabled(day) {
            log::debug!("click on disabled day {} ignored", format_ymd(day));
            return Action::None;
        }
        match self.state.apply(CalendarAction::Select(day)) {
            Transition::Committed(committed) => Action::Selected(committed),
            _ => Action::None,
        }
    }

    /// Commit-phase step, run after the frame reflecting the latest state
    /// has been drawn: moves input focus to the pending keyboard target. Host
    /// driven updates never queue a target, so they cannot steal focus.
    pub fn reconcile_focus(&mut self) {
        let from_keyboard = self.state.take_keyboard_interaction();
        if let Some(day) = self.keyboard.take_pending_focus() {
            self.focused_cell = Some(day);
            log::debug!("focus moved to {}", accessibility::cell_id(day));
        } else {
            debug_assert!(!from_keyboard, "keyboard transition without focus target");
        }
    }

    fn prev_month(&mut self) {
        if !self.state.can_decrement_month() {
            return;
        }
        self.state.apply(CalendarAction::PrevMonth);
    }

    fn next_month(&mut self) {
        if !self.state.can_increment_month() {
            return;
        }
        self.state.apply(CalendarAction::NextMonth);
    }

    fn flags_for(&self, day: NaiveDate, grid: &VisibleGrid, today: NaiveDate) -> CellFlags {
        CellFlags {
            selected: day == self.state.selected_date(),
            active: day == self.state.active_date(),
            today: day == today,
            disabled: self.is_day_disabled(day),
            outside_month: grid.is_outside_month(day),
        }
    }

    fn day_cell(&self, day: NaiveDate, grid: &VisibleGrid, today: NaiveDate) -> Cell<'static> {
        let flags = self.flags_for(day, grid, today);
        let mut text = format!("{:>2}", day.day());
        if let Some(content) = self.options.tile_content.as_ref().and_then(|tc| tc(day)) {
            text.push(' ');
            text.push_str(&content);
        }

        let mut style = Style::default();
        if flags.outside_month {
            style = style.fg(Color::DarkGray);
        }
        if flags.disabled {
            style = style.add_modifier(Modifier::DIM | Modifier::CROSSED_OUT);
        }
        if flags.today {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        if flags.selected {
            style = style.bg(Color::Yellow).fg(Color::Black);
        }
        if flags.active {
            style = style.add_modifier(Modifier::REVERSED);
        }

        Cell::from(text).style(style)
    }

    fn render_title(&mut self, f: &mut Frame, area: Rect) {
        let title = self.title();
        self.live_region.announce(&title);
        let widget =
            Paragraph::new(title).style(Style::default().add_modifier(Modifier::BOLD));
        f.render_widget(widget, area);
    }

    fn render_nav(&mut self, f: &mut Frame, area: Rect) {
        let enabled = Style::default().fg(Color::Cyan);
        let disabled = Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM);

        let prev_style = if self.state.can_decrement_month() {
            enabled
        } else {
            disabled
        };
        let next_style = if self.state.can_increment_month() {
            enabled
        } else {
            disabled
        };

        let line = Line::from(vec![
            Span::styled(PREV_MONTH_LABEL, prev_style),
            Span::raw("  "),
            Span::styled(NEXT_MONTH_LABEL, next_style),
        ]);
        f.render_widget(Paragraph::new(line), area);

        let prev_width = (PREV_MONTH_LABEL.len() as u16).min(area.width);
        self.prev_area = Some(Rect::new(area.x, area.y, prev_width, 1));
        let next_x = area.x + PREV_MONTH_LABEL.len() as u16 + 2;
        self.next_area = if next_x < area.right() {
            let next_width = (NEXT_MONTH_LABEL.len() as u16).min(area.right() - next_x);
            Some(Rect::new(next_x, area.y, next_width, 1))
        } else {
            None
        };
    }

    fn render_grid(&mut self, f: &mut Frame, area: Rect) {
        let grid = self.grid();
        let today = today();

        let mut weekday = self.options.week_start;
        let mut header_cells = Vec::with_capacity(WEEK_LEN);
        for _ in 0..WEEK_LEN {
            header_cells.push(Cell::from(weekday_abbrev(weekday)));
            weekday = weekday.succ();
        }
        let header = Row::new(header_cells).style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = grid
            .weeks()
            .map(|week| {
                Row::new(
                    week.iter()
                        .map(|&day| self.day_cell(day, &grid, today))
                        .collect::<Vec<_>>(),
                )
            })
            .collect();

        let widths = [Constraint::Length(CELL_WIDTH); WEEK_LEN];
        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(CELL_SPACING);
        f.render_widget(table, area);

        self.grid_area = Some(area);
    }
}

impl Component for CalendarView {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('p') => {
                self.prev_month();
                Action::None
            }
            KeyCode::Char('n') => {
                self.next_month();
                Action::None
            }
            _ => {
                let bounds = self.state.bounds();
                let predicate = self.options.disabled_date.as_deref();
                let disabled = move |day: NaiveDate| policy::is_disabled(day, bounds, predicate);
                match self.keyboard.handle_key(key, &mut self.state, &disabled) {
                    Transition::Committed(day) => Action::Selected(day),
                    _ => Action::None,
                }
            }
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return Action::None;
        }
        let pos = Position::new(mouse.column, mouse.row);

        if self.prev_area.is_some_and(|a| a.contains(pos)) {
            self.prev_month();
            return Action::None;
        }
        if self.next_area.is_some_and(|a| a.contains(pos)) {
            self.next_month();
            return Action::None;
        }

        let Some(area) = self.grid_area else {
            return Action::None;
        };
        if !area.contains(pos) {
            return Action::None;
        }
        let rel_y = pos.y - area.y;
        if rel_y == 0 {
            // weekday header row
            return Action::None;
        }
        let row = (rel_y - 1) as usize;
        let col = ((pos.x - area.x) / (CELL_WIDTH + CELL_SPACING)) as usize;
        match self.grid().day_at(row, col) {
            Some(day) => self.click(day),
            None => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(GRID_WEEKS as u16 + 1),
            ])
            .split(rect);

        self.render_title(f, chunks[0]);
        self.render_nav(f, chunks[1]);
        self.render_grid(f, chunks[2]);
    }
}
