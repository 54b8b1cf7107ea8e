//! Demo host application
//!
//! Hosts one picker the way the original host shell did: selection bounded
//! to the next three months, a named submittable value, and a status bar
//! echoing the committed choice.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::config::Config;
use crate::constants::DEFAULT_FORM_NAME;
use crate::ui::components::{CalendarOptions, CalendarView, HelpPanel, StatusBar};
use crate::ui::core::{Action, Component};
use crate::utils::date::{add_months, format_ymd, today};

pub struct App {
    picker: CalendarView,
    show_help: bool,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Result<Self> {
        let start = today();
        let options = CalendarOptions {
            initial_date: Some(start),
            min: Some(start),
            max: Some(add_months(start, 3)),
            week_start: config.ui.week_start()?,
            politeness: config.ui.announce,
            title_format: config.display.month_title_format.clone(),
            name: Some(DEFAULT_FORM_NAME.to_string()),
            ..CalendarOptions::default()
        };

        Ok(Self {
            picker: CalendarView::new(options),
            show_help: false,
            should_quit: false,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = !self.show_help,
            KeyCode::Esc if self.show_help => self.show_help = false,
            _ if self.show_help => {}
            _ => {
                let action = self.picker.handle_key_events(key);
                self.process(action);
            }
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.show_help {
            return;
        }
        let action = self.picker.handle_mouse_events(mouse);
        self.process(action);
    }

    fn process(&mut self, action: Action) {
        match action {
            Action::Selected(day) => {
                log::info!("host received selection {}", format_ymd(day));
            }
            Action::ShowHelp(visible) => self.show_help = visible,
            Action::Quit => self.should_quit = true,
            Action::None => {}
        }
    }

    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(9), Constraint::Length(1)])
            .split(f.area());

        self.picker.render(f, chunks[0]);
        StatusBar::render(f, chunks[1], &self.picker);

        if self.show_help {
            HelpPanel::render(f, f.area());
        }
    }

    /// Commit phase: run after every draw so focus reconciliation always
    /// sees a frame that reflects the latest state.
    pub fn after_render(&mut self) {
        self.picker.reconcile_focus();
    }
}
