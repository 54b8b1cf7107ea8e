//! UI components

pub mod calendar_view;
pub mod help_panel;
pub mod status_bar;

pub use calendar_view::{CalendarOptions, CalendarView};
pub use help_panel::HelpPanel;
pub use status_bar::StatusBar;
