//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use super::calendar_view::CalendarView;
use crate::calendar::accessibility::cell_label;
use crate::constants::KEY_HINTS;

/// Status bar showing the current selection and key hints
pub struct StatusBar;

impl StatusBar {
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, picker: &CalendarView) {
        let status_text = match picker.form_value() {
            Some((name, value)) => format!("{name} = {value} • {KEY_HINTS}"),
            None => format!(
                "selected {} • {KEY_HINTS}",
                cell_label(picker.selected_date())
            ),
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));

        f.render_widget(status_bar, area);
    }
}
