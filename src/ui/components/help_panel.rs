//! Help panel component

use ratatui::{
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::layout::centered_rect;

/// Modal overlay listing the picker's key bindings
pub struct HelpPanel;

impl HelpPanel {
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect) {
        let help_content = r"
DATEGRID - date picker

NAVIGATION
----------
arrows      Move by one day / one week
Home/End    First / last selectable day of the month
Ctrl+Home   First cell of the grid
Ctrl+End    Last cell of the grid
p / n       Previous / next month

SELECTION
---------
Enter/Space Select the focused day
Click       Select a day, click prev/next to change month

GENERAL
-------
?           Toggle this panel
q           Quit

Press '?' or 'Esc' to close
";

        let help_area = centered_rect(44, 24, area);
        f.render_widget(Clear, help_area);

        let panel = Paragraph::new(help_content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help "),
        );
        f.render_widget(panel, help_area);
    }
}
