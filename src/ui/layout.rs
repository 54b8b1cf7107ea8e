//! Layout helpers

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Centered rectangle of the given size, clamped to the containing area
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height.min(r.height)),
            Constraint::Fill(1),
        ])
        .split(r);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width.min(r.width)),
            Constraint::Fill(1),
        ])
        .split(vertical[1]);

    horizontal[1]
}
