use super::actions::Action;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

/// Interactive UI element: consumes input events, produces app-level
/// actions, and renders itself into a frame region.
pub trait Component {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    fn handle_mouse_events(&mut self, _mouse: MouseEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);
}
