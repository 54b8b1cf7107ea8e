//! Terminal user interface
//!
//! Terminal setup/teardown and the synchronous event loop. Events are
//! processed one at a time: handle, draw, then reconcile focus, so every
//! focus movement happens against a frame that already shows the new state.

pub mod app;
pub mod components;
pub mod core;
pub mod layout;

pub use app::App;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::time::Duration;

use crate::config::Config;

/// Run the picker demo application
pub fn run_app(config: &Config) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if config.ui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config)?;
    let res = run_ui(&mut terminal, &mut app);

    disable_raw_mode()?;
    if config.ui.mouse_enabled {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    res
}

/// Main UI loop
fn run_ui(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;
        app.after_render();

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
