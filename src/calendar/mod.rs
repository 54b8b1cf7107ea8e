//! Core interaction engine for the date grid
//!
//! Everything in this module is independent of the terminal: the range
//! policy, the 6x7 month grid generator, the state reducer and the keyboard
//! navigation controller are pure calendar logic that the UI layer renders
//! and drives.

pub mod accessibility;
pub mod grid;
pub mod keyboard;
pub mod policy;
pub mod state;

pub use grid::{visible_grid, VisibleGrid};
pub use keyboard::KeyboardNavigationController;
pub use policy::Bounds;
pub use state::{CalendarAction, CalendarState, Transition};
