//! Dategrid - An accessible date-grid picker for the terminal
//!
//! This library provides an interactive month-grid date picker widget built
//! with Ratatui: a 6x7 grid of days with month navigation, keyboard and
//! mouse selection, min/max bounds, host-supplied disabled-day predicates,
//! and an accessibility surface (stable cell identities, active-descendant
//! reference, announce-on-change month title).
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`calendar`] - The core interaction engine: range policy, grid
//!   generation, state reducer, keyboard navigation, accessibility metadata
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface components and the demo application
//! * [`utils`] - Calendar-day helper functions

/// Core interaction engine for the date grid
pub mod calendar;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Typed configuration and setup errors
pub mod error;

/// Logging setup for debugging and tracing interactions
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date handling
pub mod utils;

// Re-export the widget surface for convenient access
pub use calendar::{Bounds, CalendarAction, CalendarState, Transition};
pub use ui::components::{CalendarOptions, CalendarView};
