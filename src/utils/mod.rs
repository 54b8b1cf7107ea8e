//! Utility functions and helpers

pub mod date;
