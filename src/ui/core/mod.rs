//! Shared building blocks for UI components

pub mod actions;
pub mod component;

pub use actions::Action;
pub use component::Component;
