//! nucamp-tui - Terminal UI for nucamp
//!
//! Renders the campsite info screen with ratatui. It wraps the
//! [`nucamp_app::Engine`] with terminal event polling and the view function.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
