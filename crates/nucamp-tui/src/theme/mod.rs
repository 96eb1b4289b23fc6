//! Centralized theme for the campsite screen.
//!
//! - `palette` - Raw color constants
//! - `styles` - Semantic style builder functions
//! - `icons` - Glyphs with ASCII fallbacks

pub mod icons;
pub mod palette;
pub mod styles;
