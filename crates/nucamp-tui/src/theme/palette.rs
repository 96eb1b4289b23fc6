//! Color palette.
//!
//! The modal title purple and the comment heading slate follow the mobile
//! app's colors; everything else maps to named terminal colors.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;
pub const POPUP_BG: Color = Color::Rgb(28, 28, 36);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const MODAL_TITLE_BG: Color = Color::Rgb(86, 55, 221);
pub const COMMENTS_TITLE: Color = Color::Rgb(67, 72, 77);

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Markers ---
pub const FAVORITE: Color = Color::Red;
pub const STAR_FILLED: Color = Color::Yellow;
pub const STAR_EMPTY: Color = Color::DarkGray;
pub const SELECTED_BG: Color = Color::Rgb(40, 44, 52);

// --- Buttons ---
pub const BUTTON_SUBMIT: Color = Color::Rgb(86, 55, 221);
pub const BUTTON_CANCEL: Color = Color::Rgb(128, 128, 128);

// --- Effects ---
pub const SHADOW: Color = Color::Black;
