//! Screen layout definitions for the TUI
//!
//! The campsite card sits on top and sizes itself to its description; the
//! comment list takes the rest of the screen.

use ratatui::layout::{Constraint, Layout, Rect};

/// Rows reserved for the comment list even when the card is tall
const MIN_COMMENTS_HEIGHT: u16 = 5;

/// Screen areas for the campsite screen
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Campsite card (name, description, actions)
    pub header: Rect,

    /// Comment list
    pub comments: Rect,
}

/// Split `area` into header and comment list for a card of `card_height` rows
pub fn create(area: Rect, card_height: u16) -> ScreenAreas {
    let max_header = area.height.saturating_sub(MIN_COMMENTS_HEIGHT).max(3);
    let header_height = card_height.min(max_header);

    let [header, comments] =
        Layout::vertical([Constraint::Length(header_height), Constraint::Min(0)]).areas(area);

    ScreenAreas { header, comments }
}
