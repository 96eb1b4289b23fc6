//! Main update function - handles state transitions (TEA pattern)

use super::{composer, keys, scroll, UpdateResult};
use crate::intent::Intent;
use crate::message::Message;
use crate::state::{AppPhase, AppState};
use nucamp_core::prelude::*;

/// Process a message and update state
/// Returns an optional action and follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match keys::handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        Message::Quit => {
            info!("Quit requested");
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Detail Header Actions
        // ─────────────────────────────────────────────────────────
        Message::ToggleFavorite => {
            debug!("Toggling favorite for campsite {}", state.campsite.id);
            UpdateResult::dispatch(Intent::ToggleFavorite(state.campsite.id))
        }
        Message::OpenComposer => composer::handle_open(state),

        // ─────────────────────────────────────────────────────────
        // Comment List Navigation
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll::handle_scroll_up(state),
        Message::ScrollDown => scroll::handle_scroll_down(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),
        Message::ScrollToBottom => scroll::handle_scroll_to_bottom(state),

        // ─────────────────────────────────────────────────────────
        // Composer Messages
        // ─────────────────────────────────────────────────────────
        Message::ComposerNextField => composer::handle_next_field(state),
        Message::ComposerPrevField => composer::handle_prev_field(state),
        Message::ComposerInput(c) => composer::handle_input(state, c),
        Message::ComposerBackspace => composer::handle_backspace(state),
        Message::ComposerSetRating(rating) => composer::handle_set_rating(state, rating),
        Message::ComposerRatingUp => composer::handle_rating_up(state),
        Message::ComposerRatingDown => composer::handle_rating_down(state),
        Message::ComposerActivate => composer::handle_activate(state),
        Message::SubmitComment => composer::handle_submit(state),
        Message::CancelComposer | Message::ComposerRequestClose => composer::handle_cancel(state),
    }
}
