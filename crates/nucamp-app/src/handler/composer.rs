//! Comment form handlers
//!
//! Only submit produces an action; every other transition is local.

use crate::composer::ComposerField;
use crate::handler::UpdateResult;
use crate::intent::Intent;
use crate::message::Message;
use crate::state::AppState;
use nucamp_core::prelude::*;
use nucamp_core::Rating;

/// Hidden -> Visible with default draft
pub fn handle_open(state: &mut AppState) -> UpdateResult {
    state.composer.open();
    debug!("Composer opened for campsite {}", state.campsite.id);
    UpdateResult::none()
}

/// Post the draft, then hide and reset the form.
///
/// Empty author or text are accepted as typed.
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    match state.composer.submit(state.campsite.id) {
        Some(payload) => {
            info!(
                "Posting comment for campsite {} (rating {})",
                payload.campsite_id,
                payload.rating.value()
            );
            UpdateResult::dispatch(Intent::PostComment(payload))
        }
        None => UpdateResult::none(),
    }
}

/// Cancel button and dismiss requests.
///
/// Mirrors the form's single toggle: while visible the draft is discarded
/// and the form hides; while hidden the form opens fresh.
pub fn handle_cancel(state: &mut AppState) -> UpdateResult {
    if state.composer.is_visible() {
        state.composer.close();
        debug!("Composer dismissed without posting");
        UpdateResult::none()
    } else {
        handle_open(state)
    }
}

/// Enter on the focused element
pub fn handle_activate(state: &mut AppState) -> UpdateResult {
    if !state.composer.is_visible() {
        return UpdateResult::none();
    }
    match state.composer.focus {
        ComposerField::Submit => UpdateResult::message(Message::SubmitComment),
        ComposerField::Cancel => UpdateResult::message(Message::CancelComposer),
        _ => {
            state.composer.focus_next();
            UpdateResult::none()
        }
    }
}

pub fn handle_next_field(state: &mut AppState) -> UpdateResult {
    if state.composer.is_visible() {
        state.composer.focus_next();
    }
    UpdateResult::none()
}

pub fn handle_prev_field(state: &mut AppState) -> UpdateResult {
    if state.composer.is_visible() {
        state.composer.focus_prev();
    }
    UpdateResult::none()
}

pub fn handle_input(state: &mut AppState, c: char) -> UpdateResult {
    if state.composer.is_visible() {
        state.composer.insert_char(c);
    }
    UpdateResult::none()
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    if state.composer.is_visible() {
        state.composer.backspace();
    }
    UpdateResult::none()
}

pub fn handle_set_rating(state: &mut AppState, rating: Rating) -> UpdateResult {
    if state.composer.is_visible() {
        state.composer.set_rating(rating);
    }
    UpdateResult::none()
}

pub fn handle_rating_up(state: &mut AppState) -> UpdateResult {
    let next = state.composer.draft.rating.increment();
    handle_set_rating(state, next)
}

pub fn handle_rating_down(state: &mut AppState) -> UpdateResult {
    let next = state.composer.draft.rating.decrement();
    handle_set_rating(state, next)
}
