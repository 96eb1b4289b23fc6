//! Key event handlers for different UI modes

use crate::composer::ComposerField;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};
use nucamp_core::Rating;

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode() {
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::Composer => handle_key_composer(state, key),
    }
}

/// Handle key events on the campsite screen
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Esc if state.settings.behavior.quit_on_esc => Some(Message::Quit),

        // Header actions
        InputKey::Char('f') => Some(Message::ToggleFavorite),
        InputKey::Char('c' | 'p') => Some(Message::OpenComposer),

        // Comment list
        InputKey::Char('k') | InputKey::Up => Some(Message::ScrollUp),
        InputKey::Char('j') | InputKey::Down => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Char('g') | InputKey::Home => Some(Message::ScrollToTop),
        InputKey::Char('G') | InputKey::End => Some(Message::ScrollToBottom),

        _ => None,
    }
}

/// Handle key events while the comment form is shown
fn handle_key_composer(state: &AppState, key: InputKey) -> Option<Message> {
    // Keys that behave the same regardless of focus
    match key {
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::CharCtrl('s') => return Some(Message::SubmitComment),
        InputKey::Esc => return Some(Message::ComposerRequestClose),
        InputKey::Tab => return Some(Message::ComposerNextField),
        InputKey::BackTab => return Some(Message::ComposerPrevField),
        InputKey::Enter => return Some(Message::ComposerActivate),
        _ => {}
    }

    match state.composer.focus {
        ComposerField::Rating => match key {
            InputKey::Left | InputKey::Char('-') => Some(Message::ComposerRatingDown),
            InputKey::Right | InputKey::Char('+') => Some(Message::ComposerRatingUp),
            InputKey::Char(c @ '1'..='5') => {
                let value = c.to_digit(10).map(|d| d as u8)?;
                Some(Message::ComposerSetRating(Rating::new(value)))
            }
            InputKey::Up => Some(Message::ComposerPrevField),
            InputKey::Down => Some(Message::ComposerNextField),
            _ => None,
        },
        ComposerField::Author | ComposerField::Text => match key {
            InputKey::Backspace => Some(Message::ComposerBackspace),
            InputKey::Up => Some(Message::ComposerPrevField),
            InputKey::Down => Some(Message::ComposerNextField),
            other => other.printable().map(Message::ComposerInput),
        },
        ComposerField::Submit | ComposerField::Cancel => match key {
            InputKey::Left | InputKey::Up => Some(Message::ComposerPrevField),
            InputKey::Right | InputKey::Down => Some(Message::ComposerNextField),
            _ => None,
        },
    }
}
