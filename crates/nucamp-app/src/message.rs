//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use nucamp_core::Rating;

/// All possible messages/actions on the campsite info screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Leave the application (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Detail Header Actions
    // ─────────────────────────────────────────────────────────
    /// Toggle the current campsite in the favorites set
    ToggleFavorite,
    /// Show the comment form with a fresh draft
    OpenComposer,

    // ─────────────────────────────────────────────────────────
    // Comment List Navigation
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,

    // ─────────────────────────────────────────────────────────
    // Composer Messages
    // ─────────────────────────────────────────────────────────
    /// Move focus to the next form element
    ComposerNextField,
    /// Move focus to the previous form element
    ComposerPrevField,
    /// Type a character into the focused text field
    ComposerInput(char),
    /// Delete the last character of the focused text field
    ComposerBackspace,
    /// Pick a rating directly
    ComposerSetRating(Rating),
    /// One star more
    ComposerRatingUp,
    /// One star less
    ComposerRatingDown,
    /// Enter on the focused element (submit, cancel, or advance)
    ComposerActivate,
    /// Post the draft and close the form
    SubmitComment,
    /// Close the form without posting (Cancel button)
    CancelComposer,
    /// Dismiss request from outside the form (Esc); same as cancel
    ComposerRequestClose,
}
