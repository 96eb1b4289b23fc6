//! Intents the screen hands to the external store

use nucamp_core::{CampsiteId, NewComment};

/// A named request to mutate shared application state.
///
/// The screen never mutates comments or favorites directly; it returns an
/// intent and the store decides how to apply it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Flip membership of the campsite in the favorites set
    ToggleFavorite(CampsiteId),
    /// Append a new comment; the store assigns id and date
    PostComment(NewComment),
}

impl Intent {
    /// Short name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            Intent::ToggleFavorite(_) => "toggleFavorite",
            Intent::PostComment(_) => "postComment",
        }
    }
}
