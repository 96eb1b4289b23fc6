//! Comment composer modal state
//!
//! The composer is either hidden or visible with a [`CommentDraft`]. Every
//! way out of the visible state (submit, cancel, dismiss) resets the draft,
//! so each open starts from the defaults.

use nucamp_core::{CampsiteId, NewComment, Rating};

/// In-progress, unsaved comment
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentDraft {
    pub rating: Rating,
    pub author: String,
    pub text: String,
}

impl CommentDraft {
    /// Restore rating=5, author="", text=""
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when nothing was typed and the rating is untouched
    pub fn is_pristine(&self) -> bool {
        *self == Self::default()
    }

    /// Creation payload for the given campsite.
    ///
    /// Empty author or text are passed through unchanged.
    pub fn to_new_comment(&self, campsite_id: CampsiteId) -> NewComment {
        NewComment {
            author: self.author.clone(),
            rating: self.rating,
            text: self.text.clone(),
            campsite_id,
        }
    }
}

/// Focusable elements of the composer, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposerField {
    #[default]
    Rating,
    Author,
    Text,
    Submit,
    Cancel,
}

impl ComposerField {
    pub fn next(self) -> Self {
        match self {
            Self::Rating => Self::Author,
            Self::Author => Self::Text,
            Self::Text => Self::Submit,
            Self::Submit => Self::Cancel,
            Self::Cancel => Self::Rating,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Rating => Self::Cancel,
            Self::Author => Self::Rating,
            Self::Text => Self::Author,
            Self::Submit => Self::Text,
            Self::Cancel => Self::Submit,
        }
    }

    /// Whether the field accepts typed characters
    pub fn is_text_input(self) -> bool {
        matches!(self, Self::Author | Self::Text)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Rating => "Rating",
            Self::Author => "Author",
            Self::Text => "Comment",
            Self::Submit => "Submit",
            Self::Cancel => "Cancel",
        }
    }
}

/// Visibility, draft and focus of the comment form
#[derive(Debug, Clone, Default)]
pub struct ComposerState {
    visible: bool,
    pub draft: CommentDraft,
    pub focus: ComposerField,
}

impl ComposerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Hidden -> Visible with a fresh draft
    pub fn open(&mut self) {
        self.reset();
        self.visible = true;
    }

    /// Visible -> Hidden, discarding the draft
    pub fn close(&mut self) {
        self.reset();
        self.visible = false;
    }

    /// Build the payload from the current draft and close the form.
    ///
    /// Returns `None` when the composer is hidden.
    pub fn submit(&mut self, campsite_id: CampsiteId) -> Option<NewComment> {
        if !self.visible {
            return None;
        }
        let payload = self.draft.to_new_comment(campsite_id);
        self.close();
        Some(payload)
    }

    fn reset(&mut self) {
        self.draft.reset();
        self.focus = ComposerField::default();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn set_rating(&mut self, rating: Rating) {
        self.draft.rating = rating;
    }

    /// Append a character to the focused text field
    pub fn insert_char(&mut self, c: char) {
        if let Some(field) = self.focused_text_mut() {
            field.push(c);
        }
    }

    /// Remove the last character of the focused text field
    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_text_mut() {
            field.pop();
        }
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            ComposerField::Author => Some(&mut self.draft.author),
            ComposerField::Text => Some(&mut self.draft.text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_defaults() {
        let draft = CommentDraft::default();
        assert_eq!(draft.rating.value(), 5);
        assert!(draft.author.is_empty());
        assert!(draft.text.is_empty());
        assert!(draft.is_pristine());
    }

    #[test]
    fn test_focus_ring_wraps() {
        let mut field = ComposerField::Rating;
        for _ in 0..5 {
            field = field.next();
        }
        assert_eq!(field, ComposerField::Rating);
        assert_eq!(ComposerField::Rating.prev(), ComposerField::Cancel);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut composer = ComposerState::new();
        composer.open();
        composer.focus = ComposerField::Author;
        composer.insert_char('A');
        composer.insert_char('l');
        composer.focus = ComposerField::Text;
        composer.insert_char('o');
        composer.insert_char('k');
        composer.backspace();

        assert_eq!(composer.draft.author, "Al");
        assert_eq!(composer.draft.text, "o");
    }

    #[test]
    fn test_typing_on_rating_is_ignored() {
        let mut composer = ComposerState::new();
        composer.open();
        composer.insert_char('x');
        composer.backspace();
        assert!(composer.draft.is_pristine());
    }

    #[test]
    fn test_close_resets_draft_and_focus() {
        let mut composer = ComposerState::new();
        composer.open();
        composer.focus = ComposerField::Text;
        composer.insert_char('z');
        composer.set_rating(Rating::new(2));

        composer.close();

        assert!(!composer.is_visible());
        assert!(composer.draft.is_pristine());
        assert_eq!(composer.focus, ComposerField::Rating);
    }

    #[test]
    fn test_submit_returns_payload_and_hides() {
        let mut composer = ComposerState::new();
        composer.open();
        composer.draft.author = "Alice".to_string();
        composer.draft.text = "Great spot".to_string();
        composer.set_rating(Rating::new(4));

        let payload = composer.submit(CampsiteId(42)).unwrap();

        assert_eq!(
            payload,
            NewComment {
                author: "Alice".to_string(),
                rating: Rating::new(4),
                text: "Great spot".to_string(),
                campsite_id: CampsiteId(42),
            }
        );
        assert!(!composer.is_visible());
        assert!(composer.draft.is_pristine());
    }

    #[test]
    fn test_submit_while_hidden_is_noop() {
        let mut composer = ComposerState::new();
        assert!(composer.submit(CampsiteId(1)).is_none());
    }
}
