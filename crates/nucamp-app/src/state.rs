//! Application state (Model in TEA pattern)

use nucamp_core::{Campsite, Comment, CommentId};

use crate::comment_list_state::CommentListState;
use crate::composer::ComposerState;
use crate::config::Settings;
use crate::store::CampsiteStore;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Campsite details and comment list
    #[default]
    Normal,

    /// Comment form shown over the screen
    Composer,
}

/// Lifecycle phase of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete screen state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Campsite supplied by navigation; never changes for this screen
    pub campsite: Campsite,

    /// Comments of this campsite as last read from the store
    pub comments: Vec<Comment>,

    /// Whether this campsite is in the favorites set, as last read
    pub is_favorite: bool,

    pub comment_list: CommentListState,

    pub composer: ComposerState,

    pub settings: Settings,

    pub phase: AppPhase,
}

impl AppState {
    pub fn new(campsite: Campsite, settings: Settings) -> Self {
        Self {
            campsite,
            comments: Vec::new(),
            is_favorite: false,
            comment_list: CommentListState::new(),
            composer: ComposerState::new(),
            settings,
            phase: AppPhase::Running,
        }
    }

    /// Re-read the store slices this screen displays
    pub fn sync_from_store<S: CampsiteStore + ?Sized>(&mut self, store: &S) {
        self.comments = store.comments(self.campsite.id);
        self.is_favorite = store.favorites().contains(self.campsite.id);
    }

    pub fn ui_mode(&self) -> UiMode {
        if self.composer.is_visible() {
            UiMode::Composer
        } else {
            UiMode::Normal
        }
    }

    /// Ids of the displayed comments, in display order
    pub fn comment_ids(&self) -> Vec<CommentId> {
        self.comments.iter().map(|c| c.id).collect()
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
