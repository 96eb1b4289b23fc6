//! Store abstraction the screen reads from and dispatches intents to
//!
//! The screen only ever sees the [`CampsiteStore`] trait. [`InMemoryStore`] is
//! the implementation the binary runs with; tests can substitute their own.

use std::collections::BTreeSet;

use chrono::Utc;
use nucamp_core::prelude::*;
use nucamp_core::{Campsite, CampsiteId, Comment, CommentId};

use crate::comments::visible_comments;
use crate::intent::Intent;

/// Set of campsite ids the user marked as favorite
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesSet(BTreeSet<CampsiteId>);

impl FavoritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: CampsiteId) -> bool {
        self.0.contains(&id)
    }

    /// Flip membership of `id`. Returns whether it is a favorite afterwards.
    pub fn toggle(&mut self, id: CampsiteId) -> bool {
        if self.0.remove(&id) {
            false
        } else {
            self.0.insert(id);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = CampsiteId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<CampsiteId> for FavoritesSet {
    fn from_iter<I: IntoIterator<Item = CampsiteId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Read-only queries plus intent dispatch, injected into the screen.
#[cfg_attr(test, mockall::automock)]
pub trait CampsiteStore {
    /// Comments attached to `campsite_id`, in insertion order
    fn comments(&self, campsite_id: CampsiteId) -> Vec<Comment>;

    /// Current favorites
    fn favorites(&self) -> &FavoritesSet;

    /// Apply an intent. Fire-and-forget from the caller's point of view.
    fn dispatch(&mut self, intent: Intent);
}

/// Store holding campsites, comments and favorites in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    campsites: Vec<Campsite>,
    comments: Vec<Comment>,
    favorites: FavoritesSet,
}

impl InMemoryStore {
    pub fn new(campsites: Vec<Campsite>, comments: Vec<Comment>, favorites: FavoritesSet) -> Self {
        Self {
            campsites,
            comments,
            favorites,
        }
    }

    pub fn campsites(&self) -> &[Campsite] {
        &self.campsites
    }

    pub fn campsite(&self, id: CampsiteId) -> Option<&Campsite> {
        self.campsites.iter().find(|c| c.id == id)
    }

    /// Every stored comment, across all campsites
    pub fn all_comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Resolve the navigation parameter: the requested campsite, or the first
    /// one when none was requested.
    pub fn resolve_campsite(&self, requested: Option<CampsiteId>) -> Result<Campsite> {
        match requested {
            Some(id) => self
                .campsite(id)
                .cloned()
                .ok_or_else(|| Error::campsite_not_found(id)),
            None => self.campsites.first().cloned().ok_or(Error::NoCampsites),
        }
    }

    /// One past the highest stored id, so loaded data with gaps or a
    /// non-zero start never yields a duplicate
    fn next_comment_id(&self) -> CommentId {
        let next = self
            .comments
            .iter()
            .map(|c| c.id.0)
            .max()
            .map_or(0, |max| max.saturating_add(1));
        CommentId(next)
    }
}

impl CampsiteStore for InMemoryStore {
    fn comments(&self, campsite_id: CampsiteId) -> Vec<Comment> {
        visible_comments(&self.comments, campsite_id)
            .cloned()
            .collect()
    }

    fn favorites(&self) -> &FavoritesSet {
        &self.favorites
    }

    fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::ToggleFavorite(id) => {
                let now_favorite = self.favorites.toggle(id);
                debug!("Campsite {} favorite={}", id, now_favorite);
            }
            Intent::PostComment(payload) => {
                let id = self.next_comment_id();
                let comment = payload.into_comment(id, Utc::now());
                debug!(
                    "Stored comment {} for campsite {} by {:?}",
                    comment.id, comment.campsite_id, comment.author
                );
                self.comments.push(comment);
            }
        }
    }
}
