//! nucamp-app - Screen state and orchestration for nucamp
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! campsite info screen: the model ([`AppState`]), messages, the pure
//! `update` function, and the [`Engine`] that executes store intents.
//! It also owns the store abstraction, fixture loading and configuration.

pub mod comment_list_state;
pub mod comments;
pub mod composer;
pub mod config;
pub mod engine;
pub mod fixture;
pub mod handler;
pub mod input_key;
pub mod intent;
pub mod message;
pub mod signals;
pub mod state;
pub mod store;

// Re-export primary types
pub use comments::visible_comments;
pub use composer::{CommentDraft, ComposerField, ComposerState};
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use intent::Intent;
pub use message::Message;
pub use state::{AppState, UiMode};
pub use store::{CampsiteStore, FavoritesSet, InMemoryStore};
