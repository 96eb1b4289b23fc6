//! Engine - owns the screen state and the injected store
//!
//! Runs messages through the TEA update loop and executes the resulting
//! actions against the store. Frontends (the TUI runner, tests) only talk to
//! the engine.

use nucamp_core::prelude::*;
use nucamp_core::Campsite;

use crate::config::Settings;
use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::state::AppState;
use crate::store::CampsiteStore;

pub struct Engine<S> {
    pub state: AppState,
    store: S,
}

impl<S: CampsiteStore> Engine<S> {
    /// Mount the screen for `campsite`, reading its initial slices from the store
    pub fn new(campsite: Campsite, settings: Settings, store: S) -> Self {
        let mut state = AppState::new(campsite, settings);
        state.sync_from_store(&store);
        info!(
            "Mounted campsite {} ({:?}) with {} comments",
            state.campsite.id,
            state.campsite.name,
            state.comments.len()
        );
        Self { state, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Process a message and any follow-ups it produces
    pub fn process_message(&mut self, message: Message) {
        let mut msg = Some(message);
        while let Some(m) = msg {
            let result = handler::update(&mut self.state, m);
            if let Some(action) = result.action {
                self.handle_action(action);
            }
            msg = result.message;
        }
    }

    /// Re-read the store, e.g. after another collaborator changed it
    pub fn refresh(&mut self) {
        self.state.sync_from_store(&self.store);
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    fn handle_action(&mut self, action: UpdateAction) {
        match action {
            UpdateAction::Dispatch(intent) => {
                debug!("Dispatching {}", intent.name());
                self.store.dispatch(intent);
                self.refresh();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::ComposerField;
    use crate::input_key::InputKey;
    use crate::intent::Intent;
    use crate::store::{FavoritesSet, InMemoryStore, MockCampsiteStore};
    use nucamp_core::{CampsiteId, NewComment, Rating};

    fn campsite(id: u32) -> Campsite {
        Campsite {
            id: CampsiteId(id),
            name: format!("Site {}", id),
            description: String::new(),
            image: None,
            elevation: None,
            featured: false,
        }
    }

    fn type_text(engine: &mut Engine<impl CampsiteStore>, text: &str) {
        for c in text.chars() {
            engine.process_message(Message::Key(InputKey::Char(c)));
        }
    }

    #[test]
    fn test_submit_dispatches_exactly_one_post_comment() {
        let mut store = MockCampsiteStore::new();
        store.expect_comments().returning(|_| Vec::new());
        store.expect_favorites().return_const(FavoritesSet::new());
        store
            .expect_dispatch()
            .withf(|intent| {
                *intent
                    == Intent::PostComment(NewComment {
                        author: "Alice".to_string(),
                        rating: Rating::new(4),
                        text: "Great spot".to_string(),
                        campsite_id: CampsiteId(42),
                    })
            })
            .times(1)
            .return_const(());

        let mut engine = Engine::new(campsite(42), Settings::default(), store);

        engine.process_message(Message::OpenComposer);
        engine.process_message(Message::Key(InputKey::Char('4')));
        engine.process_message(Message::Key(InputKey::Tab));
        type_text(&mut engine, "Alice");
        engine.process_message(Message::Key(InputKey::Tab));
        type_text(&mut engine, "Great spot");
        engine.process_message(Message::Key(InputKey::Tab));
        assert_eq!(engine.state.composer.focus, ComposerField::Submit);
        engine.process_message(Message::Key(InputKey::Enter));

        assert!(!engine.state.composer.is_visible());
        assert!(engine.state.composer.draft.is_pristine());
    }

    #[test]
    fn test_cancel_never_dispatches() {
        let mut store = MockCampsiteStore::new();
        store.expect_comments().returning(|_| Vec::new());
        store.expect_favorites().return_const(FavoritesSet::new());
        store.expect_dispatch().times(0);

        let mut engine = Engine::new(campsite(1), Settings::default(), store);

        engine.process_message(Message::OpenComposer);
        engine.process_message(Message::Key(InputKey::Tab));
        type_text(&mut engine, "Bob");
        engine.process_message(Message::Key(InputKey::Esc));

        assert!(!engine.state.composer.is_visible());
        assert!(engine.state.composer.draft.is_pristine());
    }

    #[test]
    fn test_posted_comment_appears_in_list() {
        let store = InMemoryStore::new(vec![campsite(0)], Vec::new(), FavoritesSet::new());
        let mut engine = Engine::new(campsite(0), Settings::default(), store);
        assert!(engine.state.comments.is_empty());

        engine.process_message(Message::OpenComposer);
        engine.process_message(Message::Key(InputKey::Tab));
        type_text(&mut engine, "Kim");
        engine.process_message(Message::Key(InputKey::CharCtrl('s')));

        assert_eq!(engine.state.comments.len(), 1);
        assert_eq!(engine.state.comments[0].author, "Kim");
        assert_eq!(engine.state.comments[0].rating, Rating::DEFAULT);
        assert_eq!(engine.store().comments(CampsiteId(0)).len(), 1);
    }

    #[test]
    fn test_toggle_favorite_twice_restores_membership() {
        let store = InMemoryStore::new(vec![campsite(2)], Vec::new(), FavoritesSet::new());
        let mut engine = Engine::new(campsite(2), Settings::default(), store);
        assert!(!engine.state.is_favorite);

        engine.process_message(Message::Key(InputKey::Char('f')));
        assert!(engine.state.is_favorite);
        assert!(engine.store().favorites().contains(CampsiteId(2)));

        engine.process_message(Message::Key(InputKey::Char('f')));
        assert!(!engine.state.is_favorite);
        assert!(engine.store().favorites().is_empty());
    }

    #[test]
    fn test_quit_key_stops_engine() {
        let store = InMemoryStore::new(vec![campsite(0)], Vec::new(), FavoritesSet::new());
        let mut engine = Engine::new(campsite(0), Settings::default(), store);

        engine.process_message(Message::Key(InputKey::Char('q')));

        assert!(engine.should_quit());
    }
}
