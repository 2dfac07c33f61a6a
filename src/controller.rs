//! Live game controller
//!
//! Owns the current state, turns named intents into actions, runs them through
//! the reducer and saves the result (without history) after every dispatch.

use std::rc::Rc;

use crate::game::{Action, GameState, IdGenerator, PlayerId, RoundId, Score, action, reduce};
use crate::persistence::{KeyValueStore, Storage};

/// Storage key for the saved game
pub const GAME_STORAGE_KEY: &str = "scorekeeper.game";

pub struct Scorekeeper<S, G> {
    state: Rc<GameState>,
    storage: Storage<GameState, S>,
    ids: G,
}

impl<S: KeyValueStore, G: IdGenerator> Scorekeeper<S, G> {
    /// Resume the saved game from `store`, or start a fresh one
    pub fn new(store: S, mut ids: G) -> Self {
        let storage = Storage::new(GAME_STORAGE_KEY, store);
        // Saved games carry no history; ignore any that a hand-edited file adds
        let state = storage
            .get(|| GameState::new(ids.next_id()))
            .without_history();
        log::info!(
            "Game ready: {} players, {} rounds",
            state.players.len(),
            state.rounds.len()
        );
        let mut keeper = Self {
            state: Rc::new(state),
            storage,
            ids,
        };
        keeper.persist();
        keeper
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn add_player(&mut self, name: &str) {
        let id = self.ids.next_id();
        self.dispatch(action::add_player(id, name));
    }

    pub fn remove_player(&mut self, id: &str) {
        self.dispatch(action::remove_player(id));
    }

    pub fn add_round(&mut self) {
        let id = self.ids.next_id();
        self.dispatch(action::add_round(id));
    }

    pub fn remove_round(&mut self, id: &str) {
        self.dispatch(action::remove_round(id));
    }

    pub fn change_player_score(&mut self, round_id: &str, player_id: &str, score: Score) {
        self.dispatch(action::change_player_score(round_id, player_id, score));
    }

    pub fn reset_rounds(&mut self) {
        self.dispatch(action::reset_rounds());
    }

    pub fn collapse_rounds(&mut self) {
        let id = self.ids.next_id();
        self.dispatch(action::collapse_rounds(id));
    }

    pub fn undo(&mut self) {
        self.dispatch(action::undo());
    }

    pub fn redo(&mut self) {
        self.dispatch(action::redo());
    }

    /// Delete the saved game and start over with a fresh one.
    ///
    /// History is dropped too.
    pub fn forget(&mut self) {
        self.storage.clear();
        self.state = Rc::new(GameState::new(self.ids.next_id()));
        log::info!("Saved game cleared");
        self.persist();
    }

    /// Id of the player at `index` in roster order
    pub fn player_id_at(&self, index: usize) -> Option<PlayerId> {
        self.state.players.get(index).map(|p| p.id.clone())
    }

    /// Id of the round at `index` in play order
    pub fn round_id_at(&self, index: usize) -> Option<RoundId> {
        self.state.rounds.get(index).map(|r| r.id.clone())
    }

    fn dispatch(&mut self, action: Action) {
        log::debug!("dispatch {:?}", action);
        let next = reduce(&self.state, &action);
        if Rc::ptr_eq(&next, &self.state) {
            return;
        }
        self.state = next;
        self.persist();
    }

    fn persist(&mut self) {
        self.storage.set(&self.state.without_history());
    }
}
