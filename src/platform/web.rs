//! Browser platform: LocalStorage backend and the JS-facing controller

use wasm_bindgen::prelude::*;

use crate::controller::Scorekeeper;
use crate::game::RandomIds;
use crate::persistence::{KeyValueStore, StorageError};

/// `window.localStorage`, looked up on every call so a page that disables
/// storage later degrades instead of failing
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".into()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StorageError::Unavailable("LocalStorage disabled".into()))
    }
}

fn js_error(e: JsValue) -> StorageError {
    StorageError::Unavailable(format!("{:?}", e))
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        Self::storage()?.remove_item(key).map_err(js_error)
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    log::info!("Scorekeeper starting...");
}

/// Controller handle for the page script
#[wasm_bindgen]
pub struct WebScorekeeper {
    inner: Scorekeeper<LocalStore, RandomIds>,
}

#[wasm_bindgen]
impl WebScorekeeper {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: Scorekeeper::new(LocalStore, RandomIds),
        }
    }

    /// Current players and rounds as JSON (history omitted)
    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.state().without_history())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.inner.state().can_undo()
    }

    #[wasm_bindgen(js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.inner.state().can_redo()
    }

    #[wasm_bindgen(js_name = canCollapse)]
    pub fn can_collapse(&self) -> bool {
        self.inner.state().can_collapse()
    }

    #[wasm_bindgen(js_name = addPlayer)]
    pub fn add_player(&mut self, name: &str) {
        self.inner.add_player(name);
    }

    #[wasm_bindgen(js_name = removePlayer)]
    pub fn remove_player(&mut self, id: &str) {
        self.inner.remove_player(id);
    }

    #[wasm_bindgen(js_name = addRound)]
    pub fn add_round(&mut self) {
        self.inner.add_round();
    }

    #[wasm_bindgen(js_name = removeRound)]
    pub fn remove_round(&mut self, id: &str) {
        self.inner.remove_round(id);
    }

    /// Takes an `i32` so the page passes a plain JS number rather than a BigInt
    #[wasm_bindgen(js_name = changePlayerScore)]
    pub fn change_player_score(&mut self, round_id: &str, player_id: &str, score: i32) {
        self.inner
            .change_player_score(round_id, player_id, i64::from(score));
    }

    #[wasm_bindgen(js_name = resetRounds)]
    pub fn reset_rounds(&mut self) {
        self.inner.reset_rounds();
    }

    #[wasm_bindgen(js_name = collapseRounds)]
    pub fn collapse_rounds(&mut self) {
        self.inner.collapse_rounds();
    }

    pub fn undo(&mut self) {
        self.inner.undo();
    }

    pub fn redo(&mut self) {
        self.inner.redo();
    }

    pub fn forget(&mut self) {
        self.inner.forget();
    }
}

impl Default for WebScorekeeper {
    fn default() -> Self {
        Self::new()
    }
}
