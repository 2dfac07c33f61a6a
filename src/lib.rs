//! Scorekeeper - score tracking for tabletop games
//!
//! Core modules:
//! - `game`: State document, actions and the reducer (pure, undo/redo aware)
//! - `persistence`: Best-effort JSON storage over pluggable backends
//! - `controller`: Owns the live game and exposes named actions
//! - `platform`: File storage (native), LocalStorage and JS bindings (web)
//! - `settings`: Runtime configuration
//! - `shell`: Text front end used by the native binary

pub mod controller;
pub mod game;
pub mod persistence;
pub mod platform;
pub mod settings;
#[cfg(not(target_arch = "wasm32"))]
pub mod shell;

pub use controller::{GAME_STORAGE_KEY, Scorekeeper};
pub use game::{Action, GameState, IdGenerator, Player, Round, reduce};
pub use persistence::{KeyValueStore, MemoryStore, Storage, StorageError};
pub use settings::Settings;
