//! Game state engine
//!
//! Pure and synchronous:
//! - `state`: the persisted document and derived views (totals)
//! - `action`: intent records
//! - `reducer`: `(state, action) -> state`, including undo/redo
//! - `ids`: injectable id generation

pub mod action;
pub mod ids;
pub mod reducer;
pub mod state;

pub use action::Action;
pub use ids::{IdGenerator, RandomIds, SeededIds, SequentialIds};
pub use reducer::reduce;
pub use state::{GameState, MAX_HISTORY, Player, PlayerId, Round, RoundId, Score};
