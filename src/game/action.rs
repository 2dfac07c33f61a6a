//! Action records
//!
//! Plain descriptions of intent fed to [`reduce`](super::reduce). Ids are
//! chosen by the caller so the reducer never has to generate any.

use serde::{Deserialize, Serialize};

use super::state::{PlayerId, RoundId, Score};

/// A single mutation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Action {
    AddPlayer { id: PlayerId, name: String },
    RemovePlayer { id: PlayerId },
    AddRound { id: RoundId },
    RemoveRound { id: RoundId },
    ChangePlayerScore {
        round_id: RoundId,
        player_id: PlayerId,
        score: Score,
    },
    ResetRounds,
    /// Replace all rounds with one round `id` holding the summed scores
    CollapseRounds { id: RoundId },
    Undo,
    Redo,
}

impl Action {
    /// Whether the action records history (everything except undo/redo)
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Action::Undo | Action::Redo)
    }
}

pub fn add_player(id: impl Into<PlayerId>, name: impl Into<String>) -> Action {
    Action::AddPlayer {
        id: id.into(),
        name: name.into(),
    }
}

pub fn remove_player(id: impl Into<PlayerId>) -> Action {
    Action::RemovePlayer { id: id.into() }
}

pub fn add_round(id: impl Into<RoundId>) -> Action {
    Action::AddRound { id: id.into() }
}

pub fn remove_round(id: impl Into<RoundId>) -> Action {
    Action::RemoveRound { id: id.into() }
}

pub fn change_player_score(
    round_id: impl Into<RoundId>,
    player_id: impl Into<PlayerId>,
    score: Score,
) -> Action {
    Action::ChangePlayerScore {
        round_id: round_id.into(),
        player_id: player_id.into(),
        score,
    }
}

pub fn reset_rounds() -> Action {
    Action::ResetRounds
}

pub fn collapse_rounds(id: impl Into<RoundId>) -> Action {
    Action::CollapseRounds { id: id.into() }
}

pub fn undo() -> Action {
    Action::Undo
}

pub fn redo() -> Action {
    Action::Redo
}
