//! Game state document
//!
//! Everything that is persisted between sessions lives here. History
//! snapshots are shared `Rc` values so pushing one is a pointer copy.

use std::collections::BTreeMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Opaque player identifier
pub type PlayerId = String;
/// Opaque round identifier
pub type RoundId = String;
/// A single score value
pub type Score = i64;

/// Maximum number of undo snapshots to keep
pub const MAX_HISTORY: usize = 10;

/// A player in the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

/// One scoring period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub id: RoundId,
    /// Scores by player id. Missing entries count as 0; entries for removed
    /// players are kept.
    #[serde(default)]
    pub scores: BTreeMap<PlayerId, Score>,
}

impl Round {
    /// Create a round with no scores
    pub fn new(id: impl Into<RoundId>) -> Self {
        Self {
            id: id.into(),
            scores: BTreeMap::new(),
        }
    }

    /// Score for a player, 0 when never set
    pub fn score(&self, player_id: &str) -> Score {
        self.scores.get(player_id).copied().unwrap_or(0)
    }
}

/// Complete game state with undo/redo history
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub players: Vec<Player>,
    pub rounds: Vec<Round>,
    /// Prior states (newest first, at most [`MAX_HISTORY`])
    #[serde(default)]
    pub undo_states: Vec<Rc<GameState>>,
    /// Undone states (newest first)
    #[serde(default)]
    pub redo_states: Vec<Rc<GameState>>,
}

impl PartialEq for GameState {
    /// Two states are equal when their rosters and rounds match. History is
    /// not part of the comparison.
    fn eq(&self, other: &Self) -> bool {
        self.players == other.players && self.rounds == other.rounds
    }
}

impl GameState {
    /// Fresh game: no players and a single empty round
    pub fn new(first_round_id: impl Into<RoundId>) -> Self {
        Self {
            players: Vec::new(),
            rounds: vec![Round::new(first_round_id)],
            undo_states: Vec::new(),
            redo_states: Vec::new(),
        }
    }

    /// Copy of this state with both history stacks emptied, as persisted
    pub fn without_history(&self) -> Self {
        Self {
            players: self.players.clone(),
            rounds: self.rounds.clone(),
            undo_states: Vec::new(),
            redo_states: Vec::new(),
        }
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn round(&self, id: &str) -> Option<&Round> {
        self.rounds.iter().find(|r| r.id == id)
    }

    /// Score a player holds in a round (0 for a missing round or entry)
    pub fn score(&self, round_id: &str, player_id: &str) -> Score {
        self.round(round_id).map(|r| r.score(player_id)).unwrap_or(0)
    }

    /// Total per current player, in roster order.
    ///
    /// Scores left behind by removed players are not reported. Sums clamp at
    /// the `Score` bounds.
    pub fn totals(&self) -> Vec<(&Player, Score)> {
        self.players
            .iter()
            .map(|player| {
                let total = self
                    .rounds
                    .iter()
                    .fold(0, |sum: Score, r| sum.saturating_add(r.score(&player.id)));
                (player, total)
            })
            .collect()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_states.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_states.is_empty()
    }

    /// Collapsing only makes sense with more than one round
    pub fn can_collapse(&self) -> bool {
        self.rounds.len() > 1
    }
}
