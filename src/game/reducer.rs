//! State reducer
//!
//! `reduce` never touches its input: every mutation builds a new state and
//! records the old one as an undo snapshot.

use std::collections::BTreeMap;
use std::rc::Rc;

use super::action::Action;
use super::state::{GameState, MAX_HISTORY, Player, Round, Score};

/// Apply one action, returning the next state.
///
/// Undo/Redo with an empty stack return `state` itself (same `Rc`).
pub fn reduce(state: &Rc<GameState>, action: &Action) -> Rc<GameState> {
    if !action.is_mutating() {
        return travel(state, action);
    }
    let mut next = GameState {
        players: state.players.clone(),
        rounds: state.rounds.clone(),
        undo_states: push_history(state),
        redo_states: Vec::new(),
    };
    apply(&mut next, action);
    Rc::new(next)
}

/// Roster/round changes for a mutating action
fn apply(next: &mut GameState, action: &Action) {
    match action {
        Action::AddPlayer { id, name } => next.players.push(Player {
            id: id.clone(),
            name: name.clone(),
        }),
        Action::RemovePlayer { id } => next.players.retain(|p| p.id != *id),
        Action::AddRound { id } => next.rounds.push(Round::new(id.clone())),
        Action::RemoveRound { id } => next.rounds.retain(|r| r.id != *id),
        Action::ChangePlayerScore {
            round_id,
            player_id,
            score,
        } => {
            if let Some(round) = next.rounds.iter_mut().find(|r| r.id == *round_id) {
                round.scores.insert(player_id.clone(), *score);
            }
        }
        Action::ResetRounds => next.rounds.clear(),
        Action::CollapseRounds { id } => {
            let mut scores: BTreeMap<_, Score> = BTreeMap::new();
            for round in &next.rounds {
                for (player_id, score) in &round.scores {
                    let sum = scores.entry(player_id.clone()).or_insert(0);
                    // Clamp at the i64 bounds instead of overflowing
                    *sum = sum.saturating_add(*score);
                }
            }
            next.rounds = vec![Round {
                id: id.clone(),
                scores,
            }];
        }
        Action::Undo | Action::Redo => {}
    }
}

/// Undo/Redo: swap in a history snapshot
fn travel(state: &Rc<GameState>, action: &Action) -> Rc<GameState> {
    match action {
        Action::Undo => {
            let Some((previous, rest)) = state.undo_states.split_first() else {
                return Rc::clone(state);
            };
            let mut redo_states = Vec::with_capacity(state.redo_states.len() + 1);
            redo_states.push(Rc::clone(state));
            redo_states.extend(state.redo_states.iter().cloned());
            Rc::new(GameState {
                players: previous.players.clone(),
                rounds: previous.rounds.clone(),
                undo_states: rest.to_vec(),
                redo_states,
            })
        }
        Action::Redo => {
            let Some((next, rest)) = state.redo_states.split_first() else {
                return Rc::clone(state);
            };
            Rc::new(GameState {
                players: next.players.clone(),
                rounds: next.rounds.clone(),
                undo_states: push_history(state),
                redo_states: rest.to_vec(),
            })
        }
        _ => Rc::clone(state),
    }
}

/// `state` followed by its own undo stack, trimmed to [`MAX_HISTORY`]
fn push_history(state: &Rc<GameState>) -> Vec<Rc<GameState>> {
    let mut undo_states = Vec::with_capacity(MAX_HISTORY);
    undo_states.push(Rc::clone(state));
    undo_states.extend(state.undo_states.iter().cloned());
    // Oldest snapshots fall off the end
    undo_states.truncate(MAX_HISTORY);
    undo_states
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::action::*;
    use proptest::prelude::*;

    fn start() -> Rc<GameState> {
        Rc::new(GameState::new("r1"))
    }

    fn run(state: Rc<GameState>, actions: &[Action]) -> Rc<GameState> {
        actions.iter().fold(state, |s, a| reduce(&s, a))
    }

    #[test]
    fn test_scoring_walkthrough() {
        let state = run(
            start(),
            &[
                add_player("p1", "Alice"),
                add_round("r2"),
                change_player_score("r1", "p1", 5),
                change_player_score("r2", "p1", 3),
            ],
        );
        assert_eq!(state.players.len(), 1);
        assert_eq!(state.rounds.len(), 2);
        assert_eq!(state.totals()[0].1, 8);

        let collapsed = reduce(&state, &collapse_rounds("r3"));
        assert_eq!(collapsed.rounds.len(), 1);
        assert_eq!(collapsed.rounds[0].id, "r3");
        assert_eq!(collapsed.rounds[0].scores.get("p1"), Some(&8));
    }

    #[test]
    fn test_remove_player_leaves_dangling_scores() {
        let state = run(
            start(),
            &[
                add_player("p1", "Alice"),
                change_player_score("r1", "p1", 5),
                remove_player("p1"),
            ],
        );
        assert!(state.players.is_empty());
        assert_eq!(state.rounds[0].scores.get("p1"), Some(&5));
        assert!(state.totals().is_empty());
    }

    #[test]
    fn test_collapse_keeps_dangling_entries() {
        let state = run(
            start(),
            &[
                add_player("p1", "Alice"),
                add_round("r2"),
                change_player_score("r1", "p1", 2),
                change_player_score("r2", "p1", 2),
                remove_player("p1"),
                collapse_rounds("r3"),
            ],
        );
        assert_eq!(state.rounds[0].scores.get("p1"), Some(&4));
    }

    #[test]
    fn test_collapse_twice_is_stable() {
        let state = run(
            start(),
            &[
                add_player("p1", "Alice"),
                add_player("p2", "Bob"),
                add_round("r2"),
                change_player_score("r1", "p1", 4),
                change_player_score("r2", "p2", 6),
                collapse_rounds("r3"),
            ],
        );
        let again = reduce(&state, &collapse_rounds("r4"));
        assert_eq!(again.rounds[0].scores, state.rounds[0].scores);
        assert_eq!(again.rounds[0].id, "r4");
    }

    #[test]
    fn test_collapse_saturates_huge_scores() {
        let state = run(
            start(),
            &[
                add_player("p1", "Alice"),
                add_player("p2", "Bob"),
                add_round("r2"),
                change_player_score("r1", "p1", i64::MAX),
                change_player_score("r2", "p1", 1),
                change_player_score("r1", "p2", i64::MIN),
                change_player_score("r2", "p2", -1),
            ],
        );
        let collapsed = reduce(&state, &collapse_rounds("r3"));
        assert_eq!(collapsed.rounds[0].score("p1"), i64::MAX);
        assert_eq!(collapsed.rounds[0].score("p2"), i64::MIN);
    }

    #[test]
    fn test_collapse_with_no_rounds_yields_empty_round() {
        let state = run(start(), &[reset_rounds(), collapse_rounds("r2")]);
        assert_eq!(state.rounds, vec![Round::new("r2")]);
    }

    #[test]
    fn test_change_score_only_touches_target_round() {
        let state = run(
            start(),
            &[
                add_player("p1", "Alice"),
                add_round("r2"),
                change_player_score("r2", "p1", 9),
                change_player_score("r2", "p1", 1),
            ],
        );
        assert!(state.rounds[0].scores.is_empty());
        assert_eq!(state.score("r2", "p1"), 1);
    }

    #[test]
    fn test_unknown_ids_still_record_history() {
        let state = start();
        let next = reduce(&state, &remove_round("nope"));
        assert_eq!(*next, *state);
        assert_eq!(next.undo_states.len(), 1);

        let next = reduce(&next, &change_player_score("nope", "p1", 3));
        assert_eq!(next.rounds, state.rounds);
        assert_eq!(next.undo_states.len(), 2);
    }

    #[test]
    fn test_reset_rounds() {
        let state = run(start(), &[add_round("r2"), reset_rounds()]);
        assert!(state.rounds.is_empty());
        let restored = reduce(&state, &undo());
        assert_eq!(restored.rounds.len(), 2);
    }

    #[test]
    fn test_undo_redo_on_empty_stacks_are_noops() {
        let state = start();
        assert!(Rc::ptr_eq(&reduce(&state, &undo()), &state));
        assert!(Rc::ptr_eq(&reduce(&state, &redo()), &state));
    }

    #[test]
    fn test_undo_moves_current_onto_redo() {
        let before = run(start(), &[add_player("p1", "Alice")]);
        let after = reduce(&before, &add_player("p2", "Bob"));
        let undone = reduce(&after, &undo());

        assert_eq!(*undone, *before);
        assert_eq!(undone.undo_states.len(), 1);
        assert_eq!(undone.redo_states.len(), 1);
        assert!(Rc::ptr_eq(&undone.redo_states[0], &after));

        let redone = reduce(&undone, &redo());
        assert_eq!(*redone, *after);
        assert!(redone.redo_states.is_empty());
        assert!(Rc::ptr_eq(&redone.undo_states[0], &undone));
    }

    #[test]
    fn test_new_action_clears_redo() {
        let state = run(
            start(),
            &[add_player("p1", "Alice"), add_round("r2"), undo(), undo()],
        );
        assert_eq!(state.redo_states.len(), 2);
        let state = reduce(&state, &add_round("r3"));
        assert!(state.redo_states.is_empty());
        assert!(Rc::ptr_eq(&reduce(&state, &redo()), &state));
    }

    #[test]
    fn test_history_is_capped() {
        let mut state = start();
        for i in 0..25 {
            state = reduce(&state, &add_round(format!("r{}", i + 2)));
        }
        assert_eq!(state.undo_states.len(), MAX_HISTORY);
        // The newest snapshot is the state right before the last action
        assert_eq!(state.undo_states[0].rounds.len(), 25);

        for _ in 0..MAX_HISTORY {
            state = reduce(&state, &undo());
        }
        assert_eq!(state.rounds.len(), 26 - MAX_HISTORY);
        assert!(!state.can_undo());
        assert_eq!(state.redo_states.len(), MAX_HISTORY);
    }

    #[test]
    fn test_redo_caps_undo_stack() {
        let mut state = start();
        for i in 0..MAX_HISTORY {
            state = reduce(&state, &add_round(format!("x{i}")));
        }
        state = reduce(&state, &undo());
        assert_eq!(state.undo_states.len(), MAX_HISTORY - 1);
        state = reduce(&state, &redo());
        assert_eq!(state.undo_states.len(), MAX_HISTORY);
    }

    fn arb_action() -> impl Strategy<Value = Action> {
        let id = prop::sample::select(vec!["a", "b", "c", "r1"]);
        prop_oneof![
            (id.clone(), "[a-z]{1,6}").prop_map(|(id, name)| add_player(id, name)),
            id.clone().prop_map(remove_player),
            id.clone().prop_map(add_round),
            id.clone().prop_map(remove_round),
            (id.clone(), id.clone(), -50i64..50)
                .prop_map(|(r, p, s)| change_player_score(r, p, s)),
            Just(reset_rounds()),
            id.prop_map(collapse_rounds),
        ]
    }

    fn arb_any_action() -> impl Strategy<Value = Action> {
        prop_oneof![
            4 => arb_action(),
            1 => Just(undo()),
            1 => Just(redo()),
        ]
    }

    proptest! {
        #[test]
        fn prop_history_never_exceeds_cap(actions in prop::collection::vec(arb_any_action(), 0..60)) {
            let mut state = start();
            for action in &actions {
                state = reduce(&state, action);
                prop_assert!(state.undo_states.len() <= MAX_HISTORY);
            }
        }

        #[test]
        fn prop_mutation_clears_redo(
            prefix in prop::collection::vec(arb_any_action(), 0..30),
            action in arb_action(),
        ) {
            let state = run(start(), &prefix);
            let next = reduce(&state, &action);
            prop_assert!(next.redo_states.is_empty());
            prop_assert!(Rc::ptr_eq(&next.undo_states[0], &state));
        }

        #[test]
        fn prop_undo_then_redo_round_trips(
            prefix in prop::collection::vec(arb_any_action(), 0..30),
            action in arb_action(),
        ) {
            let before = run(start(), &prefix);
            let after = reduce(&before, &action);
            let undone = reduce(&after, &undo());
            prop_assert_eq!(&*undone, &*before);
            let redone = reduce(&undone, &redo());
            prop_assert_eq!(&*redone, &*after);
        }
    }
}
