//! Line-oriented front end for the native binary
//!
//! Players and rounds are addressed by their 1-based position on screen.

use std::fmt::Write;

use crate::controller::Scorekeeper;
use crate::game::{GameState, IdGenerator, Score};
use crate::persistence::KeyValueStore;

pub const HELP: &str = "\
Commands:
  player <name>                  add a player
  drop-player <player#>          remove a player
  round                          add a round
  drop-round <round#>            remove a round
  score <round#> <player#> <n>   set a score
  reset                          remove all rounds
  collapse                       merge all rounds into one
  undo | redo                    step through history
  forget                         delete the saved game and start over
  show | help | quit";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddPlayer(String),
    RemovePlayer(usize),
    AddRound,
    RemoveRound(usize),
    Score {
        round: usize,
        player: usize,
        score: Score,
    },
    Reset,
    Collapse,
    Undo,
    Redo,
    Forget,
    Show,
    Help,
    Quit,
}

/// Result of running a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State may have changed; redraw
    Redraw,
    /// Print a message and keep going
    Message(String),
    Quit,
}

impl Command {
    /// Parse a line; `Ok(None)` for blank input
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let args: Vec<&str> = rest.split_whitespace().collect();
        let command = match word {
            "" => return Ok(None),
            "player" | "p" => {
                // Blank names are ignored, like an empty form submit
                if rest.is_empty() {
                    return Ok(None);
                }
                Command::AddPlayer(rest.to_string())
            }
            "drop-player" => Command::RemovePlayer(position(&args, 0, "player")?),
            "round" | "r" => Command::AddRound,
            "drop-round" => Command::RemoveRound(position(&args, 0, "round")?),
            "score" | "s" => Command::Score {
                round: position(&args, 0, "round")?,
                player: position(&args, 1, "player")?,
                score: args
                    .get(2)
                    .ok_or("missing score")?
                    .parse()
                    .map_err(|_| format!("not a score: {}", args[2]))?,
            },
            "reset" => Command::Reset,
            "collapse" => Command::Collapse,
            "undo" | "u" => Command::Undo,
            "redo" => Command::Redo,
            "forget" => Command::Forget,
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => return Err(format!("unknown command: {other} (try 'help')")),
        };
        Ok(Some(command))
    }
}

/// 1-based position argument, returned 0-based
fn position(args: &[&str], idx: usize, what: &str) -> Result<usize, String> {
    let raw = args.get(idx).ok_or_else(|| format!("missing {what} number"))?;
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("not a {what} number: {raw}")),
    }
}

/// Run a command against the controller
pub fn execute<S: KeyValueStore, G: IdGenerator>(
    keeper: &mut Scorekeeper<S, G>,
    command: Command,
) -> Outcome {
    match command {
        Command::AddPlayer(name) => keeper.add_player(&name),
        Command::RemovePlayer(idx) => match keeper.player_id_at(idx) {
            Some(id) => keeper.remove_player(&id),
            None => return no_such("player", idx),
        },
        Command::AddRound => keeper.add_round(),
        Command::RemoveRound(idx) => match keeper.round_id_at(idx) {
            Some(id) => keeper.remove_round(&id),
            None => return no_such("round", idx),
        },
        Command::Score {
            round,
            player,
            score,
        } => {
            let Some(round_id) = keeper.round_id_at(round) else {
                return no_such("round", round);
            };
            let Some(player_id) = keeper.player_id_at(player) else {
                return no_such("player", player);
            };
            // Unchanged values are not worth a history entry
            if keeper.state().score(&round_id, &player_id) != score {
                keeper.change_player_score(&round_id, &player_id, score);
            }
        }
        Command::Reset => keeper.reset_rounds(),
        Command::Collapse => {
            if !keeper.state().can_collapse() {
                return Outcome::Message("nothing to collapse".into());
            }
            keeper.collapse_rounds();
        }
        Command::Undo => {
            if !keeper.state().can_undo() {
                return Outcome::Message("nothing to undo".into());
            }
            keeper.undo();
        }
        Command::Redo => {
            if !keeper.state().can_redo() {
                return Outcome::Message("nothing to redo".into());
            }
            keeper.redo();
        }
        Command::Forget => keeper.forget(),
        Command::Show => {}
        Command::Help => return Outcome::Message(HELP.into()),
        Command::Quit => return Outcome::Quit,
    }
    Outcome::Redraw
}

fn no_such(what: &str, idx: usize) -> Outcome {
    Outcome::Message(format!("no {what} #{}", idx + 1))
}

const COL_WIDTH: usize = 10;

/// Players as columns, rounds as rows, then a total row when any round exists
pub fn render_table(state: &GameState) -> String {
    let mut out = String::new();
    let _ = write!(out, "{:>6} |", "#");
    for (i, player) in state.players.iter().enumerate() {
        let label = format!("{}.{}", i + 1, player.name);
        let _ = write!(out, " {:>w$.w$}", label, w = COL_WIDTH);
    }
    out.push('\n');
    let rule = 8 + (COL_WIDTH + 1) * state.players.len();
    out.push_str(&"-".repeat(rule));
    out.push('\n');

    for (i, round) in state.rounds.iter().enumerate() {
        let _ = write!(out, "{:>6} |", i + 1);
        for player in &state.players {
            let _ = write!(out, " {:>w$}", round.score(&player.id), w = COL_WIDTH);
        }
        out.push('\n');
    }

    if !state.rounds.is_empty() {
        out.push_str(&"-".repeat(rule));
        out.push('\n');
        let _ = write!(out, "{:>6} |", "total");
        for (_, total) in state.totals() {
            let _ = write!(out, " {:>w$}", total, w = COL_WIDTH);
        }
        out.push('\n');
    }

    let mut flags = Vec::new();
    if state.can_undo() {
        flags.push(format!("undo: {}", state.undo_states.len()));
    }
    if state.can_redo() {
        flags.push(format!("redo: {}", state.redo_states.len()));
    }
    if !flags.is_empty() {
        let _ = writeln!(out, "[{}]", flags.join(", "));
    }
    out
}
