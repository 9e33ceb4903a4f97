use serde::Serialize;

use crate::board::parse_level;

pub mod bfs;
pub mod expand;
pub mod path;
pub mod table;

pub use bfs::{search, SearchOptions, SearchResult};
pub use expand::{successors, try_move};
pub use path::reconstruct;
pub use table::TranspositionTable;

/// Terminal outcome of a solve run. Unsolvable is a defined result, not an
/// error; failures (bad input, broken invariants) surface as `Err` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved { moves: String },
    Unsolvable,
}

/// Serializable summary of a run, for the CLI's `--json` output.
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    pub solved: bool,
    /// Move letters in solution order; empty when unsolvable (or when the
    /// puzzle starts solved).
    pub moves: String,
    pub move_count: usize,
    pub push_count: usize,
    /// Solution depth, or the depth reached before exhaustion.
    pub depth: usize,
    /// Distinct configurations recorded during the search.
    pub states: usize,
    pub elapsed_ms: u64,
}

impl SolveReport {
    pub fn new(outcome: &Outcome, result: &SearchResult, elapsed_ms: u64) -> Self {
        let moves = match outcome {
            Outcome::Solved { moves } => moves.clone(),
            Outcome::Unsolvable => String::new(),
        };
        Self {
            solved: matches!(outcome, Outcome::Solved { .. }),
            move_count: moves.chars().count(),
            push_count: moves.chars().filter(char::is_ascii_uppercase).count(),
            moves,
            depth: result.depth,
            states: result.states_seen,
            elapsed_ms,
        }
    }
}

/// Parse, search, reconstruct: the whole pipeline for one puzzle text.
pub fn solve_text(text: &str, opts: SearchOptions) -> Result<(Outcome, SearchResult), String> {
    let (board, initial) = parse_level(text)?;
    let result = search(&board, initial, opts);
    let outcome = match result.goal {
        Some(goal) => Outcome::Solved {
            moves: reconstruct(&board, &result.arena, goal)?,
        },
        None => Outcome::Unsolvable,
    };
    Ok((outcome, result))
}
