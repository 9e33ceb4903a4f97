#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod types;
pub mod board;
pub mod state;
pub mod hash;
pub mod arena;

pub mod solver;

// Re-exports: stable minimal API surface for external callers
pub use crate::arena::{StateArena, StateId};
pub use crate::board::{parse_level, Board};
pub use crate::hash::state_key;
pub use crate::solver::bfs::{search, SearchOptions, SearchResult};
pub use crate::solver::path::reconstruct;
pub use crate::solver::{solve_text, Outcome, SolveReport};
pub use crate::state::State;
pub use crate::types::{CellIdx, Dir};
