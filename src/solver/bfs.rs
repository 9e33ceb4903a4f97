use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::arena::{StateArena, StateId};
use crate::board::Board;
use crate::solver::expand::successors;
use crate::solver::table::TranspositionTable;
use crate::types::CellIdx;

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// Emit a per-round spinner on stderr.
    pub progress: bool,
}

#[derive(Debug)]
pub struct SearchResult {
    /// Arena owning every retained state; needed to walk `prev` chains.
    pub arena: StateArena,
    /// First goal state found, or `None` when the frontier exhausted.
    pub goal: Option<StateId>,
    /// BFS depth of the goal, or the depth reached at exhaustion.
    pub depth: usize,
    /// Distinct configurations recorded in the transposition table.
    pub states_seen: usize,
    /// Frontier states expanded across all rounds.
    pub expanded: usize,
}

/// Everything the expansion tasks mutate, behind one lock: the table's
/// check-then-insert, arena allocation/free-list traffic, the next-frontier
/// chain head, and the recorded goal all form a single critical region.
struct Shared {
    arena: StateArena,
    table: TranspositionTable,
    next_head: Option<StateId>,
    goal: Option<StateId>,
}

impl Shared {
    /// Offer one candidate: allocate, deduplicate, queue or discard.
    /// Returns true when the candidate was a new goal state.
    fn offer(&mut self, parent: Option<StateId>, cells: &[CellIdx], board: &Board) -> bool {
        let id = self.arena.alloc(parent);
        self.arena.get_mut(id).cells.copy_from_slice(cells);
        if !self.table.insert_if_absent(&mut self.arena, id) {
            self.arena.release(id);
            return false;
        }
        if self.arena.get(id).satisfies_goals(board) {
            // First found wins; a goal recorded by another task stands.
            if self.goal.is_none() {
                self.goal = Some(id);
            }
            return true;
        }
        self.arena.get_mut(id).qnext = self.next_head;
        self.next_head = Some(id);
        false
    }

    /// Drain the `qnext` chain into the next frontier, copying each state's
    /// cells so the coming round can expand without touching the arena.
    fn take_frontier(&mut self) -> Vec<(StateId, Box<[CellIdx]>)> {
        let mut frontier = Vec::new();
        let mut cursor = self.next_head.take();
        while let Some(id) = cursor {
            let s = self.arena.get(id);
            frontier.push((id, s.cells.clone()));
            cursor = s.qnext;
        }
        frontier
    }
}

/// Level-synchronous parallel BFS over the configuration space.
///
/// Each round expands every state of the current frontier in parallel on the
/// rayon pool (the per-direction fork is folded into the per-state task) and
/// joins before the next round starts, which is the strict barrier BFS
/// optimality depends on. Expansion works on frontier-local cell copies;
/// only the offer step takes the search lock.
pub fn search(board: &Board, initial: Vec<CellIdx>, opts: SearchOptions) -> SearchResult {
    let start = Instant::now();
    let shared = Mutex::new(Shared {
        arena: StateArena::new(board.n_boxes()),
        table: TranspositionTable::new(),
        next_head: None,
        goal: None,
    });
    let solved = AtomicBool::new(false);

    // Root: record and goal-check before round 1 (an already-solved puzzle
    // terminates at depth 0 with an empty move sequence).
    {
        let mut guard = shared.lock().expect("search lock poisoned");
        if guard.offer(None, &initial, board) {
            solved.store(true, Ordering::Relaxed);
        }
    }

    let spinner = progress_spinner(opts.progress);

    // `depth` is the BFS depth of the current frontier; a goal found while
    // expanding it lies one level deeper.
    let mut depth = 0usize;
    let mut expanded = 0usize;
    let mut frontier = {
        let mut guard = shared.lock().expect("search lock poisoned");
        guard.take_frontier()
    };
    while !frontier.is_empty() && !solved.load(Ordering::Relaxed) {
        expanded += frontier.len();

        if let Some(pb) = &spinner {
            let guard = shared.lock().expect("search lock poisoned");
            pb.set_position(guard.table.len() as u64);
            pb.set_message(format!(
                "depth {depth} frontier {} {:.1}s",
                frontier.len(),
                start.elapsed().as_secs_f64()
            ));
        }

        frontier.par_iter().for_each(|(id, cells)| {
            // Cheap cancellation: results past the first goal are discardable.
            if solved.load(Ordering::Relaxed) {
                return;
            }
            for next in successors(board, cells) {
                let mut guard = shared.lock().expect("search lock poisoned");
                if guard.goal.is_some() {
                    return;
                }
                if guard.offer(Some(*id), &next, board) {
                    solved.store(true, Ordering::Relaxed);
                    return;
                }
            }
        });
        // par_iter joins here: the round barrier.

        let mut guard = shared.lock().expect("search lock poisoned");
        frontier = guard.take_frontier();
        if solved.load(Ordering::Relaxed) || !frontier.is_empty() {
            depth += 1;
        }
    }

    if let Some(pb) = &spinner {
        pb.finish_and_clear();
    }

    let shared = shared.into_inner().expect("search lock poisoned");
    let goal = shared.goal;
    // Goal depth equals the round that produced it; exhaustion reports the
    // last non-empty round.
    SearchResult {
        states_seen: shared.table.len(),
        arena: shared.arena,
        goal,
        depth,
        expanded,
    }
}

fn progress_spinner(enabled: bool) -> Option<ProgressBar> {
    if !enabled {
        return None;
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("[{elapsed_precise}] states ~{pos} {msg}") {
        pb.set_style(style);
    }
    Some(pb)
}
