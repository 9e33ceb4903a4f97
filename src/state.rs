use crate::arena::StateId;
use crate::board::Board;
use crate::types::CellIdx;

/// One search-space configuration: player cell plus `n_boxes` box cells.
///
/// `cells[0]` is the player; `cells[1..]` are the box indices sorted
/// ascending, so set-equal box placements always compare identical
/// (canonical form). A state is never mutated after creation except for the
/// cached hash and the three link fields.
#[derive(Debug, Clone)]
pub struct State {
    /// Cached polynomial hash of `cells`; 0 means "not yet computed".
    /// A genuine zero-valued hash is simply recomputed on every use.
    pub hash: u32,
    /// Parent state, for path reconstruction. `None` only at the root.
    pub prev: Option<StateId>,
    /// Transposition-table bucket chain. Unused while the state is free.
    pub next: Option<StateId>,
    /// Next-frontier chain, threaded while a BFS round produces its output.
    pub qnext: Option<StateId>,
    pub cells: Box<[CellIdx]>,
}

impl State {
    #[inline]
    pub fn player(&self) -> CellIdx {
        self.cells[0]
    }

    #[inline]
    pub fn boxes(&self) -> &[CellIdx] {
        &self.cells[1..]
    }

    /// Goal predicate: every box sits on a goal cell.
    #[inline]
    pub fn satisfies_goals(&self, board: &Board) -> bool {
        self.boxes().iter().all(|&b| board.is_goal(b))
    }
}

/// Restore canonical form: insertion sort of the box slice (`cells[1..]`).
/// After a push the slice is nearly sorted (at most one element out of
/// place), and box indices are unique, so ties cannot occur.
#[inline]
pub fn sort_boxes(cells: &mut [CellIdx]) {
    for i in 2..cells.len() {
        let key = cells[i];
        let mut j = i;
        while j > 1 && cells[j - 1] > key {
            cells[j] = cells[j - 1];
            j -= 1;
        }
        cells[j] = key;
    }
}
