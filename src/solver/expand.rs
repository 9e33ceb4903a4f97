use crate::board::Board;
use crate::state::sort_boxes;
use crate::types::{CellIdx, Dir};

/// One-direction move attempt, returning the successor's canonical cell
/// sequence. `None` when the move is illegal: destination off-grid or wall;
/// or, for a push, the cell beyond the box off-grid, wall, dead, or occupied
/// by another box.
///
/// Read-only with respect to `cells`; directions are independent and safe
/// to evaluate concurrently.
pub fn try_move(board: &Board, cells: &[CellIdx], dir: Dir) -> Option<Box<[CellIdx]>> {
    let dest = board.step(cells[0], dir)?;
    if board.is_wall(dest) {
        return None;
    }

    let pushed = cells[1..].iter().position(|&b| b == dest);
    let mut push_to = None;
    if pushed.is_some() {
        let beyond = board.step(dest, dir)?;
        if board.is_wall(beyond) || !board.is_live(beyond) {
            return None;
        }
        if cells[1..].contains(&beyond) {
            return None;
        }
        push_to = Some(beyond);
    }

    let mut next: Box<[CellIdx]> = cells.into();
    next[0] = dest;
    if let (Some(i), Some(to)) = (pushed, push_to) {
        next[1 + i] = to;
        sort_boxes(&mut next);
    }
    Some(next)
}

/// All legal successors of a state, in `[Up, Right, Down, Left]` order.
#[inline]
pub fn successors(board: &Board, cells: &[CellIdx]) -> Vec<Box<[CellIdx]>> {
    Dir::all()
        .into_iter()
        .filter_map(|dir| try_move(board, cells, dir))
        .collect()
}
