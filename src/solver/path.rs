use crate::arena::{StateArena, StateId};
use crate::board::Board;
use crate::types::Dir;

/// Walk `prev` links from the goal back to the root and emit the move
/// string in root-to-goal order: `u`/`d`/`l`/`r`, uppercase for a push.
///
/// A push is recognised by the parent having a box on the child's player
/// cell. Non-adjacent consecutive player positions indicate a bug in move
/// generation or canonicalisation and are reported as an error, never as a
/// user-facing condition.
pub fn reconstruct(board: &Board, arena: &StateArena, goal: StateId) -> Result<String, String> {
    let mut chain = Vec::new();
    let mut cursor = Some(goal);
    while let Some(id) = cursor {
        chain.push(id);
        cursor = arena.get(id).prev;
    }
    chain.reverse();

    let mut moves = String::with_capacity(chain.len().saturating_sub(1));
    for pair in chain.windows(2) {
        let parent = arena.get(pair[0]);
        let child = arena.get(pair[1]);
        let dir = step_dir(board, parent.player(), child.player()).ok_or_else(|| {
            format!(
                "internal error: non-adjacent player cells {} -> {} in solution chain",
                parent.player(),
                child.player()
            )
        })?;
        let push = parent.boxes().contains(&child.player());
        moves.push(dir.letter(push));
    }
    Ok(moves)
}

/// Direction taking `from` to `to`, when they are exactly one cell apart.
fn step_dir(board: &Board, from: u16, to: u16) -> Option<Dir> {
    Dir::all()
        .into_iter()
        .find(|&dir| board.step(from, dir) == Some(to))
}
