use serde::{Deserialize, Serialize};

/// Linear row-major cell index into the board grid.
/// u16 caps the grid at 65536 cells, far beyond any practical puzzle.
pub type CellIdx = u16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

impl Dir {
    #[inline]
    pub fn all() -> [Dir; 4] {
        [Dir::Up, Dir::Right, Dir::Down, Dir::Left]
    }

    /// (row delta, column delta) for one step in this direction.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Right => (0, 1),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
        }
    }

    /// Solution letter: lowercase for a plain move, uppercase for a push.
    #[inline]
    pub fn letter(self, push: bool) -> char {
        let c = match self {
            Dir::Up => 'u',
            Dir::Right => 'r',
            Dir::Down => 'd',
            Dir::Left => 'l',
        };
        if push {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}
