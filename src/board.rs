use crate::types::{CellIdx, Dir};

/// Immutable grid classification: walls, goals, and the derived "live" set.
/// Built once per run and shared read-only by every search thread.
#[derive(Debug, Clone)]
pub struct Board {
    width: usize,
    height: usize,
    walls: Vec<bool>,
    goals: Vec<bool>,
    live: Vec<bool>,
    n_boxes: usize,
}

impl Board {
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells (width * height); also the exclusive upper bound on indices.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Number of boxes counted at parse time; fixes the state record size.
    #[inline]
    pub fn n_boxes(&self) -> usize {
        self.n_boxes
    }

    #[inline]
    pub fn is_wall(&self, c: CellIdx) -> bool {
        self.walls[usize::from(c)]
    }

    #[inline]
    pub fn is_goal(&self, c: CellIdx) -> bool {
        self.goals[usize::from(c)]
    }

    /// Whether a box on this cell can still, in principle, reach some goal.
    /// Necessary but not sufficient: multi-box deadlocks are not detected.
    #[inline]
    pub fn is_live(&self, c: CellIdx) -> bool {
        self.live[usize::from(c)]
    }

    /// One step from `c` in `dir`, or `None` when it leaves the grid.
    #[inline]
    pub fn step(&self, c: CellIdx, dir: Dir) -> Option<CellIdx> {
        let (dr, dc) = dir.delta();
        let row = (usize::from(c) / self.width).checked_add_signed(isize::try_from(dr).ok()?)?;
        let col = (usize::from(c) % self.width).checked_add_signed(isize::try_from(dc).ok()?)?;
        if row >= self.height || col >= self.width {
            return None;
        }
        // In bounds, and parse caps the grid at CellIdx::MAX cells.
        CellIdx::try_from(row * self.width + col).ok()
    }

    /// Backward flood fill from every goal: a neighbour `n` of a live cell is
    /// live when both `n` and the cell on its far side (where the pushing
    /// player would stand) are in-bounds and non-wall. Iterative worklist to
    /// keep stack depth independent of grid size.
    fn mark_live(&mut self) {
        let mut work: Vec<CellIdx> = self
            .goals
            .iter()
            .enumerate()
            .filter(|&(_, &goal)| goal)
            .filter_map(|(i, _)| CellIdx::try_from(i).ok())
            .collect();
        for &c in &work {
            self.live[usize::from(c)] = true;
        }
        while let Some(c) = work.pop() {
            for dir in Dir::all() {
                let Some(n) = self.step(c, dir) else { continue };
                let Some(beyond) = self.step(n, dir) else { continue };
                if !self.live[usize::from(n)]
                    && !self.walls[usize::from(n)]
                    && !self.walls[usize::from(beyond)]
                {
                    self.live[usize::from(n)] = true;
                    work.push(n);
                }
            }
        }
    }
}

/// Parse puzzle text into a board plus the initial canonical cell vector
/// (`cells[0]` = player, `cells[1..]` = box indices ascending).
///
/// Width is the longest line, height the line count; short rows are
/// implicitly floor-padded. Unrecognised characters are treated as floor
/// (deliberate permissiveness, matching common level-file variants).
pub fn parse_level(text: &str) -> Result<(Board, Vec<CellIdx>), String> {
    let lines: Vec<&str> = text.lines().collect();
    let height = lines.len();
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    if width == 0 || height == 0 {
        return Err("empty puzzle text".to_string());
    }
    if width * height > usize::from(CellIdx::MAX) {
        return Err(format!(
            "grid {width}x{height} exceeds the {} cell limit",
            CellIdx::MAX
        ));
    }

    let cells = width * height;
    let mut walls = vec![false; cells];
    let mut goals = vec![false; cells];
    let mut player: Option<CellIdx> = None;
    let mut boxes: Vec<CellIdx> = Vec::new();

    for (row, line) in lines.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            // The grid-size guard above keeps every index within CellIdx.
            let idx = CellIdx::try_from(row * width + col)
                .map_err(|_| format!("cell ({row},{col}) out of index range"))?;
            match ch {
                '#' => walls[usize::from(idx)] = true,
                '.' => goals[usize::from(idx)] = true,
                '@' => player = Some(idx),
                '+' => {
                    goals[usize::from(idx)] = true;
                    player = Some(idx);
                }
                '$' => boxes.push(idx),
                '*' => {
                    goals[usize::from(idx)] = true;
                    boxes.push(idx);
                }
                _ => {} // anything else is floor
            }
        }
    }

    let Some(player) = player else {
        return Err("puzzle has no player cell ('@' or '+')".to_string());
    };

    let mut board = Board {
        width,
        height,
        walls,
        goals,
        live: vec![false; cells],
        n_boxes: boxes.len(),
    };
    board.mark_live();

    // Scan order is row-major, so the boxes are already ascending.
    let mut initial = Vec::with_capacity(1 + boxes.len());
    initial.push(player);
    initial.extend(boxes);
    Ok((board, initial))
}
