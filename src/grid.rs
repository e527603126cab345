// grid.rs - Double-buffered grid state for Conway's Game of Life

use std::fmt;

/// Default playing area, matching the classic 50x50 board.
pub const ROWS: usize = 50;
pub const COLS: usize = 50;

/// Binary cell state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    pub fn toggled(self) -> Self {
        match self {
            CellState::Dead  => CellState::Alive,
            CellState::Alive => CellState::Dead,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive { CellState::Alive } else { CellState::Dead }
    }
}

/// Owns the current and next generation buffers.
///
/// Both buffers are `rows * cols` in row-major order and keep those
/// dimensions for their whole lifetime. The engine reads only `current`
/// and writes only `next`; [`GridState::commit_generation`] makes the
/// computed generation visible in one step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridState {
    rows: usize,
    cols: usize,
    current: Vec<CellState>,
    next: Vec<CellState>,
}

impl Default for GridState {
    fn default() -> Self {
        Self::new(ROWS, COLS)
    }
}

impl GridState {
    /// Allocates both buffers with every cell dead.
    ///
    /// # Panics
    /// If either dimension is zero, or `rows * cols` overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be non-zero, got {rows}x{cols}");
        let Some(len) = rows.checked_mul(cols) else {
            panic!("grid of {rows}x{cols} cells overflows usize");
        };
        Self {
            rows,
            cols,
            current: vec![CellState::Dead; len],
            next: vec![CellState::Dead; len],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major offset; out-of-range coordinates are a caller bug.
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) is outside the {}x{} grid",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    pub fn get_current(&self, row: usize, col: usize) -> CellState {
        self.current[self.index(row, col)]
    }

    /// Direct mutation of the current buffer, for seeding and editing between generations.
    pub fn set_current(&mut self, row: usize, col: usize, state: CellState) {
        let i = self.index(row, col);
        self.current[i] = state;
    }

    pub fn toggle_current(&mut self, row: usize, col: usize) {
        let i = self.index(row, col);
        self.current[i] = self.current[i].toggled();
    }

    pub fn set_next(&mut self, row: usize, col: usize, state: CellState) {
        let i = self.index(row, col);
        self.next[i] = state;
    }

    /// Promotes the next buffer to current and leaves an all-dead next buffer behind.
    pub fn commit_generation(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
        self.next.fill(CellState::Dead);
    }

    /// Resets both buffers to dead.
    pub fn clear(&mut self) {
        self.current.fill(CellState::Dead);
        self.next.fill(CellState::Dead);
    }

    pub fn live_count(&self) -> usize {
        self.current.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterates the current buffer as `(row, col, state)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        let cols = self.cols;
        self.current
            .iter()
            .enumerate()
            .map(move |(i, &state)| (i / cols, i % cols, state))
    }
}

impl fmt::Display for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.current.chunks(self.cols) {
            let line: Vec<&str> = row
                .iter()
                .map(|cell| if cell.is_alive() { "1" } else { "0" })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        writeln!(f)
    }
}
