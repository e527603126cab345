// patterns.rs - Seeding strategies and the named pattern catalogue

use rand::Rng;
use rand::seq::index;
use thiserror::Error;
use tracing::debug;

use crate::grid::{CellState, GridState};

#[derive(Debug, Error, PartialEq)]
pub enum SeedError {
    #[error("proportion {0} must be between 0.0 and 1.0")]
    ProportionOutOfRange(f64),
    #[error("{what} needs at least {need_rows}x{need_cols} cells, grid is {rows}x{cols}")]
    GridTooSmall {
        what: &'static str,
        need_rows: usize,
        need_cols: usize,
        rows: usize,
        cols: usize,
    },
}

/// A still or moving shape, as offsets from the top-left of its bounding box.
#[derive(Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Bounding box as (rows, cols).
    pub fn extent(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }

    /// Sets the pattern's cells alive with its top-left corner at `(row, col)`.
    pub fn place(&self, grid: &mut GridState, row: usize, col: usize) {
        for &(dr, dc) in self.cells {
            grid.set_current(row + dr, col + dc, CellState::Alive);
        }
    }
}

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 0), (0, 1), (0, 2), (1, 0), (2, 1)],
};

pub const PATTERNS: &[Pattern] = &[
    GLIDER,
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 2), (1, 1), (1, 2), (2, 0), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (0, 24), (1, 22), (1, 24), (2, 12), (2, 13), (2, 20), (2, 21), (2, 34), (2, 35),
            (3, 11), (3, 15), (3, 20), (3, 21), (3, 34), (3, 35), (4, 0), (4, 1), (4, 10),
            (4, 16), (4, 20), (4, 21), (5, 0), (5, 1), (5, 10), (5, 14), (5, 16), (5, 17),
            (5, 22), (5, 24), (6, 10), (6, 16), (6, 24), (7, 11), (7, 15), (8, 12), (8, 13),
        ],
    },
];

pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

fn ensure_fits(grid: &GridState, what: &'static str, need_rows: usize, need_cols: usize) -> Result<(), SeedError> {
    if grid.rows() < need_rows || grid.cols() < need_cols {
        return Err(SeedError::GridTooSmall {
            what,
            need_rows,
            need_cols,
            rows: grid.rows(),
            cols: grid.cols(),
        });
    }
    Ok(())
}

/// Clears the grid and centres `pattern` on it.
pub fn apply_pattern(grid: &mut GridState, pattern: &Pattern) -> Result<(), SeedError> {
    let (height, width) = pattern.extent();
    ensure_fits(grid, pattern.name, height, width)?;

    grid.clear();
    pattern.place(grid, (grid.rows() - height) / 2, (grid.cols() - width) / 2);
    debug!(pattern = pattern.name, cells = pattern.cells.len(), "applied pattern");
    Ok(())
}

/// Vertical blinker at (1,1),(2,1),(3,1), for checking the rule by eye.
pub fn seed_test_grid(grid: &mut GridState) -> Result<(), SeedError> {
    ensure_fits(grid, "test blinker", 4, 2)?;
    for row in 1..=3 {
        grid.set_current(row, 1, CellState::Alive);
    }
    Ok(())
}

/// Marks `floor(rows * cols * proportion)` distinct cells alive.
pub fn seed_random_grid<R: Rng>(
    grid: &mut GridState,
    proportion: f64,
    rng: &mut R,
) -> Result<usize, SeedError> {
    if !(0.0..=1.0).contains(&proportion) {
        return Err(SeedError::ProportionOutOfRange(proportion));
    }

    let (rows, cols) = (grid.rows(), grid.cols());
    let total = rows * cols;
    let target = ((total as f64 * proportion).floor() as usize).min(total);
    for i in index::sample(rng, total, target) {
        grid.set_current(i / cols, i % cols, CellState::Alive);
    }

    debug!(target, proportion, "seeded random cells");
    Ok(target)
}

/// Drops `count` gliders at random anchors. Gliders may overlap.
pub fn seed_glider_grid<R: Rng>(
    grid: &mut GridState,
    count: usize,
    rng: &mut R,
) -> Result<(), SeedError> {
    let (height, width) = GLIDER.extent();
    ensure_fits(grid, GLIDER.name, height, width)?;

    for _ in 0..count {
        let row = rng.random_range(0..=grid.rows() - height);
        let col = rng.random_range(0..=grid.cols() - width);
        GLIDER.place(grid, row, col);
    }

    debug!(count, "seeded gliders");
    Ok(())
}

/// How the initial generation is populated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SeedStrategy {
    Test,
    Random { proportion: f64 },
    Gliders { count: usize },
    Named(&'static Pattern),
}

impl SeedStrategy {
    pub fn apply<R: Rng>(&self, grid: &mut GridState, rng: &mut R) -> Result<(), SeedError> {
        match *self {
            SeedStrategy::Test                 => seed_test_grid(grid),
            SeedStrategy::Random { proportion } => seed_random_grid(grid, proportion, rng).map(|_| ()),
            SeedStrategy::Gliders { count }     => seed_glider_grid(grid, count, rng),
            SeedStrategy::Named(pattern)        => apply_pattern(grid, pattern),
        }
    }
}
