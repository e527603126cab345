// engine.rs - Generation transition for Conway's Game of Life

use tracing::trace;

use crate::grid::{CellState, GridState};

/// Moore neighbourhood deltas as (row, col).
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Counts live cells around `(row, col)` in the current buffer.
///
/// Positions beyond the grid edge count as dead; there is no wraparound.
pub fn count_live_neighbors(grid: &GridState, row: usize, col: usize) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| {
            let nr = row.checked_add_signed(dr).filter(|&r| r < grid.rows())?;
            let nc = col.checked_add_signed(dc).filter(|&c| c < grid.cols())?;
            Some((nr, nc))
        })
        .filter(|&(nr, nc)| grid.get_current(nr, nc).is_alive())
        .count() as u8
}

/// Conway's B3/S23 rule.
pub fn apply_rule(state: CellState, neighbors: u8) -> CellState {
    match (state, neighbors) {
        (CellState::Alive, 0 | 1)  => CellState::Dead,   // Underpopulation
        (CellState::Alive, 2 | 3)  => CellState::Alive,  // Survival
        (CellState::Alive, 4..)    => CellState::Dead,   // Overpopulation
        (CellState::Dead, 3)       => CellState::Alive,  // Birth
        (CellState::Dead, 0..=2 | 4..) => CellState::Dead,
    }
}

/// Computes the next state of every cell from the current buffer, then commits.
pub fn advance_generation(grid: &mut GridState) {
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let neighbors = count_live_neighbors(grid, row, col);
            let next = apply_rule(grid.get_current(row, col), neighbors);
            grid.set_next(row, col, next);
        }
    }
    grid.commit_generation();
    trace!(rows = grid.rows(), cols = grid.cols(), "generation committed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_table_is_total() {
        for count in 0..=8u8 {
            let survives = apply_rule(CellState::Alive, count);
            let born = apply_rule(CellState::Dead, count);
            assert_eq!(survives.is_alive(), count == 2 || count == 3, "alive with {count}");
            assert_eq!(born.is_alive(), count == 3, "dead with {count}");
        }
    }

    #[test]
    fn isolated_cell_has_no_neighbors() {
        let mut grid = GridState::new(3, 3);
        grid.set_current(1, 1, CellState::Alive);
        assert_eq!(count_live_neighbors(&grid, 1, 1), 0);
        assert_eq!(count_live_neighbors(&grid, 0, 0), 1);
    }

    #[test]
    fn full_grid_neighbor_counts_respect_edges() {
        let mut grid = GridState::new(3, 3);
        for row in 0..3 {
            for col in 0..3 {
                grid.set_current(row, col, CellState::Alive);
            }
        }
        assert_eq!(count_live_neighbors(&grid, 0, 0), 3);
        assert_eq!(count_live_neighbors(&grid, 0, 1), 5);
        assert_eq!(count_live_neighbors(&grid, 1, 1), 8);
        assert_eq!(count_live_neighbors(&grid, 2, 2), 3);
    }

    #[test]
    fn single_cell_grid_never_counts_neighbors() {
        let mut grid = GridState::new(1, 1);
        grid.set_current(0, 0, CellState::Alive);
        assert_eq!(count_live_neighbors(&grid, 0, 0), 0);
        advance_generation(&mut grid);
        assert_eq!(grid.get_current(0, 0), CellState::Dead);
    }

    #[test]
    fn block_is_still_life() {
        let mut grid = GridState::new(4, 4);
        for (r, c) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
            grid.set_current(r, c, CellState::Alive);
        }
        let before = grid.clone();
        advance_generation(&mut grid);
        assert_eq!(grid, before);
    }
}
