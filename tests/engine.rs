use std::collections::BTreeSet;

use conway_life::patterns::GLIDER;
use conway_life::{CellState, GridState, advance_generation, apply_rule, count_live_neighbors};

fn grid_with(rows: usize, cols: usize, cells: &[(usize, usize)]) -> GridState {
    let mut grid = GridState::new(rows, cols);
    for &(r, c) in cells {
        grid.set_current(r, c, CellState::Alive);
    }
    grid
}

fn live_cells(grid: &GridState) -> BTreeSet<(usize, usize)> {
    grid.cells()
        .filter(|(_, _, state)| state.is_alive())
        .map(|(r, c, _)| (r, c))
        .collect()
}

fn set(cells: &[(usize, usize)]) -> BTreeSet<(usize, usize)> {
    cells.iter().copied().collect()
}

#[test]
fn empty_grid_stays_empty() {
    let mut grid = GridState::new(50, 50);
    for _ in 0..3 {
        advance_generation(&mut grid);
        assert_eq!(grid.live_count(), 0);
    }
}

#[test]
fn blinker_oscillates_with_period_two() {
    let vertical = [(1, 1), (2, 1), (3, 1)];
    let mut grid = grid_with(50, 50, &vertical);

    advance_generation(&mut grid);
    assert_eq!(live_cells(&grid), set(&[(2, 0), (2, 1), (2, 2)]));

    advance_generation(&mut grid);
    assert_eq!(live_cells(&grid), set(&vertical));
}

#[test]
fn glider_translates_diagonally_every_four_generations() {
    let anchor = (20, 20);
    let shape: Vec<_> = GLIDER.cells.iter().map(|&(r, c)| (anchor.0 + r, anchor.1 + c)).collect();
    let mut grid = grid_with(50, 50, &shape);

    for _ in 0..4 {
        advance_generation(&mut grid);
    }

    let moved: Vec<_> = shape.iter().map(|&(r, c)| (r - 1, c - 1)).collect();
    assert_eq!(live_cells(&grid), set(&moved));
}

#[test]
fn glider_does_not_wrap_at_the_corner() {
    let mut grid = grid_with(6, 6, GLIDER.cells);
    for _ in 0..6 {
        advance_generation(&mut grid);
    }
    // Runs into the edge and settles as a block instead of reappearing opposite.
    assert_eq!(live_cells(&grid), set(&[(0, 0), (0, 1), (1, 0), (1, 1)]));
}

#[test]
fn advance_is_deterministic() {
    let cells = [(3, 4), (4, 5), (5, 3), (5, 4), (5, 5), (10, 10), (10, 11), (11, 10), (0, 9)];
    let mut a = grid_with(12, 12, &cells);
    let mut b = a.clone();

    for _ in 0..10 {
        advance_generation(&mut a);
        advance_generation(&mut b);
        assert_eq!(a, b);
    }
}

#[test]
fn corners_and_edges_cap_neighbor_counts() {
    let mut grid = GridState::new(50, 50);
    for row in 0..50 {
        for col in 0..50 {
            grid.set_current(row, col, CellState::Alive);
        }
    }

    for &(r, c) in &[(0, 0), (0, 49), (49, 0), (49, 49)] {
        assert_eq!(count_live_neighbors(&grid, r, c), 3, "corner ({r},{c})");
    }
    for &(r, c) in &[(0, 25), (49, 25), (25, 0), (25, 49)] {
        assert_eq!(count_live_neighbors(&grid, r, c), 5, "edge ({r},{c})");
    }
    assert_eq!(count_live_neighbors(&grid, 25, 25), 8);
}

#[test]
fn every_dead_cell_with_three_neighbors_is_born() {
    // Each ring configuration below is a count around the centre of a 3x3 grid.
    let ring = [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)];
    for count in 0..=8 {
        let grid = grid_with(3, 3, &ring[..count]);
        assert_eq!(count_live_neighbors(&grid, 1, 1), count as u8);

        let mut dead_centre = grid.clone();
        advance_generation(&mut dead_centre);
        assert_eq!(dead_centre.get_current(1, 1).is_alive(), count == 3, "dead centre, {count} neighbors");

        let mut live_centre = grid;
        live_centre.set_current(1, 1, CellState::Alive);
        advance_generation(&mut live_centre);
        assert_eq!(
            live_centre.get_current(1, 1).is_alive(),
            count == 2 || count == 3,
            "live centre, {count} neighbors"
        );
    }
}

#[test]
fn rule_covers_dead_cells_explicitly() {
    for count in [0, 1, 2, 4, 5, 6, 7, 8] {
        assert_eq!(apply_rule(CellState::Dead, count), CellState::Dead);
    }
    assert_eq!(apply_rule(CellState::Dead, 3), CellState::Alive);
}

#[test]
fn commit_does_not_leak_previous_generation() {
    // A lone cell dies; if the old buffer were reused without zeroing it would reappear.
    let mut grid = grid_with(5, 5, &[(2, 2)]);
    advance_generation(&mut grid);
    assert_eq!(grid.live_count(), 0);
    advance_generation(&mut grid);
    assert_eq!(grid.live_count(), 0);
}
