//! Grid tests - collision predicate, locking and row compaction.

use gridfall::core::Grid;
use gridfall::types::{BlockColor, GRID_HEIGHT, GRID_WIDTH};

fn fill_row(grid: &mut Grid, y: i8) {
    let cells: Vec<(i8, i8)> = (0..GRID_WIDTH as i8).map(|x| (x, y)).collect();
    grid.lock(&cells, BlockColor::Cyan);
}

#[test]
fn test_empty_grid_accepts_every_interior_cell() {
    let grid = Grid::new();
    for y in 0..GRID_HEIGHT as i8 {
        for x in 0..GRID_WIDTH as i8 {
            assert!(!grid.collides(&[(x, y)]), "({}, {}) should be free", x, y);
        }
    }
}

#[test]
fn test_walls_and_floor_collide() {
    let grid = Grid::new();

    assert!(grid.collides(&[(-1, 5)]));
    assert!(grid.collides(&[(GRID_WIDTH as i8, 5)]));
    assert!(grid.collides(&[(5, GRID_HEIGHT as i8)]));

    // One bad cell poisons the whole set.
    assert!(grid.collides(&[(3, 3), (4, 3), (5, GRID_HEIGHT as i8)]));
}

#[test]
fn test_locked_cells_collide() {
    let mut grid = Grid::new();
    grid.lock(&[(2, 7), (3, 7)], BlockColor::Yellow);

    assert!(grid.collides(&[(2, 7)]));
    assert!(grid.collides(&[(3, 7)]));
    assert!(!grid.collides(&[(4, 7), (2, 8)]));
}

#[test]
fn test_lock_preserves_color() {
    let mut grid = Grid::new();
    grid.lock(&[(0, 15)], BlockColor::Silver);

    assert_eq!(grid.blocks().len(), 1);
    assert_eq!(grid.blocks()[0].color, BlockColor::Silver);
}

#[test]
fn test_no_full_rows_returns_zero() {
    let mut grid = Grid::new();
    grid.lock(&[(0, 15), (1, 15)], BlockColor::Red);
    assert_eq!(grid.clear_full_rows(), 0);
    assert_eq!(grid.blocks().len(), 2);
}

#[test]
fn test_double_clear_shifts_everything_above_by_two() {
    let mut grid = Grid::new();

    // Rows 14 and 15 completely filled, markers stacked above.
    fill_row(&mut grid, 14);
    fill_row(&mut grid, 15);
    grid.lock(&[(0, 13), (1, 13), (0, 12)], BlockColor::Magenta);

    assert_eq!(grid.clear_full_rows(), 2);

    let mut positions: Vec<(i8, i8)> = grid.blocks().iter().map(|b| (b.x, b.y)).collect();
    positions.sort_unstable();
    assert_eq!(positions, vec![(0, 14), (0, 15), (1, 15)]);
}

#[test]
fn test_interleaved_clears_shift_by_the_right_amounts() {
    let mut grid = Grid::new();

    // Full rows 12 and 15, survivors at 11, 13 and 14.
    fill_row(&mut grid, 12);
    fill_row(&mut grid, 15);
    grid.lock(&[(4, 11)], BlockColor::Green);
    grid.lock(&[(5, 13)], BlockColor::Blue);
    grid.lock(&[(6, 14)], BlockColor::Red);

    assert_eq!(grid.clear_full_rows(), 2);

    // The block above both rows drops two; the blocks between drop one.
    let mut positions: Vec<(i8, i8)> = grid.blocks().iter().map(|b| (b.x, b.y)).collect();
    positions.sort_unstable();
    assert_eq!(positions, vec![(4, 13), (5, 14), (6, 15)]);
}

#[test]
fn test_game_over_tracks_the_spawn_row() {
    let mut grid = Grid::new();
    assert!(!grid.is_game_over());

    grid.lock(&[(9, 15)], BlockColor::Red);
    assert!(!grid.is_game_over());

    grid.lock(&[(9, 0)], BlockColor::Red);
    assert!(grid.is_game_over());
}

#[test]
fn test_clear_empties_the_grid() {
    let mut grid = Grid::new();
    fill_row(&mut grid, 15);
    grid.clear();

    assert!(grid.blocks().is_empty());
    assert!(!grid.is_game_over());
    assert_eq!(grid.clear_full_rows(), 0);
}
