//! Grid behavior: storage, full-row detection, and row removal.

use gridfall::core::Grid;
use gridfall::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_new_grid_is_empty() {
    let grid = Grid::new();
    assert_eq!(grid.width(), BOARD_WIDTH);
    assert_eq!(grid.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(grid.get(x, y), Some(Cell::Empty));
        }
    }
}

#[test]
fn test_get_out_of_bounds() {
    let grid = Grid::new();
    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, -1), None);
    assert_eq!(grid.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(grid.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_set_and_get() {
    let mut grid = Grid::new();

    assert!(grid.set(5, 10, Cell::Filled));
    assert_eq!(grid.get(5, 10), Some(Cell::Filled));
    assert!(grid.is_filled(5, 10));

    assert!(grid.set(5, 10, Cell::Empty));
    assert_eq!(grid.get(5, 10), Some(Cell::Empty));
    assert!(!grid.is_filled(5, 10));
}

#[test]
fn test_is_row_full() {
    let mut grid = Grid::new();
    assert!(!grid.is_row_full(5));

    for x in 0..BOARD_WIDTH as i8 {
        grid.set(x, 5, Cell::Filled);
    }
    assert!(grid.is_row_full(5));

    // One hole is enough to not be full.
    grid.set(7, 5, Cell::Empty);
    assert!(!grid.is_row_full(5));

    // Out-of-range row index is never full.
    assert!(!grid.is_row_full(BOARD_HEIGHT as usize));
}

#[test]
fn test_remove_row_shifts_content_down() {
    let mut grid = Grid::new();

    // Full row at 5, markers above and below it.
    for x in 0..BOARD_WIDTH as i8 {
        grid.set(x, 5, Cell::Filled);
    }
    grid.set(0, 3, Cell::Filled);
    grid.set(1, 4, Cell::Filled);
    grid.set(2, 10, Cell::Filled);

    grid.remove_row(5);

    // Rows above moved down by one; top row is empty.
    assert!(grid.is_filled(0, 4));
    assert!(grid.is_filled(1, 5));
    assert!(!grid.is_filled(0, 3));
    assert!(!grid.is_filled(1, 4));
    assert!(grid.row(0).iter().all(|c| !c.is_filled()));

    // Rows below the removed one are untouched.
    assert!(grid.is_filled(2, 10));
}

#[test]
fn test_clear_full_rows_counts_and_shifts() {
    let mut grid = Grid::new();

    // Full rows at 5, 10, 15, with a marker above each.
    for x in 0..BOARD_WIDTH as i8 {
        grid.set(x, 5, Cell::Filled);
        grid.set(x, 10, Cell::Filled);
        grid.set(x, 15, Cell::Filled);
    }
    grid.set(0, 4, Cell::Filled);
    grid.set(1, 9, Cell::Filled);
    grid.set(2, 14, Cell::Filled);

    assert_eq!(grid.clear_full_rows(), 3);

    // Each marker dropped by the number of full rows below it.
    assert!(grid.is_filled(0, 7));
    assert!(grid.is_filled(1, 11));
    assert!(grid.is_filled(2, 15));

    // Exactly three cells remain.
    assert_eq!(grid.cells().iter().filter(|c| c.is_filled()).count(), 3);
}

#[test]
fn test_clear_full_rows_handles_stacked_rows() {
    let mut grid = Grid::new();
    for y in 16..20 {
        for x in 0..BOARD_WIDTH as i8 {
            grid.set(x, y, Cell::Filled);
        }
    }
    grid.set(3, 15, Cell::Filled);

    assert_eq!(grid.clear_full_rows(), 4);
    assert!(grid.is_filled(3, 19));
    assert_eq!(grid.cells().iter().filter(|c| c.is_filled()).count(), 1);
}

#[test]
fn test_clear_full_rows_no_full_rows() {
    let mut grid = Grid::new();
    grid.set(0, 19, Cell::Filled);
    assert_eq!(grid.clear_full_rows(), 0);
    assert!(grid.is_filled(0, 19));
}
