//! Board behavior through the public API.

use gridfall::core::{Board, Shape};
use gridfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8, v: u8) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, v);
    }
}

#[test]
fn new_board_dimensions() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.cells().len(), 240);
    assert!(board.cells().iter().all(|&c| c == 0));
}

#[test]
fn get_and_set_are_bounds_checked() {
    let mut board = Board::new();

    assert!(board.set(5, 10, 3));
    assert_eq!(board.get(5, 10), Some(3));
    assert!(board.set(5, 10, 0));
    assert_eq!(board.get(5, 10), Some(0));

    assert!(!board.set(-1, 0, 1));
    assert!(!board.set(0, 20, 1));
    assert_eq!(board.get(12, 0), None);
    assert_eq!(board.get(0, -1), None);
}

#[test]
fn collision_bounds_are_asymmetric() {
    let board = Board::new();
    let o = Shape::of(PieceKind::O);

    // Left and right walls collide.
    assert!(board.collides(&o, -1, 5));
    assert!(board.collides(&o, 11, 5));
    // The floor collides.
    assert!(board.collides(&o, 5, 19));
    // Above the top edge does not.
    assert!(!board.collides(&o, 5, -2));
    // Interior is clear on an empty board.
    assert!(!board.collides(&o, 5, 5));
}

#[test]
fn every_kind_fits_at_its_spawn_position_on_an_empty_board() {
    use gridfall::types::ALL_KINDS;

    let board = Board::new();
    for kind in ALL_KINDS {
        let shape = Shape::of(kind);
        assert!(
            !board.collides(&shape, shape.spawn_x(), 0),
            "{:?} collides at spawn",
            kind
        );
    }
}

#[test]
fn merge_writes_exactly_the_filled_cells() {
    let mut board = Board::new();
    let z = Shape::of(PieceKind::Z);
    board.merge(&z, 2, 10);

    let id = PieceKind::Z.color_id();
    // Z top row: columns 0..=1 of the shape.
    assert_eq!(board.get(2, 10), Some(id));
    assert_eq!(board.get(3, 10), Some(id));
    assert_eq!(board.get(4, 10), Some(0));
    // Z second row: columns 1..=2.
    assert_eq!(board.get(2, 11), Some(0));
    assert_eq!(board.get(3, 11), Some(id));
    assert_eq!(board.get(4, 11), Some(id));
}

#[test]
fn sweep_scores_one_row() {
    let mut board = Board::new();
    fill_row(&mut board, 18, 2);

    let swept = board.sweep();
    assert_eq!(swept.len(), 1);
    assert!(board.cells().iter().all(|&c| c == 0));
}

#[test]
fn sweep_handles_adjacent_rows_in_one_call() {
    let mut board = Board::new();
    fill_row(&mut board, 17, 2);
    fill_row(&mut board, 18, 3);
    fill_row(&mut board, 19, 4);

    let swept = board.sweep();
    assert_eq!(swept.len(), 3);
    assert!(board.cells().iter().all(|&c| c == 0));
}

#[test]
fn sweep_skips_row_zero_even_when_full() {
    let mut board = Board::new();
    fill_row(&mut board, 0, 6);

    let swept = board.sweep();
    assert!(swept.is_empty());
    assert_eq!(board.get(0, 0), Some(6));
    assert_eq!(board.get(11, 0), Some(6));
}
