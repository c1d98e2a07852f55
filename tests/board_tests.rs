//! Board tests - grid queries, copy-on-write updates, premium layout

use wordgrid::core::{premium_at, premium_at_position, Board, BoardError};
use wordgrid::types::{Position, PremiumKind, Tile, BOARD_SIZE, CENTER, TOTAL_CELLS};

#[test]
fn test_new_board_shape() {
    let board = Board::new();
    assert_eq!(board.occupied_count(), 0);
    assert_eq!(board.empty_positions().len(), TOTAL_CELLS);
    assert!(board.tiles_on_board().is_empty());
    assert!(!board.is_center_occupied());

    // Every cell exists and knows its own position.
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let pos = Position::new(row, col);
            let cell = board.cell_at(pos).expect("cell in bounds");
            assert_eq!(cell.position, pos);
            assert!(cell.is_empty());
        }
    }
}

#[test]
fn test_out_of_bounds_queries() {
    let board = Board::new();
    assert!(board.cell_at(Position::new(BOARD_SIZE, 0)).is_none());
    assert!(board.cell_at(Position::new(0, BOARD_SIZE)).is_none());
    assert!(board.tile_at(Position::new(200, 200)).is_none());
    assert!(!board.is_empty_at(Position::new(15, 15)));
    assert!(!board.is_occupied(Position::new(15, 15)));
}

#[test]
fn test_place_and_remove_are_copy_on_write() {
    let board = Board::new();
    let tile = Tile::new(42, 'W');

    let placed = board.with_tile_placed(tile, CENTER).expect("placement ok");
    assert!(board.is_empty_at(CENTER), "original board must not change");
    assert!(placed.is_center_occupied());
    assert_eq!(placed.occupied_count(), 1);
    assert_eq!(placed.tiles_on_board(), vec![(CENTER, tile)]);

    let removed = placed.with_tile_removed(CENTER).expect("removal ok");
    assert!(placed.is_center_occupied(), "placed board must not change");
    assert_eq!(removed.occupied_count(), 0);
}

#[test]
fn test_board_mutation_errors() {
    let board = Board::new();
    let tile = Tile::new(1, 'A');

    let oob = Position::new(15, 3);
    assert_eq!(
        board.with_tile_placed(tile, oob),
        Err(BoardError::OutOfBounds { position: oob })
    );
    assert_eq!(
        board.with_tile_removed(oob),
        Err(BoardError::OutOfBounds { position: oob })
    );
    assert_eq!(
        board.with_tile_removed(CENTER),
        Err(BoardError::CellEmpty { position: CENTER })
    );

    let placed = board.with_tile_placed(tile, CENTER).expect("placement ok");
    assert_eq!(
        placed.with_tile_placed(Tile::new(2, 'B'), CENTER),
        Err(BoardError::CellOccupied { position: CENTER })
    );
}

#[test]
fn test_premium_layout_counts() {
    let mut counts = std::collections::HashMap::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            *counts.entry(premium_at(row, col)).or_insert(0) += 1;
        }
    }
    assert_eq!(counts[&PremiumKind::DoubleLetter], 24);
    assert_eq!(counts[&PremiumKind::TripleLetter], 12);
    assert_eq!(counts[&PremiumKind::DoubleWord], 16);
    assert_eq!(counts[&PremiumKind::TripleWord], 8);
    assert_eq!(counts[&PremiumKind::Center], 1);
}

#[test]
fn test_premium_layout_rotation_symmetry() {
    let rotate90 = |p: Position| Position::new(p.col, 14 - p.row);
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let p = Position::new(row, col);
            let kind = premium_at_position(p);
            let mut q = p;
            for _ in 0..3 {
                q = rotate90(q);
                assert_eq!(
                    kind,
                    premium_at_position(q),
                    "asymmetry between ({}, {}) and ({}, {})",
                    p.row,
                    p.col,
                    q.row,
                    q.col
                );
            }
        }
    }
}

#[test]
fn test_board_cells_carry_layout_premiums() {
    let board = Board::new();
    let check = |row: u8, col: u8, kind: PremiumKind| {
        let cell = board.cell_at(Position::new(row, col)).expect("in bounds");
        assert_eq!(cell.premium, kind, "premium at ({}, {})", row, col);
    };
    check(7, 7, PremiumKind::Center);
    check(0, 0, PremiumKind::TripleWord);
    check(14, 7, PremiumKind::TripleWord);
    check(1, 1, PremiumKind::DoubleWord);
    check(13, 13, PremiumKind::DoubleWord);
    check(5, 9, PremiumKind::TripleLetter);
    check(11, 14, PremiumKind::DoubleLetter);
    check(7, 8, PremiumKind::Normal);
}
