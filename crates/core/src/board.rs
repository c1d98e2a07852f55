//! Board module - the 15x15 grid of cells
//!
//! Uses a flat array for cache locality. The board is a value: update
//! methods (`with_tile_placed`, `with_tile_removed`, `with_placements`)
//! return a new board and leave the receiver untouched, so a validator can
//! build throwaway boards without ever mutating caller-visible state.

use std::fmt;

use wordgrid_types::{Cell, Placement, Position, Tile, BOARD_SIZE, CENTER, TOTAL_CELLS};

use crate::error::{BoardError, BoardResult};
use crate::layout::premium_at;

/// The game board - 15x15 cells in row-major order
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
}

impl Board {
    /// Create an empty board with the standard premium layout
    pub fn new() -> Self {
        let cells = std::array::from_fn(|idx| {
            let position = Position::new(
                (idx / BOARD_SIZE as usize) as u8,
                (idx % BOARD_SIZE as usize) as u8,
            );
            Cell {
                position,
                tile: None,
                premium: premium_at(position.row, position.col),
            }
        });
        Self { cells }
    }

    /// Flat index for a position, `None` when off the board
    #[inline]
    fn index(pos: Position) -> Option<usize> {
        if pos.is_on_board() {
            Some(pos.to_index())
        } else {
            None
        }
    }

    /// Cell at a position, `None` when off the board
    pub fn cell_at(&self, pos: Position) -> Option<&Cell> {
        Self::index(pos).map(|idx| &self.cells[idx])
    }

    /// Tile at a position, `None` when empty or off the board
    pub fn tile_at(&self, pos: Position) -> Option<&Tile> {
        self.cell_at(pos).and_then(|cell| cell.tile.as_ref())
    }

    /// Whether the position is on the board and holds no tile
    pub fn is_empty_at(&self, pos: Position) -> bool {
        matches!(self.cell_at(pos), Some(cell) if cell.is_empty())
    }

    /// Whether the position is on the board and holds a tile
    pub fn is_occupied(&self, pos: Position) -> bool {
        matches!(self.cell_at(pos), Some(cell) if !cell.is_empty())
    }

    /// New board with `tile` placed at `pos`
    ///
    /// Fails with `OutOfBounds` for positions off the grid and
    /// `CellOccupied` when the target already holds a tile. The receiver is
    /// never modified.
    pub fn with_tile_placed(&self, tile: Tile, pos: Position) -> BoardResult<Board> {
        let idx = Self::index(pos).ok_or(BoardError::OutOfBounds { position: pos })?;
        if self.cells[idx].tile.is_some() {
            return Err(BoardError::CellOccupied { position: pos });
        }
        let mut next = self.clone();
        next.cells[idx].tile = Some(tile);
        Ok(next)
    }

    /// New board with the tile at `pos` removed
    pub fn with_tile_removed(&self, pos: Position) -> BoardResult<Board> {
        let idx = Self::index(pos).ok_or(BoardError::OutOfBounds { position: pos })?;
        if self.cells[idx].tile.is_none() {
            return Err(BoardError::CellEmpty { position: pos });
        }
        let mut next = self.clone();
        next.cells[idx].tile = None;
        Ok(next)
    }

    /// New board with every placement applied, blank designations resolved
    ///
    /// This is the temporary board the word analyzer and scorer work
    /// against. Placements must target distinct empty in-bounds cells; the
    /// placement validator guarantees that for validated moves.
    pub fn with_placements(&self, placements: &[Placement]) -> BoardResult<Board> {
        let mut next = self.clone();
        for placement in placements {
            let pos = placement.position;
            let idx = Self::index(pos).ok_or(BoardError::OutOfBounds { position: pos })?;
            if next.cells[idx].tile.is_some() {
                return Err(BoardError::CellOccupied { position: pos });
            }
            next.cells[idx].tile = Some(placement.resolved_tile());
        }
        Ok(next)
    }

    /// All occupied positions with their tiles
    pub fn tiles_on_board(&self) -> Vec<(Position, Tile)> {
        self.cells
            .iter()
            .filter_map(|cell| cell.tile.map(|tile| (cell.position, tile)))
            .collect()
    }

    /// All positions currently holding no tile
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|cell| cell.is_empty())
            .map(|cell| cell.position)
            .collect()
    }

    /// Whether the center square holds a tile
    pub fn is_center_occupied(&self) -> bool {
        self.is_occupied(CENTER)
    }

    /// Number of tiles on the board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Whether any placement position touches an existing tile orthogonally
    pub fn touches_existing_tile(&self, positions: &[Position]) -> bool {
        positions
            .iter()
            .any(|pos| pos.neighbors().any(|n| self.is_occupied(n)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Diagnostic rendering: letters for tiles, premium markers for empty
    /// premium squares, `.` elsewhere
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Position::new(row, col);
                let ch = match self.tile_at(pos) {
                    Some(tile) => tile.effective_letter().unwrap_or('?'),
                    None => match premium_at(row, col) {
                        wordgrid_types::PremiumKind::Normal => '.',
                        wordgrid_types::PremiumKind::DoubleLetter => '2',
                        wordgrid_types::PremiumKind::TripleLetter => '3',
                        wordgrid_types::PremiumKind::DoubleWord => 'd',
                        wordgrid_types::PremiumKind::TripleWord => 't',
                        wordgrid_types::PremiumKind::Center => '*',
                    },
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
