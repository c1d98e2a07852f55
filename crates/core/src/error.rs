//! Error types for board mutations
//!
//! Expected rule violations (bad alignment, occupied cells seen by the
//! validator, dictionary misses) are reported as accumulated strings in
//! validation results, never as errors here. This module covers the fatal
//! conditions a caller can hit by bypassing the validator and driving the
//! board directly.

use thiserror::Error;
use wordgrid_types::Position;

/// Fatal errors from low-level board operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Position is outside the 15x15 grid
    #[error("position ({r}, {c}) is outside the board", r = .position.row, c = .position.col)]
    OutOfBounds { position: Position },

    /// Target cell already holds a tile
    #[error("cell ({r}, {c}) is already occupied", r = .position.row, c = .position.col)]
    CellOccupied { position: Position },

    /// Removal requested from a cell that holds no tile
    #[error("cell ({r}, {c}) is empty", r = .position.row, c = .position.col)]
    CellEmpty { position: Position },
}

/// Result type alias for board operations
pub type BoardResult<T> = Result<T, BoardError>;
