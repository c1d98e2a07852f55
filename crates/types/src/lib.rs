//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the rules core.
//! All types are pure data structures with no game logic, making them usable
//! in any context (rules evaluation, UI rendering, hint candidates).
//!
//! # Board Dimensions
//!
//! Standard word-game board dimensions:
//!
//! - **Size**: 15x15 cells (rows and columns indexed 0-14)
//! - **Center**: (7, 7), the mandatory starting square
//! - **Rack**: 7 tiles per player
//!
//! # Premium Squares
//!
//! Each cell carries a fixed [`PremiumKind`]. The layout is symmetric under
//! 90/180/270 degree rotation about the center and contains exactly:
//!
//! | Kind | Count |
//! |------|-------|
//! | `DoubleLetter` | 24 |
//! | `TripleLetter` | 12 |
//! | `DoubleWord` | 16 |
//! | `TripleWord` | 8 |
//! | `Center` | 1 |
//!
//! # Examples
//!
//! ```
//! use wordgrid_types::{letter_points, Position, Tile, BOARD_SIZE, CENTER};
//!
//! // Standard letter values
//! assert_eq!(letter_points('Q'), 10);
//! assert_eq!(letter_points('E'), 1);
//!
//! // Positions are plain value types
//! let pos = Position::new(7, 7);
//! assert_eq!(pos, CENTER);
//!
//! // Tiles know their own point value; blanks are always worth zero
//! let q = Tile::new(1, 'Q');
//! assert_eq!(q.points, 10);
//! let blank = Tile::blank(2);
//! assert_eq!(blank.points, 0);
//!
//! assert_eq!(BOARD_SIZE, 15);
//! ```

use serde::{Deserialize, Serialize};

/// Board edge length in cells (15x15 grid)
pub const BOARD_SIZE: u8 = 15;

/// Total number of cells on the board
pub const TOTAL_CELLS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Number of tiles on a full rack; placing this many in one move is a bingo
pub const RACK_SIZE: usize = 7;

/// Default bonus for playing a full rack in a single move
pub const DEFAULT_BINGO_BONUS: u32 = 50;

/// The center square, which the first move must cover
pub const CENTER: Position = Position { row: 7, col: 7 };

/// A cell coordinate on the board
///
/// Plain value type with no identity. `row` and `col` are expected to be in
/// `[0, BOARD_SIZE)`; out-of-range values are representable and rejected by
/// the board and the placement validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Check whether signed coordinates land on the board
    #[inline]
    pub fn in_bounds(row: i16, col: i16) -> bool {
        row >= 0 && row < BOARD_SIZE as i16 && col >= 0 && col < BOARD_SIZE as i16
    }

    /// Whether this position is on the board
    #[inline]
    pub fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Flat row-major index, for board storage
    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// Step by a signed offset, returning `None` when leaving the board
    pub fn offset(self, d_row: i16, d_col: i16) -> Option<Position> {
        let row = self.row as i16 + d_row;
        let col = self.col as i16 + d_col;
        if Position::in_bounds(row, col) {
            Some(Position::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// The up-to-four orthogonal neighbors on the board
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(move |(dr, dc)| self.offset(dr, dc))
    }
}

/// The two word axes on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// The other axis
    pub fn perpendicular(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Unit step along this axis as `(d_row, d_col)`
    pub fn step(self) -> (i16, i16) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
        }
    }
}

/// Premium square classification for a board cell
///
/// `Center` behaves as a double-word square for any move that covers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PremiumKind {
    Normal,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
    Center,
}

impl PremiumKind {
    /// Multiplier applied to a single tile's points
    pub fn letter_multiplier(self) -> u32 {
        match self {
            PremiumKind::DoubleLetter => 2,
            PremiumKind::TripleLetter => 3,
            PremiumKind::Normal
            | PremiumKind::DoubleWord
            | PremiumKind::TripleWord
            | PremiumKind::Center => 1,
        }
    }

    /// Multiplier contributed to the whole word's score
    pub fn word_multiplier(self) -> u32 {
        match self {
            PremiumKind::DoubleWord | PremiumKind::Center => 2,
            PremiumKind::TripleWord => 3,
            PremiumKind::Normal | PremiumKind::DoubleLetter | PremiumKind::TripleLetter => 1,
        }
    }

    /// Short label for score breakdowns (`None` for normal squares)
    pub fn label(self) -> Option<&'static str> {
        match self {
            PremiumKind::Normal => None,
            PremiumKind::DoubleLetter => Some("double letter"),
            PremiumKind::TripleLetter => Some("triple letter"),
            PremiumKind::DoubleWord => Some("double word"),
            PremiumKind::TripleWord => Some("triple word"),
            PremiumKind::Center => Some("center"),
        }
    }
}

/// A letter tile
///
/// Tile identity (`id`) persists as a tile moves between rack and board.
/// A blank tile has no letter of its own and is always worth zero points;
/// its `assigned_letter` is set when the blank is designated at placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub id: u32,
    /// Printed letter; `None` for an unassigned blank
    pub letter: Option<char>,
    /// Face value; always 0 for blanks
    pub points: u32,
    pub is_blank: bool,
    /// Letter a blank has been designated as, once placed
    pub assigned_letter: Option<char>,
}

impl Tile {
    /// Create a letter tile with the standard point value
    pub fn new(id: u32, letter: char) -> Self {
        let letter = letter.to_ascii_uppercase();
        Self {
            id,
            letter: Some(letter),
            points: letter_points(letter),
            is_blank: false,
            assigned_letter: None,
        }
    }

    /// Create an undesignated blank tile
    pub fn blank(id: u32) -> Self {
        Self {
            id,
            letter: None,
            points: 0,
            is_blank: true,
            assigned_letter: None,
        }
    }

    /// Copy of this tile with a blank designation applied
    pub fn with_assigned_letter(mut self, letter: char) -> Self {
        self.assigned_letter = Some(letter.to_ascii_uppercase());
        self
    }

    /// The letter this tile shows on the board
    ///
    /// For blanks this is the assigned letter; `None` if the blank has not
    /// been designated yet.
    pub fn effective_letter(&self) -> Option<char> {
        if self.is_blank {
            self.assigned_letter
        } else {
            self.letter
        }
    }

    /// Points this tile contributes to a word (blanks contribute nothing)
    #[inline]
    pub fn base_points(&self) -> u32 {
        if self.is_blank {
            0
        } else {
            self.points
        }
    }
}

/// A single board cell: premium kind plus the occupying tile, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub position: Position,
    pub tile: Option<Tile>,
    pub premium: PremiumKind,
}

impl Cell {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tile.is_none()
    }
}

/// One tile targeted at one position within a move
///
/// `assigned_letter` must be a single `A`-`Z` letter exactly when the tile
/// is a blank; the placement validator enforces this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub tile: Tile,
    pub position: Position,
    pub assigned_letter: Option<char>,
}

impl Placement {
    pub fn new(tile: Tile, position: Position) -> Self {
        Self {
            tile,
            position,
            assigned_letter: None,
        }
    }

    /// Placement of a blank with its designated letter
    pub fn with_letter(tile: Tile, position: Position, letter: char) -> Self {
        Self {
            tile,
            position,
            assigned_letter: Some(letter.to_ascii_uppercase()),
        }
    }

    /// The tile as it will sit on the board, blank designation applied
    pub fn resolved_tile(&self) -> Tile {
        match self.assigned_letter {
            Some(letter) if self.tile.is_blank => self.tile.with_assigned_letter(letter),
            _ => self.tile,
        }
    }
}

/// A word created by a move, with its cells partitioned into tiles placed
/// this move (`new_tiles`) and tiles that were already on the board
/// (`existing_tiles`)
///
/// `positions` runs start-to-end along the word's axis. The partition is
/// what lets the scorer avoid re-rewarding premium squares under tiles from
/// earlier moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFormed {
    pub word: String,
    pub positions: Vec<Position>,
    pub new_tiles: Vec<Position>,
    pub existing_tiles: Vec<Position>,
    pub is_main_word: bool,
}

impl WordFormed {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}

/// Whether a character is a letter a blank may be designated as
#[inline]
pub fn is_playable_letter(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// Standard point value for a letter (case-insensitive)
///
/// Unknown characters score 0, matching the blank tile convention.
pub fn letter_points(letter: char) -> u32 {
    match letter.to_ascii_uppercase() {
        'A' | 'E' | 'I' | 'O' | 'U' | 'L' | 'N' | 'S' | 'T' | 'R' => 1,
        'D' | 'G' => 2,
        'B' | 'C' | 'M' | 'P' => 3,
        'F' | 'H' | 'V' | 'W' | 'Y' => 4,
        'K' => 5,
        'J' | 'X' => 8,
        'Q' | 'Z' => 10,
        _ => 0,
    }
}
