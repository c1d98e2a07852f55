//! Rules core - pure, deterministic, and testable
//!
//! This crate decides whether a proposed placement of letter tiles on the
//! 15x15 board is legal, extracts every word the placement forms, and
//! computes the point value of the move, including end-of-game adjustments.
//! It has **zero dependencies** on UI, networking, or I/O:
//!
//! - **Deterministic**: the same board and placements always produce the
//!   same decision and score
//! - **Side-effect free**: every operation takes immutable inputs and
//!   returns new values; boards are copied, never mutated in place
//! - **Testable**: the dictionary is an injected capability, so tests run
//!   against fixed word sets
//!
//! # Module Structure
//!
//! - [`board`]: 15x15 cell grid with copy-on-write updates
//! - [`layout`]: premium-square classification per coordinate
//! - [`placement`]: geometric legality of a batch of placements
//! - [`words`]: main-word and cross-word extraction
//! - [`rules`]: the move validation pipeline and its configuration
//! - [`scoring`]: per-tile, per-word, and per-move scores
//! - [`endgame`]: leftover-tile penalty redistribution
//! - [`error`]: fatal board errors
//!
//! # Example
//!
//! ```
//! use std::collections::HashSet;
//! use wordgrid_core::{Board, MoveValidator};
//! use wordgrid_types::{Placement, Position, Tile};
//!
//! let mut dictionary = HashSet::new();
//! dictionary.insert("CAT".to_string());
//!
//! let validator = MoveValidator::new(dictionary);
//! let board = Board::new();
//! let placements = vec![
//!     Placement::new(Tile::new(1, 'C'), Position::new(7, 6)),
//!     Placement::new(Tile::new(2, 'A'), Position::new(7, 7)),
//!     Placement::new(Tile::new(3, 'T'), Position::new(7, 8)),
//! ];
//!
//! let result = validator.validate_move(&board, &placements, true);
//! assert!(result.is_valid);
//! assert_eq!(result.words_formed[0].word, "CAT");
//! assert_eq!(result.score, 10); // 5 points doubled by the center square
//! ```
//!
//! # Concurrency
//!
//! Everything here is synchronous and allocation-light. Because no call
//! mutates caller-visible state, several candidate moves can be validated
//! against the same board snapshot from different threads at once.

pub mod board;
pub mod endgame;
pub mod error;
pub mod layout;
pub mod placement;
pub mod rules;
pub mod scoring;
pub mod words;

pub use wordgrid_types as types;

// Re-export commonly used items for convenience
pub use board::Board;
pub use endgame::{calculate_end_game_scoring, EndGameConfig, EndGameScore};
pub use error::{BoardError, BoardResult};
pub use layout::{premium_at, premium_at_position};
pub use placement::{validate_placements, PlacementReport};
pub use rules::{Dictionary, MoveValidation, MoveValidator, ValidationConfig};
pub use scoring::{
    calculate_move_score, MoveScore, ScoreBreakdown, ScoringConfig, TileScore, WordScore,
};
pub use words::extract_words;
