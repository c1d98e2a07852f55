//! Move rules - the validation pipeline for a whole move
//!
//! Orchestrates the placement validator, the word analyzer, and the
//! move-level rules (first move, adjacency, word formation, dictionary)
//! into a single accept/reject decision. Stages run in order and the
//! pipeline stops at the first failing stage, since word extraction on
//! invalid geometry is undefined; within a stage, violations accumulate.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use wordgrid_types::{Placement, WordFormed, CENTER};

use crate::board::Board;
use crate::placement::validate_placements;
use crate::scoring::{calculate_move_score, ScoringConfig};
use crate::words::extract_words;

/// Word-lookup capability injected into the validator
///
/// Implemented for `HashSet<String>` (uppercase membership), so tests can
/// use deterministic fake dictionaries without touching a real corpus.
pub trait Dictionary {
    fn is_valid_word(&self, word: &str) -> bool;
}

impl Dictionary for HashSet<String> {
    fn is_valid_word(&self, word: &str) -> bool {
        self.contains(&word.to_ascii_uppercase())
    }
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_valid_word(&self, word: &str) -> bool {
        (**self).is_valid_word(word)
    }
}

/// Move validation rules, frozen at validator construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// First move must cover the center square with at least two tiles
    pub require_center_start: bool,
    /// Later moves must touch an existing tile
    pub require_adjacency: bool,
    /// Formed words must pass the dictionary lookup
    pub validate_dictionary: bool,
    /// Whether blank tiles may be played at all
    pub allow_blank_tiles: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            require_center_start: true,
            require_adjacency: true,
            validate_dictionary: true,
            allow_blank_tiles: true,
        }
    }
}

impl ValidationConfig {
    /// Practice-mode preset: geometry and blanks only, no board-position
    /// or dictionary rules
    pub fn lenient() -> Self {
        Self {
            require_center_start: false,
            require_adjacency: false,
            validate_dictionary: false,
            allow_blank_tiles: true,
        }
    }
}

/// Accept/reject decision for a proposed move
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub words_formed: Vec<WordFormed>,
    /// Score the move would earn; 0 for rejected moves
    pub score: u32,
}

impl MoveValidation {
    fn rejected(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: false,
            errors,
            warnings,
            words_formed: Vec::new(),
            score: 0,
        }
    }
}

/// Move validator holding frozen configuration and the injected dictionary
#[derive(Debug, Clone)]
pub struct MoveValidator<D> {
    config: ValidationConfig,
    scoring: ScoringConfig,
    dictionary: D,
}

impl<D: Dictionary> MoveValidator<D> {
    /// Validator with default rule and scoring configuration
    pub fn new(dictionary: D) -> Self {
        Self::with_config(dictionary, ValidationConfig::default(), ScoringConfig::default())
    }

    pub fn with_config(
        dictionary: D,
        config: ValidationConfig,
        scoring: ScoringConfig,
    ) -> Self {
        Self {
            config,
            scoring,
            dictionary,
        }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    pub fn scoring_config(&self) -> &ScoringConfig {
        &self.scoring
    }

    /// Validate a proposed move against a board snapshot
    ///
    /// `is_first_move` is true when no word-placing move precedes this one.
    /// The board is never modified; all word extraction happens on a
    /// throwaway copy.
    #[instrument(level = "debug", skip(self, board, placements), fields(tiles = placements.len()))]
    pub fn validate_move(
        &self,
        board: &Board,
        placements: &[Placement],
        is_first_move: bool,
    ) -> MoveValidation {
        if placements.is_empty() {
            return MoveValidation::rejected(vec!["no tiles placed".to_string()], Vec::new());
        }

        if !self.config.allow_blank_tiles && placements.iter().any(|p| p.tile.is_blank) {
            return MoveValidation::rejected(
                vec!["blank tiles are not allowed".to_string()],
                Vec::new(),
            );
        }

        let report = validate_placements(board, placements);
        if !report.is_valid {
            debug!(errors = report.errors.len(), "placement geometry rejected");
            return MoveValidation::rejected(report.errors, report.warnings);
        }

        let temp_board = match board.with_placements(placements) {
            Ok(temp) => temp,
            // Unreachable after geometry validation; surface rather than
            // corrupt anything.
            Err(err) => return MoveValidation::rejected(vec![err.to_string()], report.warnings),
        };

        let words_formed = extract_words(&temp_board, placements);

        let mut errors = Vec::new();

        if is_first_move {
            if self.config.require_center_start {
                if !placements.iter().any(|p| p.position == CENTER) {
                    errors.push("first move must cover the center square".to_string());
                }
                if placements.len() < 2 {
                    errors.push("first move must use at least two tiles".to_string());
                }
            }
        } else if self.config.require_adjacency {
            let positions: Vec<_> = placements.iter().map(|p| p.position).collect();
            if !board.touches_existing_tile(&positions) {
                errors.push("at least one tile must touch an existing tile".to_string());
            }
        }
        if !errors.is_empty() {
            debug!("board-position rules rejected the move");
            return MoveValidation::rejected(errors, report.warnings);
        }

        if words_formed.is_empty() {
            errors.push("placement does not form any words".to_string());
        } else {
            if !words_formed.iter().any(|w| !w.new_tiles.is_empty()) {
                errors.push("no formed word uses a newly placed tile".to_string());
            }
            if words_formed.iter().any(|w| w.len() < 2) {
                errors.push("all formed words must be at least two letters".to_string());
            }
        }
        if !errors.is_empty() {
            return MoveValidation::rejected(errors, report.warnings);
        }

        if self.config.validate_dictionary {
            for word in &words_formed {
                if !self.dictionary.is_valid_word(&word.word) {
                    errors.push(format!("not a valid word: {}", word.word));
                }
            }
            if !errors.is_empty() {
                debug!(failed = errors.len(), "dictionary rejected the move");
                return MoveValidation::rejected(errors, report.warnings);
            }
        }

        let score =
            calculate_move_score(&temp_board, placements, &words_formed, &self.scoring);
        debug!(score = score.total_score, words = words_formed.len(), "move accepted");

        MoveValidation {
            is_valid: true,
            errors,
            warnings: report.warnings,
            words_formed,
            score: score.total_score,
        }
    }
}
