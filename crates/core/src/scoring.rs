//! Scoring module - per-tile, per-word, and per-move point totals
//!
//! Premium squares reward only tiles placed this move: a tile already on
//! the board never contributes a letter or word multiplier again. Word
//! multipliers accumulate multiplicatively (two double-word squares under
//! one word give x4), and a full-rack move earns the bingo bonus on top,
//! regardless of how many words it forms.

use serde::{Deserialize, Serialize};
use wordgrid_types::{Placement, Position, WordFormed, DEFAULT_BINGO_BONUS, RACK_SIZE};

use crate::board::Board;

/// Scoring configuration, frozen per game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// When off, every multiplier is 1 and only face values count
    pub use_premium_squares: bool,
    /// Bonus for placing a full rack in one move
    pub bingo_bonus: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            use_premium_squares: true,
            bingo_bonus: DEFAULT_BINGO_BONUS,
        }
    }
}

/// One tile's contribution to one word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileScore {
    pub position: Position,
    pub letter: char,
    pub base_points: u32,
    pub letter_multiplier: u32,
    /// `base_points * letter_multiplier`
    pub score: u32,
    /// Whether the tile was placed this move
    pub is_new: bool,
}

/// One word's score with per-tile detail for audit/UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordScore {
    pub word: String,
    pub tile_scores: Vec<TileScore>,
    /// Sum of tile scores before the word multiplier
    pub base_score: u32,
    pub word_multiplier: u32,
    pub final_score: u32,
    pub is_main_word: bool,
}

/// Subtotals and human-readable lines for a move's score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Face values of every tile in every scored word
    pub base_points: u32,
    /// Extra points from double/triple letter squares
    pub letter_bonus: u32,
    /// Extra points from word multipliers
    pub word_bonus: u32,
    pub bingo_bonus: u32,
    /// Always equals the move's `total_score`
    pub total: u32,
    pub details: Vec<String>,
}

/// Complete score for one accepted move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveScore {
    pub total_score: u32,
    pub word_scores: Vec<WordScore>,
    pub bingo_bonus: u32,
    pub breakdown: ScoreBreakdown,
    pub tiles_used: usize,
    pub new_words_formed: Vec<String>,
}

/// Score a move
///
/// `board` must already have the placements applied (the same temporary
/// board the word analyzer ran against); `words_formed` is the analyzer's
/// output. Pure function of its inputs.
pub fn calculate_move_score(
    board: &Board,
    placements: &[Placement],
    words_formed: &[WordFormed],
    config: &ScoringConfig,
) -> MoveScore {
    let mut word_scores = Vec::with_capacity(words_formed.len());
    let mut base_points = 0;
    let mut letter_bonus = 0;
    let mut word_bonus = 0;
    let mut details = Vec::new();

    for word in words_formed {
        let scored = score_word(board, word, config);

        let face_value: u32 = scored.tile_scores.iter().map(|t| t.base_points).sum();
        base_points += face_value;
        letter_bonus += scored.base_score - face_value;
        word_bonus += scored.final_score - scored.base_score;

        if scored.word_multiplier > 1 {
            details.push(format!(
                "\"{}\": {} points (x{} word)",
                scored.word, scored.final_score, scored.word_multiplier
            ));
        } else {
            details.push(format!("\"{}\": {} points", scored.word, scored.final_score));
        }

        word_scores.push(scored);
    }

    let bingo_bonus = if placements.len() == RACK_SIZE {
        config.bingo_bonus
    } else {
        0
    };
    if bingo_bonus > 0 {
        details.push(format!("Bingo bonus: +{}", bingo_bonus));
    }

    let word_total: u32 = word_scores.iter().map(|w| w.final_score).sum();
    let total_score = word_total + bingo_bonus;

    let new_words_formed = words_formed
        .iter()
        .filter(|w| !w.new_tiles.is_empty())
        .map(|w| w.word.clone())
        .collect();

    MoveScore {
        total_score,
        word_scores,
        bingo_bonus,
        breakdown: ScoreBreakdown {
            base_points,
            letter_bonus,
            word_bonus,
            bingo_bonus,
            total: total_score,
            details,
        },
        tiles_used: placements.len(),
        new_words_formed,
    }
}

fn score_word(board: &Board, word: &WordFormed, config: &ScoringConfig) -> WordScore {
    let mut tile_scores = Vec::with_capacity(word.positions.len());
    let mut base_score = 0;
    let mut word_multiplier = 1;

    for &pos in &word.positions {
        let Some(cell) = board.cell_at(pos) else {
            continue;
        };
        let Some(tile) = cell.tile else {
            continue;
        };

        let is_new = word.new_tiles.contains(&pos);
        let premium_active = is_new && config.use_premium_squares;

        let letter_multiplier = if premium_active {
            cell.premium.letter_multiplier()
        } else {
            1
        };
        if premium_active {
            word_multiplier *= cell.premium.word_multiplier();
        }

        let tile_base = tile.base_points();
        let score = tile_base * letter_multiplier;
        base_score += score;

        tile_scores.push(TileScore {
            position: pos,
            letter: tile.effective_letter().unwrap_or('?'),
            base_points: tile_base,
            letter_multiplier,
            score,
            is_new,
        });
    }

    WordScore {
        word: word.word.clone(),
        tile_scores,
        base_score,
        word_multiplier,
        final_score: base_score * word_multiplier,
        is_main_word: word.is_main_word,
    }
}
