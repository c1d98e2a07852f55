//! Hint evaluation on top of the rules core
//!
//! The rules core never mutates a caller's board, so candidate moves can
//! be validated speculatively against one snapshot. This crate ranks
//! caller-supplied candidates by the score they would earn. Candidate
//! *generation* is out of scope for the rules core; [`generate_candidates`]
//! is a stub so the surface exists for a future generator.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use wordgrid_core::{Board, Dictionary, MoveValidation, MoveValidator};
use wordgrid_types::{Placement, Tile};

/// A candidate move with its validation outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub placements: Vec<Placement>,
    pub validation: MoveValidation,
}

impl RankedCandidate {
    pub fn score(&self) -> u32 {
        self.validation.score
    }
}

/// Validate each candidate and rank the legal ones by descending score
///
/// Invalid candidates are dropped. Ties keep their input order, so a
/// caller's own preference ordering survives ranking.
#[instrument(level = "debug", skip_all, fields(candidates = candidates.len()))]
pub fn rank_candidates<D: Dictionary>(
    validator: &MoveValidator<D>,
    board: &Board,
    candidates: &[Vec<Placement>],
    is_first_move: bool,
) -> Vec<RankedCandidate> {
    let mut ranked: Vec<RankedCandidate> = candidates
        .iter()
        .map(|placements| RankedCandidate {
            placements: placements.clone(),
            validation: validator.validate_move(board, placements, is_first_move),
        })
        .filter(|candidate| candidate.validation.is_valid)
        .collect();

    ranked.sort_by(|a, b| b.score().cmp(&a.score()));
    debug!(legal = ranked.len(), "candidates ranked");
    ranked
}

/// Candidate generation stub
///
/// Always returns no candidates. Move generation belongs to a future AI
/// layer; the rules core only evaluates moves it is handed.
pub fn generate_candidates(_board: &Board, _rack: &[Tile]) -> Vec<Vec<Placement>> {
    Vec::new()
}
