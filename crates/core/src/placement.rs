//! Placement validator - geometric legality of a batch of placements
//!
//! Checks bounds, duplicate targets, occupancy, blank designation, and
//! line/gap geometry against the pre-move board. Errors accumulate so a
//! caller can show every violation at once; the only per-placement
//! short-circuit is that an out-of-bounds placement skips its remaining
//! checks, which would be meaningless.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};
use wordgrid_types::{is_playable_letter, Axis, Placement, Position, RACK_SIZE};

use crate::board::Board;

/// Outcome of geometric placement validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// In-bounds positions targeted by this batch
    pub affected_positions: Vec<Position>,
}

impl PlacementReport {
    fn new(errors: Vec<String>, warnings: Vec<String>, affected_positions: Vec<Position>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            affected_positions,
        }
    }
}

/// Validate the geometry of a batch of placements against a board snapshot
///
/// The board is the *pre-move* state; occupancy is judged against it.
/// Alignment and gap checks run on whatever placements are in bounds, so a
/// single bad coordinate does not hide unrelated violations.
pub fn validate_placements(board: &Board, placements: &[Placement]) -> PlacementReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut affected = Vec::new();

    if placements.len() > RACK_SIZE {
        errors.push(format!(
            "at most {} tiles can be placed in one move",
            RACK_SIZE
        ));
        return PlacementReport::new(errors, warnings, affected);
    }

    let mut in_bounds: ArrayVec<Position, RACK_SIZE> = ArrayVec::new();

    for placement in placements {
        let pos = placement.position;
        if !pos.is_on_board() {
            errors.push(format!(
                "tile placed out of bounds at ({}, {})",
                pos.row, pos.col
            ));
            continue;
        }
        affected.push(pos);

        if in_bounds.contains(&pos) {
            errors.push(format!(
                "multiple tiles placed at position ({}, {})",
                pos.row, pos.col
            ));
        }
        in_bounds.push(pos);

        if !board.is_empty_at(pos) {
            errors.push(format!(
                "position ({}, {}) is already occupied",
                pos.row, pos.col
            ));
        }

        if placement.tile.is_blank {
            match placement.assigned_letter {
                Some(letter) if is_playable_letter(letter.to_ascii_uppercase()) => {}
                Some(letter) => errors.push(format!(
                    "blank tile at ({}, {}) has invalid assigned letter '{}'",
                    pos.row, pos.col, letter
                )),
                None => errors.push(format!(
                    "blank tile at ({}, {}) must be assigned a letter",
                    pos.row, pos.col
                )),
            }
        } else if placement.assigned_letter.is_some() {
            warnings.push(format!(
                "assigned letter on non-blank tile at ({}, {}) is ignored",
                pos.row, pos.col
            ));
        }
    }

    if in_bounds.len() > 1 {
        match shared_axis(&in_bounds) {
            Some(axis) => {
                if has_gaps(&in_bounds, axis) {
                    errors.push("tiles must be placed consecutively without gaps".to_string());
                }
            }
            None => {
                errors.push("tiles must be in the same row or column".to_string());
            }
        }
    }

    PlacementReport::new(errors, warnings, affected)
}

/// Axis shared by every position, if any
///
/// A single position satisfies either axis; callers resolve that case via
/// the word analyzer's probe instead.
pub fn shared_axis(positions: &[Position]) -> Option<Axis> {
    let first = positions.first()?;
    if positions.iter().all(|p| p.row == first.row) {
        Some(Axis::Horizontal)
    } else if positions.iter().all(|p| p.col == first.col) {
        Some(Axis::Vertical)
    } else {
        None
    }
}

/// Whether coordinates along `axis` are non-consecutive
fn has_gaps(positions: &[Position], axis: Axis) -> bool {
    let mut coords: ArrayVec<u8, RACK_SIZE> = positions
        .iter()
        .map(|p| match axis {
            Axis::Horizontal => p.col,
            Axis::Vertical => p.row,
        })
        .collect();
    coords.sort_unstable();
    coords.windows(2).any(|w| w[1] != w[0] + 1)
}
