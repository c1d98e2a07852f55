//! Word formation analyzer - every word a move creates
//!
//! Works against a temporary board that already has the move's placements
//! applied (see [`Board::with_placements`]). The main word runs along the
//! placement axis; cross words are perpendicular runs through each newly
//! placed tile that connect to at least one existing neighbor.

use arrayvec::ArrayVec;
use wordgrid_types::{Axis, Placement, Position, WordFormed, BOARD_SIZE};

use crate::board::Board;
use crate::placement::shared_axis;

/// A contiguous run of occupied cells along one axis
struct Run {
    positions: ArrayVec<Position, { BOARD_SIZE as usize }>,
    word: String,
}

impl Run {
    fn len(&self) -> usize {
        self.positions.len()
    }
}

/// Extract the main word and all cross words created by `placements`
///
/// `board` must be the post-placement temporary board. Placements with
/// inconsistent geometry (which the placement validator rejects) yield no
/// words. Word order: main word first, then cross words in placement order.
pub fn extract_words(board: &Board, placements: &[Placement]) -> Vec<WordFormed> {
    let new_positions: Vec<Position> = placements.iter().map(|p| p.position).collect();
    let Some(&reference) = new_positions.first() else {
        return Vec::new();
    };

    let axis = match new_positions.len() {
        1 => probe_axis(board, reference),
        _ => match shared_axis(&new_positions) {
            Some(axis) => axis,
            // Word extraction on invalid geometry is undefined.
            None => return Vec::new(),
        },
    };

    let mut words = Vec::new();

    let main_run = scan_run(board, reference, axis);
    let main_positions = if main_run.len() > 1 {
        let word = build_word(main_run, &new_positions, true);
        let positions = word.positions.clone();
        words.push(word);
        positions
    } else {
        Vec::new()
    };

    for &pos in &new_positions {
        let run = scan_run(board, pos, axis.perpendicular());
        if run.len() <= 1 {
            continue;
        }
        // Skip runs already reported: the main word in the single-tile
        // case, or an earlier cross scan over the same cells.
        if run.positions.as_slice() == main_positions.as_slice()
            || words
                .iter()
                .any(|w: &WordFormed| w.positions == run.positions.as_slice())
        {
            continue;
        }
        words.push(build_word(run, &new_positions, false));
    }

    words
}

/// Axis for a single-tile placement: the longer contiguous run wins,
/// horizontal on ties
fn probe_axis(board: &Board, pos: Position) -> Axis {
    let horizontal = run_length(board, pos, Axis::Horizontal);
    let vertical = run_length(board, pos, Axis::Vertical);
    if vertical > horizontal {
        Axis::Vertical
    } else {
        Axis::Horizontal
    }
}

fn run_length(board: &Board, pos: Position, axis: Axis) -> usize {
    scan_run(board, pos, axis).len()
}

/// Extend-to-boundary scan: walk backward along `axis` to the run's start,
/// then forward collecting letters until an empty cell or the board edge
fn scan_run(board: &Board, pos: Position, axis: Axis) -> Run {
    let (d_row, d_col) = axis.step();

    let mut start = pos;
    while let Some(prev) = start.offset(-d_row, -d_col) {
        if board.is_empty_at(prev) {
            break;
        }
        start = prev;
    }

    let mut positions = ArrayVec::new();
    let mut word = String::new();
    let mut cursor = Some(start);
    while let Some(current) = cursor {
        let Some(tile) = board.tile_at(current) else {
            break;
        };
        positions.push(current);
        word.push(tile.effective_letter().unwrap_or('?'));
        cursor = current.offset(d_row, d_col);
    }

    Run { positions, word }
}

fn build_word(run: Run, new_positions: &[Position], on_main_axis: bool) -> WordFormed {
    let positions: Vec<Position> = run.positions.into_iter().collect();
    let (new_tiles, existing_tiles): (Vec<Position>, Vec<Position>) = positions
        .iter()
        .copied()
        .partition(|pos| new_positions.contains(pos));

    let new_count = new_tiles.len();
    let is_main_word =
        on_main_axis && (new_count > 1 || (new_count == 1 && positions.len() > 1));

    WordFormed {
        word: run.word,
        positions,
        new_tiles,
        existing_tiles,
        is_main_word,
    }
}
