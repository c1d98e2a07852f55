//! Premium square layout - classification of each board cell
//!
//! The layout is a pure function of the coordinate. Off-axis coordinates are
//! folded into the upper-left quadrant first; because the quadrant's premium
//! set is closed under transposition, the full board is symmetric under
//! 90/180/270 degree rotation about the center.

use wordgrid_types::{Position, PremiumKind, BOARD_SIZE};

/// Premium kind for a board coordinate
///
/// Coordinates outside the board classify as `Normal`; the board itself
/// never asks for those.
pub fn premium_at(row: u8, col: u8) -> PremiumKind {
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return PremiumKind::Normal;
    }
    if row == 7 && col == 7 {
        return PremiumKind::Center;
    }

    // Fold into the upper-left quadrant; the premium sets below are
    // transpose-closed, which is what makes the layout rotation-symmetric.
    let r = if row > 7 { 14 - row } else { row };
    let c = if col > 7 { 14 - col } else { col };

    match (r, c) {
        (0, 0) | (0, 7) | (7, 0) => PremiumKind::TripleWord,
        (1, 1) | (2, 2) | (3, 3) | (4, 4) => PremiumKind::DoubleWord,
        (1, 5) | (5, 1) | (5, 5) => PremiumKind::TripleLetter,
        (0, 3) | (3, 0) | (2, 6) | (6, 2) | (6, 6) | (3, 7) | (7, 3) => PremiumKind::DoubleLetter,
        _ => PremiumKind::Normal,
    }
}

/// Premium kind at a position value
#[inline]
pub fn premium_at_position(pos: Position) -> PremiumKind {
    premium_at(pos.row, pos.col)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotate90(pos: Position) -> Position {
        Position::new(pos.col, 14 - pos.row)
    }

    #[test]
    fn layout_is_rotation_symmetric() {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let p = Position::new(row, col);
                let kind = premium_at_position(p);
                let r90 = premium_at_position(rotate90(p));
                let r180 = premium_at_position(rotate90(rotate90(p)));
                let r270 = premium_at_position(rotate90(rotate90(rotate90(p))));
                assert_eq!(kind, r90, "90 degree mismatch at ({}, {})", row, col);
                assert_eq!(kind, r180, "180 degree mismatch at ({}, {})", row, col);
                assert_eq!(kind, r270, "270 degree mismatch at ({}, {})", row, col);
            }
        }
    }

    #[test]
    fn layout_counts_are_exact() {
        let mut dl = 0;
        let mut tl = 0;
        let mut dw = 0;
        let mut tw = 0;
        let mut center = 0;
        let mut normal = 0;

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                match premium_at(row, col) {
                    PremiumKind::DoubleLetter => dl += 1,
                    PremiumKind::TripleLetter => tl += 1,
                    PremiumKind::DoubleWord => dw += 1,
                    PremiumKind::TripleWord => tw += 1,
                    PremiumKind::Center => center += 1,
                    PremiumKind::Normal => normal += 1,
                }
            }
        }

        assert_eq!(dl, 24);
        assert_eq!(tl, 12);
        assert_eq!(dw, 16);
        assert_eq!(tw, 8);
        assert_eq!(center, 1);
        assert_eq!(normal, 225 - 24 - 12 - 16 - 8 - 1);
    }

    #[test]
    fn layout_spot_checks() {
        // Corners and mid-edges are triple word.
        assert_eq!(premium_at(0, 0), PremiumKind::TripleWord);
        assert_eq!(premium_at(0, 7), PremiumKind::TripleWord);
        assert_eq!(premium_at(14, 14), PremiumKind::TripleWord);
        assert_eq!(premium_at(7, 14), PremiumKind::TripleWord);

        // Main diagonals carry double words.
        assert_eq!(premium_at(1, 1), PremiumKind::DoubleWord);
        assert_eq!(premium_at(13, 1), PremiumKind::DoubleWord);

        assert_eq!(premium_at(7, 7), PremiumKind::Center);
        assert_eq!(premium_at(5, 5), PremiumKind::TripleLetter);
        assert_eq!(premium_at(1, 9), PremiumKind::TripleLetter);
        assert_eq!(premium_at(0, 3), PremiumKind::DoubleLetter);
        assert_eq!(premium_at(7, 11), PremiumKind::DoubleLetter);
        assert_eq!(premium_at(8, 8), PremiumKind::DoubleLetter);
        assert_eq!(premium_at(0, 1), PremiumKind::Normal);
        assert_eq!(premium_at(7, 6), PremiumKind::Normal);
    }
}
