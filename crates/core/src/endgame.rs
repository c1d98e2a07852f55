//! End-game scoring - leftover-tile penalty redistribution
//!
//! Each player is penalized by the face value of the tiles left on their
//! rack (blanks are worth nothing). The pooled penalties go to the players
//! who went out, split evenly with any remainder handed out one point at a
//! time in player order. When nobody went out, penalties still apply but
//! nothing is redistributed.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use wordgrid_types::Tile;

/// End-game adjustment configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndGameConfig {
    /// When off, end-of-game adjustments are all zero
    pub apply_penalties: bool,
}

impl Default for EndGameConfig {
    fn default() -> Self {
        Self {
            apply_penalties: true,
        }
    }
}

/// One player's end-of-game adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndGameScore {
    /// Index into the input slice
    pub player: usize,
    pub tiles_remaining: usize,
    /// Face value of the player's leftover tiles
    pub penalty: u32,
    /// Share of pooled penalties, for players who went out
    pub bonus_from_others: u32,
    /// `bonus_from_others - penalty`
    pub net_adjustment: i64,
}

/// Compute end-of-game adjustments from each player's remaining tiles
///
/// When at least one player went out, the adjustments sum to zero across
/// all players; otherwise each player simply loses their own penalty.
#[instrument(level = "debug", skip_all, fields(players = tiles_by_player.len()))]
pub fn calculate_end_game_scoring(
    tiles_by_player: &[Vec<Tile>],
    config: &EndGameConfig,
) -> Vec<EndGameScore> {
    if !config.apply_penalties {
        return tiles_by_player
            .iter()
            .enumerate()
            .map(|(player, tiles)| EndGameScore {
                player,
                tiles_remaining: tiles.len(),
                penalty: 0,
                bonus_from_others: 0,
                net_adjustment: 0,
            })
            .collect();
    }

    let penalties: Vec<u32> = tiles_by_player
        .iter()
        .map(|tiles| tiles.iter().map(Tile::base_points).sum())
        .collect();
    let total_penalties: u32 = penalties.iter().sum();

    let went_out: Vec<usize> = tiles_by_player
        .iter()
        .enumerate()
        .filter(|(_, tiles)| tiles.is_empty())
        .map(|(player, _)| player)
        .collect();

    let mut scores: Vec<EndGameScore> = tiles_by_player
        .iter()
        .enumerate()
        .map(|(player, tiles)| EndGameScore {
            player,
            tiles_remaining: tiles.len(),
            penalty: penalties[player],
            bonus_from_others: 0,
            net_adjustment: -i64::from(penalties[player]),
        })
        .collect();

    if !went_out.is_empty() {
        let count = went_out.len() as u32;
        let share = total_penalties / count;
        let remainder = total_penalties % count;
        for (rank, &player) in went_out.iter().enumerate() {
            let bonus = share + if (rank as u32) < remainder { 1 } else { 0 };
            scores[player].bonus_from_others = bonus;
            scores[player].net_adjustment = i64::from(bonus);
        }
        debug!(total_penalties, winners = count, "penalties redistributed");
    }

    scores
}
