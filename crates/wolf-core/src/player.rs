use std::collections::HashMap;

use crate::error::ScoringError;

/// Display name identifying a player for the whole round.
pub type PlayerName = String;

/// Numeric score per player (strokes totals, Wolf points, ...).
pub type PlayerScores = HashMap<PlayerName, i32>;

/// Every player mapped to zero.
pub fn zeroed(players: &[PlayerName]) -> PlayerScores {
    players.iter().map(|p| (p.clone(), 0)).collect()
}

/// Look up a player's score, reporting the player when the mapping has no entry.
pub fn score_of(scores: &PlayerScores, player: &str) -> Result<i32, ScoringError> {
    scores
        .get(player)
        .copied()
        .ok_or_else(|| ScoringError::MissingPlayer(player.to_string()))
}
