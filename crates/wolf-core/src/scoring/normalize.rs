use crate::error::ScoringError;
use crate::player::{PlayerName, PlayerScores, score_of};

/// Shift scores so the trailing player sits at exactly zero.
///
/// Pairwise differences are preserved, so normalizing twice is the same as
/// normalizing once. A spread wider than `i32::MAX` saturates. An empty
/// player list has no minimum and is reported as [`ScoringError::NoPlayers`].
pub fn normalize(
    players: &[PlayerName],
    scores: &PlayerScores,
) -> Result<PlayerScores, ScoringError> {
    let values = players
        .iter()
        .map(|p| score_of(scores, p).map(|score| (p, score)))
        .collect::<Result<Vec<_>, _>>()?;

    let min = values
        .iter()
        .map(|&(_, score)| score)
        .min()
        .ok_or(ScoringError::NoPlayers)?;

    Ok(values
        .into_iter()
        .map(|(p, score)| (p.clone(), score.saturating_sub(min)))
        .collect())
}
