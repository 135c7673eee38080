use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::ScoringConfig;
use crate::error::ScoringError;
use crate::hole::{HoleRecord, result_for};
use crate::player::{PlayerName, PlayerScores, zeroed};
use crate::scoring::wolf::add_points;
use crate::scoring::{Medal, PlayerMedals, hole_points_with, medals, normalize, totals};

/// Per-hole view used by recaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleBreakdown {
    /// 1-based hole number.
    pub hole: usize,
    /// Strokes relative to par; `None` when not entered.
    pub values: HashMap<PlayerName, Option<i32>>,
    /// Wolf points this hole awarded, `None` when the hole was excluded.
    pub points: Option<PlayerScores>,
}

/// One row of the final leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerName,
    pub strokes: i32,
    pub wolf_score: i32,
    pub medal: Option<Medal>,
}

/// Every derived score for a round, recomputed from the full hole sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    /// Cumulative strokes relative to par.
    pub totals: PlayerScores,
    /// Raw cumulative Wolf points.
    pub wolf_points: PlayerScores,
    /// Wolf points shifted so the trailing player is at zero.
    pub wolf_scores: PlayerScores,
    /// Medals ranked on `wolf_scores`.
    pub medals: PlayerMedals,
    pub holes: Vec<HoleBreakdown>,
    /// Players by descending Wolf score; ties keep round order.
    pub standings: Vec<Standing>,
}

impl Scorecard {
    /// Run the full pipeline with the default point allocation.
    pub fn compute(players: &[PlayerName], holes: &[HoleRecord]) -> Result<Self, ScoringError> {
        Self::compute_with(players, holes, &ScoringConfig::default())
    }

    pub fn compute_with(
        players: &[PlayerName],
        holes: &[HoleRecord],
        config: &ScoringConfig,
    ) -> Result<Self, ScoringError> {
        let breakdown: Vec<HoleBreakdown> = holes
            .iter()
            .enumerate()
            .map(|(index, hole)| HoleBreakdown {
                hole: index + 1,
                values: players
                    .iter()
                    .map(|p| (p.clone(), result_for(hole, p).value()))
                    .collect(),
                points: hole_points_with(players, hole, config),
            })
            .collect();

        // Raw Wolf points are the per-hole awards above, summed.
        let mut wolf_points = zeroed(players);
        for points in breakdown.iter().filter_map(|b| b.points.as_ref()) {
            add_points(&mut wolf_points, points);
        }

        let totals = totals(players, holes);
        let wolf_scores = normalize(players, &wolf_points)?;
        let medals = medals(players, &wolf_scores)?;

        let mut standings: Vec<Standing> = players
            .iter()
            .map(|p| Standing {
                player: p.clone(),
                strokes: totals[p],
                wolf_score: wolf_scores[p],
                medal: medals[p],
            })
            .collect();
        standings.sort_by(|a, b| b.wolf_score.cmp(&a.wolf_score));

        Ok(Self {
            totals,
            wolf_points,
            wolf_scores,
            medals,
            holes: breakdown,
            standings,
        })
    }
}

/// Render strokes relative to par the way scorecards print them: `+2`, `0`, `-1`.
pub fn format_relative(strokes: i32) -> String {
    if strokes > 0 {
        format!("+{strokes}")
    } else {
        strokes.to_string()
    }
}
