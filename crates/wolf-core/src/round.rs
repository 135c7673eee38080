use serde::{Deserialize, Serialize};

use crate::config::ScoringConfig;
use crate::error::ScoringError;
use crate::hole::{HoleRecord, HoleResult, empty_hole, result_for};
use crate::player::{PlayerName, PlayerScores};
use crate::scorecard::Scorecard;

/// Stored snapshot of a round: the hole records plus the last derived scores.
///
/// Field names follow the camelCase layout of saved game history so older
/// saves decode unchanged. The cached `total_scores` and `wolf_scores` are
/// only a convenience for listings; [`RoundRecord::refresh_scores`] is the
/// single place they are derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRecord {
    /// Creation time, Unix epoch seconds with a `Z` suffix.
    pub date: String,
    pub players: Vec<PlayerName>,
    /// Number of holes in the round.
    #[serde(default)]
    pub holes: usize,
    /// One record per hole, in play order.
    pub scores: Vec<HoleRecord>,
    #[serde(default)]
    pub total_scores: PlayerScores,
    /// Normalized Wolf scores.
    #[serde(default)]
    pub wolf_scores: PlayerScores,
    #[serde(default)]
    pub in_progress: bool,
    /// 1-based hole last edited.
    #[serde(default = "first_hole")]
    pub current_hole: usize,
}

fn first_hole() -> usize {
    1
}

fn round_date() -> String {
    let since_epoch = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}Z", since_epoch.as_secs())
}

impl RoundRecord {
    /// Start a round with every hole unentered.
    pub fn new(players: Vec<PlayerName>, holes: usize) -> Result<Self, ScoringError> {
        if players.is_empty() {
            return Err(ScoringError::NoPlayers);
        }
        if holes == 0 {
            return Err(ScoringError::NoHoles);
        }
        let scores = (0..holes).map(|_| empty_hole(&players)).collect();
        let zeroes = crate::player::zeroed(&players);
        Ok(Self {
            date: round_date(),
            holes,
            scores,
            total_scores: zeroes.clone(),
            wolf_scores: zeroes,
            players,
            in_progress: true,
            current_hole: 1,
        })
    }

    fn check_hole(&self, hole: usize) -> Result<usize, ScoringError> {
        if hole == 0 || hole > self.holes {
            return Err(ScoringError::HoleOutOfRange {
                hole,
                holes: self.holes,
            });
        }
        Ok(hole - 1)
    }

    fn check_player(&self, player: &str) -> Result<(), ScoringError> {
        if self.players.iter().any(|p| p == player) {
            Ok(())
        } else {
            Err(ScoringError::UnknownPlayer(player.to_string()))
        }
    }

    /// A player's result on a 1-based hole.
    pub fn result(&self, hole: usize, player: &str) -> Result<HoleResult, ScoringError> {
        let index = self.check_hole(hole)?;
        self.check_player(player)?;
        Ok(result_for(&self.scores[index], player))
    }

    /// Record a player's result on a 1-based hole and move the cursor there.
    ///
    /// Cached scores are left alone; call [`RoundRecord::refresh_scores`]
    /// once the batch of edits is done.
    pub fn set_result(
        &mut self,
        hole: usize,
        player: &str,
        result: HoleResult,
    ) -> Result<(), ScoringError> {
        let index = self.check_hole(hole)?;
        self.check_player(player)?;
        self.scores[index].insert(player.to_string(), result);
        self.current_hole = hole;
        Ok(())
    }

    /// Recompute every derived score from the hole records and cache the
    /// strokes totals and normalized Wolf scores.
    pub fn refresh_scores(&mut self, config: &ScoringConfig) -> Result<Scorecard, ScoringError> {
        let card = Scorecard::compute_with(&self.players, &self.scores, config)?;
        self.total_scores = card.totals.clone();
        self.wolf_scores = card.wolf_scores.clone();
        Ok(card)
    }

    /// Whether every player has a result on every hole.
    pub fn is_complete(&self) -> bool {
        self.scores.iter().all(|hole| {
            self.players
                .iter()
                .all(|p| result_for(hole, p).is_entered())
        })
    }

    /// Number of holes where every player has a result.
    pub fn holes_played(&self) -> usize {
        self.scores
            .iter()
            .filter(|hole| {
                self.players
                    .iter()
                    .all(|p| result_for(hole, p).is_entered())
            })
            .count()
    }

    pub fn finish(&mut self) {
        self.in_progress = false;
    }

    pub fn to_json(&self) -> Result<String, ScoringError> {
        serde_json::to_string(self).map_err(|e| ScoringError::Decode(e.to_string()))
    }

    /// Decode a stored round, repair its shape and re-derive cached scores.
    pub fn from_json(json: &str, config: &ScoringConfig) -> Result<Self, ScoringError> {
        Self::decode(json)?.repaired(config)
    }

    /// Decode a stored round as-is, without repairing it or scoring it.
    ///
    /// Hosts check [`RoundRecord::declared_holes`] against their limits
    /// before calling [`RoundRecord::repaired`].
    pub fn decode(json: &str) -> Result<Self, ScoringError> {
        serde_json::from_str(json).map_err(|e| ScoringError::Decode(e.to_string()))
    }

    /// Hole count the round will have once repaired.
    pub fn declared_holes(&self) -> usize {
        self.holes.max(self.scores.len())
    }

    /// Fix up a decoded round and re-derive cached scores.
    ///
    /// Saves written without a hole count take it from the hole records;
    /// a short record list is padded with unentered holes.
    pub fn repaired(mut self, config: &ScoringConfig) -> Result<Self, ScoringError> {
        if self.players.is_empty() {
            return Err(ScoringError::NoPlayers);
        }

        self.holes = self.declared_holes();
        if self.holes == 0 {
            return Err(ScoringError::NoHoles);
        }
        let players = &self.players;
        self.scores.resize_with(self.holes, || empty_hole(players));
        self.current_hole = self.current_hole.clamp(1, self.holes);

        self.refresh_scores(config)?;
        Ok(self)
    }
}
