pub mod config;
pub mod error;
pub mod hole;
pub mod player;
pub mod round;
pub mod scorecard;
pub mod scoring;

pub use config::ScoringConfig;
pub use error::ScoringError;
pub use hole::{HoleRecord, HoleResult, ScoreLabel, resolve};
pub use player::{PlayerName, PlayerScores};
pub use round::RoundRecord;
pub use scorecard::{Scorecard, format_relative};
pub use scoring::{Medal, PlayerMedals, hole_points, medals, normalize, totals, wolf_points};

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::hole::{HoleRecord, HoleResult};
    use crate::player::{PlayerName, PlayerScores};

    /// Owned player names from string slices.
    pub fn players(names: &[&str]) -> Vec<PlayerName> {
        names.iter().map(|n| n.to_string()).collect()
    }

    /// The usual three-player round: P1, P2, P3.
    pub fn three_players() -> Vec<PlayerName> {
        players(&["P1", "P2", "P3"])
    }

    /// Build a hole record from stored string tags, one per player in order.
    pub fn hole(players: &[PlayerName], tags: &[&str]) -> HoleRecord {
        assert_eq!(
            players.len(),
            tags.len(),
            "one tag per player is required"
        );
        players
            .iter()
            .cloned()
            .zip(tags.iter().map(|t| HoleResult::parse(t)))
            .collect()
    }

    /// Build a score mapping from `(player, score)` pairs.
    pub fn scores(pairs: &[(&str, i32)]) -> PlayerScores {
        pairs.iter().map(|&(p, s)| (p.to_string(), s)).collect()
    }
}
