use serde::{Deserialize, Serialize};

/// Largest accepted `rank_step`. Keeps per-hole awards and their running
/// totals far from `i32` overflow.
pub const MAX_RANK_STEP: i32 = 100;

/// Data-driven configuration for Wolf points allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Points between two adjacent untied finishing positions on a hole.
    /// With three players the default of 2 gives the 4-2-0 table.
    pub rank_step: i32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self { rank_step: 2 }
    }
}

impl ScoringConfig {
    /// Load config from environment or TOML file, falling back to defaults.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("WOLF_SCORING_CONFIG")
            && let Ok(contents) = std::fs::read_to_string(&path)
        {
            return Self::from_toml(&contents);
        }
        if let Ok(contents) = std::fs::read_to_string("config/scoring.toml") {
            return Self::from_toml(&contents);
        }
        Self::default()
    }

    /// Parse a TOML document, falling back to defaults on error.
    pub fn from_toml(contents: &str) -> Self {
        match toml::from_str::<Self>(contents) {
            Ok(config) => config.validated(),
            Err(e) => {
                tracing::warn!("Failed to parse scoring config: {e}, using defaults");
                Self::default()
            },
        }
    }

    /// Replace values that would break the per-hole point invariants.
    pub fn validated(mut self) -> Self {
        if self.rank_step <= 0 {
            tracing::warn!(
                rank_step = self.rank_step,
                "rank_step must be > 0, using default"
            );
            self.rank_step = Self::default().rank_step;
        } else if self.rank_step > MAX_RANK_STEP {
            tracing::warn!(
                rank_step = self.rank_step,
                max = MAX_RANK_STEP,
                "rank_step too large, clamping"
            );
            self.rank_step = MAX_RANK_STEP;
        } else if self.rank_step % 2 != 0 {
            tracing::warn!(
                rank_step = self.rank_step,
                "Odd rank_step: shared points for tied players are rounded down"
            );
        }
        self
    }
}
