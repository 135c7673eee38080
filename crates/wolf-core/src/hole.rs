use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::player::PlayerName;

/// Prefix used by stored games to tag a free-form stroke override.
const CUSTOM_PREFIX: &str = "Custom:";

/// Qualitative result a player can pick for a hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreLabel {
    Eagle,
    Birdie,
    Par,
    Bogey,
    Double,
}

impl ScoreLabel {
    /// Every label, best to worst.
    pub const ALL: [ScoreLabel; 5] = [
        ScoreLabel::Eagle,
        ScoreLabel::Birdie,
        ScoreLabel::Par,
        ScoreLabel::Bogey,
        ScoreLabel::Double,
    ];

    /// Strokes relative to par.
    pub const fn value(self) -> i32 {
        match self {
            Self::Eagle => -2,
            Self::Birdie => -1,
            Self::Par => 0,
            Self::Bogey => 1,
            Self::Double => 2,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eagle => "Eagle",
            Self::Birdie => "Birdie",
            Self::Par => "Par",
            Self::Bogey => "Bogey",
            Self::Double => "Double",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|label| label.as_str() == name)
    }
}

/// One player's result on one hole.
///
/// Serialized as the string tag stored games use: a label name,
/// `"Custom:<n>"`, or `""` when nothing was entered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HoleResult {
    Label(ScoreLabel),
    /// Free-form strokes relative to par.
    Custom(i32),
    #[default]
    Unentered,
}

impl HoleResult {
    /// Decode a stored string tag. Never fails: anything unrecognized,
    /// including a `Custom:` tag with a bad number, becomes `Unentered`.
    pub fn parse(tag: &str) -> Self {
        if tag.is_empty() {
            return Self::Unentered;
        }
        if let Some(label) = ScoreLabel::from_name(tag) {
            return Self::Label(label);
        }
        if let Some(raw) = tag.strip_prefix(CUSTOM_PREFIX) {
            return match raw.trim().parse::<i32>() {
                Ok(n) => Self::Custom(n),
                Err(e) => {
                    tracing::debug!(tag, error = %e, "Unparseable custom score, treating as unentered");
                    Self::Unentered
                },
            };
        }
        tracing::debug!(tag, "Unknown hole result label, treating as unentered");
        Self::Unentered
    }

    /// Strokes relative to par, or `None` when the result is excluded.
    pub fn value(self) -> Option<i32> {
        resolve(self)
    }

    pub fn is_entered(self) -> bool {
        !matches!(self, Self::Unentered)
    }
}

/// Resolve a hole result to strokes relative to par.
///
/// `Unentered` resolves to `None`, which is never the same as `Some(0)`:
/// an unplayed hole is excluded, not tied at par.
pub fn resolve(result: HoleResult) -> Option<i32> {
    match result {
        HoleResult::Label(label) => Some(label.value()),
        HoleResult::Custom(n) => Some(n),
        HoleResult::Unentered => None,
    }
}

impl From<ScoreLabel> for HoleResult {
    fn from(label: ScoreLabel) -> Self {
        Self::Label(label)
    }
}

impl From<String> for HoleResult {
    fn from(tag: String) -> Self {
        Self::parse(&tag)
    }
}

impl From<&str> for HoleResult {
    fn from(tag: &str) -> Self {
        Self::parse(tag)
    }
}

impl From<HoleResult> for String {
    fn from(result: HoleResult) -> Self {
        result.to_string()
    }
}

impl fmt::Display for HoleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label(label) => f.write_str(label.as_str()),
            Self::Custom(n) => write!(f, "{CUSTOM_PREFIX}{n}"),
            Self::Unentered => Ok(()),
        }
    }
}

/// Every player's result for a single hole. Players missing from the map
/// count as `Unentered`.
pub type HoleRecord = HashMap<PlayerName, HoleResult>;

/// Look up a player's result in a hole record.
pub fn result_for(hole: &HoleRecord, player: &str) -> HoleResult {
    hole.get(player).copied().unwrap_or_default()
}

/// A hole record with every player unentered.
pub fn empty_hole(players: &[PlayerName]) -> HoleRecord {
    players
        .iter()
        .map(|p| (p.clone(), HoleResult::Unentered))
        .collect()
}
