/// Failures reported by the scoring engine and round snapshots.
///
/// Malformed hole input is never an error; it degrades to an unentered
/// result. These variants cover caller inconsistencies only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    /// An operation that needs at least one player got none.
    NoPlayers,
    /// A round must have at least one hole.
    NoHoles,
    /// A score mapping has no entry for this player.
    MissingPlayer(String),
    /// A player that is not part of the round.
    UnknownPlayer(String),
    /// 1-based hole number outside `1..=holes`.
    HoleOutOfRange { hole: usize, holes: usize },
    /// A stored round could not be decoded.
    Decode(String),
}

impl std::fmt::Display for ScoringError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPlayers => write!(f, "round has no players"),
            Self::NoHoles => write!(f, "round must have at least one hole"),
            Self::MissingPlayer(p) => write!(f, "no score for player {p}"),
            Self::UnknownPlayer(p) => write!(f, "player {p} is not in this round"),
            Self::HoleOutOfRange { hole, holes } => {
                write!(f, "hole {hole} is out of range (1..={holes})")
            },
            Self::Decode(m) => write!(f, "failed to decode round: {m}"),
        }
    }
}

impl std::error::Error for ScoringError {}
