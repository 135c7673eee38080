use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ScoringError;
use crate::player::{PlayerName, PlayerScores, score_of};

/// Number of medals handed out per ranking.
pub const PODIUM_SIZE: usize = 3;

/// Placement medal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medal {
    First,
    Second,
    Third,
}

impl Medal {
    /// Medal for a 0-indexed dense rank, `None` past the podium.
    pub const fn from_slot(slot: usize) -> Option<Self> {
        match slot {
            0 => Some(Self::First),
            1 => Some(Self::Second),
            2 => Some(Self::Third),
            _ => None,
        }
    }

    pub const fn ordinal(self) -> &'static str {
        match self {
            Self::First => "1st",
            Self::Second => "2nd",
            Self::Third => "3rd",
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Self::First => "🥇",
            Self::Second => "🥈",
            Self::Third => "🥉",
        }
    }
}

/// Medal per player; `None` for players off the podium.
pub type PlayerMedals = HashMap<PlayerName, Option<Medal>>;

/// Assign medals from a higher-is-better score mapping.
///
/// Ranking is dense: tied players share a medal and the next lower score
/// takes the next medal, so `{A:10, B:10, C:5}` gives A and B gold and C
/// silver. Only the first [`PODIUM_SIZE`] players in sorted order can
/// receive a medal; everyone after them gets `None` even when tied with a
/// medalist. Ties keep the order of `players`.
pub fn medals(
    players: &[PlayerName],
    scores: &PlayerScores,
) -> Result<PlayerMedals, ScoringError> {
    let mut ranked = players
        .iter()
        .map(|p| score_of(scores, p).map(|score| (p, score)))
        .collect::<Result<Vec<_>, _>>()?;
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let mut result = PlayerMedals::with_capacity(ranked.len());
    let mut current_rank = 0;
    let mut previous: Option<i32> = None;
    for (position, (player, score)) in ranked.into_iter().enumerate() {
        if previous.is_none_or(|prev| score < prev) {
            current_rank += 1;
        }
        previous = Some(score);

        let medal = if position < PODIUM_SIZE {
            Medal::from_slot(current_rank - 1)
        } else {
            None
        };
        result.insert(player.clone(), medal);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{players, scores};

    #[test]
    fn distinct_scores() {
        let p = players(&["A", "B", "C"]);
        let m = medals(&p, &scores(&[("A", 3), ("B", 9), ("C", 5)])).unwrap();
        assert_eq!(m["B"], Some(Medal::First));
        assert_eq!(m["C"], Some(Medal::Second));
        assert_eq!(m["A"], Some(Medal::Third));
    }

    #[test]
    fn tie_for_first_then_second() {
        let p = players(&["A", "B", "C"]);
        let m = medals(&p, &scores(&[("A", 10), ("B", 10), ("C", 5)])).unwrap();
        assert_eq!(m["A"], Some(Medal::First));
        assert_eq!(m["B"], Some(Medal::First));
        assert_eq!(m["C"], Some(Medal::Second));
    }

    #[test]
    fn fourth_sorted_player_gets_nothing() {
        let p = players(&["A", "B", "C", "D"]);
        let m = medals(&p, &scores(&[("A", 10), ("B", 9), ("C", 9), ("D", 8)])).unwrap();
        assert_eq!(m["A"], Some(Medal::First));
        assert_eq!(m["B"], Some(Medal::Second));
        assert_eq!(m["C"], Some(Medal::Second));
        assert_eq!(m["D"], None);
    }

    #[test]
    fn four_way_tie_for_first() {
        let p = players(&["A", "B", "C", "D"]);
        let m = medals(&p, &scores(&[("A", 4), ("B", 4), ("C", 4), ("D", 4)])).unwrap();
        assert_eq!(m["A"], Some(Medal::First));
        assert_eq!(m["B"], Some(Medal::First));
        assert_eq!(m["C"], Some(Medal::First));
        assert_eq!(m["D"], None);
    }

    #[test]
    fn all_tied_three_players_share_gold() {
        let p = players(&["A", "B", "C"]);
        let m = medals(&p, &scores(&[("A", 0), ("B", 0), ("C", 0)])).unwrap();
        assert!(m.values().all(|&medal| medal == Some(Medal::First)));
    }

    #[test]
    fn five_distinct_players() {
        let p = players(&["A", "B", "C", "D", "E"]);
        let m = medals(
            &p,
            &scores(&[("A", 1), ("B", 2), ("C", 3), ("D", 4), ("E", 5)]),
        )
        .unwrap();
        assert_eq!(m["E"], Some(Medal::First));
        assert_eq!(m["D"], Some(Medal::Second));
        assert_eq!(m["C"], Some(Medal::Third));
        assert_eq!(m["B"], None);
        assert_eq!(m["A"], None);
    }

    #[test]
    fn empty_players_gives_empty_mapping() {
        assert!(medals(&[], &PlayerScores::new()).unwrap().is_empty());
    }

    #[test]
    fn missing_score_is_an_error() {
        let p = players(&["A", "B"]);
        assert_eq!(
            medals(&p, &scores(&[("B", 1)])),
            Err(ScoringError::MissingPlayer("A".to_string()))
        );
    }

    #[test]
    fn medal_rendering() {
        assert_eq!(Medal::First.ordinal(), "1st");
        assert_eq!(Medal::Third.emoji(), "🥉");
        assert_eq!(serde_json::to_string(&Medal::Second).unwrap(), "\"second\"");
        assert_eq!(Medal::from_slot(3), None);
    }
}
