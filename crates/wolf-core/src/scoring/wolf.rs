use crate::config::ScoringConfig;
use crate::hole::{HoleRecord, result_for};
use crate::player::{PlayerName, PlayerScores, zeroed};

/// Points a tie group shares when it occupies sorted positions
/// `first..=last` (0 = best) among `count` players.
///
/// Each position is worth `step * (count - 1 - position)`; a tie group gets
/// the average over its positions. With three players and a step of 2 this
/// yields 4/2/0, 3/3/0, 4/1/1 and 2/2/2.
fn shared_points(count: usize, first: usize, last: usize, step: i32) -> i32 {
    let span = i32::try_from(2 * (count - 1) - first - last).unwrap_or(i32::MAX);
    step.saturating_mul(span) / 2
}

/// Add one hole's awards into running totals, saturating at `i32::MAX`.
pub(crate) fn add_points(totals: &mut PlayerScores, awarded: &PlayerScores) {
    for (player, &points) in awarded {
        let total = totals.entry(player.clone()).or_insert(0);
        *total = total.saturating_add(points);
    }
}

/// Wolf points awarded on a single hole with the default allocation.
///
/// Returns `None` when the hole is excluded: some player has no value, or
/// every player is at par.
pub fn hole_points(players: &[PlayerName], hole: &HoleRecord) -> Option<PlayerScores> {
    hole_points_with(players, hole, &ScoringConfig::default())
}

/// Wolf points awarded on a single hole.
pub fn hole_points_with(
    players: &[PlayerName],
    hole: &HoleRecord,
    config: &ScoringConfig,
) -> Option<PlayerScores> {
    let mut ranked = Vec::with_capacity(players.len());
    for player in players {
        let value = result_for(hole, player).value()?;
        ranked.push((player, value));
    }

    // An all-par hole is indistinguishable from one nobody touched yet.
    if ranked.iter().all(|&(_, value)| value == 0) {
        return None;
    }

    // Fewer strokes ranks first; the sort is stable so ties keep round order.
    ranked.sort_by_key(|&(_, value)| value);

    let count = ranked.len();
    let mut points = zeroed(players);
    let mut first = 0;
    for group in ranked.chunk_by(|a, b| a.1 == b.1) {
        let last = first + group.len() - 1;
        let award = shared_points(count, first, last, config.rank_step);
        for &(player, _) in group {
            points.insert(player.clone(), award);
        }
        first = last + 1;
    }
    Some(points)
}

/// Cumulative Wolf points over every hole, with the default allocation.
pub fn wolf_points(players: &[PlayerName], holes: &[HoleRecord]) -> PlayerScores {
    wolf_points_with(players, holes, &ScoringConfig::default())
}

/// Cumulative Wolf points over every hole.
pub fn wolf_points_with(
    players: &[PlayerName],
    holes: &[HoleRecord],
    config: &ScoringConfig,
) -> PlayerScores {
    let mut totals = zeroed(players);
    for (index, hole) in holes.iter().enumerate() {
        let Some(points) = hole_points_with(players, hole, config) else {
            tracing::trace!(hole = index + 1, "Hole excluded from Wolf points");
            continue;
        };
        add_points(&mut totals, &points);
    }
    totals
}
