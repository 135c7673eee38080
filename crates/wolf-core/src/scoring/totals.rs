use crate::hole::{HoleRecord, result_for};
use crate::player::{PlayerName, PlayerScores};

/// Cumulative strokes relative to par for every player.
///
/// Holes where a player has no value are skipped for that player only.
/// A player with nothing entered totals 0. Free-form overrides can be any
/// `i32`, so the sum is taken in `i64` and clamped to the `i32` range.
pub fn totals(players: &[PlayerName], holes: &[HoleRecord]) -> PlayerScores {
    players
        .iter()
        .map(|player| {
            let total = holes
                .iter()
                .filter_map(|hole| result_for(hole, player).value())
                .map(i64::from)
                .sum::<i64>();
            (player.clone(), clamp_to_i32(total))
        })
        .collect()
}

fn clamp_to_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hole::{HoleResult, ScoreLabel};
    use crate::test_helpers::{hole, players};
    use proptest::prelude::*;

    #[test]
    fn sums_entered_holes() {
        let p = players(&["P1", "P2", "P3"]);
        let holes = vec![
            hole(&p, &["Birdie", "Par", "Bogey"]),
            hole(&p, &["Eagle", "Double", "Custom:3"]),
        ];
        let t = totals(&p, &holes);
        assert_eq!(t["P1"], -3);
        assert_eq!(t["P2"], 2);
        assert_eq!(t["P3"], 4);
    }

    #[test]
    fn skips_unentered_per_player() {
        let p = players(&["P1", "P2", "P3"]);
        let holes = vec![
            hole(&p, &["Bogey", "", "Birdie"]),
            hole(&p, &["Bogey", "Custom:oops", ""]),
        ];
        let t = totals(&p, &holes);
        assert_eq!(t["P1"], 2);
        assert_eq!(t["P2"], 0);
        assert_eq!(t["P3"], -1);
    }

    #[test]
    fn nothing_entered_is_zero() {
        let p = players(&["P1", "P2"]);
        let holes = vec![hole(&p, &["", ""]); 9];
        let t = totals(&p, &holes);
        assert_eq!(t["P1"], 0);
        assert_eq!(t["P2"], 0);
    }

    #[test]
    fn extreme_custom_values_saturate() {
        let p = players(&["P1", "P2", "P3"]);
        let holes = vec![
            hole(&p, &["Custom:2147483647", "Custom:-2147483648", "Par"]),
            hole(&p, &["Custom:1", "Custom:-1", "Par"]),
        ];
        let t = totals(&p, &holes);
        assert_eq!(t["P1"], i32::MAX);
        assert_eq!(t["P2"], i32::MIN);
        assert_eq!(t["P3"], 0);
    }

    #[test]
    fn empty_player_list_gives_empty_mapping() {
        assert!(totals(&[], &[]).is_empty());
    }

    proptest! {
        #[test]
        fn total_is_sum_of_entered_values(
            values in proptest::collection::vec(proptest::option::of(-5i32..10), 0..18),
        ) {
            let p = players(&["Solo"]);
            let holes: Vec<HoleRecord> = values
                .iter()
                .map(|v| {
                    let result = v.map_or(HoleResult::Unentered, HoleResult::Custom);
                    HoleRecord::from([("Solo".to_string(), result)])
                })
                .collect();
            let expected: i32 = values.iter().flatten().sum();
            prop_assert_eq!(totals(&p, &holes)["Solo"], expected);
        }

        #[test]
        fn total_clamps_the_wide_sum(
            values in proptest::collection::vec(any::<i32>(), 0..18),
        ) {
            let p = players(&["Solo"]);
            let holes: Vec<HoleRecord> = values
                .iter()
                .map(|&v| HoleRecord::from([("Solo".to_string(), HoleResult::Custom(v))]))
                .collect();
            let wide: i64 = values.iter().map(|&v| i64::from(v)).sum();
            let expected = wide.clamp(i64::from(i32::MIN), i64::from(i32::MAX));
            prop_assert_eq!(i64::from(totals(&p, &holes)["Solo"]), expected);
        }

        #[test]
        fn hole_order_does_not_matter(
            labels in proptest::collection::vec(0usize..5, 1..18),
        ) {
            let p = players(&["Solo"]);
            let mut holes: Vec<HoleRecord> = labels
                .iter()
                .map(|&i| HoleRecord::from([("Solo".to_string(), ScoreLabel::ALL[i].into())]))
                .collect();
            let forward = totals(&p, &holes);
            holes.reverse();
            prop_assert_eq!(forward, totals(&p, &holes));
        }
    }
}
