use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use fairway_core::course::{HoleInfo, HoleNumber};

use crate::allocation::allocate_strokes;

/// Points for winning a match.
pub const MATCH_WIN_POINTS: u32 = 2;
/// Points each side takes from a halved match.
pub const MATCH_TIE_POINTS: u32 = 1;
/// Points for losing a match.
pub const MATCH_LOSS_POINTS: u32 = 0;

/// One player's side of a nine-hole pairing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchSide {
    pub hc9: i32,
    pub gross: HashMap<HoleNumber, i32>,
}

impl MatchSide {
    pub fn new(hc9: i32, gross: HashMap<HoleNumber, i32>) -> Self {
        Self { hc9, gross }
    }
}

/// Winner of a hole or of the whole match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    A,
    B,
    #[default]
    #[serde(rename = "T")]
    Tie,
}

impl MatchOutcome {
    fn from_nets(net_a: i32, net_b: i32) -> Self {
        match net_a.cmp(&net_b) {
            std::cmp::Ordering::Less => Self::A,
            std::cmp::Ordering::Greater => Self::B,
            std::cmp::Ordering::Equal => Self::Tie,
        }
    }

    /// Match points for (A, B) under the fixed 2-1-0 scale.
    pub fn points(self) -> (u32, u32) {
        match self {
            Self::A => (MATCH_WIN_POINTS, MATCH_LOSS_POINTS),
            Self::B => (MATCH_LOSS_POINTS, MATCH_WIN_POINTS),
            Self::Tie => (MATCH_TIE_POINTS, MATCH_TIE_POINTS),
        }
    }
}

/// Outcome of a single hole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchHoleResult {
    pub hole_number: HoleNumber,
    pub gross_a: i32,
    pub gross_b: i32,
    /// Handicap strokes received on this hole.
    pub strokes_a: u32,
    pub strokes_b: u32,
    pub net_a: i32,
    pub net_b: i32,
    pub result: MatchOutcome,
}

/// Hole-by-hole results plus the match verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub holes: Vec<MatchHoleResult>,
    pub holes_won_a: u32,
    pub holes_won_b: u32,
    pub points_a: u32,
    pub points_b: u32,
    pub outcome: MatchOutcome,
}

/// Score a handicap match between two players over `holes`.
///
/// The higher 9-hole handicap receives the difference in strokes, placed by
/// stroke index. Holes are scored in the order given. A hole missing from a
/// player's gross map counts as 0, which the caller must avoid by supplying
/// complete cards.
pub fn compute_match_play(a: &MatchSide, b: &MatchSide, holes: &[HoleInfo]) -> MatchResult {
    let diff = a.hc9 - b.hc9;
    let strokes_for_a = if diff > 0 {
        allocate_strokes(diff, holes)
    } else {
        HashMap::new()
    };
    let strokes_for_b = if diff < 0 {
        allocate_strokes(-diff, holes)
    } else {
        HashMap::new()
    };

    let mut holes_won_a = 0;
    let mut holes_won_b = 0;
    let results: Vec<MatchHoleResult> = holes
        .iter()
        .map(|hole| {
            let n = hole.hole_number;
            let gross_a = a.gross.get(&n).copied().unwrap_or(0);
            let gross_b = b.gross.get(&n).copied().unwrap_or(0);
            let strokes_a = strokes_for_a.get(&n).copied().unwrap_or(0);
            let strokes_b = strokes_for_b.get(&n).copied().unwrap_or(0);
            let net_a = gross_a - strokes_a as i32;
            let net_b = gross_b - strokes_b as i32;

            let result = MatchOutcome::from_nets(net_a, net_b);
            match result {
                MatchOutcome::A => holes_won_a += 1,
                MatchOutcome::B => holes_won_b += 1,
                MatchOutcome::Tie => {},
            }

            MatchHoleResult {
                hole_number: n,
                gross_a,
                gross_b,
                strokes_a,
                strokes_b,
                net_a,
                net_b,
                result,
            }
        })
        .collect();

    let outcome = match holes_won_a.cmp(&holes_won_b) {
        std::cmp::Ordering::Greater => MatchOutcome::A,
        std::cmp::Ordering::Less => MatchOutcome::B,
        std::cmp::Ordering::Equal => MatchOutcome::Tie,
    };
    let (points_a, points_b) = outcome.points();

    tracing::debug!(
        diff,
        holes_won_a,
        holes_won_b,
        ?outcome,
        "match scored"
    );

    MatchResult {
        holes: results,
        holes_won_a,
        holes_won_b,
        points_a,
        points_b,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairway_core::test_helpers::{flat_card, front_nine, nine_holes};

    #[test]
    fn equal_handicaps_lower_gross_wins() {
        let holes = nine_holes();
        let mut a = flat_card(&holes, 4);
        a.insert(3, 3);
        let b = flat_card(&holes, 4);

        let result = compute_match_play(&MatchSide::new(5, a), &MatchSide::new(5, b), &holes);
        assert_eq!(result.holes_won_a, 1);
        assert_eq!(result.holes_won_b, 0);
        assert_eq!(result.outcome, MatchOutcome::A);
        assert_eq!((result.points_a, result.points_b), (2, 0));
        assert!(result.holes.iter().all(|h| h.strokes_a == 0 && h.strokes_b == 0));
    }

    #[test]
    fn strokes_turn_a_loss_into_a_halve() {
        // B is better gross on the two hardest holes, but A gets two strokes there.
        let holes = nine_holes();
        let a = flat_card(&holes, 5);
        let mut b = flat_card(&holes, 5);
        b.insert(1, 4);
        b.insert(2, 4);

        let result = compute_match_play(&MatchSide::new(7, a), &MatchSide::new(5, b), &holes);
        assert_eq!(result.holes[0].strokes_a, 1);
        assert_eq!(result.holes[0].net_a, 4);
        assert_eq!(result.holes[2].strokes_a, 0);
        assert_eq!(result.outcome, MatchOutcome::Tie);
        assert_eq!((result.points_a, result.points_b), (1, 1));
    }

    #[test]
    fn b_receives_strokes_when_higher() {
        let holes = front_nine();
        let a = flat_card(&holes, 4);
        let b = flat_card(&holes, 5);

        // B gets 3 strokes on SI 1..=3 (holes 4, 7, 2) and halves those, loses the rest.
        let result = compute_match_play(&MatchSide::new(2, a), &MatchSide::new(5, b), &holes);
        let stroked: Vec<HoleNumber> = result
            .holes
            .iter()
            .filter(|h| h.strokes_b == 1)
            .map(|h| h.hole_number)
            .collect();
        assert_eq!(stroked, vec![2, 4, 7]);
        assert_eq!(result.holes_won_a, 6);
        assert_eq!(result.holes_won_b, 0);
        assert_eq!(result.outcome, MatchOutcome::A);
        assert!(result.holes.iter().all(|h| h.strokes_a == 0));
    }

    #[test]
    fn holes_keep_caller_order() {
        let holes = front_nine();
        let card = flat_card(&holes, 4);
        let result = compute_match_play(
            &MatchSide::new(0, card.clone()),
            &MatchSide::new(0, card),
            &holes,
        );
        let order: Vec<HoleNumber> = result.holes.iter().map(|h| h.hole_number).collect();
        assert_eq!(order, (1..=9).collect::<Vec<HoleNumber>>());
        assert_eq!(result.outcome, MatchOutcome::Tie);
    }

    #[test]
    fn missing_gross_counts_as_zero() {
        let holes = nine_holes();
        let mut a = flat_card(&holes, 4);
        a.remove(&9);
        let b = flat_card(&holes, 4);

        let result = compute_match_play(&MatchSide::new(0, a), &MatchSide::new(0, b), &holes);
        let last = &result.holes[8];
        assert_eq!(last.gross_a, 0);
        assert_eq!(last.result, MatchOutcome::A);
        assert_eq!(result.outcome, MatchOutcome::A);
    }

    #[test]
    fn outcome_wire_format() {
        assert_eq!(serde_json::to_string(&MatchOutcome::A).unwrap(), "\"A\"");
        assert_eq!(serde_json::to_string(&MatchOutcome::B).unwrap(), "\"B\"");
        assert_eq!(serde_json::to_string(&MatchOutcome::Tie).unwrap(), "\"T\"");
        let back: MatchOutcome = serde_json::from_str("\"T\"").unwrap();
        assert_eq!(back, MatchOutcome::Tie);
    }
}
