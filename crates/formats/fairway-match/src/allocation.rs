use std::collections::HashMap;

use fairway_core::course::{HoleInfo, HoleNumber};

/// Spread `diff` handicap strokes over `holes`, hardest first.
///
/// Holes are visited in ascending stroke index, one stroke each, wrapping
/// back to the hardest hole until every stroke is placed. Every listed
/// hole appears in the result; `diff <= 0` or an empty hole list places
/// nothing.
pub fn allocate_strokes(diff: i32, holes: &[HoleInfo]) -> HashMap<HoleNumber, u32> {
    let mut strokes: HashMap<HoleNumber, u32> = holes.iter().map(|h| (h.hole_number, 0)).collect();
    if diff <= 0 || holes.is_empty() {
        return strokes;
    }

    let mut ordered = holes.to_vec();
    ordered.sort_by_key(|h| h.stroke_index);

    let diff = diff as u32;
    let count = ordered.len() as u32;
    let (laps, extra) = (diff / count, diff % count);
    for (position, hole) in ordered.iter().enumerate() {
        let bonus = u32::from((position as u32) < extra);
        *strokes.entry(hole.hole_number).or_default() += laps + bonus;
    }
    strokes
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairway_core::test_helpers::{front_nine, nine_holes};

    #[test]
    fn five_strokes_go_to_hardest_five() {
        let strokes = allocate_strokes(5, &nine_holes());
        for n in 1..=5 {
            assert_eq!(strokes[&n], 1, "hole {n}");
        }
        for n in 6..=9 {
            assert_eq!(strokes[&n], 0, "hole {n}");
        }
    }

    #[test]
    fn tenth_stroke_wraps_to_hardest() {
        let strokes = allocate_strokes(10, &nine_holes());
        assert_eq!(strokes[&1], 2);
        assert_eq!(strokes[&2], 1);
        assert_eq!(strokes[&9], 1);
    }

    #[test]
    fn follows_stroke_index_not_hole_number() {
        // Front nine: hole 4 is SI 1, hole 7 is SI 2, hole 2 is SI 3.
        let strokes = allocate_strokes(3, &front_nine());
        assert_eq!(strokes[&4], 1);
        assert_eq!(strokes[&7], 1);
        assert_eq!(strokes[&2], 1);
        assert_eq!(strokes.values().sum::<u32>(), 3);
    }

    #[test]
    fn non_positive_diff_gives_nothing() {
        for diff in [0, -4] {
            let strokes = allocate_strokes(diff, &nine_holes());
            assert_eq!(strokes.len(), 9);
            assert!(strokes.values().all(|&s| s == 0));
        }
    }

    #[test]
    fn empty_hole_list() {
        assert!(allocate_strokes(7, &[]).is_empty());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn total_equals_diff_and_laps_are_even(diff in 0i32..60, n in 1u8..=18) {
                let holes: Vec<HoleInfo> = (1..=n).map(|i| HoleInfo::new(i, i)).collect();
                let strokes = allocate_strokes(diff, &holes);
                prop_assert_eq!(strokes.values().sum::<u32>(), diff as u32);

                let floor = diff as u32 / u32::from(n);
                prop_assert!(strokes[&1] >= floor);
                prop_assert!(strokes.values().all(|&s| s == floor || s == floor + 1));
                // Harder holes never get fewer strokes than easier ones.
                for i in 1..n {
                    prop_assert!(strokes[&i] >= strokes[&(i + 1)]);
                }
            }
        }
    }
}
