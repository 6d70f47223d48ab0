pub mod course;
pub mod error;
pub mod handicap;
pub mod ranking;
pub mod rounding;

pub use course::{HoleInfo, HoleNumber, Segment};
pub use error::{Result, ScoringError};
pub use handicap::{Adjustment, HandicapCategory, HandicapConfig, HandicapResult, compute_handicap};
pub use rounding::round_half_away;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use std::collections::HashMap;

    use crate::course::{HoleInfo, HoleNumber};
    use crate::handicap::{HandicapCategory, HandicapConfig};

    /// Nine holes numbered 1..=9 whose stroke index equals the hole number.
    pub fn nine_holes() -> Vec<HoleInfo> {
        (1..=9).map(|n| HoleInfo::new(n, n)).collect()
    }

    /// A realistic front nine: holes 1..=9 with stroke indexes out of hole order.
    pub fn front_nine() -> Vec<HoleInfo> {
        [7, 3, 9, 1, 5, 8, 2, 6, 4]
            .into_iter()
            .zip(1..=9)
            .map(|(si, n)| HoleInfo::new(n, si))
            .collect()
    }

    /// A realistic back nine: holes 10..=18, stroke indexes 1..=9 within the segment.
    pub fn back_nine() -> Vec<HoleInfo> {
        [4, 8, 1, 6, 2, 9, 5, 3, 7]
            .into_iter()
            .zip(10..=18)
            .map(|(si, n)| HoleInfo::new(n, si))
            .collect()
    }

    /// Gross map with the same score on every listed hole.
    pub fn flat_card(holes: &[HoleInfo], gross: i32) -> HashMap<HoleNumber, i32> {
        holes.iter().map(|h| (h.hole_number, gross)).collect()
    }

    /// Config with exact binary factors so expected values compare with `==`.
    pub fn sample_handicap_config() -> HandicapConfig {
        HandicapConfig {
            factor: 0.25,
            cap18: 28.0,
            par3_multiplier: 0.5,
            categories: vec![
                HandicapCategory::flat("standard", 0.0),
                HandicapCategory::flat("guest", -1.0),
                HandicapCategory::multiplier("junior", 0.5),
            ],
        }
    }
}
