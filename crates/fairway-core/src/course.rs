use serde::{Deserialize, Serialize};

/// Hole number within a segment (1-based).
pub type HoleNumber = u8;

/// Per-hole metadata needed for handicap stroke allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleInfo {
    pub hole_number: HoleNumber,
    /// Difficulty rank within the segment, 1 = hardest. Expected to be a
    /// permutation of `1..=N` but not checked.
    pub stroke_index: u8,
}

impl HoleInfo {
    pub const fn new(hole_number: HoleNumber, stroke_index: u8) -> Self {
        Self {
            hole_number,
            stroke_index,
        }
    }
}

/// The two nine-hole halves of a course.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    #[default]
    Front,
    Back,
}
