use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use fairway_core::course::{HoleInfo, HoleNumber, Segment};

/// A player entered in the tournament.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: String,
    pub index: f64,
    /// Handicap category key; must exist in the tournament rules.
    pub category: String,
}

/// Two players meeting in a nine-hole match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub a: String,
    pub b: String,
}

/// One round of matches played over a single segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRound {
    pub segment: Segment,
    pub pairings: Vec<Pairing>,
}

/// Which stroke-play points rule, if any, the day uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrokePlayRule {
    #[default]
    None,
    Top8Fixed,
    Full,
}

/// A scramble team and its posted total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrambleEntry {
    pub id: String,
    pub players: Vec<String>,
    pub total: i32,
}

/// A player's hole-by-hole gross scores for each segment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentCards {
    pub front: HashMap<HoleNumber, i32>,
    pub back: HashMap<HoleNumber, i32>,
}

impl SegmentCards {
    pub fn segment(&self, segment: Segment) -> &HashMap<HoleNumber, i32> {
        match segment {
            Segment::Front => &self.front,
            Segment::Back => &self.back,
        }
    }
}

/// Everything needed to score one day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayCard {
    pub front_holes: Vec<HoleInfo>,
    pub back_holes: Vec<HoleInfo>,
    /// Gross scores keyed by player id.
    pub scores: HashMap<String, SegmentCards>,
    pub match_rounds: Vec<MatchRound>,
    pub stroke_play: StrokePlayRule,
    pub scramble: Vec<ScrambleEntry>,
}

impl DayCard {
    pub fn holes(&self, segment: Segment) -> &[HoleInfo] {
        match segment {
            Segment::Front => &self.front_holes,
            Segment::Back => &self.back_holes,
        }
    }

    /// A player's card for one segment; empty when nothing was posted.
    pub fn gross(&self, player: &str, segment: Segment) -> HashMap<HoleNumber, i32> {
        self.scores
            .get(player)
            .map(|cards| cards.segment(segment).clone())
            .unwrap_or_default()
    }
}
