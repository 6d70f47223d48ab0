use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use fairway_core::course::HoleNumber;
use fairway_core::ranking::{competition_ranks, tie_averaged_points};

/// Places paid by the fixed top-N rule.
pub const TOP_FIXED_PLACES: u32 = 8;
/// Points each player inside the fixed top-N receives.
pub const TOP_FIXED_POINTS: f64 = 2.0;

/// One player's 18-hole card, as two nine-hole totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokePlayer {
    pub id: String,
    pub gross_front: i32,
    pub gross_back: i32,
    pub hc18: i32,
}

/// A ranked stroke-play line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeResult {
    pub id: String,
    pub gross18: i32,
    pub net: i32,
    pub rank: u32,
    /// Zero until one of the `apply_*` rules runs.
    pub points: f64,
}

/// Sum a segment's per-hole gross scores.
pub fn segment_gross(card: &HashMap<HoleNumber, i32>) -> i32 {
    card.values().sum()
}

/// Net scores and competition ranks, in input order.
pub fn compute_stroke_results(players: &[StrokePlayer]) -> Vec<StrokeResult> {
    let nets: Vec<i32> = players
        .iter()
        .map(|p| p.gross_front + p.gross_back - p.hc18)
        .collect();
    let ranks = competition_ranks(&nets);
    tracing::debug!(players = players.len(), "stroke play ranked");

    players
        .iter()
        .zip(nets)
        .zip(ranks)
        .map(|((p, net), rank)| StrokeResult {
            id: p.id.clone(),
            gross18: p.gross_front + p.gross_back,
            net,
            rank,
            points: 0.0,
        })
        .collect()
}

/// Flat points for everyone ranked inside the top eight.
///
/// Ties at the boundary are not split: a four-way tie for 8th pays each
/// player in full.
pub fn apply_top8_fixed(results: Vec<StrokeResult>) -> Vec<StrokeResult> {
    results
        .into_iter()
        .map(|r| StrokeResult {
            points: if r.rank <= TOP_FIXED_PLACES {
                TOP_FIXED_POINTS
            } else {
                0.0
            },
            ..r
        })
        .collect()
}

/// Pay `points_table` by place, averaging across ties.
///
/// Points are left unrounded; totals are rounded where they are summed.
pub fn apply_full(results: Vec<StrokeResult>, points_table: &[f64]) -> Vec<StrokeResult> {
    let ranks: Vec<u32> = results.iter().map(|r| r.rank).collect();
    let points = tie_averaged_points(&ranks, points_table);

    results
        .into_iter()
        .zip(points)
        .map(|(r, points)| StrokeResult { points, ..r })
        .collect()
}
