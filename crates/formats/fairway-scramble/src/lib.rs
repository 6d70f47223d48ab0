use serde::{Deserialize, Serialize};

use fairway_core::ranking::{competition_ranks, tie_averaged_points};
use fairway_core::rounding::round_half_away;

/// Points table used when a tournament does not configure one.
pub const DEFAULT_SCRAMBLE_POINTS: [f64; 4] = [3.0, 2.0, 1.0, 0.0];

/// A team's aggregate score for the round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrambleTeam {
    pub id: String,
    pub total: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrambleTeamResult {
    pub id: String,
    pub total: i32,
    pub rank: u32,
    pub points: f64,
}

/// Rank teams by total (lower is better) and split `points_table` across
/// ties, in input order.
///
/// Unlike stroke play, the averaged points are rounded to two decimals
/// here.
pub fn compute_scramble_results(
    teams: &[ScrambleTeam],
    points_table: &[f64],
) -> Vec<ScrambleTeamResult> {
    let totals: Vec<i32> = teams.iter().map(|t| t.total).collect();
    let ranks = competition_ranks(&totals);
    let points = tie_averaged_points(&ranks, points_table);

    tracing::debug!(teams = teams.len(), "scramble ranked");

    teams
        .iter()
        .zip(ranks)
        .zip(points)
        .map(|((team, rank), points)| ScrambleTeamResult {
            id: team.id.clone(),
            total: team.total,
            rank,
            points: round_half_away(points, 2),
        })
        .collect()
}

/// [`compute_scramble_results`] with the default 3-2-1-0 table.
pub fn compute_scramble_results_default(teams: &[ScrambleTeam]) -> Vec<ScrambleTeamResult> {
    compute_scramble_results(teams, &DEFAULT_SCRAMBLE_POINTS)
}
