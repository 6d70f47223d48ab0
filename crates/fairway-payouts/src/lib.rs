use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Cash for the top three overall finishers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinishPayouts {
    pub winner: f64,
    pub second: f64,
    pub third: f64,
}

/// Cash per win, keyed by contest type (e.g. `LongDrive`, `CTP`).
///
/// Ordered so totals are summed in the same order on every call.
pub type SideContestPayouts = BTreeMap<String, f64>;

/// Wins per contest type for one player.
pub type SideContestWins = BTreeMap<String, u32>;

/// Fixed payout for an overall finishing rank.
///
/// Ties are not split here: every rank-1 entry gets the full winner amount.
pub fn compute_finish_payout(rank: u32, payouts: &FinishPayouts) -> f64 {
    match rank {
        1 => payouts.winner,
        2 => payouts.second,
        3 => payouts.third,
        _ => 0.0,
    }
}

/// Finish payout plus side-contest winnings.
///
/// Contests missing from `side_contest_payouts` pay nothing.
pub fn compute_total_cash(
    finish_payout: Option<f64>,
    side_contest_wins: &SideContestWins,
    side_contest_payouts: &SideContestPayouts,
) -> f64 {
    let side: f64 = side_contest_wins
        .iter()
        .map(|(contest, &count)| {
            f64::from(count) * side_contest_payouts.get(contest).copied().unwrap_or(0.0)
        })
        .sum();
    finish_payout.unwrap_or(0.0) + side
}
