use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use fairway_core::course::Segment;
use fairway_core::error::Result;
use fairway_core::handicap::HandicapResult;
use fairway_core::rounding::round_half_away;
use fairway_match::{MatchResult, MatchSide, compute_match_play};
use fairway_scramble::{ScrambleTeam, ScrambleTeamResult, compute_scramble_results};
use fairway_stroke::{
    StrokePlayer, StrokeResult, apply_full, apply_top8_fixed, compute_stroke_results,
    segment_gross,
};

use crate::card::{DayCard, RosterEntry, StrokePlayRule};
use crate::config::TournamentRules;

/// A scored pairing, labelled with who played.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairingResult {
    pub segment: Segment,
    pub a: String,
    pub b: String,
    pub result: MatchResult,
}

/// Everything one day produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayReport {
    pub matches: Vec<PairingResult>,
    pub stroke: Vec<StrokeResult>,
    pub scramble: Vec<ScrambleTeamResult>,
    /// Unrounded day points per roster player.
    pub points: BTreeMap<String, f64>,
}

impl DayReport {
    /// Day points rounded to whole numbers, half away from zero.
    pub fn rounded_points(&self) -> BTreeMap<String, f64> {
        self.points
            .iter()
            .map(|(id, &p)| (id.clone(), round_half_away(p, 0)))
            .collect()
    }
}

/// Score one day's matches, stroke play and scramble for `roster`.
///
/// Pairings or scramble members that are not on the roster are skipped.
/// A roster entry with an unknown handicap category fails the whole day,
/// whichever formats the day plays.
pub fn score_day(
    roster: &[RosterEntry],
    card: &DayCard,
    rules: &TournamentRules,
) -> Result<DayReport> {
    let handicaps = roster
        .iter()
        .map(|p| rules.handicap.compute(p.index, &p.category))
        .collect::<Result<Vec<HandicapResult>>>()?;
    let by_id: HashMap<&str, &HandicapResult> = roster
        .iter()
        .map(|p| p.id.as_str())
        .zip(&handicaps)
        .collect();

    let mut report = DayReport {
        points: roster.iter().map(|p| (p.id.clone(), 0.0)).collect(),
        ..DayReport::default()
    };

    for round in &card.match_rounds {
        let holes = card.holes(round.segment);
        for pairing in &round.pairings {
            let (Some(hc_a), Some(hc_b)) = (
                by_id.get(pairing.a.as_str()),
                by_id.get(pairing.b.as_str()),
            ) else {
                tracing::warn!(
                    a = %pairing.a,
                    b = %pairing.b,
                    "pairing names a player not on the roster, skipped"
                );
                continue;
            };

            let side_a = MatchSide::new(hc_a.hc9_strokes(), card.gross(&pairing.a, round.segment));
            let side_b = MatchSide::new(hc_b.hc9_strokes(), card.gross(&pairing.b, round.segment));
            let result = compute_match_play(&side_a, &side_b, holes);

            *report.points.entry(pairing.a.clone()).or_default() += f64::from(result.points_a);
            *report.points.entry(pairing.b.clone()).or_default() += f64::from(result.points_b);
            report.matches.push(PairingResult {
                segment: round.segment,
                a: pairing.a.clone(),
                b: pairing.b.clone(),
                result,
            });
        }
    }

    if card.stroke_play != StrokePlayRule::None {
        let players: Vec<StrokePlayer> = roster
            .iter()
            .zip(&handicaps)
            .map(|(p, hc)| StrokePlayer {
                id: p.id.clone(),
                gross_front: segment_gross(&card.gross(&p.id, Segment::Front)),
                gross_back: segment_gross(&card.gross(&p.id, Segment::Back)),
                hc18: hc.hc18_strokes(),
            })
            .collect();

        let ranked = compute_stroke_results(&players);
        report.stroke = match card.stroke_play {
            StrokePlayRule::Top8Fixed => apply_top8_fixed(ranked),
            StrokePlayRule::Full => apply_full(ranked, &rules.stroke_play_points),
            StrokePlayRule::None => ranked,
        };
        for line in &report.stroke {
            *report.points.entry(line.id.clone()).or_default() += line.points;
        }
    }

    if !card.scramble.is_empty() {
        let teams: Vec<ScrambleTeam> = card
            .scramble
            .iter()
            .map(|t| ScrambleTeam {
                id: t.id.clone(),
                total: t.total,
            })
            .collect();
        report.scramble = compute_scramble_results(&teams, &rules.scramble_points);

        for (entry, result) in card.scramble.iter().zip(&report.scramble) {
            for member in &entry.players {
                match report.points.get_mut(member) {
                    Some(points) => *points += result.points,
                    None => {
                        tracing::warn!(
                            team = %entry.id,
                            player = %member,
                            "scramble member not on the roster, skipped"
                        );
                    },
                }
            }
        }
    }

    tracing::debug!(
        matches = report.matches.len(),
        stroke = report.stroke.len(),
        scramble = report.scramble.len(),
        "day scored"
    );
    Ok(report)
}
