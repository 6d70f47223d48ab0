//! Ranking helpers shared by the stroke-play and scramble formats.

use std::collections::BTreeMap;

/// Rank scores ascending (lower is better), returning one rank per input in
/// input order.
///
/// Ties share the rank of the first tied position and the next distinct
/// score takes its 1-based position, so nets `[70, 70, 72]` rank `[1, 1, 3]`.
pub fn competition_ranks<T: Ord>(scores: &[T]) -> Vec<u32> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[a].cmp(&scores[b]));

    let mut ranks = vec![0; scores.len()];
    let mut current = 1;
    for (position, &idx) in order.iter().enumerate() {
        if position > 0 && scores[idx] != scores[order[position - 1]] {
            current = position as u32 + 1;
        }
        ranks[idx] = current;
    }
    ranks
}

/// Split a points table across rank groups, averaging within ties.
///
/// Groups are walked in ascending rank order with a running place cursor.
/// A group of `k` members starting at place `p` shares the table entries
/// for places `p..p + k`, evenly. Places past the end of the table are
/// worth nothing, and a group lying wholly past the end gets 0.
pub fn tie_averaged_points(ranks: &[u32], table: &[f64]) -> Vec<f64> {
    let mut groups: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
    for (idx, &rank) in ranks.iter().enumerate() {
        groups.entry(rank).or_default().push(idx);
    }

    if ranks.len() > table.len() {
        tracing::debug!(
            places = ranks.len(),
            table_len = table.len(),
            "points table shorter than field; trailing places score 0"
        );
    }

    let mut points = vec![0.0; ranks.len()];
    let mut start = 0;
    for members in groups.values() {
        let end = (start + members.len()).min(table.len());
        let slice = table.get(start..end).unwrap_or(&[]);
        let average = if slice.is_empty() {
            0.0
        } else {
            slice.iter().sum::<f64>() / slice.len() as f64
        };
        for &idx in members {
            points[idx] = average;
        }
        start += members.len();
    }
    points
}
