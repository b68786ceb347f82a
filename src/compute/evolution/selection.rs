//! Ranked selection of weight vectors across a generation boundary.

use std::cmp::Reverse;

/// Grid indices ordered by score, best first.
///
/// The sort is stable: equal scores keep ascending index order.
pub fn rank(scores: &[usize]) -> Vec<usize> {
    let mut ranking: Vec<usize> = (0..scores.len()).collect();
    ranking.sort_by_key(|&i| Reverse(scores[i]));
    ranking
}

/// Expand a ranking into a slot list: rank `r` contributes
/// `slots_per_rank[r]` copies of its grid index.
///
/// Ranks beyond `slots_per_rank` (or beyond the ranking) contribute nothing.
pub fn slot_list(ranking: &[usize], slots_per_rank: &[usize]) -> Vec<usize> {
    ranking
        .iter()
        .zip(slots_per_rank)
        .flat_map(|(&grid, &copies)| std::iter::repeat_n(grid, copies))
        .collect()
}
