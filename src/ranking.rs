use crate::ledger::UserRecord;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub username: String,
    pub cumulative_points: f64,
    pub previous_rank: usize,
    /// previous_rank - rank. Positive means the user climbed.
    pub rank_change: i64,
}

/// Ranks users by cumulative points, annotated with yesterday's position.
///
/// Both orderings sort by points descending and break ties by ascending
/// username, so equal totals always come out in the same order.
pub fn compute(records: &[UserRecord]) -> Vec<LeaderboardEntry> {
    let today = order_by(records, |r| r.cumulative_points);
    let yesterday = order_by(records, |r| r.previous_cumulative_points);

    let previous_ranks: HashMap<&str, usize> = yesterday
        .iter()
        .enumerate()
        .map(|(pos, rec)| (rec.username.as_str(), pos + 1))
        .collect();

    today
        .into_iter()
        .enumerate()
        .map(|(pos, rec)| {
            let rank = pos + 1;
            let previous_rank = previous_ranks
                .get(rec.username.as_str())
                .copied()
                .unwrap_or(rank);
            LeaderboardEntry {
                rank,
                username: rec.username.clone(),
                cumulative_points: rec.cumulative_points,
                previous_rank,
                rank_change: previous_rank as i64 - rank as i64,
            }
        })
        .collect()
}

/// Case-insensitive exact lookup. Never matches on a prefix or substring.
pub fn search<'a>(entries: &'a [LeaderboardEntry], query: &str) -> Option<&'a LeaderboardEntry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    entries
        .iter()
        .find(|e| e.username.to_lowercase() == needle)
}

fn order_by<F>(records: &[UserRecord], points: F) -> Vec<&UserRecord>
where
    F: Fn(&UserRecord) -> f64,
{
    let mut sorted: Vec<&UserRecord> = records.iter().collect();
    sorted.sort_by(|a, b| rank_order(points(a), &a.username, points(b), &b.username));
    sorted
}

fn rank_order(a_pts: f64, a_name: &str, b_pts: f64, b_name: &str) -> Ordering {
    b_pts.total_cmp(&a_pts).then_with(|| a_name.cmp(b_name))
}
