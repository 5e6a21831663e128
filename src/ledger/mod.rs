pub mod csv_store;
pub mod memory;

pub use self::csv_store::CsvLedger;
pub use self::memory::MemoryLedger;

use crate::error::{EcoError, EcoResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub cumulative_points: f64,
    // Stored as "yesterday" in the ledger file
    #[serde(rename = "yesterday_points")]
    pub previous_cumulative_points: f64,
}

impl UserRecord {
    pub fn new(username: &str, cumulative_points: f64) -> Self {
        Self {
            username: username.to_string(),
            cumulative_points,
            previous_cumulative_points: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UpsertOutcome {
    Applied(UserRecord),
    /// The record moved since it was observed. Carries its current state.
    Conflict(Option<UserRecord>),
    /// Blank username, nothing written.
    Skipped,
}

/// Keyed store of per-user point totals.
///
/// `upsert` on a blank username is a no-op returning `Ok(None)`. Matching is
/// exact on the trimmed name; case folding is left to the ranking layer.
pub trait PointsLedger {
    /// All records in insertion order. Absent storage reads as empty.
    fn read_all(&self) -> EcoResult<Vec<UserRecord>>;

    fn upsert(&mut self, username: &str, delta: f64) -> EcoResult<Option<UserRecord>>;

    /// Applies `delta` only if the stored total still equals `expected`
    /// (`None` = the user must not exist yet).
    ///
    /// The provided implementation is a plain read followed by `upsert`, so
    /// it only holds for a single writer. Backends with real transactions
    /// should override it.
    fn upsert_if_unchanged(
        &mut self,
        username: &str,
        expected: Option<f64>,
        delta: f64,
    ) -> EcoResult<UpsertOutcome> {
        let Some(key) = normalize_username(username) else {
            return Ok(UpsertOutcome::Skipped);
        };

        let current = self.read_all()?.into_iter().find(|r| r.username == key);
        let observed = current.as_ref().map(|r| r.cumulative_points);
        if observed != expected {
            return Ok(UpsertOutcome::Conflict(current));
        }

        Ok(match self.upsert(key, delta)? {
            Some(rec) => UpsertOutcome::Applied(rec),
            None => UpsertOutcome::Skipped,
        })
    }
}

pub fn normalize_username(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

pub(crate) fn check_delta(delta: f64) -> EcoResult<()> {
    if delta.is_finite() {
        Ok(())
    } else {
        Err(EcoError::InvalidArgument(format!(
            "points delta must be finite, got {}",
            delta
        )))
    }
}

/// Shared update rule: snapshot the old total as "previous", then add.
pub(crate) fn apply_delta(records: &mut Vec<UserRecord>, username: &str, delta: f64) -> UserRecord {
    match records.iter_mut().find(|r| r.username == username) {
        Some(rec) => {
            rec.previous_cumulative_points = rec.cumulative_points;
            rec.cumulative_points += delta;
            rec.clone()
        }
        None => {
            let rec = UserRecord::new(username, delta);
            records.push(rec.clone());
            rec
        }
    }
}

/// Rejects snapshots that break the one-record-per-user invariant.
pub(crate) fn check_snapshot(records: &[UserRecord]) -> EcoResult<()> {
    let mut seen = HashSet::new();
    for rec in records {
        if normalize_username(&rec.username) != Some(rec.username.as_str()) {
            return Err(EcoError::DataFormat(format!(
                "invalid username '{}'",
                rec.username
            )));
        }
        if !seen.insert(rec.username.as_str()) {
            return Err(EcoError::DataFormat(format!(
                "duplicate username '{}'",
                rec.username
            )));
        }
        if !rec.cumulative_points.is_finite() || !rec.previous_cumulative_points.is_finite() {
            return Err(EcoError::DataFormat(format!(
                "non-finite points for '{}'",
                rec.username
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_delta_snapshots_previous_total() {
        let mut records = vec![UserRecord::new("alice", 12.5)];
        let rec = apply_delta(&mut records, "alice", -3.0);
        assert_eq!(rec.cumulative_points, 9.5);
        assert_eq!(rec.previous_cumulative_points, 12.5);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_apply_delta_is_case_sensitive() {
        let mut records = vec![UserRecord::new("alice", 1.0)];
        apply_delta(&mut records, "Alice", 2.0);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_check_snapshot_rejects_duplicates() {
        let records = vec![UserRecord::new("bob", 1.0), UserRecord::new("bob", 2.0)];
        assert!(matches!(
            check_snapshot(&records),
            Err(EcoError::DataFormat(_))
        ));
    }

    #[test]
    fn test_normalize_username() {
        assert_eq!(normalize_username("  carol "), Some("carol"));
        assert_eq!(normalize_username(" \t "), None);
    }
}
