use super::{apply_delta, check_delta, check_snapshot, normalize_username, PointsLedger, UserRecord};
use crate::error::EcoResult;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    records: Vec<UserRecord>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<UserRecord>) -> EcoResult<Self> {
        check_snapshot(&records)?;
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl PointsLedger for MemoryLedger {
    fn read_all(&self) -> EcoResult<Vec<UserRecord>> {
        Ok(self.records.clone())
    }

    fn upsert(&mut self, username: &str, delta: f64) -> EcoResult<Option<UserRecord>> {
        let Some(key) = normalize_username(username) else {
            debug!("Skipping update with blank username");
            return Ok(None);
        };
        check_delta(delta)?;

        let rec = apply_delta(&mut self.records, key, delta);
        debug!(
            "Ledger (memory): '{}' {:+.2} -> {:.2}",
            rec.username, delta, rec.cumulative_points
        );
        Ok(Some(rec))
    }
}
