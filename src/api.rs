use crate::config::Config;
use crate::emission::{EmissionBreakdown, EmissionCalculator, TransportMode};
use crate::error::EcoResult;
use crate::ledger::{PointsLedger, UserRecord};
use crate::points::PointsPolicy;
use crate::ranking::{self, LeaderboardEntry};
use serde::Serialize;
use tracing::{debug, info};

/// Calculator, scoring policy and an injected ledger wired together.
pub struct EcoSession<L: PointsLedger> {
    pub calculator: EmissionCalculator,
    pub policy: PointsPolicy,
    ledger: L,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyReport {
    pub mode: TransportMode,
    pub emissions: EmissionBreakdown,
    pub points: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoggedDay {
    pub report: DailyReport,
    /// None when no username was given and nothing was stored.
    pub record: Option<UserRecord>,
}

impl<L: PointsLedger> EcoSession<L> {
    pub fn new(calculator: EmissionCalculator, policy: PointsPolicy, ledger: L) -> Self {
        Self {
            calculator,
            policy,
            ledger,
        }
    }

    pub fn from_config(config: &Config, ledger: L) -> EcoResult<Self> {
        let (factors, policy) = config.validate()?;
        debug!("Session: factors {:?}, policy {:?}", factors, policy);
        Ok(Self::new(EmissionCalculator::new(factors), policy, ledger))
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    /// Service: Emissions and points for one day, without touching the ledger.
    pub fn estimate(
        &self,
        mode: TransportMode,
        distance_km: f64,
        electricity_kwh: f64,
    ) -> EcoResult<DailyReport> {
        let emissions = self.calculator.compute(mode, distance_km, electricity_kwh)?;
        let points = self.policy.compute_points(emissions.total);
        Ok(DailyReport {
            mode,
            emissions,
            points,
        })
    }

    /// Service: Score one day and credit it to `username`.
    pub fn log_day(
        &mut self,
        username: &str,
        mode: TransportMode,
        distance_km: f64,
        electricity_kwh: f64,
    ) -> EcoResult<LoggedDay> {
        let report = self.estimate(mode, distance_km, electricity_kwh)?;
        let record = self.ledger.upsert(username, report.points)?;

        if let Some(rec) = &record {
            info!(
                "Credited {:.0} points to '{}' (total {:.0})",
                report.points, rec.username, rec.cumulative_points
            );
        }

        Ok(LoggedDay { report, record })
    }

    /// Service: Current standings. An empty ledger gives an empty board.
    pub fn leaderboard(&self) -> EcoResult<Vec<LeaderboardEntry>> {
        let records = self.ledger.read_all()?;
        Ok(ranking::compute(&records))
    }

    pub fn lookup(&self, query: &str) -> EcoResult<Option<LeaderboardEntry>> {
        let board = self.leaderboard()?;
        Ok(ranking::search(&board, query).cloned())
    }
}
