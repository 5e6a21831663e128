use crate::error::{EcoError, EcoResult};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

pub const DEFAULT_BASELINE_KG: f64 = 10.0;
pub const DEFAULT_REWARD_RATE: f64 = 10.0;
pub const DEFAULT_PENALTY_RATE: f64 = 5.0;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Display,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    #[default]
    Asymmetric,
    Symmetric,
}

/// Linear reward/penalty score around a daily emission baseline.
///
/// Scores are positive below the baseline and negative above it. The
/// asymmetric form uses a separate rate on each side of the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointsPolicy {
    Asymmetric {
        baseline: f64,
        reward_rate: f64,
        penalty_rate: f64,
    },
    Symmetric {
        baseline: f64,
        sensitivity: f64,
    },
}

impl Default for PointsPolicy {
    fn default() -> Self {
        Self::Asymmetric {
            baseline: DEFAULT_BASELINE_KG,
            reward_rate: DEFAULT_REWARD_RATE,
            penalty_rate: DEFAULT_PENALTY_RATE,
        }
    }
}

impl PointsPolicy {
    pub fn asymmetric(baseline: f64, reward_rate: f64, penalty_rate: f64) -> EcoResult<Self> {
        check_baseline(baseline)?;
        check_rate("reward_rate", reward_rate)?;
        check_rate("penalty_rate", penalty_rate)?;
        Ok(Self::Asymmetric {
            baseline,
            reward_rate,
            penalty_rate,
        })
    }

    pub fn symmetric(baseline: f64, sensitivity: f64) -> EcoResult<Self> {
        check_baseline(baseline)?;
        check_rate("sensitivity", sensitivity)?;
        Ok(Self::Symmetric {
            baseline,
            sensitivity,
        })
    }

    pub fn baseline(&self) -> f64 {
        match *self {
            Self::Asymmetric { baseline, .. } | Self::Symmetric { baseline, .. } => baseline,
        }
    }

    pub fn kind(&self) -> PolicyKind {
        match self {
            Self::Asymmetric { .. } => PolicyKind::Asymmetric,
            Self::Symmetric { .. } => PolicyKind::Symmetric,
        }
    }

    pub fn compute_points(&self, total_emission: f64) -> f64 {
        match *self {
            Self::Symmetric {
                baseline,
                sensitivity,
            } => compute_points(total_emission, baseline, sensitivity),
            Self::Asymmetric {
                baseline,
                reward_rate,
                penalty_rate,
            } => {
                let rate = if total_emission <= baseline {
                    reward_rate
                } else {
                    penalty_rate
                };
                compute_points(total_emission, baseline, rate)
            }
        }
    }
}

pub fn compute_points(total_emission: f64, baseline: f64, sensitivity: f64) -> f64 {
    (baseline - total_emission) * sensitivity
}

fn check_baseline(baseline: f64) -> EcoResult<()> {
    if baseline.is_finite() {
        Ok(())
    } else {
        Err(EcoError::Config(format!(
            "baseline must be a finite number, got {}",
            baseline
        )))
    }
}

fn check_rate(name: &str, rate: f64) -> EcoResult<()> {
    if rate.is_finite() && rate >= 0.0 {
        Ok(())
    } else {
        Err(EcoError::Config(format!(
            "{} must be a non-negative number, got {}",
            name, rate
        )))
    }
}
