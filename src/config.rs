use crate::emission::{
    FactorTable, BUS_CO2_PER_KM, CAR_CO2_PER_KM, ELECTRICITY_CO2_PER_KWH,
};
use crate::error::{EcoError, EcoResult};
use crate::points::{
    PointsPolicy, PolicyKind, DEFAULT_BASELINE_KG, DEFAULT_PENALTY_RATE, DEFAULT_REWARD_RATE,
};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub emissions: EmissionParams,
    #[command(flatten)]
    pub points: PointsParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmissionParams {
    #[arg(long, default_value_t = CAR_CO2_PER_KM)]
    pub car_co2_per_km: f64,
    #[arg(long, default_value_t = BUS_CO2_PER_KM)]
    pub bus_co2_per_km: f64,
    #[arg(long, default_value_t = ELECTRICITY_CO2_PER_KWH)]
    pub electricity_co2_per_kwh: f64,
}

impl Default for EmissionParams {
    fn default() -> Self {
        Self {
            car_co2_per_km: CAR_CO2_PER_KM,
            bus_co2_per_km: BUS_CO2_PER_KM,
            electricity_co2_per_kwh: ELECTRICITY_CO2_PER_KWH,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PointsParams {
    #[arg(long, value_enum, default_value_t = PolicyKind::Asymmetric)]
    pub policy: PolicyKind,

    // Daily kg CO2 that scores zero
    #[arg(long, default_value_t = DEFAULT_BASELINE_KG)]
    pub baseline: f64,

    // === ASYMMETRIC ===
    #[arg(long, default_value_t = DEFAULT_REWARD_RATE)]
    pub reward_rate: f64,
    #[arg(long, default_value_t = DEFAULT_PENALTY_RATE)]
    pub penalty_rate: f64,

    // === SYMMETRIC ===
    #[arg(long, default_value_t = DEFAULT_REWARD_RATE)]
    pub sensitivity: f64,
}

impl Default for PointsParams {
    fn default() -> Self {
        Self {
            policy: PolicyKind::Asymmetric,
            baseline: DEFAULT_BASELINE_KG,
            reward_rate: DEFAULT_REWARD_RATE,
            penalty_rate: DEFAULT_PENALTY_RATE,
            sensitivity: DEFAULT_REWARD_RATE,
        }
    }
}

impl EmissionParams {
    pub fn factor_table(&self) -> EcoResult<FactorTable> {
        FactorTable::new(
            self.car_co2_per_km,
            self.bus_co2_per_km,
            self.electricity_co2_per_kwh,
        )
    }
}

impl PointsParams {
    pub fn policy(&self) -> EcoResult<PointsPolicy> {
        match self.policy {
            PolicyKind::Asymmetric => {
                PointsPolicy::asymmetric(self.baseline, self.reward_rate, self.penalty_rate)
            }
            PolicyKind::Symmetric => PointsPolicy::symmetric(self.baseline, self.sensitivity),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> EcoResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            EcoError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(serde_json::from_str(&content)?)
    }

    /// Copies onto `self` only the values the user typed on the command line,
    /// so file values survive clap's defaults.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(emissions.car_co2_per_km);
        update_if_present!(emissions.bus_co2_per_km);
        update_if_present!(emissions.electricity_co2_per_kwh);

        update_if_present!(points.policy);
        update_if_present!(points.baseline);
        update_if_present!(points.reward_rate);
        update_if_present!(points.penalty_rate);
        update_if_present!(points.sensitivity);
    }

    pub fn validate(&self) -> EcoResult<(FactorTable, PointsPolicy)> {
        Ok((self.emissions.factor_table()?, self.points.policy()?))
    }
}
