use crate::error::{EcoError, EcoResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

// Default factors (kg CO2)
pub const CAR_CO2_PER_KM: f64 = 0.25;
pub const BUS_CO2_PER_KM: f64 = 0.10; // per passenger
pub const ELECTRICITY_CO2_PER_KWH: f64 = 0.42; // regional grid mix

#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Car,
    Bus,
    Bicycle,
    Walk,
}

impl TransportMode {
    /// Parses a mode name, case-insensitive. Unknown names are rejected.
    pub fn parse(name: &str) -> EcoResult<Self> {
        Self::from_str(name.trim()).map_err(|_| {
            EcoError::InvalidArgument(format!("Unknown transport mode '{}'", name))
        })
    }

    pub fn is_motorized(&self) -> bool {
        matches!(self, Self::Car | Self::Bus)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorTable {
    pub car_per_km: f64,
    pub bus_per_km: f64,
    pub electricity_per_kwh: f64,
}

impl Default for FactorTable {
    fn default() -> Self {
        Self {
            car_per_km: CAR_CO2_PER_KM,
            bus_per_km: BUS_CO2_PER_KM,
            electricity_per_kwh: ELECTRICITY_CO2_PER_KWH,
        }
    }
}

impl FactorTable {
    pub fn new(car_per_km: f64, bus_per_km: f64, electricity_per_kwh: f64) -> EcoResult<Self> {
        for (name, value) in [("car_co2_per_km", car_per_km), ("bus_co2_per_km", bus_per_km)] {
            if !value.is_finite() || value < 0.0 {
                return Err(EcoError::Config(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        if !electricity_per_kwh.is_finite() || electricity_per_kwh <= 0.0 {
            return Err(EcoError::Config(format!(
                "electricity_co2_per_kwh must be positive, got {}",
                electricity_per_kwh
            )));
        }

        Ok(Self {
            car_per_km,
            bus_per_km,
            electricity_per_kwh,
        })
    }

    pub fn transport_factor(&self, mode: TransportMode) -> f64 {
        match mode {
            TransportMode::Car => self.car_per_km,
            TransportMode::Bus => self.bus_per_km,
            TransportMode::Bicycle | TransportMode::Walk => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EmissionBreakdown {
    pub transport: f64,
    pub electricity: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Default)]
pub struct EmissionCalculator {
    pub factors: FactorTable,
}

impl EmissionCalculator {
    pub fn new(factors: FactorTable) -> Self {
        Self { factors }
    }

    /// Daily emissions for one commute plus household electricity use.
    pub fn compute(
        &self,
        mode: TransportMode,
        distance_km: f64,
        electricity_kwh: f64,
    ) -> EcoResult<EmissionBreakdown> {
        let distance_km = require_non_negative("distance", distance_km)?;
        let electricity_kwh = require_non_negative("electricity usage", electricity_kwh)?;

        let transport = distance_km * self.factors.transport_factor(mode);
        let electricity = electricity_kwh * self.factors.electricity_per_kwh;

        Ok(EmissionBreakdown {
            transport,
            electricity,
            total: transport + electricity,
        })
    }
}

fn require_non_negative(name: &str, value: f64) -> EcoResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(EcoError::InvalidArgument(format!(
            "{} must be a non-negative number, got {}",
            name, value
        )))
    }
}
