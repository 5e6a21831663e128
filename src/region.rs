use serde::Serialize;

pub const STATE_NAME: &str = "New Jersey";
pub const STATE_TOTAL_EMISSIONS_MT: f64 = 80e6; // metric tons CO2 per year

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountyEmissions {
    pub county: &'static str,
    pub lat: f64,
    pub lon: f64,
    /// Million metric tons CO2
    pub emissions_mt: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionOverview {
    pub state: &'static str,
    pub total_emissions_mt: f64,
    pub counties: Vec<CountyEmissions>,
}

impl RegionOverview {
    pub fn total_emissions_million_mt(&self) -> f64 {
        self.total_emissions_mt / 1e6
    }

    pub fn county_total_million_mt(&self) -> f64 {
        self.counties.iter().map(|c| c.emissions_mt).sum()
    }

    /// Heaviest emitters first; ties fall back to county name.
    pub fn counties_by_emissions(&self) -> Vec<&CountyEmissions> {
        let mut sorted: Vec<&CountyEmissions> = self.counties.iter().collect();
        sorted.sort_by(|a, b| {
            b.emissions_mt
                .total_cmp(&a.emissions_mt)
                .then_with(|| a.county.cmp(b.county))
        });
        sorted
    }
}

// Simulated county indicators, not survey data.
const COUNTIES: [(&str, f64, f64, f64); 8] = [
    ("Bergen", 40.926, -74.077, 12.0),
    ("Essex", 40.735, -74.264, 15.0),
    ("Hudson", 40.728, -74.032, 18.0),
    ("Middlesex", 40.560, -74.350, 10.0),
    ("Monmouth", 40.300, -74.010, 8.0),
    ("Ocean", 39.900, -74.260, 7.0),
    ("Union", 40.652, -74.270, 9.0),
    ("Camden", 39.950, -75.100, 11.0),
];

pub fn state_overview() -> RegionOverview {
    RegionOverview {
        state: STATE_NAME,
        total_emissions_mt: STATE_TOTAL_EMISSIONS_MT,
        counties: COUNTIES
            .iter()
            .map(|&(county, lat, lon, emissions_mt)| CountyEmissions {
                county,
                lat,
                lon,
                emissions_mt,
            })
            .collect(),
    }
}
