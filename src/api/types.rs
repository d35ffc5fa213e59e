//! API response and query types.

use serde::{Deserialize, Serialize};

use crate::calc::Violation;
use crate::emissions::{MassUnit, Pollutant, PollutantEmissions};

/// Outcome of `POST /validate`.
#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    pub is_valid: bool,
    /// Failed checks in check order.
    pub violations: Vec<Violation>,
}

/// One row of the emission factor table.
#[derive(Debug, Serialize)]
pub struct EmissionFactorEntry {
    pub pollutant: Pollutant,
    /// Short label (e.g., `"CO2"`).
    pub symbol: &'static str,
    /// Factor as published, grams per kWh.
    pub grams_per_kwh: f64,
    /// Unit annual emissions are reported in.
    pub unit: MassUnit,
    /// Factor in report units per kWh.
    pub factor_per_kwh: f64,
}

impl From<Pollutant> for EmissionFactorEntry {
    fn from(p: Pollutant) -> Self {
        Self {
            pollutant: p,
            symbol: p.symbol(),
            grams_per_kwh: p.grams_per_kwh(),
            unit: p.unit(),
            factor_per_kwh: p.factor_per_kwh(),
        }
    }
}

/// Emission factor table with its reference year.
#[derive(Debug, Serialize)]
pub struct EmissionFactorsResponse {
    pub reference_year: u16,
    pub factors: Vec<EmissionFactorEntry>,
}

/// Pollutant breakdown of the loaded project.
#[derive(Debug, Serialize)]
pub struct EmissionsResponse {
    pub reference_year: u16,
    pub pollutants: Vec<PollutantEmissions>,
}

/// Query parameters for the projection endpoint.
#[derive(Debug, Deserialize)]
pub struct ProjectionQuery {
    /// Horizon in years (default 15).
    pub years: Option<u32>,
}

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
