//! Multi-year cash-flow projection of a computed calculation.
//!
//! Not part of [`super::recompute`]; chart and export code builds it on demand.

use serde::{Deserialize, Serialize};

use super::output::CalculationOutput;
use super::types::CalculationInput;

/// Horizon used when none is given.
pub const DEFAULT_YEARS: u32 = 15;
/// Longest horizon the CLI and API accept.
pub const MAX_YEARS: u32 = 100;

/// Net position of each investment scope at the end of one year.
///
/// Net position is `annual_savings * year - investment`. Scopes that do not
/// exist for the input are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    pub year: u32,
    pub new_system: f64,
    pub control_system: Option<f64>,
    pub combined: Option<f64>,
}

/// First year in which each scope's net position is no longer negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakEven {
    pub new_system: Option<u32>,
    pub control_system: Option<u32>,
    pub combined: Option<u32>,
}

/// Year-by-year projection from year 0 (investment only) to the horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowProjection {
    pub rows: Vec<ProjectionRow>,
    pub break_even: BreakEven,
}

impl CashFlowProjection {
    /// Projects `output` over `years` years.
    ///
    /// # Arguments
    ///
    /// * `input` - Input the output was computed from (decides which scopes exist)
    /// * `output` - Computed figures
    /// * `years` - Horizon; the projection has `years + 1` rows
    pub fn new(input: &CalculationInput, output: &CalculationOutput, years: u32) -> Self {
        let control = input.control_enabled();
        let combined = control && input.has_existing_system;
        let savings = &output.savings;
        let investment = &output.investment;

        let rows: Vec<ProjectionRow> = (0..=years)
            .map(|year| {
                let y = f64::from(year);
                ProjectionRow {
                    year,
                    new_system: savings.new_vs_existing * y - investment.new_system,
                    control_system: control
                        .then(|| savings.control * y - investment.control_system),
                    combined: combined.then(|| savings.combined() * y - investment.combined()),
                }
            })
            .collect();

        let break_even = BreakEven {
            new_system: first_non_negative(&rows, savings.new_vs_existing, |r| {
                Some(r.new_system)
            }),
            control_system: first_non_negative(&rows, savings.control, |r| r.control_system),
            combined: first_non_negative(&rows, savings.combined(), |r| r.combined),
        };

        Self { rows, break_even }
    }
}

fn first_non_negative(
    rows: &[ProjectionRow],
    annual_savings: f64,
    position: impl Fn(&ProjectionRow) -> Option<f64>,
) -> Option<u32> {
    if annual_savings.is_nan() || annual_savings <= 0.0 {
        return None;
    }
    rows.iter()
        .find(|row| position(row).is_some_and(|p| p >= 0.0))
        .map(|row| row.year)
}
