//! Computed figures of a calculation and their text report.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::consumption::Consumption;
use super::financial::{Amortization, Investment, Payback, Savings};
use crate::emissions::ScenarioEmissions;

/// Every figure derived from a [`super::types::CalculationInput`].
///
/// The default value (all zeros, every payback `None`) stands for a record
/// that has not been computed yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationOutput {
    /// Installation being replaced; zero when there is none.
    pub existing: Consumption,
    /// New installation at full power.
    pub new_without_control: Consumption,
    /// New installation under the control system.
    pub new_with_control: Consumption,
    pub savings: Savings,
    pub investment: Investment,
    pub amortization: Amortization,
    /// CO2 per scenario (kg/year).
    pub co2: ScenarioEmissions,
}

/// Formats a payback period, or `n/a` when it is undefined.
struct PaybackCell(Option<Payback>);

impl fmt::Display for PaybackCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(p) => write!(f, "{:.2} years ({:.1} months)", p.years, p.months),
            None => f.write_str("n/a"),
        }
    }
}

impl fmt::Display for CalculationOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Lighting ROI Report ---")?;
        for (label, c) in [
            ("Existing system", &self.existing),
            ("New system", &self.new_without_control),
            ("New system + control", &self.new_with_control),
        ] {
            writeln!(
                f,
                "{:<26}{:>12.1} kWh/year {:>12.2} /year",
                format!("{label}:"),
                c.annual_kwh,
                c.annual_cost
            )?;
        }
        writeln!(f, "Savings new vs existing:  {:.2} /year", self.savings.new_vs_existing)?;
        writeln!(f, "Savings from control:     {:.2} /year", self.savings.control)?;
        writeln!(f, "Investment new system:    {:.2}", self.investment.new_system)?;
        writeln!(f, "Investment control:       {:.2}", self.investment.control_system)?;
        writeln!(f, "Payback new system:       {}", PaybackCell(self.amortization.new_system))?;
        writeln!(f, "Payback control:          {}", PaybackCell(self.amortization.control_system))?;
        writeln!(f, "Payback combined:         {}", PaybackCell(self.amortization.combined))?;
        writeln!(f, "CO2 existing:             {:.1} kg/year", self.co2.existing)?;
        writeln!(f, "CO2 new system:           {:.1} kg/year", self.co2.new_without_control)?;
        writeln!(f, "CO2 new + control:        {:.1} kg/year", self.co2.new_with_control)?;
        write!(f, "CO2 savings:              {:.1} kg/year", self.co2.savings)
    }
}
