//! Emission factors of grid electricity and the emissions of each lighting scenario.
//!
//! | Pollutant | g/kWh     | Reported as |
//! |-----------|-----------|-------------|
//! | CO2       | 489       | kg/year     |
//! | SO2       | 0.260     | kg/year     |
//! | NOx       | 0.449     | kg/year     |
//! | Dust      | 0.019     | g/year      |
//! | PM10      | 0.012     | g/year      |
//! | CO        | 0.159     | g/year      |
//! | N2O       | 0.022     | g/year      |
//! | CH4       | 0.028     | g/year      |
//! | NMVOC     | 0.027     | g/year      |
//! | Hg        | 0.0000088 | g/year      |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calc::CalculationOutput;
use crate::calc::consumption::Consumption;
use crate::calc::types::CalculationInput;

/// Reference year of the emission factors.
pub const REFERENCE_YEAR: u16 = 2017;

/// Pollutants emitted per kWh of grid electricity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pollutant {
    CarbonDioxide,
    SulfurDioxide,
    NitrogenOxides,
    /// Total particulate matter.
    Dust,
    Pm10,
    CarbonMonoxide,
    NitrousOxide,
    Methane,
    /// Non-methane volatile organic compounds.
    Nmvoc,
    Mercury,
}

impl Pollutant {
    pub const ALL: [Self; 10] = [
        Self::CarbonDioxide,
        Self::SulfurDioxide,
        Self::NitrogenOxides,
        Self::Dust,
        Self::Pm10,
        Self::CarbonMonoxide,
        Self::NitrousOxide,
        Self::Methane,
        Self::Nmvoc,
        Self::Mercury,
    ];

    /// Emission factor in grams per kWh.
    pub const fn grams_per_kwh(self) -> f64 {
        match self {
            Self::CarbonDioxide => 489.0,
            Self::SulfurDioxide => 0.260,
            Self::NitrogenOxides => 0.449,
            Self::Dust => 0.019,
            Self::Pm10 => 0.012,
            Self::CarbonMonoxide => 0.159,
            Self::NitrousOxide => 0.022,
            Self::Methane => 0.028,
            Self::Nmvoc => 0.027,
            Self::Mercury => 0.000_008_8,
        }
    }

    /// Chemical symbol or short label.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::CarbonDioxide => "CO2",
            Self::SulfurDioxide => "SO2",
            Self::NitrogenOxides => "NOx",
            Self::Dust => "Dust",
            Self::Pm10 => "PM10",
            Self::CarbonMonoxide => "CO",
            Self::NitrousOxide => "N2O",
            Self::Methane => "CH4",
            Self::Nmvoc => "NMVOC",
            Self::Mercury => "Hg",
        }
    }

    /// Unit the pollutant is reported in.
    pub const fn unit(self) -> MassUnit {
        match self {
            Self::CarbonDioxide | Self::SulfurDioxide | Self::NitrogenOxides => MassUnit::Kilograms,
            _ => MassUnit::Grams,
        }
    }

    /// Emission factor in the pollutant's report unit per kWh.
    pub fn factor_per_kwh(self) -> f64 {
        self.unit().convert_grams(self.grams_per_kwh())
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Mass unit of a reported annual emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MassUnit {
    Kilograms,
    Grams,
}

impl MassUnit {
    pub fn convert_grams(self, grams: f64) -> f64 {
        match self {
            Self::Kilograms => grams / 1000.0,
            Self::Grams => grams,
        }
    }

    /// Label for an annual quantity, e.g. `kg/year`.
    pub const fn per_year_label(self) -> &'static str {
        match self {
            Self::Kilograms => "kg/year",
            Self::Grams => "g/year",
        }
    }
}

/// Annual emissions of one pollutant across the three lighting scenarios.
///
/// Values are in the unit the factor was expressed in (kg for CO2).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioEmissions {
    pub existing: f64,
    pub new_without_control: f64,
    pub new_with_control: f64,
    /// `existing - new_with_control`; negative when the new system emits more.
    pub savings: f64,
}

impl ScenarioEmissions {
    /// Applies `factor_per_kwh` to each scenario's consumption.
    ///
    /// # Arguments
    ///
    /// * `input` - Calculation input (for the existing-system and control flags)
    /// * `existing` - Existing-system consumption
    /// * `without_control` - New system at full power
    /// * `with_control` - New system under control
    /// * `factor_per_kwh` - Mass emitted per kWh
    pub fn compute(
        input: &CalculationInput,
        existing: &Consumption,
        without_control: &Consumption,
        with_control: &Consumption,
        factor_per_kwh: f64,
    ) -> Self {
        let existing = if input.has_existing_system {
            existing.annual_kwh * factor_per_kwh
        } else {
            0.0
        };
        let new_without_control = without_control.annual_kwh * factor_per_kwh;
        let new_with_control = if input.control_enabled() {
            with_control.annual_kwh * factor_per_kwh
        } else {
            new_without_control
        };
        Self {
            existing,
            new_without_control,
            new_with_control,
            savings: existing - new_with_control,
        }
    }
}

/// CO2 emissions in kg/year.
pub fn co2(
    input: &CalculationInput,
    existing: &Consumption,
    without_control: &Consumption,
    with_control: &Consumption,
) -> ScenarioEmissions {
    ScenarioEmissions::compute(
        input,
        existing,
        without_control,
        with_control,
        Pollutant::CarbonDioxide.factor_per_kwh(),
    )
}

/// One row of the multi-pollutant report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PollutantEmissions {
    pub pollutant: Pollutant,
    pub unit: MassUnit,
    #[serde(flatten)]
    pub emissions: ScenarioEmissions,
}

/// Emissions of every pollutant in [`Pollutant::ALL`] order.
///
/// Reporting helper; [`crate::calc::recompute`] only produces the CO2 figures.
pub fn breakdown(input: &CalculationInput, output: &CalculationOutput) -> Vec<PollutantEmissions> {
    Pollutant::ALL
        .iter()
        .map(|&pollutant| PollutantEmissions {
            pollutant,
            unit: pollutant.unit(),
            emissions: ScenarioEmissions::compute(
                input,
                &output.existing,
                &output.new_without_control,
                &output.new_with_control,
                pollutant.factor_per_kwh(),
            ),
        })
        .collect()
}
