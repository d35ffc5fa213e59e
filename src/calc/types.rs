//! Input record types: site parameters, lighting systems, and control subsystems.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of facility the lighting is installed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacilityType {
    /// Halls, warehouses, production floors.
    #[default]
    Industrial,
    /// Public street and road lighting.
    StreetLighting,
    /// Anything else.
    Custom,
}

impl fmt::Display for FacilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Industrial => "industrial",
            Self::StreetLighting => "street_lighting",
            Self::Custom => "custom",
        };
        f.write_str(name)
    }
}

/// A daily duration entered as whole hours plus minutes.
///
/// # Examples
///
/// ```
/// use lighting_roi::calc::types::DailyDuration;
///
/// let d = DailyDuration::new(4, 30);
/// assert_eq!(d.as_hours(), 4.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DailyDuration {
    pub hours: u32,
    pub minutes: u32,
}

impl DailyDuration {
    pub const fn new(hours: u32, minutes: u32) -> Self {
        Self { hours, minutes }
    }

    /// Total duration in fractional hours.
    pub fn as_hours(&self) -> f64 {
        f64::from(self.hours) + f64::from(self.minutes) / 60.0
    }
}

/// Operating parameters of a lighting installation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SystemInput {
    /// Power draw of a single fixture (W).
    pub power_w: f64,
    /// Number of installed fixtures.
    pub fixture_count: u32,
    /// Operating hours per day.
    pub hours_per_day: f64,
    /// Operating days per year.
    pub days_per_year: u32,
    /// Annual maintenance cost (currency/year).
    pub maintenance_cost: f64,
    /// Other annual running cost (currency/year).
    pub other_cost: f64,
}

impl SystemInput {
    /// Power draw of a single fixture in kW.
    pub fn power_kw(&self) -> f64 {
        self.power_w / 1000.0
    }

    /// Fixed annual costs that do not depend on consumption.
    pub fn running_cost(&self) -> f64 {
        self.maintenance_cost + self.other_cost
    }
}

/// One-time acquisition costs of the new lighting system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AcquisitionCost {
    /// Purchase price per fixture.
    pub fixture_price: f64,
    /// One-time installation cost.
    pub installation_cost: f64,
}

/// Presence detection: controlled fixtures dim while the area is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionSensorControl {
    pub enabled: bool,
    /// Number of fixtures wired to motion sensors.
    pub fixture_count: u32,
    /// Illumination level while occupied (% of full power).
    pub presence_level_pct: f64,
    /// Illumination level while unoccupied (% of full power).
    pub absence_level_pct: f64,
    /// Expected occupied time per day.
    pub presence: DailyDuration,
    /// Additional investment for the sensors.
    pub extra_cost: f64,
    /// Fade-in time in seconds. Display only.
    pub fade_in_s: u32,
    /// Fade-out time in seconds. Display only.
    pub fade_out_s: u32,
}

/// Daylight harvesting: controlled fixtures dim while daylight is available.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DaylightControl {
    pub enabled: bool,
    /// Number of fixtures wired to daylight sensors.
    pub fixture_count: u32,
    /// Illumination level while dimmed (% of full power).
    pub dimmed_level_pct: f64,
    /// Time per day with sufficient daylight.
    pub daylight: DailyDuration,
    /// Additional investment for the sensors.
    pub extra_cost: f64,
}

/// Calendar control: the whole installation is off on shutdown days.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarControl {
    pub enabled: bool,
    /// Days per year the site is shut down.
    pub shutdown_days: u32,
}

/// The control system base. None of the control subsystems apply unless it is enabled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControlSystem {
    pub enabled: bool,
    /// One-time base cost (controller, gateway, commissioning).
    pub base_cost: f64,
    /// Surcharge per fixture of the new system.
    pub per_fixture_cost: f64,
}

/// Complete set of inputs for one calculation.
///
/// Plain data; the calculators read it and never write to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculationInput {
    /// Electricity price (currency/kWh).
    pub electricity_price: f64,
    pub facility_type: FacilityType,
    /// Whether an installation is being replaced. When false, every
    /// existing-system figure is zero.
    pub has_existing_system: bool,
    pub existing: SystemInput,
    pub new_system: SystemInput,
    pub acquisition: AcquisitionCost,
    pub motion: MotionSensorControl,
    pub daylight: DaylightControl,
    pub calendar: CalendarControl,
    pub control: ControlSystem,
}

impl CalculationInput {
    /// Whether the control system (and thereby any control subsystem) is active.
    pub fn control_enabled(&self) -> bool {
        self.control.enabled
    }
}
