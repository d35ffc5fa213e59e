//! TOML-based project files and preset definitions.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calc::types::{
    AcquisitionCost, CalculationInput, CalendarControl, ControlSystem, DailyDuration,
    DaylightControl, FacilityType, MotionSensorControl, SystemInput,
};
use crate::calc::{CalculationRecord, ProjectMeta, Validation};

/// Top-level project file parsed from TOML.
///
/// Every section is optional. Load from TOML with
/// [`ProjectConfig::from_toml_file`] or start from one of the
/// [`ProjectConfig::PRESETS`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Descriptive project data.
    #[serde(default)]
    pub project: ProjectMeta,
    /// Site-wide parameters.
    #[serde(default)]
    pub site: SiteConfig,
    /// Installation being replaced.
    #[serde(default)]
    pub existing: SystemInput,
    /// New installation.
    #[serde(default)]
    pub new_system: SystemInput,
    /// Purchase and installation of the new installation.
    #[serde(default)]
    pub acquisition: AcquisitionCost,
    /// Motion-sensor control.
    #[serde(default)]
    pub motion: MotionSensorControl,
    /// Daylight control.
    #[serde(default)]
    pub daylight: DaylightControl,
    /// Calendar shutdowns.
    #[serde(default)]
    pub calendar: CalendarControl,
    /// Control system base.
    #[serde(default)]
    pub control: ControlSystem,
}

/// Site-wide parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Electricity price per kWh.
    pub electricity_price: f64,
    /// Kind of facility.
    pub facility_type: FacilityType,
    /// Whether an installation is being replaced.
    pub has_existing_system: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            electricity_price: 0.30,
            facility_type: FacilityType::Industrial,
            has_existing_system: false,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"site.electricity_price"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ProjectConfig {
    /// Available preset names.
    pub const PRESETS: &[&str] = &[
        "office_retrofit",
        "warehouse_motion",
        "street_lighting",
        "new_build",
    ];

    /// Office floor: T8 fluorescent to LED panels with the full control package.
    pub fn office_retrofit() -> Self {
        Self {
            project: ProjectMeta {
                name: "Office retrofit".to_string(),
                ..ProjectMeta::default()
            },
            site: SiteConfig {
                electricity_price: 0.30,
                facility_type: FacilityType::Custom,
                has_existing_system: true,
            },
            existing: SystemInput {
                power_w: 36.0,
                fixture_count: 40,
                hours_per_day: 10.0,
                days_per_year: 250,
                maintenance_cost: 120.0,
                other_cost: 0.0,
            },
            new_system: SystemInput {
                power_w: 18.0,
                fixture_count: 40,
                hours_per_day: 10.0,
                days_per_year: 250,
                maintenance_cost: 20.0,
                other_cost: 0.0,
            },
            acquisition: AcquisitionCost {
                fixture_price: 45.0,
                installation_cost: 800.0,
            },
            motion: MotionSensorControl {
                enabled: true,
                fixture_count: 20,
                presence_level_pct: 100.0,
                absence_level_pct: 20.0,
                presence: DailyDuration::new(5, 0),
                extra_cost: 300.0,
                fade_in_s: 2,
                fade_out_s: 30,
            },
            daylight: DaylightControl {
                enabled: true,
                fixture_count: 15,
                dimmed_level_pct: 40.0,
                daylight: DailyDuration::new(4, 30),
                extra_cost: 250.0,
            },
            calendar: CalendarControl {
                enabled: true,
                shutdown_days: 10,
            },
            control: ControlSystem {
                enabled: true,
                base_cost: 400.0,
                per_fixture_cost: 8.0,
            },
        }
    }

    /// High-bay warehouse: metal halide to LED high-bays, motion sensors only.
    pub fn warehouse_motion() -> Self {
        Self {
            project: ProjectMeta {
                name: "Warehouse high-bay".to_string(),
                ..ProjectMeta::default()
            },
            site: SiteConfig {
                electricity_price: 0.25,
                facility_type: FacilityType::Industrial,
                has_existing_system: true,
            },
            existing: SystemInput {
                power_w: 250.0,
                fixture_count: 30,
                hours_per_day: 16.0,
                days_per_year: 300,
                maintenance_cost: 600.0,
                other_cost: 0.0,
            },
            new_system: SystemInput {
                power_w: 120.0,
                fixture_count: 30,
                hours_per_day: 16.0,
                days_per_year: 300,
                maintenance_cost: 100.0,
                other_cost: 0.0,
            },
            acquisition: AcquisitionCost {
                fixture_price: 280.0,
                installation_cost: 2500.0,
            },
            motion: MotionSensorControl {
                enabled: true,
                fixture_count: 30,
                presence_level_pct: 100.0,
                absence_level_pct: 10.0,
                presence: DailyDuration::new(6, 0),
                extra_cost: 900.0,
                ..MotionSensorControl::default()
            },
            control: ControlSystem {
                enabled: true,
                base_cost: 600.0,
                per_fixture_cost: 15.0,
            },
            ..Self::default()
        }
    }

    /// Street lighting: sodium to LED luminaires, pedestrian-sensing dimming.
    pub fn street_lighting() -> Self {
        Self {
            project: ProjectMeta {
                name: "Street lighting".to_string(),
                ..ProjectMeta::default()
            },
            site: SiteConfig {
                electricity_price: 0.28,
                facility_type: FacilityType::StreetLighting,
                has_existing_system: true,
            },
            existing: SystemInput {
                power_w: 70.0,
                fixture_count: 120,
                hours_per_day: 11.5,
                days_per_year: 365,
                maintenance_cost: 1800.0,
                other_cost: 0.0,
            },
            new_system: SystemInput {
                power_w: 35.0,
                fixture_count: 120,
                hours_per_day: 11.5,
                days_per_year: 365,
                maintenance_cost: 400.0,
                other_cost: 0.0,
            },
            acquisition: AcquisitionCost {
                fixture_price: 320.0,
                installation_cost: 6000.0,
            },
            motion: MotionSensorControl {
                enabled: true,
                fixture_count: 40,
                presence_level_pct: 100.0,
                absence_level_pct: 30.0,
                presence: DailyDuration::new(3, 0),
                extra_cost: 2400.0,
                ..MotionSensorControl::default()
            },
            control: ControlSystem {
                enabled: true,
                base_cost: 1500.0,
                per_fixture_cost: 25.0,
            },
            ..Self::default()
        }
    }

    /// New building without an installation to replace.
    pub fn new_build() -> Self {
        Self {
            project: ProjectMeta {
                name: "New build".to_string(),
                ..ProjectMeta::default()
            },
            site: SiteConfig {
                electricity_price: 0.30,
                facility_type: FacilityType::Custom,
                has_existing_system: false,
            },
            new_system: SystemInput {
                power_w: 25.0,
                fixture_count: 60,
                hours_per_day: 12.0,
                days_per_year: 260,
                maintenance_cost: 30.0,
                other_cost: 0.0,
            },
            acquisition: AcquisitionCost {
                fixture_price: 60.0,
                installation_cost: 1500.0,
            },
            motion: MotionSensorControl {
                enabled: true,
                fixture_count: 24,
                presence_level_pct: 100.0,
                absence_level_pct: 15.0,
                presence: DailyDuration::new(6, 30),
                extra_cost: 400.0,
                ..MotionSensorControl::default()
            },
            daylight: DaylightControl {
                enabled: true,
                fixture_count: 24,
                dimmed_level_pct: 30.0,
                daylight: DailyDuration::new(5, 0),
                extra_cost: 350.0,
            },
            control: ControlSystem {
                enabled: true,
                base_cost: 500.0,
                per_fixture_cost: 10.0,
            },
            ..Self::default()
        }
    }

    /// Loads a project from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "office_retrofit" => Ok(Self::office_retrofit()),
            "warehouse_motion" => Ok(Self::warehouse_motion()),
            "street_lighting" => Ok(Self::street_lighting()),
            "new_build" => Ok(Self::new_build()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a project from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "project".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a project from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// The calculation input described by this file.
    pub fn input(&self) -> CalculationInput {
        CalculationInput {
            electricity_price: self.site.electricity_price,
            facility_type: self.site.facility_type,
            has_existing_system: self.site.has_existing_system,
            existing: self.existing.clone(),
            new_system: self.new_system.clone(),
            acquisition: self.acquisition.clone(),
            motion: self.motion.clone(),
            daylight: self.daylight.clone(),
            calendar: self.calendar.clone(),
            control: self.control.clone(),
        }
    }

    /// Plausibility checks on the described input.
    pub fn validate(&self) -> Validation {
        crate::calc::validate(&self.input())
    }

    /// Builds an uncomputed record; call [`CalculationRecord::refresh`] to fill in outputs.
    pub fn into_record(self) -> CalculationRecord {
        let input = self.input();
        CalculationRecord::new(self.project, input)
    }
}
