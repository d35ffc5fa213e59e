//! Annual energy consumption and running cost of the lighting scenarios.
//!
//! Three scenarios are computed: the existing installation, the new
//! installation running at full power, and the new installation under the
//! control system (motion sensors, daylight harvesting, calendar shutdowns).

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{CalculationInput, SystemInput};

/// Annual consumption of one scenario and what it costs to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Consumption {
    /// Energy consumed per year (kWh).
    pub annual_kwh: f64,
    /// Energy cost plus maintenance and other running costs (currency/year).
    pub annual_cost: f64,
}

impl Consumption {
    pub const ZERO: Self = Self {
        annual_kwh: 0.0,
        annual_cost: 0.0,
    };

    fn priced(annual_kwh: f64, system: &SystemInput, electricity_price: f64) -> Self {
        Self {
            annual_kwh,
            annual_cost: annual_kwh * electricity_price + system.running_cost(),
        }
    }
}

/// Full-power annual consumption: `kW * fixtures * hours/day * days/year`.
fn full_power_kwh(system: &SystemInput) -> f64 {
    system.power_kw()
        * f64::from(system.fixture_count)
        * system.hours_per_day
        * f64::from(system.days_per_year)
}

/// Consumption of the installation being replaced.
///
/// Exactly zero when the input has no existing system.
pub fn existing_system(input: &CalculationInput) -> Consumption {
    if !input.has_existing_system {
        return Consumption::ZERO;
    }
    Consumption::priced(
        full_power_kwh(&input.existing),
        &input.existing,
        input.electricity_price,
    )
}

/// Consumption of the new installation without any control system.
pub fn new_without_control(input: &CalculationInput) -> Consumption {
    Consumption::priced(
        full_power_kwh(&input.new_system),
        &input.new_system,
        input.electricity_price,
    )
}

/// Operating days left after calendar shutdowns, within `[0, days_per_year]`.
///
/// # Examples
///
/// ```
/// use lighting_roi::calc::consumption::effective_operating_days;
/// use lighting_roi::calc::types::CalculationInput;
///
/// let mut input = CalculationInput::default();
/// input.new_system.days_per_year = 250;
/// input.calendar.enabled = true;
/// input.calendar.shutdown_days = 300;
/// assert_eq!(effective_operating_days(&input), 0);
/// ```
pub fn effective_operating_days(input: &CalculationInput) -> u32 {
    let days = input.new_system.days_per_year;
    if input.calendar.enabled {
        days.saturating_sub(input.calendar.shutdown_days)
    } else {
        days
    }
}

/// Split of the new system's fixtures into disjoint control groups.
///
/// Motion-sensor allocation is served first, daylight control gets what is
/// left, the rest runs uncontrolled. Configured counts beyond the available
/// population are truncated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixturePartition {
    pub motion: u32,
    pub daylight: u32,
    pub uncontrolled: u32,
}

impl FixturePartition {
    /// Allocates fixtures to groups. A disabled subsystem controls no fixtures.
    pub fn from_input(input: &CalculationInput) -> Self {
        let total = input.new_system.fixture_count;

        let motion = if input.motion.enabled {
            input.motion.fixture_count.min(total)
        } else {
            0
        };
        let daylight = if input.daylight.enabled {
            input.daylight.fixture_count.min(total - motion)
        } else {
            0
        };

        Self {
            motion,
            daylight,
            uncontrolled: total - motion - daylight,
        }
    }

    /// Sum of all groups; always equals the new system's fixture count.
    pub fn total(&self) -> u32 {
        self.motion + self.daylight + self.uncontrolled
    }
}

/// Per-group consumption of the new system under control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlBreakdown {
    pub partition: FixturePartition,
    /// Operating days after calendar shutdowns.
    pub effective_days: u32,
    /// Motion-sensor group (kWh/year).
    pub motion_kwh: f64,
    /// Daylight-controlled group (kWh/year).
    pub daylight_kwh: f64,
    /// Uncontrolled group (kWh/year).
    pub uncontrolled_kwh: f64,
}

impl ControlBreakdown {
    /// Computes every group of the controlled installation.
    pub fn from_input(input: &CalculationInput) -> Self {
        let system = &input.new_system;
        let partition = FixturePartition::from_input(input);
        let effective_days = effective_operating_days(input);
        let days = f64::from(effective_days);
        let power_kw = system.power_kw();
        // Floored here only; new_without_control keeps negative hours as entered.
        let hours = system.hours_per_day.max(0.0);

        let motion_kwh = if partition.motion > 0 {
            let presence = clamp_hours(input.motion.presence.as_hours(), hours);
            let absence = hours - presence;
            let weighted_hours = absence * percent(input.motion.absence_level_pct)
                + presence * percent(input.motion.presence_level_pct);
            power_kw * f64::from(partition.motion) * weighted_hours * days
        } else {
            0.0
        };

        let daylight_kwh = if partition.daylight > 0 {
            let daylight = clamp_hours(input.daylight.daylight.as_hours(), hours);
            let remaining = hours - daylight;
            let weighted_hours = daylight * percent(input.daylight.dimmed_level_pct) + remaining;
            power_kw * f64::from(partition.daylight) * weighted_hours * days
        } else {
            0.0
        };

        let uncontrolled_kwh = if partition.uncontrolled > 0 {
            power_kw * f64::from(partition.uncontrolled) * hours * days
        } else {
            0.0
        };

        Self {
            partition,
            effective_days,
            motion_kwh,
            daylight_kwh,
            uncontrolled_kwh,
        }
    }

    pub fn total_kwh(&self) -> f64 {
        self.motion_kwh + self.daylight_kwh + self.uncontrolled_kwh
    }
}

/// Consumption of the new installation with the control system applied.
///
/// Identical to [`new_without_control`] when the control system is disabled.
pub fn new_with_control(input: &CalculationInput) -> Consumption {
    if !input.control_enabled() {
        return new_without_control(input);
    }

    let breakdown = ControlBreakdown::from_input(input);
    debug!(
        motion = breakdown.partition.motion,
        daylight = breakdown.partition.daylight,
        uncontrolled = breakdown.partition.uncontrolled,
        effective_days = breakdown.effective_days,
        "control groups"
    );
    Consumption::priced(
        breakdown.total_kwh(),
        &input.new_system,
        input.electricity_price,
    )
}

fn clamp_hours(value: f64, max: f64) -> f64 {
    value.min(max).max(0.0)
}

fn percent(value: f64) -> f64 {
    value / 100.0
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::calc::types::DailyDuration;

    fn lighting(power_w: f64, fixture_count: u32, hours_per_day: f64, days: u32) -> SystemInput {
        SystemInput {
            power_w,
            fixture_count,
            hours_per_day,
            days_per_year: days,
            ..SystemInput::default()
        }
    }

    fn controlled_input() -> CalculationInput {
        CalculationInput {
            electricity_price: 0.30,
            new_system: lighting(20.0, 10, 12.0, 250),
            control: crate::calc::types::ControlSystem {
                enabled: true,
                ..Default::default()
            },
            ..CalculationInput::default()
        }
    }

    #[test]
    fn existing_system_absent_is_zero() {
        let input = CalculationInput {
            electricity_price: 0.30,
            has_existing_system: false,
            existing: lighting(36.0, 10, 10.0, 250),
            ..CalculationInput::default()
        };
        assert_eq!(existing_system(&input), Consumption::ZERO);
    }

    #[test]
    fn existing_system_consumption_and_cost() {
        let input = CalculationInput {
            electricity_price: 0.30,
            has_existing_system: true,
            existing: SystemInput {
                maintenance_cost: 50.0,
                other_cost: 5.0,
                ..lighting(36.0, 10, 10.0, 250)
            },
            ..CalculationInput::default()
        };
        let c = existing_system(&input);
        assert_relative_eq!(c.annual_kwh, 900.0, epsilon = 1e-9);
        assert_relative_eq!(c.annual_cost, 270.0 + 55.0, epsilon = 1e-9);
    }

    #[test]
    fn new_system_without_control() {
        let input = CalculationInput {
            electricity_price: 0.30,
            new_system: lighting(18.0, 10, 10.0, 250),
            ..CalculationInput::default()
        };
        let c = new_without_control(&input);
        assert_relative_eq!(c.annual_kwh, 450.0, epsilon = 1e-9);
        assert_relative_eq!(c.annual_cost, 135.0, epsilon = 1e-9);
    }

    #[test]
    fn disabled_control_passes_through() {
        let mut input = controlled_input();
        input.control.enabled = false;
        input.motion.enabled = true;
        input.motion.fixture_count = 10;
        assert_eq!(new_with_control(&input), new_without_control(&input));
    }

    #[test]
    fn enabled_control_without_subsystems_matches_full_power() {
        let input = controlled_input();
        let with = new_with_control(&input);
        let without = new_without_control(&input);
        assert_relative_eq!(with.annual_kwh, without.annual_kwh, epsilon = 1e-9);
    }

    #[test]
    fn motion_sensor_group_weights_presence_and_absence() {
        let mut input = controlled_input();
        input.motion = crate::calc::types::MotionSensorControl {
            enabled: true,
            fixture_count: 5,
            presence_level_pct: 100.0,
            absence_level_pct: 20.0,
            presence: DailyDuration::new(4, 0),
            ..Default::default()
        };
        let breakdown = ControlBreakdown::from_input(&input);
        // 0.02 kW * 5 * (8 h * 0.2 + 4 h * 1.0) * 250 d
        assert_relative_eq!(breakdown.motion_kwh, 140.0, epsilon = 1e-9);
        // 0.02 kW * 5 * 12 h * 250 d
        assert_relative_eq!(breakdown.uncontrolled_kwh, 300.0, epsilon = 1e-9);
        assert_eq!(breakdown.daylight_kwh, 0.0);
    }

    #[test]
    fn daylight_group_dims_only_daylight_hours() {
        let mut input = controlled_input();
        input.daylight = crate::calc::types::DaylightControl {
            enabled: true,
            fixture_count: 10,
            dimmed_level_pct: 50.0,
            daylight: DailyDuration::new(6, 0),
            ..Default::default()
        };
        let breakdown = ControlBreakdown::from_input(&input);
        // 0.02 kW * 10 * (6 h * 0.5 + 6 h) * 250 d
        assert_relative_eq!(breakdown.daylight_kwh, 450.0, epsilon = 1e-9);
        assert_eq!(breakdown.partition.uncontrolled, 0);
    }

    #[test]
    fn presence_longer_than_operating_day_is_clamped() {
        let mut input = controlled_input();
        input.motion = crate::calc::types::MotionSensorControl {
            enabled: true,
            fixture_count: 10,
            presence_level_pct: 100.0,
            absence_level_pct: 0.0,
            presence: DailyDuration::new(30, 0),
            ..Default::default()
        };
        let breakdown = ControlBreakdown::from_input(&input);
        assert_relative_eq!(
            breakdown.motion_kwh,
            new_without_control(&input).annual_kwh,
            epsilon = 1e-9
        );
    }

    #[test]
    fn partition_prioritises_motion_and_truncates() {
        let mut input = controlled_input();
        input.motion.enabled = true;
        input.motion.fixture_count = 7;
        input.daylight.enabled = true;
        input.daylight.fixture_count = 7;
        let p = FixturePartition::from_input(&input);
        assert_eq!(
            p,
            FixturePartition {
                motion: 7,
                daylight: 3,
                uncontrolled: 0
            }
        );
        assert_eq!(p.total(), 10);

        input.motion.fixture_count = 25;
        let p = FixturePartition::from_input(&input);
        assert_eq!((p.motion, p.daylight, p.uncontrolled), (10, 0, 0));
    }

    #[test]
    fn partition_ignores_disabled_subsystems() {
        let mut input = controlled_input();
        input.motion.fixture_count = 4;
        input.daylight.enabled = true;
        input.daylight.fixture_count = 4;
        let p = FixturePartition::from_input(&input);
        assert_eq!((p.motion, p.daylight, p.uncontrolled), (0, 4, 6));
    }

    #[test]
    fn calendar_shutdown_reduces_days() {
        let mut input = controlled_input();
        assert_eq!(effective_operating_days(&input), 250);
        input.calendar.shutdown_days = 50;
        assert_eq!(effective_operating_days(&input), 250);
        input.calendar.enabled = true;
        assert_eq!(effective_operating_days(&input), 200);
        input.calendar.shutdown_days = 300;
        assert_eq!(effective_operating_days(&input), 0);
    }

    #[test]
    fn calendar_shutdown_of_whole_year_zeroes_controlled_consumption() {
        let mut input = controlled_input();
        input.calendar.enabled = true;
        input.calendar.shutdown_days = 300;
        input.motion.enabled = true;
        input.motion.fixture_count = 3;
        input.motion.presence_level_pct = 100.0;
        let c = new_with_control(&input);
        assert_eq!(c.annual_kwh, 0.0);
        assert_eq!(c.annual_cost, 0.0);
    }

    #[test]
    fn negative_operating_hours_never_produce_negative_consumption() {
        let mut input = controlled_input();
        input.new_system.hours_per_day = -4.0;
        input.motion.enabled = true;
        input.motion.fixture_count = 5;
        input.motion.presence = DailyDuration::new(2, 0);
        input.motion.presence_level_pct = 100.0;
        let breakdown = ControlBreakdown::from_input(&input);
        assert_eq!(breakdown.total_kwh(), 0.0);
    }

    #[test]
    fn negative_hours_are_floored_only_under_control() {
        let mut input = controlled_input();
        input.new_system.hours_per_day = -4.0;

        let without = new_without_control(&input);
        let with = new_with_control(&input);
        // 0.02 kW * 10 * -4 h * 250 d
        assert_relative_eq!(without.annual_kwh, -200.0, epsilon = 1e-9);
        assert_eq!(with.annual_kwh, 0.0);
        assert_relative_eq!(without.annual_cost - with.annual_cost, -60.0, epsilon = 1e-9);
        assert!(!crate::calc::validate(&input).is_valid());
    }
}
