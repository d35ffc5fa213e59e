//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use rand::Rng;
use rand::rngs::StdRng;

use lighting_roi::calc::types::{
    AcquisitionCost, CalculationInput, CalendarControl, ControlSystem, DailyDuration,
    DaylightControl, FacilityType, MotionSensorControl, SystemInput,
};

/// Lighting installation running `hours_per_day` on `days` days, no running costs.
pub fn lighting(power_w: f64, fixture_count: u32, hours_per_day: f64, days: u32) -> SystemInput {
    SystemInput {
        power_w,
        fixture_count,
        hours_per_day,
        days_per_year: days,
        ..SystemInput::default()
    }
}

/// 36 W to 18 W retrofit of 10 fixtures, 10 h on 250 days, 0.30 per kWh, no control.
pub fn retrofit_without_control() -> CalculationInput {
    CalculationInput {
        electricity_price: 0.30,
        has_existing_system: true,
        existing: lighting(36.0, 10, 10.0, 250),
        new_system: lighting(18.0, 10, 10.0, 250),
        ..CalculationInput::default()
    }
}

/// 10 fixtures at 20 W for 12 h on 250 days, 5 of them on motion sensors
/// (4 h presence at 100 %, absence at 20 %).
pub fn motion_only() -> CalculationInput {
    CalculationInput {
        electricity_price: 0.30,
        new_system: lighting(20.0, 10, 12.0, 250),
        motion: MotionSensorControl {
            enabled: true,
            fixture_count: 5,
            presence_level_pct: 100.0,
            absence_level_pct: 20.0,
            presence: DailyDuration::new(4, 0),
            ..MotionSensorControl::default()
        },
        control: ControlSystem {
            enabled: true,
            ..ControlSystem::default()
        },
        ..CalculationInput::default()
    }
}

/// Random input within generous bounds, including implausible values
/// (hours above 24, oversized control groups, shutdowns beyond the year).
pub fn random_input(rng: &mut StdRng) -> CalculationInput {
    let system = |rng: &mut StdRng| SystemInput {
        power_w: rng.random_range(0.0..400.0),
        fixture_count: rng.random_range(0..200),
        hours_per_day: rng.random_range(0.0..30.0),
        days_per_year: rng.random_range(0..400),
        maintenance_cost: rng.random_range(0.0..2000.0),
        other_cost: rng.random_range(0.0..500.0),
    };
    let existing = system(rng);
    let new_system = system(rng);

    CalculationInput {
        electricity_price: rng.random_range(0.01..1.0),
        facility_type: FacilityType::Industrial,
        has_existing_system: rng.random_bool(0.5),
        existing,
        new_system,
        acquisition: AcquisitionCost {
            fixture_price: rng.random_range(0.0..500.0),
            installation_cost: rng.random_range(0.0..10_000.0),
        },
        motion: MotionSensorControl {
            enabled: rng.random_bool(0.7),
            fixture_count: rng.random_range(0..250),
            presence_level_pct: rng.random_range(0.0..=100.0),
            absence_level_pct: rng.random_range(0.0..=100.0),
            presence: DailyDuration::new(rng.random_range(0..30), rng.random_range(0..60)),
            extra_cost: rng.random_range(0.0..3000.0),
            fade_in_s: rng.random_range(0..10),
            fade_out_s: rng.random_range(0..120),
        },
        daylight: DaylightControl {
            enabled: rng.random_bool(0.7),
            fixture_count: rng.random_range(0..250),
            dimmed_level_pct: rng.random_range(0.0..=100.0),
            daylight: DailyDuration::new(rng.random_range(0..30), rng.random_range(0..60)),
            extra_cost: rng.random_range(0.0..3000.0),
        },
        calendar: CalendarControl {
            enabled: rng.random_bool(0.5),
            shutdown_days: rng.random_range(0..500),
        },
        control: ControlSystem {
            enabled: rng.random_bool(0.6),
            base_cost: rng.random_range(0.0..5000.0),
            per_fixture_cost: rng.random_range(0.0..50.0),
        },
    }
}
