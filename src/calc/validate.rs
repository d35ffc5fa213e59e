//! Plausibility checks on a calculation input.
//!
//! Validation is advisory. [`crate::calc::recompute`] accepts any input and
//! never consults these checks; callers decide what to do with violations.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::{CalculationInput, SystemInput};

const MAX_HOURS_PER_DAY: f64 = 24.0;
const MAX_DAYS_PER_YEAR: u32 = 365;

/// A failed plausibility check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Dotted field path (e.g., `"motion.fixture_count"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl Violation {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Outcome of [`validate`]: every violation found, in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub violations: Vec<Violation>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations rendered as `field: message` lines.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}

/// Runs all plausibility checks. A failing check never stops the remaining ones.
///
/// Motion-sensor and daylight fixture counts that together exceed the new
/// system's fixture count are accepted: the consumption calculator gives
/// motion sensors priority and truncates the daylight group.
pub fn validate(input: &CalculationInput) -> Validation {
    let mut violations = Vec::new();

    let price = input.electricity_price;
    if !(price > 0.0 && price <= 1.0) {
        violations.push(Violation::new(
            "site.electricity_price",
            format!("must be in (0, 1], got {price}"),
        ));
    }

    check_operating_time(&mut violations, "new_system", &input.new_system);
    check_operating_time(&mut violations, "existing", &input.existing);

    let fixtures = input.new_system.fixture_count;
    let hours = input.new_system.hours_per_day;

    let motion = &input.motion;
    if motion.enabled {
        if motion.fixture_count > fixtures {
            violations.push(Violation::new(
                "motion.fixture_count",
                format!(
                    "{} controlled fixtures exceed the {fixtures} fixtures of the new system",
                    motion.fixture_count
                ),
            ));
        }
        if motion.presence.as_hours() > hours {
            violations.push(Violation::new(
                "motion.presence",
                format!(
                    "presence of {:.2} h exceeds the new system's {hours} operating hours per day",
                    motion.presence.as_hours()
                ),
            ));
        }
    }

    let daylight = &input.daylight;
    if daylight.enabled {
        if daylight.fixture_count > fixtures {
            violations.push(Violation::new(
                "daylight.fixture_count",
                format!(
                    "{} controlled fixtures exceed the {fixtures} fixtures of the new system",
                    daylight.fixture_count
                ),
            ));
        }
        if daylight.daylight.as_hours() > hours {
            violations.push(Violation::new(
                "daylight.daylight",
                format!(
                    "daylight of {:.2} h exceeds the new system's {hours} operating hours per day",
                    daylight.daylight.as_hours()
                ),
            ));
        }
    }

    Validation { violations }
}

fn check_operating_time(violations: &mut Vec<Violation>, section: &str, system: &SystemInput) {
    if !(0.0..=MAX_HOURS_PER_DAY).contains(&system.hours_per_day) {
        violations.push(Violation::new(
            &format!("{section}.hours_per_day"),
            format!("must be in [0, {MAX_HOURS_PER_DAY}], got {}", system.hours_per_day),
        ));
    }
    if system.days_per_year > MAX_DAYS_PER_YEAR {
        violations.push(Violation::new(
            &format!("{section}.days_per_year"),
            format!("must be <= {MAX_DAYS_PER_YEAR}, got {}", system.days_per_year),
        ));
    }
}
