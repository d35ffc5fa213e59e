//! Savings, investment cost, and simple payback periods.

use serde::{Deserialize, Serialize};

use super::consumption::Consumption;
use super::types::CalculationInput;

/// Annual cost savings.
///
/// Negative values are kept: a replacement that costs more to run than the
/// installation it replaces shows up as a negative saving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Savings {
    /// Existing system versus new system without control (currency/year).
    pub new_vs_existing: f64,
    /// New system without control versus with control (currency/year).
    pub control: f64,
}

impl Savings {
    /// # Arguments
    ///
    /// * `input` - Calculation input (for the existing-system and control flags)
    /// * `existing` - Existing-system consumption
    /// * `without_control` - New system at full power
    /// * `with_control` - New system under control
    pub fn compute(
        input: &CalculationInput,
        existing: &Consumption,
        without_control: &Consumption,
        with_control: &Consumption,
    ) -> Self {
        let new_vs_existing = if input.has_existing_system {
            existing.annual_cost - without_control.annual_cost
        } else {
            0.0
        };
        let control = if input.control_enabled() {
            without_control.annual_cost - with_control.annual_cost
        } else {
            0.0
        };
        Self {
            new_vs_existing,
            control,
        }
    }

    pub fn combined(&self) -> f64 {
        self.new_vs_existing + self.control
    }
}

/// One-time investment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    /// Fixtures plus installation of the new system.
    pub new_system: f64,
    /// Control system; zero when it is disabled.
    pub control_system: f64,
}

impl Investment {
    pub fn compute(input: &CalculationInput) -> Self {
        let fixtures = f64::from(input.new_system.fixture_count);
        let new_system =
            fixtures * input.acquisition.fixture_price + input.acquisition.installation_cost;

        // The surcharge applies to every fixture of the new system, not just
        // the ones assigned to a control group.
        let control_system = if input.control_enabled() {
            input.control.base_cost
                + fixtures * input.control.per_fixture_cost
                + input.motion.extra_cost
                + input.daylight.extra_cost
        } else {
            0.0
        };

        Self {
            new_system,
            control_system,
        }
    }

    pub fn combined(&self) -> f64 {
        self.new_system + self.control_system
    }
}

/// Time to recoup an investment from annual savings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Payback {
    pub years: f64,
    pub months: f64,
}

impl Payback {
    /// Simple payback of `investment` at `annual_savings` per year.
    ///
    /// Returns `None` unless `annual_savings` is strictly positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use lighting_roi::calc::financial::Payback;
    ///
    /// let p = Payback::compute(1000.0, 250.0);
    /// assert_eq!(p.map(|p| p.years), Some(4.0));
    /// assert_eq!(p.map(|p| p.months), Some(48.0));
    /// assert!(Payback::compute(1000.0, 0.0).is_none());
    /// ```
    pub fn compute(investment: f64, annual_savings: f64) -> Option<Self> {
        if annual_savings.is_nan() || annual_savings <= 0.0 {
            return None;
        }
        let years = investment / annual_savings;
        Some(Self {
            years,
            months: years * 12.0,
        })
    }
}

/// Payback periods for the three investment scopes.
///
/// `None` means "not applicable": there is no positive saving to pay the
/// investment back, or the scope does not exist for this input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Amortization {
    pub new_system: Option<Payback>,
    pub control_system: Option<Payback>,
    /// Only defined when both an existing system and the control system are present.
    pub combined: Option<Payback>,
}

impl Amortization {
    pub fn compute(input: &CalculationInput, investment: &Investment, savings: &Savings) -> Self {
        let combined = if input.control_enabled() && input.has_existing_system {
            Payback::compute(investment.combined(), savings.combined())
        } else {
            None
        };
        Self {
            new_system: Payback::compute(investment.new_system, savings.new_vs_existing),
            control_system: Payback::compute(investment.control_system, savings.control),
            combined,
        }
    }
}
