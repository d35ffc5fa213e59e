//! Lighting amortization calculation: consumption, savings, payback, and CO2.
//!
//! [`recompute`] is the whole pipeline. It is a pure function of the input;
//! callers that persist records run it before every write (see
//! [`CalculationRecord::refresh`]).

pub mod consumption;
pub mod financial;
pub mod output;
pub mod projection;
pub mod types;
pub mod validate;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::emissions;

pub use output::CalculationOutput;
pub use types::CalculationInput;
pub use validate::{Validation, Violation, validate};

use financial::{Amortization, Investment, Savings};

/// Computes every output figure from `input`.
///
/// Stages run in a fixed order: consumption of the three scenarios, savings,
/// investment, payback, CO2. Never fails; implausible inputs still yield
/// numbers (see [`validate`]).
#[instrument(skip_all, fields(facility = %input.facility_type))]
pub fn recompute(input: &CalculationInput) -> CalculationOutput {
    let existing = consumption::existing_system(input);
    let new_without_control = consumption::new_without_control(input);
    let new_with_control = consumption::new_with_control(input);
    debug!(
        existing_kwh = existing.annual_kwh,
        new_kwh = new_without_control.annual_kwh,
        controlled_kwh = new_with_control.annual_kwh,
        "consumption"
    );

    let savings = Savings::compute(input, &existing, &new_without_control, &new_with_control);
    let investment = Investment::compute(input);
    let amortization = Amortization::compute(input, &investment, &savings);
    debug!(
        savings = savings.new_vs_existing,
        control_savings = savings.control,
        investment = investment.new_system,
        control_investment = investment.control_system,
        "financials"
    );

    let co2 = emissions::co2(input, &existing, &new_without_control, &new_with_control);
    debug!(co2_savings_kg = co2.savings, "emissions");

    CalculationOutput {
        existing,
        new_without_control,
        new_with_control,
        savings,
        investment,
        amortization,
        co2,
    }
}

/// Descriptive project data carried alongside a calculation. Never read by the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectMeta {
    pub name: String,
    pub company: String,
    pub contact: String,
    pub email: String,
    pub owner: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A project: metadata, inputs, and the outputs last computed from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub meta: ProjectMeta,
    pub input: CalculationInput,
    pub output: CalculationOutput,
}

impl CalculationRecord {
    /// Creates a record with uncomputed (zero) outputs.
    pub fn new(meta: ProjectMeta, input: CalculationInput) -> Self {
        Self {
            meta,
            input,
            output: CalculationOutput::default(),
        }
    }

    /// Replaces all outputs with a fresh computation from the current inputs.
    pub fn refresh(&mut self) {
        self.output = recompute(&self.input);
    }

    /// Consuming variant of [`Self::refresh`].
    pub fn computed(mut self) -> Self {
        self.refresh();
        self
    }

    pub fn validate(&self) -> Validation {
        validate(&self.input)
    }
}
