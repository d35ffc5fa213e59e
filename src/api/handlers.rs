//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::warn;

use super::AppState;
use super::types::{
    EmissionFactorEntry, EmissionFactorsResponse, EmissionsResponse, ErrorResponse,
    ProjectionQuery, ValidationResponse,
};
use crate::calc::projection::{CashFlowProjection, DEFAULT_YEARS, MAX_YEARS};
use crate::calc::types::CalculationInput;
use crate::calc::{self, CalculationOutput, CalculationRecord};
use crate::emissions::{self, Pollutant, REFERENCE_YEAR};

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(error: String) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error }))
}

fn parse_input(
    payload: Result<Json<CalculationInput>, JsonRejection>,
) -> Result<CalculationInput, ApiError> {
    payload
        .map(|Json(input)| input)
        .map_err(|rejection| bad_request(rejection.body_text()))
}

/// Returns the project computed at startup.
///
/// `GET /project` → 200 + `CalculationRecord` JSON
pub async fn get_project(State(state): State<Arc<AppState>>) -> Json<CalculationRecord> {
    Json(state.record.clone())
}

/// Returns the cash-flow projection of the startup project.
///
/// `GET /projection` → 15 years
/// `GET /projection?years=N` → `N` years, 400 if `N` exceeds 100
pub async fn get_projection(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProjectionQuery>,
) -> impl IntoResponse {
    let years = query.years.unwrap_or(DEFAULT_YEARS);
    if years > MAX_YEARS {
        return Err(bad_request(format!(
            "`years` ({years}) must be <= {MAX_YEARS}"
        )));
    }
    let record = &state.record;
    Ok(Json(CashFlowProjection::new(&record.input, &record.output, years)))
}

/// Returns the pollutant breakdown of the startup project.
///
/// `GET /emissions` → 200 + `EmissionsResponse` JSON
pub async fn get_emissions(State(state): State<Arc<AppState>>) -> Json<EmissionsResponse> {
    Json(EmissionsResponse {
        reference_year: REFERENCE_YEAR,
        pollutants: emissions::breakdown(&state.record.input, &state.record.output),
    })
}

/// Returns the emission factor table.
///
/// `GET /emission-factors` → 200 + `EmissionFactorsResponse` JSON
pub async fn get_emission_factors() -> Json<EmissionFactorsResponse> {
    Json(EmissionFactorsResponse {
        reference_year: REFERENCE_YEAR,
        factors: Pollutant::ALL.into_iter().map(EmissionFactorEntry::from).collect(),
    })
}

/// Computes every output figure for the posted input.
///
/// Violations are logged but never block the computation.
///
/// `POST /recompute` → 200 + `CalculationOutput` JSON, 400 on a malformed body
pub async fn post_recompute(
    payload: Result<Json<CalculationInput>, JsonRejection>,
) -> Result<Json<CalculationOutput>, ApiError> {
    let input = parse_input(payload)?;
    for violation in &calc::validate(&input).violations {
        warn!(%violation, "implausible input");
    }
    Ok(Json(calc::recompute(&input)))
}

/// Runs the plausibility checks on the posted input.
///
/// `POST /validate` → 200 + `ValidationResponse` JSON, 400 on a malformed body
pub async fn post_validate(
    payload: Result<Json<CalculationInput>, JsonRejection>,
) -> Result<Json<ValidationResponse>, ApiError> {
    let input = parse_input(payload)?;
    let validation = calc::validate(&input);
    Ok(Json(ValidationResponse {
        is_valid: validation.is_valid(),
        violations: validation.violations,
    }))
}
