//! Amortization, savings and emission calculator for LED lighting retrofits.

#[cfg(feature = "api")]
pub mod api;
/// Consumption, savings, payback and validation of a lighting project.
pub mod calc;
pub mod config;
pub mod emissions;
pub mod error;
pub mod io;
