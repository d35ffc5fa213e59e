//! lighting-roi entry point: CLI wiring, project loading and report output.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use lighting_roi::calc::projection::{self, CashFlowProjection};
use lighting_roi::config::ProjectConfig;
use lighting_roi::emissions;
use lighting_roi::io::export::{export_emissions_csv, export_projection_csv};

const DEFAULT_PRESET: &str = "office_retrofit";

/// Amortization, savings and emission calculator for LED lighting retrofits.
#[derive(Debug, Parser)]
#[command(name = "lighting-roi", version)]
struct Cli {
    /// Load the project from a TOML file
    #[arg(long, value_name = "PATH", conflicts_with = "preset")]
    project: Option<PathBuf>,

    /// Use a built-in preset (office_retrofit, warehouse_motion, street_lighting, new_build)
    #[arg(long, value_name = "NAME")]
    preset: Option<String>,

    /// Override the electricity price (currency/kWh)
    #[arg(long, value_name = "PRICE")]
    price: Option<f64>,

    /// Exit with an error when plausibility checks fail
    #[arg(long)]
    strict: bool,

    /// Print the computed project as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Cash-flow projection horizon in years
    #[arg(
        long,
        default_value_t = projection::DEFAULT_YEARS,
        value_parser = clap::value_parser!(u32).range(0..=i64::from(projection::MAX_YEARS))
    )]
    years: u32,

    /// Export the cash-flow projection to CSV
    #[arg(long, value_name = "PATH")]
    projection_out: Option<PathBuf>,

    /// Export the pollutant breakdown to CSV
    #[arg(long, value_name = "PATH")]
    emissions_out: Option<PathBuf>,

    /// Start the REST API server after computing
    #[cfg(feature = "api")]
    #[arg(long)]
    serve: bool,

    /// API server port
    #[cfg(feature = "api")]
    #[arg(long, default_value_t = 3000)]
    port: u16,
}

fn load_project(cli: &Cli) -> Result<ProjectConfig> {
    if let Some(path) = &cli.project {
        return ProjectConfig::from_toml_file(path)
            .with_context(|| format!("failed to load project {}", path.display()));
    }
    let name = cli.preset.as_deref().unwrap_or(DEFAULT_PRESET);
    Ok(ProjectConfig::from_preset(name)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();

    let mut project = load_project(&cli)?;
    if let Some(price) = cli.price {
        project.site.electricity_price = price;
    }

    // Advisory unless --strict
    let validation = project.validate();
    for violation in &validation.violations {
        warn!(%violation, "implausible input");
    }
    if cli.strict && !validation.is_valid() {
        bail!(
            "{} plausibility check(s) failed",
            validation.violations.len()
        );
    }

    let record = project.into_record().computed();
    let projection = CashFlowProjection::new(&record.input, &record.output, cli.years);
    let break_even = &projection.break_even;
    info!(
        new_system = ?break_even.new_system,
        control_system = ?break_even.control_system,
        combined = ?break_even.combined,
        horizon = cli.years,
        "break-even year"
    );

    if cli.json {
        let json = serde_json::to_string_pretty(&record).context("failed to serialize project")?;
        println!("{json}");
    } else {
        if !record.meta.name.is_empty() {
            println!("Project: {} ({})", record.meta.name, record.input.facility_type);
        }
        println!("{}", record.output);
    }

    if let Some(path) = &cli.projection_out {
        export_projection_csv(&projection, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "projection written");
    }

    if let Some(path) = &cli.emissions_out {
        let rows = emissions::breakdown(&record.input, &record.output);
        export_emissions_csv(&rows, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "emissions written");
    }

    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let state = Arc::new(lighting_roi::api::AppState { record });
        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
        let rt = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
        rt.block_on(lighting_roi::api::serve(state, addr))
            .context("API server failed")?;
    }

    Ok(())
}
