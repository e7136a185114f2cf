//! Command-line runner for the career-choice simulation.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing, to stderr)
//! 2. Load configuration from `CAREER_CONFIG` or `career-config.yaml`,
//!    falling back to defaults
//! 3. Run the simulation
//! 4. Print the report as JSON on stdout

use std::path::PathBuf;

use career_sim::{run_simulation, SimulationConfig, SimulationReport};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "career-config.yaml";

#[derive(Serialize)]
struct Output<'a> {
    seed: u64,
    config: &'a SimulationConfig,
    report: &'a SimulationReport,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let config = load_config()?;
    let output = run_simulation(&config)?;

    let json = serde_json::to_string_pretty(&Output {
        seed: output.seed,
        config: &config,
        report: &output.report,
    })?;
    println!("{json}");
    Ok(())
}

/// Load configuration from `CAREER_CONFIG` if set (it must exist), else the
/// default path if it exists, else built-in defaults.
fn load_config() -> Result<SimulationConfig, Box<dyn std::error::Error>> {
    let path = match std::env::var_os("CAREER_CONFIG") {
        Some(explicit) => PathBuf::from(explicit),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_PATH);
            if !default.exists() {
                info!("Config file not found, using defaults");
                return Ok(SimulationConfig::default());
            }
            default
        }
    };

    let config = SimulationConfig::from_file(&path)?;
    info!(path = %path.display(), "Configuration loaded");
    Ok(config)
}
