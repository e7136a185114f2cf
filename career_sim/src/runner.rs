//! Simulation driver: validate, seed, schedule, step, aggregate.

use krabmaga::engine::schedule::Schedule;
use krabmaga::engine::state::State;
use tracing::{info, warn};

use crate::config::{RealizedPayoff, SimulationConfig};
use crate::error::SimulationError;
use crate::report::SimulationReport;
use crate::state::{CareerState, TrialRecord};

/// Result of a completed run.
#[derive(Clone, Debug)]
pub struct SimulationOutput {
    pub report: SimulationReport,
    /// `records[i - 1]` holds the K trials of type `i`.
    pub records: Vec<Vec<TrialRecord>>,
    /// Seed actually used; pass it back in to reproduce the run.
    pub seed: u64,
}

/// Run the full career-choice simulation.
///
/// Parameters are validated before any draw. When `config.seed` is `None`
/// a seed is drawn from the thread RNG and logged so the run can be repeated.
pub fn run_simulation(config: &SimulationConfig) -> Result<SimulationOutput, SimulationError> {
    config.validate()?;

    let seed = config.seed.unwrap_or_else(rand::random);
    info!(
        n_types = config.n_types,
        n_trials = config.n_trials,
        n_tracks = config.n_tracks(),
        sigma = config.sigma,
        switching_cost = config.switching_cost,
        seed,
        seeded = config.seed.is_some(),
        "Starting career-choice simulation"
    );
    if config.realized_payoff == RealizedPayoff::ExpectedUtility {
        warn!("Realized payoffs anchored on expected utility rather than track number");
    }

    let mut state = CareerState::new(config, seed)?;
    let mut schedule = Schedule::new();

    // Schedule one graduate proxy per type (calls CareerState::init)
    state.init(&mut schedule);

    // One schedule step per trial
    for _ in 0..config.n_trials {
        schedule.step(&mut state);
    }

    let report = SimulationReport::from_records(&state.records, state.model.n_tracks());
    info!(
        overall_switch_rate = report.overall_switch_rate,
        "Career-choice simulation complete"
    );

    Ok(SimulationOutput {
        report,
        records: state.records,
        seed,
    })
}
