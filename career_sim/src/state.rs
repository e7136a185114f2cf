use std::any::Any;

use krabmaga::engine::{schedule::Schedule, state::State};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::agents::GraduateAgent;
use crate::config::SimulationConfig;
use crate::decisions::{ChoiceModel, FirstChoice, SwitchDecision};
use crate::error::SimulationError;

// ─────────────────────────────────────────────────────────────────────────────
// Trial record
// ─────────────────────────────────────────────────────────────────────────────

/// Everything recorded for one graduate type in one trial.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrialRecord {
    pub trial: usize,
    pub first: FirstChoice,
    pub second: SwitchDecision,
}

// ─────────────────────────────────────────────────────────────────────────────
// Career state (implements krabmaga State)
// ─────────────────────────────────────────────────────────────────────────────

/// Central state for a career-choice run.
///
/// Agent proxies (`GraduateAgent`) live in the krabmaga Schedule; the model
/// parameters and every trial record live here. `records[i - 1]` holds the
/// trials of type `i` in trial order.
pub struct CareerState {
    pub model: ChoiceModel,
    pub seed: u64,
    pub records: Vec<Vec<TrialRecord>>,
    pub current_trial: usize,

    n_types: usize,
    n_trials: usize,
}

impl CareerState {
    /// Validate the configuration and build an empty state for `seed`.
    pub fn new(config: &SimulationConfig, seed: u64) -> Result<Self, SimulationError> {
        let model = ChoiceModel::new(config)?;
        Ok(CareerState {
            model,
            seed,
            records: Self::empty_records(config.n_types, config.n_trials),
            current_trial: 0,
            n_types: config.n_types,
            n_trials: config.n_trials,
        })
    }

    fn empty_records(n_types: usize, n_trials: usize) -> Vec<Vec<TrialRecord>> {
        (0..n_types).map(|_| Vec::with_capacity(n_trials)).collect()
    }

    pub fn n_types(&self) -> usize {
        self.n_types
    }

    pub fn n_trials(&self) -> usize {
        self.n_trials
    }

    /// True once every trial has been simulated.
    pub fn is_complete(&self) -> bool {
        self.current_trial >= self.n_trials
    }

    /// Independent generator for one (type, trial) unit of work.
    ///
    /// Derived only from the run seed and the unit's coordinates, so results
    /// do not depend on the order agents are stepped in.
    pub fn trial_rng(&self, graduate_type: usize, trial: usize) -> StdRng {
        StdRng::seed_from_u64(trial_seed(self.seed, graduate_type, trial))
    }
}

/// Mix the run seed with a unit's coordinates (splitmix64 finaliser).
pub fn trial_seed(seed: u64, graduate_type: usize, trial: usize) -> u64 {
    let mut z = seed
        ^ (graduate_type as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ (trial as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

// ─────────────────────────────────────────────────────────────────────────────
// krabmaga State implementation
// ─────────────────────────────────────────────────────────────────────────────

impl State for CareerState {
    /// Schedule one graduate proxy per type; every step is one trial.
    fn init(&mut self, schedule: &mut Schedule) {
        for graduate_type in 1..=self.n_types {
            schedule.schedule_repeating(Box::new(GraduateAgent { graduate_type }), 0.0, 0);
        }
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_state_mut(&mut self) -> &mut dyn State {
        self
    }

    fn as_state(&self) -> &dyn State {
        self
    }

    fn reset(&mut self) {
        self.records = Self::empty_records(self.n_types, self.n_trials);
        self.current_trial = 0;
    }

    fn update(&mut self, _step: u64) {}

    /// Close the current trial once every type has recorded it.
    fn after_step(&mut self, _schedule: &mut Schedule) {
        if self.is_complete() {
            return;
        }
        self.current_trial += 1;

        let tenth = (self.n_trials / 10).max(1);
        if self.current_trial % tenth == 0 {
            debug!(
                trial = self.current_trial,
                n_trials = self.n_trials,
                "Cohort batch complete"
            );
        }
    }
}
