use std::fmt;

use krabmaga::engine::{agent::Agent, state::State};

use crate::state::{CareerState, TrialRecord};

// ─────────────────────────────────────────────────────────────────────────────
// krabmaga Agent proxy
// ─────────────────────────────────────────────────────────────────────────────

/// Proxy agent for one graduate type.
///
/// Each schedule step is one cohort: the agent simulates the current trial's
/// first choice and second-year switch decision for its type and appends the
/// result to `CareerState::records`.
#[derive(Clone)]
pub struct GraduateAgent {
    /// 1-based type index; also the number of private signals per estimate.
    pub graduate_type: usize,
}

impl fmt::Display for GraduateAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GraduateAgent(i={})", self.graduate_type)
    }
}

impl Agent for GraduateAgent {
    fn step(&mut self, state: &mut dyn State) {
        let state = state
            .as_any_mut()
            .downcast_mut::<CareerState>()
            .expect("state should be CareerState");

        let trial = state.current_trial;
        if trial >= state.n_trials() {
            return;
        }

        let mut rng = state.trial_rng(self.graduate_type, trial);
        let first = state.model.first_choice(self.graduate_type, &mut rng);
        let second = state
            .model
            .switch_decision(self.graduate_type, &first, &mut rng);

        state.records[self.graduate_type - 1].push(TrialRecord {
            trial,
            first,
            second,
        });
    }
}
