/*!
# `career_sim`: Monte Carlo simulation of graduate career choice

Graduates of N types each pick one of J career tracks from noisy private
estimates of the tracks' value. A type-`i` graduate averages `i` noise
draws, so higher types see sharper signals. After a first year on the chosen
track the graduate compares the payoff actually received with fresh
estimates of the other tracks, net of a switching cost, and may switch.

The trial loop is scheduled with [krABMaga](https://github.com/krABMaga/krABMaga):
one `GraduateAgent` proxy per type, one schedule step per trial. Every
(type, trial) unit draws from its own generator seeded from the run seed,
so a seeded run is reproducible bit for bit.

## Quick start

```no_run
use career_sim::{run_simulation, SimulationConfig};

let config = SimulationConfig { seed: Some(42), ..SimulationConfig::default() };
let output = run_simulation(&config)?;
for t in &output.report.types {
    println!("i={} distribution={:?}", t.graduate_type, t.distribution);
}
# Ok::<(), career_sim::SimulationError>(())
```

With the `python` feature the same entry point is exposed to Python as
`career_sim.run_simulation`.
*/

mod agents;
pub mod config;
pub mod decisions;
pub mod error;
pub mod report;
pub mod runner;
pub mod state;

#[cfg(feature = "python")]
mod python;

pub use config::{BaseScaling, ConfigError, RealizedPayoff, SimulationConfig};
pub use decisions::{ChoiceModel, FirstChoice, SwitchDecision, Track};
pub use error::SimulationError;
pub use report::{SimulationReport, TypeSummary};
pub use runner::{run_simulation, SimulationOutput};
pub use state::{CareerState, TrialRecord};
