use std::collections::HashMap;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::SimulationConfig;
use crate::report::SimulationReport;
use crate::runner;

// ─────────────────────────────────────────────────────────────────────────────
// Python-visible report
// ─────────────────────────────────────────────────────────────────────────────

/// Aggregate statistics of one run. Per-type lists are indexed by `type - 1`.
///
/// All fields are read-only from Python.
#[pyclass(get_all)]
#[derive(Clone, Debug)]
pub struct PyCareerReport {
    pub seed: u64,
    pub distributions: Vec<Vec<f64>>,
    pub mean_expected_utility: Vec<f64>,
    pub mean_realized_utility: Vec<f64>,
    pub second_year_distributions: Vec<Vec<f64>>,
    pub switch_rate_by_type_and_track: Vec<Vec<Option<f64>>>,
    pub switch_rate_by_track: Vec<Option<f64>>,
    pub overall_switch_rate: f64,
}

impl PyCareerReport {
    fn new(report: &SimulationReport, seed: u64) -> Self {
        PyCareerReport {
            seed,
            distributions: report.distributions(),
            mean_expected_utility: report.mean_expected_utilities(),
            mean_realized_utility: report.mean_realized_utilities(),
            second_year_distributions: report
                .types
                .iter()
                .map(|t| t.second_year_distribution.clone())
                .collect(),
            switch_rate_by_type_and_track: report
                .types
                .iter()
                .map(|t| t.switch_rate_by_track.clone())
                .collect(),
            switch_rate_by_track: report.switch_rate_by_track.clone(),
            overall_switch_rate: report.overall_switch_rate,
        }
    }
}

#[pymethods]
impl PyCareerReport {
    fn __repr__(&self) -> String {
        format!(
            "PyCareerReport(n_types={}, seed={}, overall_switch_rate={:.4})",
            self.distributions.len(),
            self.seed,
            self.overall_switch_rate
        )
    }

    /// Per-type scalar statistics keyed by 1-based type index, for plotting.
    fn to_dict(&self) -> HashMap<usize, HashMap<String, f64>> {
        let mut out = HashMap::new();
        for (idx, dist) in self.distributions.iter().enumerate() {
            let mut m = HashMap::new();
            for (track, share) in dist.iter().enumerate() {
                m.insert(format!("share_v{}", track + 1), *share);
            }
            m.insert(
                "mean_expected_utility".to_string(),
                self.mean_expected_utility[idx],
            );
            m.insert(
                "mean_realized_utility".to_string(),
                self.mean_realized_utility[idx],
            );
            out.insert(idx + 1, m);
        }
        out
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Main simulation entry point
// ─────────────────────────────────────────────────────────────────────────────

/// Run the career-choice simulation and return aggregate statistics.
///
/// Args:
///     n_types: Number of graduate types (N).
///     n_trials: Number of trials per type (K).
///     sigma: Noise standard deviation.
///     base_values: Base value of each career track.
///     switching_cost: Cost of switching track in the second year.
///     seed: Random seed; drawn and reported back when omitted.
///
/// Raises:
///     ValueError: if any parameter is out of range.
#[pyfunction]
#[pyo3(signature = (n_types=10, n_trials=10_000, sigma=2.0, base_values=vec![1.0, 2.0, 3.0], switching_cost=1.0, seed=None))]
fn run_simulation(
    n_types: usize,
    n_trials: usize,
    sigma: f64,
    base_values: Vec<f64>,
    switching_cost: f64,
    seed: Option<u64>,
) -> PyResult<PyCareerReport> {
    let config = SimulationConfig {
        n_types,
        n_trials,
        sigma,
        base_values,
        switching_cost,
        seed,
        ..SimulationConfig::default()
    };
    let output =
        runner::run_simulation(&config).map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(PyCareerReport::new(&output.report, output.seed))
}

// ─────────────────────────────────────────────────────────────────────────────
// Module definition
// ─────────────────────────────────────────────────────────────────────────────

/// Rust-backed career-choice Monte Carlo simulation.
#[pymodule]
fn career_sim(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCareerReport>()?;
    m.add_function(wrap_pyfunction!(run_simulation, m)?)?;
    Ok(())
}
