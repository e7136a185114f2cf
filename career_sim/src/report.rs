//! Aggregate statistics over every (type, trial) record of a run.
//!
//! Per-type vectors are indexed by `type - 1`; per-track vectors by the
//! track's zero-based position.

use serde::Serialize;

use crate::state::TrialRecord;

/// Summary statistics for one graduate type.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TypeSummary {
    /// 1-based type index.
    pub graduate_type: usize,
    pub n_trials: usize,
    /// Share of trials choosing each track first; sums to 1.
    pub distribution: Vec<f64>,
    pub mean_expected_utility: f64,
    pub mean_realized_utility: f64,
    /// Share of trials on each track after the second-year decision.
    pub second_year_distribution: Vec<f64>,
    pub mean_second_year_expected_utility: f64,
    pub mean_second_year_realized_utility: f64,
    /// Switch rate among graduates of this type who first chose each track;
    /// `None` where no graduate of this type chose it.
    pub switch_rate_by_track: Vec<Option<f64>>,
    pub switch_rate: f64,
}

/// Output contract of a simulation run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimulationReport {
    pub types: Vec<TypeSummary>,
    /// Switch rate per originally chosen track, pooled over all types;
    /// `None` where no graduate chose the track.
    pub switch_rate_by_track: Vec<Option<f64>>,
    pub overall_switch_rate: f64,
}

impl SimulationReport {
    /// Aggregate per-type records into the report.
    ///
    /// Every slot of `records` must hold at least one trial; the driver
    /// guarantees this by rejecting `n_trials == 0` up front.
    pub fn from_records(records: &[Vec<TrialRecord>], n_tracks: usize) -> Self {
        let types: Vec<TypeSummary> = records
            .iter()
            .enumerate()
            .map(|(idx, trials)| summarise_type(idx + 1, trials, n_tracks))
            .collect();

        let mut chosen = vec![0usize; n_tracks];
        let mut switched = vec![0usize; n_tracks];
        for r in records.iter().flatten() {
            chosen[r.first.track.index()] += 1;
            if r.second.switched {
                switched[r.first.track.index()] += 1;
            }
        }
        let total: usize = chosen.iter().sum();
        let total_switched: usize = switched.iter().sum();

        SimulationReport {
            types,
            switch_rate_by_track: ratios(&switched, &chosen),
            overall_switch_rate: share(total_switched, total),
        }
    }

    /// First-year distribution per type.
    pub fn distributions(&self) -> Vec<Vec<f64>> {
        self.types.iter().map(|t| t.distribution.clone()).collect()
    }

    pub fn mean_expected_utilities(&self) -> Vec<f64> {
        self.types.iter().map(|t| t.mean_expected_utility).collect()
    }

    pub fn mean_realized_utilities(&self) -> Vec<f64> {
        self.types.iter().map(|t| t.mean_realized_utility).collect()
    }
}

fn summarise_type(graduate_type: usize, trials: &[TrialRecord], n_tracks: usize) -> TypeSummary {
    let n = trials.len();

    let mut first_counts = vec![0usize; n_tracks];
    let mut second_counts = vec![0usize; n_tracks];
    let mut switched_from = vec![0usize; n_tracks];
    let mut eu = 0.0;
    let mut rv = 0.0;
    let mut eu2 = 0.0;
    let mut rv2 = 0.0;

    for r in trials {
        let first = r.first.track.index();
        first_counts[first] += 1;
        second_counts[r.second.track.index()] += 1;
        if r.second.switched {
            switched_from[first] += 1;
        }
        eu += r.first.expected_utility;
        rv += r.first.realized_utility;
        eu2 += r.second.expected_utility;
        rv2 += r.second.realized_utility;
    }

    let n_switched: usize = switched_from.iter().sum();

    TypeSummary {
        graduate_type,
        n_trials: n,
        distribution: first_counts.iter().map(|&c| share(c, n)).collect(),
        mean_expected_utility: mean(eu, n),
        mean_realized_utility: mean(rv, n),
        second_year_distribution: second_counts.iter().map(|&c| share(c, n)).collect(),
        mean_second_year_expected_utility: mean(eu2, n),
        mean_second_year_realized_utility: mean(rv2, n),
        switch_rate_by_track: ratios(&switched_from, &first_counts),
        switch_rate: share(n_switched, n),
    }
}

fn share(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

fn mean(sum: f64, n: usize) -> f64 {
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

fn ratios(numerators: &[usize], denominators: &[usize]) -> Vec<Option<f64>> {
    numerators
        .iter()
        .zip(denominators)
        .map(|(&num, &den)| (den > 0).then(|| num as f64 / den as f64))
        .collect()
}
