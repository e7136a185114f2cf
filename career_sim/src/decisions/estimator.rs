use std::fmt;

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::config::{BaseScaling, RealizedPayoff, SimulationConfig};
use crate::error::SimulationError;

// ─────────────────────────────────────────────────────────────────────────────
// Track
// ─────────────────────────────────────────────────────────────────────────────

/// One of the J career tracks, stored as a zero-based position in the base
/// value vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Track(usize);

impl Track {
    pub fn from_index(index: usize) -> Self {
        Track(index)
    }

    /// Zero-based position in `base_values`.
    pub fn index(self) -> usize {
        self.0
    }

    /// 1-based track number, as used in realized payoffs.
    pub fn number(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.number())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Choice model
// ─────────────────────────────────────────────────────────────────────────────

/// Read-only parameters shared by every graduate's decisions, plus the noise
/// distribution all draws come from.
///
/// The model holds no random state: every method takes the generator it
/// should draw from, so callers decide how streams are split.
#[derive(Clone, Debug)]
pub struct ChoiceModel {
    pub base_values: Vec<f64>,
    pub switching_cost: f64,
    pub base_scaling: BaseScaling,
    pub realized_payoff: RealizedPayoff,
    noise: Normal<f64>,
}

impl ChoiceModel {
    /// Build the model from a configuration, validating it first.
    pub fn new(config: &SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        Ok(ChoiceModel {
            base_values: config.base_values.clone(),
            switching_cost: config.switching_cost,
            base_scaling: config.base_scaling,
            realized_payoff: config.realized_payoff,
            noise: Normal::new(0.0, config.sigma)?,
        })
    }

    pub fn n_tracks(&self) -> usize {
        self.base_values.len()
    }

    pub fn tracks(&self) -> impl Iterator<Item = Track> {
        (0..self.n_tracks()).map(Track::from_index)
    }

    /// One fresh Normal(0, σ) draw.
    pub fn draw_noise<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.noise.sample(rng)
    }

    /// Deterministic part of a type's estimate for a track.
    ///
    /// `graduate_type` is 1-based.
    pub fn base(&self, graduate_type: usize, track: Track) -> f64 {
        let v = self.base_values[track.index()];
        match self.base_scaling {
            BaseScaling::TypeScaled => v * graduate_type as f64,
            BaseScaling::Unscaled => v,
        }
    }

    /// Noisy expected-utility estimate `EU_j(i)`: the track's base plus the
    /// mean of `i` fresh noise draws.
    ///
    /// Never cached; each call is a new cohort's private information.
    pub fn expected_utility<R: Rng + ?Sized>(
        &self,
        graduate_type: usize,
        track: Track,
        rng: &mut R,
    ) -> f64 {
        let n = graduate_type.max(1);
        let sum: f64 = (0..n).map(|_| self.draw_noise(rng)).sum();
        self.base(graduate_type, track) + sum / n as f64
    }

    /// Fresh estimates for every track, in track order.
    pub fn estimate_all<R: Rng + ?Sized>(&self, graduate_type: usize, rng: &mut R) -> Vec<f64> {
        self.tracks()
            .map(|track| self.expected_utility(graduate_type, track, rng))
            .collect()
    }

    /// Payoff actually received on `track`, before any switching cost.
    pub(crate) fn realized<R: Rng + ?Sized>(
        &self,
        track: Track,
        expected_utility: f64,
        rng: &mut R,
    ) -> f64 {
        let anchor = match self.realized_payoff {
            RealizedPayoff::TrackNumber => track.number() as f64,
            RealizedPayoff::ExpectedUtility => expected_utility,
        };
        anchor + self.draw_noise(rng)
    }

    /// Large-sample benchmark for each track: `v_j` plus the mean of
    /// `n_draws` noise draws.
    pub fn population_expected_utility<R: Rng + ?Sized>(
        &self,
        n_draws: usize,
        rng: &mut R,
    ) -> Vec<f64> {
        let n = n_draws.max(1);
        self.base_values
            .iter()
            .map(|v| {
                let sum: f64 = (0..n).map(|_| self.draw_noise(rng)).sum();
                v + sum / n as f64
            })
            .collect()
    }
}

/// Position of the largest value; ties go to the lowest position.
///
/// Returns `None` only for an empty slice.
pub fn argmax_first(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, &value) in values.iter().enumerate() {
        match best {
            Some((_, top)) if value <= top => {}
            _ => best = Some((idx, value)),
        }
    }
    best.map(|(idx, _)| idx)
}
