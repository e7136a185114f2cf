//! Configuration parameters for the career-choice simulation.
//!
//! Every field has a default matching the reference parameterisation
//! (N=10 types, K=10,000 trials, σ=2, v=[1,2,3], c=1). A config can also be
//! read from YAML, where any omitted field keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml { source: serde_yml::Error },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// How a track's base value enters a type's expected-utility estimate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseScaling {
    /// `base_j(i) = v_j * i`.
    #[default]
    TypeScaled,
    /// `base_j(i) = v_j`.
    Unscaled,
}

/// What a realized payoff is built from before the fresh noise term is added.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RealizedPayoff {
    /// The 1-based number of the chosen track.
    #[default]
    TrackNumber,
    /// The expected utility the track was chosen on.
    ExpectedUtility,
}

/// Configuration parameters for the career-choice simulation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    // Population
    pub n_types: usize,
    pub n_trials: usize,

    // Tracks
    pub base_values: Vec<f64>,
    pub switching_cost: f64,

    // Noise
    pub sigma: f64,
    pub seed: Option<u64>,

    // Model variants
    pub base_scaling: BaseScaling,
    pub realized_payoff: RealizedPayoff,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            n_types: 10,
            n_trials: 10_000,

            base_values: vec![1.0, 2.0, 3.0],
            switching_cost: 1.0,

            sigma: 2.0,
            seed: None,

            base_scaling: BaseScaling::TypeScaled,
            realized_payoff: RealizedPayoff::TrackNumber,
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Number of career tracks (J).
    pub fn n_tracks(&self) -> usize {
        self.base_values.len()
    }

    /// Check every parameter before any draw is made.
    ///
    /// σ = 0 is accepted and disables noise entirely.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.n_types == 0 {
            return Err(SimulationError::invalid("n_types", "must be at least 1"));
        }
        if self.n_trials == 0 {
            return Err(SimulationError::invalid("n_trials", "must be at least 1"));
        }
        if !self.sigma.is_finite() || self.sigma < 0.0 {
            return Err(SimulationError::invalid(
                "sigma",
                format!("must be finite and non-negative, got {}", self.sigma),
            ));
        }
        if self.base_values.is_empty() {
            return Err(SimulationError::invalid(
                "base_values",
                "at least one track is required",
            ));
        }
        if let Some(bad) = self.base_values.iter().find(|v| !v.is_finite()) {
            return Err(SimulationError::invalid(
                "base_values",
                format!("every base value must be finite, got {bad}"),
            ));
        }
        if !self.switching_cost.is_finite() || self.switching_cost < 0.0 {
            return Err(SimulationError::invalid(
                "switching_cost",
                format!("must be finite and non-negative, got {}", self.switching_cost),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_parameters() {
        let cfg = SimulationConfig::default();
        assert_eq!(cfg.n_types, 10);
        assert_eq!(cfg.n_trials, 10_000);
        assert_eq!(cfg.n_tracks(), 3);
        assert_eq!(cfg.base_values, vec![1.0, 2.0, 3.0]);
        assert_eq!(cfg.sigma, 2.0);
        assert_eq!(cfg.switching_cost, 1.0);
        assert!(cfg.seed.is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let cfg = SimulationConfig::parse("n_trials: 500\nseed: 7\nsigma: 1.5\n").unwrap();
        assert_eq!(cfg.n_trials, 500);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.sigma, 1.5);
        assert_eq!(cfg.n_types, 10);
        assert_eq!(cfg.realized_payoff, RealizedPayoff::TrackNumber);
    }

    #[test]
    fn yaml_selects_model_variants() {
        let cfg = SimulationConfig::parse(
            "base_scaling: unscaled\nrealized_payoff: expected_utility\n",
        )
        .unwrap();
        assert_eq!(cfg.base_scaling, BaseScaling::Unscaled);
        assert_eq!(cfg.realized_payoff, RealizedPayoff::ExpectedUtility);
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        let err = SimulationConfig::parse("n_trials: [not, a, number]").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SimulationConfig::from_file(Path::new("/nonexistent/career.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    fn assert_rejects(cfg: SimulationConfig, field: &str) {
        match cfg.validate() {
            Err(SimulationError::InvalidParameter { name, .. }) => assert_eq!(name, field),
            other => panic!("expected InvalidParameter for {field}, got {other:?}"),
        }
    }

    #[test]
    fn validation_rejects_each_bad_parameter() {
        let base = SimulationConfig::default();
        assert_rejects(SimulationConfig { n_types: 0, ..base.clone() }, "n_types");
        assert_rejects(SimulationConfig { n_trials: 0, ..base.clone() }, "n_trials");
        assert_rejects(SimulationConfig { sigma: -1.0, ..base.clone() }, "sigma");
        assert_rejects(SimulationConfig { sigma: f64::NAN, ..base.clone() }, "sigma");
        assert_rejects(
            SimulationConfig { base_values: vec![], ..base.clone() },
            "base_values",
        );
        assert_rejects(
            SimulationConfig { base_values: vec![1.0, f64::INFINITY], ..base.clone() },
            "base_values",
        );
        assert_rejects(
            SimulationConfig { switching_cost: -0.5, ..base },
            "switching_cost",
        );
    }

    #[test]
    fn zero_sigma_is_accepted() {
        let cfg = SimulationConfig { sigma: 0.0, ..SimulationConfig::default() };
        assert!(cfg.validate().is_ok());
    }
}
