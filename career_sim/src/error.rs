//! Error types for the career-choice simulation.

/// Errors that stop a simulation before it produces a report.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    /// A configuration parameter is out of range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// The noise distribution could not be built.
    #[error("noise distribution error: {source}")]
    Distribution {
        #[from]
        source: rand_distr::NormalError,
    },
}

impl SimulationError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
