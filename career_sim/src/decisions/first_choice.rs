use rand::Rng;

use super::estimator::{argmax_first, ChoiceModel, Track};

/// A graduate's first-year choice in one trial.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FirstChoice {
    pub track: Track,
    pub expected_utility: f64,
    pub realized_utility: f64,
}

impl ChoiceModel {
    /// Pick the track with the highest fresh estimate and draw its payoff.
    ///
    /// Ties go to the lowest-numbered track. The realized payoff gets its own
    /// noise draw, independent of the estimates.
    pub fn first_choice<R: Rng + ?Sized>(&self, graduate_type: usize, rng: &mut R) -> FirstChoice {
        let estimates = self.estimate_all(graduate_type, rng);
        // Validated configs always have at least one track.
        let best = argmax_first(&estimates).unwrap_or(0);
        let track = Track::from_index(best);
        let expected_utility = estimates[best];
        let realized_utility = self.realized(track, expected_utility, rng);

        FirstChoice {
            track,
            expected_utility,
            realized_utility,
        }
    }
}
