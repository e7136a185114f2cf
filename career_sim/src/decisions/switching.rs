use rand::Rng;

use super::estimator::{argmax_first, ChoiceModel, Track};
use super::first_choice::FirstChoice;

/// Outcome of the second-year re-evaluation.
///
/// When the graduate stays, `track` is the original track and both
/// utilities carry the realized first-year payoff forward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwitchDecision {
    pub switched: bool,
    pub track: Track,
    pub expected_utility: f64,
    pub realized_utility: f64,
}

impl ChoiceModel {
    /// Compare the realized first-year payoff against fresh estimates of the
    /// other tracks, each net of the switching cost.
    ///
    /// Switches only if the best alternative strictly beats the realized
    /// payoff; among equal alternatives the lowest-numbered track wins.
    pub fn switch_decision<R: Rng + ?Sized>(
        &self,
        graduate_type: usize,
        first: &FirstChoice,
        rng: &mut R,
    ) -> SwitchDecision {
        let alternatives: Vec<Track> = self.tracks().filter(|t| *t != first.track).collect();
        let net: Vec<f64> = alternatives
            .iter()
            .map(|&t| self.expected_utility(graduate_type, t, rng) - self.switching_cost)
            .collect();

        let stay = SwitchDecision {
            switched: false,
            track: first.track,
            expected_utility: first.realized_utility,
            realized_utility: first.realized_utility,
        };

        let Some(best) = argmax_first(&net) else {
            // single-track model: nowhere to go
            return stay;
        };
        if net[best] <= first.realized_utility {
            return stay;
        }

        let track = alternatives[best];
        let expected_utility = net[best];
        let realized_utility =
            self.realized(track, expected_utility + self.switching_cost, rng) - self.switching_cost;

        SwitchDecision {
            switched: true,
            track,
            expected_utility,
            realized_utility,
        }
    }
}
