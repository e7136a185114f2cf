pub mod estimator;
pub mod first_choice;
pub mod switching;

pub use estimator::{argmax_first, ChoiceModel, Track};
pub use first_choice::FirstChoice;
pub use switching::SwitchDecision;
