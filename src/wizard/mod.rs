//! The wizard — linear step navigation, session state, and the controller
//! that drives one backend call sequence per forward transition.

pub mod controller;
pub mod state;
pub mod step;

pub use controller::{IntakeOutcome, NullProgress, ProgressSink, WizardController};
pub use state::WizardState;
pub use step::{WizardStep, status_phrase};
