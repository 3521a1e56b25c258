//! Wizard mode: a strict, one-field-per-turn form driven by the caller.

mod controller;
mod step;

pub use controller::{WizardController, WizardError, WizardOutcome, WizardTurn};
pub use step::WizardStep;
