//! Wizard module - three-step customer profile collection.

mod controller;
mod step;

pub use controller::{WizardController, WizardIncomplete};
pub use step::WizardStep;
