//! Prediction workflow - the explicit state machine tying the wizard, the
//! baseline assessment and simulation mode together.

mod phase;
mod prediction_workflow;

pub use phase::WorkflowPhase;
pub use prediction_workflow::{PredictionWorkflow, WorkflowError};
