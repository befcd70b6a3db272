//! Prediction command handlers.
//!
//! Wizard submission, what-if simulation and the AI retention plan.

mod workflow_handler;

pub use workflow_handler::{
    GeneratedPlan, PredictionError, PredictionWorkflowHandler, RescoreStatus, ScoredTicket,
};
