//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod dashboard;
pub mod prediction;

pub use dashboard::{
    DashboardHandler, DashboardSection, DashboardView, ExportError, ExportHistoryHandler,
};
pub use prediction::{
    GeneratedPlan, PredictionError, PredictionWorkflowHandler, RescoreStatus, ScoredTicket,
};
