//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! The prediction handler owns the mutable workflow; dashboard handlers are
//! read-only queries.

pub mod handlers;

pub use handlers::{
    // Prediction
    GeneratedPlan, PredictionError, PredictionWorkflowHandler, RescoreStatus, ScoredTicket,
    // Dashboard
    DashboardHandler, DashboardSection, DashboardView, ExportError, ExportHistoryHandler,
};
