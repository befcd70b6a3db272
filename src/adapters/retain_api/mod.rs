//! RetainAI HTTP adapters.
//!
//! Talk to the FastAPI scoring service: profile scoring, dashboard stats,
//! feature importance, prediction history and CSV export.

mod config;
mod dashboard_client;
pub mod dto;
mod prediction_gateway;
mod transport;

pub use config::RetainApiConfig;
pub use dashboard_client::HttpDashboardSource;
pub use prediction_gateway::HttpPredictionGateway;
