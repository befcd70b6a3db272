//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PredictionGateway` - Scores a customer profile
//! - `DashboardSource` - Aggregate stats, feature importance and history

mod dashboard_source;
mod prediction_gateway;

pub use dashboard_source::{DashboardError, DashboardSource};
pub use prediction_gateway::{GatewayError, GatewayErrorKind, PredictionGateway};
