//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `retain_api` - HTTP client for the RetainAI scoring service
//! - `mock` - Scripted implementations for tests and offline runs

pub mod mock;
pub mod retain_api;

pub use mock::{MockDashboardSource, MockPredictionGateway};
pub use retain_api::{HttpDashboardSource, HttpPredictionGateway, RetainApiConfig};
