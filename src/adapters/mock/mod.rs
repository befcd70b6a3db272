//! Scripted test doubles for the ports.

mod mock_dashboard;
mod mock_gateway;

pub use mock_dashboard::MockDashboardSource;
pub use mock_gateway::{heuristic_assessment, MockPredictionGateway, ScoreFn};
