//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types that form the
//! vocabulary of the RetainAI domain.

mod errors;
mod ids;
mod risk_score;
mod state_machine;

pub use errors::{ErrorCode, ValidationError};
pub use ids::SimulationId;
pub use risk_score::RiskScore;
pub use state_machine::StateMachine;
