//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (errors, ids, risk score, state machine)
//! - `profile` - Customer profile value object and field edits
//! - `prediction` - Risk assessments returned by the scoring service
//! - `wizard` - Three-step profile collection
//! - `simulation` - What-if sessions against a frozen baseline
//! - `advisor` - Heuristic retention plan
//! - `workflow` - State machine for one predict-and-simulate run
//! - `dashboard` - Filters, pagination and dashboard read models

pub mod advisor;
pub mod dashboard;
pub mod foundation;
pub mod prediction;
pub mod profile;
pub mod simulation;
pub mod wizard;
pub mod workflow;
