//! Simulation engine.
//!
//! A session holds the frozen baseline pair (profile plus assessment) and a
//! working pair that is edited and re-scored. Scoring itself happens outside
//! the domain: the session hands out [`ScoreTicket`]s and is told about the
//! results through [`SimulationSession::record_score`].

mod session;

pub use session::{
    ExitPolicy, ExitedSimulation, ScoreOutcome, ScoreTicket, SimulationOutcome, SimulationSession,
};
