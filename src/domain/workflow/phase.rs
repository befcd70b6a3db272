//! Workflow phase state machine.

use serde::Serialize;
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Coarse phase of a prediction workflow.
///
/// - `Collecting`: the wizard is gathering a profile
/// - `Submitted`: a baseline assessment exists
/// - `Simulating`: a what-if session runs against the baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowPhase {
    #[default]
    Collecting,
    Submitted,
    Simulating,
}

impl WorkflowPhase {
    /// True once a baseline assessment is available.
    pub fn has_baseline(&self) -> bool {
        matches!(self, Self::Submitted | Self::Simulating)
    }
}

impl fmt::Display for WorkflowPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WorkflowPhase::Collecting => "collecting",
            WorkflowPhase::Submitted => "submitted",
            WorkflowPhase::Simulating => "simulating",
        };
        f.write_str(s)
    }
}

impl StateMachine for WorkflowPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use WorkflowPhase::*;
        matches!(
            (self, target),
            // Successful submission
            (Collecting, Submitted) |
            // Enter simulation mode, or reopen the wizard
            (Submitted, Simulating) | (Submitted, Collecting) |
            // Exit simulation mode, or reopen the wizard
            (Simulating, Submitted) | (Simulating, Collecting)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use WorkflowPhase::*;
        match self {
            Collecting => vec![Submitted],
            Submitted => vec![Simulating, Collecting],
            Simulating => vec![Submitted, Collecting],
        }
    }
}
