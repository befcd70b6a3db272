//! State machine trait for phase enums.
//!
//! Gives phase enums (such as the prediction workflow phase) a single place to
//! declare legal transitions, so callers can validate a move before mutating
//! any state.

use super::ValidationError;

/// Trait for enums that represent state machine phases.
///
/// Implementors define valid transitions and get validated transition
/// methods for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for WorkflowPhase {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!((self, target), (Collecting, Submitted) | (Submitted, Simulating))
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Collecting => vec![Submitted],
///             Submitted => vec![Simulating],
///             Simulating => vec![],
///         }
///     }
/// }
///
/// let next = WorkflowPhase::Collecting.transition_to(WorkflowPhase::Submitted)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Request {
        Idle,
        InFlight,
        Settled,
    }

    impl StateMachine for Request {
        fn can_transition_to(&self, target: &Self) -> bool {
            use Request::*;
            matches!((self, target), (Idle, InFlight) | (InFlight, Settled))
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use Request::*;
            match self {
                Idle => vec![InFlight],
                InFlight => vec![Settled],
                Settled => vec![],
            }
        }
    }

    #[test]
    fn transition_to_succeeds_for_valid_transition() {
        assert_eq!(Request::Idle.transition_to(Request::InFlight), Ok(Request::InFlight));
    }

    #[test]
    fn transition_to_fails_for_skipped_state() {
        let err = Request::Idle.transition_to(Request::Settled).unwrap_err();
        assert!(err.to_string().contains("Cannot transition from Idle to Settled"));
    }

    #[test]
    fn settled_is_terminal() {
        assert!(Request::Settled.is_terminal());
        assert!(!Request::Idle.is_terminal());
    }
}
