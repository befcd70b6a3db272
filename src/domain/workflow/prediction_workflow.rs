//! The prediction workflow aggregate.

use thiserror::Error;

use super::WorkflowPhase;
use crate::domain::advisor::{advise, InterventionSuggestion};
use crate::domain::foundation::{ErrorCode, StateMachine};
use crate::domain::prediction::RiskAssessment;
use crate::domain::profile::CustomerProfile;
use crate::domain::simulation::{ExitPolicy, ScoreTicket, SimulationOutcome, SimulationSession};
use crate::domain::wizard::{WizardController, WizardIncomplete};

/// Errors raised by workflow operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("Cannot {action} while {phase}")]
    InvalidTransition {
        phase: WorkflowPhase,
        action: &'static str,
    },

    #[error(transparent)]
    WizardIncomplete(#[from] WizardIncomplete),
}

impl WorkflowError {
    pub fn invalid_transition(phase: WorkflowPhase, action: &'static str) -> Self {
        WorkflowError::InvalidTransition { phase, action }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            WorkflowError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            WorkflowError::WizardIncomplete(_) => ErrorCode::WizardIncomplete,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum WorkflowState {
    Collecting {
        wizard: WizardController,
    },
    Submitted {
        profile: CustomerProfile,
        baseline: RiskAssessment,
        committed: Option<SimulationOutcome>,
    },
    Simulating {
        session: SimulationSession,
    },
}

impl Default for WorkflowState {
    fn default() -> Self {
        WorkflowState::Collecting {
            wizard: WizardController::new(),
        }
    }
}

/// One run of the predict-and-simulate flow.
///
/// Owns the profile through its whole life: the wizard holds it while
/// collecting, the submitted state holds it next to the baseline, and the
/// simulation session takes it over from there.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PredictionWorkflow {
    state: WorkflowState,
}

impl PredictionWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts over with a fresh wizard. Nothing survives.
    pub fn reopen(&mut self) {
        self.state = WorkflowState::default();
    }

    pub fn phase(&self) -> WorkflowPhase {
        match &self.state {
            WorkflowState::Collecting { .. } => WorkflowPhase::Collecting,
            WorkflowState::Submitted { .. } => WorkflowPhase::Submitted,
            WorkflowState::Simulating { .. } => WorkflowPhase::Simulating,
        }
    }

    pub fn is_simulating(&self) -> bool {
        self.phase() == WorkflowPhase::Simulating
    }

    pub fn wizard(&self) -> Option<&WizardController> {
        match &self.state {
            WorkflowState::Collecting { wizard } => Some(wizard),
            _ => None,
        }
    }

    pub fn wizard_mut(&mut self) -> Result<&mut WizardController, WorkflowError> {
        let phase = self.phase();
        match &mut self.state {
            WorkflowState::Collecting { wizard } => Ok(wizard),
            _ => Err(WorkflowError::invalid_transition(phase, "edit the wizard")),
        }
    }

    /// The profile ready to be scored as the baseline.
    pub fn submission_profile(&self) -> Result<&CustomerProfile, WorkflowError> {
        match &self.state {
            WorkflowState::Collecting { wizard } => Ok(wizard.submission_profile()?),
            _ => Err(WorkflowError::invalid_transition(self.phase(), "submit")),
        }
    }

    /// Stores the baseline assessment for the submitted profile.
    pub fn record_baseline(&mut self, baseline: RiskAssessment) -> Result<(), WorkflowError> {
        self.submission_profile()?;
        self.check_transition(WorkflowPhase::Submitted, "record a baseline")?;

        if let WorkflowState::Collecting { wizard } = std::mem::take(&mut self.state) {
            self.state = WorkflowState::Submitted {
                profile: wizard.into_profile(),
                baseline,
                committed: None,
            };
        }
        Ok(())
    }

    /// Reports a failed submission on the wizard, which stays on its last step.
    pub fn record_submission_failure(&mut self, message: impl Into<String>) -> Result<(), WorkflowError> {
        let wizard = self.wizard_mut()?;
        wizard.record_submission_failure(message);
        Ok(())
    }

    /// Opens a simulation session seeded from the baseline pair. A strategy
    /// committed earlier survives until another one is committed.
    pub fn enter_simulation(&mut self) -> Result<&mut SimulationSession, WorkflowError> {
        self.check_transition(WorkflowPhase::Simulating, "enter simulation")?;

        if let WorkflowState::Submitted {
            profile,
            baseline,
            committed,
        } = std::mem::take(&mut self.state)
        {
            self.state = WorkflowState::Simulating {
                session: SimulationSession::start(profile, baseline).with_prior_committed(committed),
            };
        }
        self.session_mut()
    }

    /// Runs the advisor against the baseline profile and loads the plan into
    /// the simulation, entering simulation mode first when needed.
    ///
    /// Returns the ticket for scoring the planned profile.
    pub fn apply_plan(&mut self) -> Result<ScoreTicket, WorkflowError> {
        if self.phase() == WorkflowPhase::Submitted {
            self.enter_simulation()?;
        }
        let session = self.session_mut()?;
        let plan = advise(session.baseline_profile());
        Ok(session.apply_plan(plan))
    }

    pub fn session(&self) -> Option<&SimulationSession> {
        match &self.state {
            WorkflowState::Simulating { session } => Some(session),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Result<&mut SimulationSession, WorkflowError> {
        let phase = self.phase();
        match &mut self.state {
            WorkflowState::Simulating { session } => Ok(session),
            _ => Err(WorkflowError::invalid_transition(phase, "simulate")),
        }
    }

    /// Leaves simulation mode. With [`ExitPolicy::Commit`] the simulated
    /// result becomes the committed strategy; the baseline is never touched.
    pub fn exit_simulation(&mut self, policy: ExitPolicy) -> Result<(), WorkflowError> {
        if !self.is_simulating() {
            return Err(WorkflowError::invalid_transition(self.phase(), "exit simulation"));
        }
        self.check_transition(WorkflowPhase::Submitted, "exit simulation")?;

        if let WorkflowState::Simulating { session } = std::mem::take(&mut self.state) {
            let exited = session.exit_simulation(policy);
            self.state = WorkflowState::Submitted {
                profile: exited.baseline_profile,
                baseline: exited.baseline,
                committed: exited.committed,
            };
        }
        Ok(())
    }

    /// The assessment to display: the simulated one when available, else the
    /// committed strategy's, else the baseline.
    pub fn result(&self) -> Option<&RiskAssessment> {
        match &self.state {
            WorkflowState::Collecting { .. } => None,
            WorkflowState::Submitted {
                baseline,
                committed,
                ..
            } => committed
                .as_ref()
                .and_then(|outcome| outcome.assessment.as_ref())
                .or(Some(baseline)),
            WorkflowState::Simulating { session } => {
                session.current().or(Some(session.baseline()))
            }
        }
    }

    pub fn baseline(&self) -> Option<&RiskAssessment> {
        match &self.state {
            WorkflowState::Collecting { .. } => None,
            WorkflowState::Submitted { baseline, .. } => Some(baseline),
            WorkflowState::Simulating { session } => Some(session.baseline()),
        }
    }

    /// The profile the baseline was scored from.
    pub fn baseline_profile(&self) -> Option<&CustomerProfile> {
        match &self.state {
            WorkflowState::Collecting { .. } => None,
            WorkflowState::Submitted { profile, .. } => Some(profile),
            WorkflowState::Simulating { session } => Some(session.baseline_profile()),
        }
    }

    pub fn suggestions(&self) -> Option<&[InterventionSuggestion]> {
        match &self.state {
            WorkflowState::Collecting { .. } => None,
            WorkflowState::Submitted { committed, .. } => committed
                .as_ref()
                .and_then(|outcome| outcome.suggestions.as_deref()),
            WorkflowState::Simulating { session } => session.suggestions(),
        }
    }

    /// The strategy kept by the last committed simulation exit.
    pub fn committed(&self) -> Option<&SimulationOutcome> {
        match &self.state {
            WorkflowState::Submitted { committed, .. } => committed.as_ref(),
            _ => None,
        }
    }

    fn check_transition(&self, target: WorkflowPhase, action: &'static str) -> Result<(), WorkflowError> {
        let phase = self.phase();
        phase
            .transition_to(target)
            .map(|_| ())
            .map_err(|_| WorkflowError::invalid_transition(phase, action))
    }
}
