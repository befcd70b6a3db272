//! PredictionWorkflowHandler - Drives one predict-and-simulate run.
//!
//! Owns the workflow aggregate and talks to the scoring service. Submission
//! failures surface to the caller; re-score failures during simulation are
//! logged and reported as a status, leaving the last good assessment shown.
//!
//! Re-scoring is split into three steps so several edits can be in flight at
//! once: `begin_*` edits the working profile and issues a ticket, [`score`]
//! runs the ticket against the service without borrowing the handler, and
//! [`complete`] applies the answer unless a newer one already landed.
//!
//! [`score`]: PredictionWorkflowHandler::score
//! [`complete`]: PredictionWorkflowHandler::complete

use std::future::Future;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::advisor::InterventionSuggestion;
use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::prediction::RiskAssessment;
use crate::domain::profile::{FieldChange, NumericInputPolicy, ProfileField};
use crate::domain::simulation::{ExitPolicy, ScoreOutcome, ScoreTicket};
use crate::domain::wizard::WizardController;
use crate::domain::workflow::{PredictionWorkflow, WorkflowError};
use crate::ports::{GatewayError, PredictionGateway};

/// Errors surfaced by the prediction handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl PredictionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            PredictionError::Validation(err) => err.code(),
            PredictionError::Workflow(err) => err.code(),
            PredictionError::Gateway(err) => err.code(),
        }
    }
}

/// What happened to a simulation re-score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RescoreStatus {
    /// The new assessment is now the current one.
    Applied(RiskAssessment),
    /// A newer request already landed; this response was dropped.
    Stale,
    /// The service failed; the previous assessment is kept.
    Failed(GatewayError),
}

impl RescoreStatus {
    pub fn is_applied(&self) -> bool {
        matches!(self, RescoreStatus::Applied(_))
    }
}

/// A ticket paired with the scoring service's answer, ready to be completed.
#[derive(Debug, Clone)]
pub struct ScoredTicket {
    ticket: ScoreTicket,
    result: Result<RiskAssessment, GatewayError>,
}

impl ScoredTicket {
    pub fn ticket(&self) -> &ScoreTicket {
        &self.ticket
    }

    pub fn result(&self) -> &Result<RiskAssessment, GatewayError> {
        &self.result
    }
}

/// The advisor's suggestions and what happened to the planned profile's score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPlan {
    pub suggestions: Vec<InterventionSuggestion>,
    pub status: RescoreStatus,
}

/// Handler for the wizard, baseline prediction and what-if simulation.
pub struct PredictionWorkflowHandler {
    gateway: Arc<dyn PredictionGateway>,
    numeric_input: NumericInputPolicy,
    workflow: PredictionWorkflow,
}

impl PredictionWorkflowHandler {
    pub fn new(gateway: Arc<dyn PredictionGateway>) -> Self {
        Self {
            gateway,
            numeric_input: NumericInputPolicy::default(),
            workflow: PredictionWorkflow::new(),
        }
    }

    /// Sets how malformed numeric input is treated.
    pub fn with_numeric_input(mut self, policy: NumericInputPolicy) -> Self {
        self.numeric_input = policy;
        self
    }

    pub fn workflow(&self) -> &PredictionWorkflow {
        &self.workflow
    }

    pub fn numeric_input(&self) -> NumericInputPolicy {
        self.numeric_input
    }

    /// The wizard, while the profile is still being collected.
    pub fn wizard_mut(&mut self) -> Result<&mut WizardController, PredictionError> {
        Ok(self.workflow.wizard_mut()?)
    }

    /// Applies raw operator input to the wizard's profile.
    pub fn update_field(&mut self, field: ProfileField, raw: &str) -> Result<(), PredictionError> {
        let policy = self.numeric_input;
        self.workflow.wizard_mut()?.update_raw(field, raw, policy)?;
        Ok(())
    }

    /// Scores the wizard's profile and records it as the baseline.
    ///
    /// On failure the wizard stays on its last step with the data intact and
    /// the failure message recorded.
    pub async fn submit(&mut self) -> Result<RiskAssessment, PredictionError> {
        let profile = self.workflow.submission_profile()?.clone();
        if let Ok(wizard) = self.workflow.wizard_mut() {
            wizard.clear_submission_error();
        }

        match self.gateway.score(&profile).await {
            Ok(assessment) => {
                self.workflow.record_baseline(assessment.clone())?;
                info!(
                    risk_score = assessment.risk_score().value(),
                    churn = assessment.churn_prediction(),
                    "Baseline prediction recorded"
                );
                Ok(assessment)
            }
            Err(err) => {
                warn!(error = %err, status = ?err.kind(), "Prediction submission failed");
                self.workflow.record_submission_failure(err.to_string())?;
                Err(err.into())
            }
        }
    }

    /// Opens a simulation seeded from the baseline.
    pub fn enter_simulation(&mut self) -> Result<(), PredictionError> {
        let session = self.workflow.enter_simulation()?;
        info!(simulation_id = %session.id(), "Simulation started");
        Ok(())
    }

    /// Runs the advisor and scores the planned profile.
    ///
    /// The suggestions are returned even when the trailing score fails; the
    /// failure is reported in [`GeneratedPlan::status`].
    pub async fn generate_plan(&mut self) -> Result<GeneratedPlan, PredictionError> {
        let ticket = self.workflow.apply_plan()?;
        let suggestions = self
            .workflow
            .suggestions()
            .map(<[InterventionSuggestion]>::to_vec)
            .unwrap_or_default();

        info!(
            simulation_id = %ticket.session_id(),
            suggestions = suggestions.len(),
            "AI plan applied"
        );

        let scored = self.score(ticket).await;
        let status = self.complete(scored);
        Ok(GeneratedPlan { suggestions, status })
    }

    /// Applies one what-if edit and issues a ticket for scoring it.
    pub fn begin_change(&mut self, change: FieldChange) -> Result<ScoreTicket, PredictionError> {
        Ok(self.workflow.session_mut()?.mutate(change)?)
    }

    /// Parses raw operator input, then behaves like [`Self::begin_change`].
    pub fn begin_raw(&mut self, field: ProfileField, raw: &str) -> Result<ScoreTicket, PredictionError> {
        let change = FieldChange::parse(field, raw, self.numeric_input)?;
        self.begin_change(change)
    }

    /// Issues a ticket for scoring the unchanged working profile again.
    pub fn begin_retry(&mut self) -> Result<ScoreTicket, PredictionError> {
        Ok(self.workflow.session_mut()?.rescore_ticket())
    }

    /// Sends a ticket's profile to the scoring service.
    ///
    /// The returned future does not borrow the handler, so tickets from
    /// successive edits can be scored concurrently.
    pub fn score(&self, ticket: ScoreTicket) -> impl Future<Output = ScoredTicket> + Send + 'static {
        let gateway = Arc::clone(&self.gateway);
        async move {
            debug!(
                simulation_id = %ticket.session_id(),
                sequence = ticket.sequence(),
                "Scoring simulated profile"
            );
            let result = gateway.score(ticket.profile()).await;
            ScoredTicket { ticket, result }
        }
    }

    /// Applies a scored ticket to the simulation.
    ///
    /// Failures keep the previous assessment. Answers for tickets older than
    /// the last applied one, or for a session that has since been exited,
    /// are dropped as stale.
    pub fn complete(&mut self, scored: ScoredTicket) -> RescoreStatus {
        let ScoredTicket { ticket, result } = scored;

        let assessment = match result {
            Ok(assessment) => assessment,
            Err(err) => {
                warn!(
                    simulation_id = %ticket.session_id(),
                    sequence = ticket.sequence(),
                    error = %err,
                    "Re-score failed, keeping previous assessment"
                );
                return RescoreStatus::Failed(err);
            }
        };

        let Ok(session) = self.workflow.session_mut() else {
            debug!(simulation_id = %ticket.session_id(), "Dropped score for closed simulation");
            return RescoreStatus::Stale;
        };

        match session.record_score(&ticket, assessment.clone()) {
            ScoreOutcome::Applied => {
                info!(
                    simulation_id = %session.id(),
                    risk_score = assessment.risk_score().value(),
                    delta = session.delta().map(|delta| delta.value()),
                    "Simulation re-scored"
                );
                RescoreStatus::Applied(assessment)
            }
            ScoreOutcome::Stale => {
                debug!(
                    simulation_id = %ticket.session_id(),
                    sequence = ticket.sequence(),
                    "Dropped stale score"
                );
                RescoreStatus::Stale
            }
        }
    }

    /// Applies one what-if edit and re-scores the working profile.
    pub async fn apply_change(&mut self, change: FieldChange) -> Result<RescoreStatus, PredictionError> {
        let ticket = self.begin_change(change)?;
        let scored = self.score(ticket).await;
        Ok(self.complete(scored))
    }

    /// Parses raw operator input, then behaves like [`Self::apply_change`].
    pub async fn apply_raw(&mut self, field: ProfileField, raw: &str) -> Result<RescoreStatus, PredictionError> {
        let ticket = self.begin_raw(field, raw)?;
        let scored = self.score(ticket).await;
        Ok(self.complete(scored))
    }

    /// Re-scores the unchanged working profile after a failure.
    pub async fn retry_scoring(&mut self) -> Result<RescoreStatus, PredictionError> {
        let ticket = self.begin_retry()?;
        let scored = self.score(ticket).await;
        Ok(self.complete(scored))
    }

    pub fn exit_simulation(&mut self, policy: ExitPolicy) -> Result<(), PredictionError> {
        let simulation_id = self.workflow.session().map(|session| session.id());
        self.workflow.exit_simulation(policy)?;
        if let Some(simulation_id) = simulation_id {
            info!(%simulation_id, ?policy, "Simulation exited");
        }
        Ok(())
    }

    /// Discards everything and starts a fresh wizard.
    pub fn reopen(&mut self) {
        self.workflow.reopen();
        info!(phase = %self.workflow.phase(), "Workflow reopened");
    }
}
