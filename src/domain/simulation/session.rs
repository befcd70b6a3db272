//! Simulation session - what-if exploration against a frozen baseline.

use serde::Serialize;

use crate::domain::advisor::{AdvisorPlan, InterventionSuggestion};
use crate::domain::foundation::{SimulationId, ValidationError};
use crate::domain::prediction::{RiskAssessment, RiskDelta};
use crate::domain::profile::{CustomerProfile, FieldChange};

/// A request to score one snapshot of the working profile.
///
/// Tickets are numbered in issue order. Only a ticket newer than the last
/// applied one may replace the current assessment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTicket {
    session_id: SimulationId,
    sequence: u64,
    profile: CustomerProfile,
}

impl ScoreTicket {
    pub fn session_id(&self) -> SimulationId {
        self.session_id
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// The profile to send to the scoring service.
    pub fn profile(&self) -> &CustomerProfile {
        &self.profile
    }
}

/// What happened to a completed score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreOutcome {
    /// The assessment is now the current one.
    Applied,
    /// A newer ticket was already applied, or the ticket belongs to another
    /// session. The assessment was dropped.
    Stale,
}

/// What to do with the simulated result when leaving simulation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitPolicy {
    /// Keep the simulated result as the committed strategy.
    Commit,
    /// Throw the simulated result away.
    #[default]
    Discard,
}

/// Snapshot of a session at the moment it was exited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationOutcome {
    pub profile: CustomerProfile,
    pub assessment: Option<RiskAssessment>,
    pub suggestions: Option<Vec<InterventionSuggestion>>,
    pub delta: Option<RiskDelta>,
}

/// Everything left over once a session is torn down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitedSimulation {
    pub baseline_profile: CustomerProfile,
    pub baseline: RiskAssessment,
    /// This session's outcome on [`ExitPolicy::Commit`], the earlier
    /// committed strategy (if any) on [`ExitPolicy::Discard`].
    pub committed: Option<SimulationOutcome>,
}

/// Working copy of a scored profile that can be edited and re-scored while
/// the original assessment stays frozen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationSession {
    id: SimulationId,
    baseline_profile: CustomerProfile,
    baseline: RiskAssessment,
    working: CustomerProfile,
    current: Option<RiskAssessment>,
    suggestions: Option<Vec<InterventionSuggestion>>,
    /// Strategy committed by an earlier session, kept on discard.
    prior_committed: Option<SimulationOutcome>,
    last_issued: u64,
    last_applied: u64,
}

impl SimulationSession {
    /// Starts a session whose working pair equals the baseline pair.
    pub fn start(baseline_profile: CustomerProfile, baseline: RiskAssessment) -> Self {
        Self {
            id: SimulationId::new(),
            working: baseline_profile.clone(),
            current: Some(baseline.clone()),
            baseline_profile,
            baseline,
            suggestions: None,
            prior_committed: None,
            last_issued: 0,
            last_applied: 0,
        }
    }

    /// Carries a previously committed strategy through this session.
    pub fn with_prior_committed(mut self, committed: Option<SimulationOutcome>) -> Self {
        self.prior_committed = committed;
        self
    }

    pub fn id(&self) -> SimulationId {
        self.id
    }

    pub fn baseline_profile(&self) -> &CustomerProfile {
        &self.baseline_profile
    }

    pub fn baseline(&self) -> &RiskAssessment {
        &self.baseline
    }

    pub fn working_profile(&self) -> &CustomerProfile {
        &self.working
    }

    /// Latest applied simulated assessment. `None` only after a plan whose
    /// score has not arrived yet.
    pub fn current(&self) -> Option<&RiskAssessment> {
        self.current.as_ref()
    }

    pub fn suggestions(&self) -> Option<&[InterventionSuggestion]> {
        self.suggestions.as_deref()
    }

    /// `baseline - current`, positive when the simulated risk is lower.
    pub fn delta(&self) -> Option<RiskDelta> {
        self.current
            .as_ref()
            .map(|current| current.delta_from(&self.baseline))
    }

    /// Edits the working profile and issues a ticket to score it.
    ///
    /// An invalid change leaves the working profile as it was.
    pub fn mutate(&mut self, change: FieldChange) -> Result<ScoreTicket, ValidationError> {
        self.working = self.working.apply(change)?;
        Ok(self.issue_ticket())
    }

    /// Replaces the working profile with the plan's profile and shows its
    /// suggestions. The current assessment is cleared until the returned
    /// ticket is scored.
    pub fn apply_plan(&mut self, plan: AdvisorPlan) -> ScoreTicket {
        self.working = plan.profile;
        self.suggestions = Some(plan.suggestions);
        self.current = None;
        self.issue_ticket()
    }

    /// Ticket for scoring the unchanged working profile again.
    pub fn rescore_ticket(&mut self) -> ScoreTicket {
        self.issue_ticket()
    }

    /// Applies a completed score unless a newer one already landed.
    pub fn record_score(&mut self, ticket: &ScoreTicket, assessment: RiskAssessment) -> ScoreOutcome {
        if ticket.session_id != self.id || ticket.sequence <= self.last_applied {
            return ScoreOutcome::Stale;
        }
        self.last_applied = ticket.sequence;
        self.current = Some(assessment);
        ScoreOutcome::Applied
    }

    /// Sequence number of the most recently issued ticket.
    pub fn last_issued(&self) -> u64 {
        self.last_issued
    }

    /// Snapshot of the working state.
    pub fn outcome(&self) -> SimulationOutcome {
        SimulationOutcome {
            profile: self.working.clone(),
            assessment: self.current.clone(),
            suggestions: self.suggestions.clone(),
            delta: self.delta(),
        }
    }

    /// Tears the session down. The baseline pair is handed back unchanged.
    ///
    /// Discarding hands back whatever strategy was committed before this
    /// session started.
    pub fn exit_simulation(self, policy: ExitPolicy) -> ExitedSimulation {
        let committed = match policy {
            ExitPolicy::Commit => Some(self.outcome()),
            ExitPolicy::Discard => self.prior_committed,
        };
        ExitedSimulation {
            baseline_profile: self.baseline_profile,
            baseline: self.baseline,
            committed,
        }
    }

    fn issue_ticket(&mut self) -> ScoreTicket {
        self.last_issued += 1;
        ScoreTicket {
            session_id: self.id,
            sequence: self.last_issued,
            profile: self.working.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::advisor::advise;
    use crate::domain::foundation::RiskScore;
    use crate::domain::profile::Contract;

    fn assessment(score: u8) -> RiskAssessment {
        RiskAssessment::new(score >= 50, RiskScore::new(score), None)
    }

    fn session() -> SimulationSession {
        SimulationSession::start(CustomerProfile::default(), assessment(72))
    }

    mod starting {
        use super::*;

        #[test]
        fn working_pair_starts_at_baseline() {
            let session = session();
            assert_eq!(session.working_profile(), session.baseline_profile());
            assert_eq!(session.current(), Some(&assessment(72)));
            assert_eq!(session.delta().map(|d| d.value()), Some(0));
            assert!(session.suggestions().is_none());
        }
    }

    mod mutating {
        use super::*;

        #[test]
        fn mutate_edits_working_profile_only() {
            let mut session = session();
            let ticket = session.mutate(FieldChange::Contract(Contract::TwoYear)).unwrap();

            assert_eq!(ticket.sequence(), 1);
            assert_eq!(ticket.profile().contract(), Contract::TwoYear);
            assert_eq!(session.working_profile().contract(), Contract::TwoYear);
            assert_eq!(session.baseline_profile().contract(), Contract::MonthToMonth);
        }

        #[test]
        fn invalid_change_leaves_working_profile() {
            let mut session = session();
            assert!(session.mutate(FieldChange::Tenure(0)).is_err());
            assert_eq!(session.working_profile(), &CustomerProfile::default());
            assert_eq!(session.last_issued(), 0);
        }

        #[test]
        fn applied_score_updates_delta() {
            let mut session = session();
            let ticket = session.mutate(FieldChange::Contract(Contract::TwoYear)).unwrap();

            assert_eq!(session.record_score(&ticket, assessment(45)), ScoreOutcome::Applied);
            assert_eq!(session.delta().map(|d| d.value()), Some(27));
            assert_eq!(session.baseline(), &assessment(72));
        }

        #[test]
        fn unscored_edit_keeps_previous_assessment() {
            let mut session = session();
            let first = session.mutate(FieldChange::Contract(Contract::OneYear)).unwrap();
            session.record_score(&first, assessment(60));

            session.mutate(FieldChange::Contract(Contract::TwoYear)).unwrap();

            assert_eq!(session.current(), Some(&assessment(60)));
            assert_eq!(session.working_profile().contract(), Contract::TwoYear);
        }
    }

    mod ordering {
        use super::*;

        #[test]
        fn out_of_order_response_is_stale() {
            let mut session = session();
            let older = session.mutate(FieldChange::Contract(Contract::OneYear)).unwrap();
            let newer = session.mutate(FieldChange::Contract(Contract::TwoYear)).unwrap();

            assert_eq!(session.record_score(&newer, assessment(30)), ScoreOutcome::Applied);
            assert_eq!(session.record_score(&older, assessment(55)), ScoreOutcome::Stale);
            assert_eq!(session.current(), Some(&assessment(30)));
        }

        #[test]
        fn in_order_responses_both_apply() {
            let mut session = session();
            let older = session.mutate(FieldChange::Contract(Contract::OneYear)).unwrap();
            let newer = session.mutate(FieldChange::Contract(Contract::TwoYear)).unwrap();

            assert_eq!(session.record_score(&older, assessment(55)), ScoreOutcome::Applied);
            assert_eq!(session.record_score(&newer, assessment(30)), ScoreOutcome::Applied);
            assert_eq!(session.current(), Some(&assessment(30)));
        }

        #[test]
        fn ticket_from_another_session_is_stale() {
            let mut first = session();
            let mut second = session();
            let foreign = first.rescore_ticket();
            second.rescore_ticket();

            assert_eq!(second.record_score(&foreign, assessment(10)), ScoreOutcome::Stale);
        }
    }

    mod plans {
        use super::*;

        #[test]
        fn plan_clears_current_until_scored() {
            let mut session = session();
            let plan = advise(session.baseline_profile());
            let ticket = session.apply_plan(plan.clone());

            assert!(session.current().is_none());
            assert!(session.delta().is_none());
            assert_eq!(session.working_profile(), &plan.profile);
            assert_eq!(session.suggestions().map(|s| s.len()), Some(plan.suggestions.len()));

            session.record_score(&ticket, assessment(38));
            assert_eq!(session.delta().map(|d| d.value()), Some(34));
        }

        #[test]
        fn rescore_ticket_carries_unchanged_profile() {
            let mut session = session();
            let plan = advise(session.baseline_profile());
            session.apply_plan(plan.clone());

            let retry = session.rescore_ticket();
            assert_eq!(retry.profile(), &plan.profile);
            assert_eq!(retry.sequence(), 2);
        }
    }

    mod exiting {
        use super::*;

        #[test]
        fn commit_keeps_outcome() {
            let mut session = session();
            let ticket = session.mutate(FieldChange::Contract(Contract::TwoYear)).unwrap();
            session.record_score(&ticket, assessment(45));

            let exited = session.exit_simulation(ExitPolicy::Commit);

            assert_eq!(exited.baseline, assessment(72));
            assert_eq!(exited.baseline_profile, CustomerProfile::default());
            let committed = exited.committed.unwrap();
            assert_eq!(committed.profile.contract(), Contract::TwoYear);
            assert_eq!(committed.delta.map(|d| d.value()), Some(27));
        }

        #[test]
        fn discard_drops_outcome() {
            let mut session = session();
            session.mutate(FieldChange::Contract(Contract::TwoYear)).unwrap();

            let exited = session.exit_simulation(ExitPolicy::Discard);

            assert!(exited.committed.is_none());
            assert_eq!(exited.baseline, assessment(72));
        }

        #[test]
        fn discard_hands_back_prior_commit() {
            let mut first = session();
            let ticket = first.mutate(FieldChange::Contract(Contract::TwoYear)).unwrap();
            first.record_score(&ticket, assessment(45));
            let prior = first.exit_simulation(ExitPolicy::Commit).committed;

            let mut second = session().with_prior_committed(prior.clone());
            second.mutate(FieldChange::Contract(Contract::OneYear)).unwrap();
            let exited = second.exit_simulation(ExitPolicy::Discard);

            assert_eq!(exited.committed, prior);
            assert_eq!(
                exited.committed.and_then(|c| c.assessment),
                Some(assessment(45))
            );
        }

        #[test]
        fn commit_replaces_prior_commit() {
            let mut first = session();
            let ticket = first.mutate(FieldChange::Contract(Contract::TwoYear)).unwrap();
            first.record_score(&ticket, assessment(45));
            let prior = first.exit_simulation(ExitPolicy::Commit).committed;

            let mut second = session().with_prior_committed(prior);
            let ticket = second.mutate(FieldChange::Contract(Contract::OneYear)).unwrap();
            second.record_score(&ticket, assessment(55));
            let exited = second.exit_simulation(ExitPolicy::Commit);

            let committed = exited.committed.unwrap();
            assert_eq!(committed.profile.contract(), Contract::OneYear);
            assert_eq!(committed.assessment, Some(assessment(55)));
        }
    }
}
