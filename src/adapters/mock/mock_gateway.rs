//! Mock Prediction Gateway for testing.
//!
//! Provides a configurable implementation of the PredictionGateway port,
//! allowing tests to run without a scoring service.
//!
//! # Features
//!
//! - Scripted assessments (consumed in order)
//! - Deterministic heuristic scoring once the script runs out
//! - Error injection for failure-path testing
//! - Simulated latency
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let gateway = MockPredictionGateway::new()
//!     .with_score(72)
//!     .with_error(GatewayError::service(500, "Model not loaded"));
//!
//! let first = gateway.score(&profile).await?;
//! assert_eq!(first.risk_score().value(), 72);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::foundation::RiskScore;
use crate::domain::prediction::{RiskAssessment, RiskLevel};
use crate::domain::profile::{Contract, CustomerProfile, InternetService, ServiceOption};
use crate::ports::{GatewayError, PredictionGateway};

/// Scoring function used when no scripted response is queued.
pub type ScoreFn = Arc<dyn Fn(&CustomerProfile) -> RiskAssessment + Send + Sync>;

/// Mock gateway for testing.
#[derive(Clone)]
pub struct MockPredictionGateway {
    /// Scripted responses (consumed in order).
    responses: Arc<Mutex<VecDeque<Result<RiskAssessment, GatewayError>>>>,
    /// Fallback once the script is exhausted.
    scorer: ScoreFn,
    /// Simulated latency per request.
    delay: Duration,
    /// Profiles received, in call order.
    calls: Arc<Mutex<Vec<CustomerProfile>>>,
}

impl std::fmt::Debug for MockPredictionGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockPredictionGateway")
            .field("queued", &lock(&self.responses).len())
            .field("delay", &self.delay)
            .field("calls", &lock(&self.calls).len())
            .finish()
    }
}

impl Default for MockPredictionGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPredictionGateway {
    /// Creates a mock that scores with [`heuristic_assessment`].
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            scorer: Arc::new(heuristic_assessment),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Replaces the fallback scoring function.
    pub fn with_scorer<F>(mut self, scorer: F) -> Self
    where
        F: Fn(&CustomerProfile) -> RiskAssessment + Send + Sync + 'static,
    {
        self.scorer = Arc::new(scorer);
        self
    }

    /// Queues an assessment.
    pub fn with_assessment(self, assessment: RiskAssessment) -> Self {
        lock(&self.responses).push_back(Ok(assessment));
        self
    }

    /// Queues an assessment with the given score, level derived from it.
    pub fn with_score(self, score: u8) -> Self {
        self.with_assessment(assessment_for(RiskScore::new(score)))
    }

    /// Queues an error.
    pub fn with_error(self, error: GatewayError) -> Self {
        lock(&self.responses).push_back(Err(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Queues an error on an already shared mock.
    pub fn push_error(&self, error: GatewayError) {
        lock(&self.responses).push_back(Err(error));
    }

    /// Queues a score on an already shared mock.
    pub fn push_score(&self, score: u8) {
        lock(&self.responses).push_back(Ok(assessment_for(RiskScore::new(score))));
    }

    /// Returns the number of calls made.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Returns all profiles received.
    pub fn get_calls(&self) -> Vec<CustomerProfile> {
        lock(&self.calls).clone()
    }

    /// Clears the call history.
    pub fn clear_calls(&self) {
        lock(&self.calls).clear();
    }

    fn next_response(&self, profile: &CustomerProfile) -> Result<RiskAssessment, GatewayError> {
        let scripted = lock(&self.responses).pop_front();
        scripted.unwrap_or_else(|| Ok((self.scorer)(profile)))
    }
}

#[async_trait]
impl PredictionGateway for MockPredictionGateway {
    async fn score(&self, profile: &CustomerProfile) -> Result<RiskAssessment, GatewayError> {
        lock(&self.calls).push(profile.clone());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        self.next_response(profile)
    }
}

/// Deterministic stand-in for the model: month-to-month contracts, fiber,
/// missing support services, high bills and short tenure all add risk.
pub fn heuristic_assessment(profile: &CustomerProfile) -> RiskAssessment {
    let mut score: i32 = 15;
    score += match profile.contract() {
        Contract::MonthToMonth => 30,
        Contract::OneYear => 10,
        Contract::TwoYear => 0,
    };
    if profile.internet_service() == InternetService::FiberOptic {
        score += 10;
    }
    if profile.tech_support() == ServiceOption::No {
        score += 8;
    }
    if profile.online_security() == ServiceOption::No {
        score += 7;
    }
    if profile.monthly_charges() > rust_decimal::Decimal::from(80) {
        score += 10;
    }
    if profile.tenure() < 12 {
        score += 10;
    } else if profile.tenure() >= 48 {
        score -= 10;
    }
    if profile.senior_citizen() {
        score += 5;
    }
    assessment_for(RiskScore::new(score.clamp(0, 100) as u8))
}

/// Builds an assessment using the service's banding (High above 70,
/// Medium above 40).
fn assessment_for(score: RiskScore) -> RiskAssessment {
    let level = match score.value() {
        71..=100 => RiskLevel::High,
        41..=70 => RiskLevel::Medium,
        _ => RiskLevel::Low,
    };
    RiskAssessment::new(score.value() >= 50, score, Some(level))
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
