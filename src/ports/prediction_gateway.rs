//! Prediction Gateway Port - Interface to the external churn-scoring service.
//!
//! The gateway turns a [`CustomerProfile`] into a [`RiskAssessment`]. It never
//! retries; callers decide what a failure means for them.
//!
//! Scoring is assumed deterministic: the same profile scored twice yields the
//! same assessment.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::ErrorCode;
use crate::domain::prediction::RiskAssessment;
use crate::domain::profile::CustomerProfile;

/// Port for scoring customer profiles.
#[async_trait]
pub trait PredictionGateway: Send + Sync {
    /// Scores one profile.
    async fn score(&self, profile: &CustomerProfile) -> Result<RiskAssessment, GatewayError>;
}

/// Broad classification of a remote failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GatewayErrorKind {
    /// The service could not be reached or did not answer in time.
    Transport,
    /// The service answered, but with an error or an unusable body.
    Service,
}

/// Errors from the scoring service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Connection refused, DNS failure, reset, ...
    #[error("transport error: {0}")]
    Transport(String),

    /// No response within the configured client timeout.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Non-success HTTP status.
    #[error("scoring service returned {status}: {detail}")]
    Service { status: u16, detail: String },

    /// The body could not be decoded into an assessment.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl GatewayError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn timeout(timeout_secs: u64) -> Self {
        Self::Timeout { timeout_secs }
    }

    pub fn service(status: u16, detail: impl Into<String>) -> Self {
        Self::Service {
            status,
            detail: detail.into(),
        }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }

    pub fn kind(&self) -> GatewayErrorKind {
        match self {
            GatewayError::Transport(_) | GatewayError::Timeout { .. } => GatewayErrorKind::Transport,
            GatewayError::Service { .. } | GatewayError::InvalidResponse(_) => {
                GatewayErrorKind::Service
            }
        }
    }

    /// Returns true if trying again later may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            GatewayError::Transport(_) | GatewayError::Timeout { .. } => true,
            GatewayError::Service { status, .. } => *status >= 500,
            GatewayError::InvalidResponse(_) => false,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind() {
            GatewayErrorKind::Transport => ErrorCode::ScoringUnavailable,
            GatewayErrorKind::Service => ErrorCode::ScoringRejected,
        }
    }
}
