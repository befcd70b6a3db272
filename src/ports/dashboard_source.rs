use async_trait::async_trait;
use thiserror::Error;

use super::GatewayErrorKind;
use crate::domain::dashboard::{DashboardFilters, DashboardStats, FeatureImportance, HistoryPage};
use crate::domain::foundation::ErrorCode;

/// Read-only port for dashboard data
#[async_trait]
pub trait DashboardSource: Send + Sync {
    /// Aggregate metrics, restricted by `filters`
    async fn get_stats(&self, filters: &DashboardFilters) -> Result<DashboardStats, DashboardError>;

    /// Model feature weights, most important first
    async fn get_feature_importance(&self) -> Result<Vec<FeatureImportance>, DashboardError>;

    /// One page (1-based) of recorded predictions
    async fn get_history(&self, page: u32) -> Result<HistoryPage, DashboardError>;

    /// Full prediction history as CSV
    async fn export_history(&self) -> Result<String, DashboardError>;
}

/// Errors that can occur while fetching dashboard data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("dashboard service returned {status}: {detail}")]
    Service { status: u16, detail: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl DashboardError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
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

    /// Same classification as the prediction gateway uses.
    pub fn kind(&self) -> GatewayErrorKind {
        match self {
            DashboardError::Transport(_) | DashboardError::Timeout { .. } => {
                GatewayErrorKind::Transport
            }
            DashboardError::Service { .. } | DashboardError::InvalidResponse(_) => {
                GatewayErrorKind::Service
            }
        }
    }

    pub fn code(&self) -> ErrorCode {
        ErrorCode::DashboardUnavailable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_match_gateway_classification() {
        assert_eq!(DashboardError::transport("down").kind(), GatewayErrorKind::Transport);
        assert_eq!(
            DashboardError::Timeout { timeout_secs: 3 }.kind(),
            GatewayErrorKind::Transport
        );
        assert_eq!(DashboardError::service(500, "boom").kind(), GatewayErrorKind::Service);
    }

    #[test]
    fn every_error_maps_to_dashboard_unavailable() {
        assert_eq!(
            DashboardError::invalid_response("not json").code(),
            ErrorCode::DashboardUnavailable
        );
    }
}
