//! HTTP Prediction Gateway - PredictionGateway backed by the RetainAI service.
//!
//! # Configuration
//!
//! ```ignore
//! let config = RetainApiConfig::new("http://localhost:8000")
//!     .with_predict_path("/predict_and_save")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let gateway = HttpPredictionGateway::new(config)?;
//! ```
//!
//! The default endpoint, `/predict_and_save`, also records the prediction in
//! the service's history. Requests are never retried.

use async_trait::async_trait;
use reqwest::Client;

use super::dto::{PredictRequest, PredictResponse};
use super::transport;
use super::RetainApiConfig;
use crate::domain::prediction::RiskAssessment;
use crate::domain::profile::CustomerProfile;
use crate::ports::{GatewayError, PredictionGateway};

/// Scores profiles through the RetainAI HTTP API.
pub struct HttpPredictionGateway {
    config: RetainApiConfig,
    client: Client,
}

impl HttpPredictionGateway {
    /// Creates a gateway with its own HTTP client.
    pub fn new(config: RetainApiConfig) -> Result<Self, GatewayError> {
        let client = config
            .build_client()
            .map_err(|e| GatewayError::transport(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { config, client })
    }

    /// Creates a gateway sharing an existing client.
    pub fn with_client(config: RetainApiConfig, client: Client) -> Self {
        Self { config, client }
    }

    fn predict_url(&self) -> String {
        self.config.url(&self.config.predict_path)
    }
}

#[async_trait]
impl PredictionGateway for HttpPredictionGateway {
    async fn score(&self, profile: &CustomerProfile) -> Result<RiskAssessment, GatewayError> {
        let url = self.predict_url();
        let timeout_secs = self.config.timeout_secs();
        tracing::debug!(%url, tenure = profile.tenure(), "scoring profile");

        let request = self.client.post(&url).json(&PredictRequest::from(profile));
        let response = transport::send(request, timeout_secs).await?;
        let body: PredictResponse = transport::json(response, timeout_secs).await?;

        let assessment = body
            .into_assessment()
            .map_err(|e| GatewayError::invalid_response(e.to_string()))?;

        tracing::debug!(
            risk_score = assessment.risk_score().value(),
            churn = assessment.churn_prediction(),
            "profile scored"
        );
        Ok(assessment)
    }
}
