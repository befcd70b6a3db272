//! HTTP Dashboard Source - DashboardSource backed by the RetainAI service.

use async_trait::async_trait;
use reqwest::Client;

use super::dto::{FeatureImportanceDto, HistoryResponse, StatsResponse};
use super::transport;
use super::RetainApiConfig;
use crate::domain::dashboard::{DashboardFilters, DashboardStats, FeatureImportance, HistoryPage};
use crate::ports::{DashboardError, DashboardSource};

const STATS_PATH: &str = "/stats";
const FEATURE_IMPORTANCE_PATH: &str = "/feature-importance";
const HISTORY_PATH: &str = "/history";
const EXPORT_PATH: &str = "/export";

/// Reads dashboard data from the RetainAI HTTP API.
pub struct HttpDashboardSource {
    config: RetainApiConfig,
    client: Client,
}

impl HttpDashboardSource {
    pub fn new(config: RetainApiConfig) -> Result<Self, DashboardError> {
        let client = config
            .build_client()
            .map_err(|e| DashboardError::transport(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { config, client })
    }

    pub fn with_client(config: RetainApiConfig, client: Client) -> Self {
        Self { config, client }
    }
}

#[async_trait]
impl DashboardSource for HttpDashboardSource {
    async fn get_stats(&self, filters: &DashboardFilters) -> Result<DashboardStats, DashboardError> {
        let params = filters.query_params();
        tracing::debug!(?params, "fetching stats");

        let request = self.client.get(self.config.url(STATS_PATH)).query(&params);
        let response = transport::send(request, self.config.timeout_secs()).await?;
        let body: StatsResponse = transport::json(response, self.config.timeout_secs()).await?;
        Ok(body.into())
    }

    async fn get_feature_importance(&self) -> Result<Vec<FeatureImportance>, DashboardError> {
        let request = self.client.get(self.config.url(FEATURE_IMPORTANCE_PATH));
        let response = transport::send(request, self.config.timeout_secs()).await?;
        let body: Vec<FeatureImportanceDto> =
            transport::json(response, self.config.timeout_secs()).await?;
        Ok(body.into_iter().map(FeatureImportance::from).collect())
    }

    async fn get_history(&self, page: u32) -> Result<HistoryPage, DashboardError> {
        tracing::debug!(page, "fetching history");

        let request = self
            .client
            .get(self.config.url(HISTORY_PATH))
            .query(&[("page", page)]);
        let response = transport::send(request, self.config.timeout_secs()).await?;
        let body: HistoryResponse = transport::json(response, self.config.timeout_secs()).await?;
        Ok(body.into())
    }

    async fn export_history(&self) -> Result<String, DashboardError> {
        let request = self.client.get(self.config.url(EXPORT_PATH));
        let response = transport::send(request, self.config.timeout_secs()).await?;
        Ok(transport::text(response, self.config.timeout_secs()).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::GatewayErrorKind;
    use std::time::Duration;

    #[tokio::test]
    async fn unreachable_service_degrades_to_transport_errors() {
        let source = HttpDashboardSource::new(
            RetainApiConfig::new("http://127.0.0.1:9").with_timeout(Duration::from_secs(2)),
        )
        .unwrap();

        let stats = source.get_stats(&DashboardFilters::default()).await.unwrap_err();
        let history = source.get_history(1).await.unwrap_err();

        assert_eq!(stats.kind(), GatewayErrorKind::Transport);
        assert_eq!(history.kind(), GatewayErrorKind::Transport);
    }
}
