//! Mock Dashboard Source for testing.
//!
//! Serves canned stats, feature weights and a paged history, with per-endpoint
//! error injection and request tracking.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::dashboard::{
    DashboardFilters, DashboardStats, FeatureImportance, HistoryItem, HistoryPage,
};
use crate::ports::{DashboardError, DashboardSource};

/// In-memory dashboard data with error injection.
#[derive(Debug, Clone)]
pub struct MockDashboardSource {
    stats: Result<DashboardStats, DashboardError>,
    features: Result<Vec<FeatureImportance>, DashboardError>,
    history: Result<Vec<HistoryItem>, DashboardError>,
    page_size: usize,
    export: Result<String, DashboardError>,
    stats_requests: Arc<Mutex<Vec<DashboardFilters>>>,
    history_requests: Arc<Mutex<Vec<u32>>>,
}

impl Default for MockDashboardSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDashboardSource {
    /// Empty data set, ten history items per page.
    pub fn new() -> Self {
        Self {
            stats: Ok(DashboardStats::default()),
            features: Ok(Vec::new()),
            history: Ok(Vec::new()),
            page_size: 10,
            export: Ok(String::new()),
            stats_requests: Arc::new(Mutex::new(Vec::new())),
            history_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_stats(mut self, stats: DashboardStats) -> Self {
        self.stats = Ok(stats);
        self
    }

    pub fn with_stats_error(mut self, error: DashboardError) -> Self {
        self.stats = Err(error);
        self
    }

    pub fn with_features(mut self, features: Vec<FeatureImportance>) -> Self {
        self.features = Ok(features);
        self
    }

    pub fn with_features_error(mut self, error: DashboardError) -> Self {
        self.features = Err(error);
        self
    }

    pub fn with_history(mut self, items: Vec<HistoryItem>) -> Self {
        self.history = Ok(items);
        self
    }

    pub fn with_history_error(mut self, error: DashboardError) -> Self {
        self.history = Err(error);
        self
    }

    /// Items per history page. Zero is treated as one.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_export(mut self, csv: impl Into<String>) -> Self {
        self.export = Ok(csv.into());
        self
    }

    pub fn with_export_error(mut self, error: DashboardError) -> Self {
        self.export = Err(error);
        self
    }

    /// Filters passed to `get_stats`, in call order.
    pub fn stats_requests(&self) -> Vec<DashboardFilters> {
        lock(&self.stats_requests).clone()
    }

    /// Pages passed to `get_history`, in call order.
    pub fn history_requests(&self) -> Vec<u32> {
        lock(&self.history_requests).clone()
    }
}

#[async_trait]
impl DashboardSource for MockDashboardSource {
    async fn get_stats(&self, filters: &DashboardFilters) -> Result<DashboardStats, DashboardError> {
        lock(&self.stats_requests).push(*filters);
        self.stats.clone()
    }

    async fn get_feature_importance(&self) -> Result<Vec<FeatureImportance>, DashboardError> {
        self.features.clone()
    }

    async fn get_history(&self, page: u32) -> Result<HistoryPage, DashboardError> {
        lock(&self.history_requests).push(page);
        let items = self.history.as_ref().map_err(Clone::clone)?;

        let pages = items.len().div_ceil(self.page_size).max(1);
        let index = (page.max(1) as usize - 1).min(pages - 1);
        let items = items
            .iter()
            .skip(index * self.page_size)
            .take(self.page_size)
            .cloned()
            .collect();

        Ok(HistoryPage {
            items,
            pages: pages as u32,
        })
    }

    async fn export_history(&self) -> Result<String, DashboardError> {
        self.export.clone()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
