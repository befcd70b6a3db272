//! LoadDashboardHandler - Query handler for the retention dashboard.
//!
//! Fetches stats, feature importance and one history page concurrently. Each
//! part degrades on its own: a failed fetch is logged and replaced by an empty
//! placeholder so the rest of the view still renders.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::dashboard::{
    DashboardFilters, DashboardStats, FeatureImportance, HistoryItem, Pagination,
};
use crate::ports::{DashboardError, DashboardSource};

/// A dashboard part that could not be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardSection {
    Stats,
    FeatureImportance,
    History,
}

/// Everything the dashboard renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub stats: DashboardStats,
    pub feature_importance: Vec<FeatureImportance>,
    pub history: Vec<HistoryItem>,
    pub pagination: Pagination,
    /// Parts replaced by placeholders.
    pub degraded: Vec<DashboardSection>,
}

impl DashboardView {
    pub fn is_complete(&self) -> bool {
        self.degraded.is_empty()
    }
}

/// Handler for loading the dashboard.
pub struct DashboardHandler {
    source: Arc<dyn DashboardSource>,
}

impl DashboardHandler {
    pub fn new(source: Arc<dyn DashboardSource>) -> Self {
        Self { source }
    }

    /// Loads the view for `filters` and the page selected in `pagination`.
    ///
    /// The returned pagination is re-clamped to the page count the server
    /// reported. Never fails.
    pub async fn load(&self, filters: &DashboardFilters, pagination: Pagination) -> DashboardView {
        debug!(
            page = pagination.current_page(),
            unfiltered = filters.is_unfiltered(),
            "Loading dashboard"
        );

        let (stats, features, history) = futures::join!(
            self.source.get_stats(filters),
            self.source.get_feature_importance(),
            self.source.get_history(pagination.current_page()),
        );

        let mut view = DashboardView {
            stats: DashboardStats::placeholder(),
            feature_importance: Vec::new(),
            history: Vec::new(),
            pagination,
            degraded: Vec::new(),
        };

        match stats {
            Ok(stats) => view.stats = stats,
            Err(err) => degrade(&mut view, DashboardSection::Stats, &err),
        }

        match features {
            Ok(features) => view.feature_importance = features,
            Err(err) => degrade(&mut view, DashboardSection::FeatureImportance, &err),
        }

        match history {
            Ok(page) => {
                view.pagination.set_total_pages(page.pages);
                view.history = page.items;
            }
            Err(err) => degrade(&mut view, DashboardSection::History, &err),
        }

        view
    }
}

fn degrade(view: &mut DashboardView, section: DashboardSection, err: &DashboardError) {
    warn!(?section, error = %err, status = ?err.kind(), "Dashboard section unavailable");
    view.degraded.push(section);
}
