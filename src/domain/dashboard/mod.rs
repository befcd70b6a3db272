//! Dashboard filters, pagination and read models.

pub mod filters;
pub mod pagination;
pub mod stats;

pub use filters::{DashboardFilters, Filter, ALL_LABEL, SENIOR_CITIZEN_ALL};
pub use pagination::Pagination;
pub use stats::{ChartPoint, DashboardStats, FeatureImportance, HistoryItem, HistoryPage};
