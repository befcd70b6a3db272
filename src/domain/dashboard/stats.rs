use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::foundation::RiskScore;

/// Aggregate retention metrics, as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_customers: u64,
    /// Display string, e.g. "26.5%"
    pub churn_rate: String,
    /// Display string, e.g. "$12,345.00"
    pub revenue_at_risk: String,
    pub chart_data: Vec<ChartPoint>,
}

impl DashboardStats {
    /// Shown when the stats request failed.
    pub fn placeholder() -> Self {
        Self {
            total_customers: 0,
            churn_rate: "0%".to_string(),
            revenue_at_risk: "$0.00".to_string(),
            chart_data: Vec::new(),
        }
    }
}

/// One bar of the retained/churned chart (grouped by contract type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub name: String,
    pub retained: u64,
    pub churned: u64,
}

impl ChartPoint {
    pub fn total(&self) -> u64 {
        self.retained + self.churned
    }
}

/// Relative weight of one model input.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureImportance {
    pub feature: String,
    /// In `[0, 1]`
    pub importance: f64,
}

/// One page of prediction history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPage {
    pub items: Vec<HistoryItem>,
    pub pages: u32,
}

impl Default for HistoryPage {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pages: 1,
        }
    }
}

/// A previously recorded prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: i64,
    /// Parsed from `date_label` when it is in the server's format.
    pub recorded_at: Option<NaiveDateTime>,
    pub date_label: String,
    /// Summary such as "Month-to-month - Fiber optic"
    pub customer: String,
    pub tenure: u32,
    pub monthly_charges: Decimal,
    pub churn_predicted: bool,
    pub risk_score: RiskScore,
}
