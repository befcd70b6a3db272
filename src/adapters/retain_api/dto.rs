//! Wire types for the RetainAI scoring service and their domain mappings.

use chrono::NaiveDateTime;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::dashboard::{ChartPoint, DashboardStats, FeatureImportance, HistoryItem, HistoryPage};
use crate::domain::foundation::{RiskScore, ValidationError};
use crate::domain::prediction::{RiskAssessment, RiskLevel};
use crate::domain::profile::{yes_no_label, AddOn, CustomerProfile, ParentService};

/// Timestamp format of history dates.
pub const HISTORY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

// ----- Prediction -----

/// Request body for `/predict` and `/predict_and_save`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictRequest {
    pub gender: &'static str,
    pub seniorcitizen: u8,
    pub partner: &'static str,
    pub dependents: &'static str,
    pub tenure: u8,
    pub phoneservice: &'static str,
    pub multiplelines: &'static str,
    pub internetservice: &'static str,
    pub onlinesecurity: &'static str,
    pub onlinebackup: &'static str,
    pub deviceprotection: &'static str,
    pub techsupport: &'static str,
    pub streamingtv: &'static str,
    pub streamingmovies: &'static str,
    pub contract: &'static str,
    pub paperlessbilling: &'static str,
    pub paymentmethod: &'static str,
    pub monthlycharges: f64,
    pub totalcharges: f64,
}

impl From<&CustomerProfile> for PredictRequest {
    fn from(profile: &CustomerProfile) -> Self {
        let add_on = |add_on: AddOn| profile.add_on(add_on).label(ParentService::Internet);
        Self {
            gender: profile.gender().label(),
            seniorcitizen: u8::from(profile.senior_citizen()),
            partner: yes_no_label(profile.has_partner()),
            dependents: yes_no_label(profile.has_dependents()),
            tenure: profile.tenure(),
            phoneservice: yes_no_label(profile.phone_service()),
            multiplelines: profile.multiple_lines().label(ParentService::Phone),
            internetservice: profile.internet_service().label(),
            onlinesecurity: add_on(AddOn::OnlineSecurity),
            onlinebackup: add_on(AddOn::OnlineBackup),
            deviceprotection: add_on(AddOn::DeviceProtection),
            techsupport: add_on(AddOn::TechSupport),
            streamingtv: add_on(AddOn::StreamingTv),
            streamingmovies: add_on(AddOn::StreamingMovies),
            contract: profile.contract().label(),
            paperlessbilling: yes_no_label(profile.paperless_billing()),
            paymentmethod: profile.payment_method().label(),
            monthlycharges: profile.monthly_charges().to_f64().unwrap_or_default(),
            totalcharges: profile.total_charges().to_f64().unwrap_or_default(),
        }
    }
}

/// Response body of the prediction endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictResponse {
    pub churn_prediction: i64,
    pub risk_score: f64,
    #[serde(default)]
    pub risk_level: Option<String>,
}

impl PredictResponse {
    /// Rounds the fractional percentage to a whole one.
    pub fn into_assessment(self) -> Result<RiskAssessment, ValidationError> {
        let score = RiskScore::from_fractional(self.risk_score)?;
        let level = self.risk_level.as_deref().and_then(RiskLevel::from_label);
        Ok(RiskAssessment::new(self.churn_prediction != 0, score, level))
    }
}

// ----- Dashboard -----

#[derive(Debug, Clone, Deserialize)]
pub struct StatsResponse {
    pub total_customers: u64,
    pub churn_rate: String,
    pub revenue_at_risk: String,
    #[serde(default)]
    pub chart_data: Vec<ChartPointDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartPointDto {
    pub name: String,
    #[serde(rename = "Retained")]
    pub retained: u64,
    #[serde(rename = "Churned")]
    pub churned: u64,
}

impl From<StatsResponse> for DashboardStats {
    fn from(dto: StatsResponse) -> Self {
        Self {
            total_customers: dto.total_customers,
            churn_rate: dto.churn_rate,
            revenue_at_risk: dto.revenue_at_risk,
            chart_data: dto
                .chart_data
                .into_iter()
                .map(|point| ChartPoint {
                    name: point.name,
                    retained: point.retained,
                    churned: point.churned,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureImportanceDto {
    pub feature: String,
    pub importance: f64,
}

impl From<FeatureImportanceDto> for FeatureImportance {
    fn from(dto: FeatureImportanceDto) -> Self {
        Self {
            feature: dto.feature,
            importance: dto.importance,
        }
    }
}

/// History comes either paged or as a bare list (a single page).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum HistoryResponse {
    Paged { items: Vec<HistoryItemDto>, pages: u32 },
    Flat(Vec<HistoryItemDto>),
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryItemDto {
    pub id: i64,
    #[serde(default)]
    pub customer: String,
    #[serde(default)]
    pub tenure: f64,
    #[serde(default, alias = "monthlyCharges")]
    pub monthly_charges: f64,
    #[serde(default)]
    pub prediction: i64,
    #[serde(default, alias = "riskScore")]
    pub risk_score: f64,
    #[serde(default)]
    pub date: String,
}

impl From<HistoryItemDto> for HistoryItem {
    fn from(dto: HistoryItemDto) -> Self {
        Self {
            id: dto.id,
            recorded_at: NaiveDateTime::parse_from_str(&dto.date, HISTORY_DATE_FORMAT).ok(),
            date_label: dto.date,
            customer: dto.customer,
            tenure: dto.tenure.max(0.0).round() as u32,
            monthly_charges: Decimal::from_f64(dto.monthly_charges)
                .map(|amount| amount.round_dp(2))
                .unwrap_or_default(),
            churn_predicted: dto.prediction != 0,
            risk_score: RiskScore::from_fractional(dto.risk_score).unwrap_or_default(),
        }
    }
}

impl From<HistoryResponse> for HistoryPage {
    fn from(dto: HistoryResponse) -> Self {
        let (items, pages) = match dto {
            HistoryResponse::Paged { items, pages } => (items, pages),
            HistoryResponse::Flat(items) => (items, 1),
        };
        Self {
            items: items.into_iter().map(HistoryItem::from).collect(),
            pages: pages.max(1),
        }
    }
}

// ----- Errors -----

/// FastAPI error envelope: `{"detail": "..."}` or a list of validation errors.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// Extracts a readable message from an error response body.
pub fn error_detail(body: &str) -> String {
    let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) else {
        return body.trim().to_string();
    };
    match parsed.detail {
        serde_json::Value::String(message) => message,
        serde_json::Value::Array(entries) => entries
            .iter()
            .map(|entry| {
                entry
                    .get("msg")
                    .and_then(|msg| msg.as_str())
                    .map(str::to_string)
                    .unwrap_or_else(|| entry.to_string())
            })
            .collect::<Vec<_>>()
            .join("; "),
        other => other.to_string(),
    }
}
