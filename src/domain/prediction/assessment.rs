//! Risk assessment value objects.

use serde::Serialize;
use std::fmt;

use crate::domain::foundation::RiskScore;

/// Scores below this are considered retained by the chosen strategy.
pub const RETENTION_THRESHOLD: RiskScore = RiskScore::new(40);

/// Coarse risk band reported by the scoring service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Parses the service's label. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "low" => Some(RiskLevel::Low),
            "medium" => Some(RiskLevel::Medium),
            "high" => Some(RiskLevel::High),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of scoring one customer profile.
///
/// Assessments are never updated in place; every re-score produces a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    churn_prediction: bool,
    risk_score: RiskScore,
    risk_level: Option<RiskLevel>,
}

impl RiskAssessment {
    pub fn new(churn_prediction: bool, risk_score: RiskScore, risk_level: Option<RiskLevel>) -> Self {
        Self {
            churn_prediction,
            risk_score,
            risk_level,
        }
    }

    /// True if the model predicts the customer will churn.
    pub fn churn_prediction(&self) -> bool {
        self.churn_prediction
    }

    pub fn risk_score(&self) -> RiskScore {
        self.risk_score
    }

    pub fn risk_level(&self) -> Option<RiskLevel> {
        self.risk_level
    }

    /// True if the score is low enough to count the customer as retained.
    pub fn is_retained(&self) -> bool {
        self.risk_score < RETENTION_THRESHOLD
    }

    /// Change from `baseline` to this assessment; positive means lower risk.
    pub fn delta_from(&self, baseline: &RiskAssessment) -> RiskDelta {
        RiskDelta::between(baseline.risk_score, self.risk_score)
    }
}

/// Signed difference `baseline - current` in percentage points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RiskDelta(i16);

impl RiskDelta {
    pub fn between(baseline: RiskScore, current: RiskScore) -> Self {
        Self(i16::from(baseline.value()) - i16::from(current.value()))
    }

    pub fn value(&self) -> i16 {
        self.0
    }

    pub fn is_improvement(&self) -> bool {
        self.0 > 0
    }

    /// Absolute size of the change.
    pub fn magnitude(&self) -> u8 {
        self.0.unsigned_abs() as u8
    }
}

impl fmt::Display for RiskDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assessment(score: u8) -> RiskAssessment {
        RiskAssessment::new(score >= 50, RiskScore::new(score), None)
    }

    #[test]
    fn delta_is_positive_for_improvement() {
        let baseline = assessment(72);
        let current = assessment(45);

        let delta = current.delta_from(&baseline);
        assert_eq!(delta.value(), 27);
        assert!(delta.is_improvement());
        assert_eq!(delta.to_string(), "+27");
    }

    #[test]
    fn delta_is_negative_when_risk_grows() {
        let delta = assessment(60).delta_from(&assessment(40));
        assert_eq!(delta.value(), -20);
        assert!(!delta.is_improvement());
        assert_eq!(delta.magnitude(), 20);
        assert_eq!(delta.to_string(), "-20");
    }

    #[test]
    fn retention_threshold_is_forty() {
        assert!(assessment(39).is_retained());
        assert!(!assessment(40).is_retained());
    }

    #[test]
    fn risk_level_parses_service_labels() {
        assert_eq!(RiskLevel::from_label("High"), Some(RiskLevel::High));
        assert_eq!(RiskLevel::from_label(" medium "), Some(RiskLevel::Medium));
        assert_eq!(RiskLevel::from_label("Severe"), None);
    }

    #[test]
    fn equal_inputs_make_equal_assessments() {
        let a = RiskAssessment::new(true, RiskScore::new(81), Some(RiskLevel::High));
        let b = RiskAssessment::new(true, RiskScore::new(81), Some(RiskLevel::High));
        assert_eq!(a, b);
    }

    #[test]
    fn assessment_serializes_camel_case() {
        let json = serde_json::to_value(assessment(72)).unwrap();
        assert_eq!(json["riskScore"], 72);
        assert_eq!(json["churnPrediction"], true);
        assert!(json["riskLevel"].is_null());
    }
}
