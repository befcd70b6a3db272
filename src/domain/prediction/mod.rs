//! Prediction module - risk assessments returned by the scoring service.

mod assessment;

pub use assessment::{RiskAssessment, RiskDelta, RiskLevel, RETENTION_THRESHOLD};
