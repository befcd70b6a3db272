//! Risk score value object (integer percentage, 0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Likelihood, in whole percent, that a profile will churn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct RiskScore(u8);

impl RiskScore {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new RiskScore, clamping to valid range.
    pub const fn new(value: u8) -> Self {
        if value > 100 {
            Self(100)
        } else {
            Self(value)
        }
    }

    /// Creates a RiskScore from a fractional percentage such as `72.35`.
    ///
    /// Rounds to the nearest whole percent and clamps into 0-100.
    pub fn from_fractional(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::invalid_format(
                "risk_score",
                format!("expected a finite percentage, got {}", value),
            ));
        }
        Ok(Self(value.round().clamp(0.0, 100.0) as u8))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for RiskScore {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<u8> for RiskScore {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "risk_score",
                0,
                100,
                i32::from(value),
            ));
        }
        Ok(Self(value))
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
