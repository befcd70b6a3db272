//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur when a profile field receives a malformed or
/// out-of-domain value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Field '{field}' cannot be negative")]
    NegativeAmount { field: String },

    #[error("Field '{field}' is inconsistent with {depends_on}: {reason}")]
    InconsistentService {
        field: String,
        depends_on: String,
        reason: String,
    },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a negative amount validation error.
    pub fn negative_amount(field: impl Into<String>) -> Self {
        ValidationError::NegativeAmount { field: field.into() }
    }

    /// Creates an error for a service option that contradicts its parent service.
    pub fn inconsistent_service(
        field: impl Into<String>,
        depends_on: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ValidationError::InconsistentService {
            field: field.into(),
            depends_on: depends_on.into(),
            reason: reason.into(),
        }
    }

    /// Returns the error code for this validation failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::OutOfRange { .. } | ValidationError::NegativeAmount { .. } => {
                ErrorCode::OutOfRange
            }
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            ValidationError::InconsistentService { .. } => ErrorCode::ValidationFailed,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    OutOfRange,
    InvalidFormat,

    // State errors
    InvalidStateTransition,
    WizardIncomplete,

    // Scoring service errors
    ScoringUnavailable,
    ScoringRejected,

    // Dashboard service errors
    DashboardUnavailable,
    ExportFailed,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::WizardIncomplete => "WIZARD_INCOMPLETE",
            ErrorCode::ScoringUnavailable => "SCORING_UNAVAILABLE",
            ErrorCode::ScoringRejected => "SCORING_REJECTED",
            ErrorCode::DashboardUnavailable => "DASHBOARD_UNAVAILABLE",
            ErrorCode::ExportFailed => "EXPORT_FAILED",
        };
        write!(f, "{}", s)
    }
}
