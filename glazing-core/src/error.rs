//! Error types for project generation.

use thiserror::Error;

use crate::model::TemplateId;

/// Error codes reported alongside project errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Malformed visit record or configuration document (-3)
    ParseError = -3,
    /// Field outside its allowed range (-4)
    InvalidValue = -4,
    /// Opening dimension that is non-positive, non-finite or beyond the largest accepted opening (E100)
    InvalidDimension = 100,
    /// Opening too small for the template's clearances (E101)
    IncompatibleClearance = 101,
    /// Shop configuration the layout cannot use (E200)
    InvalidConfig = 200,
}

/// Main error type for project generation.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Invalid dimension '{field}': expected a positive length in meters within the largest accepted opening, got {value}")]
    InvalidDimension { field: String, value: f64 },

    #[error(
        "Opening {dimension} of {available}m is too small for template {template}: more than {required}m of clearance is required"
    )]
    IncompatibleClearance {
        template: TemplateId,
        dimension: String,
        available: f64,
        required: f64,
    },

    #[error("Invalid value for '{field}': expected {expected}, got '{value}'")]
    InvalidValue {
        field: String,
        expected: String,
        value: String,
    },

    #[error("Invalid shop configuration '{field}': expected {expected}, got {value}")]
    InvalidConfig {
        field: String,
        expected: String,
        value: f64,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProjectError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ProjectError::InvalidDimension { .. } => ErrorCode::InvalidDimension,
            ProjectError::IncompatibleClearance { .. } => ErrorCode::IncompatibleClearance,
            ProjectError::InvalidValue { .. } => ErrorCode::InvalidValue,
            ProjectError::InvalidConfig { .. } => ErrorCode::InvalidConfig,
            ProjectError::Json(_) => ErrorCode::ParseError,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for project operations.
pub type Result<T> = std::result::Result<T, ProjectError>;
