//! Error types and exit codes for kitrubric
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid configuration)
//! - 3: Data error (unreadable rubric, failed check, missing score)
//!
//! The normalizer itself is total and never produces these; they belong to
//! the decoding, checking and scoring stages around it.

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the kitrubric binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - bad rubric document or failed check (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur around rubric normalization
#[derive(Error, Debug)]
pub enum KitError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("invalid rubric: {reason}")]
    InvalidRubric { reason: String },

    #[error("no score given for criterion: {label}")]
    MissingScore { label: String },

    #[error("config not found: {path:?}")]
    ConfigNotFound { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl KitError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        KitError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a rubric that cannot be used as-is
    pub fn invalid_rubric(reason: impl Into<String>) -> Self {
        KitError::InvalidRubric {
            reason: reason.into(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        KitError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            KitError::UnknownFormat(_) | KitError::UsageError(_) | KitError::InvalidValue { .. } => {
                ExitCode::Usage
            }

            KitError::InvalidRubric { .. }
            | KitError::MissingScore { .. }
            | KitError::ConfigNotFound { .. } => ExitCode::Data,

            KitError::Io(_)
            | KitError::Json(_)
            | KitError::Yaml(_)
            | KitError::Toml(_)
            | KitError::FailedOperationWithTarget { .. }
            | KitError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            KitError::UnknownFormat(_) => "unknown_format",
            KitError::UsageError(_) => "usage_error",
            KitError::InvalidValue { .. } => "invalid_value",
            KitError::InvalidRubric { .. } => "invalid_rubric",
            KitError::MissingScore { .. } => "missing_score",
            KitError::ConfigNotFound { .. } => "config_not_found",
            KitError::Io(_) => "io_error",
            KitError::Json(_) => "json_error",
            KitError::Yaml(_) => "yaml_error",
            KitError::Toml(_) => "toml_error",
            KitError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            KitError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for kitrubric operations
pub type Result<T> = std::result::Result<T, KitError>;
