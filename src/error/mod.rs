//! Error handling for linto-utility.
//!
//! This module provides:
//! - [`MsError`]: The main error enum for all operations
//! - [`ErrorCode`]: Standardized error codes for machine parsing
//! - [`StructuredError`]: Rich error type with suggestions and context

mod codes;
mod suggestions;

use std::io;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;
pub use suggestions::suggest_for_error;

/// Main error type for linto-utility operations.
#[derive(Error, Debug)]
pub enum MsError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Corpus not found: {0}")]
    NotFound(String),

    #[error("No locale for node '{node}' in language '{language}'")]
    LocaleNotFound { language: String, node: String },

    #[error("Invalid locale data for node '{node}': {reason}")]
    InvalidLocale { node: String, reason: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl MsError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) => ErrorCode::SerializationError,
            Self::InvalidArgument(_) => ErrorCode::InvalidArgument,
            Self::NotFound(_) => ErrorCode::CorpusNotFound,
            Self::LocaleNotFound { .. } => ErrorCode::LocaleNotFound,
            Self::InvalidLocale { .. } => ErrorCode::LocaleInvalid,
            Self::Transport(_) => ErrorCode::TransportFailed,
            Self::Config(_) => ErrorCode::ConfigInvalid,
        }
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::NotFound(path) => Some(serde_json::json!({ "path": path })),
            Self::LocaleNotFound { language, node } => {
                Some(serde_json::json!({ "language": language, "node": node }))
            }
            Self::InvalidLocale { node, reason } => {
                Some(serde_json::json!({ "node": node, "reason": reason }))
            }
            _ => None,
        }
    }
}

/// A structured error with machine-readable code, suggestion, and context.
///
/// Printed by the CLI in robot mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// The error code (e.g., "CORPUS_NOT_FOUND")
    pub code: ErrorCode,

    /// The numeric error code (e.g., 101)
    pub numeric_code: u16,

    /// Human-readable error message
    pub message: String,

    /// Actionable suggestion for recovery
    pub suggestion: String,

    /// Additional context for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    /// Whether this error is potentially recoverable by the user
    pub recoverable: bool,

    /// Error category (e.g., "corpus", "config", "network")
    pub category: String,
}

impl StructuredError {
    /// Create a structured error from an `MsError`.
    #[must_use]
    pub fn from_ms_error(err: &MsError) -> Self {
        let code = err.code();
        let context = err.context();
        let suggestion = suggest_for_error(code, context.as_ref());

        Self {
            code,
            numeric_code: code.numeric(),
            message: err.to_string(),
            suggestion,
            context,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
        }
    }
}

impl std::fmt::Display for StructuredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

/// Result type alias using `MsError`.
pub type Result<T> = std::result::Result<T, MsError>;
