//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Corpus errors
//! - 2xx: Locale errors
//! - 3xx: Config errors
//! - 5xx: Network errors
//! - 6xx: Storage errors
//! - 8xx: Validation errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for robot mode output.
///
/// Each variant maps to a numeric code (e.g., `CorpusNotFound` -> E101).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Corpus errors (1xx)
    // ========================================
    /// E101: Corpus file does not exist or is not a regular file
    CorpusNotFound,

    // ========================================
    // Locale errors (2xx)
    // ========================================
    /// E201: No locale loader registered for (language, node)
    LocaleNotFound,
    /// E202: Locale data exists but has no usable response
    LocaleInvalid,

    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E301: Config file has invalid syntax or values
    ConfigInvalid,

    // ========================================
    // Network errors (5xx)
    // ========================================
    /// E501: Upload request failed or was rejected
    TransportFailed,

    // ========================================
    // Storage errors (6xx)
    // ========================================
    /// E601: IO operation failed
    IoError,
    /// E602: Failed to serialize/deserialize data
    SerializationError,

    // ========================================
    // Validation errors (8xx)
    // ========================================
    /// E801: A required argument was missing or blank
    InvalidArgument,
}

impl ErrorCode {
    /// Get the numeric error code (e.g., `CorpusNotFound` -> 101).
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::CorpusNotFound => 101,
            Self::LocaleNotFound => 201,
            Self::LocaleInvalid => 202,
            Self::ConfigInvalid => 301,
            Self::TransportFailed => 501,
            Self::IoError => 601,
            Self::SerializationError => 602,
            Self::InvalidArgument => 801,
        }
    }

    /// Get the error code as a formatted string (e.g., "E101").
    #[must_use]
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric())
    }

    /// Get the default suggestion for this error code.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::CorpusNotFound => "Check the corpus path. It must point to a readable markdown file",
            Self::LocaleNotFound => "Register a loader for this language and node, or set [locale].default_language",
            Self::LocaleInvalid => "The locale file must contain `{ \"<node>\": { \"response\": ... } }`",
            Self::ConfigInvalid => "Check config.toml syntax and value types",
            Self::TransportFailed => "Check that the admin service URL is reachable and the auth token is valid",
            Self::IoError => "File operation failed. Check path exists and permissions are correct",
            Self::SerializationError => "The data could not be encoded as JSON. This is likely a bug",
            Self::InvalidArgument => "Provide both an application name and a corpus file path",
        }
    }

    /// Check if this error is potentially recoverable by the user.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::SerializationError)
    }

    /// Get the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            1 => "corpus",
            2 => "locale",
            3 => "config",
            5 => "network",
            6 => "storage",
            8 => "validation",
            _ => "unknown",
        }
    }

    /// Iterate over all error codes.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::CorpusNotFound,
            Self::LocaleNotFound,
            Self::LocaleInvalid,
            Self::ConfigInvalid,
            Self::TransportFailed,
            Self::IoError,
            Self::SerializationError,
            Self::InvalidArgument,
        ]
        .into_iter()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code_string())
    }
}
