//! # App Error Type
//!
//! Unified error type for CLI commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Shoplist                               │
//! │                                                                         │
//! │  Terminal                    Rust                                       │
//! │  ────────                    ────                                       │
//! │                                                                         │
//! │  > open ftp://x                                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command handler: Result<T, AppError>                            │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Validation Error? ─── CoreError::Validation ──► AppError ──────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄──── "error: link uses unsupported scheme 'ftp' ..."                  │
//! │        (or {"code":"VALIDATION_ERROR","message":...} in JSON mode)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Command errors are printed and the session keeps going. Only startup
//! errors (bad config) and a broken terminal end the process.

use serde::Serialize;
use shoplist_core::CoreError;

use crate::state::ConfigError;

/// Error returned from command handlers.
///
/// ## Serialization
/// In JSON output mode this is what gets printed:
/// ```json
/// {
///   "code": "USAGE",
///   "message": "usage: toggle <position|id>"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// Command not recognized or missing arguments
    Usage,

    /// Configuration could not be loaded
    ConfigError,

    /// Terminal read/write failed
    Io,

    /// The browser could not be launched
    BrowserError,
}

impl AppError {
    /// Creates a new app error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Usage, message)
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a browser error.
    pub fn browser(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::BrowserError, message)
    }
}

/// Converts core errors to app errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => AppError::validation(e.to_string()),
        }
    }
}

/// Converts configuration errors to app errors.
impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::new(ErrorCode::ConfigError, err.to_string())
    }
}

/// Converts terminal I/O errors to app errors.
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("Terminal I/O failed: {}", err);
        AppError::new(ErrorCode::Io, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}
