//! # CLI Error Type
//!
//! Unified error type for commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the CLI                                │
//! │                                                                         │
//! │  angelica cart add ...                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  AppResult<T>                                                    │  │
//! │  │         │                                                        │  │
//! │  │  Slot write failed? ─── StoreError::Io ─────────────┐            │  │
//! │  │         │                                           │            │  │
//! │  │  Sold out / no size? ── CoreError::SoldOut ──── AppError ───────►│  │
//! │  │         │                                           │            │  │
//! │  │  Bad angelica.toml? ─── toml::de::Error ────────────┘            │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  main(): error!("{code}: {message}") and exit status 1                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use angelica_core::{CoreError, ValidationError};
use angelica_store::StoreError;
use serde::Serialize;

/// Error returned from CLI commands.
///
/// ## Serialization
/// With `--json` a failure is printed as:
/// ```json
/// {
///   "code": "EMPTY_CART",
///   "message": "Cannot check out an empty cart"
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

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Entry not found in the cart or wishlist
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Product cannot be bought as requested (sold out, size, color)
    Unavailable,

    /// Checkout requested on an empty cart
    EmptyCart,

    /// Slot storage failed
    StorageError,

    /// Configuration could not be loaded
    ConfigError,

    /// Anything else
    Internal,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::Unavailable => "UNAVAILABLE",
            ErrorCode::EmptyCart => "EMPTY_CART",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::Internal => "INTERNAL",
        };
        f.write_str(code)
    }
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        AppError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ConfigError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }
}

/// Converts domain errors to CLI errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        let code = match err {
            CoreError::SoldOut { .. }
            | CoreError::SizeUnavailable { .. }
            | CoreError::ColorUnavailable { .. } => ErrorCode::Unavailable,
            CoreError::SizeRequired { .. } | CoreError::Validation(_) => {
                ErrorCode::ValidationError
            }
            CoreError::EmptyCart => ErrorCode::EmptyCart,
        };
        AppError::new(code, err.to_string())
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::validation(err.to_string())
    }
}

/// Converts store errors to CLI errors.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Core(e) => e.into(),
            StoreError::Io { .. } | StoreError::Serialization(_) => {
                tracing::error!(error = %err, "Slot storage failed");
                AppError::new(ErrorCode::StorageError, err.to_string())
            }
            StoreError::NotHydrated { .. } => AppError::internal(err.to_string()),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::internal(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::validation(format!("Invalid JSON: {}", err))
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::config(format!("Invalid config file: {}", err))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

/// Convenience type alias for command results.
pub type AppResult<T> = Result<T, AppError>;
