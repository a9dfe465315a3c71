//! Unified error handling for the portal client.
//!
//! Provides a single error type covering the client-side taxonomy:
//! authentication failure, authorization failure, validation failure with
//! the API's detail message, and network/server failure. Every error is
//! terminal for the action that produced it; nothing here retries.

use serde::Deserialize;
use thiserror::Error;

use domain::DomainError;

/// Error body returned by the API on failure.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: String,
}

/// Application error types for the portal client.
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication & Authorization
    #[error("Authentication required")]
    Unauthorized,

    #[error("Access denied")]
    Forbidden,

    #[error("Invalid credentials")]
    InvalidCredentials,

    // Resource errors
    #[error("Resource not found")]
    NotFound,

    #[error("{0} already exists")]
    Conflict(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    // Server-sourced error with its detail field
    #[error("API error ({status}): {detail}")]
    Api { status: u16, detail: String },

    // Transport
    #[error("Connection error")]
    Connection(#[from] reqwest::Error),

    #[error("I/O error")]
    Io(#[from] std::io::Error),

    // Internal
    #[error("Internal error")]
    Internal(String),
}

impl AppError {
    /// Get error code for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::Forbidden => "FORBIDDEN",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::NotFound => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Api { .. } => "API_ERROR",
            AppError::Connection(_) => "CONNECTION_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Map a non-2xx API response to the client-side taxonomy.
    ///
    /// The detail string is carried verbatim so it can be surfaced to the
    /// user exactly as the API phrased it.
    pub fn from_status(status: u16, detail: String) -> Self {
        match status {
            401 => AppError::Unauthorized,
            403 => AppError::Forbidden,
            404 => AppError::NotFound,
            409 => AppError::Conflict(detail),
            400 | 422 => AppError::Validation(detail),
            status => AppError::Api { status, detail },
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show the exact message for client and API errors
            AppError::Validation(msg) => msg.clone(),
            AppError::Api { detail, .. } => detail.clone(),
            AppError::Conflict(msg) => {
                if msg.ends_with("already exists") {
                    msg.clone()
                } else {
                    format!("{} already exists", msg)
                }
            }

            // Generic banner for transport failures
            AppError::Connection(e) => {
                tracing::error!("Connection error: {:?}", e);
                "خطا در ارتباط با سرور".to_string()
            }
            AppError::Io(e) => {
                tracing::error!("I/O error: {:?}", e);
                "A file error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn conflict(entity: impl Into<String>) -> Self {
        AppError::Conflict(entity.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_the_taxonomy() {
        assert!(matches!(
            AppError::from_status(401, String::new()),
            AppError::Unauthorized
        ));
        assert!(matches!(
            AppError::from_status(403, String::new()),
            AppError::Forbidden
        ));
        assert!(matches!(
            AppError::from_status(404, String::new()),
            AppError::NotFound
        ));
        assert!(matches!(
            AppError::from_status(400, "bad".to_string()),
            AppError::Validation(_)
        ));
        assert!(matches!(
            AppError::from_status(500, String::new()),
            AppError::Api { status: 500, .. }
        ));
    }

    #[test]
    fn api_detail_is_surfaced_verbatim() {
        let err = AppError::from_status(400, "کد ملی تکراری است".to_string());
        assert_eq!(err.user_message(), "کد ملی تکراری است");
    }
}
