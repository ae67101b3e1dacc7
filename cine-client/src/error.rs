//! Client error types

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
///
/// Every failed user-initiated operation ends up here. [`ClientError::user_message`]
/// is the text a UI shows in its notification.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport failed (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with an error status not covered below
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required: {0}")]
    Unauthorized(String),

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error (client-side or 400 from the server)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Conflicting write (e.g. email already registered)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Operation not allowed in the current session/store state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Booking rule violation
    #[error("Booking error: {0}")]
    Booking(#[from] crate::booking::BookingError),

    /// Local IO error (token storage)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Map to the shared error code
    pub fn code(&self) -> ErrorCode {
        match self {
            ClientError::Http(e) if e.is_timeout() => ErrorCode::TimeoutError,
            ClientError::Http(e) if e.is_decode() => ErrorCode::InvalidResponse,
            ClientError::Http(_) => ErrorCode::NetworkError,
            ClientError::Api { status, .. } => shared::http::StatusCode::from_u16(*status)
                .map(ErrorCode::from_http_status)
                .unwrap_or(ErrorCode::Unknown),
            ClientError::InvalidResponse(_) | ClientError::Serialization(_) => {
                ErrorCode::InvalidResponse
            }
            ClientError::Unauthorized(_) => ErrorCode::NotAuthenticated,
            ClientError::Forbidden(_) => ErrorCode::PermissionDenied,
            ClientError::NotFound(_) => ErrorCode::NotFound,
            ClientError::Validation(_) => ErrorCode::ValidationFailed,
            ClientError::Conflict(_) => ErrorCode::AlreadyExists,
            ClientError::InvalidState(_) => ErrorCode::InvalidState,
            ClientError::Config(_) => ErrorCode::ConfigError,
            ClientError::Booking(e) => e.code(),
            ClientError::Io(_) => ErrorCode::StorageError,
        }
    }

    /// Network and timeout failures; everything else is permanent
    pub fn is_transient(&self) -> bool {
        matches!(
            self.code(),
            ErrorCode::NetworkError | ErrorCode::TimeoutError
        )
    }

    /// Text for the visible failure notification
    ///
    /// Server-provided messages are preferred; otherwise the code's default
    /// message is used.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api { message, .. }
            | ClientError::Unauthorized(message)
            | ClientError::Forbidden(message)
            | ClientError::NotFound(message)
            | ClientError::Validation(message)
            | ClientError::Conflict(message)
            | ClientError::InvalidState(message)
                if !message.is_empty() =>
            {
                message.clone()
            }
            ClientError::Booking(e) => e.to_string(),
            _ => self.code().message().to_string(),
        }
    }
}

impl From<AppError> for ClientError {
    fn from(err: AppError) -> Self {
        match err.code {
            ErrorCode::NotFound => ClientError::NotFound(err.message),
            ErrorCode::InvalidState => ClientError::InvalidState(err.message),
            ErrorCode::NotAuthenticated => ClientError::Unauthorized(err.message),
            ErrorCode::PermissionDenied => ClientError::Forbidden(err.message),
            ErrorCode::ConfigError => ClientError::Config(err.message),
            _ => ClientError::Validation(err.message),
        }
    }
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ClientError::from(AppError::from(errors))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
