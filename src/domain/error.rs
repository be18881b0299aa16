//! Domain error taxonomy.
//!
//! Provides the closed set of failures repositories report, the HTTP status
//! mapping into it, and the user-facing message for each kind.

use thiserror::Error;

use super::message::Message;

/// Failures surfaced by repositories to feature managers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// No connectivity, unknown host, connect or request timeout
    #[error("Network unavailable")]
    Network,

    #[error("Server not available")]
    ServerNotAvailable,

    /// Session token missing, expired or rejected
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found")]
    NotFound,

    /// The server rejected the request content
    #[error("Validation failed: {message}")]
    ServerValidation { message: String },

    /// Anything not covered above, including local storage failures
    #[error("{message}")]
    Generic { message: String },
}

/// Either a success payload or a domain error.
pub type DomainResponse<T> = Result<T, DomainError>;

impl DomainError {
    pub fn generic(message: impl Into<String>) -> Self {
        DomainError::Generic {
            message: message.into(),
        }
    }

    /// Map a non-2xx HTTP status to the taxonomy.
    ///
    /// `message` comes from the parsed error body when there is one.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 | 403 => DomainError::Unauthorized,
            404 => DomainError::NotFound,
            400 | 409 | 422 => DomainError::ServerValidation {
                message: message.unwrap_or_else(|| format!("HTTP {}", status)),
            },
            500 | 502 | 503 | 504 => DomainError::ServerNotAvailable,
            _ => DomainError::Generic {
                message: message.unwrap_or_else(|| format!("HTTP {}", status)),
            },
        }
    }

    /// Get error type string for logs
    pub fn error_type(&self) -> &'static str {
        match self {
            DomainError::Network => "network",
            DomainError::ServerNotAvailable => "server_not_available",
            DomainError::Unauthorized => "unauthorized",
            DomainError::NotFound => "not_found",
            DomainError::ServerValidation { .. } => "server_validation",
            DomainError::Generic { .. } => "generic",
        }
    }

    /// Message shown to the user for this kind of failure.
    pub fn user_message(&self) -> Message {
        match self {
            DomainError::Network => Message::NetworkUnavailable,
            DomainError::ServerNotAvailable => Message::ServerUnavailable,
            DomainError::Unauthorized => Message::SessionExpired,
            DomainError::NotFound => Message::NotFound,
            DomainError::ServerValidation { .. } => Message::ValidationFailed,
            DomainError::Generic { .. } => Message::SomethingWentWrong,
        }
    }
}
