//! Authentication types for the domain layer.
//!
//! An authenticated caller is whoever presented a bearer credential that the
//! `SessionValidator` port accepted. These types carry no provider details.

use super::UserId;
use thiserror::Error;

/// Caller identity resolved from a validated bearer credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The unique user identifier.
    pub id: UserId,

    /// Display name if the credential source provides one.
    pub display_name: Option<String>,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(id: UserId, display_name: Option<String>) -> Self {
        Self { id, display_name }
    }
}

/// Authentication errors that can occur during credential validation.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The credential is missing, malformed or unknown.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The credential source is unavailable.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this is a transient error that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::ServiceUnavailable(_))
    }
}
