//! Error types for the login crate.
//!
//! Both kinds end up as notifications; neither is fatal to the view.
//! - `AuthenticationError`: `login` did not succeed
//! - `ConnectivityError`: the health probe itself could not complete

use std::fmt;

/// Failures reported by [`AuthService::login`](crate::AuthService::login).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationError {
    /// The auth service answered and refused the credentials.
    Rejected { message: String },
    /// The auth service could not be reached.
    Unreachable { reason: String },
}

impl AuthenticationError {
    /// Creates a rejection carrying the service's message.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Creates a transport failure.
    #[must_use]
    pub fn unreachable(reason: impl Into<String>) -> Self {
        Self::Unreachable {
            reason: reason.into(),
        }
    }

    /// Human-readable message carried by the failure, if it has one.
    ///
    /// An empty message counts as none, so callers fall back to their own
    /// wording.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        let text = match self {
            Self::Rejected { message } => message,
            Self::Unreachable { reason } => reason,
        };
        (!text.is_empty()).then_some(text.as_str())
    }
}

impl fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected { message } => write!(f, "login rejected: {message}"),
            Self::Unreachable { reason } => write!(f, "auth service unreachable: {reason}"),
        }
    }
}

impl std::error::Error for AuthenticationError {}

/// Failures of the health probe itself, as opposed to an unhealthy answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectivityError {
    /// The probe request never got an answer.
    Unreachable { reason: String },
    /// An answer came back but could not be understood.
    InvalidResponse { reason: String },
}

impl fmt::Display for ConnectivityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreachable { reason } => write!(f, "health probe failed: {reason}"),
            Self::InvalidResponse { reason } => {
                write!(f, "health probe returned an invalid response: {reason}")
            }
        }
    }
}

impl std::error::Error for ConnectivityError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_exposes_message() {
        let err = AuthenticationError::rejected("Invalid credentials");
        assert_eq!(err.message(), Some("Invalid credentials"));
        assert!(err.to_string().contains("Invalid credentials"));
    }

    #[test]
    fn empty_message_is_none() {
        assert_eq!(AuthenticationError::rejected("").message(), None);
        assert_eq!(AuthenticationError::unreachable("").message(), None);
    }

    #[test]
    fn unreachable_exposes_reason() {
        let err = AuthenticationError::unreachable("connection refused");
        assert_eq!(err.message(), Some("connection refused"));
        assert!(err.to_string().contains("unreachable"));
    }

    #[test]
    fn connectivity_error_display() {
        let err = ConnectivityError::InvalidResponse {
            reason: "expected bool".to_string(),
        };
        assert!(err.to_string().contains("invalid response"));
        assert!(err.to_string().contains("expected bool"));
    }
}
