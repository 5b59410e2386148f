//! Domain error types for server operations.
//!
//! Errors from the upstream admin API are logged in full on the server and
//! folded into a [`LoginReply`](crate::types::LoginReply) or a health bit
//! before they reach the browser.

use std::fmt;

/// Errors talking to the upstream admin API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    /// The HTTP client could not be built from configuration.
    Configuration { details: String },
    /// The request never got a response.
    Unreachable { details: String },
    /// The API answered with a server-side failure (5xx).
    Unavailable { status: u16 },
    /// The API refused the request (4xx); `message` comes from its body.
    Rejected { status: u16, message: String },
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration { details } => {
                write!(f, "admin API client misconfigured: {}", details)
            }
            Self::Unreachable { details } => {
                write!(f, "admin API unreachable: {}", details)
            }
            Self::Unavailable { status } => {
                write!(f, "admin API unavailable (HTTP {})", status)
            }
            Self::Rejected { status, message } => {
                write!(f, "admin API rejected request (HTTP {}): {}", status, message)
            }
        }
    }
}

impl std::error::Error for UpstreamError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_display_includes_status() {
        let err = UpstreamError::Unavailable { status: 503 };
        assert!(err.to_string().contains("unavailable"));
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn rejected_display_includes_status_and_message() {
        let err = UpstreamError::Rejected {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("Invalid credentials"));
    }
}
