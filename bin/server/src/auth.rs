//! Browser-side auth provider backed by server functions.
//!
//! [`ServerFnAuthService`] is the [`AuthService`] handed to the login view.
//! It owns the `server_error` flag: transport failures raise it, a healthy
//! probe clears it. The server functions forward to the upstream admin API.

use crate::types::LoginReply;
use async_trait::async_trait;
use leptos::prelude::*;
use samcast_admin_login::{AuthService, AuthenticationError, ConnectivityError, Credentials, copy};

/// Server function forwarding a login attempt to the admin API.
#[server]
pub async fn authenticate(email: String, password: String) -> Result<LoginReply, ServerFnError> {
    use crate::error::UpstreamError;
    use crate::upstream::AdminApiClient;
    use axum::Extension;
    use std::sync::Arc;

    let Extension(client): Extension<Arc<AdminApiClient>> = leptos_axum::extract().await?;

    match client.login(&email, &password).await {
        Ok(()) => {
            tracing::info!(email = %email, "admin login accepted");
            Ok(LoginReply::Accepted)
        }
        Err(UpstreamError::Rejected { status, message }) => {
            tracing::info!(email = %email, status, "admin login rejected");
            Ok(LoginReply::Rejected { message })
        }
        Err(e) => {
            tracing::warn!(error = %e, email = %email, "admin API down during login");
            Ok(LoginReply::Unavailable)
        }
    }
}

/// Server function reporting whether the admin API answers.
///
/// An unreachable API is a completed probe with a negative answer; only a
/// failure to reach this server surfaces as an error in the browser.
#[server]
pub async fn server_health() -> Result<bool, ServerFnError> {
    use crate::upstream::AdminApiClient;
    use axum::Extension;
    use std::sync::Arc;

    let Extension(client): Extension<Arc<AdminApiClient>> = leptos_axum::extract().await?;

    match client.health().await {
        Ok(healthy) => {
            tracing::debug!(healthy, "admin API health probed");
            Ok(healthy)
        }
        Err(e) => {
            tracing::warn!(error = %e, "admin API health probe failed");
            Ok(false)
        }
    }
}

/// Auth provider used by the login page.
#[derive(Debug, Clone, Copy)]
pub struct ServerFnAuthService {
    server_error: RwSignal<bool>,
}

impl Default for ServerFnAuthService {
    fn default() -> Self {
        Self::new()
    }
}

impl ServerFnAuthService {
    pub fn new() -> Self {
        Self {
            server_error: RwSignal::new(false),
        }
    }

    /// Settles a login reply, raising `server_error` when the admin API or
    /// this server could not be reached.
    fn record_login(
        &self,
        reply: Result<LoginReply, ServerFnError>,
    ) -> Result<(), AuthenticationError> {
        let result = settle_login(reply);
        if matches!(result, Err(AuthenticationError::Unreachable { .. })) {
            self.server_error.set(true);
        }
        result
    }

    /// Mirrors a completed health probe into `server_error`.
    fn record_health(&self, healthy: bool) {
        self.server_error.set(!healthy);
    }
}

#[async_trait(?Send)]
impl AuthService for ServerFnAuthService {
    async fn login(&self, credentials: &Credentials) -> Result<(), AuthenticationError> {
        let reply = authenticate(
            credentials.email().to_string(),
            credentials.password().to_string(),
        )
        .await;
        self.record_login(reply)
    }

    async fn check_server_health(&self) -> Result<bool, ConnectivityError> {
        let healthy = server_health()
            .await
            .map_err(|e| ConnectivityError::Unreachable {
                reason: e.to_string(),
            })?;
        self.record_health(healthy);
        Ok(healthy)
    }

    fn server_error(&self) -> bool {
        self.server_error.get()
    }
}

/// Maps the server function's answer onto the login view's error model.
///
/// Transport failures keep their raw text in the log only; the user sees
/// the unavailable-server copy.
fn settle_login(reply: Result<LoginReply, ServerFnError>) -> Result<(), AuthenticationError> {
    match reply {
        Ok(LoginReply::Accepted) => Ok(()),
        Ok(LoginReply::Rejected { message }) => Err(AuthenticationError::rejected(message)),
        Ok(LoginReply::Unavailable) => Err(AuthenticationError::unreachable(
            copy::SERVER_UNAVAILABLE_MESSAGE,
        )),
        Err(e) => {
            tracing::warn!(error = %e, "login server function failed");
            Err(AuthenticationError::unreachable(
                copy::SERVER_UNAVAILABLE_MESSAGE,
            ))
        }
    }
}

/// Creates the auth provider and shares it through context.
///
/// The first health probe is made by the login page, under its loading
/// flag, so it cannot overlap a retry.
pub fn provide_auth() -> ServerFnAuthService {
    let auth = ServerFnAuthService::new();
    provide_context(auth);
    auth
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_reply_is_ok() {
        assert_eq!(settle_login(Ok(LoginReply::Accepted)), Ok(()));
    }

    #[test]
    fn rejection_keeps_upstream_message() {
        let result = settle_login(Ok(LoginReply::Rejected {
            message: "Invalid credentials".to_string(),
        }));
        assert_eq!(
            result,
            Err(AuthenticationError::rejected("Invalid credentials"))
        );
    }

    #[test]
    fn unavailable_reply_is_unreachable() {
        let err = settle_login(Ok(LoginReply::Unavailable)).unwrap_err();
        assert!(matches!(err, AuthenticationError::Unreachable { .. }));
        assert_eq!(err.message(), Some(copy::SERVER_UNAVAILABLE_MESSAGE));
    }

    #[test]
    fn transport_failure_shows_unavailable_copy() {
        let err = settle_login(Err(ServerFnError::new("connection reset"))).unwrap_err();
        assert!(matches!(err, AuthenticationError::Unreachable { .. }));
        assert_eq!(err.message(), Some(copy::SERVER_UNAVAILABLE_MESSAGE));
    }

    #[test]
    fn unreachable_login_raises_server_error() {
        let auth = ServerFnAuthService::new();
        assert!(!auth.server_error());

        let result = auth.record_login(Ok(LoginReply::Unavailable));
        assert!(result.is_err());
        assert!(auth.server_error());
    }

    #[test]
    fn transport_failure_raises_server_error() {
        let auth = ServerFnAuthService::new();

        let result = auth.record_login(Err(ServerFnError::new("connection reset")));
        assert!(result.is_err());
        assert!(auth.server_error());
    }

    #[test]
    fn rejection_leaves_server_error_alone() {
        let auth = ServerFnAuthService::new();

        let result = auth.record_login(Ok(LoginReply::Rejected {
            message: "Invalid credentials".to_string(),
        }));
        assert_eq!(
            result,
            Err(AuthenticationError::rejected("Invalid credentials"))
        );
        assert!(!auth.server_error());

        assert_eq!(auth.record_login(Ok(LoginReply::Accepted)), Ok(()));
        assert!(!auth.server_error());
    }

    #[test]
    fn health_probe_sets_and_clears_server_error() {
        let auth = ServerFnAuthService::new();

        auth.record_health(false);
        assert!(auth.server_error());

        auth.record_health(true);
        assert!(!auth.server_error());
    }
}
