//! Authentication collaborator seam.

use crate::credentials::Credentials;
use crate::error::{AuthenticationError, ConnectivityError};
use async_trait::async_trait;

/// What the login view needs from the auth provider.
///
/// The browser runs a single-threaded event loop, so implementations do not
/// have to produce `Send` futures.
#[async_trait(?Send)]
pub trait AuthService {
    /// Attempts to sign in with the given credentials.
    async fn login(&self, credentials: &Credentials) -> Result<(), AuthenticationError>;

    /// Asks whether the backend is answering again.
    ///
    /// `Ok(false)` means the probe completed and the backend is down;
    /// `Err` means the probe itself could not complete.
    async fn check_server_health(&self) -> Result<bool, ConnectivityError>;

    /// Whether the provider currently considers the backend unavailable.
    fn server_error(&self) -> bool;
}
