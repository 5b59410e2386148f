//! Render model of the login screen.
//!
//! The screen is a two-state machine. Which state shows is decided solely
//! by the auth provider's `server_error` flag; the view never flips it.

use crate::copy;
use crate::credentials::Credentials;

/// Inputs the screen is derived from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    /// An operation is in flight.
    pub loading: bool,
    /// The auth provider reports the backend as unavailable.
    pub server_error: bool,
}

/// Footer indicator of backend reachability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerStatus {
    Online,
    Checking,
}

impl ServerStatus {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Online => copy::STATUS_ONLINE,
            Self::Checking => copy::STATUS_CHECKING,
        }
    }

    #[must_use]
    pub const fn is_online(&self) -> bool {
        matches!(self, Self::Online)
    }
}

/// The "server unavailable" panel. Only the retry action is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPanel {
    pub retry_enabled: bool,
    pub retry_label: &'static str,
    pub status: ServerStatus,
}

/// The email/password form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignInForm {
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub status: ServerStatus,
}

/// What the login route shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginScreen {
    ServerUnavailable(RetryPanel),
    SignIn(SignInForm),
}

impl LoginScreen {
    /// Derives the screen from view state and the current form input.
    #[must_use]
    pub fn resolve(state: ViewState, credentials: &Credentials) -> Self {
        if state.server_error {
            return Self::ServerUnavailable(RetryPanel {
                retry_enabled: !state.loading,
                retry_label: if state.loading {
                    copy::RETRY_LABEL_LOADING
                } else {
                    copy::RETRY_LABEL
                },
                status: ServerStatus::Checking,
            });
        }

        Self::SignIn(SignInForm {
            submit_enabled: !state.loading && credentials.is_complete(),
            submit_label: if state.loading {
                copy::SUBMIT_LABEL_LOADING
            } else {
                copy::SUBMIT_LABEL
            },
            status: ServerStatus::Online,
        })
    }

    #[must_use]
    pub fn shows_form(&self) -> bool {
        matches!(self, Self::SignIn(_))
    }

    #[must_use]
    pub fn shows_retry(&self) -> bool {
        matches!(self, Self::ServerUnavailable(_))
    }
}
