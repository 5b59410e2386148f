//! The login view: submit, retry and render.
//!
//! `LoginView` owns no authentication logic. It is constructed with the
//! three collaborators it talks to and turns every outcome, good or bad,
//! into a notification. Submit and retry share one loading flag, so at most
//! one of them is in flight at any time.

use crate::auth::AuthService;
use crate::copy;
use crate::credentials::Credentials;
use crate::error::{AuthenticationError, ConnectivityError};
use crate::loading::LoadingFlag;
use crate::navigation::{DASHBOARD_PATH, NavigateOptions, Navigator};
use crate::notification::{Notification, NotificationSink};
use std::rc::Rc;
use tracing::{debug, info, instrument, warn};

/// Result of [`LoginView::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Signed in and sent to the dashboard.
    SignedIn,
    /// The auth service refused or could not be reached.
    Failed(AuthenticationError),
    /// A required field was empty. Nothing was sent.
    Incomplete,
    /// Another operation was in flight. Nothing was sent.
    Busy,
}

/// Result of [`LoginView::retry_connection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryOutcome {
    /// The backend answers again.
    Restored,
    /// The probe completed and the backend is still down.
    StillDown,
    /// The probe itself failed.
    ProbeFailed(ConnectivityError),
    /// Another operation was in flight. No probe was made.
    Busy,
}

/// Login screen controller.
#[derive(Clone)]
pub struct LoginView {
    auth: Rc<dyn AuthService>,
    notifications: Rc<dyn NotificationSink>,
    navigator: Rc<dyn Navigator>,
    loading: LoadingFlag,
}

impl LoginView {
    /// Creates a view over the given collaborators with an idle loading flag.
    pub fn new(
        auth: Rc<dyn AuthService>,
        notifications: Rc<dyn NotificationSink>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            auth,
            notifications,
            navigator,
            loading: LoadingFlag::new(),
        }
    }

    /// Uses `flag` as the loading flag, typically one carrying an observer.
    #[must_use]
    pub fn with_loading_flag(mut self, flag: LoadingFlag) -> Self {
        self.loading = flag;
        self
    }

    /// Signs in with `credentials`.
    ///
    /// On success a success notification is raised and the user is sent to
    /// the dashboard, replacing the login entry in history. On failure an
    /// error notification carries the service's message, or a generic one
    /// when it has none.
    #[instrument(skip_all, fields(email = %credentials.email()))]
    pub async fn submit(&self, credentials: &Credentials) -> SubmitOutcome {
        if !credentials.is_complete() {
            debug!("submit ignored, form incomplete");
            return SubmitOutcome::Incomplete;
        }
        let Some(_loading) = self.loading.try_acquire() else {
            debug!("submit ignored, operation in flight");
            return SubmitOutcome::Busy;
        };

        match self.auth.login(credentials).await {
            Ok(()) => {
                info!("admin signed in");
                self.notifications.add_notification(Notification::success(
                    copy::LOGIN_SUCCESS_TITLE,
                    copy::LOGIN_SUCCESS_MESSAGE,
                ));
                self.navigator
                    .navigate(DASHBOARD_PATH, NavigateOptions::replace());
                SubmitOutcome::SignedIn
            }
            Err(err) => {
                warn!(error = %err, "login failed");
                let message = err.message().unwrap_or(copy::LOGIN_FAILURE_FALLBACK);
                self.notifications
                    .add_notification(Notification::error(copy::LOGIN_FAILURE_TITLE, message));
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Probes the backend again after the user asked to retry.
    ///
    /// Leaving the unavailable screen is up to the auth provider, which
    /// clears its `server_error` flag once a probe succeeds.
    #[instrument(skip_all)]
    pub async fn retry_connection(&self) -> RetryOutcome {
        let Some(_loading) = self.loading.try_acquire() else {
            debug!("retry ignored, operation in flight");
            return RetryOutcome::Busy;
        };

        match self.auth.check_server_health().await {
            Ok(true) => {
                info!("backend reachable again");
                self.notifications.add_notification(Notification::success(
                    copy::HEALTH_RESTORED_TITLE,
                    copy::HEALTH_RESTORED_MESSAGE,
                ));
                RetryOutcome::Restored
            }
            Ok(false) => {
                warn!("backend still unavailable");
                self.notifications.add_notification(Notification::error(
                    copy::HEALTH_DOWN_TITLE,
                    copy::HEALTH_DOWN_MESSAGE,
                ));
                RetryOutcome::StillDown
            }
            Err(err) => {
                warn!(error = %err, "health probe failed");
                self.notifications.add_notification(Notification::error(
                    copy::HEALTH_PROBE_FAILED_TITLE,
                    copy::HEALTH_PROBE_FAILED_MESSAGE,
                ));
                RetryOutcome::ProbeFailed(err)
            }
        }
    }

    /// Refreshes the auth provider's view of the backend without telling
    /// the user anything.
    ///
    /// Runs when the login page mounts. It takes the same loading flag as
    /// submit and retry, so it never overlaps them.
    #[instrument(skip_all)]
    pub async fn refresh_server_status(&self) -> RetryOutcome {
        let Some(_loading) = self.loading.try_acquire() else {
            debug!("status refresh skipped, operation in flight");
            return RetryOutcome::Busy;
        };

        match self.auth.check_server_health().await {
            Ok(true) => RetryOutcome::Restored,
            Ok(false) => {
                warn!("backend unavailable on page load");
                RetryOutcome::StillDown
            }
            Err(err) => {
                warn!(error = %err, "status refresh failed");
                RetryOutcome::ProbeFailed(err)
            }
        }
    }
}
