//! Login view logic for the SamCast admin panel.
//!
//! This crate holds everything the login screen does that is not markup:
//! - Form input (`Credentials`) and the render model (`LoginScreen`)
//! - The two user actions, submit and retry, on `LoginView`
//! - Notifications (`Notification`, `NotificationStack`)
//! - The collaborator seams (`AuthService`, `NotificationSink`, `Navigator`)
//!
//! Authentication, health probing and routing are collaborator concerns.
//! The view is handed implementations of them and never looks them up.
//!
//! # Example
//!
//! ```
//! use samcast_admin_login::{Credentials, LoginScreen, ViewState};
//!
//! let credentials = Credentials::new("admin@samcast.com.br", "");
//! let screen = LoginScreen::resolve(ViewState::default(), &credentials);
//!
//! // The submit button stays disabled until both fields are filled in.
//! match screen {
//!     LoginScreen::SignIn(form) => assert!(!form.submit_enabled),
//!     LoginScreen::ServerUnavailable(_) => unreachable!(),
//! }
//! ```

pub mod auth;
pub mod copy;
pub mod credentials;
pub mod error;
pub mod loading;
pub mod navigation;
pub mod notification;
pub mod screen;
pub mod view;

pub use auth::AuthService;
pub use credentials::Credentials;
pub use error::{AuthenticationError, ConnectivityError};
pub use loading::{LoadingFlag, LoadingGuard};
pub use navigation::{DASHBOARD_PATH, LOGIN_PATH, NavigateOptions, Navigator};
pub use notification::{
    Notification, NotificationEntry, NotificationKind, NotificationSink, NotificationStack,
};
pub use screen::{LoginScreen, RetryPanel, ServerStatus, SignInForm, ViewState};
pub use view::{LoginView, RetryOutcome, SubmitOutcome};
