//! Shared types used across server functions and UI components.

/// Outcome of a login attempt as seen by the browser.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LoginReply {
    /// The admin API accepted the credentials.
    Accepted,
    /// The admin API refused them; `message` is shown to the user when not
    /// empty.
    Rejected { message: String },
    /// The admin API could not be reached.
    Unavailable,
}
