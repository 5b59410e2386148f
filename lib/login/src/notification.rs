//! Notifications raised by the login view and the stack that displays them.

use samcast_admin_core::NotificationId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How many toasts are shown at once before the oldest is evicted.
pub const DEFAULT_CAPACITY: usize = 5;

/// How long a toast stays up before it dismisses itself.
pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// Name used as the toast's CSS modifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    /// Creates a success notification.
    #[must_use]
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Creates an error notification.
    #[must_use]
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Receives notifications; takes ownership of each one.
pub trait NotificationSink {
    fn add_notification(&self, notification: Notification);
}

/// A notification as shown in the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEntry {
    pub id: NotificationId,
    pub notification: Notification,
}

/// Bounded, ordered list of visible notifications, oldest first.
#[derive(Debug, Clone)]
pub struct NotificationStack {
    entries: Vec<NotificationEntry>,
    capacity: usize,
    pushed: u64,
}

impl Default for NotificationStack {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl NotificationStack {
    /// Creates an empty stack holding at most `capacity` entries.
    ///
    /// A capacity of zero is treated as one.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
            pushed: 0,
        }
    }

    /// Appends a notification, evicting the oldest entries past capacity.
    pub fn push(&mut self, notification: Notification) -> NotificationId {
        self.pushed += 1;
        let id = NotificationId::from_sequence(self.pushed);
        self.entries.push(NotificationEntry { id, notification });
        if self.entries.len() > self.capacity {
            let overflow = self.entries.len() - self.capacity;
            self.entries.drain(..overflow);
        }
        id
    }

    /// Removes one entry. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    #[must_use]
    pub fn entries(&self) -> &[NotificationEntry] {
        &self.entries
    }
}
