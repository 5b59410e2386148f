//! Toast notifications.
//!
//! [`NotificationCenter`] is the [`NotificationSink`] handed to pages. It
//! keeps a bounded [`NotificationStack`] in a signal and drops each toast
//! after [`DEFAULT_DISMISS_AFTER`] in the browser.

use leptos::prelude::*;
use samcast_admin_core::NotificationId;
use samcast_admin_login::notification::DEFAULT_DISMISS_AFTER;
use samcast_admin_login::{Notification, NotificationSink, NotificationStack};

/// Shared handle to the toast stack.
#[derive(Debug, Clone, Copy)]
pub struct NotificationCenter {
    stack: RwSignal<NotificationStack>,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(NotificationStack::default()),
        }
    }

    pub fn dismiss(&self, id: NotificationId) {
        self.stack.update(|stack| {
            stack.dismiss(id);
        });
    }

    #[cfg(feature = "hydrate")]
    fn schedule_dismiss(&self, id: NotificationId) {
        let stack = self.stack;
        set_timeout(
            move || {
                stack.try_update(|stack| stack.dismiss(id));
            },
            DEFAULT_DISMISS_AFTER,
        );
    }

    #[cfg(not(feature = "hydrate"))]
    fn schedule_dismiss(&self, id: NotificationId) {
        tracing::trace!(
            %id,
            after = ?DEFAULT_DISMISS_AFTER,
            "auto-dismiss skipped outside the browser"
        );
    }
}

impl NotificationSink for NotificationCenter {
    fn add_notification(&self, notification: Notification) {
        tracing::debug!(
            kind = notification.kind.as_str(),
            title = %notification.title,
            "notification raised"
        );
        if let Some(id) = self.stack.try_update(|stack| stack.push(notification)) {
            self.schedule_dismiss(id);
        }
    }
}

/// Creates the notification center and shares it through context.
pub fn provide_notifications() -> NotificationCenter {
    let center = NotificationCenter::new();
    provide_context(center);
    center
}

/// Renders the toast stack, newest last.
#[component]
pub fn NotificationToasts() -> impl IntoView {
    let center = expect_context::<NotificationCenter>();

    view! {
        <div class="toasts" aria-live="polite">
            <For
                each=move || center.stack.with(|stack| stack.entries().to_vec())
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    let class = format!("toast toast-{}", entry.notification.kind.as_str());
                    view! {
                        <div class=class role="status">
                            <div class="toast-body">
                                <strong class="toast-title">{entry.notification.title}</strong>
                                <p class="toast-message">{entry.notification.message}</p>
                            </div>
                            <button
                                type="button"
                                class="toast-close"
                                aria-label="Fechar"
                                on:click=move |_| center.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
