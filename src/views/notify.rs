//! User-visible notifications ("toasts").
//!
//! Presentation is somebody else's job: views hand a [`Notification`] to a
//! [`Notifier`] and move on.

use std::time::Duration;
use tracing::{info, warn};

/// Label of the dismiss action shown next to every notification.
pub const DISMISS_LABEL: &str = "Close";

const ERROR_DURATION: Duration = Duration::from_millis(3000);
const SUCCESS_DURATION: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub action: &'static str,
    pub duration: Duration,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
            action: DISMISS_LABEL,
            duration: SUCCESS_DURATION,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
            action: DISMISS_LABEL,
            duration: ERROR_DURATION,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

/// Something that can show a notification to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the log. Used by the demo binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => info!(message = %notification.message, "Notification"),
            NotificationKind::Error => warn!(message = %notification.message, "Notification"),
        }
    }
}
