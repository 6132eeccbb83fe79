//! Transient Notifications
//!
//! A single-slot banner: the newest notification replaces the previous
//! one. Each notification gets a fresh id so that an auto-dismiss timer
//! armed for an older one cannot close its replacement.

use crate::models::Severity;

/// Default auto-dismiss delay in milliseconds
pub const DEFAULT_NOTIFICATION_TIMEOUT_MS: u32 = 3000;

/// A visible notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// Holds at most one notification
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notifier {
    current: Option<Notification>,
    next_id: u64,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notification, replacing any visible one. Returns its id.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Notification {
            id,
            message: message.into(),
            severity,
        });
        id
    }

    /// Dismiss the notification with `id` if it is still the visible one
    pub fn dismiss(&mut self, id: u64) -> bool {
        match &self.current {
            Some(n) if n.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Close whatever is visible
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}
