//! Transient notifications.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a notification; assigned from a monotonic counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Notification style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Success,
    Error,
    Info,
}

impl Severity {
    /// CSS class.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }
}

/// A message shown in the corner of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    /// Playing its exit animation; removed shortly after.
    pub exiting: bool,
}

/// Notifications in the order they were raised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationQueue {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notification and return its id.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        self.next_id += 1;
        let id = NotificationId(self.next_id);
        self.items.push(Notification {
            id,
            message: message.into(),
            severity,
            exiting: false,
        });
        id
    }

    /// Mark a notification as exiting.
    ///
    /// Returns false when it is gone or already exiting.
    pub fn begin_exit(&mut self, id: NotificationId) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) if !n.exiting => {
                n.exiting = true;
                true
            }
            _ => false,
        }
    }

    /// Remove a notification. Returns false when it is already gone.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() < len_before
    }

    /// Look up a notification.
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    /// Notifications currently shown.
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    /// Number of notifications shown.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if nothing is shown.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
