//! Deferred steps keyed by id.
//!
//! The state owner never reads a clock. It registers a task here and emits
//! a [`Effect::Schedule`](crate::Effect::Schedule); the platform reports the
//! elapsed timer back with the task id. Cancelled or already-fired ids are
//! simply not found.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::navigation::Section;
use crate::notifications::NotificationId;

/// Identifies a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Work to do when a timer elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Task {
    /// Start a notification's exit animation.
    BeginExit(NotificationId),
    /// Drop a notification after its exit animation.
    RemoveNotification(NotificationId),
    /// Scroll to a home section once it is rendered.
    ScrollToSection(Section),
}

/// Pending tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scheduler {
    next_id: u64,
    pending: BTreeMap<TaskId, Task>,
}

impl Scheduler {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task and return its id.
    pub fn schedule(&mut self, task: Task) -> TaskId {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        self.pending.insert(id, task);
        id
    }

    /// Drop a pending task. Unknown ids are ignored.
    pub fn cancel(&mut self, id: TaskId) -> Option<Task> {
        self.pending.remove(&id)
    }

    /// Claim a task whose timer elapsed.
    ///
    /// Returns `None` for cancelled or already-fired ids.
    pub fn fire(&mut self, id: TaskId) -> Option<Task> {
        self.pending.remove(&id)
    }

    /// Find the pending id of a task.
    pub fn find(&self, task: &Task) -> Option<TaskId> {
        self.pending
            .iter()
            .find_map(|(id, pending)| (pending == task).then_some(*id))
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
