//! User-facing notification sink.
//!
//! # Responsibility
//! - Carry success/error feedback for planner actions to the UI shell.
//!
//! # Invariants
//! - Notifying never fails and never affects task state.

use log::{info, warn};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationLevel {
    Success,
    Error,
}

impl NotificationLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// One queued notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

/// Fire-and-forget feedback channel.
pub trait Notifier {
    fn notify(&self, level: NotificationLevel, message: &str);

    fn success(&self, message: &str) {
        self.notify(NotificationLevel::Success, message);
    }

    fn error(&self, message: &str) {
        self.notify(NotificationLevel::Error, message);
    }
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, level: NotificationLevel, message: &str) {
        (**self).notify(level, message);
    }
}

/// Routes notifications into the process log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, level: NotificationLevel, message: &str) {
        match level {
            NotificationLevel::Success => {
                info!("event=notify module=notify level=success message={message:?}")
            }
            NotificationLevel::Error => {
                warn!("event=notify module=notify level=error message={message:?}")
            }
        }
    }
}

/// FIFO of pending notifications, drained by the UI shell as toasts.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    pending: RefCell<VecDeque<Notification>>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns all pending notifications in arrival order.
    pub fn drain(&self) -> Vec<Notification> {
        self.pending.borrow_mut().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }

    /// Most recent notification, without draining.
    pub fn last(&self) -> Option<Notification> {
        self.pending.borrow().back().cloned()
    }
}

impl Notifier for NotificationQueue {
    fn notify(&self, level: NotificationLevel, message: &str) {
        self.pending.borrow_mut().push_back(Notification {
            level,
            message: message.to_string(),
        });
    }
}
