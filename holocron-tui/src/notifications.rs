//! Footer notifications.
//!
//! Fetch failures and rejected page requests land here; the footer renders
//! the most recent entry in place of the help line. The log is bounded so a
//! flaky catalog cannot grow it without limit.

use chrono::{DateTime, Utc};

const LOG_CAP: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

impl NotificationLevel {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "INFO",
            NotificationLevel::Warning => "WARN",
            NotificationLevel::Error => "ERROR",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub posted_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct NotificationLog {
    entries: Vec<Notification>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.entries.push(Notification {
            level,
            message: message.into(),
            posted_at: Utc::now(),
        });
        if self.entries.len() > LOG_CAP {
            let excess = self.entries.len() - LOG_CAP;
            self.entries.drain(..excess);
        }
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
