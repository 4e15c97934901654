//! Transient notifications
//!
//! Success and error banners that disappear after a fixed delay.
//! Overlapping notifications stack; identical messages are not merged.

use std::time::{Duration, Instant};
use uuid::Uuid;

/// Default time a notification stays visible
pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_millis(5000);

/// Banner flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Green banner
    Success,
    /// Red banner
    Error,
}

impl NotificationKind {
    /// Banner background color
    pub fn color_hex(&self) -> &'static str {
        match self {
            NotificationKind::Success => "#4CAF50",
            NotificationKind::Error => "#f44336",
        }
    }
}

/// A banner on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Unique id
    pub id: Uuid,
    /// Flavor
    pub kind: NotificationKind,
    /// Text
    pub message: String,
    /// When it was shown
    pub created_at: Instant,
}

impl Notification {
    /// Whether the notification has outlived `duration` at `now`
    pub fn is_expired(&self, now: Instant, duration: Duration) -> bool {
        now.saturating_duration_since(self.created_at) >= duration
    }
}

/// Currently shown notifications, oldest first
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    items: Vec<Notification>,
    duration: Duration,
}

impl NotificationCenter {
    /// Create a center whose notifications last `duration`
    pub fn new(duration: Duration) -> Self {
        Self {
            items: Vec::new(),
            duration,
        }
    }

    /// Show a notification at `now`
    pub fn show_at(&mut self, kind: NotificationKind, message: impl Into<String>, now: Instant) -> Uuid {
        let notification = Notification {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            created_at: now,
        };
        let id = notification.id;
        tracing::debug!("Notification ({:?}): {}", kind, notification.message);
        self.items.push(notification);
        id
    }

    /// Show a success banner
    pub fn show_success(&mut self, message: impl Into<String>) -> Uuid {
        self.show_at(NotificationKind::Success, message, Instant::now())
    }

    /// Show an error banner
    pub fn show_error(&mut self, message: impl Into<String>) -> Uuid {
        self.show_at(NotificationKind::Error, message, Instant::now())
    }

    /// Notifications still visible at `now`
    pub fn active(&self, now: Instant) -> impl Iterator<Item = &Notification> {
        let duration = self.duration;
        self.items.iter().filter(move |n| !n.is_expired(now, duration))
    }

    /// Drop expired notifications; returns how many were removed
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.items.len();
        let duration = self.duration;
        self.items.retain(|n| !n.is_expired(now, duration));
        before - self.items.len()
    }

    /// Remove a notification early
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Number of notifications held (expired ones included until pruned)
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no notifications are held
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_DURATION)
    }
}
