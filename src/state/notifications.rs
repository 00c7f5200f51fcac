//! Transient notifications (toasts).

use crate::form::{NotificationKind, Notifier};
use std::time::{Duration, Instant};

/// A single toast.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
}

/// Holds live toasts until their time to live runs out.
///
#[derive(Debug)]
pub struct Notifications {
    items: Vec<Notification>,
    ttl: Duration,
}

impl Notifications {
    pub fn new(ttl: Duration) -> Self {
        Notifications { items: vec![], ttl }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.last()
    }

    /// Drop every toast older than the time to live.
    ///
    pub fn expire(&mut self, now: Instant) -> &mut Self {
        let ttl = self.ttl;
        self.items
            .retain(|n| now.saturating_duration_since(n.created_at) < ttl);
        self
    }
}

impl Notifier for Notifications {
    fn notify(&mut self, message: &str, kind: NotificationKind) {
        self.items.push(Notification {
            message: message.to_string(),
            kind,
            created_at: Instant::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_appends() {
        let mut notifications = Notifications::new(Duration::from_secs(4));
        notifications.notify("one", NotificationKind::Info);
        notifications.notify("two", NotificationKind::Error);
        assert_eq!(notifications.items().len(), 2);
        assert_eq!(notifications.latest().map(|n| n.message.as_str()), Some("two"));
    }

    #[test]
    fn test_expire() {
        let mut notifications = Notifications::new(Duration::from_millis(100));
        notifications.notify("old", NotificationKind::Success);
        let created = notifications.items()[0].created_at;
        notifications.expire(created + Duration::from_millis(50));
        assert_eq!(notifications.items().len(), 1);
        notifications.expire(created + Duration::from_millis(100));
        assert!(notifications.items().is_empty());
    }
}
