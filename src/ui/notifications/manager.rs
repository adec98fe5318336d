// SPDX-License-Identifier: MPL-2.0
//! Notification queue: at most a few toasts on screen, the rest waiting.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;
use std::time::Instant;

const MAX_VISIBLE: usize = 3;

/// Prefix shared by every catalog failure key.
const CATALOG_ERROR_PREFIX: &str = "notification-catalog-";

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification` now if there is room, otherwise queues it.
    pub fn push(&mut self, notification: Notification) {
        log::debug!(
            "notification {:?}: {}",
            notification.severity(),
            notification.message_key()
        );
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Dismisses visible notifications that expired at `now`.
    pub fn tick(&mut self, now: Instant) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.should_auto_dismiss(now))
            .map(Notification::id)
            .collect();

        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Drops stale catalog failures once a later fetch succeeded.
    pub fn clear_catalog_errors(&mut self) {
        let visible_before = self.visible.len();
        self.visible
            .retain(|n| !n.message_key().starts_with(CATALOG_ERROR_PREFIX));
        self.queue
            .retain(|n| !n.message_key().starts_with(CATALOG_ERROR_PREFIX));

        if self.visible.len() < visible_before {
            self.promote_from_queue();
        }
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(notification) => self.visible.push_back(notification),
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible.len(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_queues_when_visible_is_full() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::info(format!("test-{i}")));
        }
        manager.push(Notification::info("queued"));

        assert_eq!(manager.visible.len(), MAX_VISIBLE);
        assert_eq!(manager.queue.len(), 1);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();
        let first = Notification::info("visible-0");
        let first_id = first.id();
        manager.push(first);
        for i in 1..=MAX_VISIBLE {
            manager.push(Notification::info(format!("visible-{i}")));
        }
        assert_eq!(manager.queue.len(), 1);

        assert!(manager.dismiss(first_id));
        assert_eq!(manager.visible.len(), MAX_VISIBLE);
        assert_eq!(manager.queue.len(), 0);
    }

    #[test]
    fn dismiss_unknown_id_returns_false() {
        let mut manager = Manager::new();
        let stray = Notification::info("temp").id();
        assert!(!manager.dismiss(stray));
    }

    #[test]
    fn tick_expires_info_before_warnings() {
        let mut manager = Manager::new();
        manager.push(Notification::info("notification-copied"));
        manager.push(Notification::warning("notification-config-load-error"));

        manager.tick(Instant::now() + Duration::from_secs(4));
        assert_eq!(manager.visible.len(), 1);
        assert_eq!(
            manager.visible().next().map(Notification::message_key),
            Some("notification-config-load-error")
        );
    }

    #[test]
    fn handle_message_dismisses() {
        let mut manager = Manager::new();
        let notification = Notification::warning("notification-browser-error");
        let id = notification.id();
        manager.push(notification);

        manager.handle_message(&Message::Dismiss(id));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn clear_catalog_errors_keeps_other_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::warning("notification-catalog-network"));
        manager.push(Notification::warning("notification-catalog-status"));
        manager.push(Notification::warning("notification-browser-error"));
        manager.push(Notification::warning("notification-catalog-malformed"));

        manager.clear_catalog_errors();

        assert_eq!(manager.visible.len(), 1);
        assert_eq!(manager.queue.len(), 0);
        assert!(manager
            .visible()
            .all(|n| !n.message_key().starts_with(CATALOG_ERROR_PREFIX)));
    }
}
