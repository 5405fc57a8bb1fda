// SPDX-License-Identifier: MPL-2.0
//! Toast stack: ordering, expiry and dismissal.

use super::notification::{NoticeKind, Notification, NotificationId, Severity};
use std::collections::VecDeque;
use std::time::Instant;

/// Toasts drawn at once; the rest wait their turn.
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

/// Pending toasts, oldest first. The first [`MAX_VISIBLE`] are on screen.
#[derive(Debug, Default)]
pub struct Manager {
    toasts: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a toast. A toast with the same notice replaces the older one, so
    /// submitting a blank query twice shows a single warning.
    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Warning => log::warn!("notice: {}", notification.message_key()),
            Severity::Info => log::debug!("notice: {}", notification.message_key()),
        }

        self.toasts
            .retain(|existing| existing.kind() != notification.kind());
        self.toasts.push_back(notification);
        self.reveal(Instant::now());
    }

    /// Returns `true` if the toast was still there.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id() != id);
        self.reveal(Instant::now());
        self.toasts.len() < before
    }

    /// Drops on-screen toasts whose lifetime ran out by `now`. Waiting
    /// toasts move up and start their own lifetime at `now`.
    pub fn expire(&mut self, now: Instant) {
        let mut position = 0;
        self.toasts.retain(|toast| {
            let on_screen = position < MAX_VISIBLE;
            position += 1;
            !(on_screen && toast.is_expired(now))
        });
        self.reveal(now);
    }

    /// Removes notices about the previous search.
    pub fn clear_search_feedback(&mut self) {
        self.toasts.retain(|toast| !toast.is_search_feedback());
        self.reveal(Instant::now());
    }

    fn reveal(&mut self, now: Instant) {
        for toast in self.toasts.iter_mut().take(MAX_VISIBLE) {
            toast.mark_shown(now);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// Toasts currently on screen, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.toasts.iter().take(MAX_VISIBLE)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.toasts.len().min(MAX_VISIBLE)
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.toasts.len().saturating_sub(MAX_VISIBLE)
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.toasts.is_empty()
    }

    /// Whether a toast for `kind` is pending.
    #[must_use]
    pub fn contains(&self, kind: &NoticeKind) -> bool {
        self.toasts.iter().any(|toast| toast.kind() == kind)
    }
}
