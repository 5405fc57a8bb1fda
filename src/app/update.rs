// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The gallery reports what it needs from the shell through
//! [`gallery::Effect`]; this module turns those effects into notification
//! changes.

use super::Message;
use crate::ui::gallery::{self, Effect as GalleryEffect};
use crate::ui::notifications;
use iced::Task;

/// Mutable view of the application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut gallery::State,
    pub notifications: &'a mut notifications::Manager,
}

/// Handles gallery messages and applies the resulting effect.
pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    let (effect, task) = ctx.gallery.handle_message(message);
    apply_gallery_effect(ctx.notifications, effect);
    task.map(Message::Gallery)
}

fn apply_gallery_effect(notifications: &mut notifications::Manager, effect: GalleryEffect) {
    match effect {
        GalleryEffect::None => {}
        GalleryEffect::SearchStarted => {
            notifications.clear_search_feedback();
        }
        GalleryEffect::Notify(notification) => notifications.push(notification),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{NoticeKind, Notification};

    #[test]
    fn search_started_clears_only_search_notices() {
        let mut manager = notifications::Manager::new();
        manager.push(Notification::no_results("zzzz"));
        manager.push(Notification::config_unreadable());

        apply_gallery_effect(&mut manager, GalleryEffect::SearchStarted);

        assert_eq!(manager.visible_count(), 1);
        assert!(manager.contains(&NoticeKind::ConfigUnreadable));
    }

    #[test]
    fn notify_pushes_toast() {
        let mut manager = notifications::Manager::new();
        apply_gallery_effect(
            &mut manager,
            GalleryEffect::Notify(Notification::blank_query()),
        );
        assert_eq!(manager.visible_count(), 1);

        apply_gallery_effect(&mut manager, GalleryEffect::None);
        assert_eq!(manager.visible_count(), 1);
    }
}
