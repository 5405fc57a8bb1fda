// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::gallery;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval of the toast auto-dismiss tick.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Spinner animation and keyboard shortcuts of the gallery.
pub fn create_gallery_subscription(gallery: &gallery::State) -> Subscription<Message> {
    gallery.subscription().map(Message::Gallery)
}
