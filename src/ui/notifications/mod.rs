// SPDX-License-Identifier: MPL-2.0
//! Toasts for search feedback and startup problems.
//!
//! - [`notification`] lists the notices the gallery can raise
//! - [`manager`] keeps them ordered, expires and dismisses them
//! - [`toast`] draws the visible ones
//!
//! At most three toasts are on screen; the rest wait in line. Warnings stay
//! up longer than infos. Search notices are dropped as soon as a new search
//! starts, since they describe the previous query.

mod manager;
mod notification;
pub mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{NoticeKind, Notification, Severity};
