// SPDX-License-Identifier: MPL-2.0
//! The notices the gallery can raise as toasts.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Identifies one toast so its dismiss button can target it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
        }
    }

    /// Text glyph drawn in the accent color.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Info => "i",
            Severity::Warning => "!",
        }
    }

    /// How long a toast stays on screen before it expires.
    #[must_use]
    pub fn lifetime(self) -> Duration {
        match self {
            Severity::Info => Duration::from_secs(4),
            Severity::Warning => Duration::from_secs(6),
        }
    }
}

/// What happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeKind {
    /// A search came back empty.
    NoResults { query: String },
    /// The search bar was submitted with blank text.
    BlankQuery,
    /// `settings.toml` exists but could not be read; defaults are in use.
    ConfigUnreadable,
}

impl NoticeKind {
    fn message_key(&self) -> &'static str {
        match self {
            NoticeKind::NoResults { .. } => "notice-no-results",
            NoticeKind::BlankQuery => "notice-blank-query",
            NoticeKind::ConfigUnreadable => "notification-config-load-error",
        }
    }

    fn severity(&self) -> Severity {
        match self {
            NoticeKind::NoResults { .. } => Severity::Info,
            NoticeKind::BlankQuery | NoticeKind::ConfigUnreadable => Severity::Warning,
        }
    }
}

/// One toast: a notice plus the moment it reached the screen.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    kind: NoticeKind,
    shown_at: Option<Instant>,
}

impl Notification {
    fn new(kind: NoticeKind) -> Self {
        Self {
            id: NotificationId::next(),
            kind,
            shown_at: None,
        }
    }

    /// "Nothing found for {query}".
    #[must_use]
    pub fn no_results(query: impl Into<String>) -> Self {
        Self::new(NoticeKind::NoResults {
            query: query.into(),
        })
    }

    #[must_use]
    pub fn blank_query() -> Self {
        Self::new(NoticeKind::BlankQuery)
    }

    #[must_use]
    pub fn config_unreadable() -> Self {
        Self::new(NoticeKind::ConfigUnreadable)
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> &NoticeKind {
        &self.kind
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    #[must_use]
    pub fn message_key(&self) -> &'static str {
        self.kind.message_key()
    }

    /// Feedback about a search. Stale as soon as another search starts.
    #[must_use]
    pub fn is_search_feedback(&self) -> bool {
        matches!(
            self.kind,
            NoticeKind::NoResults { .. } | NoticeKind::BlankQuery
        )
    }

    /// Starts the lifetime clock. Later calls keep the first instant.
    pub fn mark_shown(&mut self, now: Instant) {
        self.shown_at.get_or_insert(now);
    }

    /// A toast that never reached the screen does not expire.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.shown_at
            .is_some_and(|shown| now.saturating_duration_since(shown) >= self.severity().lifetime())
    }

    /// Localized message text.
    #[must_use]
    pub fn text(&self, i18n: &I18n) -> String {
        match &self.kind {
            NoticeKind::NoResults { query } => {
                i18n.tr_with_args(self.message_key(), &[("query", query.as_str())])
            }
            NoticeKind::BlankQuery | NoticeKind::ConfigUnreadable => i18n.tr(self.message_key()),
        }
    }
}
