// SPDX-License-Identifier: MPL-2.0
//! Notification data.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// How long a warning stays on screen unless dismissed earlier.
const AUTO_DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// A warning waiting to be shown or currently on screen.
///
/// The message is an i18n key resolved at render time.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    message_key: String,
    created_at: Instant,
}

impl Notification {
    pub fn warning(message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            message_key: message_key.into(),
            created_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// Border and marker color of the toast.
    #[must_use]
    pub fn accent_color(&self) -> Color {
        palette::WARNING_500
    }

    #[must_use]
    pub fn should_auto_dismiss(&self) -> bool {
        self.created_at.elapsed() >= AUTO_DISMISS_AFTER
    }
}
