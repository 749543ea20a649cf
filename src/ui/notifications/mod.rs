// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for feedback that must not block browsing.
//!
//! Used for a configuration file that could not be read at startup and for
//! links the system browser refused to open.
//!
//! - Toasts disappear after ~5s or when dismissed
//! - At most 3 toasts are visible; the rest wait in a queue
//! - Toasts sit in the bottom-right corner

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId};
pub use toast::Toast;
