// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.

use super::Message;
use crate::ui::browser::{self, Browser, Effect};
use crate::ui::notifications::{self, Notification};
use iced::Task;

/// Launches a URL outside the application.
pub type UrlOpener = fn(&str) -> std::io::Result<()>;

/// Opens `url` in the system browser without waiting for it.
pub fn open_in_browser(url: &str) -> std::io::Result<()> {
    open::that_detached(url)
}

/// Mutable slices of `App` the handlers need.
pub struct UpdateContext<'a> {
    pub browser: &'a mut Browser,
    pub notifications: &'a mut notifications::Manager,
    pub open_url: UrlOpener,
}

pub fn handle_browser_message(
    ctx: &mut UpdateContext<'_>,
    message: browser::Message,
) -> Task<Message> {
    let (effect, task) = ctx.browser.handle_message(message);
    handle_browser_effect(ctx, effect);
    task.map(Message::Browser)
}

fn handle_browser_effect(ctx: &mut UpdateContext<'_>, effect: Effect) {
    match effect {
        Effect::None => {}
        Effect::OpenUrl(url) => {
            tracing::info!(%url, "opening in system browser");
            if let Err(err) = (ctx.open_url)(&url) {
                tracing::warn!(%url, %err, "could not open URL");
                ctx.notifications
                    .push(Notification::warning("notification-open-url-error"));
            }
        }
    }
}
