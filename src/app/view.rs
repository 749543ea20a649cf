// SPDX-License-Identifier: MPL-2.0
//! Root view composition.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::browser::{self, Browser};
use crate::ui::notifications::{self, Toast};
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Contextual data needed to render the application.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub browser: &'a Browser,
    pub notifications: &'a notifications::Manager,
    pub columns: u16,
}

/// Browser content with the toast overlay stacked on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = ctx
        .browser
        .view(browser::ViewContext {
            i18n: ctx.i18n,
            columns: ctx.columns,
        })
        .map(Message::Browser);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
