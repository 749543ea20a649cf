// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of the browser [`Layout`].

use super::component::{Message, ViewContext};
use super::state::{Card, Layout, Thumbnail};
use crate::domain::catalog::BreedOption;
use crate::error::FetchError;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, center, image, mouse_area, pick_list, scrollable, Column, Container, Row, Space, Text,
};
use iced::{alignment, ContentFit, Element, Length};

pub(super) fn layout<'a>(layout: Layout<'a>, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match layout {
        Layout::Loading => center(Text::new(ctx.i18n.tr("browser-loading")).size(typography::BODY_LG))
            .into(),
        Layout::Failed(err) => failed(err, ctx),
        Layout::Grid {
            selected,
            options,
            cards,
        } => grid(selected, options, cards, ctx),
    }
}

fn failed<'a>(err: &FetchError, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let message = err.to_string();
    center(
        Text::new(ctx.i18n.tr_with_args("browser-error", &[("message", message.as_str())]))
            .size(typography::BODY_LG),
    )
    .padding(spacing::LG)
    .into()
}

fn grid<'a>(
    selected: Option<&'a BreedOption>,
    options: &'a [BreedOption],
    cards: Vec<Card<'a>>,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("browser-title")).size(typography::TITLE_LG);

    let selector = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(ctx.i18n.tr("browser-breed-label")).size(typography::BODY))
        .push(
            pick_list(options, selected.cloned(), Message::BreedSelected)
                .placeholder(ctx.i18n.tr("browser-breed-placeholder"))
                .width(Length::Fixed(sizing::SELECTOR_WIDTH)),
        );

    let columns = usize::from(ctx.columns.max(1));
    let body: Element<'a, Message> = if cards.is_empty() {
        Text::new(ctx.i18n.tr("browser-empty"))
            .size(typography::BODY)
            .into()
    } else {
        let mut rows: Vec<Vec<Element<'a, Message>>> = Vec::new();
        for card in cards {
            let element = card_view(card, ctx);
            match rows.last_mut() {
                Some(row) if row.len() < columns => row.push(element),
                _ => rows.push(vec![element]),
            }
        }

        Column::with_children(rows.into_iter().map(|mut row| {
            // Keep a partial last row aligned with the full ones.
            while row.len() < columns {
                row.push(Space::new().width(Length::Fill).into());
            }
            Row::with_children(row).spacing(spacing::MD).into()
        }))
        .spacing(spacing::MD)
        .into()
    };

    scrollable(
        Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .width(Length::Fill)
            .push(title)
            .push(selector)
            .push(body),
    )
    .into()
}

fn card_view<'a>(card: Card<'a>, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let summary = card.summary;

    let picture: Element<'a, Message> = match card.thumbnail {
        Some(Thumbnail::Loaded(handle)) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(Thumbnail::Failed) => placeholder(ctx.i18n.tr("browser-thumbnail-failed")),
        Some(Thumbnail::Pending) | None => placeholder(ctx.i18n.tr("browser-thumbnail-loading")),
    };

    let download = button(
        Container::new(Text::new(ctx.i18n.tr("browser-download-button")).size(typography::BODY))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .on_press(Message::OpenOriginal(summary.url.clone()))
    .style(styles::button::primary);

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(mouse_area(picture).on_press(Message::ImagePressed(summary.id.clone())))
            .push(download),
    )
    .width(Length::Fill)
    .padding(spacing::XS)
    .style(styles::container::card)
    .into()
}

fn placeholder<'a>(label: String) -> Element<'a, Message> {
    center(Text::new(label).size(typography::CAPTION))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
        .style(styles::container::thumbnail_placeholder)
        .into()
}
