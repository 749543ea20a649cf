// SPDX-License-Identifier: MPL-2.0
//! Detail panel shown over the grid after a card image is clicked.
//!
//! The panel never blocks the event loop: the grid keeps updating behind
//! it and further results queue up until the active one is closed.

use super::component::Message;
use crate::domain::catalog::DetailOutcome;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

/// A settled detail lookup waiting to be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPresentation {
    id: String,
    outcome: DetailOutcome,
}

impl DetailPresentation {
    pub fn new(id: String, outcome: DetailOutcome) -> Self {
        Self { id, outcome }
    }

    /// Identifier the lookup was issued for.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Localized summary, one entry per displayed line.
    ///
    /// Breed lines appear only when the server tagged the image with a breed.
    pub fn lines(&self, i18n: &I18n) -> Vec<String> {
        let detail = match &self.outcome {
            DetailOutcome::Found(detail) => detail,
            DetailOutcome::Unavailable => {
                return vec![i18n.tr_with_args("detail-unavailable", &[("id", self.id.as_str())])];
            }
        };

        let (width, height) = detail.dimensions();
        let mut lines = vec![
            i18n.tr_with_args("detail-cat-id", &[("id", detail.id.as_str())]),
            i18n.tr_with_args("detail-width", &[("width", width.to_string().as_str())]),
            i18n.tr_with_args("detail-height", &[("height", height.to_string().as_str())]),
        ];

        if let Some(breed) = &detail.breed {
            lines.push(i18n.tr("detail-breed-header"));
            lines.push(i18n.tr_with_args("detail-breed-name", &[("value", breed.name.as_str())]));
            lines.push(i18n.tr_with_args(
                "detail-breed-temperament",
                &[("value", breed.temperament.as_str())],
            ));
            lines.push(i18n.tr_with_args("detail-breed-origin", &[("value", breed.origin.as_str())]));
            lines.push(i18n.tr_with_args(
                "detail-breed-life-span",
                &[("value", breed.life_span.as_str())],
            ));
            if let Some(url) = &breed.wikipedia_url {
                lines.push(i18n.tr_with_args("detail-breed-wikipedia", &[("value", url.as_str())]));
            }
        }

        lines
    }

    /// Reference article for the breed, if any.
    pub fn reference_url(&self) -> Option<&str> {
        match &self.outcome {
            DetailOutcome::Found(detail) => detail.breed.as_ref()?.wikipedia_url.as_deref(),
            DetailOutcome::Unavailable => None,
        }
    }
}

/// Renders the panel for `presentation`; `queued` counts results behind it.
pub fn view<'a>(
    presentation: &'a DetailPresentation,
    queued: usize,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let mut body = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr("detail-title")).size(typography::TITLE_MD))
        .push(Space::new().height(Length::Fixed(spacing::XXS)));

    for line in presentation.lines(i18n) {
        body = body.push(text(line).size(typography::BODY));
    }

    let mut actions = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center);

    if queued > 0 {
        actions = actions.push(
            Text::new(i18n.tr_with_args("detail-queued", &[("count", queued.to_string().as_str())]))
                .size(typography::CAPTION),
        );
    }
    actions = actions.push(Space::new().width(Length::Fill));

    if let Some(url) = presentation.reference_url() {
        actions = actions.push(
            button(Text::new(i18n.tr("detail-open-wikipedia")).size(typography::BODY))
                .on_press(Message::OpenReference(url.to_owned()))
                .style(styles::button::secondary),
        );
    }
    actions = actions.push(
        button(Text::new(i18n.tr("detail-close")).size(typography::BODY))
            .on_press(Message::DismissDetail)
            .style(styles::button::primary),
    );

    Container::new(body.push(Space::new().height(Length::Fixed(spacing::SM))).push(actions))
        .width(Length::Fixed(sizing::DETAIL_PANEL_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::panel)
        .into()
}

/// Stacks `panel` over `base` behind a dimmed backdrop. Clicking the
/// backdrop closes the panel.
pub fn modal<'a>(
    base: Element<'a, Message>,
    panel: Element<'a, Message>,
) -> Element<'a, Message> {
    use iced::widget::{center, mouse_area, opaque, stack};

    stack![
        base,
        opaque(
            mouse_area(center(opaque(panel)).style(styles::container::backdrop))
                .on_press(Message::DismissDetail)
        )
    ]
    .into()
}
