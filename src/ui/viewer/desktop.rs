// SPDX-License-Identifier: MPL-2.0
//! Desktop modal: photo with arrows, an optional thumbnail strip and the
//! details column.

use super::component::Message;
use super::{price_label, thumbnail_strip, thumbnails_toggle, ViewContext};
use crate::domain::viewer::ViewerSession;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::modal;
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{button, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

pub(super) fn view<'a>(
    session: &'a ViewerSession,
    ctx: ViewContext<'a>,
    page_directory: Option<&'static str>,
) -> Element<'a, Message> {
    let mut gallery = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(stage(session, &ctx, page_directory));

    if session.shows_navigation() {
        gallery = gallery.push(thumbnails_toggle(session, &ctx));
        if session.thumbnails_visible() {
            gallery = gallery.push(thumbnail_strip(session, &ctx, page_directory));
        }
    }

    let body = Row::new()
        .spacing(spacing::LG)
        .push(gallery)
        .push(details(session, &ctx));

    let close = button(Text::new("✕").size(typography::BODY_LG))
        .on_press(Message::Close)
        .padding(spacing::XS)
        .style(button_styles::chip(false));

    let content = Column::new()
        .spacing(spacing::XS)
        .push(
            Row::new()
                .push(Space::new().width(Length::Fill))
                .push(close),
        )
        .push(body);

    let panel = Container::new(content)
        .width(Length::Fixed(sizing::DESKTOP_MODAL_WIDTH))
        .height(Length::Fixed(sizing::DESKTOP_MODAL_HEIGHT))
        .padding(spacing::LG)
        .style(container_styles::modal);

    modal::backdrop(panel, Message::Close)
}

/// Current photo with the previous/next arrows laid over its edges.
fn stage<'a>(
    session: &'a ViewerSession,
    ctx: &ViewContext<'a>,
    page_directory: Option<&'static str>,
) -> Element<'a, Message> {
    let source = ctx.photos.locate(session.current_photo(), page_directory);
    let photo = ctx
        .photos
        .view(&source, Length::Fill, Length::Fill, ContentFit::Contain);

    let mut stage = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(photo);

    if session.shows_navigation() {
        let arrow = |glyph: &'static str, message: Message| {
            button(Text::new(glyph).size(typography::TITLE_MD))
                .on_press(message)
                .padding(spacing::XS)
                .style(button_styles::overlay)
        };
        stage = stage.push(
            Container::new(
                Row::new()
                    .align_y(alignment::Vertical::Center)
                    .push(arrow("‹", Message::Previous))
                    .push(Space::new().width(Length::Fill))
                    .push(arrow("›", Message::Next)),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XS)
            .align_y(alignment::Vertical::Center),
        );
    }

    stage.into()
}

/// Title, price, dimensions and the contact button.
fn details<'a>(session: &'a ViewerSession, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let metadata = session.metadata();
    let i18n = ctx.i18n;

    let mut column = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fixed(sizing::DETAILS_WIDTH))
        .push(Text::new(metadata.title.as_str()).size(typography::TITLE_MD));

    if let Some(price) = price_label(&metadata.price, ctx.currency) {
        column = column.push(Text::new(price).size(typography::TITLE_SM));
    }

    for (key, value) in [
        ("viewer-size", &metadata.size),
        ("viewer-medium", &metadata.medium),
        ("viewer-year", &metadata.year),
    ] {
        if !value.is_empty() {
            column = column.push(
                Row::new()
                    .spacing(spacing::XS)
                    .push(Text::new(i18n.tr(key)).size(typography::CAPTION))
                    .push(Text::new(value.as_str()).size(typography::BODY)),
            );
        }
    }

    if !metadata.description.is_empty() {
        column = column.push(Text::new(metadata.description.as_str()).size(typography::BODY));
    }

    column = column.push(Space::new().height(Length::Fill));

    if session.item().status.is_sold() {
        column = column.push(
            Container::new(Text::new(i18n.tr("artwork-sold")).size(typography::BODY))
                .padding([spacing::XXS, spacing::SM])
                .style(container_styles::sold_badge),
        );
    } else {
        column = column.push(
            button(Text::new(i18n.tr("viewer-contact")).size(typography::BODY_LG))
                .on_press(Message::ContactSeller)
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(button_styles::whatsapp),
        );
    }

    column.into()
}
