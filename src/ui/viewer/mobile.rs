// SPDX-License-Identifier: MPL-2.0
//! Fullscreen mobile viewer: top bar, swipeable photo and 2× zoom with
//! drag-to-pan. The thumbnail toggle and strip float over the bottom edge.

use super::component::{Message, ZOOM_SCROLLABLE_ID};
use super::{price_label, thumbnail_strip, thumbnails_toggle, ViewContext};
use crate::app::config::defaults::ZOOMED_SCALE;
use crate::domain::viewer::{PageScroll, RenderedSize, ViewerSession};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use crate::ui::widgets::scroll_lock;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, mouse_area, opaque, Column, Container, Id, Row, Scrollable, Space, Stack, Text};
use iced::{alignment, mouse, ContentFit, Element, Length};

pub(super) fn view<'a>(
    session: &'a ViewerSession,
    ctx: ViewContext<'a>,
    page_directory: Option<&'static str>,
    rendered: RenderedSize,
) -> Element<'a, Message> {
    let content = Column::new()
        .push(top_bar(session, &ctx))
        .push(photo_area(session, &ctx, page_directory, rendered));

    opaque(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(container_styles::stage),
    )
}

/// Close, counter, zoom and contact controls.
fn top_bar<'a>(session: &'a ViewerSession, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let counter = format!(
        "{} / {}",
        session.current_index() + 1,
        session.photos().len()
    );

    let mut bar = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(overlay_button("✕", Message::Close))
        .push(Text::new(counter).size(typography::BODY))
        .push(Space::new().width(Length::Fill));

    if let Some(price) = price_label(&session.metadata().price, ctx.currency) {
        bar = bar.push(Text::new(price).size(typography::BODY));
    }

    bar = bar.push(overlay_button("🔍", Message::ToggleZoom));

    if !session.item().status.is_sold() {
        bar = bar.push(
            button(Text::new(ctx.i18n.tr("viewer-contact")).size(typography::CAPTION))
                .on_press(Message::ContactSeller)
                .padding([spacing::XXS, spacing::SM])
                .style(button_styles::whatsapp),
        );
    }

    Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::MOBILE_BAR_HEIGHT))
        .padding([spacing::XS, spacing::SM])
        .align_y(alignment::Vertical::Center)
        .into()
}

fn photo_area<'a>(
    session: &'a ViewerSession,
    ctx: &ViewContext<'a>,
    page_directory: Option<&'static str>,
    rendered: RenderedSize,
) -> Element<'a, Message> {
    let source = ctx.photos.locate(session.current_photo(), page_directory);

    let surface: Element<'a, Message> = if session.is_zoomed() {
        let photo = ctx.photos.view(
            &source,
            Length::Fixed(rendered.width * ZOOMED_SCALE),
            Length::Fixed(rendered.height * ZOOMED_SCALE),
            ContentFit::Contain,
        );
        let scrollable = Scrollable::new(photo)
            .id(Id::new(ZOOM_SCROLLABLE_ID))
            .width(Length::Fill)
            .height(Length::Fill)
            .direction(Direction::Both {
                vertical: Scrollbar::hidden(),
                horizontal: Scrollbar::hidden(),
            });
        // Scroll position follows the pan offset only.
        scroll_lock(scrollable, PageScroll::Locked).into()
    } else {
        ctx.photos
            .view(&source, Length::Fill, Length::Fill, ContentFit::Contain)
    };

    let interaction = if session.is_zoomed() {
        mouse::Interaction::Grab
    } else {
        mouse::Interaction::default()
    };

    // Releases outside the area are never reported, so leaving it ends the
    // gesture.
    let gestures = mouse_area(surface)
        .on_press(Message::PointerPressed)
        .on_release(Message::PointerReleased)
        .on_exit(Message::PointerExited)
        .on_move(Message::PointerMoved)
        .interaction(interaction);

    let mut area = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(gestures);

    if session.shows_navigation() && !session.is_zoomed() {
        area = area.push(
            Container::new(
                Row::new()
                    .align_y(alignment::Vertical::Center)
                    .push(overlay_button("‹", Message::Previous))
                    .push(Space::new().width(Length::Fill))
                    .push(overlay_button("›", Message::Next)),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XS)
            .align_y(alignment::Vertical::Center),
        );
    }

    if session.shows_navigation() {
        area = area.push(bottom_sheet(session, ctx, page_directory));
    }

    area.into()
}

/// Thumbnail toggle, with the strip above it while open.
fn bottom_sheet<'a>(
    session: &'a ViewerSession,
    ctx: &ViewContext<'a>,
    page_directory: Option<&'static str>,
) -> Element<'a, Message> {
    let mut sheet = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center);

    if session.thumbnails_visible() {
        sheet = sheet.push(
            Container::new(thumbnail_strip(session, ctx, page_directory))
                .width(Length::Fill)
                .padding(spacing::XS)
                .style(container_styles::stage),
        );
    }
    sheet = sheet.push(thumbnails_toggle(session, ctx));

    Container::new(sheet)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom)
        .into()
}

fn overlay_button<'a>(glyph: &'static str, message: Message) -> Element<'a, Message> {
    button(Text::new(glyph).size(typography::TITLE_SM))
        .on_press(message)
        .padding(spacing::XS)
        .style(button_styles::overlay)
        .into()
}
