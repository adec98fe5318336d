// SPDX-License-Identifier: MPL-2.0
//! Product viewer overlay: the desktop modal and the fullscreen mobile
//! viewer, both driven by [`component::State`].

pub mod component;
mod desktop;
mod mobile;

pub use component::{Effect, Message, State, ZOOM_SCROLLABLE_ID};

use crate::domain::viewer::ViewerSession;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::photo::PhotoContext;
use crate::ui::styles::button as button_styles;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, Row, Scrollable, Text};
use iced::{ContentFit, Element, Length};

/// Inputs the viewer needs to render.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub photos: PhotoContext<'a>,
    /// Symbol printed before prices.
    pub currency: &'a str,
}

/// Price with its currency symbol, or nothing when the price is unknown.
fn price_label(price: &str, currency: &str) -> Option<String> {
    (!price.is_empty()).then(|| format!("{currency}{price}"))
}

fn thumbnails_toggle_key(session: &ViewerSession) -> &'static str {
    if session.thumbnails_visible() {
        "viewer-hide-photos"
    } else {
        "viewer-more-photos"
    }
}

/// "More photos" button flipping the thumbnail strip.
fn thumbnails_toggle<'a>(session: &ViewerSession, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    button(Text::new(ctx.i18n.tr(thumbnails_toggle_key(session))).size(typography::CAPTION))
        .on_press(Message::ToggleThumbnails)
        .padding([spacing::XXS, spacing::SM])
        .style(button_styles::chip(session.thumbnails_visible()))
        .into()
}

/// Horizontal strip of every photo; the current one is highlighted.
fn thumbnail_strip<'a>(
    session: &'a ViewerSession,
    ctx: &ViewContext<'a>,
    page_directory: Option<&'static str>,
) -> Element<'a, Message> {
    let strip = session
        .photos()
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::XS), |row, (index, photo)| {
            let source = ctx.photos.locate(photo, page_directory);
            row.push(
                button(ctx.photos.view(
                    &source,
                    Length::Fixed(sizing::THUMBNAIL),
                    Length::Fixed(sizing::THUMBNAIL),
                    ContentFit::Cover,
                ))
                .on_press(Message::SelectThumbnail(index))
                .padding(spacing::XXS)
                .style(button_styles::thumbnail(index == session.current_index())),
            )
        });

    Scrollable::new(strip)
        .direction(Direction::Horizontal(Scrollbar::new()))
        .width(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::viewer::{Item, PageDepth, PageScroll, Presentation};

    #[test]
    fn toggle_label_follows_strip_visibility() {
        let mut state = State::new(Presentation::Mobile);
        let mut page = PageScroll::Enabled;
        let item = Item {
            photos: vec!["a.jpg".into(), "b.jpg".into()],
            ..Item::default()
        };
        state.open(item, PageDepth::TopLevel, None, &mut page);
        let key = |state: &State| state.host().session().map(thumbnails_toggle_key);

        assert_eq!(key(&state), Some("viewer-more-photos"));
        let _ = state.handle_message(Message::ToggleThumbnails, &mut page);
        assert_eq!(key(&state), Some("viewer-hide-photos"));
    }

    #[test]
    fn price_label_prefixes_currency() {
        assert_eq!(price_label("1200", "₾").as_deref(), Some("₾1200"));
        assert_eq!(price_label("", "₾"), None);
    }
}
