// SPDX-License-Identifier: MPL-2.0
//! Header with page links, the search box, the language switch and the
//! payment details button.

use crate::application::query::Page;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::{
    alignment::Vertical,
    widget::{button, text_input, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub page: &'a Page,
    pub query: &'a str,
    /// Whether the payment button has anything to show.
    pub has_payment_details: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Page),
    SearchChanged(String),
    ClearSearch,
    ToggleLanguage,
    OpenPayment,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Navigate(Page),
    SearchChanged,
    ToggleLanguage,
    OpenPayment,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, query: &mut String) -> Event {
    match message {
        Message::Navigate(page) => {
            query.clear();
            Event::Navigate(page)
        }
        Message::SearchChanged(text) => {
            *query = text;
            Event::SearchChanged
        }
        Message::ClearSearch => {
            if query.is_empty() {
                return Event::None;
            }
            query.clear();
            Event::SearchChanged
        }
        Message::ToggleLanguage => Event::ToggleLanguage,
        Message::OpenPayment => Event::OpenPayment,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let link = |key: &str, page: Page| {
        let active = page_group(ctx.page) == page_group(&page);
        button(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
            .on_press(Message::Navigate(page))
            .padding([spacing::XXS, spacing::SM])
            .style(button_styles::chip(active))
    };

    let search = text_input(&ctx.i18n.tr("navbar-search-placeholder"), ctx.query)
        .on_input(Message::SearchChanged)
        .on_submit(Message::SearchChanged(ctx.query.to_string()))
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(Length::Fixed(sizing::SEARCH_WIDTH));

    let mut row = Row::new()
        .spacing(spacing::XS)
        .padding([spacing::XS, spacing::MD])
        .align_y(Vertical::Center)
        .push(
            button(Text::new(ctx.i18n.tr("brand-name")).size(typography::TITLE_SM))
                .on_press(Message::Navigate(Page::Home))
                .style(button_styles::card),
        )
        .push(Space::new().width(Length::Fixed(spacing::MD)))
        .push(link("navbar-home", Page::Home))
        .push(link("navbar-artists", Page::Artists))
        .push(link("navbar-shop", Page::Shop))
        .push(link("navbar-gallery", Page::Gallery))
        .push(Space::new().width(Length::Fill))
        .push(search);

    if !ctx.query.is_empty() {
        row = row.push(
            button(Text::new("✕").size(typography::CAPTION))
                .on_press(Message::ClearSearch)
                .padding(spacing::XXS)
                .style(button_styles::chip(false)),
        );
    }

    if ctx.has_payment_details {
        row = row.push(
            button(Text::new(ctx.i18n.tr("navbar-payment")).size(typography::BODY))
                .on_press(Message::OpenPayment)
                .padding([spacing::XXS, spacing::SM])
                .style(button_styles::chip(false)),
        );
    }

    // Shows the language the button switches to.
    let language_label = if ctx.i18n.is_georgian() { "EN" } else { "ქარ" };
    row = row.push(
        button(Text::new(language_label).size(typography::BODY))
            .on_press(Message::ToggleLanguage)
            .padding([spacing::XXS, spacing::SM])
            .style(button_styles::chip(true)),
    );

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .into()
}

/// Artist shop pages highlight the artists link.
fn page_group(page: &Page) -> Page {
    match page {
        Page::ArtistShop(_) => Page::Artists,
        other => other.clone(),
    }
}
