// SPDX-License-Identifier: MPL-2.0
//! Payment details panel: configured fields, each with a copy button.

use crate::app::config::PaymentField;
use crate::domain::viewer::{PageScroll, ScrollLock};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{DeferredClipboard, SystemClipboard};
use crate::ui::components::{CopyButton, CopyPath};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::modal;
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    Copy(usize),
    Close,
}

/// Follow-up the application has to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The system clipboard refused; hand the text to Iced's clipboard.
    WriteClipboard(String),
}

#[derive(Debug, Default)]
pub struct State {
    open: bool,
    buttons: Vec<CopyButton>,
    scroll_lock: ScrollLock,
}

impl State {
    #[must_use]
    pub fn new(field_count: usize) -> Self {
        Self {
            open: false,
            buttons: vec![CopyButton::new(); field_count],
            scroll_lock: ScrollLock::default(),
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self, page: &mut PageScroll) {
        self.open = true;
        self.scroll_lock.acquire(page);
    }

    pub fn close(&mut self, page: &mut PageScroll) {
        if !self.open {
            log::debug!("payment panel close ignored: already closed");
            return;
        }
        self.open = false;
        self.scroll_lock.release(page);
    }

    /// Whether a copy button is showing transient feedback.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.buttons.iter().any(CopyButton::is_active)
    }

    pub fn tick(&mut self, now: Instant) {
        for button in &mut self.buttons {
            button.tick(now);
        }
    }

    pub fn handle_message(
        &mut self,
        message: Message,
        fields: &[PaymentField],
        window_focused: bool,
        page: &mut PageScroll,
    ) -> Effect {
        match message {
            Message::Close => {
                self.close(page);
                Effect::None
            }
            Message::Copy(index) => {
                let (Some(field), Some(button)) = (fields.get(index), self.buttons.get_mut(index))
                else {
                    log::debug!("copy ignored: no payment field {index}");
                    return Effect::None;
                };
                let mut fallback = DeferredClipboard::new(window_focused);
                match button.copy(&field.value, &mut SystemClipboard, &mut fallback, Instant::now())
                {
                    Some(CopyPath::Fallback) => fallback
                        .take_pending()
                        .map_or(Effect::None, Effect::WriteClipboard),
                    Some(CopyPath::Primary) | None => Effect::None,
                }
            }
        }
    }

    pub fn view<'a>(&'a self, fields: &'a [PaymentField], i18n: &'a I18n) -> Element<'a, Message> {
        let header = Row::new()
            .align_y(alignment::Vertical::Center)
            .push(Text::new(i18n.tr("payment-title")).size(typography::TITLE_MD))
            .push(Space::new().width(Length::Fill))
            .push(
                button(Text::new("✕").size(typography::BODY_LG))
                    .on_press(Message::Close)
                    .padding(spacing::XS)
                    .style(button_styles::chip(false)),
            );

        let mut body = Column::new().spacing(spacing::MD).push(header);

        if fields.is_empty() {
            body = body.push(Text::new(i18n.tr("payment-empty")).size(typography::BODY));
        }

        for (index, (field, copy)) in fields.iter().zip(&self.buttons).enumerate() {
            body = body.push(
                Row::new()
                    .spacing(spacing::SM)
                    .align_y(alignment::Vertical::Center)
                    .push(
                        Column::new()
                            .width(Length::Fill)
                            .push(Text::new(field.label.as_str()).size(typography::CAPTION))
                            .push(Text::new(field.value.as_str()).size(typography::BODY_LG)),
                    )
                    .push(copy.view(i18n, Message::Copy(index))),
            );
        }

        let panel = Container::new(body)
            .width(Length::Fixed(sizing::PAYMENT_PANEL_WIDTH))
            .padding(spacing::LG)
            .style(container_styles::modal);

        modal::backdrop(panel, Message::Close)
    }
}
