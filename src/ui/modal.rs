// SPDX-License-Identifier: MPL-2.0
//! Backdrop layer shared by the desktop viewer and the payment panel.

use crate::ui::styles::container as container_styles;
use iced::widget::{center, mouse_area, opaque};
use iced::Element;

/// Centers `content` over a dimmed backdrop; pressing the backdrop emits
/// `on_close`. The content swallows its own clicks.
pub fn backdrop<'a, Message: Clone + 'a>(
    content: impl Into<Element<'a, Message>>,
    on_close: Message,
) -> Element<'a, Message> {
    opaque(
        mouse_area(center(opaque(content)).style(container_styles::backdrop)).on_press(on_close),
    )
}
