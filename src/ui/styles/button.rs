// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// The "contact seller" call to action.
pub fn whatsapp(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::WHATSAPP_700,
        button::Status::Active => palette::WHATSAPP_500,
        button::Status::Disabled => palette::GRAY_300,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::CARD,
        snap: true,
    }
}

/// Filter chips, language switches and navbar links.
///
/// Active chips are dark with light text; inactive ones are light gray and
/// slightly faded, as on the artist biography switch.
pub fn chip(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let dark = matches!(theme, Theme::Dark);
        let (background, text_color) = if active {
            (
                if dark { palette::GOLD_500 } else { palette::INK },
                WHITE,
            )
        } else if dark {
            (palette::GRAY_700, palette::GRAY_300)
        } else {
            (palette::GRAY_100, palette::GRAY_500)
        };
        let alpha = match (active, status) {
            (true, _) | (false, button::Status::Hovered) => opacity::OPAQUE,
            (false, _) => opacity::INACTIVE,
        };
        button::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..background
            })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Round translucent buttons drawn over photos (arrows, close, zoom).
pub fn overlay(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::BACKDROP,
        _ => opacity::MEDIUM,
    };
    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Invisible button wrapping a card or thumbnail.
pub fn card(_theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: palette::INK,
        border: Border {
            color: match status {
                button::Status::Hovered => palette::GOLD_500,
                _ => Color::TRANSPARENT,
            },
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Border around the thumbnail of the photo on display.
pub fn thumbnail(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| button::Style {
        background: None,
        text_color: WHITE,
        border: Border {
            color: if active || matches!(status, button::Status::Hovered) {
                palette::GOLD_500
            } else {
                Color::TRANSPARENT
            },
            width: 2.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Copy button; the color follows the feedback state.
pub fn copy(feedback_color: Option<Color>) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let base = chip(false)(theme, status);
        match feedback_color {
            Some(color) => button::Style {
                background: Some(Background::Color(color)),
                text_color: WHITE,
                ..base
            },
            None => base,
        }
    }
}
