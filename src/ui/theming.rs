// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme selection.

use crate::ui::design_tokens::{opacity, palette};
use iced::Color;
use serde::{Deserialize, Serialize};

/// Colors used by the gallery views.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub page_background: Color,
    pub card_background: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub price: Color,
    pub sold_badge: Color,
    pub chip_active: Color,
    pub chip_inactive: Color,
    /// Dimmed layer behind the viewer and payment panel.
    pub backdrop: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            page_background: palette::PAPER,
            card_background: palette::WHITE,
            text_primary: palette::INK,
            text_muted: palette::GRAY_500,
            price: palette::GOLD_500,
            sold_badge: palette::SOLD_500,
            chip_active: palette::INK,
            chip_inactive: palette::GRAY_100,
            backdrop: Color {
                a: opacity::BACKDROP,
                ..palette::INK
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            page_background: palette::INK,
            card_background: Color::from_rgb(0.16, 0.16, 0.16),
            text_primary: palette::WHITE,
            text_muted: palette::GRAY_300,
            price: palette::GOLD_300,
            sold_badge: palette::SOLD_500,
            chip_active: palette::GOLD_500,
            chip_inactive: palette::GRAY_700,
            backdrop: Color {
                a: opacity::BACKDROP,
                ..palette::BLACK
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // The gallery is a light site; fall back to light when detection fails.
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    #[must_use]
    pub fn colors(self) -> ColorScheme {
        if self.is_dark() {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}
