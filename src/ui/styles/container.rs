// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Scheme matching the Iced theme currently applied.
fn scheme(theme: &Theme) -> ColorScheme {
    if matches!(theme, Theme::Dark) {
        ColorScheme::dark()
    } else {
        ColorScheme::light()
    }
}

/// Page background behind the catalog.
pub fn page(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.page_background)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Artwork and artist cards.
pub fn card(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.card_background)),
        text_color: Some(colors.text_primary),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::CARD,
        ..Default::default()
    }
}

/// Dimmed layer behind modal overlays.
pub fn backdrop(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(scheme(theme).backdrop)),
        ..Default::default()
    }
}

/// Body of the desktop viewer and the payment panel.
pub fn modal(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.card_background)),
        text_color: Some(colors.text_primary),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::MODAL,
        ..Default::default()
    }
}

/// Black stage of the fullscreen mobile viewer.
pub fn stage(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLACK)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Badge laid over sold artworks.
pub fn sold_badge(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(scheme(theme).sold_badge)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_is_translucent() {
        let style = backdrop(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => assert!(color.a < 1.0),
            _ => panic!("expected a color background"),
        }
    }

    #[test]
    fn page_follows_theme() {
        assert_ne!(page(&Theme::Light).background, page(&Theme::Dark).background);
    }
}
