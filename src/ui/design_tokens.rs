// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants of the gallery: colors, opacity levels, spacing,
component sizes, type scale, radii and shadows.

## Examples

```
use ninart::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

// Backdrop behind the product viewer
let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::INK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Neutrals (gallery walls and ink)
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    /// Main text and dark chips, `#1a1a1a`.
    pub const INK: Color = Color::from_rgb(0.102, 0.102, 0.102);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    /// Muted text, `#666`.
    pub const GRAY_500: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_300: Color = Color::from_rgb(0.7, 0.7, 0.7);
    /// Inactive chips, `#e8e8e8`.
    pub const GRAY_100: Color = Color::from_rgb(0.91, 0.91, 0.91);
    /// Page background, warm off-white.
    pub const PAPER: Color = Color::from_rgb(0.98, 0.97, 0.95);

    // Accents
    /// Gold used for prices and the brand mark.
    pub const GOLD_500: Color = Color::from_rgb(0.72, 0.56, 0.29);
    pub const GOLD_300: Color = Color::from_rgb(0.85, 0.74, 0.52);
    /// WhatsApp brand green.
    pub const WHATSAPP_500: Color = Color::from_rgb(0.145, 0.827, 0.4);
    pub const WHATSAPP_700: Color = Color::from_rgb(0.071, 0.549, 0.494);

    // Semantic colors
    pub const SOLD_500: Color = Color::from_rgb(0.78, 0.16, 0.16);
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const SUBTLE: f32 = 0.2;
    pub const MEDIUM: f32 = 0.5;
    /// Inactive language chips.
    pub const INACTIVE: f32 = 0.7;
    /// Backdrop behind modal overlays.
    pub const BACKDROP: f32 = 0.85;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Catalog cards
    pub const CARD_WIDTH: f32 = 260.0;
    pub const CARD_IMAGE_HEIGHT: f32 = 300.0;
    pub const AVATAR: f32 = 160.0;

    // Viewer
    pub const THUMBNAIL: f32 = 72.0;
    pub const DESKTOP_MODAL_WIDTH: f32 = 980.0;
    pub const DESKTOP_MODAL_HEIGHT: f32 = 620.0;
    pub const DETAILS_WIDTH: f32 = 320.0;
    /// Height of the top bar of the mobile viewer.
    pub const MOBILE_BAR_HEIGHT: f32 = 56.0;

    // Chrome
    pub const NAVBAR_HEIGHT: f32 = 64.0;
    pub const SEARCH_WIDTH: f32 = 240.0;
    pub const PAYMENT_PANEL_WIDTH: f32 = 460.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page headings and the brand mark.
    pub const TITLE_LG: f32 = 30.0;

    /// Artwork title in the viewer.
    pub const TITLE_MD: f32 = 22.0;

    /// Section headers.
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    /// Card captions and metadata labels.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const CARD: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.12),
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 8.0,
    };

    pub const MODAL: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 24.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > opacity::MEDIUM && opacity::BACKDROP < 1.0);

    assert!(sizing::DETAILS_WIDTH < sizing::DESKTOP_MODAL_WIDTH);
    assert!(sizing::THUMBNAIL < sizing::CARD_IMAGE_HEIGHT);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn sold_badge_stands_out_from_prices() {
        assert_ne!(palette::SOLD_500, palette::GOLD_500);
        assert!(palette::SOLD_500.r > palette::SOLD_500.g);
    }
}
