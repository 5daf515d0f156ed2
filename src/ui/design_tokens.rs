// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens.

## Organization

- **Palette**: Base colors, including the celebration palette
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Modification

Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (warm rose scale, matching the card's festive register)
    pub const PRIMARY_100: Color = Color::from_rgb(1.0, 0.92, 0.94);
    pub const PRIMARY_200: Color = Color::from_rgb(1.0, 0.82, 0.87);
    pub const PRIMARY_400: Color = Color::from_rgb(0.98, 0.55, 0.65);
    pub const PRIMARY_500: Color = Color::from_rgb(0.93, 0.38, 0.52);
    pub const PRIMARY_600: Color = Color::from_rgb(0.82, 0.27, 0.42);
    pub const PRIMARY_700: Color = Color::from_rgb(0.68, 0.18, 0.33);

    // Accents
    pub const GOLD: Color = Color::from_rgb(1.0, 0.78, 0.26);
    pub const CREAM: Color = Color::from_rgb(1.0, 0.97, 0.9);
    pub const PAPER: Color = Color::from_rgb(0.99, 0.96, 0.92);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and cards
    pub const SURFACE: f32 = 0.95;

    /// Background decorations stay faint so content wins.
    pub const DECORATION: f32 = 0.25;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon / emoji sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;

    // Photo frame
    pub const PHOTO_WIDTH: f32 = 520.0;
    pub const PHOTO_HEIGHT: f32 = 360.0;

    // Indicator dots under the photo
    pub const DOT: f32 = 10.0;
    pub const DOT_ACTIVE: f32 = 14.0;

    // Poem book page
    pub const BOOK_WIDTH: f32 = 420.0;
    pub const BOOK_HEIGHT: f32 = 300.0;

    // Sealed letter envelope
    pub const ENVELOPE_WIDTH: f32 = 380.0;
    pub const ENVELOPE_HEIGHT: f32 = 220.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Banner title at the top of the card.
    pub const TITLE_LG: f32 = 34.0;

    /// Section headers (photos, poem, letter).
    pub const TITLE_MD: f32 = 22.0;

    /// Poem lines and letter body.
    pub const BODY_LG: f32 = 17.0;

    /// Standard body - captions, hints, button labels
    pub const BODY: f32 = 14.0;

    /// Caption - photo counters, footer
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
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);
    assert!(opacity::DECORATION < opacity::OVERLAY_MEDIUM);

    // Sizing validation
    assert!(sizing::DOT_ACTIVE > sizing::DOT);
    assert!(sizing::PHOTO_WIDTH > sizing::BOOK_WIDTH);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    // Color validation
    assert!(palette::PRIMARY_500.r >= 0.0 && palette::PRIMARY_500.r <= 1.0);
};
