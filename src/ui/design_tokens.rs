// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants used by the toast views.

## Organization

- **Palette**: Base and per-kind colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use toastful::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let faded = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::SUCCESS_500
};

let padding = spacing::SM; // 12px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Default toast text (#1f2937).
    pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Kind accents
    /// #34d399
    pub const SUCCESS_500: Color = Color::from_rgb(0.204, 0.827, 0.6);
    /// #dc2626
    pub const ERROR_500: Color = Color::from_rgb(0.863, 0.149, 0.149);
    /// #f59e0b
    pub const WARNING_500: Color = Color::from_rgb(0.961, 0.62, 0.043);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.1;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;

    /// Opacity a toast starts its enter fade from.
    pub const ENTER_START: f32 = 0.5;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Kind icon next to the toast text.
    pub const ICON_TOAST: f32 = 20.0;

    /// Widest a toast grows before its text wraps.
    pub const TOAST_MAX_WIDTH: f32 = 360.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Toast text.
    pub const BODY: f32 = 14.0;

    /// Demo headings.
    pub const TITLE_SM: f32 = 18.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Soft card shadow under a toast.
    pub const SM: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.1),
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 3.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::ENTER_START > 0.0 && opacity::ENTER_START < 1.0);

    assert!(sizing::TOAST_MAX_WIDTH > sizing::ICON_TOAST);
    assert!(typography::TITLE_SM > typography::BODY);
};
