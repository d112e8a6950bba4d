// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the views: colors, spacing and font sizes.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Spacing (8px grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    /// Large body text, used for standalone status messages.
    pub const BODY_LG: f32 = 16.0;

    /// Tooltips and secondary labels.
    pub const CAPTION: f32 = 12.0;
}
