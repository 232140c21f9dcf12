//! Colors - Arkem Design Tokens

use gpui::{rgb, rgba, Rgba};

/// Arkem color palette - All colors are accessed via associated functions
pub struct ArkemColors;

impl ArkemColors {
    // Surfaces
    /// App background
    pub fn base() -> Rgba { rgb(0x0b0d10) }
    /// Raised surface (cards, table body)
    pub fn surface() -> Rgba { rgb(0x14171c) }
    /// Surface one step above `surface`
    pub fn surface_raised() -> Rgba { rgb(0x1c2027) }
    /// Sidebar background
    pub fn sidebar_bg() -> Rgba { rgb(0x101317) }
    /// Header bar background
    pub fn header_bg() -> Rgba { rgb(0x101317) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0xf2f4f7) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0xa3abb8) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x6b7380) }
    /// Text on accent backgrounds
    pub fn text_on_accent() -> Rgba { rgb(0x0b0d10) }

    // Accent
    /// Brand accent
    pub fn accent() -> Rgba { rgb(0x7dd3fc) }
    /// Accent tint for hover/active backgrounds
    pub fn accent_subtle() -> Rgba { rgba(0x7dd3fc22) }

    // Status colors
    /// Success - Green
    pub fn success() -> Rgba { rgb(0x4ade80) }
    /// Warning - Amber
    pub fn warning() -> Rgba { rgb(0xfbbf24) }
    /// Error/Danger - Red
    pub fn danger() -> Rgba { rgb(0xf87171) }
    /// Info - Blue
    pub fn info() -> Rgba { rgb(0x60a5fa) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0x262b33) }

    // Button colors
    /// Primary button background
    pub fn button_primary_bg() -> Rgba { rgb(0xf2f4f7) }
    /// Primary button text
    pub fn button_primary_text() -> Rgba { rgb(0x0b0d10) }
    /// Black tone button background
    pub fn button_black_bg() -> Rgba { rgb(0x000000) }
    /// Grey tone button background
    pub fn button_grey_bg() -> Rgba { rgb(0x262b33) }
    /// Color tone button background
    pub fn button_color_bg() -> Rgba { rgb(0x0ea5e9) }
    /// Hover overlay
    pub fn button_hover_overlay() -> Rgba { rgba(0xffffff1a) }

    // Table colors
    /// Table header background
    pub fn table_header_bg() -> Rgba { rgb(0x101317) }
    /// Table row hover
    pub fn table_row_hover() -> Rgba { rgb(0x1f242c) }
    /// Table row alternate
    pub fn table_row_alt() -> Rgba { rgb(0x171a20) }
    /// Selected row
    pub fn table_row_selected() -> Rgba { rgba(0x7dd3fc1a) }

    // Checkbox colors
    /// Checked/indeterminate fill
    pub fn checkbox_fill() -> Rgba { rgb(0x7dd3fc) }
    /// Unchecked border
    pub fn checkbox_border() -> Rgba { rgb(0x4b5360) }

    // Badge colors
    /// Admin badge background
    pub fn badge_admin_bg() -> Rgba { rgba(0xa78bfa33) }
    /// Admin badge text
    pub fn badge_admin_text() -> Rgba { rgb(0xc4b5fd) }
    /// User badge background
    pub fn badge_user_bg() -> Rgba { rgba(0x94a3b833) }
    /// User badge text
    pub fn badge_user_text() -> Rgba { rgb(0xcbd5e1) }
}
