//! Theme constants for the player surface.
//!
//! Region colours come from the derived styles; everything here is the
//! static chrome around them.

use iced::Color;

use crate::motion::Rgba;

/// Convert a style colour into an iced colour.
pub fn to_color(rgba: Rgba) -> Color {
    Color::from_rgba(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Style colour with a region's opacity applied on top.
pub fn faded(rgba: Rgba, opacity: f32) -> Color {
    to_color(rgba.faded(opacity))
}

// =============================================================================
// COLORS
// =============================================================================

pub mod color {
    use super::*;

    /// App background behind the player
    /// Hex: #0a0a0a
    pub const BASE: Color = Color::from_rgb(
        0x0a as f32 / 255.0,
        0x0a as f32 / 255.0,
        0x0a as f32 / 255.0,
    );

    /// Home feed placeholder cards
    /// Hex: #1f1f1f
    pub const CARD: Color = Color::from_rgb(
        0x1f as f32 / 255.0,
        0x1f as f32 / 255.0,
        0x1f as f32 / 255.0,
    );

    /// App tab bar
    /// Hex: #171717
    pub const TAB_BAR: Color = Color::from_rgb(
        0x17 as f32 / 255.0,
        0x17 as f32 / 255.0,
        0x17 as f32 / 255.0,
    );

    pub const TEXT_PRIMARY: Color = Color::WHITE;

    /// Hex: #a3a3a3
    pub const TEXT_SECONDARY: Color = Color::from_rgb(
        0xa3 as f32 / 255.0,
        0xa3 as f32 / 255.0,
        0xa3 as f32 / 255.0,
    );

    /// Unfilled part of the scrubber
    pub const TRACK_GROOVE: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.25);

    /// Cover placeholder when a track has no accent colour
    /// Hex: #404040
    pub const COVER_FALLBACK: Color = Color::from_rgb(
        0x40 as f32 / 255.0,
        0x40 as f32 / 255.0,
        0x40 as f32 / 255.0,
    );

    /// Multiply a colour's alpha
    pub fn with_alpha(color: Color, alpha: f32) -> Color {
        Color {
            a: color.a * alpha.clamp(0.0, 1.0),
            ..color
        }
    }
}

// =============================================================================
// TYPOGRAPHY
// =============================================================================

pub mod typography {
    pub const SIZE_TITLE: f32 = 22.0;
    pub const SIZE_BODY: f32 = 15.0;
    pub const SIZE_SMALL: f32 = 12.0;
}
