//! Colors - Landing Theme Colors

use gpui::{rgb, rgba, Rgba};

/// Landing color palette - All colors are accessed via associated functions
pub struct LandingColors;

impl LandingColors {
    // Primary colors
    /// Primary accent - Gold
    pub fn primary() -> Rgba { rgb(0xc8aa6e) }
    /// Primary hover - Lighter gold
    pub fn primary_hover() -> Rgba { rgb(0xd9bd85) }
    /// Secondary accent - Teal (focus highlights)
    pub fn accent() -> Rgba { rgb(0x0ac8b9) }

    // Background colors
    /// Main background - Deep navy
    pub fn background() -> Rgba { rgb(0x091428) }
    /// Header background - Translucent card
    pub fn header_bg() -> Rgba { rgba(0x0a1a3433) }
    /// Card background
    pub fn card_bg() -> Rgba { rgba(0x0a1a3499) }
    /// Card background on hover
    pub fn card_bg_hover() -> Rgba { rgba(0x0a1a34cc) }
    /// Stats panel background
    pub fn stats_bg() -> Rgba { rgba(0x0a1a3466) }

    // Text colors
    /// Primary text - Parchment
    pub fn foreground() -> Rgba { rgb(0xf0e6d2) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0xa09b8c) }
    /// Text on primary buttons (dark, for contrast on gold)
    pub fn button_primary_text() -> Rgba { rgb(0x091428) }

    // Input colors
    /// Input background
    pub fn input_bg() -> Rgba { rgba(0x0a1a34e6) }
    /// Input placeholder
    pub fn input_placeholder() -> Rgba { rgb(0x6b7280) }
    /// Input border when focused
    pub fn input_border_focus() -> Rgba { Self::accent() }
    /// Input border
    pub fn input_border() -> Rgba { rgba(0xf0e6d222) }

    // Misc
    /// Subtle hover wash for inert chrome controls
    pub fn chrome_hover() -> Rgba { rgba(0xf0e6d211) }
}
