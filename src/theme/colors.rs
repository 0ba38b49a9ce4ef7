//! Colors - Lab Panel Theme Colors

use gpui::{rgb, rgba, Rgba};

/// Lab panel color palette - accessed via associated functions
pub struct LabColors;

impl LabColors {
    // Backgrounds
    /// Main window background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    /// Main content area
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Navigation rail
    pub fn rail_bg() -> Rgba { rgb(0x1a2332) }
    /// Side panel container
    pub fn panel_bg() -> Rgba { rgb(0xf9fafb) }

    // Accents
    /// Selected rail item / active resizer
    pub fn accent() -> Rgba { rgb(0x2cb3b8) }
    /// Rail item hover
    pub fn accent_soft() -> Rgba { rgba(0x2cb3b822) }
    /// Fully transparent
    pub fn transparent() -> Rgba { rgba(0x00000000) }

    // Text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    pub fn text_light() -> Rgba { rgb(0xffffff) }
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }

    // Borders
    pub fn border() -> Rgba { rgb(0xe5e7eb) }
    /// Resizer handle at rest
    pub fn resizer() -> Rgba { rgb(0xd1d5db) }
}
