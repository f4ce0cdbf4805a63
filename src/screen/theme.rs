//! Colors shared by every screen.

use crate::buffer::Rgb;

/// Screen palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Header background.
    pub primary: Rgb,
    /// Text on `primary`.
    pub on_primary: Rgb,
    /// Body background.
    pub background: Rgb,
    /// Card and modal background.
    pub surface: Rgb,
    /// Body text.
    pub text: Rgb,
    /// Secondary text.
    pub muted: Rgb,
    /// Dish names and section headings.
    pub accent: Rgb,
    /// Favorite icon.
    pub heart: Rgb,
    /// Comment icon.
    pub pencil: Rgb,
    /// Filled stars.
    pub star: Rgb,
    /// Drawer background.
    pub drawer_bg: Rgb,
    /// Drawer text.
    pub drawer_fg: Rgb,
    /// Cancel button.
    pub cancel: Rgb,
}

impl Theme {
    /// The default purple palette.
    pub const DEFAULT: Self = Self {
        primary: Rgb::from_u32(0x51_2D_A8),
        on_primary: Rgb::WHITE,
        background: Rgb::new(18, 18, 18),
        surface: Rgb::new(30, 30, 30),
        text: Rgb::new(230, 230, 230),
        muted: Rgb::new(140, 140, 140),
        accent: Rgb::from_u32(0xB3_9D_DB),
        heart: Rgb::from_u32(0xFF_55_00),
        pencil: Rgb::from_u32(0x55_22_88),
        star: Rgb::from_u32(0xF1_C4_0F),
        drawer_bg: Rgb::from_u32(0xD1_C4_E9),
        drawer_fg: Rgb::BLACK,
        cancel: Rgb::from_u32(0x80_80_80),
    };
}

impl Default for Theme {
    fn default() -> Self {
        Self::DEFAULT
    }
}
