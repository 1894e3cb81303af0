//! RGBA colors for the indicator
//!
//! Colors are stored as 8-bit RGBA so configurations round-trip exactly
//! (layout strings like `#AARRGGBB`, packed ARGB integers). They are converted
//! to the display's native pixel format only when painting, through
//! [`Rgb888`], which every embedded-graphics RGB format converts from.
//!
//! Displays have no alpha channel: a fully transparent color is skipped at
//! paint time and any other alpha paints opaque.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use serde::{Deserialize, Serialize};

// ============================================================================
// Named Colors
// ============================================================================

/// Teal used for selected dots (`#2ABB9B`)
pub const TEAL: DotColor = DotColor::rgb(0x2A, 0xBB, 0x9B);

/// Light gray used for unselected dots (`#E5E5E5`)
pub const LIGHT_GRAY: DotColor = DotColor::rgb(0xE5, 0xE5, 0xE5);

/// Opaque white
pub const WHITE: DotColor = DotColor::rgb(0xFF, 0xFF, 0xFF);

/// Opaque black
pub const BLACK: DotColor = DotColor::rgb(0x00, 0x00, 0x00);

/// Fully transparent, never painted
pub const TRANSPARENT: DotColor = DotColor::rgba(0x00, 0x00, 0x00, 0x00);

// ============================================================================
// DotColor
// ============================================================================

/// An 8-bit per channel RGBA color.
///
/// # Examples
///
/// ```ignore
/// let teal = DotColor::parse_hex("#2abb9b").unwrap();
/// assert_eq!(teal, DotColor::rgb(0x2A, 0xBB, 0x9B));
///
/// let translucent = DotColor::from_argb(0x802ABB9B);
/// assert_eq!(translucent.a, 0x80);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DotColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl DotColor {
    /// Opaque color from red, green and blue channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack a `0xAARRGGBB` integer.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Pack into a `0xAARRGGBB` integer.
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Parse `#RRGGBB` (opaque) or `#AARRGGBB`.
    ///
    /// Returns `None` for anything else, including the missing `#`.
    pub fn parse_hex(raw: &str) -> Option<Self> {
        let digits = raw.trim().strip_prefix('#')?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let value = u32::from_str_radix(digits, 16).ok()?;
        match digits.len() {
            6 => Some(Self::from_argb(0xFF00_0000 | value)),
            8 => Some(Self::from_argb(value)),
            _ => None,
        }
    }

    /// Drop the alpha channel for drawing.
    pub fn to_rgb888(self) -> Rgb888 {
        Rgb888::new(self.r, self.g, self.b)
    }
}

impl From<DotColor> for Rgb888 {
    fn from(color: DotColor) -> Self {
        color.to_rgb888()
    }
}

impl From<Rgb888> for DotColor {
    fn from(color: Rgb888) -> Self {
        Self::rgb(color.r(), color.g(), color.b())
    }
}
