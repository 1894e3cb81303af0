//! Layout primitives: padding and density-scaled lengths
//!
//! Indicator geometry is configured in device-independent units (dp) and
//! converted to physical pixels once, at construction, using the display
//! density. Padding is supplied by the host layout and is already in pixels.

use serde::{Deserialize, Serialize};

// ============================================================================
// Density
// ============================================================================

/// Baseline density: one dp is one pixel at 160 dpi
pub const BASELINE_DPI: f32 = 160.0;

/// Display density scale factor (pixels per dp)
///
/// # Examples
///
/// ```ignore
/// let density = Density::from_dpi(320);
/// assert_eq!(Dimension::Dp(10.0).to_px(density), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density(f32);

impl Density {
    /// One pixel per dp
    pub const BASELINE: Density = Density(1.0);

    pub const fn new(scale: f32) -> Self {
        Self(scale)
    }

    /// Derive the scale factor from the panel's dots per inch
    pub fn from_dpi(dpi: u32) -> Self {
        Self(dpi as f32 / BASELINE_DPI)
    }

    pub const fn scale(self) -> f32 {
        self.0
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::BASELINE
    }
}

// ============================================================================
// Dimension
// ============================================================================

/// A length as written in configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Dimension {
    /// Device-independent units, scaled by density
    Dp(f32),
    /// Physical pixels, used as-is
    Px(f32),
}

impl Dimension {
    /// Convert to whole pixels, truncating toward zero.
    ///
    /// Negative lengths stay negative; the widget renders them as empty
    /// rather than rejecting them.
    pub fn to_px(self, density: Density) -> i32 {
        match self {
            Dimension::Dp(value) => (value * density.scale()) as i32,
            Dimension::Px(value) => value as i32,
        }
    }

    /// Parse `10dp`, `10dip`, `12px` or a bare number (pixels).
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();

        let (number, make): (&str, fn(f32) -> Dimension) =
            if let Some(number) = raw.strip_suffix("dip") {
                (number, Dimension::Dp)
            } else if let Some(number) = raw.strip_suffix("dp") {
                (number, Dimension::Dp)
            } else if let Some(number) = raw.strip_suffix("px") {
                (number, Dimension::Px)
            } else {
                (raw, Dimension::Px)
            };

        let value: f32 = number.trim_end().parse().ok()?;
        value.is_finite().then(|| make(value))
    }
}

// ============================================================================
// Padding
// ============================================================================

/// Padding around an element (top, right, bottom, left), in pixels
///
/// # Examples
///
/// ```ignore
/// // Equal padding on all sides (8px)
/// let p = Padding::all(8);
///
/// // Different vertical (4px) and horizontal (12px)
/// let p = Padding::symmetric(4, 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Padding {
    /// Creates equal padding on all sides
    pub fn all(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Creates symmetric padding (vertical and horizontal)
    pub fn symmetric(vertical: u32, horizontal: u32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Creates padding with individual control for each side
    pub fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Returns total horizontal padding (left + right)
    pub fn horizontal(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    /// Returns total vertical padding (top + bottom)
    pub fn vertical(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }
}
