//! Default indicator configuration
//!
//! Lengths are in device-independent units and are scaled by the display
//! density when a configuration is resolved.

use crate::ui::styling::{DotColor, LIGHT_GRAY, TEAL};

/// Fill color of selected dots
pub const DEFAULT_SELECTED_COLOR: DotColor = TEAL;

/// Fill color of unselected dots
pub const DEFAULT_UNSELECTED_COLOR: DotColor = LIGHT_GRAY;

/// Border stroke around unselected dots (none)
pub const DEFAULT_BORDER_COLOR: Option<DotColor> = None;

/// Border stroke width in dp
pub const DEFAULT_BORDER_WIDTH_DP: f32 = 1.0;

/// Gap between adjacent dot edges in dp
pub const DEFAULT_SPACING_DP: f32 = 5.0;

/// Dot radius in dp
pub const DEFAULT_RADIUS_DP: f32 = 10.0;

/// Number of dots drawn
pub const DEFAULT_MAX_COUNT: u32 = 3;

/// Dots selected at construction
pub const DEFAULT_SELECTED_COUNT: u32 = 0;

pub const DEFAULT_LEAST_ONE: bool = false;

pub const DEFAULT_INTERACTIVE: bool = true;
