//! Styling system for the indicator
//!
//! - [`colors`] - RGBA colors and the named defaults
//! - [`layout`] - padding, display density and dp/px lengths

pub mod colors;
pub mod layout;

pub use colors::{BLACK, DotColor, LIGHT_GRAY, TEAL, TRANSPARENT, WHITE};
pub use layout::{Density, Dimension, Padding};
