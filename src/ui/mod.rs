// src/ui/mod.rs
//! Dot indicator UI - a custom-drawn row of selection dots for embedded displays
//!
//! This module provides:
//! - Core traits for drawable, measurable and touchable elements
//! - A canvas seam that turns circle draw calls into embedded-graphics primitives
//! - Styling primitives (RGBA colors, density-scaled lengths, padding)
//! - The `DotIndicator` component itself

pub mod canvas;
pub mod components;
pub mod core;
pub mod styling;

// Re-export commonly used items
pub use canvas::{DisplayCanvas, DotCanvas};
pub use components::DotIndicator;
pub use core::{
    DirtyRegion, Drawable, Interactive, Measurable, SizeConstraint, TouchEvent, TouchPoint,
    TouchResult, Touchable,
};
pub use styling::{Density, Dimension, DotColor, Padding};
