// src/ui/core.rs
//! Core UI traits and types shared by the indicator and its host

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Represents a 2D touch point on the display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: u16,
    pub y: u16,
}

impl TouchPoint {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    pub fn to_point(&self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }
}

/// Touch events dispatched by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    /// Finger or pointer went down at a point
    Press(TouchPoint),
    /// Finger or pointer lifted at a point
    Release(TouchPoint),
    /// Touch moved to a new point while held down
    Drag(TouchPoint),
}

/// Result from handling a touch event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchResult {
    /// Event was fully consumed, stop dispatching
    Handled,
    /// Element reacted but the event keeps bubbling to ancestors and siblings
    Propagate,
    /// Element ignored the event, host default handling applies
    Unhandled,
}

/// Per-axis constraint the host passes during measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeConstraint {
    /// The host dictates this exact size in pixels
    Exact(u32),
    /// Size to content
    Fit,
}

impl SizeConstraint {
    /// Pick the final size on one axis given the element's natural size.
    pub fn resolve(self, natural: u32) -> u32 {
        match self {
            SizeConstraint::Exact(size) => size,
            SizeConstraint::Fit => natural,
        }
    }
}

/// Screen area that needs repainting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirtyRegion {
    pub bounds: Rectangle,
}

impl DirtyRegion {
    pub fn new(bounds: Rectangle) -> Self {
        Self { bounds }
    }
}

/// Trait for any UI element that can be drawn
///
/// `draw` takes `&mut self` because painting may settle deferred state
/// (the indicator applies its overflow correction there).
pub trait Drawable {
    /// Draw the element to the display within its bounds
    fn draw<D: DrawTarget<Color = Rgb565>>(&mut self, display: &mut D) -> Result<(), D::Error>;

    /// Get the bounds of this drawable element
    fn bounds(&self) -> Rectangle;

    /// Check if this element needs to be redrawn
    fn is_dirty(&self) -> bool;

    /// Mark this element as clean (already drawn)
    fn mark_clean(&mut self);

    /// Mark this element as dirty (needs redraw)
    fn mark_dirty(&mut self);

    /// Get the dirty region for partial updates
    fn dirty_region(&self) -> Option<DirtyRegion> {
        if self.is_dirty() {
            Some(DirtyRegion::new(self.bounds()))
        } else {
            None
        }
    }
}

/// Trait for elements that negotiate their size with the host layout
pub trait Measurable {
    /// Compute the element size for the given width and height constraints
    fn measure(&self, width: SizeConstraint, height: SizeConstraint) -> Size;
}

/// Trait for UI elements that respond to touch events
pub trait Touchable {
    /// Check if a point is within this element's bounds
    fn contains_point(&self, point: TouchPoint) -> bool;

    /// Handle a touch event, returns how far the event was consumed
    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult;
}

/// Combined trait for interactive drawable elements
pub trait Interactive: Drawable + Measurable + Touchable {}

/// Implement Interactive for any type that implements the three capabilities
impl<T: Drawable + Measurable + Touchable> Interactive for T {}
