//! Dot indicator component
//!
//! Draws `max_count` dots in a single row. The first `selected_count` dots use
//! the selected color; the rest use the unselected color plus an optional
//! border stroke. A tap advances the selection by one.
//!
//! # Overflow
//!
//! Taps increment the count without bounds checking. The next paint pass
//! notices `selected_count > max_count` and resets it to 0 (or 1 with the
//! least-one floor), so the stored count may briefly exceed the maximum.
//!
//! # Examples
//!
//! ```ignore
//! let mut indicator = DotIndicator::new(DotIndicatorConfig::default());
//! let size = indicator.measure(SizeConstraint::Fit, SizeConstraint::Fit);
//! indicator.set_bounds(Rectangle::new(Point::new(20, 200), size));
//!
//! indicator.handle_touch(TouchEvent::Press(TouchPoint::new(30, 210)));
//! indicator.handle_touch(TouchEvent::Release(TouchPoint::new(30, 210)));
//!
//! if indicator.is_dirty() {
//!     indicator.draw(&mut display)?;
//!     indicator.mark_clean();
//! }
//! ```

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::{debug, trace};

use crate::config::{AttributeSource, ConfigError, DotIndicatorConfig};
use crate::ui::canvas::{DisplayCanvas, DotCanvas};
use crate::ui::core::{
    Drawable, Measurable, SizeConstraint, TouchEvent, TouchPoint, TouchResult, Touchable,
};
use crate::ui::styling::{Density, DotColor, Padding};

/// Row of selection dots with tap-to-advance
#[derive(Debug, Clone)]
pub struct DotIndicator {
    bounds: Rectangle,
    padding: Padding,
    selected_count: u32,
    max_count: u32,
    selected_color: DotColor,
    unselected_color: DotColor,
    border_color: Option<DotColor>,
    border_width: i32,
    spacing: i32,
    radius: i32,
    least_one: bool,
    interactive: bool,
    /// A press landed inside the bounds and waits for its release
    pressed: bool,
    dirty: bool,
}

impl DotIndicator {
    /// Build an indicator from a resolved configuration.
    ///
    /// Bounds start empty; the host measures the indicator and then places it
    /// with [`DotIndicator::set_bounds`].
    pub fn new(config: DotIndicatorConfig) -> Self {
        Self {
            bounds: Rectangle::zero(),
            padding: Padding::default(),
            selected_count: config.selected_count,
            max_count: config.max_count,
            selected_color: config.selected_color,
            unselected_color: config.unselected_color,
            border_color: config.border_color,
            border_width: config.border_width,
            spacing: config.spacing,
            radius: config.radius,
            least_one: config.least_one,
            interactive: config.interactive,
            pressed: false,
            dirty: true,
        }
    }

    /// Resolve host attributes at the given display density and build the indicator.
    pub fn from_attributes<S: AttributeSource + ?Sized>(
        source: &S,
        density: Density,
    ) -> Result<Self, ConfigError> {
        DotIndicatorConfig::resolve(source, density).map(Self::new)
    }

    /// Snapshot the current state as a configuration, e.g. for persisting.
    pub fn config(&self) -> DotIndicatorConfig {
        DotIndicatorConfig {
            selected_color: self.selected_color,
            unselected_color: self.unselected_color,
            border_color: self.border_color,
            border_width: self.border_width,
            spacing: self.spacing,
            radius: self.radius,
            max_count: self.max_count,
            selected_count: self.selected_count,
            least_one: self.least_one,
            interactive: self.interactive,
        }
    }

    pub fn with_bounds(mut self, bounds: Rectangle) -> Self {
        self.set_bounds(bounds);
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Move or resize the indicator. Marks it dirty if the bounds changed.
    pub fn set_bounds(&mut self, bounds: Rectangle) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.dirty = true;
        }
    }

    /// Horizontal distance between the centers of adjacent dots
    fn pitch(&self) -> i64 {
        i64::from(self.radius)
            .saturating_mul(2)
            .saturating_add(i64::from(self.border_width).saturating_mul(2))
            .saturating_add(i64::from(self.spacing))
    }

    /// Content size before the host applies its constraints
    pub fn natural_size(&self) -> Size {
        // Geometry near the integer limits saturates instead of wrapping
        let width = i64::from(self.max_count)
            .saturating_mul(self.pitch())
            .saturating_add(i64::from(self.padding.horizontal()));
        let height = i64::from(self.radius)
            .saturating_mul(2)
            .saturating_add(i64::from(self.border_width).saturating_mul(2))
            .saturating_add(i64::from(self.padding.vertical()));

        Size::new(clamp_to_u32(width), clamp_to_u32(height))
    }

    /// Center of the dot at `index`, counted from the left
    pub fn dot_center(&self, index: u32) -> Point {
        let x = i64::from(self.bounds.top_left.x)
            .saturating_add(i64::from(self.padding.left))
            .saturating_add(i64::from(self.radius))
            .saturating_add(i64::from(self.border_width))
            .saturating_add(i64::from(index).saturating_mul(self.pitch()));
        let y = i64::from(self.bounds.top_left.y) + i64::from(self.bounds.size.height / 2);

        Point::new(clamp_to_i32(x), clamp_to_i32(y))
    }

    /// Apply the overflow rule and return the count that will be drawn.
    ///
    /// [`DotIndicator::paint`] calls this itself.
    pub fn settle_overflow(&mut self) -> u32 {
        if self.selected_count > self.max_count {
            let reset = if self.least_one { 1 } else { 0 };
            debug!(
                "Dot indicator overflow: {} selected of {}, resetting to {}",
                self.selected_count, self.max_count, reset
            );
            self.selected_count = reset;
        }
        self.selected_count
    }

    /// Paint every dot onto `canvas`, left to right.
    ///
    /// The overflow correction runs first, so this mutates `selected_count`
    /// when it exceeds `max_count`.
    pub fn paint<C: DotCanvas>(&mut self, canvas: &mut C) -> Result<(), C::Error> {
        let selected = self.settle_overflow();
        trace!(
            "Painting dot indicator: {}/{} selected",
            selected, self.max_count
        );

        for index in 0..self.max_count {
            let center = self.dot_center(index);

            if index < selected {
                canvas.fill_circle(center, self.radius, self.selected_color)?;
            } else {
                canvas.fill_circle(center, self.radius, self.unselected_color)?;

                if let Some(border) = self.border_color {
                    canvas.stroke_circle(center, self.radius, border, self.border_width)?;
                }
            }
        }

        Ok(())
    }

    /// Complete a tap gesture.
    ///
    /// Interactive indicators advance by one and request a redraw; the tap is
    /// still reported as [`TouchResult::Propagate`] so ancestors see it too.
    /// Non-interactive indicators leave everything to the host.
    pub fn tap(&mut self) -> TouchResult {
        if !self.interactive {
            return TouchResult::Unhandled;
        }

        self.selected_count = self.selected_count.saturating_add(1);
        self.dirty = true;
        debug!(
            "Dot indicator tapped: {}/{} selected",
            self.selected_count, self.max_count
        );

        TouchResult::Propagate
    }

    pub fn selected_count(&self) -> u32 {
        self.selected_count
    }

    /// Set the selected count and request a redraw.
    ///
    /// Values above `max_count` are accepted and corrected at paint time.
    pub fn set_selected_count(&mut self, count: u32) {
        self.selected_count = count;
        self.dirty = true;
    }

    pub fn max_count(&self) -> u32 {
        self.max_count
    }

    pub fn set_max_count(&mut self, max_count: u32) {
        self.max_count = max_count;
    }

    pub fn is_least_one(&self) -> bool {
        self.least_one
    }

    pub fn set_least_one(&mut self, least_one: bool) {
        self.least_one = least_one;
    }

    pub fn selected_color(&self) -> DotColor {
        self.selected_color
    }

    pub fn set_selected_color(&mut self, color: DotColor) {
        self.selected_color = color;
    }

    pub fn unselected_color(&self) -> DotColor {
        self.unselected_color
    }

    pub fn set_unselected_color(&mut self, color: DotColor) {
        self.unselected_color = color;
    }

    pub fn border_color(&self) -> Option<DotColor> {
        self.border_color
    }

    /// `None` disables the border stroke around unselected dots.
    pub fn set_border_color(&mut self, color: Option<DotColor>) {
        self.border_color = color;
    }

    pub fn border_width(&self) -> i32 {
        self.border_width
    }

    pub fn set_border_width(&mut self, width: i32) {
        self.border_width = width;
    }

    pub fn spacing(&self) -> i32 {
        self.spacing
    }

    pub fn set_spacing(&mut self, spacing: i32) {
        self.spacing = spacing;
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: i32) {
        self.radius = radius;
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
        if !interactive {
            self.pressed = false;
        }
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn set_padding(&mut self, padding: Padding) {
        self.padding = padding;
    }
}

fn clamp_to_u32(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}

fn clamp_to_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

impl Default for DotIndicator {
    fn default() -> Self {
        Self::new(DotIndicatorConfig::default())
    }
}

impl From<DotIndicatorConfig> for DotIndicator {
    fn from(config: DotIndicatorConfig) -> Self {
        Self::new(config)
    }
}

impl Drawable for DotIndicator {
    fn draw<D: DrawTarget<Color = Rgb565>>(&mut self, display: &mut D) -> Result<(), D::Error> {
        self.paint(&mut DisplayCanvas::new(display))
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl Measurable for DotIndicator {
    fn measure(&self, width: SizeConstraint, height: SizeConstraint) -> Size {
        let natural = self.natural_size();
        Size::new(width.resolve(natural.width), height.resolve(natural.height))
    }
}

impl Touchable for DotIndicator {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.bounds.contains(point.to_point())
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        if !self.interactive {
            return TouchResult::Unhandled;
        }

        match event {
            TouchEvent::Press(point) => {
                self.pressed = self.contains_point(point);
                TouchResult::Propagate
            }
            TouchEvent::Release(point) => {
                let was_pressed = core::mem::take(&mut self.pressed);
                if was_pressed && self.contains_point(point) {
                    self.tap()
                } else {
                    TouchResult::Propagate
                }
            }
            TouchEvent::Drag(_) => TouchResult::Propagate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AttrValue, AttributeSet, IndicatorAttr};
    use crate::ui::canvas::testing::{DrawCall, RecordingCanvas};
    use crate::ui::styling::{BLACK, Dimension, LIGHT_GRAY, TEAL};
    use embedded_graphics::mock_display::MockDisplay;

    /// Defaults at baseline density: radius 10, border 1, spacing 5, three dots
    fn indicator() -> DotIndicator {
        let mut indicator = DotIndicator::default();
        let size = indicator.measure(SizeConstraint::Fit, SizeConstraint::Fit);
        indicator.set_bounds(Rectangle::new(Point::zero(), size));
        indicator
    }

    fn paint(indicator: &mut DotIndicator) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::default();
        indicator.paint(&mut canvas).unwrap();
        canvas
    }

    fn tap_at(indicator: &mut DotIndicator, x: u16, y: u16) -> TouchResult {
        let point = TouchPoint::new(x, y);
        indicator.handle_touch(TouchEvent::Press(point));
        indicator.handle_touch(TouchEvent::Release(point))
    }

    #[test]
    fn test_natural_size_with_defaults() {
        let indicator = DotIndicator::default();
        assert_eq!(indicator.natural_size(), Size::new(81, 22));
    }

    #[test]
    fn test_measure_respects_exact_constraints() {
        let indicator = DotIndicator::default();
        assert_eq!(
            indicator.measure(SizeConstraint::Exact(200), SizeConstraint::Fit),
            Size::new(200, 22)
        );
        assert_eq!(
            indicator.measure(SizeConstraint::Fit, SizeConstraint::Exact(48)),
            Size::new(81, 48)
        );
    }

    #[test]
    fn test_measure_tracks_geometry_changes() {
        let mut indicator = DotIndicator::default().with_padding(Padding::new(2, 3, 4, 5));
        assert_eq!(indicator.natural_size(), Size::new(81 + 8, 22 + 6));

        indicator.set_radius(4);
        indicator.set_border_width(0);
        indicator.set_spacing(2);
        indicator.set_max_count(5);
        assert_eq!(indicator.natural_size(), Size::new(5 * 10 + 8, 8 + 6));
    }

    #[test]
    fn test_degenerate_geometry_measures_zero() {
        let mut indicator = DotIndicator::default();
        indicator.set_max_count(0);
        assert_eq!(indicator.natural_size().width, 0);

        indicator.set_radius(-20);
        assert_eq!(indicator.natural_size().height, 0);
    }

    #[test]
    fn test_extreme_geometry_saturates() {
        let mut indicator = DotIndicator::default()
            .with_padding(Padding::new(u32::MAX, u32::MAX, u32::MAX, u32::MAX));
        indicator.set_radius(i32::MAX);
        indicator.set_border_width(i32::MAX);
        indicator.set_spacing(i32::MAX);
        indicator.set_max_count(u32::MAX);

        assert_eq!(
            indicator.measure(SizeConstraint::Fit, SizeConstraint::Fit),
            Size::new(u32::MAX, u32::MAX)
        );
        assert_eq!(indicator.dot_center(0).x, i32::MAX);
        assert_eq!(indicator.dot_center(u32::MAX).x, i32::MAX);

        indicator.set_radius(i32::MIN);
        indicator.set_border_width(i32::MIN);
        indicator.set_spacing(i32::MIN);
        assert_eq!(indicator.natural_size(), Size::new(0, 0));
    }

    #[test]
    fn test_dot_centers_step_by_pitch() {
        let indicator = DotIndicator::default()
            .with_padding(Padding::new(0, 0, 0, 4))
            .with_bounds(Rectangle::new(Point::new(10, 100), Size::new(100, 30)));

        assert_eq!(indicator.dot_center(0), Point::new(10 + 4 + 11, 115));
        assert_eq!(indicator.dot_center(1), Point::new(10 + 4 + 11 + 27, 115));
        assert_eq!(indicator.dot_center(2), Point::new(10 + 4 + 11 + 54, 115));
    }

    #[test]
    fn test_paint_sequence_with_border() {
        let mut indicator = indicator();
        indicator.set_border_color(Some(BLACK));
        indicator.set_selected_count(1);

        let canvas = paint(&mut indicator);
        assert_eq!(
            canvas.calls,
            [
                DrawCall::Fill {
                    center: Point::new(11, 11),
                    radius: 10,
                    color: TEAL,
                },
                DrawCall::Fill {
                    center: Point::new(38, 11),
                    radius: 10,
                    color: LIGHT_GRAY,
                },
                DrawCall::Stroke {
                    center: Point::new(38, 11),
                    radius: 10,
                    color: BLACK,
                    width: 1,
                },
                DrawCall::Fill {
                    center: Point::new(65, 11),
                    radius: 10,
                    color: LIGHT_GRAY,
                },
                DrawCall::Stroke {
                    center: Point::new(65, 11),
                    radius: 10,
                    color: BLACK,
                    width: 1,
                },
            ]
        );
    }

    #[test]
    fn test_no_border_means_no_strokes() {
        let mut indicator = indicator();
        indicator.set_border_width(6);

        let canvas = paint(&mut indicator);
        assert_eq!(canvas.strokes(), 0, "border color none suppresses strokes");
        assert_eq!(canvas.fills_with(LIGHT_GRAY), 3);
    }

    #[test]
    fn test_selected_dots_match_count_for_every_max() {
        for max_count in 0..6 {
            for selected in 0..9 {
                for least_one in [false, true] {
                    let mut indicator = indicator();
                    indicator.set_max_count(max_count);
                    indicator.set_selected_count(selected);
                    indicator.set_least_one(least_one);

                    let expected = if selected <= max_count {
                        selected
                    } else if least_one {
                        1.min(max_count)
                    } else {
                        0
                    };

                    let canvas = paint(&mut indicator);
                    assert_eq!(
                        canvas.fills_with(TEAL),
                        expected as usize,
                        "max={max_count} selected={selected} least_one={least_one}"
                    );
                    assert_eq!(canvas.calls.len(), max_count as usize);
                }
            }
        }
    }

    #[test]
    fn test_overflow_resets_to_least_one() {
        let mut indicator = indicator();
        indicator.set_selected_count(5);
        indicator.set_least_one(true);

        let canvas = paint(&mut indicator);
        assert_eq!(indicator.selected_count(), 1);
        assert_eq!(canvas.fills_with(TEAL), 1);
    }

    #[test]
    fn test_overflow_resets_to_zero() {
        let mut indicator = indicator();
        indicator.set_selected_count(5);

        let canvas = paint(&mut indicator);
        assert_eq!(indicator.selected_count(), 0);
        assert_eq!(canvas.fills_with(TEAL), 0);
    }

    #[test]
    fn test_overflow_is_deferred_until_paint() {
        let mut indicator = indicator();
        indicator.set_selected_count(3);

        for _ in 0..4 {
            indicator.tap();
        }
        assert_eq!(indicator.selected_count(), 7, "no clamp at tap time");

        paint(&mut indicator);
        assert_eq!(indicator.selected_count(), 0);
    }

    #[test]
    fn test_repeated_paints_are_identical() {
        let mut indicator = indicator();
        indicator.set_border_color(Some(BLACK));
        indicator.set_selected_count(2);

        let first = paint(&mut indicator);
        let second = paint(&mut indicator);
        assert_eq!(first.calls, second.calls);
    }

    #[test]
    fn test_zero_max_count_draws_nothing() {
        let mut indicator = indicator();
        indicator.set_max_count(0);
        indicator.set_selected_count(2);
        indicator.set_least_one(true);

        let canvas = paint(&mut indicator);
        assert!(canvas.calls.is_empty());
        assert_eq!(indicator.selected_count(), 1);
    }

    #[test]
    fn test_tap_advances_and_requests_redraw() {
        let mut indicator = indicator();
        indicator.mark_clean();

        let result = tap_at(&mut indicator, 11, 11);
        assert_eq!(result, TouchResult::Propagate, "tap keeps bubbling");
        assert_eq!(indicator.selected_count(), 1);
        assert!(indicator.is_dirty());
        assert_eq!(
            indicator.dirty_region().map(|region| region.bounds),
            Some(indicator.bounds())
        );
    }

    #[test]
    fn test_non_interactive_tap_is_ignored() {
        let mut indicator = indicator();
        indicator.set_interactive(false);
        indicator.mark_clean();

        let point = TouchPoint::new(11, 11);
        assert_eq!(
            indicator.handle_touch(TouchEvent::Press(point)),
            TouchResult::Unhandled
        );
        assert_eq!(
            indicator.handle_touch(TouchEvent::Release(point)),
            TouchResult::Unhandled
        );
        assert_eq!(indicator.tap(), TouchResult::Unhandled);
        assert_eq!(indicator.selected_count(), 0);
        assert!(!indicator.is_dirty());
    }

    #[test]
    fn test_press_alone_or_drag_does_not_tap() {
        let mut indicator = indicator();
        let point = TouchPoint::new(11, 11);

        assert_eq!(
            indicator.handle_touch(TouchEvent::Press(point)),
            TouchResult::Propagate
        );
        assert_eq!(
            indicator.handle_touch(TouchEvent::Drag(TouchPoint::new(20, 11))),
            TouchResult::Propagate
        );
        assert_eq!(indicator.selected_count(), 0);
    }

    #[test]
    fn test_release_outside_bounds_cancels_tap() {
        let mut indicator = indicator();

        indicator.handle_touch(TouchEvent::Press(TouchPoint::new(11, 11)));
        indicator.handle_touch(TouchEvent::Release(TouchPoint::new(200, 11)));
        assert_eq!(indicator.selected_count(), 0);

        // A release with no matching press is not a tap either
        indicator.handle_touch(TouchEvent::Release(TouchPoint::new(11, 11)));
        assert_eq!(indicator.selected_count(), 0);
    }

    #[test]
    fn test_press_outside_bounds_does_not_tap() {
        let mut indicator = indicator();
        tap_at(&mut indicator, 300, 300);
        assert_eq!(indicator.selected_count(), 0);
    }

    #[test]
    fn test_only_selected_count_setter_requests_redraw() {
        let mut indicator = indicator();
        indicator.mark_clean();

        indicator.set_selected_color(BLACK);
        indicator.set_unselected_color(BLACK);
        indicator.set_border_color(Some(BLACK));
        indicator.set_border_width(3);
        indicator.set_radius(4);
        indicator.set_spacing(9);
        indicator.set_max_count(8);
        indicator.set_least_one(true);
        assert!(!indicator.is_dirty());

        indicator.set_selected_count(2);
        assert!(indicator.is_dirty());
    }

    #[test]
    fn test_set_bounds_marks_dirty_only_on_change() {
        let mut indicator = indicator();
        indicator.mark_clean();

        indicator.set_bounds(indicator.bounds());
        assert!(!indicator.is_dirty());

        indicator.set_bounds(Rectangle::new(Point::new(5, 5), Size::new(81, 22)));
        assert!(indicator.is_dirty());
    }

    #[test]
    fn test_from_attributes_scales_lengths() {
        let attributes = AttributeSet::new()
            .with(IndicatorAttr::Radius, AttrValue::Dimension(Dimension::Dp(6.0)))
            .with(IndicatorAttr::MaxNumber, AttrValue::Integer(4))
            .with(IndicatorAttr::Number, AttrValue::Integer(2));

        let indicator = DotIndicator::from_attributes(&attributes, Density::new(2.0)).unwrap();
        assert_eq!(indicator.radius(), 12);
        assert_eq!(indicator.spacing(), 10);
        assert_eq!(indicator.border_width(), 2);
        assert_eq!(indicator.max_count(), 4);
        assert_eq!(indicator.selected_count(), 2);
        assert_eq!(
            indicator.config(),
            DotIndicatorConfig::resolve(&attributes, Density::new(2.0)).unwrap()
        );
    }

    #[test]
    fn test_draw_renders_onto_display() {
        let mut indicator = indicator();
        indicator.set_selected_count(1);
        indicator.set_border_color(Some(BLACK));

        // The third dot spills past the 64px mock display
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        indicator.draw(&mut display).unwrap();

        let selected = Rgb565::from(TEAL.to_rgb888());
        let unselected = Rgb565::from(LIGHT_GRAY.to_rgb888());
        assert_eq!(display.get_pixel(Point::new(11, 11)), Some(selected));
        assert_eq!(display.get_pixel(Point::new(38, 11)), Some(unselected));
        assert_eq!(display.get_pixel(Point::new(25, 11)), None, "gap between dots");
    }
}
