// src/ui/canvas.rs
//! Drawing seam between the indicator and the display
//!
//! The indicator only ever issues two kinds of draw calls: a filled circle and
//! a stroked circle. [`DotCanvas`] captures exactly that, and [`DisplayCanvas`]
//! turns the calls into embedded-graphics primitives on any `DrawTarget`.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyleBuilder};

use crate::ui::styling::DotColor;

/// 2D graphics context used by the indicator's paint pass
pub trait DotCanvas {
    type Error;

    /// Fill a circle of `radius` pixels around `center`
    fn fill_circle(
        &mut self,
        center: Point,
        radius: i32,
        color: DotColor,
    ) -> Result<(), Self::Error>;

    /// Stroke the outline of a circle with a line `width` pixels wide
    fn stroke_circle(
        &mut self,
        center: Point,
        radius: i32,
        color: DotColor,
        width: i32,
    ) -> Result<(), Self::Error>;
}

/// [`DotCanvas`] backed by an embedded-graphics display
///
/// Degenerate input draws nothing: non-positive radius or stroke width, and
/// fully transparent colors.
pub struct DisplayCanvas<'a, D> {
    display: &'a mut D,
}

impl<'a, D> DisplayCanvas<'a, D>
where
    D: DrawTarget,
    D::Color: From<Rgb888>,
{
    pub fn new(display: &'a mut D) -> Self {
        Self { display }
    }
}

fn circle(center: Point, radius: i32) -> Option<Circle> {
    let radius = u32::try_from(radius).ok().filter(|r| *r > 0)?;
    Some(Circle::with_center(center, radius.saturating_mul(2)))
}

impl<D> DotCanvas for DisplayCanvas<'_, D>
where
    D: DrawTarget,
    D::Color: From<Rgb888>,
{
    type Error = D::Error;

    fn fill_circle(
        &mut self,
        center: Point,
        radius: i32,
        color: DotColor,
    ) -> Result<(), Self::Error> {
        let Some(circle) = circle(center, radius) else {
            return Ok(());
        };
        if color.is_transparent() {
            return Ok(());
        }

        let style = PrimitiveStyleBuilder::new()
            .fill_color(D::Color::from(color.to_rgb888()))
            .build();
        circle.into_styled(style).draw(&mut *self.display)
    }

    fn stroke_circle(
        &mut self,
        center: Point,
        radius: i32,
        color: DotColor,
        width: i32,
    ) -> Result<(), Self::Error> {
        let Some(circle) = circle(center, radius) else {
            return Ok(());
        };
        let Some(width) = u32::try_from(width).ok().filter(|w| *w > 0) else {
            return Ok(());
        };
        if color.is_transparent() {
            return Ok(());
        }

        let style = PrimitiveStyleBuilder::new()
            .stroke_color(D::Color::from(color.to_rgb888()))
            .stroke_width(width)
            .build();
        circle.into_styled(style).draw(&mut *self.display)
    }
}
