//! Shared access to a widget across execution contexts
//!
//! On a single UI loop the indicator is owned outright. When touches arrive
//! from an interrupt or a separate task while another context paints, wrap it
//! in a [`SharedWidget`]: every access runs inside a critical section.
//!
//! Closures passed to [`SharedWidget::lock`] must not lock the same widget
//! again.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::ui::components::DotIndicator;
use crate::ui::core::{Drawable, Interactive, TouchEvent, TouchResult};

/// Critical-section protected widget
pub struct SharedWidget<T> {
    inner: Mutex<CriticalSectionRawMutex, RefCell<T>>,
}

/// The indicator behind a critical-section mutex
pub type SharedDotIndicator = SharedWidget<DotIndicator>;

impl<T> SharedWidget<T> {
    pub const fn new(widget: T) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(widget)),
        }
    }

    /// Run `f` with exclusive access to the widget.
    pub fn lock<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }
}

impl<T: Interactive> SharedWidget<T> {
    pub fn handle_touch(&self, event: TouchEvent) -> TouchResult {
        self.lock(|widget| widget.handle_touch(event))
    }

    pub fn is_dirty(&self) -> bool {
        self.lock(|widget| widget.is_dirty())
    }
}

impl SharedWidget<DotIndicator> {
    /// Redraw the indicator if it requested it, then mark it clean.
    ///
    /// Only the overflow correction and a snapshot of the indicator happen
    /// inside the critical section; the display transfer runs after it is
    /// released, so touches arriving mid-frame are not held off. A failed draw
    /// leaves the indicator dirty.
    ///
    /// Returns whether anything was drawn.
    pub fn draw_if_dirty<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
    ) -> Result<bool, D::Error> {
        let snapshot = self.lock(|indicator| {
            if !indicator.is_dirty() {
                return None;
            }
            indicator.settle_overflow();
            indicator.mark_clean();
            Some(indicator.clone())
        });

        let Some(mut snapshot) = snapshot else {
            return Ok(false);
        };

        if let Err(err) = snapshot.draw(display) {
            self.lock(|indicator| indicator.mark_dirty());
            return Err(err);
        }
        Ok(true)
    }

    pub fn selected_count(&self) -> u32 {
        self.lock(|indicator| indicator.selected_count())
    }

    pub fn set_selected_count(&self, count: u32) {
        self.lock(|indicator| indicator.set_selected_count(count));
    }
}
