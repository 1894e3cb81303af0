#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod config;
pub mod shared;
pub mod ui;

pub use config::{
    AttrKind, AttrValue, AttributeSet, AttributeSource, ConfigError, DotIndicatorConfig,
    IndicatorAttr,
};
pub use shared::SharedDotIndicator;
pub use ui::{
    DotIndicator, Drawable, Measurable, SizeConstraint, TouchEvent, TouchPoint, TouchResult,
    Touchable,
};
