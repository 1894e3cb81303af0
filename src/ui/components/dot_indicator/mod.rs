//! Dot indicator widget and its defaults

pub mod component;
pub mod constants;

pub use component::DotIndicator;
