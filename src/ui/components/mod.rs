// src/ui/components/mod.rs
//! UI components library

pub mod dot_indicator;

pub use dot_indicator::DotIndicator;
