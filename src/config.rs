//! Indicator configuration
//!
//! The host describes an indicator with named attributes (the names used in
//! layout files, e.g. `indicate_radius="10dp"`). Any type implementing
//! [`AttributeSource`] can supply them; [`AttributeSet`] is a ready-made
//! fixed-capacity map that also parses the layout string syntax.
//!
//! [`DotIndicatorConfig::resolve`] fills in defaults and converts lengths to
//! pixels for a given display density. The resolved config is what the widget
//! consumes, and it can be stored with `postcard` alongside other settings.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use heapless::LinearMap;
use log::warn;
use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

use crate::ui::components::dot_indicator::constants::{
    DEFAULT_BORDER_COLOR, DEFAULT_BORDER_WIDTH_DP, DEFAULT_INTERACTIVE, DEFAULT_LEAST_ONE,
    DEFAULT_MAX_COUNT, DEFAULT_RADIUS_DP, DEFAULT_SELECTED_COLOR, DEFAULT_SELECTED_COUNT,
    DEFAULT_SPACING_DP, DEFAULT_UNSELECTED_COLOR,
};
use crate::ui::styling::{Density, Dimension, DotColor};

/// Capacity of a raw value kept in error context
const MAX_ERROR_TEXT: usize = 32;

/// Number of distinct attributes, one map slot each
pub const MAX_ATTRIBUTES: usize = IndicatorAttr::ALL.len();

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(heapless::String<MAX_ERROR_TEXT>),
    #[error("Invalid value for {attr}: {value}")]
    InvalidValue {
        attr: IndicatorAttr,
        value: heapless::String<MAX_ERROR_TEXT>,
    },
    #[error("Wrong value kind for {attr}, expected {expected:?}")]
    TypeMismatch {
        attr: IndicatorAttr,
        expected: AttrKind,
    },
    #[error("Config encode failed: {0}")]
    Encode(postcard::Error),
    #[error("Config decode failed: {0}")]
    Decode(postcard::Error),
}

/// Copy as much of `raw` as fits into an error string.
fn error_text(raw: &str) -> heapless::String<MAX_ERROR_TEXT> {
    let mut text = heapless::String::new();
    for c in raw.chars() {
        if text.push(c).is_err() {
            break;
        }
    }
    text
}

// ============================================================================
// Attributes
// ============================================================================

/// Named options an indicator reads at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorAttr {
    SelectColor,
    UnselectColor,
    /// Border color; absent means no border
    DivideColor,
    DivideWidth,
    IsLeastOne,
    /// Gap between dots
    Margin,
    Radius,
    MaxNumber,
    /// Initially selected count
    Number,
    Clickable,
}

/// Kind of value an attribute expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrKind {
    Color,
    Dimension,
    Boolean,
    Integer,
}

impl IndicatorAttr {
    pub const ALL: [IndicatorAttr; 10] = [
        IndicatorAttr::SelectColor,
        IndicatorAttr::UnselectColor,
        IndicatorAttr::DivideColor,
        IndicatorAttr::DivideWidth,
        IndicatorAttr::IsLeastOne,
        IndicatorAttr::Margin,
        IndicatorAttr::Radius,
        IndicatorAttr::MaxNumber,
        IndicatorAttr::Number,
        IndicatorAttr::Clickable,
    ];

    /// Attribute name as written by the host
    pub const fn name(self) -> &'static str {
        match self {
            IndicatorAttr::SelectColor => "indicate_select_color",
            IndicatorAttr::UnselectColor => "indicate_unselect_color",
            IndicatorAttr::DivideColor => "indicate_divide_color",
            IndicatorAttr::DivideWidth => "indicate_divide_width",
            IndicatorAttr::IsLeastOne => "indicate_is_least_one",
            IndicatorAttr::Margin => "indicate_margin",
            IndicatorAttr::Radius => "indicate_radius",
            IndicatorAttr::MaxNumber => "indicate_max_number",
            IndicatorAttr::Number => "indicate_number",
            IndicatorAttr::Clickable => "clickable",
        }
    }

    pub const fn kind(self) -> AttrKind {
        match self {
            IndicatorAttr::SelectColor
            | IndicatorAttr::UnselectColor
            | IndicatorAttr::DivideColor => AttrKind::Color,
            IndicatorAttr::DivideWidth | IndicatorAttr::Margin | IndicatorAttr::Radius => {
                AttrKind::Dimension
            }
            IndicatorAttr::IsLeastOne | IndicatorAttr::Clickable => AttrKind::Boolean,
            IndicatorAttr::MaxNumber | IndicatorAttr::Number => AttrKind::Integer,
        }
    }
}

impl fmt::Display for IndicatorAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IndicatorAttr {
    type Err = ConfigError;

    /// Accepts the bare name or a namespaced one (`app:indicate_radius`, `android:clickable`).
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let name = name.trim();
        let bare = name.rsplit(':').next().unwrap_or(name);

        IndicatorAttr::ALL
            .into_iter()
            .find(|attr| attr.name() == bare)
            .ok_or_else(|| ConfigError::UnknownAttribute(error_text(name)))
    }
}

/// A typed attribute value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttrValue {
    Color(DotColor),
    Dimension(Dimension),
    Boolean(bool),
    Integer(i32),
}

impl AttrValue {
    pub fn kind(&self) -> AttrKind {
        match self {
            AttrValue::Color(_) => AttrKind::Color,
            AttrValue::Dimension(_) => AttrKind::Dimension,
            AttrValue::Boolean(_) => AttrKind::Boolean,
            AttrValue::Integer(_) => AttrKind::Integer,
        }
    }

    /// Parse layout syntax for the given kind.
    ///
    /// Colors: `#RRGGBB` / `#AARRGGBB`. Dimensions: `10dp`, `10dip`, `12px`.
    /// Booleans: `true` / `false`. Integers: decimal.
    pub fn parse(kind: AttrKind, raw: &str) -> Option<Self> {
        let raw = raw.trim();
        match kind {
            AttrKind::Color => DotColor::parse_hex(raw).map(AttrValue::Color),
            AttrKind::Dimension => Dimension::parse(raw).map(AttrValue::Dimension),
            AttrKind::Boolean => match raw {
                "true" => Some(AttrValue::Boolean(true)),
                "false" => Some(AttrValue::Boolean(false)),
                _ => None,
            },
            AttrKind::Integer => raw.parse().ok().map(AttrValue::Integer),
        }
    }
}

/// Host-provided attribute lookup
pub trait AttributeSource {
    /// Value set for `attr`, or `None` to use the default
    fn attr(&self, attr: IndicatorAttr) -> Option<AttrValue>;
}

/// Fixed-capacity attribute map, one slot per [`IndicatorAttr`]
///
/// # Examples
///
/// ```ignore
/// let mut attributes = AttributeSet::new();
/// attributes.parse_attr("app:indicate_radius", "6dp")?;
/// attributes.parse_attr("app:indicate_divide_color", "#333333")?;
///
/// let indicator = DotIndicator::from_attributes(&attributes, Density::from_dpi(240))?;
/// ```
#[derive(Debug, Clone)]
pub struct AttributeSet {
    values: LinearMap<IndicatorAttr, AttrValue, MAX_ATTRIBUTES>,
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AttributeSet {
    pub fn new() -> Self {
        Self {
            values: LinearMap::new(),
        }
    }

    /// Set an attribute, returning the previous value.
    pub fn insert(&mut self, attr: IndicatorAttr, value: AttrValue) -> Option<AttrValue> {
        // One slot per attribute, so inserting can never run out of room
        self.values.insert(attr, value).ok().flatten()
    }

    pub fn with(mut self, attr: IndicatorAttr, value: AttrValue) -> Self {
        self.insert(attr, value);
        self
    }

    pub fn remove(&mut self, attr: IndicatorAttr) -> Option<AttrValue> {
        self.values.remove(&attr)
    }

    /// Parse one `name="value"` pair from a layout description.
    ///
    /// `@null` or `none` clears a color attribute, which for the border
    /// color disables the stroke.
    pub fn parse_attr(&mut self, name: &str, raw: &str) -> Result<(), ConfigError> {
        let attr: IndicatorAttr = name.parse()?;

        if attr.kind() == AttrKind::Color && matches!(raw.trim(), "@null" | "none") {
            self.remove(attr);
            return Ok(());
        }

        let value = AttrValue::parse(attr.kind(), raw).ok_or_else(|| ConfigError::InvalidValue {
            attr,
            value: error_text(raw),
        })?;
        self.insert(attr, value);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl AttributeSource for AttributeSet {
    fn attr(&self, attr: IndicatorAttr) -> Option<AttrValue> {
        self.values.get(&attr).copied()
    }
}

// ============================================================================
// Resolved configuration
// ============================================================================

/// Final indicator settings with every length in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DotIndicatorConfig {
    pub selected_color: DotColor,
    pub unselected_color: DotColor,
    pub border_color: Option<DotColor>,
    pub border_width: i32,
    pub spacing: i32,
    pub radius: i32,
    pub max_count: u32,
    pub selected_count: u32,
    pub least_one: bool,
    pub interactive: bool,
}

impl Default for DotIndicatorConfig {
    fn default() -> Self {
        Self::with_density(Density::default())
    }
}

impl DotIndicatorConfig {
    /// Default settings with lengths scaled for `density`
    pub fn with_density(density: Density) -> Self {
        Self {
            selected_color: DEFAULT_SELECTED_COLOR,
            unselected_color: DEFAULT_UNSELECTED_COLOR,
            border_color: DEFAULT_BORDER_COLOR,
            border_width: Dimension::Dp(DEFAULT_BORDER_WIDTH_DP).to_px(density),
            spacing: Dimension::Dp(DEFAULT_SPACING_DP).to_px(density),
            radius: Dimension::Dp(DEFAULT_RADIUS_DP).to_px(density),
            max_count: DEFAULT_MAX_COUNT,
            selected_count: DEFAULT_SELECTED_COUNT,
            least_one: DEFAULT_LEAST_ONE,
            interactive: DEFAULT_INTERACTIVE,
        }
    }

    /// Read every attribute from `source`, falling back to defaults.
    ///
    /// Fails only when a value has the wrong kind for its attribute. Colors
    /// also accept a packed `0xAARRGGBB` integer, read as plain ARGB: `-1` is
    /// opaque white, not "no border". Leave `indicate_divide_color` unset (or
    /// write `@null` in a layout string) to draw borderless dots.
    pub fn resolve<S: AttributeSource + ?Sized>(
        source: &S,
        density: Density,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::with_density(density);

        if let Some(color) = color(source, IndicatorAttr::SelectColor)? {
            config.selected_color = color;
        }
        if let Some(color) = color(source, IndicatorAttr::UnselectColor)? {
            config.unselected_color = color;
        }
        if let Some(color) = color(source, IndicatorAttr::DivideColor)? {
            config.border_color = Some(color);
        }
        if let Some(width) = length(source, IndicatorAttr::DivideWidth, density)? {
            config.border_width = width;
        }
        if let Some(spacing) = length(source, IndicatorAttr::Margin, density)? {
            config.spacing = spacing;
        }
        if let Some(radius) = length(source, IndicatorAttr::Radius, density)? {
            config.radius = radius;
        }
        if let Some(max_count) = count(source, IndicatorAttr::MaxNumber)? {
            config.max_count = max_count;
        }
        if let Some(selected) = count(source, IndicatorAttr::Number)? {
            config.selected_count = selected;
        }
        if let Some(least_one) = flag(source, IndicatorAttr::IsLeastOne)? {
            config.least_one = least_one;
        }
        if let Some(interactive) = flag(source, IndicatorAttr::Clickable)? {
            config.interactive = interactive;
        }

        Ok(config)
    }

    /// Serialize for storage.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        postcard::to_allocvec(self).map_err(ConfigError::Encode)
    }

    /// Restore a config written by [`DotIndicatorConfig::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        postcard::from_bytes(bytes).map_err(ConfigError::Decode)
    }
}

fn mismatch(attr: IndicatorAttr) -> ConfigError {
    ConfigError::TypeMismatch {
        attr,
        expected: attr.kind(),
    }
}

fn color<S: AttributeSource + ?Sized>(
    source: &S,
    attr: IndicatorAttr,
) -> Result<Option<DotColor>, ConfigError> {
    match source.attr(attr) {
        None => Ok(None),
        Some(AttrValue::Color(color)) => Ok(Some(color)),
        Some(AttrValue::Integer(argb)) => Ok(Some(DotColor::from_argb(argb as u32))),
        Some(_) => Err(mismatch(attr)),
    }
}

fn length<S: AttributeSource + ?Sized>(
    source: &S,
    attr: IndicatorAttr,
    density: Density,
) -> Result<Option<i32>, ConfigError> {
    match source.attr(attr) {
        None => Ok(None),
        Some(AttrValue::Dimension(dimension)) => Ok(Some(dimension.to_px(density))),
        Some(_) => Err(mismatch(attr)),
    }
}

fn count<S: AttributeSource + ?Sized>(
    source: &S,
    attr: IndicatorAttr,
) -> Result<Option<u32>, ConfigError> {
    match source.attr(attr) {
        None => Ok(None),
        Some(AttrValue::Integer(value)) => Ok(Some(u32::try_from(value).unwrap_or_else(|_| {
            warn!("{} is negative ({}), using 0", attr, value);
            0
        }))),
        Some(_) => Err(mismatch(attr)),
    }
}

fn flag<S: AttributeSource + ?Sized>(
    source: &S,
    attr: IndicatorAttr,
) -> Result<Option<bool>, ConfigError> {
    match source.attr(attr) {
        None => Ok(None),
        Some(AttrValue::Boolean(value)) => Ok(Some(value)),
        Some(_) => Err(mismatch(attr)),
    }
}
