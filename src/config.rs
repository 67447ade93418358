//! Logo configuration: the single source of truth for one logo.
//!
//! A [`LogoConfig`] is produced by whatever control surface edits the logo
//! and is only ever read by the engine. It serializes to the camelCase JSON
//! shape used by the editor:
//!
//! ```json
//! {
//!   "name": "My Shop",
//!   "fontFamily": "Inter",
//!   "layout": "icon-top",
//!   "icon": "ShoppingBag",
//!   "bgColor": "#0f172a",
//!   "textColor": "#ffffff",
//!   "iconColor": "#3b82f6",
//!   "iconSize": 200.0,
//!   "fontSize": 100.0
//! }
//! ```

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Allowed icon sizes in logical canvas units.
pub const ICON_SIZE_RANGE: RangeInclusive<f32> = 50.0..=600.0;

/// Allowed font sizes in logical canvas units.
pub const FONT_SIZE_RANGE: RangeInclusive<f32> = 20.0..=250.0;

/// Icon id used when a configured icon is not in the registry.
pub const DEFAULT_ICON: &str = "ShoppingBag";

/// Label shown when the configured name is blank.
pub const DEFAULT_NAME: &str = "My Shop";

// ============================================================================
// Paint
// ============================================================================

/// A color value, or the `transparent` sentinel.
///
/// Serializes as a string: `"transparent"` or a lowercase `#rrggbb` hex color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Paint {
    /// Nothing is painted.
    Transparent,
    /// An opaque sRGB color.
    Solid(Srgb<u8>),
}

impl Paint {
    /// Opaque `#000000`.
    pub const BLACK: Self = Self::Solid(Srgb::new(0, 0, 0));
    /// Opaque `#ffffff`.
    pub const WHITE: Self = Self::Solid(Srgb::new(255, 255, 255));

    /// Creates an opaque paint from 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Solid(Srgb::new(r, g, b))
    }

    /// Returns `true` for the `transparent` sentinel.
    pub fn is_transparent(&self) -> bool {
        matches!(self, Self::Transparent)
    }

    /// Returns the RGB channels, or `None` when transparent.
    pub fn channels(&self) -> Option<(u8, u8, u8)> {
        match self {
            Self::Transparent => None,
            Self::Solid(c) => Some((c.red, c.green, c.blue)),
        }
    }

    /// Returns the value as used in SVG paint attributes (`none` when transparent).
    pub fn to_svg(&self) -> String {
        match self {
            Self::Transparent => "none".to_string(),
            Self::Solid(_) => self.to_string(),
        }
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transparent => f.write_str("transparent"),
            Self::Solid(c) => write!(f, "#{:02x}{:02x}{:02x}", c.red, c.green, c.blue),
        }
    }
}

impl FromStr for Paint {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("transparent") {
            return Ok(Self::Transparent);
        }
        trimmed
            .parse::<Srgb<u8>>()
            .map(Self::Solid)
            .map_err(|_| ConfigError::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for Paint {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Paint> for String {
    fn from(paint: Paint) -> Self {
        paint.to_string()
    }
}

// ============================================================================
// Layout mode and shape
// ============================================================================

/// Arrangement of the icon and the text label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum LayoutMode {
    /// Icon above the text (stacked).
    #[default]
    IconTop,
    /// Icon to the left of the text (row).
    IconLeft,
    /// Text only.
    TextOnly,
    /// Icon only.
    IconOnly,
}

impl LayoutMode {
    /// Every mode, in the order the editor lists them.
    pub const ALL: [Self; 4] = [Self::IconTop, Self::IconLeft, Self::TextOnly, Self::IconOnly];

    /// Returns `true` when this mode draws the icon.
    pub fn shows_icon(self) -> bool {
        !matches!(self, Self::TextOnly)
    }

    /// Returns `true` when this mode draws the text label.
    pub fn shows_text(self) -> bool {
        !matches!(self, Self::IconOnly)
    }
}

/// Outline of the exported logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Shape {
    #[default]
    Square,
    /// Cropped to the circle inscribed in the canvas.
    Circle,
}

impl Shape {
    /// File name marker appended after the variant name.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Square => "",
            Self::Circle => "_Circle",
        }
    }
}

// ============================================================================
// LogoConfig
// ============================================================================

/// The complete parameter set describing one logo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct LogoConfig {
    /// Display text.
    pub name: String,

    /// Font family name, resolved by the rendering surface.
    pub font_family: String,

    /// Arrangement of icon and label.
    pub layout: LayoutMode,

    /// Icon id looked up in a [`GlyphRegistry`](crate::GlyphRegistry).
    pub icon: String,

    #[cfg_attr(feature = "jsonschema", schemars(with = "String"))]
    pub bg_color: Paint,

    #[cfg_attr(feature = "jsonschema", schemars(with = "String"))]
    pub text_color: Paint,

    #[cfg_attr(feature = "jsonschema", schemars(with = "String"))]
    pub icon_color: Paint,

    /// Icon edge length (50-600).
    pub icon_size: f32,

    /// Font size (20-250).
    pub font_size: f32,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            font_family: "Inter".to_string(),
            layout: LayoutMode::IconTop,
            icon: DEFAULT_ICON.to_string(),
            bg_color: Paint::rgb(0x0f, 0x17, 0x2a),
            text_color: Paint::WHITE,
            icon_color: Paint::rgb(0x3b, 0x82, 0xf6),
            icon_size: 200.0,
            font_size: 100.0,
        }
    }
}

impl LogoConfig {
    /// Creates a config with the default look and the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the layout mode.
    pub fn with_layout(mut self, layout: LayoutMode) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the icon id.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = font_family.into();
        self
    }

    /// Sets background, text and icon colors at once.
    pub fn with_colors(mut self, bg: Paint, text: Paint, icon: Paint) -> Self {
        self.bg_color = bg;
        self.text_color = text;
        self.icon_color = icon;
        self
    }

    /// Sets icon and font size. Out of range values are clamped at layout time.
    pub fn with_sizes(mut self, icon_size: f32, font_size: f32) -> Self {
        self.icon_size = icon_size;
        self.font_size = font_size;
        self
    }

    /// Returns a copy with both sizes clamped to their allowed ranges.
    ///
    /// NaN sizes fall back to the range minimum.
    pub fn clamped(&self) -> Self {
        Self {
            icon_size: clamp_size(self.icon_size, &ICON_SIZE_RANGE),
            font_size: clamp_size(self.font_size, &FONT_SIZE_RANGE),
            ..self.clone()
        }
    }

    /// Returns the label to draw, substituting [`DEFAULT_NAME`] for blank names.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            DEFAULT_NAME
        } else {
            &self.name
        }
    }

    /// Returns the file name prefix: the trimmed name with whitespace runs
    /// collapsed to `_`. Blank names produce `Logo`.
    pub fn file_prefix(&self) -> String {
        let prefix = self.name.split_whitespace().collect::<Vec<_>>().join("_");
        if prefix.is_empty() {
            "Logo".to_string()
        } else {
            prefix
        }
    }

    /// Serializes the config to a JSON string.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the config to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes a config from a JSON string. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

fn clamp_size(value: f32, range: &RangeInclusive<f32>) -> f32 {
    if value.is_nan() {
        *range.start()
    } else {
        value.clamp(*range.start(), *range.end())
    }
}

// ============================================================================
// Tests
// ============================================================================
