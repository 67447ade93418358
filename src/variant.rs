//! Export variants: named color transforms over a base config.

use crate::config::{LogoConfig, Paint, Shape};

/// Color fields a variant replaces. `None` keeps the base value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorOverrides {
    pub bg_color: Option<Paint>,
    pub text_color: Option<Paint>,
    pub icon_color: Option<Paint>,
}

impl ColorOverrides {
    /// No overrides.
    pub const NONE: Self = Self {
        bg_color: None,
        text_color: None,
        icon_color: None,
    };

    /// Returns a copy of `config` with the overridden fields replaced.
    pub fn apply_to(&self, config: &LogoConfig) -> LogoConfig {
        LogoConfig {
            bg_color: self.bg_color.unwrap_or(config.bg_color),
            text_color: self.text_color.unwrap_or(config.text_color),
            icon_color: self.icon_color.unwrap_or(config.icon_color),
            ..config.clone()
        }
    }

    /// Returns `true` when no field is overridden.
    pub fn is_empty(&self) -> bool {
        self.bg_color.is_none() && self.text_color.is_none() && self.icon_color.is_none()
    }
}

/// A named stylistic variant of a logo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variant {
    /// Name used in file names, e.g. `Main`.
    pub name: &'static str,
    /// Colors replaced in the base config.
    pub overrides: ColorOverrides,
    /// Whether the raster snapshot keeps a transparent background.
    pub transparent_background: bool,
}

/// The exported variants, in export order.
pub const VARIANTS: [Variant; 4] = [
    Variant {
        name: "Main",
        overrides: ColorOverrides::NONE,
        transparent_background: false,
    },
    Variant {
        name: "Transparent",
        overrides: ColorOverrides {
            bg_color: Some(Paint::Transparent),
            text_color: None,
            icon_color: None,
        },
        transparent_background: true,
    },
    Variant {
        name: "Black",
        overrides: ColorOverrides {
            bg_color: Some(Paint::Transparent),
            text_color: Some(Paint::BLACK),
            icon_color: Some(Paint::BLACK),
        },
        transparent_background: true,
    },
    Variant {
        name: "White",
        overrides: ColorOverrides {
            bg_color: Some(Paint::Transparent),
            text_color: Some(Paint::WHITE),
            icon_color: Some(Paint::WHITE),
        },
        transparent_background: true,
    },
];

impl Variant {
    /// Derives this variant's config. `base` is left untouched.
    pub fn derive(&self, base: &LogoConfig) -> LogoConfig {
        self.overrides.apply_to(base)
    }

    /// `{prefix}_{name}{shape suffix}.{ext}`
    pub fn file_name(&self, prefix: &str, shape: Shape, ext: &str) -> String {
        format!("{prefix}_{}{}.{ext}", self.name, shape.suffix())
    }
}
