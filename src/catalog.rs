//! Static catalog of fonts, icons and color palettes offered by the editor.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::{LogoConfig, Paint};

/// Font families the editor offers.
pub const FONTS: [&str; 11] = [
    "Inter",
    "Outfit",
    "Playfair Display",
    "Space Grotesk",
    "Righteous",
    "Permanent Marker",
    "Pacifico",
    "Bebas Neue",
    "Cinzel",
    "Lobster",
    "Montserrat",
];

/// Icon ids with a built-in glyph.
pub const ICONS: [&str; 32] = [
    "ShoppingBag", "Store", "Package", "Zap", "Sparkles", "Heart", "Star",
    "Coffee", "Box", "Scissors", "Crown", "Diamond", "Camera", "Music",
    "Palette", "BookOpen", "Briefcase", "Code", "Cpu", "Feather", "Flame",
    "Gift", "Globe", "Headphones", "Key", "Leaf", "MapPin", "Moon", "Sun",
    "Truck", "Umbrella", "Watch",
];

/// A named background/text/icon color triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPalette {
    /// Display name shown in the editor.
    pub name: &'static str,
    /// Background color.
    pub bg: Paint,
    /// Label color.
    pub text: Paint,
    /// Icon stroke color.
    pub icon: Paint,
}

const fn palette(name: &'static str, bg: u32, text: u32, icon: u32) -> ColorPalette {
    ColorPalette {
        name,
        bg: hex(bg),
        text: hex(text),
        icon: hex(icon),
    }
}

const fn hex(rgb: u32) -> Paint {
    Paint::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Palettes offered by the editor, grouped dark, light, vibrant, earthy and
/// high contrast.
pub const PALETTES: [ColorPalette; 25] = [
    // Dark
    palette("Midnight Blue", 0x0f172a, 0xffffff, 0x3b82f6),
    palette("Deep Purple", 0x2e1065, 0xf3e8ff, 0xd8b4fe),
    palette("Forest Night", 0x064e3b, 0xd1fae5, 0x34d399),
    palette("Charcoal Gold", 0x1f2937, 0xfef3c7, 0xfbbf24),
    palette("Vampire Red", 0x450a0a, 0xfee2e2, 0xf87171),
    // Light / minimalist
    palette("Classic Monochrome", 0xffffff, 0x000000, 0x000000),
    palette("Clean Slate", 0xf8fafc, 0x334155, 0x64748b),
    palette("Cream & Coffee", 0xfafaf9, 0x44403c, 0x78716c),
    palette("Soft Peach", 0xfff1f2, 0x881337, 0xf43f5e),
    palette("Mint Breeze", 0xf0fdf4, 0x14532d, 0x22c55e),
    // Vibrant
    palette("Sunset Orange", 0xffedd5, 0x431407, 0xea580c),
    palette("Cyberpunk Pink", 0xfdf4ff, 0x4a044e, 0xc026d3),
    palette("Ocean Wave", 0xe0f2fe, 0x0c4a6e, 0x0ea5e9),
    palette("Lemon Drop", 0xfefce8, 0x713f12, 0xeab308),
    palette("Lavender Dream", 0xf3e8ff, 0x4c1d95, 0x8b5cf6),
    // Earthy
    palette("Terracotta", 0xfff7ed, 0x7c2d12, 0xc2410c),
    palette("Olive Grove", 0xecfccb, 0x3f6212, 0x65a30d),
    palette("Sand Dune", 0xfef3c7, 0x78350f, 0xd97706),
    palette("Slate Blue", 0xe0e7ff, 0x312e81, 0x4f46e5),
    palette("Rosewood", 0xffe4e6, 0x881337, 0xe11d48),
    // High contrast
    palette("Matrix Green", 0x000000, 0x22c55e, 0x4ade80),
    palette("Neon Pink", 0x000000, 0xec4899, 0xf472b6),
    palette("Electric Yellow", 0x000000, 0xeab308, 0xfde047),
    palette("Crimson Night", 0x000000, 0xef4444, 0xf87171),
    palette("Royal Gold", 0x000000, 0xd97706, 0xfbbf24),
];

/// Returns a copy of `config` with a random palette, font and icon.
///
/// Name, layout and sizes are kept. Each pick is uniform over its list.
pub fn suggest<R: Rng + ?Sized>(config: &LogoConfig, rng: &mut R) -> LogoConfig {
    let palette = PALETTES.choose(rng).copied().unwrap_or(PALETTES[0]);
    let font = FONTS.choose(rng).copied().unwrap_or(FONTS[0]);
    let icon = ICONS.choose(rng).copied().unwrap_or(ICONS[0]);

    LogoConfig {
        font_family: font.to_string(),
        icon: icon.to_string(),
        bg_color: palette.bg,
        text_color: palette.text,
        icon_color: palette.icon,
        ..config.clone()
    }
}
