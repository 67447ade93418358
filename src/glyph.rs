//! Icon glyphs and the registry that resolves icon ids to them.
//!
//! A [`Glyph`] is the inner markup of a 24x24 stroked icon. Rendering it with
//! a [`GlyphStyle`] produces a standalone `<svg>` element sized and colored
//! for the logo. Lookups go through [`GlyphRegistry::resolve`], which never
//! fails: unknown ids resolve to the registry's fallback glyph.

use std::borrow::Cow;
use std::collections::HashMap;

use tracing::debug;

use crate::config::{DEFAULT_ICON, Paint};

/// Side of the square coordinate system all glyph bodies are drawn in.
pub const GLYPH_VIEWBOX: f32 = 24.0;

/// Stroke width the logo draws icons with.
pub const DEFAULT_STROKE_WIDTH: f32 = 1.5;

// ============================================================================
// Glyph
// ============================================================================

/// A drawable vector icon identified by a symbolic name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    name: Cow<'static, str>,
    body: Cow<'static, str>,
}

/// Size, color and stroke used when rendering a [`Glyph`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphStyle {
    /// Edge length of the rendered icon.
    pub size: f32,
    /// Stroke color; glyph parts drawn with `currentColor` pick it up.
    pub color: Paint,
    /// Stroke width in 24x24 glyph units.
    pub stroke_width: f32,
}

impl GlyphStyle {
    /// A style with the default 1.5 unit stroke.
    pub fn new(size: f32, color: Paint) -> Self {
        Self {
            size,
            color,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl Glyph {
    /// Creates a glyph from its 24x24 inner markup.
    pub fn new(name: impl Into<Cow<'static, str>>, body: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }

    /// The id this glyph is registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The inner markup, in 24x24 glyph units.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Renders the glyph as a standalone `<svg>` element of `style.size` units.
    pub fn render(&self, style: &GlyphStyle) -> String {
        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" "#,
                r#"viewBox="0 0 {vb} {vb}" fill="none" stroke="currentColor" color="{color}" "#,
                r#"stroke-width="{stroke}" stroke-linecap="round" stroke-linejoin="round">"#,
                "{body}</svg>"
            ),
            size = style.size,
            vb = GLYPH_VIEWBOX,
            color = style.color,
            stroke = style.stroke_width,
            body = self.body,
        )
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Resolves icon ids to glyphs with a default-on-miss policy.
pub trait GlyphRegistry: Send + Sync {
    /// Looks up a glyph by exact id.
    fn get(&self, id: &str) -> Option<&Glyph>;

    /// The glyph used for unknown ids.
    fn fallback(&self) -> &Glyph;

    /// Looks up a glyph, falling back to [`fallback`](Self::fallback) on a miss.
    fn resolve(&self, id: &str) -> &Glyph {
        match self.get(id) {
            Some(glyph) => glyph,
            None => {
                let fallback = self.fallback();
                debug!(icon = id, fallback = fallback.name(), "unknown icon id, using fallback glyph");
                fallback
            }
        }
    }
}

/// A map of glyphs keyed by id.
#[derive(Debug, Clone)]
pub struct GlyphSet {
    glyphs: HashMap<String, Glyph>,
    fallback: Glyph,
}

impl GlyphSet {
    /// Creates a set containing only `fallback`.
    pub fn new(fallback: Glyph) -> Self {
        let mut glyphs = HashMap::new();
        glyphs.insert(fallback.name().to_string(), fallback.clone());
        Self { glyphs, fallback }
    }

    /// Creates the set of built-in icons, with `ShoppingBag` as the fallback.
    pub fn builtin() -> Self {
        let fallback = BUILTIN_GLYPHS
            .iter()
            .find(|(name, _)| *name == DEFAULT_ICON)
            .map(|(name, body)| Glyph::new(*name, *body))
            .unwrap_or_else(|| Glyph::new(DEFAULT_ICON, ""));

        let mut set = Self::new(fallback);
        for (name, body) in BUILTIN_GLYPHS {
            set.insert(Glyph::new(*name, *body));
        }
        set
    }

    /// Adds or replaces a glyph under its own name.
    pub fn insert(&mut self, glyph: Glyph) {
        self.glyphs.insert(glyph.name().to_string(), glyph);
    }

    /// Number of glyphs, the fallback included.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Returns `true` if `id` resolves without falling back.
    pub fn contains(&self, id: &str) -> bool {
        self.glyphs.contains_key(id)
    }
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl GlyphRegistry for GlyphSet {
    fn get(&self, id: &str) -> Option<&Glyph> {
        self.glyphs.get(id)
    }

    fn fallback(&self) -> &Glyph {
        &self.fallback
    }
}

// ============================================================================
// Built-in glyph bodies (24x24, stroked with currentColor)
// ============================================================================

const BUILTIN_GLYPHS: &[(&str, &str)] = &[
    (
        "ShoppingBag",
        r#"<path d="M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4Z"/><path d="M3 6h18"/><path d="M16 10a4 4 0 0 1-8 0"/>"#,
    ),
    (
        "Store",
        r#"<path d="m2 7 4.41-4.41A2 2 0 0 1 7.83 2h8.34a2 2 0 0 1 1.42.59L22 7"/><path d="M4 12v8a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-8"/><path d="M15 22v-4a2 2 0 0 0-2-2h-2a2 2 0 0 0-2 2v4"/><path d="M2 7h20"/><path d="M2 7v3a2 2 0 0 0 4 0a2 2 0 0 0 4 0a2 2 0 0 0 4 0a2 2 0 0 0 4 0a2 2 0 0 0 4 0V7"/>"#,
    ),
    (
        "Package",
        r#"<path d="m7.5 4.27 9 5.15"/><path d="M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z"/><path d="m3.3 7 8.7 5 8.7-5"/><path d="M12 22V12"/>"#,
    ),
    ("Zap", r#"<path d="M13 2 3 14h9l-1 8 10-12h-9l1-8z"/>"#),
    (
        "Sparkles",
        r#"<path d="m12 3-1.9 5.8a2 2 0 0 1-1.3 1.3L3 12l5.8 1.9a2 2 0 0 1 1.3 1.3L12 21l1.9-5.8a2 2 0 0 1 1.3-1.3L21 12l-5.8-1.9a2 2 0 0 1-1.3-1.3Z"/><path d="M5 3v4"/><path d="M19 17v4"/><path d="M3 5h4"/><path d="M17 19h4"/>"#,
    ),
    (
        "Heart",
        r#"<path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"/>"#,
    ),
    (
        "Star",
        r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#,
    ),
    (
        "Coffee",
        r#"<path d="M17 8h1a4 4 0 1 1 0 8h-1"/><path d="M3 8h14v9a4 4 0 0 1-4 4H7a4 4 0 0 1-4-4Z"/><path d="M6 2v2"/><path d="M10 2v2"/><path d="M14 2v2"/>"#,
    ),
    (
        "Box",
        r#"<path d="M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z"/><path d="m3.3 7 8.7 5 8.7-5"/><path d="M12 22V12"/>"#,
    ),
    (
        "Scissors",
        r#"<circle cx="6" cy="6" r="3"/><path d="M8.12 8.12 12 12"/><path d="M20 4 8.12 15.88"/><circle cx="6" cy="18" r="3"/><path d="M14.8 14.8 20 20"/>"#,
    ),
    ("Crown", r#"<path d="m2 4 3 12h14l3-12-6 7-4-7-4 7-6-7z"/><path d="M5 20h14"/>"#),
    (
        "Diamond",
        r#"<path d="M2.7 10.3a2.41 2.41 0 0 0 0 3.41l7.59 7.59a2.41 2.41 0 0 0 3.41 0l7.59-7.59a2.41 2.41 0 0 0 0-3.41l-7.59-7.59a2.41 2.41 0 0 0-3.41 0Z"/>"#,
    ),
    (
        "Camera",
        r#"<path d="M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3l-2.5-3z"/><circle cx="12" cy="13" r="3"/>"#,
    ),
    (
        "Music",
        r#"<path d="M9 18V5l12-2v13"/><circle cx="6" cy="18" r="3"/><circle cx="18" cy="16" r="3"/>"#,
    ),
    (
        "Palette",
        r#"<circle cx="13.5" cy="6.5" r=".5" fill="currentColor"/><circle cx="17.5" cy="10.5" r=".5" fill="currentColor"/><circle cx="8.5" cy="7.5" r=".5" fill="currentColor"/><circle cx="6.5" cy="12.5" r=".5" fill="currentColor"/><path d="M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.93 0 1.65-.75 1.65-1.69 0-.44-.18-.84-.44-1.13-.29-.29-.44-.65-.44-1.13a1.64 1.64 0 0 1 1.67-1.67h2c3.05 0 5.55-2.5 5.55-5.55C21.97 6.01 17.46 2 12 2z"/>"#,
    ),
    (
        "BookOpen",
        r#"<path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"/><path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"/>"#,
    ),
    (
        "Briefcase",
        r#"<rect width="20" height="14" x="2" y="7" rx="2" ry="2"/><path d="M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"/>"#,
    ),
    (
        "Code",
        r#"<polyline points="16 18 22 12 16 6"/><polyline points="8 6 2 12 8 18"/>"#,
    ),
    (
        "Cpu",
        r#"<rect width="16" height="16" x="4" y="4" rx="2"/><rect width="6" height="6" x="9" y="9" rx="1"/><path d="M15 2v2"/><path d="M15 20v2"/><path d="M2 15h2"/><path d="M2 9h2"/><path d="M20 15h2"/><path d="M20 9h2"/><path d="M9 2v2"/><path d="M9 20v2"/>"#,
    ),
    (
        "Feather",
        r#"<path d="M20.24 12.24a6 6 0 0 0-8.49-8.49L5 10.5V19h8.5z"/><path d="M16 8 2 22"/><path d="M17.5 15H9"/>"#,
    ),
    (
        "Flame",
        r#"<path d="M8.5 14.5A2.5 2.5 0 0 0 11 12c0-1.38-.5-2-1-3-1.07-2.14-.22-4.05 2-6 .5 2.5 2 4.9 4 6.5 2 1.6 3 3.5 3 5.5a7 7 0 1 1-14 0c0-1.15.43-2.29 1-3a2.5 2.5 0 0 0 2.5 2.5z"/>"#,
    ),
    (
        "Gift",
        r#"<rect x="3" y="8" width="18" height="4" rx="1"/><path d="M12 8v13"/><path d="M19 12v7a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2v-7"/><path d="M7.5 8a2.5 2.5 0 0 1 0-5A4.8 8 0 0 1 12 8a4.8 8 0 0 1 4.5-5 2.5 2.5 0 0 1 0 5"/>"#,
    ),
    (
        "Globe",
        r#"<circle cx="12" cy="12" r="10"/><path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"/><path d="M2 12h20"/>"#,
    ),
    (
        "Headphones",
        r#"<path d="M3 14h3a2 2 0 0 1 2 2v3a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a9 9 0 0 1 18 0v7a2 2 0 0 1-2 2h-1a2 2 0 0 1-2-2v-3a2 2 0 0 1 2-2h3"/>"#,
    ),
    (
        "Key",
        r#"<circle cx="7.5" cy="15.5" r="5.5"/><path d="m21 2-9.6 9.6"/><path d="m15.5 7.5 3 3L22 7l-3-3"/>"#,
    ),
    (
        "Leaf",
        r#"<path d="M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z"/><path d="M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12"/>"#,
    ),
    (
        "MapPin",
        r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#,
    ),
    ("Moon", r#"<path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>"#),
    (
        "Sun",
        r#"<circle cx="12" cy="12" r="4"/><path d="M12 2v2"/><path d="M12 20v2"/><path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/><path d="M2 12h2"/><path d="M20 12h2"/><path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/>"#,
    ),
    (
        "Truck",
        r#"<path d="M14 18V6a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2v11a1 1 0 0 0 1 1h2"/><path d="M15 18H9"/><path d="M19 18h2a1 1 0 0 0 1-1v-3.65a1 1 0 0 0-.22-.62l-3.48-4.35A1 1 0 0 0 17.52 8H14"/><circle cx="17" cy="18" r="2"/><circle cx="7" cy="18" r="2"/>"#,
    ),
    (
        "Umbrella",
        r#"<path d="M22 12a10 10 0 0 0-20 0Z"/><path d="M12 12v8a2 2 0 0 0 4 0"/><path d="M12 2v1"/>"#,
    ),
    (
        "Watch",
        r#"<circle cx="12" cy="12" r="6"/><polyline points="12 10 12 12 13 13"/><path d="m16.13 7.66-.81-4.05a2 2 0 0 0-2-1.61h-2.68a2 2 0 0 0-2 1.61l-.78 4.05"/><path d="m7.88 16.36.8 4a2 2 0 0 0 2 1.61h2.72a2 2 0 0 0 2-1.61l.81-4.05"/>"#,
    ),
];

// ============================================================================
// Tests
// ============================================================================
