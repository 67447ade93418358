//! Element tree for the raster path.
//!
//! A [`Scene`] is the materialized form of a [`LayoutGeometry`]: a background,
//! an optional icon node and an optional text node, each carrying the colors
//! it is painted with. The live preview owns one; captures work on clones.

use crate::config::{LogoConfig, Paint, Shape};
use crate::geometry::{CANVAS_SIZE, Rect};
use crate::glyph::{Glyph, GlyphRegistry, GlyphStyle};
use crate::layout::{LayoutGeometry, TextPlacement};
use crate::variant::ColorOverrides;
use crate::vector::{num, text_element};

/// The icon element.
#[derive(Debug, Clone, PartialEq)]
pub struct IconNode {
    /// Icon box in canvas units.
    pub bounds: Rect,
    /// Resolved glyph, the registry fallback for unknown ids.
    pub glyph: Glyph,
    /// Size matches `bounds`; color is the icon color.
    pub style: GlyphStyle,
}

impl IconNode {
    /// The glyph as a standalone `<svg>` sized to [`bounds`](Self::bounds).
    pub fn markup(&self) -> String {
        self.glyph.render(&self.style)
    }
}

/// The label element.
#[derive(Debug, Clone, PartialEq)]
pub struct TextNode {
    /// Wrapped lines and their positions.
    pub placement: TextPlacement,
    /// CSS font family, quoted into the `<text>` element.
    pub font_family: String,
    /// Fill color of the label.
    pub color: Paint,
}

impl TextNode {
    /// A canvas-sized `<svg>` holding only the label.
    pub fn markup(&self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">{text}</svg>"#,
            size = num(CANVAS_SIZE),
            text = text_element(&self.font_family, self.color, &self.placement),
        )
    }
}

/// A logo as a tree of paintable nodes at canonical canvas size.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Outline the canvas is cropped to.
    pub shape: Shape,
    /// Canvas fill; [`Paint::Transparent`] leaves the canvas clear.
    pub background: Paint,
    /// `None` when the layout omits the icon.
    pub icon: Option<IconNode>,
    /// `None` when the layout omits the label.
    pub text: Option<TextNode>,
}

impl Scene {
    /// Materializes `geometry` with the colors and font of `config`.
    pub fn build(config: &LogoConfig, geometry: &LayoutGeometry, registry: &dyn GlyphRegistry) -> Self {
        let icon = geometry.icon.map(|bounds| IconNode {
            bounds,
            glyph: registry.resolve(&config.icon).clone(),
            style: GlyphStyle::new(bounds.width, config.icon_color),
        });

        let text = geometry.text.as_ref().map(|placement| TextNode {
            placement: placement.clone(),
            font_family: config.font_family.clone(),
            color: config.text_color,
        });

        Self {
            shape: geometry.shape,
            background: config.bg_color,
            icon,
            text,
        }
    }

    /// Canvas edge length in scene units.
    pub fn size(&self) -> f32 {
        CANVAS_SIZE
    }

    /// Recolors the nodes in place. Fields without an override are untouched.
    pub fn apply_overrides(&mut self, overrides: &ColorOverrides) {
        if let Some(bg) = overrides.bg_color {
            self.background = bg;
        }
        if let (Some(icon), Some(color)) = (self.icon.as_mut(), overrides.icon_color) {
            icon.style.color = color;
        }
        if let (Some(text), Some(color)) = (self.text.as_mut(), overrides.text_color) {
            text.color = color;
        }
    }

    /// A recolored copy; `self` is left as is.
    pub fn with_overrides(&self, overrides: &ColorOverrides) -> Self {
        let mut copy = self.clone();
        copy.apply_overrides(overrides);
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutMode;
    use crate::glyph::GlyphSet;
    use crate::layout::compute_layout;
    use crate::variant::VARIANTS;
    use crate::vector::render_logo_svg;

    /// The `<text>...</text>` element of an SVG string.
    fn text_of(markup: &str) -> Option<&str> {
        let start = markup.find("<text")?;
        let end = markup[start..].find("</text>")? + start + "</text>".len();
        Some(&markup[start..end])
    }

    fn scene_for(config: &LogoConfig) -> Scene {
        let geometry = compute_layout(config, Shape::Square);
        Scene::build(config, &geometry, &GlyphSet::builtin())
    }

    #[test]
    fn build_mirrors_geometry() {
        let config = LogoConfig::new("Ace").with_layout(LayoutMode::IconLeft).with_icon("Star");
        let geometry = compute_layout(&config, Shape::Square);
        let scene = Scene::build(&config, &geometry, &GlyphSet::builtin());

        let icon = scene.icon.as_ref().unwrap();
        assert_eq!(Some(icon.bounds), geometry.icon);
        assert_eq!(icon.glyph.name(), "Star");
        assert_eq!(icon.style.size, 200.0);
        assert_eq!(icon.style.color, config.icon_color);

        let text = scene.text.as_ref().unwrap();
        assert_eq!(Some(&text.placement), geometry.text.as_ref());
        assert_eq!(text.font_family, "Inter");
        assert_eq!(scene.background, config.bg_color);
    }

    #[test]
    fn modes_drop_nodes() {
        let base = LogoConfig::new("Ace");
        assert!(scene_for(&base.clone().with_layout(LayoutMode::IconOnly)).text.is_none());
        assert!(scene_for(&base.with_layout(LayoutMode::TextOnly)).icon.is_none());
    }

    #[test]
    fn unknown_icon_resolves_to_fallback() {
        let scene = scene_for(&LogoConfig::new("Ace").with_icon("NoSuchIcon"));
        assert_eq!(scene.icon.unwrap().glyph.name(), "ShoppingBag");
    }

    #[test]
    fn overrides_leave_original_untouched() {
        let scene = scene_for(&LogoConfig::new("Ace"));
        let black = scene.with_overrides(&VARIANTS[2].overrides);

        assert!(black.background.is_transparent());
        assert_eq!(black.icon.as_ref().unwrap().style.color, Paint::BLACK);
        assert_eq!(black.text.as_ref().unwrap().color, Paint::BLACK);

        assert!(!scene.background.is_transparent());
        assert_ne!(scene.text.as_ref().unwrap().color, Paint::BLACK);
    }

    #[test]
    fn text_matches_vector_document() {
        let registry = GlyphSet::builtin();
        let base = LogoConfig::new("A considerably longer shop name").with_font_family("Pacifico");

        for layout in LayoutMode::ALL {
            for variant in &VARIANTS {
                let config = variant.derive(&base.clone().with_layout(layout));
                let geometry = compute_layout(&config, Shape::Square);
                let svg = render_logo_svg(&config, &geometry, &registry);
                let scene = Scene::build(&config, &geometry, &registry);

                let Some(text) = scene.text else {
                    assert!(text_of(&svg).is_none(), "{layout:?}");
                    assert!(geometry.text_align().is_none());
                    continue;
                };
                let markup = text.markup();
                let raster = text_of(&markup).unwrap();
                assert_eq!(Some(raster), text_of(&svg), "{layout:?} {}", variant.name);

                let anchor = geometry.text_align().unwrap().svg_anchor();
                assert!(raster.contains(&format!(r#"text-anchor="{anchor}""#)));
            }
        }
    }

    #[test]
    fn text_markup_is_canvas_sized() {
        let scene = scene_for(&LogoConfig::new("Ace"));
        let markup = scene.text.unwrap().markup();
        assert!(markup.contains(r#"viewBox="0 0 800 800""#));
        assert!(markup.contains(">Ace</tspan>"));
    }
}
