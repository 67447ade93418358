//! SVG document renderer.
//!
//! Builds a standalone 800x800 SVG document from a config, the shared
//! [`LayoutGeometry`] and pre-rendered glyph markup. The only external
//! reference in the output is the font family name, which falls back to a
//! generic `sans-serif` when the viewer lacks it.

use std::fmt::Write;

use crate::config::{LogoConfig, Paint, Shape};
use crate::geometry::CANVAS_SIZE;
use crate::glyph::{GlyphRegistry, GlyphStyle};
use crate::layout::{LayoutGeometry, TextPlacement};

const CLIP_ID: &str = "logo-clip";

/// Renders the logo as an SVG document string.
///
/// `glyph_markup` is a complete `<svg>` element already sized to the icon box
/// (see [`Glyph::render`](crate::Glyph::render)); it is translated to the
/// icon origin. It is ignored when the layout omits the icon.
pub fn render_vector(config: &LogoConfig, geometry: &LayoutGeometry, glyph_markup: &str) -> String {
    let mut content = String::new();

    if !config.bg_color.is_transparent() {
        let _ = write!(
            content,
            r#"<rect width="{size}" height="{size}" fill="{fill}"/>"#,
            size = num(CANVAS_SIZE),
            fill = config.bg_color.to_svg(),
        );
    }

    if let Some(icon) = geometry.icon {
        let _ = write!(
            content,
            r#"<g transform="translate({x} {y})">{glyph_markup}</g>"#,
            x = num(icon.x),
            y = num(icon.y),
        );
    }

    if let Some(text) = &geometry.text {
        content.push_str(&text_element(&config.font_family, config.text_color, text));
    }

    let body = match geometry.shape {
        Shape::Square => content,
        Shape::Circle => {
            let r = num(CANVAS_SIZE / 2.0);
            format!(
                r#"<defs><clipPath id="{CLIP_ID}"><circle cx="{r}" cy="{r}" r="{r}"/></clipPath></defs><g clip-path="url(#{CLIP_ID})">{content}</g>"#
            )
        }
    };

    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">{body}</svg>"#,
        size = num(CANVAS_SIZE),
    )
}

/// Resolves the configured icon in `registry` and renders the full document.
///
/// Unknown icon ids use the registry's fallback glyph.
pub fn render_logo_svg(
    config: &LogoConfig,
    geometry: &LayoutGeometry,
    registry: &dyn GlyphRegistry,
) -> String {
    let glyph_markup = match geometry.icon {
        Some(icon) => registry
            .resolve(&config.icon)
            .render(&GlyphStyle::new(icon.width, config.icon_color)),
        None => String::new(),
    };
    render_vector(config, geometry, &glyph_markup)
}

/// The `<text>` element for a label placement.
///
/// Shared with the raster scene so both outputs lay text out identically.
pub(crate) fn text_element(font_family: &str, color: Paint, text: &TextPlacement) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<text font-family="{family}" font-size="{size}" font-weight="bold" fill="{fill}" text-anchor="{anchor}">"#,
        family = escape(&font_stack(font_family)),
        size = num(text.font_size),
        fill = color.to_svg(),
        anchor = text.align.svg_anchor(),
    );
    for line in &text.lines {
        let _ = write!(
            out,
            r#"<tspan x="{x}" y="{y}">{content}</tspan>"#,
            x = num(line.x),
            y = num(line.baseline),
            content = escape(&line.text),
        );
    }
    out.push_str("</text>");
    out
}

/// The CSS font stack for a family: the family itself, then `sans-serif`.
pub(crate) fn font_stack(family: &str) -> String {
    let family = family.trim();
    if family.is_empty() {
        "sans-serif".to_string()
    } else {
        format!("'{}', sans-serif", family.replace('\'', ""))
    }
}

/// Formats a coordinate with at most two decimals.
pub(crate) fn num(value: f32) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

/// Escapes text for use in XML content and attribute values.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutMode;
    use crate::glyph::GlyphSet;
    use crate::layout::compute_layout;

    fn ace() -> LogoConfig {
        LogoConfig::new("Ace")
            .with_layout(LayoutMode::IconLeft)
            .with_icon("Star")
            .with_colors(
                Paint::rgb(0x0f, 0x17, 0x2a),
                Paint::WHITE,
                Paint::rgb(0x3b, 0x82, 0xf6),
            )
            .with_sizes(200.0, 100.0)
    }

    fn render(config: &LogoConfig, shape: Shape) -> String {
        let geometry = compute_layout(config, shape);
        render_logo_svg(config, &geometry, &GlyphSet::builtin())
    }

    #[test]
    fn document_root_is_standalone() {
        let svg = render(&ace(), Shape::Square);

        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="800" height="800" viewBox="0 0 800 800">"#));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r##"<rect width="800" height="800" fill="#0f172a"/>"##));
    }

    #[test]
    fn icon_and_text_follow_layout() {
        let svg = render(&ace(), Shape::Square);

        assert!(svg.contains(r#"<g transform="translate(60 300)">"#));
        assert!(svg.contains(r#"width="200" height="200""#));
        assert!(svg.contains(r#"text-anchor="start""#));
        assert!(svg.contains(r#"font-weight="bold""#));
        assert!(svg.contains(r#"font-size="100""#));
        assert!(svg.contains(r##"fill="#ffffff""##));
        assert!(svg.contains(r#"<tspan x="284" y="435">Ace</tspan>"#));
    }

    #[test]
    fn transparent_background_omits_rect() {
        let mut config = ace();
        config.bg_color = Paint::Transparent;
        let svg = render(&config, Shape::Square);
        assert!(!svg.contains("<rect"));
    }

    #[test]
    fn circle_wraps_content_in_clip() {
        let svg = render(&ace(), Shape::Circle);
        assert!(svg.contains(r#"<clipPath id="logo-clip"><circle cx="400" cy="400" r="400"/></clipPath>"#));
        assert!(svg.contains(r#"<g clip-path="url(#logo-clip)">"#));
    }

    #[test]
    fn modes_omit_elements() {
        let icon_only = render(&ace().with_layout(LayoutMode::IconOnly), Shape::Square);
        assert!(!icon_only.contains("<text"));
        assert!(icon_only.contains("<polygon"));

        let text_only = render(&ace().with_layout(LayoutMode::TextOnly), Shape::Square);
        assert!(!text_only.contains("<polygon"));
        assert!(text_only.contains(r#"text-anchor="middle""#));
    }

    #[test]
    fn unknown_icon_uses_fallback_glyph() {
        let svg = render(&ace().with_icon("NoSuchIcon"), Shape::Square);
        // ShoppingBag's handle arc
        assert!(svg.contains("M16 10a4 4 0 0 1-8 0"));
    }

    #[test]
    fn text_is_escaped() {
        let mut config = ace().with_font_family("Tom's Font");
        config.name = "A&B <Co>".into();
        let svg = render(&config, Shape::Square);

        // Eight characters wrap onto two lines in the 456 unit text box.
        assert!(svg.contains(">A&amp;B</tspan>"));
        assert!(svg.contains(">&lt;Co&gt;</tspan>"));
        assert!(svg.contains(r#"font-family="&apos;Toms Font&apos;, sans-serif""#));
    }

    #[test]
    fn output_parses_as_svg() {
        let opts = resvg::usvg::Options::default();
        for layout in LayoutMode::ALL {
            for shape in [Shape::Square, Shape::Circle] {
                let svg = render(&ace().with_layout(layout), shape);
                let tree = resvg::usvg::Tree::from_str(&svg, &opts).expect("valid svg");
                assert_eq!(tree.size().width(), 800.0);
            }
        }
    }

    #[test]
    fn num_trims_decimals() {
        assert_eq!(num(284.0), "284");
        assert_eq!(num(435.00003), "435");
        assert_eq!(num(12.346), "12.35");
        assert_eq!(num(-0.001), "0");
    }
}
