//! Layout engine: places the icon and the text block on the logo canvas.
//!
//! [`compute_layout`] is the only place where logo geometry is computed. The
//! vector renderer and the raster scene both consume its output, so the two
//! representations cannot drift apart.
//!
//! All modes work on an 800x800 canvas with a 60 unit padding. Sizes are
//! never scaled to fit: an oversized icon or label overflows its box and the
//! renderers do not clip it (the circular export mask is applied later and is
//! unrelated to layout).

use crate::config::{LayoutMode, LogoConfig, Shape};
use crate::geometry::{CANVAS_SIZE, Rect};

/// Outer padding on every side of the canvas.
pub const PADDING: f32 = 60.0;

/// Gap between icon and text in the `icon-left` row.
pub const ROW_GAP: f32 = 24.0;

/// Gap between icon and text in the `icon-top` column.
pub const COLUMN_GAP: f32 = 40.0;

/// Line height as a multiple of the font size.
pub const LINE_HEIGHT_EM: f32 = 1.1;

/// Average advance of a bold glyph as a multiple of the font size.
///
/// Used to decide where lines break. Real fonts vary around this value.
pub const ADVANCE_EM: f32 = 0.6;

/// Offset from the middle of a line box down to the alphabetic baseline.
const BASELINE_SHIFT_EM: f32 = 0.35;

const INNER_SIZE: f32 = CANVAS_SIZE - 2.0 * PADDING;
const CENTER: f32 = CANVAS_SIZE / 2.0;

// ============================================================================
// Geometry types
// ============================================================================

/// Horizontal alignment of the text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// Lines start at the left edge of their box.
    Start,
    /// Lines are centered in their box.
    Center,
}

impl TextAlign {
    /// The matching SVG `text-anchor` value.
    pub fn svg_anchor(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "middle",
        }
    }
}

/// A single wrapped line of the label.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    /// Line content, without the break whitespace.
    pub text: String,
    /// Anchor x: the left edge for [`TextAlign::Start`], the center otherwise.
    pub x: f32,
    /// Alphabetic baseline.
    pub baseline: f32,
}

/// Where and how the label is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPlacement {
    /// The box the label flows in.
    pub bounds: Rect,
    pub align: TextAlign,
    /// Clamped font size.
    pub font_size: f32,
    /// Lines after wrapping to `bounds.width`. Never empty.
    pub lines: Vec<TextLine>,
}

impl TextPlacement {
    /// Distance between consecutive baselines.
    pub fn line_height(&self) -> f32 {
        self.font_size * LINE_HEIGHT_EM
    }
}

/// Computed placement of every logo element for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutGeometry {
    /// The full canvas, always `0,0 800x800`.
    pub canvas: Rect,
    pub shape: Shape,
    /// Icon box, `None` when the icon is omitted.
    pub icon: Option<Rect>,
    /// Label placement, `None` when the text is omitted.
    pub text: Option<TextPlacement>,
}

impl LayoutGeometry {
    /// Alignment of the label, `None` when the layout has no text.
    pub fn text_align(&self) -> Option<TextAlign> {
        self.text.as_ref().map(|t| t.align)
    }
}

// ============================================================================
// Layout
// ============================================================================

/// Computes the geometry for `config` on the logo canvas.
///
/// Pure and infallible. Sizes outside their allowed ranges are clamped.
///
/// # Example
///
/// ```
/// use logo_forge::{LayoutMode, LogoConfig, Rect, Shape, TextAlign, compute_layout};
///
/// let config = LogoConfig::new("Ace").with_layout(LayoutMode::IconLeft);
/// let geometry = compute_layout(&config, Shape::Square);
///
/// assert_eq!(geometry.icon, Some(Rect::new(60.0, 300.0, 200.0, 200.0)));
/// assert_eq!(geometry.text_align(), Some(TextAlign::Start));
/// ```
pub fn compute_layout(config: &LogoConfig, shape: Shape) -> LayoutGeometry {
    let config = config.clamped();
    let icon_size = config.icon_size;
    let font_size = config.font_size;
    let line_height = font_size * LINE_HEIGHT_EM;
    let label = config.display_name();

    let (icon, text) = match config.layout {
        LayoutMode::IconTop => {
            let lines = wrap_text(label, INNER_SIZE, font_size);
            let block_height = lines.len() as f32 * line_height;
            let group_height = icon_size + COLUMN_GAP + block_height;
            let top = (PADDING + (INNER_SIZE - group_height) / 2.0).max(PADDING);

            let icon = Rect::new(CENTER - icon_size / 2.0, top, icon_size, icon_size);
            let text_top = icon.bottom() + COLUMN_GAP;
            let bounds = Rect::new(
                PADDING,
                text_top,
                INNER_SIZE,
                (CANVAS_SIZE - PADDING - text_top).max(0.0),
            );
            let text = place_lines(lines, bounds, TextAlign::Center, font_size, text_top);
            (Some(icon), Some(text))
        }
        LayoutMode::IconLeft => {
            let icon = Rect::new(PADDING, CENTER - icon_size / 2.0, icon_size, icon_size);
            let text_left = icon.right() + ROW_GAP;
            let bounds = Rect::new(
                text_left,
                PADDING,
                (CANVAS_SIZE - PADDING - text_left).max(0.0),
                INNER_SIZE,
            );
            let lines = wrap_text(label, bounds.width, font_size);
            let block_top = CENTER - lines.len() as f32 * line_height / 2.0;
            let text = place_lines(lines, bounds, TextAlign::Start, font_size, block_top);
            (Some(icon), Some(text))
        }
        LayoutMode::TextOnly => {
            let bounds = Rect::new(PADDING, PADDING, INNER_SIZE, INNER_SIZE);
            let lines = wrap_text(label, bounds.width, font_size);
            let block_top = CENTER - lines.len() as f32 * line_height / 2.0;
            let text = place_lines(lines, bounds, TextAlign::Center, font_size, block_top);
            (None, Some(text))
        }
        LayoutMode::IconOnly => (Some(Rect::centered_square(CENTER, CENTER, icon_size)), None),
    };

    LayoutGeometry {
        canvas: Rect::new(0.0, 0.0, CANVAS_SIZE, CANVAS_SIZE),
        shape,
        icon,
        text,
    }
}

fn place_lines(
    lines: Vec<String>,
    bounds: Rect,
    align: TextAlign,
    font_size: f32,
    block_top: f32,
) -> TextPlacement {
    let mut placement = TextPlacement {
        bounds,
        align,
        font_size,
        lines: Vec::with_capacity(lines.len()),
    };
    let line_height = placement.line_height();
    let x = match align {
        TextAlign::Start => bounds.x,
        TextAlign::Center => bounds.center_x(),
    };

    placement.lines.extend(lines.into_iter().enumerate().map(|(i, text)| TextLine {
        text,
        x,
        baseline: block_top + i as f32 * line_height + line_height / 2.0 + font_size * BASELINE_SHIFT_EM,
    }));
    placement
}

/// Estimated rendered width of `text` at `font_size`.
///
/// Every character advances by [`ADVANCE_EM`] of the font size.
pub fn estimate_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * ADVANCE_EM
}

/// Slack allowed when a line exactly fills the box.
const FIT_TOLERANCE: f32 = 0.01;

/// Wraps `text` into lines whose [`estimate_width`] fits `max_width`.
///
/// Breaks at whitespace; a word longer than a whole line is split between
/// characters. Explicit newlines start a new line. A line always keeps at
/// least one character, so the result is never empty for non-blank input.
pub fn wrap_text(text: &str, max_width: f32, font_size: f32) -> Vec<String> {
    let fits = |line: &str| estimate_width(line, font_size) <= max_width + FIT_TOLERANCE;
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if fits(&candidate) {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if fits(word) {
                current = word.to_string();
                continue;
            }

            for c in word.chars() {
                current.push(c);
                if current.chars().count() > 1 && !fits(&current) {
                    current.pop();
                    lines.push(std::mem::replace(&mut current, c.to_string()));
                }
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FONT_SIZE_RANGE, ICON_SIZE_RANGE};

    fn config(layout: LayoutMode, icon_size: f32, font_size: f32) -> LogoConfig {
        LogoConfig::new("Ace")
            .with_layout(layout)
            .with_sizes(icon_size, font_size)
    }

    #[test]
    fn boxes_never_negative_or_off_canvas() {
        let names = ["Ace", "A considerably longer shop name", "", "Supercalifragilistic"];
        let icon_sizes = [*ICON_SIZE_RANGE.start(), 200.0, 375.0, *ICON_SIZE_RANGE.end()];
        let font_sizes = [*FONT_SIZE_RANGE.start(), 100.0, 180.0, *FONT_SIZE_RANGE.end()];

        for layout in LayoutMode::ALL {
            for name in names {
                for icon_size in icon_sizes {
                    for font_size in font_sizes {
                        let mut cfg = config(layout, icon_size, font_size);
                        cfg.name = name.to_string();
                        let geometry = compute_layout(&cfg, Shape::Square);

                        let mut boxes = Vec::new();
                        boxes.extend(geometry.icon);
                        boxes.extend(geometry.text.as_ref().map(|t| t.bounds));
                        for rect in boxes {
                            assert!(rect.width >= 0.0 && rect.height >= 0.0, "{layout:?} {rect:?}");
                            assert!(
                                (0.0..=CANVAS_SIZE).contains(&rect.x)
                                    && (0.0..=CANVAS_SIZE).contains(&rect.y),
                                "{layout:?} icon={icon_size} font={font_size} {rect:?}"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn element_presence_per_mode() {
        let top = compute_layout(&config(LayoutMode::IconTop, 200.0, 100.0), Shape::Square);
        assert!(top.icon.is_some() && top.text.is_some());

        let left = compute_layout(&config(LayoutMode::IconLeft, 200.0, 100.0), Shape::Square);
        assert!(left.icon.is_some() && left.text.is_some());

        let text_only = compute_layout(&config(LayoutMode::TextOnly, 200.0, 100.0), Shape::Square);
        assert!(text_only.icon.is_none());
        assert!(text_only.text.is_some());

        let icon_only = compute_layout(&config(LayoutMode::IconOnly, 200.0, 100.0), Shape::Square);
        assert!(icon_only.icon.is_some());
        assert!(icon_only.text.is_none());
    }

    #[test]
    fn icon_left_row() {
        let geometry = compute_layout(&config(LayoutMode::IconLeft, 200.0, 100.0), Shape::Square);
        let icon = geometry.icon.unwrap();
        let text = geometry.text.unwrap();

        assert_eq!(icon, Rect::new(60.0, 300.0, 200.0, 200.0));
        assert_eq!(text.bounds.x, 284.0);
        assert_eq!(text.bounds.right(), 740.0);
        assert_eq!(text.align, TextAlign::Start);
        assert_eq!(text.lines.len(), 1);
        assert_eq!(text.lines[0].x, 284.0);
        // Single line is vertically centered on the canvas.
        assert!((text.lines[0].baseline - (400.0 + 35.0)).abs() < 0.01);
    }

    #[test]
    fn icon_top_column_is_centered() {
        let geometry = compute_layout(&config(LayoutMode::IconTop, 200.0, 100.0), Shape::Square);
        let icon = geometry.icon.unwrap();
        let text = geometry.text.unwrap();

        // group = 200 + 40 + 110 = 350, top = 60 + (680 - 350) / 2 = 225
        assert_eq!(icon.x, 300.0);
        assert!((icon.y - 225.0).abs() < 0.01);
        assert!((text.bounds.y - 465.0).abs() < 0.01);
        assert!((text.bounds.bottom() - 740.0).abs() < 0.01);
        assert_eq!(text.align, TextAlign::Center);
        assert_eq!(text.lines[0].x, 400.0);
    }

    #[test]
    fn icon_top_overflow_pins_to_top_padding() {
        let geometry = compute_layout(&config(LayoutMode::IconTop, 600.0, 250.0), Shape::Square);
        let icon = geometry.icon.unwrap();
        let text = geometry.text.unwrap();

        assert_eq!(icon.y, PADDING);
        assert_eq!(text.bounds.y, 700.0);
        assert_eq!(text.bounds.height, 40.0);
    }

    #[test]
    fn icon_only_is_canvas_centered() {
        let geometry = compute_layout(&config(LayoutMode::IconOnly, 320.0, 100.0), Shape::Circle);
        assert_eq!(geometry.icon, Some(Rect::new(240.0, 240.0, 320.0, 320.0)));
        assert_eq!(geometry.shape, Shape::Circle);
    }

    #[test]
    fn out_of_range_sizes_are_clamped() {
        let geometry = compute_layout(&config(LayoutMode::IconOnly, 5_000.0, 1.0), Shape::Square);
        assert_eq!(geometry.icon.unwrap().width, 600.0);

        let geometry = compute_layout(&config(LayoutMode::TextOnly, 0.0, 9_999.0), Shape::Square);
        assert_eq!(geometry.text.unwrap().font_size, 250.0);
    }

    #[test]
    fn layout_is_deterministic() {
        let cfg = config(LayoutMode::IconTop, 240.0, 90.0);
        assert_eq!(compute_layout(&cfg, Shape::Square), compute_layout(&cfg, Shape::Square));
    }

    #[test]
    fn wrap_breaks_on_words() {
        // 100px font -> 60px advance -> 5 chars per 300px line
        let lines = wrap_text("ab cd efghi", 300.0, 100.0);
        assert_eq!(lines, vec!["ab cd", "efghi"]);
    }

    #[test]
    fn wrap_splits_long_words() {
        let lines = wrap_text("abcdefghijkl", 300.0, 100.0);
        assert_eq!(lines, vec!["abcde", "fghij", "kl"]);
    }

    #[test]
    fn wrapped_lines_fit_estimated_width() {
        let lines = wrap_text("A considerably longer shop name", 456.0, 100.0);
        assert_eq!(lines, vec!["A", "conside", "rably", "longer", "shop", "name"]);
        for line in &lines {
            assert!(estimate_width(line, 100.0) <= 456.0);
        }
    }

    #[test]
    fn wrap_handles_zero_width() {
        let lines = wrap_text("abc", 0.0, 100.0);
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn blank_name_uses_placeholder() {
        let mut cfg = config(LayoutMode::TextOnly, 200.0, 100.0);
        cfg.name = "   ".into();
        let geometry = compute_layout(&cfg, Shape::Square);
        assert_eq!(geometry.text.unwrap().lines[0].text, "My Shop");
    }
}
