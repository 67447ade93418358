//! Pixmap helpers built on resvg/tiny-skia.
//!
//! Rendering of individual SVG fragments, circular cropping, and conversion
//! of premultiplied pixmaps into `image` buffers for PNG encoding.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use resvg::tiny_skia::{FillRule, Mask, PathBuilder, Pixmap, PixmapPaint, Transform};
use resvg::usvg::{Options, Tree};

use crate::error::{CaptureError, CaptureResult};

// ============================================================================
// SVG Rendering
// ============================================================================

/// Allocates a transparent pixmap, mapping allocation failure to [`CaptureError::Surface`].
pub fn new_pixmap(width: u32, height: u32) -> CaptureResult<Pixmap> {
    Pixmap::new(width, height).ok_or(CaptureError::Surface { width, height })
}

/// Parses `svg_data` and draws it onto `pixmap` with `transform`.
///
/// The fragment is drawn in its own user units; `transform` maps them onto
/// the pixmap.
pub fn render_svg_into(
    pixmap: &mut Pixmap,
    svg_data: &str,
    transform: Transform,
    options: &Options<'_>,
) -> CaptureResult<()> {
    let tree = Tree::from_str(svg_data, options)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Ok(())
}

// ============================================================================
// Masking
// ============================================================================

/// Returns a copy of `src` cropped to the circle inscribed in its bounds.
///
/// Everything outside the circle is fully transparent.
pub fn circle_crop(src: &Pixmap) -> CaptureResult<Pixmap> {
    let (width, height) = (src.width(), src.height());
    let surface_error = CaptureError::Surface { width, height };

    let radius = width.min(height) as f32 / 2.0;
    let circle = PathBuilder::from_circle(width as f32 / 2.0, height as f32 / 2.0, radius)
        .ok_or(CaptureError::Surface { width, height })?;

    let mut mask = Mask::new(width, height).ok_or(surface_error)?;
    mask.fill_path(&circle, FillRule::Winding, true, Transform::identity());

    let mut out = new_pixmap(width, height)?;
    out.draw_pixmap(
        0,
        0,
        src.as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        Some(&mask),
    );
    Ok(out)
}

// ============================================================================
// Conversion
// ============================================================================

/// Converts a tiny_skia Pixmap to an image::RgbaImage.
pub fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let width = pixmap.width();
    let mut img = RgbaImage::new(width, pixmap.height());

    for (i, pixel) in pixmap.pixels().iter().enumerate() {
        // tiny_skia uses premultiplied alpha, we need to unpremultiply
        let (r, g, b, a) = unpremultiply(pixel.red(), pixel.green(), pixel.blue(), pixel.alpha());
        let i = i as u32;
        img.put_pixel(i % width, i / width, Rgba([r, g, b, a]));
    }

    img
}

/// Encodes a pixmap as PNG bytes.
pub fn encode_png(pixmap: &Pixmap) -> CaptureResult<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    pixmap_to_rgba_image(pixmap).write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// Unpremultiplies a premultiplied alpha pixel.
fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, u8) {
    if a == 0 {
        (0, 0, 0, 0)
    } else {
        let a_f = a as f32 / 255.0;
        (
            (r as f32 / a_f).round().min(255.0) as u8,
            (g as f32 / a_f).round().min(255.0) as u8,
            (b as f32 / a_f).round().min(255.0) as u8,
            a,
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
