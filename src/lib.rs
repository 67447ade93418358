//! logo-forge: logo composition and export engine
//!
//! A logo is a short label plus an optional icon on an 800x800 canvas. This
//! crate lays the two out, renders the result as a standalone SVG document,
//! snapshots it as a 1600x1600 PNG, and packages four color variants of both
//! into one ZIP archive.
//!
//! # Example
//!
//! ```
//! use logo_forge::{GlyphSet, LayoutMode, LogoConfig, Shape, compute_layout, render_logo_svg};
//!
//! let config = LogoConfig::new("Ace")
//!     .with_layout(LayoutMode::IconLeft)
//!     .with_icon("Star");
//!
//! // One geometry feeds both the SVG and the raster path
//! let geometry = compute_layout(&config, Shape::Square);
//! let svg = render_logo_svg(&config, &geometry, &GlyphSet::builtin());
//! assert!(svg.contains("Ace"));
//! ```
//!
//! # Exporting
//!
//! [`Exporter`] renders every [`Variant`] from a mounted [`LivePreview`]:
//!
//! ```no_run
//! use logo_forge::{Exporter, LivePreview, LogoConfig, Shape};
//!
//! # async fn run() -> Result<(), logo_forge::ExportError> {
//! let exporter = Exporter::new();
//! let config = LogoConfig::new("Ace");
//!
//! let mut preview = LivePreview::new();
//! preview.mount(&config, Shape::Circle, exporter.registry());
//!
//! let archive = exporter.export(&config, &preview, Shape::Circle).await?;
//! archive.write_to_dir(".")?; // Ace_Logos.zip
//! # Ok(())
//! # }
//! ```

pub mod catalog;
mod config;
mod error;
mod export;
mod geometry;
mod glyph;
mod layout;
pub mod raster;
mod scene;
mod variant;
mod vector;

pub use catalog::{ColorPalette, FONTS, ICONS, PALETTES, suggest};
pub use config::{
    DEFAULT_ICON, DEFAULT_NAME, FONT_SIZE_RANGE, ICON_SIZE_RANGE, LayoutMode, LogoConfig, Paint,
    Shape,
};
pub use error::{CaptureError, CaptureResult, ConfigError, ExportError, ExportResult};
pub use export::{BundleEntry, ExportArchive, ExportBundle, Exporter, archive_name};
pub use geometry::{CANVAS_SIZE, Rect};
pub use glyph::{DEFAULT_STROKE_WIDTH, GLYPH_VIEWBOX, Glyph, GlyphRegistry, GlyphSet, GlyphStyle};
pub use layout::{
    ADVANCE_EM, COLUMN_GAP, LINE_HEIGHT_EM, LayoutGeometry, PADDING, ROW_GAP, TextAlign, TextLine,
    TextPlacement, compute_layout, estimate_width, wrap_text,
};
pub use raster::{LivePreview, RasterPipeline};
pub use scene::{IconNode, Scene, TextNode};
pub use variant::{ColorOverrides, VARIANTS, Variant};
pub use vector::{render_logo_svg, render_vector};
