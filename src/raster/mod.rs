//! Raster capture pipeline.
//!
//! - [`preview`]: the mounted on-screen logo.
//! - [`capture`]: isolated off-screen snapshots of that preview.
//! - [`svg`]: resvg/tiny-skia helpers shared by both.

pub mod capture;
pub mod preview;
pub mod svg;

pub use capture::{CAPTURE_SCALE, OffscreenScene, OffscreenSurface, RasterPipeline, next_frame};
pub use preview::{DISPLAY_SCALE, LivePreview};
pub use svg::{circle_crop, encode_png, pixmap_to_rgba_image};
