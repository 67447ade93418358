//! Error types for configuration, raster capture and export.

use thiserror::Error;

/// Errors raised while reading or validating a [`LogoConfig`](crate::LogoConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A color value was neither `transparent` nor a hex color.
    #[error("invalid color value: {0:?}")]
    InvalidColor(String),

    /// The configuration JSON could not be parsed.
    #[error("invalid configuration json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that prevent a single raster capture from producing a bitmap.
///
/// These are recoverable: the exporter drops the PNG for the affected
/// variant and keeps going.
#[derive(Error, Debug)]
pub enum CaptureError {
    /// The live preview has no mounted scene to copy from.
    #[error("preview is not mounted")]
    NotMounted,

    /// The backing pixmap could not be allocated.
    #[error("failed to allocate {width}x{height} surface")]
    Surface { width: u32, height: u32 },

    /// An icon glyph or text node could not be parsed for rendering.
    #[error("failed to parse scene node: {0}")]
    Parse(#[from] resvg::usvg::Error),

    /// The snapshot could not be encoded as PNG.
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] image::ImageError),
}

/// Errors that abort a whole export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Another export is still running.
    #[error("an export is already in progress")]
    Busy,

    /// The archive could not be serialized.
    #[error("failed to write archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Writing the archive to disk failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for raster capture.
pub type CaptureResult<T> = Result<T, CaptureError>;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
