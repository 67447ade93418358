//! Variant export and ZIP packaging.
//!
//! [`Exporter::export`] walks the variants in order, renders each one as SVG,
//! captures it as PNG when the preview allows, and packs everything into a
//! single archive named after the logo.

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use tempfile::NamedTempFile;
use tracing::{debug, error, info, warn};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::config::{LogoConfig, Shape};
use crate::error::{CaptureResult, ExportError, ExportResult};
use crate::glyph::{GlyphRegistry, GlyphSet};
use crate::layout::compute_layout;
use crate::raster::{LivePreview, RasterPipeline, encode_png};
use crate::scene::Scene;
use crate::variant::{VARIANTS, Variant};
use crate::vector::render_logo_svg;

// ============================================================================
// Bundle
// ============================================================================

/// One named file of an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleEntry {
    /// Name inside the archive.
    pub file_name: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

/// Ordered files produced by an export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportBundle {
    entries: Vec<BundleEntry>,
}

impl ExportBundle {
    /// An empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a file after the existing entries.
    pub fn push(&mut self, file_name: impl Into<String>, bytes: Vec<u8>) {
        let file_name = file_name.into();
        debug!(file = %file_name, len = bytes.len(), "added bundle entry");
        self.entries.push(BundleEntry { file_name, bytes });
    }

    /// All entries, in insertion order.
    pub fn entries(&self) -> &[BundleEntry] {
        &self.entries
    }

    /// Entry names, in insertion order.
    pub fn file_names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.file_name.as_str()).collect()
    }

    /// Looks up an entry by name.
    pub fn get(&self, file_name: &str) -> Option<&BundleEntry> {
        self.entries.iter().find(|e| e.file_name == file_name)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the bundle has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes the entries, in order, as a deflated ZIP archive.
    pub fn to_zip(&self) -> ExportResult<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for entry in &self.entries {
            zip.start_file(entry.file_name.as_str(), options)?;
            zip.write_all(&entry.bytes)?;
        }

        Ok(zip.finish()?.into_inner())
    }
}

/// A finished archive, ready to be handed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArchive {
    /// `{prefix}_Logos.zip`
    pub file_name: String,
    /// Serialized ZIP data.
    pub bytes: Vec<u8>,
    /// Names of the archived files, in archive order.
    pub entries: Vec<String>,
}

impl ExportArchive {
    /// Writes the archive into `dir` under [`file_name`](Self::file_name).
    ///
    /// The bytes go to a temporary file in `dir` first, which is then renamed
    /// into place.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> ExportResult<PathBuf> {
        let dir = dir.as_ref();
        let path = dir.join(&self.file_name);

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&self.bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|e| e.error)?;

        info!(path = %path.display(), bytes = self.bytes.len(), "wrote archive");
        Ok(path)
    }
}

/// `{prefix}_Logos.zip`
pub fn archive_name(config: &LogoConfig) -> String {
    format!("{}_Logos.zip", config.file_prefix())
}

// ============================================================================
// Exporter
// ============================================================================

/// Single-flight export driver.
pub struct Exporter {
    registry: Box<dyn GlyphRegistry>,
    pipeline: RasterPipeline,
    busy: AtomicBool,
}

/// Holds the busy flag for the duration of one export.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> ExportResult<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ExportError::Busy)?;
        Ok(Self(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Exporter {
    /// An exporter with the built-in glyphs and a system-font raster pipeline.
    pub fn new() -> Self {
        Self::with_parts(GlyphSet::builtin(), RasterPipeline::new())
    }

    /// An exporter with a custom glyph registry and raster pipeline.
    pub fn with_parts(registry: impl GlyphRegistry + 'static, pipeline: RasterPipeline) -> Self {
        Self {
            registry: Box::new(registry),
            pipeline,
            busy: AtomicBool::new(false),
        }
    }

    /// The registry icons are resolved in. Mount previews with the same one.
    pub fn registry(&self) -> &dyn GlyphRegistry {
        self.registry.as_ref()
    }

    /// The raster pipeline PNGs are captured with.
    pub fn pipeline(&self) -> &RasterPipeline {
        &self.pipeline
    }

    /// Whether an export is running.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Renders every variant, in order, into a bundle.
    ///
    /// Each variant's SVG and PNG come from one derived config and one
    /// layout, so both files show the same logo. The PNG follows its SVG when
    /// the capture succeeds; capture failures are logged and skipped.
    /// `preview` must be mounted for PNGs to be captured.
    pub async fn build_export_bundle(
        &self,
        config: &LogoConfig,
        preview: &LivePreview,
        shape: Shape,
    ) -> ExportBundle {
        let prefix = config.file_prefix();
        let mut bundle = ExportBundle::new();

        for variant in &VARIANTS {
            let derived = variant.derive(config);
            let geometry = compute_layout(&derived, shape);
            let svg = render_logo_svg(&derived, &geometry, self.registry.as_ref());
            bundle.push(variant.file_name(&prefix, shape, "svg"), svg.into_bytes());

            let scene = Scene::build(&derived, &geometry, self.registry.as_ref());
            match self.capture_png(variant, preview, scene, shape).await {
                Ok(png) => bundle.push(variant.file_name(&prefix, shape, "png"), png),
                Err(err) => warn!(variant = variant.name, error = %err, "skipping png"),
            }
        }

        bundle
    }

    async fn capture_png(
        &self,
        variant: &Variant,
        preview: &LivePreview,
        scene: Scene,
        shape: Shape,
    ) -> CaptureResult<Vec<u8>> {
        let pixmap = self
            .pipeline
            .capture_scene(preview, scene, variant.transparent_background, shape)
            .await?;
        encode_png(&pixmap)
    }

    /// Builds the bundle and packs it into `{prefix}_Logos.zip`.
    ///
    /// Fails with [`ExportError::Busy`] while another export is running.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use logo_forge::{Exporter, LivePreview, LogoConfig, Shape};
    ///
    /// # async fn run() -> Result<(), logo_forge::ExportError> {
    /// let exporter = Exporter::new();
    /// let config = LogoConfig::new("Ace");
    ///
    /// let mut preview = LivePreview::new();
    /// preview.mount(&config, Shape::Square, exporter.registry());
    ///
    /// let archive = exporter.export(&config, &preview, Shape::Square).await?;
    /// assert_eq!(archive.file_name, "Ace_Logos.zip");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn export(
        &self,
        config: &LogoConfig,
        preview: &LivePreview,
        shape: Shape,
    ) -> ExportResult<ExportArchive> {
        let _busy = BusyGuard::acquire(&self.busy)?;

        let bundle = self.build_export_bundle(config, preview, shape).await;
        let file_name = archive_name(config);
        let bytes = bundle.to_zip().inspect_err(|err| {
            error!(archive = %file_name, error = %err, "export failed");
        })?;

        info!(
            archive = %file_name,
            files = bundle.len(),
            bytes = bytes.len(),
            "export complete"
        );

        Ok(ExportArchive {
            file_name,
            bytes,
            entries: bundle.file_names().into_iter().map(str::to_owned).collect(),
        })
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
