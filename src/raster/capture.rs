//! Off-screen capture of the live preview.
//!
//! A capture never touches the displayed scene. It attaches a separate
//! [`Scene`] (a recolored clone of the mounted one, or one the caller built)
//! to a shared [`OffscreenSurface`], waits one paint cycle and rasterizes it
//! at [`CAPTURE_SCALE`]. The scene is detached when its [`OffscreenScene`]
//! guard drops, on every exit path.

use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use resvg::tiny_skia::{Color, Pixmap, Transform};
use resvg::usvg::Options;
use tokio::sync::{Mutex, MutexGuard};
use tracing::debug;

use crate::config::Shape;
use crate::error::{CaptureError, CaptureResult};
use crate::raster::preview::LivePreview;
use crate::raster::svg::{circle_crop, new_pixmap, render_svg_into};
use crate::scene::Scene;
use crate::variant::ColorOverrides;

/// Pixel density of exported bitmaps relative to the canvas.
pub const CAPTURE_SCALE: f32 = 2.0;

// ============================================================================
// Off-screen surface
// ============================================================================

/// Host for isolated scene copies, invisible to the user.
///
/// Attachments are serialized: a second [`attach`](Self::attach) waits until
/// the first guard drops.
#[derive(Debug, Default)]
pub struct OffscreenSurface {
    lock: Mutex<()>,
    attached: AtomicUsize,
}

impl OffscreenSurface {
    /// A surface with nothing attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches `scene`, waiting for any current attachment to detach.
    pub async fn attach(&self, scene: Scene) -> OffscreenScene<'_> {
        let lock = self.lock.lock().await;
        let attached = self.attached.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(target: "logo_forge::raster", attached, "attached off-screen scene");
        OffscreenScene {
            scene,
            surface: self,
            _lock: lock,
        }
    }

    /// Number of scenes currently attached.
    pub fn attached(&self) -> usize {
        self.attached.load(Ordering::SeqCst)
    }
}

/// A scene attached to an [`OffscreenSurface`]. Detaches on drop.
pub struct OffscreenScene<'a> {
    scene: Scene,
    surface: &'a OffscreenSurface,
    _lock: MutexGuard<'a, ()>,
}

impl Deref for OffscreenScene<'_> {
    type Target = Scene;

    fn deref(&self) -> &Scene {
        &self.scene
    }
}

impl DerefMut for OffscreenScene<'_> {
    fn deref_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }
}

impl Drop for OffscreenScene<'_> {
    fn drop(&mut self) {
        let attached = self.surface.attached.fetch_sub(1, Ordering::SeqCst) - 1;
        debug!(target: "logo_forge::raster", attached, "detached off-screen scene");
    }
}

/// Suspends until the next paint opportunity.
pub async fn next_frame() {
    tokio::task::yield_now().await;
}

// ============================================================================
// Pipeline
// ============================================================================

/// Rasterizes scenes with resvg.
pub struct RasterPipeline {
    options: Options<'static>,
    surface: OffscreenSurface,
    scale: f32,
}

impl RasterPipeline {
    /// A pipeline with the system fonts loaded for label rendering.
    pub fn new() -> Self {
        let mut options = Options::default();
        Arc::make_mut(&mut options.fontdb).load_system_fonts();
        Self::with_options(options)
    }

    /// A pipeline using the given parse options as is.
    pub fn with_options(options: Options<'static>) -> Self {
        Self {
            options,
            surface: OffscreenSurface::new(),
            scale: CAPTURE_SCALE,
        }
    }

    /// The surface isolated scenes are attached to.
    pub fn surface(&self) -> &OffscreenSurface {
        &self.surface
    }

    /// Snapshots the live preview with `overrides` applied to an isolated copy.
    ///
    /// The result is 1600x1600. With `transparent_background` the background
    /// node is skipped; for [`Shape::Circle`] everything outside the inscribed
    /// circle is cleared.
    pub async fn capture(
        &self,
        preview: &LivePreview,
        overrides: &ColorOverrides,
        transparent_background: bool,
        shape: Shape,
    ) -> CaptureResult<Pixmap> {
        let live = preview.scene().ok_or(CaptureError::NotMounted)?;

        let mut isolated = self.surface.attach(live.clone()).await;
        isolated.apply_overrides(overrides);
        self.snapshot(isolated, transparent_background, shape).await
    }

    /// Snapshots `scene` in place of the live one.
    ///
    /// The preview only has to be mounted; its own scene is not read. Used
    /// when the scene was built from the same geometry as a vector document
    /// so both outputs show one logo.
    pub async fn capture_scene(
        &self,
        preview: &LivePreview,
        scene: Scene,
        transparent_background: bool,
        shape: Shape,
    ) -> CaptureResult<Pixmap> {
        if !preview.is_mounted() {
            return Err(CaptureError::NotMounted);
        }

        let isolated = self.surface.attach(scene).await;
        self.snapshot(isolated, transparent_background, shape).await
    }

    async fn snapshot(
        &self,
        mut isolated: OffscreenScene<'_>,
        transparent_background: bool,
        shape: Shape,
    ) -> CaptureResult<Pixmap> {
        isolated.shape = shape;

        next_frame().await;

        let pixmap = self.render_scene(&isolated, self.scale, transparent_background)?;
        drop(isolated);

        match shape {
            Shape::Square => Ok(pixmap),
            Shape::Circle => circle_crop(&pixmap),
        }
    }

    /// Paints `scene` at `scale`: background, then icon, then label.
    pub fn render_scene(
        &self,
        scene: &Scene,
        scale: f32,
        transparent_background: bool,
    ) -> CaptureResult<Pixmap> {
        let size = (scene.size() * scale).round() as u32;
        let mut pixmap = new_pixmap(size, size)?;

        if !transparent_background {
            if let Some((r, g, b)) = scene.background.channels() {
                pixmap.fill(Color::from_rgba8(r, g, b, 255));
            }
        }

        if let Some(icon) = &scene.icon {
            let transform = Transform::from_row(
                scale,
                0.0,
                0.0,
                scale,
                icon.bounds.x * scale,
                icon.bounds.y * scale,
            );
            render_svg_into(&mut pixmap, &icon.markup(), transform, &self.options)?;
        }

        if let Some(text) = &scene.text {
            render_svg_into(
                &mut pixmap,
                &text.markup(),
                Transform::from_scale(scale, scale),
                &self.options,
            )?;
        }

        Ok(pixmap)
    }

    /// Renders the live scene the way the editor displays it.
    pub fn render_preview(&self, preview: &LivePreview) -> CaptureResult<Pixmap> {
        let scene = preview.scene().ok_or(CaptureError::NotMounted)?;
        let pixmap = self.render_scene(scene, preview.display_scale(), false)?;
        match scene.shape {
            Shape::Square => Ok(pixmap),
            Shape::Circle => circle_crop(&pixmap),
        }
    }
}

impl Default for RasterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LayoutMode, LogoConfig, Paint};
    use crate::glyph::{Glyph, GlyphSet};
    use crate::layout::compute_layout;
    use crate::variant::VARIANTS;
    use crate::vector::render_logo_svg;

    fn pipeline() -> RasterPipeline {
        RasterPipeline::with_options(Options::default())
    }

    fn ace() -> LogoConfig {
        LogoConfig::new("Ace").with_layout(LayoutMode::IconLeft).with_icon("Star")
    }

    fn mounted(config: &LogoConfig, shape: Shape) -> LivePreview {
        let mut preview = LivePreview::new();
        preview.mount(config, shape, &GlyphSet::builtin());
        preview
    }

    /// Bounding box of all pixels with nonzero alpha.
    fn ink_bounds(pixmap: &Pixmap) -> Option<(u32, u32, u32, u32)> {
        let mut bounds: Option<(u32, u32, u32, u32)> = None;
        for y in 0..pixmap.height() {
            for x in 0..pixmap.width() {
                if pixmap.pixel(x, y).unwrap().alpha() == 0 {
                    continue;
                }
                bounds = Some(match bounds {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                });
            }
        }
        bounds
    }

    #[tokio::test]
    async fn unmounted_preview_fails() {
        let pipeline = pipeline();
        let result = pipeline
            .capture(&LivePreview::new(), &ColorOverrides::NONE, false, Shape::Square)
            .await;

        assert!(matches!(result, Err(CaptureError::NotMounted)));
        assert_eq!(pipeline.surface().attached(), 0);
    }

    #[tokio::test]
    async fn main_variant_is_opaque() {
        let preview = mounted(&ace(), Shape::Square);
        let pixmap = pipeline()
            .capture(&preview, &VARIANTS[0].overrides, false, Shape::Square)
            .await
            .unwrap();

        assert_eq!((pixmap.width(), pixmap.height()), (1600, 1600));
        let corner = pixmap.pixel(0, 0).unwrap();
        assert_eq!(corner.alpha(), 255);
        assert_eq!((corner.red(), corner.green(), corner.blue()), (0x0f, 0x17, 0x2a));
    }

    #[tokio::test]
    async fn transparent_variants_clear_background() {
        let preview = mounted(&ace(), Shape::Square);
        let pipeline = pipeline();

        for variant in &VARIANTS[1..] {
            let pixmap = pipeline
                .capture(&preview, &variant.overrides, variant.transparent_background, Shape::Square)
                .await
                .unwrap();
            assert_eq!(pixmap.pixel(0, 0).unwrap().alpha(), 0, "{}", variant.name);
            assert_eq!(pixmap.pixel(1599, 1599).unwrap().alpha(), 0, "{}", variant.name);
        }
    }

    #[tokio::test]
    async fn circle_clears_corners() {
        let preview = mounted(&ace(), Shape::Circle);
        let pixmap = pipeline()
            .capture(&preview, &VARIANTS[0].overrides, false, Shape::Circle)
            .await
            .unwrap();

        assert_eq!((pixmap.width(), pixmap.height()), (1600, 1600));
        for (x, y) in [(0, 0), (1599, 0), (0, 1599), (1599, 1599)] {
            assert_eq!(pixmap.pixel(x, y).unwrap().alpha(), 0);
        }
        assert_eq!(pixmap.pixel(800, 40).unwrap().alpha(), 255);
    }

    #[tokio::test]
    async fn icon_lands_inside_its_box() {
        let config = ace().with_layout(LayoutMode::IconOnly);
        let icon = compute_layout(&config, Shape::Square).icon.unwrap().scaled(2.0);
        let preview = mounted(&config, Shape::Square);

        let pixmap = pipeline()
            .capture(&preview, &VARIANTS[1].overrides, true, Shape::Square)
            .await
            .unwrap();

        let (x0, y0, x1, y1) = ink_bounds(&pixmap).expect("icon pixels");
        assert!(x0 as f32 >= icon.x - 2.0 && y0 as f32 >= icon.y - 2.0);
        assert!(x1 as f32 <= icon.right() + 2.0 && y1 as f32 <= icon.bottom() + 2.0);
    }

    #[tokio::test]
    async fn raster_matches_vector_icon_region() {
        let config = VARIANTS[1].derive(&ace().with_layout(LayoutMode::IconOnly));
        let geometry = compute_layout(&config, Shape::Square);
        let options = Options::default();

        let svg = render_logo_svg(&config, &geometry, &GlyphSet::builtin());
        let mut vector = new_pixmap(1600, 1600).unwrap();
        render_svg_into(&mut vector, &svg, Transform::from_scale(2.0, 2.0), &options).unwrap();

        let preview = mounted(&config, Shape::Square);
        let raster = pipeline()
            .capture(&preview, &ColorOverrides::NONE, true, Shape::Square)
            .await
            .unwrap();

        let (a, b) = (ink_bounds(&vector).unwrap(), ink_bounds(&raster).unwrap());
        assert!(a.0.abs_diff(b.0) <= 2 && a.1.abs_diff(b.1) <= 2);
        assert!(a.2.abs_diff(b.2) <= 2 && a.3.abs_diff(b.3) <= 2);
    }

    #[tokio::test]
    async fn live_scene_is_untouched() {
        let preview = mounted(&ace(), Shape::Square);
        let before = preview.scene().cloned();

        let pipeline = pipeline();
        for variant in &VARIANTS {
            pipeline
                .capture(&preview, &variant.overrides, variant.transparent_background, Shape::Circle)
                .await
                .unwrap();
        }

        assert_eq!(preview.scene().cloned(), before);
        assert_eq!(pipeline.surface().attached(), 0);
    }

    #[tokio::test]
    async fn failed_render_still_detaches() {
        let registry = GlyphSet::new(Glyph::new("Broken", "<path d="));
        let mut preview = LivePreview::new();
        preview.mount(&LogoConfig::new("Ace").with_icon("Broken"), Shape::Square, &registry);

        let pipeline = pipeline();
        let result = pipeline
            .capture(&preview, &ColorOverrides::NONE, false, Shape::Square)
            .await;

        assert!(matches!(result, Err(CaptureError::Parse(_))));
        assert_eq!(pipeline.surface().attached(), 0);
    }

    #[tokio::test]
    async fn capture_scene_draws_the_given_scene() {
        let registry = GlyphSet::builtin();
        let preview = mounted(&ace(), Shape::Square);

        let red = ace()
            .with_layout(LayoutMode::IconOnly)
            .with_colors(Paint::rgb(255, 0, 0), Paint::WHITE, Paint::WHITE);
        let geometry = compute_layout(&red, Shape::Square);
        let scene = Scene::build(&red, &geometry, &registry);

        let pipeline = pipeline();
        let pixmap = pipeline
            .capture_scene(&preview, scene, false, Shape::Square)
            .await
            .unwrap();

        let corner = pixmap.pixel(0, 0).unwrap();
        assert_eq!((corner.red(), corner.green(), corner.blue()), (255, 0, 0));
        assert_eq!(pipeline.surface().attached(), 0);
    }

    #[tokio::test]
    async fn capture_scene_requires_mounted_preview() {
        let config = ace();
        let scene = Scene::build(
            &config,
            &compute_layout(&config, Shape::Square),
            &GlyphSet::builtin(),
        );

        let result = pipeline()
            .capture_scene(&LivePreview::new(), scene, false, Shape::Square)
            .await;

        assert!(matches!(result, Err(CaptureError::NotMounted)));
    }

    #[tokio::test]
    async fn attach_counts_guards() {
        let surface = OffscreenSurface::new();
        let scene = mounted(&ace(), Shape::Square).scene().cloned().unwrap();

        let guard = surface.attach(scene).await;
        assert_eq!(surface.attached(), 1);
        assert_eq!(guard.shape, Shape::Square);
        drop(guard);
        assert_eq!(surface.attached(), 0);
    }

    #[test]
    fn preview_renders_at_display_scale() {
        let preview = mounted(&ace(), Shape::Square);
        let pixmap = pipeline().render_preview(&preview).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (400, 400));
    }
}
