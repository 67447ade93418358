//! The on-screen preview that captures copy from.

use crate::config::{LogoConfig, Shape};
use crate::glyph::GlyphRegistry;
use crate::layout::compute_layout;
use crate::scene::Scene;

/// Scale the editor shows the 800x800 canvas at.
pub const DISPLAY_SCALE: f32 = 0.5;

#[derive(Debug, Clone)]
struct Mounted {
    config: LogoConfig,
    scene: Scene,
}

/// The live, displayed logo.
///
/// Holds the scene built from the current config while mounted. Captures
/// never modify it and never depend on [`display_scale`](Self::display_scale).
#[derive(Debug, Clone)]
pub struct LivePreview {
    mounted: Option<Mounted>,
    display_scale: f32,
}

impl LivePreview {
    /// An unmounted preview at the default display scale.
    pub fn new() -> Self {
        Self {
            mounted: None,
            display_scale: DISPLAY_SCALE,
        }
    }

    /// Lays out `config` and mounts the resulting scene, replacing any
    /// previous one.
    pub fn mount(&mut self, config: &LogoConfig, shape: Shape, registry: &dyn GlyphRegistry) {
        let geometry = compute_layout(config, shape);
        let scene = Scene::build(config, &geometry, registry);
        self.mounted = Some(Mounted {
            config: config.clone(),
            scene,
        });
    }

    /// Removes the mounted scene. Captures fail until the next [`mount`](Self::mount).
    pub fn unmount(&mut self) {
        self.mounted = None;
    }

    /// Returns `true` while a scene is mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// The mounted scene, if any.
    pub fn scene(&self) -> Option<&Scene> {
        self.mounted.as_ref().map(|m| &m.scene)
    }

    /// The config the mounted scene was built from.
    pub fn config(&self) -> Option<&LogoConfig> {
        self.mounted.as_ref().map(|m| &m.config)
    }

    /// Shape of the mounted scene.
    pub fn shape(&self) -> Option<Shape> {
        self.scene().map(|s| s.shape)
    }

    /// Scale the canvas is displayed at, [`DISPLAY_SCALE`] by default.
    pub fn display_scale(&self) -> f32 {
        self.display_scale
    }
}

impl Default for LivePreview {
    fn default() -> Self {
        Self::new()
    }
}
