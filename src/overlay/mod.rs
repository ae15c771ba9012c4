//! The three path overlays and the frame context they share.
//!
//! Each overlay is a [`Renderable`] the host's frame scheduler calls once per
//! frame. None of them keeps state between frames or calls another: they all
//! read the same [`FrameContext`] and draw through their own projection.

mod map;
mod minimap;
mod scene;
#[cfg(test)]
pub(crate) mod testing;

pub use map::MapOverlay;
pub use minimap::MinimapOverlay;
pub use scene::SceneOverlay;

use crate::path::{ActivePath, Path};
use crate::projection::{CollisionMap, Host};
use crate::render::Canvas;
use crate::settings::RenderSettings;
use crate::transport::TransportGraph;

/// Read-only inputs for one frame.
///
/// The path is a snapshot taken once by the scheduler before drawing; every
/// overlay in the frame sees the same one.
#[derive(Clone, Copy)]
pub struct FrameContext<'a> {
    pub settings: &'a RenderSettings,
    pub path: Option<&'a Path>,
    pub transports: &'a TransportGraph,
    pub host: &'a dyn Host,
    pub collision: &'a dyn CollisionMap,
}

impl<'a> FrameContext<'a> {
    /// The path view to draw this frame, if any.
    pub fn active_path(&self) -> Option<ActivePath<'a>> {
        self.path.and_then(Path::active)
    }
}

/// Something the frame scheduler draws once per frame.
pub trait Renderable {
    fn name(&self) -> &'static str;

    fn draw(&self, frame: &FrameContext<'_>, canvas: &mut dyn Canvas);
}

/// An ordered list of overlays drawn back to front.
pub struct OverlayStack {
    layers: Vec<Box<dyn Renderable>>,
}

impl OverlayStack {
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Scene tiles first, then the minimap above the scene, then the world
    /// map which sits above both while open.
    pub fn with_default_layers() -> Self {
        let mut stack = Self::new();
        stack.push(SceneOverlay);
        stack.push(MinimapOverlay::default());
        stack.push(MapOverlay);
        stack
    }

    pub fn push(&mut self, layer: impl Renderable + 'static) {
        self.layers.push(Box::new(layer));
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn draw(&self, frame: &FrameContext<'_>, canvas: &mut dyn Canvas) {
        for layer in &self.layers {
            log::trace!("drawing overlay {}", layer.name());
            layer.draw(frame, canvas);
        }
    }
}

impl Default for OverlayStack {
    fn default() -> Self {
        Self::with_default_layers()
    }
}
