//! Path overlays for a tile-based game world.
//!
//! Renders a travel path and a transport graph onto three projections of the
//! same world: the zoomable world map, the rotating minimap, and the live
//! scene. Each projection has its own transform and visibility rules, but all
//! three draw from one path snapshot per frame and keep no state of their own.
//!
//! The host supplies the projections through the traits in [`projection`] and
//! a drawing surface through [`render::Canvas`]; the crate ships a CPU
//! framebuffer canvas and a [`sandbox`] host so it can run standalone.
//!
//! # Quick Start
//!
//! ```ignore
//! use pathviz::prelude::*;
//!
//! let overlays = OverlayStack::default();
//! let frame = FrameContext {
//!     settings: &settings,
//!     path: current_path.as_deref(),
//!     transports: &transports,
//!     host: &client,
//!     collision: &collision_map,
//! };
//! overlays.draw(&frame, &mut canvas);
//! ```

pub mod clipper;
pub mod colors;
pub mod math;
pub mod overlay;
pub mod path;
pub mod projection;
pub mod render;
pub mod sandbox;
pub mod settings;
pub mod transport;
pub mod window;
pub mod world;

pub use overlay::{FrameContext, OverlayStack, Renderable};
pub use path::Path;
pub use settings::RenderSettings;

/// Prelude module for convenient imports.
pub mod prelude {
    // Geometry
    pub use crate::clipper::{clip_line, Segment, ViewportClipRegion};
    pub use crate::math::polygon::Polygon;
    pub use crate::math::rect::Rect;
    pub use crate::math::vec2::Vec2;

    // World and path state
    pub use crate::path::ActivePath;
    pub use crate::transport::TransportGraph;
    pub use crate::world::{Direction, LocalPoint, WorldTile};

    // Host boundary
    pub use crate::projection::{
        CollisionMap, Host, LocalCoordinates, MinimapProjection, PlayerState, SceneProjection,
        WidgetQuery, WorldMapProjection,
    };

    // Overlays
    pub use crate::overlay::{
        FrameContext, MapOverlay, MinimapOverlay, OverlayStack, Renderable, SceneOverlay,
    };

    // Drawing
    pub use crate::colors::Color;
    pub use crate::render::{Canvas, DrawCommand, PixelCanvas, RecordingCanvas};

    // Settings
    pub use crate::settings::{RenderSettings, TileCounter};
}
