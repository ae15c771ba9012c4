//! Host projection primitives and the per-view adapters built on them.
//!
//! The host owns every world-to-screen transform; each is opaque here and may
//! report a tile as not visible by returning `None`. The adapter functions at
//! the bottom turn those primitives into exactly what each overlay draws: a
//! point, a one-tile footprint rectangle, or a scene polygon.

use crate::math::polygon::Polygon;
use crate::math::rect::Rect;
use crate::math::vec2::Vec2;
use crate::world::{Direction, LocalPoint, WorldTile};

/// Offset from a tile to the diagonal neighbour whose projection bounds the
/// tile's footprint on the world map.
pub const FOOTPRINT_OFFSET: (f32, f32) = (1.0, -1.0);

/// World-map view primitives.
pub trait WorldMapProjection {
    /// Projects a tile, or a point `dx`/`dy` tiles away from it, onto the map.
    fn map_world_to_screen(&self, tile: WorldTile, dx: f32, dy: f32) -> Option<Vec2>;
}

/// Conversion into the loaded scene's local coordinates, shared by the
/// minimap and the scene.
pub trait LocalCoordinates {
    /// `None` for tiles outside the loaded scene.
    fn world_to_local(&self, tile: WorldTile) -> Option<LocalPoint>;
}

/// Minimap view primitives.
pub trait MinimapProjection: LocalCoordinates {
    fn local_to_minimap(&self, local: LocalPoint) -> Option<Vec2>;

    /// Minimap rotation in the host's angle unit, 2048 units per full turn.
    fn minimap_angle(&self) -> i32;
}

/// Live 3D scene primitives.
pub trait SceneProjection: LocalCoordinates {
    /// The tile's projected footprint, or `None` outside the view.
    fn scene_tile_polygon(&self, local: LocalPoint) -> Option<Polygon>;

    /// Every tile currently loaded in the scene on `plane`.
    fn scene_tiles(&self, plane: i32) -> Vec<WorldTile>;
}

/// Screen bounds of the host widgets the map overlay cares about.
pub trait WidgetQuery {
    /// Bounds of the world-map widget, or `None` while the map is closed.
    fn world_map_bounds(&self) -> Option<Rect>;

    /// Bounds of every sub-panel currently drawn over the map.
    ///
    /// Panels that are hidden, or whose bounds are unknown, are left out.
    fn obscuring_panels(&self) -> Vec<Rect>;
}

/// Player state the overlays filter against.
pub trait PlayerState {
    /// The plane currently being viewed.
    fn current_plane(&self) -> i32;

    /// The local player's tile, or `None` before login or between scenes.
    fn player_tile(&self) -> Option<WorldTile>;
}

/// Directional passability supplied by the pathfinder's collision data.
pub trait CollisionMap {
    /// Whether a tile can be left in `direction`.
    fn passable(&self, x: i32, y: i32, plane: i32, direction: Direction) -> bool;
}

/// Everything the overlays need from the host, in one object.
pub trait Host:
    WorldMapProjection + MinimapProjection + SceneProjection + WidgetQuery + PlayerState
{
}

impl<T> Host for T where
    T: WorldMapProjection + MinimapProjection + SceneProjection + WidgetQuery + PlayerState
{
}

/// Projects a tile onto the world map.
pub fn map_point<P: WorldMapProjection + ?Sized>(host: &P, tile: WorldTile) -> Option<Vec2> {
    host.map_world_to_screen(tile, 0.0, 0.0)
}

/// A tile's footprint on the world map, as `(anchor, rect)`.
///
/// The rectangle spans from the tile's projection to its south-east
/// diagonal neighbour's, centred on the tile's projection. Both projections
/// are snapped to whole pixels and the half-size offsets truncate toward
/// zero, so an odd-sized footprint has the extra pixel on its right and
/// bottom. The anchor is the point the caller checks against the clip region:
/// the rectangle's left edge on the tile's projected row. Assumes the map
/// projection is locally linear near the tile.
pub fn map_footprint<P: WorldMapProjection + ?Sized>(
    host: &P,
    tile: WorldTile,
) -> Option<(Vec2, Rect)> {
    let start = map_point(host, tile)?.round();
    let (dx, dy) = FOOTPRINT_OFFSET;
    let corner = host.map_world_to_screen(tile, dx, dy)?.round();

    let width = corner.x - start.x;
    let height = corner.y - start.y;
    let anchor = Vec2::new(start.x - (width / 2.0).trunc(), start.y);
    let rect = Rect::new(anchor.x, start.y - (height / 2.0).trunc(), width, height);
    Some((anchor, rect))
}

/// Projects a tile onto the minimap, through the scene's local coordinates.
pub fn minimap_point<P: MinimapProjection + ?Sized>(host: &P, tile: WorldTile) -> Option<Vec2> {
    let local = host.world_to_local(tile)?;
    host.local_to_minimap(local)
}

/// Minimap rotation in radians.
pub fn minimap_rotation<P: MinimapProjection + ?Sized>(host: &P) -> f32 {
    angle_units_to_radians(host.minimap_angle())
}

/// Converts the host's 2048-per-turn angle unit to radians.
pub fn angle_units_to_radians(units: i32) -> f32 {
    (units as f64 * std::f64::consts::PI / 1024.0) as f32
}

/// Projects a tile's footprint into the scene.
///
/// Tiles off the viewed plane are never visible, whatever the host reports.
pub fn scene_polygon<P: SceneProjection + ?Sized>(
    host: &P,
    tile: WorldTile,
    viewed_plane: i32,
) -> Option<Polygon> {
    if tile.plane != viewed_plane {
        return None;
    }
    let local = host.world_to_local(tile)?;
    host.scene_tile_polygon(local)
        .filter(|polygon| !polygon.is_degenerate())
}

/// Centre of a tile's scene polygon.
pub fn scene_center<P: SceneProjection + ?Sized>(
    host: &P,
    tile: WorldTile,
    viewed_plane: i32,
) -> Option<Vec2> {
    scene_polygon(host, tile, viewed_plane).map(|polygon| polygon.center())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Map with 8 pixels per tile, north up.
    struct FlatMap;

    impl WorldMapProjection for FlatMap {
        fn map_world_to_screen(&self, tile: WorldTile, dx: f32, dy: f32) -> Option<Vec2> {
            if tile.x < 0 {
                return None;
            }
            let x = (tile.x as f32 + dx) * 8.0;
            let y = (100.0 - (tile.y as f32 + dy)) * 8.0;
            Some(Vec2::new(x, y))
        }
    }

    #[test]
    fn footprint_spans_one_tile() {
        let (anchor, rect) = map_footprint(&FlatMap, WorldTile::new(10, 90, 0)).unwrap();
        assert_eq!(anchor, Vec2::new(76.0, 80.0));
        assert_eq!(rect, Rect::new(76.0, 76.0, 8.0, 8.0));
    }

    /// Map with 7 pixels per tile and a fractional origin.
    struct OddMap;

    impl WorldMapProjection for OddMap {
        fn map_world_to_screen(&self, tile: WorldTile, dx: f32, dy: f32) -> Option<Vec2> {
            let x = (tile.x as f32 + dx) * 7.0 + 0.4;
            let y = (100.0 - (tile.y as f32 + dy)) * 7.0 + 0.4;
            Some(Vec2::new(x, y))
        }
    }

    #[test]
    fn odd_footprint_snaps_to_whole_pixels() {
        // (10, 90) lands on (70.4, 70.4), its neighbour on (77.4, 77.4).
        let (anchor, rect) = map_footprint(&OddMap, WorldTile::new(10, 90, 0)).unwrap();
        assert_eq!(anchor, Vec2::new(67.0, 70.0));
        assert_eq!(rect, Rect::new(67.0, 67.0, 7.0, 7.0));
    }

    #[test]
    fn footprint_needs_both_projections() {
        assert_eq!(map_footprint(&FlatMap, WorldTile::new(-1, 0, 0)), None);
    }

    #[test]
    fn angle_unit_conversion() {
        assert_relative_eq!(angle_units_to_radians(1024), std::f32::consts::PI, epsilon = 1e-6);
        assert_relative_eq!(angle_units_to_radians(512), std::f32::consts::FRAC_PI_2, epsilon = 1e-6);
        assert_eq!(angle_units_to_radians(0), 0.0);
    }
}
