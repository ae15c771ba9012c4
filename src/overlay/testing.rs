//! A configurable host for overlay tests.
//!
//! World map: 8 px per tile, north up, y = 600 at world y = 0.
//! Scene: tiles with 0 <= x, y < 104 are loaded; each projects to a 10 px
//! square at (10x, 10y).
//! Minimap: 4 px per tile at (4x, 4y).

use std::collections::{HashMap, HashSet};

use crate::math::polygon::Polygon;
use crate::math::rect::Rect;
use crate::math::vec2::Vec2;
use crate::projection::{
    CollisionMap, LocalCoordinates, MinimapProjection, PlayerState, SceneProjection,
    WidgetQuery, WorldMapProjection,
};
use crate::world::{Direction, LocalPoint, WorldTile};

pub const SCENE_SIZE: i32 = 104;

pub struct TestHost {
    pub map_bounds: Option<Rect>,
    pub panels: Vec<Rect>,
    pub map_hidden: HashSet<WorldTile>,
    pub plane: i32,
    pub player: Option<WorldTile>,
    pub minimap_angle: i32,
    pub scene_hidden: HashSet<WorldTile>,
    pub loaded: Vec<WorldTile>,
    pub blocked: HashMap<WorldTile, Vec<Direction>>,
}

impl Default for TestHost {
    fn default() -> Self {
        Self {
            map_bounds: Some(Rect::new(0.0, 0.0, 800.0, 600.0)),
            panels: Vec::new(),
            map_hidden: HashSet::new(),
            plane: 0,
            player: Some(WorldTile::new(0, 0, 0)),
            minimap_angle: 0,
            scene_hidden: HashSet::new(),
            loaded: Vec::new(),
            blocked: HashMap::new(),
        }
    }
}

impl TestHost {
    pub fn scene_square(tile: WorldTile) -> Polygon {
        let (x, y) = (tile.x as f32 * 10.0, tile.y as f32 * 10.0);
        Polygon::new(vec![
            Vec2::new(x, y),
            Vec2::new(x + 10.0, y),
            Vec2::new(x + 10.0, y + 10.0),
            Vec2::new(x, y + 10.0),
        ])
    }
}

impl WorldMapProjection for TestHost {
    fn map_world_to_screen(&self, tile: WorldTile, dx: f32, dy: f32) -> Option<Vec2> {
        if self.map_hidden.contains(&tile) {
            return None;
        }
        Some(Vec2::new(
            (tile.x as f32 + dx) * 8.0,
            600.0 - (tile.y as f32 + dy) * 8.0,
        ))
    }
}

impl LocalCoordinates for TestHost {
    fn world_to_local(&self, tile: WorldTile) -> Option<LocalPoint> {
        let inside = (0..SCENE_SIZE).contains(&tile.x) && (0..SCENE_SIZE).contains(&tile.y);
        inside.then(|| LocalPoint::new(tile.x * 128 + 64, tile.y * 128 + 64))
    }
}

impl MinimapProjection for TestHost {
    fn local_to_minimap(&self, local: LocalPoint) -> Option<Vec2> {
        Some(Vec2::new((local.x / 128) as f32 * 4.0, (local.y / 128) as f32 * 4.0))
    }

    fn minimap_angle(&self) -> i32 {
        self.minimap_angle
    }
}

impl SceneProjection for TestHost {
    fn scene_tile_polygon(&self, local: LocalPoint) -> Option<Polygon> {
        let tile = WorldTile::new(local.x / 128, local.y / 128, self.plane);
        if self.scene_hidden.contains(&tile) {
            return None;
        }
        Some(Self::scene_square(tile))
    }

    fn scene_tiles(&self, plane: i32) -> Vec<WorldTile> {
        self.loaded.iter().copied().filter(|t| t.plane == plane).collect()
    }
}

impl WidgetQuery for TestHost {
    fn world_map_bounds(&self) -> Option<Rect> {
        self.map_bounds
    }

    fn obscuring_panels(&self) -> Vec<Rect> {
        self.panels.clone()
    }
}

impl PlayerState for TestHost {
    fn current_plane(&self) -> i32 {
        self.plane
    }

    fn player_tile(&self) -> Option<WorldTile> {
        self.player
    }
}

impl CollisionMap for TestHost {
    fn passable(&self, x: i32, y: i32, plane: i32, direction: Direction) -> bool {
        self.blocked
            .get(&WorldTile::new(x, y, plane))
            .map_or(true, |dirs| !dirs.contains(&direction))
    }
}
