//! A self-contained host for running the overlays without a game client.
//!
//! The sandbox world is a 64x64 tile area on two planes, seen three ways on
//! one 800x600 canvas:
//!
//! - the scene: an isometric view around the player, out to
//!   [`DRAW_DISTANCE`] tiles;
//! - the minimap: a disc in the top-right corner that slowly rotates;
//! - the world map: a widget over the scene, when opened, with optional
//!   overview and surface-selector panels covering part of it.
//!
//! Walls stand on every seventh column with a gap every fifth row. The path
//! is a scripted route through the gaps and up a staircase; it is revealed
//! tile by tile while "computing" and then finalized.

use crate::colors::{self, Color};
use crate::math::polygon::Polygon;
use crate::math::rect::Rect;
use crate::math::vec2::Vec2;
use crate::overlay::FrameContext;
use crate::path::Path;
use crate::projection::{
    CollisionMap, LocalCoordinates, MinimapProjection, PlayerState, SceneProjection,
    WidgetQuery, WorldMapProjection,
};
use crate::render::{Canvas, PixelCanvas};
use crate::settings::RenderSettings;
use crate::transport::TransportGraph;
use crate::world::{Direction, LocalPoint, WorldTile};

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 600;

/// South-west corner of the sandbox area.
pub const BASE: WorldTile = WorldTile::new(3200, 3200, 0);
pub const AREA_SIZE: i32 = 64;
/// Scene units per tile in local coordinates.
pub const LOCAL_TILE_SIZE: i32 = 128;
pub const DRAW_DISTANCE: i32 = 12;

const SCENE_CENTER: Vec2 = Vec2::new(400.0, 320.0);
const ISO_HALF_WIDTH: f32 = 16.0;
const ISO_HALF_HEIGHT: f32 = 8.0;

const MINIMAP_CENTER: Vec2 = Vec2::new(712.0, 88.0);
const MINIMAP_RADIUS: f32 = 76.0;
const MINIMAP_PIXELS_PER_TILE: f32 = 4.0;

const MAP_BOUNDS: Rect = Rect::new(60.0, 60.0, 520.0, 400.0);
const MAP_PIXELS_PER_TILE: f32 = 6.0;
/// Map positions this far outside the widget still project; beyond it they don't.
const MAP_PROJECTION_MARGIN: f32 = 120.0;

/// Ticks between each newly revealed tile of the route while computing.
const TICKS_PER_STEP: u32 = 2;
/// Ticks before the first candidate appears.
const TICKS_BEFORE_FIRST_CANDIDATE: u32 = 30;
/// Minimap angle units added per tick.
const MINIMAP_SPIN: i32 = 2;

/// Host state: what the player sees and which panels are open.
#[derive(Clone, Debug)]
pub struct SandboxWorld {
    pub player: WorldTile,
    pub minimap_angle: i32,
    pub map_open: bool,
    pub overview_open: bool,
    pub selector_open: bool,
    /// World-map centre, in tiles.
    pub map_center: Vec2,
}

impl Default for SandboxWorld {
    fn default() -> Self {
        Self {
            player: BASE.offset(4, 5),
            minimap_angle: 0,
            map_open: false,
            overview_open: true,
            selector_open: false,
            map_center: Vec2::new((BASE.x + 32) as f32, (BASE.y + 20) as f32),
        }
    }
}

impl SandboxWorld {
    pub fn in_area(tile: WorldTile) -> bool {
        (0..AREA_SIZE).contains(&(tile.x - BASE.x))
            && (0..AREA_SIZE).contains(&(tile.y - BASE.y))
            && (0..=1).contains(&tile.plane)
    }

    /// Walls stand on plane 0 only.
    pub fn is_wall(x: i32, y: i32, plane: i32) -> bool {
        plane == 0 && x % 7 == 0 && y % 5 != 0
    }

    fn local_to_tile(&self, local: LocalPoint) -> WorldTile {
        WorldTile::new(
            BASE.x + local.x.div_euclid(LOCAL_TILE_SIZE),
            BASE.y + local.y.div_euclid(LOCAL_TILE_SIZE),
            self.player.plane,
        )
    }

    /// Isometric projection of a continuous world position on the viewed plane.
    fn scene_point(&self, x: f32, y: f32) -> Vec2 {
        let dx = x - self.player.x as f32;
        let dy = y - self.player.y as f32;
        Vec2::new(
            SCENE_CENTER.x + (dx - dy) * ISO_HALF_WIDTH,
            SCENE_CENTER.y - (dx + dy) * ISO_HALF_HEIGHT,
        )
    }

    fn scene_viewport() -> Rect {
        Rect::new(0.0, 0.0, WIDTH as f32, HEIGHT as f32)
    }

    fn obscuring(&self) -> Vec<Rect> {
        let mut panels = Vec::new();
        if self.overview_open {
            panels.push(Rect::new(
                MAP_BOUNDS.max_x() - 150.0,
                MAP_BOUNDS.max_y() - 110.0,
                150.0,
                110.0,
            ));
        }
        if self.selector_open {
            panels.push(Rect::new(MAP_BOUNDS.x, MAP_BOUNDS.y, 70.0, MAP_BOUNDS.height));
        }
        panels
    }
}

impl WorldMapProjection for SandboxWorld {
    fn map_world_to_screen(&self, tile: WorldTile, dx: f32, dy: f32) -> Option<Vec2> {
        if !self.map_open {
            return None;
        }
        let center = MAP_BOUNDS.center();
        let point = Vec2::new(
            center.x + (tile.x as f32 + dx - self.map_center.x) * MAP_PIXELS_PER_TILE,
            center.y - (tile.y as f32 + dy - self.map_center.y) * MAP_PIXELS_PER_TILE,
        );
        let reach = Rect::new(
            MAP_BOUNDS.x - MAP_PROJECTION_MARGIN,
            MAP_BOUNDS.y - MAP_PROJECTION_MARGIN,
            MAP_BOUNDS.width + 2.0 * MAP_PROJECTION_MARGIN,
            MAP_BOUNDS.height + 2.0 * MAP_PROJECTION_MARGIN,
        );
        reach.contains(point.x, point.y).then_some(point)
    }
}

impl LocalCoordinates for SandboxWorld {
    fn world_to_local(&self, tile: WorldTile) -> Option<LocalPoint> {
        if !Self::in_area(tile) {
            return None;
        }
        Some(LocalPoint::new(
            (tile.x - BASE.x) * LOCAL_TILE_SIZE + LOCAL_TILE_SIZE / 2,
            (tile.y - BASE.y) * LOCAL_TILE_SIZE + LOCAL_TILE_SIZE / 2,
        ))
    }
}

impl MinimapProjection for SandboxWorld {
    fn local_to_minimap(&self, local: LocalPoint) -> Option<Vec2> {
        let player = self.world_to_local(self.player)?;
        let dx = (local.x - player.x) as f32 / LOCAL_TILE_SIZE as f32;
        let dy = (local.y - player.y) as f32 / LOCAL_TILE_SIZE as f32;
        let offset = Vec2::new(dx, -dy) * MINIMAP_PIXELS_PER_TILE;
        if offset.magnitude() > MINIMAP_RADIUS {
            return None;
        }
        let angle = crate::projection::angle_units_to_radians(self.minimap_angle);
        Some((MINIMAP_CENTER + offset).rotate_about(MINIMAP_CENTER, angle))
    }

    fn minimap_angle(&self) -> i32 {
        self.minimap_angle
    }
}

impl SceneProjection for SandboxWorld {
    fn scene_tile_polygon(&self, local: LocalPoint) -> Option<Polygon> {
        let tile = self.local_to_tile(local);
        if tile.distance_to(&self.player) > DRAW_DISTANCE {
            return None;
        }
        let (x, y) = (tile.x as f32, tile.y as f32);
        let polygon = Polygon::new(vec![
            self.scene_point(x, y),
            self.scene_point(x + 1.0, y),
            self.scene_point(x + 1.0, y + 1.0),
            self.scene_point(x, y + 1.0),
        ]);
        Self::scene_viewport()
            .intersection(&polygon.bounds())
            .map(|_| polygon)
    }

    fn scene_tiles(&self, plane: i32) -> Vec<WorldTile> {
        let mut tiles = Vec::new();
        for dy in -DRAW_DISTANCE..=DRAW_DISTANCE {
            for dx in -DRAW_DISTANCE..=DRAW_DISTANCE {
                let tile = WorldTile::new(self.player.x + dx, self.player.y + dy, plane);
                if Self::in_area(tile) {
                    tiles.push(tile);
                }
            }
        }
        tiles
    }
}

impl WidgetQuery for SandboxWorld {
    fn world_map_bounds(&self) -> Option<Rect> {
        self.map_open.then_some(MAP_BOUNDS)
    }

    fn obscuring_panels(&self) -> Vec<Rect> {
        if self.map_open {
            self.obscuring()
        } else {
            Vec::new()
        }
    }
}

impl PlayerState for SandboxWorld {
    fn current_plane(&self) -> i32 {
        self.player.plane
    }

    fn player_tile(&self) -> Option<WorldTile> {
        Some(self.player)
    }
}

impl CollisionMap for SandboxWorld {
    fn passable(&self, x: i32, y: i32, plane: i32, direction: Direction) -> bool {
        let (dx, dy) = direction.delta();
        !Self::is_wall(x, y, plane) && !Self::is_wall(x + dx, y + dy, plane)
    }
}

/// The sandbox world plus the pathfinder-side state the overlays read.
pub struct Sandbox {
    pub world: SandboxWorld,
    pub transports: TransportGraph,
    route: Vec<WorldTile>,
    path: Path,
    ticks: u32,
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Sandbox {
    pub fn new() -> Self {
        let world = SandboxWorld::default();
        let route = scripted_route(world.player);
        Self {
            world,
            transports: demo_transports(),
            route,
            path: Path::InProgress(None),
            ticks: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn route(&self) -> &[WorldTile] {
        &self.route
    }

    /// Advances one frame: spins the minimap and reveals more of the route.
    pub fn tick(&mut self) {
        self.world.minimap_angle = (self.world.minimap_angle + MINIMAP_SPIN).rem_euclid(2048);
        if !self.path.is_computing() {
            return;
        }

        self.ticks += 1;
        let Some(since_first) = self.ticks.checked_sub(TICKS_BEFORE_FIRST_CANDIDATE) else {
            return;
        };
        let revealed = (since_first / TICKS_PER_STEP) as usize + 1;
        self.path = if revealed >= self.route.len() {
            log::debug!("sandbox path finalized ({} tiles)", self.route.len());
            Path::Finalized(self.route.clone())
        } else {
            Path::InProgress(Some(self.route[..revealed].to_vec()))
        };
    }

    /// Starts computing the route again from nothing.
    pub fn restart(&mut self) {
        self.ticks = 0;
        self.path = Path::InProgress(None);
    }

    /// Skips straight to the finalized route.
    pub fn finish(&mut self) {
        self.path = Path::Finalized(self.route.clone());
    }

    pub fn frame<'a>(&'a self, settings: &'a RenderSettings) -> FrameContext<'a> {
        FrameContext {
            settings,
            path: Some(&self.path),
            transports: &self.transports,
            host: &self.world,
            collision: &self.world,
        }
    }

    /// Paints what the host itself would show under the overlays.
    pub fn draw_background(&self, canvas: &mut PixelCanvas) {
        canvas.clear(colors::BACKGROUND);

        let floor = Color::rgb(52, 58, 48);
        let wall = Color::rgb(96, 84, 70);
        let plane = self.world.player.plane;
        for tile in self.world.scene_tiles(plane) {
            let Some(local) = self.world.world_to_local(tile) else {
                continue;
            };
            let Some(polygon) = self.world.scene_tile_polygon(local) else {
                continue;
            };
            let color = if SandboxWorld::is_wall(tile.x, tile.y, tile.plane) {
                wall
            } else {
                floor
            };
            canvas.fill_polygon(&polygon, color);
            let grid = Color::from_argb(colors::GRID);
            for (i, a) in polygon.points.iter().enumerate() {
                canvas.draw_line(*a, polygon.points[(i + 1) % polygon.points.len()], grid);
            }
        }

        canvas.fill_polygon(&circle(MINIMAP_CENTER, MINIMAP_RADIUS, 48), Color::rgb(30, 44, 30));
        canvas.fill_rect(
            Rect::new(MINIMAP_CENTER.x - 2.0, MINIMAP_CENTER.y - 2.0, 4.0, 4.0),
            Color::WHITE,
        );

        if self.world.map_open {
            canvas.fill_rect(MAP_BOUNDS, Color::rgb(70, 62, 44));
            for panel in self.world.obscuring() {
                canvas.fill_rect(panel, Color::rgb(40, 36, 30));
            }
        }
    }
}

fn circle(center: Vec2, radius: f32, segments: usize) -> Polygon {
    (0..segments)
        .map(|i| {
            let a = i as f32 / segments as f32 * std::f32::consts::TAU;
            center + Vec2::new(a.cos(), a.sin()) * radius
        })
        .collect::<Vec<_>>()
        .into()
}

/// Walks straight (8-way) between waypoints, one tile per step.
fn walk(waypoints: &[WorldTile]) -> Vec<WorldTile> {
    let Some(&first) = waypoints.first() else {
        return Vec::new();
    };
    let mut tiles = vec![first];
    let mut at = first;
    for &target in &waypoints[1..] {
        if target.plane != at.plane {
            at = target;
            tiles.push(at);
            continue;
        }
        while at != target {
            at = at.offset((target.x - at.x).signum(), (target.y - at.y).signum());
            tiles.push(at);
        }
    }
    tiles
}

/// Through the wall gap on row +5, north to the stairs, then up and east.
fn scripted_route(start: WorldTile) -> Vec<WorldTile> {
    walk(&[
        start,
        BASE.offset(4, 5),
        BASE.offset(40, 5),
        BASE.offset(40, 30),
        WorldTile::new(BASE.x + 40, BASE.y + 30, 1),
        WorldTile::new(BASE.x + 52, BASE.y + 36, 1),
    ])
}

fn demo_transports() -> TransportGraph {
    let stairs = BASE.offset(40, 30);
    let ladder = BASE.offset(10, 12);
    let mut graph = TransportGraph::new();
    graph.link(stairs, WorldTile::new(stairs.x, stairs.y, 1));
    graph.link(WorldTile::new(stairs.x, stairs.y, 1), stairs);
    graph.link(ladder, WorldTile::new(ladder.x, ladder.y, 1));
    graph.link(ladder, ladder.offset(0, 3));
    // A shortcut across a wall.
    graph.link(BASE.offset(5, 8), BASE.offset(7, 8));
    graph.link(BASE.offset(7, 8), BASE.offset(5, 8));
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::OverlayStack;
    use crate::render::RecordingCanvas;

    #[test]
    fn route_is_contiguous_and_avoids_walls() {
        let sandbox = Sandbox::new();
        let route = sandbox.route();
        for pair in route.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a.plane == b.plane {
                assert_eq!(a.distance_to(&b), 1, "{a} -> {b}");
            }
        }
        assert!(route.iter().all(|t| !SandboxWorld::is_wall(t.x, t.y, t.plane)));
        assert!(route.iter().any(|t| t.plane == 1));
    }

    #[test]
    fn computation_progresses_to_finalized() {
        let mut sandbox = Sandbox::new();
        assert_eq!(sandbox.path(), &Path::InProgress(None));

        for _ in 0..TICKS_BEFORE_FIRST_CANDIDATE {
            sandbox.tick();
        }
        assert_eq!(sandbox.path().best_effort_sequence().map(<[_]>::len), Some(1));

        while sandbox.path().is_computing() {
            sandbox.tick();
        }
        assert_eq!(sandbox.path().final_sequence(), Some(sandbox.route()));

        sandbox.restart();
        assert_eq!(sandbox.path(), &Path::InProgress(None));
    }

    #[test]
    fn player_tile_sits_at_scene_centre() {
        let world = SandboxWorld::default();
        let local = world.world_to_local(world.player).unwrap();
        let polygon = world.scene_tile_polygon(local).unwrap();
        // The player's tile spans one iso diamond starting at the scene centre.
        assert_eq!(polygon.points[0], SCENE_CENTER);
        assert_eq!(polygon.center(), Vec2::new(SCENE_CENTER.x, SCENE_CENTER.y - ISO_HALF_HEIGHT));
    }

    #[test]
    fn distant_tiles_fall_outside_scene_and_minimap() {
        let world = SandboxWorld::default();
        let far = world.player.offset(DRAW_DISTANCE + 1, 0);
        let local = world.world_to_local(far).unwrap();
        assert!(world.scene_tile_polygon(local).is_none());

        let beyond_minimap = world.player.offset(30, 0);
        let local = world.world_to_local(beyond_minimap).unwrap();
        assert!(world.local_to_minimap(local).is_none());
    }

    #[test]
    fn walls_block_movement_into_them() {
        let world = SandboxWorld::default();
        let wall_x = (BASE.x..BASE.x + 14).find(|x| x % 7 == 0).unwrap();
        let y = BASE.y + 1;
        assert!(!world.passable(wall_x - 1, y, 0, Direction::East));
        assert!(world.passable(wall_x - 1, y, 0, Direction::West));
        assert!(Direction::ALL.iter().all(|&d| !world.passable(wall_x, y, 0, d)));
    }

    #[test]
    fn map_widget_only_while_open() {
        let mut world = SandboxWorld::default();
        assert_eq!(world.world_map_bounds(), None);
        assert!(world.obscuring_panels().is_empty());
        world.map_open = true;
        world.selector_open = true;
        assert_eq!(world.world_map_bounds(), Some(MAP_BOUNDS));
        assert_eq!(world.obscuring_panels().len(), 2);
    }

    #[test]
    fn full_frame_draws_on_every_projection() {
        let mut sandbox = Sandbox::new();
        sandbox.finish();
        sandbox.world.map_open = true;
        let settings = RenderSettings {
            draw_collision_map: true,
            ..RenderSettings::default()
        };

        let mut canvas = RecordingCanvas::new();
        OverlayStack::default().draw(&sandbox.frame(&settings), &mut canvas);

        assert!(canvas.polygons().count() > 0);
        assert!(canvas.rotated_rects().count() > 0);
        assert!(canvas.rects().count() > 0);
        assert!(canvas.lines().count() > 0);
        assert!(canvas.texts().count() > 0);
    }

    #[test]
    fn background_and_overlays_render_to_pixels() {
        let mut sandbox = Sandbox::new();
        sandbox.finish();
        let settings = RenderSettings::default();
        let mut canvas = PixelCanvas::new(WIDTH, HEIGHT);
        sandbox.draw_background(&mut canvas);
        let before = canvas.pixel(SCENE_CENTER.x as i32, SCENE_CENTER.y as i32 - 4);
        OverlayStack::default().draw(&sandbox.frame(&settings), &mut canvas);
        let after = canvas.pixel(SCENE_CENTER.x as i32, SCENE_CENTER.y as i32 - 4);
        // The route starts on the player's tile, so its fill changes that pixel.
        assert_ne!(before, after);
    }
}
