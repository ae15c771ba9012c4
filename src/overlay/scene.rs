//! Path, transport and collision overlays drawn into the live scene.

use std::cmp::Ordering;

use super::{FrameContext, Renderable};
use crate::colors::Color;
use crate::projection;
use crate::render::Canvas;
use crate::world::{Direction, WorldTile};

/// Colour of every label the scene overlay draws.
const LABEL_COLOR: Color = Color::WHITE;

/// Draws onto tiles in the scene, in three independently toggled passes:
/// transports, the collision debug view, then the path itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct SceneOverlay;

impl Renderable for SceneOverlay {
    fn name(&self) -> &'static str {
        "scene tiles"
    }

    fn draw(&self, frame: &FrameContext<'_>, canvas: &mut dyn Canvas) {
        let settings = frame.settings;
        if settings.draw_transports {
            draw_transports(frame, canvas);
        }
        if settings.draw_collision_map {
            draw_collision_map(frame, canvas);
        }
        if settings.draw_tiles {
            draw_path(frame, canvas);
        }
    }
}

/// One symbol per destination: `+` leads up a plane, `-` down, `=` level.
pub fn plane_change_label(source: WorldTile, destinations: &[WorldTile]) -> String {
    destinations
        .iter()
        .map(|d| match d.plane.cmp(&source.plane) {
            Ordering::Greater => '+',
            Ordering::Less => '-',
            Ordering::Equal => '=',
        })
        .collect()
}

/// Letters of the directions a tile cannot be left through, in `nsew` order.
fn blocked_directions(frame: &FrameContext<'_>, tile: WorldTile) -> String {
    Direction::ALL
        .iter()
        .filter(|&&dir| !frame.collision.passable(tile.x, tile.y, tile.plane, dir))
        .map(Direction::letter)
        .collect()
}

fn draw_transports(frame: &FrameContext<'_>, canvas: &mut dyn Canvas) {
    let plane = frame.host.current_plane();
    let color = frame.settings.transport_color;

    for (&source, destinations) in frame.transports.iter() {
        let Some(polygon) = projection::scene_polygon(frame.host, source, plane) else {
            continue;
        };
        canvas.fill_polygon(&polygon, color);
        let center = polygon.center();

        for &destination in destinations {
            if let Some(end) = projection::scene_center(frame.host, destination, plane) {
                canvas.draw_line(center, end, color);
            }
        }

        canvas.draw_text(&plane_change_label(source, destinations), center, LABEL_COLOR);
    }
}

fn draw_collision_map(frame: &FrameContext<'_>, canvas: &mut dyn Canvas) {
    let plane = frame.host.current_plane();

    let mut filled = 0;
    let mut labelled = 0;
    for tile in frame.host.scene_tiles(plane) {
        let Some(polygon) = projection::scene_polygon(frame.host, tile, plane) else {
            continue;
        };

        let blocked = blocked_directions(frame, tile);
        match blocked.len() {
            0 => {}
            4 => {
                canvas.fill_polygon(&polygon, frame.settings.collision_color);
                filled += 1;
            }
            _ => {
                canvas.draw_text_centered(&blocked, polygon.center(), LABEL_COLOR);
                labelled += 1;
            }
        }
    }
    log::trace!("scene: {filled} blocked tiles, {labelled} partially blocked");
}

fn draw_path(frame: &FrameContext<'_>, canvas: &mut dyn Canvas) {
    let Some(active) = frame.active_path() else {
        return;
    };
    let plane = frame.host.current_plane();
    let color = active.color(frame.settings).half_alpha();
    let counter = frame.settings.tile_counter;

    let mut drawn = 0;
    for (index, &tile) in active.tiles.iter().enumerate() {
        let Some(polygon) = projection::scene_polygon(frame.host, tile, plane) else {
            continue;
        };
        canvas.fill_polygon(&polygon, color);
        drawn += 1;

        if let Some(label) = counter.label(index, active.len()) {
            canvas.draw_text_centered(&label.to_string(), polygon.center(), LABEL_COLOR);
        }
    }
    log::trace!("scene: {drawn}/{} path tiles", active.len());
}
