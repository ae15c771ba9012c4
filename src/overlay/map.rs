//! Path and transport overlay for the world map.

use super::{FrameContext, Renderable};
use crate::clipper::{clip_line, Segment, ViewportClipRegion};
use crate::colors::Color;
use crate::projection::{self, Host};
use crate::render::Canvas;
use crate::world::WorldTile;

/// Draws transport links as lines and path tiles as filled one-tile
/// rectangles on the world map, kept inside the part of the map no sub-panel
/// covers.
#[derive(Clone, Copy, Debug, Default)]
pub struct MapOverlay;

impl Renderable for MapOverlay {
    fn name(&self) -> &'static str {
        "world map"
    }

    fn draw(&self, frame: &FrameContext<'_>, canvas: &mut dyn Canvas) {
        let settings = frame.settings;
        if !settings.draw_map {
            return;
        }
        let Some(map_bounds) = frame.host.world_map_bounds() else {
            log::trace!("world map closed");
            return;
        };

        let region = ViewportClipRegion::with_obscured(map_bounds, frame.host.obscuring_panels());

        if settings.draw_transports {
            let links = draw_transports(frame, &region, settings.transport_color, canvas);
            log::trace!("world map: {links} transport links");
        }

        let Some(active) = frame.active_path() else {
            return;
        };
        let color = active.color(settings);
        let drawn = active
            .tiles
            .iter()
            .filter(|&&tile| draw_tile(frame.host, &region, tile, color, canvas))
            .count();
        log::trace!("world map: {drawn}/{} path tiles", active.len());
    }
}

fn draw_transports(
    frame: &FrameContext<'_>,
    region: &ViewportClipRegion,
    color: Color,
    canvas: &mut dyn Canvas,
) -> usize {
    let Some(bounds) = region.bounds() else {
        return 0;
    };

    let mut drawn = 0;
    for (&source, destinations) in frame.transports.iter() {
        let Some(a) = projection::map_point(frame.host, source) else {
            continue;
        };
        for &destination in destinations {
            let Some(b) = projection::map_point(frame.host, destination) else {
                continue;
            };
            if let Some(clipped) = clip_line(Segment::new(a, b), &bounds) {
                canvas.draw_line(clipped.start, clipped.end, color);
                drawn += 1;
            }
        }
    }
    drawn
}

fn draw_tile(
    host: &dyn Host,
    region: &ViewportClipRegion,
    tile: WorldTile,
    color: Color,
    canvas: &mut dyn Canvas,
) -> bool {
    let Some((anchor, rect)) = projection::map_footprint(host, tile) else {
        return false;
    };
    if !region.contains(anchor.x, anchor.y) {
        return false;
    }
    canvas.fill_rect(rect, color);
    true
}
