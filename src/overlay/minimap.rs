//! Path overlay for the rotating minimap.

use super::{FrameContext, Renderable};
use crate::projection;
use crate::render::Canvas;

/// Path tiles further than this from the player are not drawn.
pub const MAX_DRAW_DISTANCE: i32 = 50;

/// Draws each nearby path tile on the viewed plane as a small square,
/// rotated with the minimap.
#[derive(Clone, Copy, Debug)]
pub struct MinimapOverlay {
    pub tile_width: f32,
    pub tile_height: f32,
    pub max_distance: i32,
}

impl Default for MinimapOverlay {
    fn default() -> Self {
        Self {
            tile_width: 4.0,
            tile_height: 4.0,
            max_distance: MAX_DRAW_DISTANCE,
        }
    }
}

impl Renderable for MinimapOverlay {
    fn name(&self) -> &'static str {
        "minimap"
    }

    fn draw(&self, frame: &FrameContext<'_>, canvas: &mut dyn Canvas) {
        if !frame.settings.draw_minimap {
            return;
        }
        let Some(active) = frame.active_path() else {
            return;
        };
        let Some(player) = frame.host.player_tile() else {
            log::debug!("minimap: no local player");
            return;
        };

        let plane = frame.host.current_plane();
        let angle = projection::minimap_rotation(frame.host);
        let color = active.color(frame.settings);

        let mut drawn = 0;
        for &tile in active.tiles {
            if tile.plane != plane || tile.distance_to(&player) >= self.max_distance {
                continue;
            }
            let Some(center) = projection::minimap_point(frame.host, tile) else {
                continue;
            };
            canvas.fill_rotated_rect(center, self.tile_width, self.tile_height, angle, color);
            drawn += 1;
        }
        log::trace!("minimap: {drawn}/{} path tiles", active.len());
    }
}
