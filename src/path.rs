//! Path snapshots handed to the overlays by the pathfinder.
//!
//! The pathfinder replaces the current [`Path`] wholesale whenever a request
//! starts or improves; overlays only ever see an immutable snapshot. The
//! computing flag and its sequence live in the same enum variant, so a reader
//! can never pair an old flag with a new sequence.

use crate::colors::Color;
use crate::settings::RenderSettings;
use crate::world::WorldTile;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Path {
    /// Computation finished; the full ordered route.
    Finalized(Vec<WorldTile>),
    /// Still computing; the best candidate so far, if one exists yet.
    InProgress(Option<Vec<WorldTile>>),
}

impl Path {
    pub fn is_computing(&self) -> bool {
        matches!(self, Path::InProgress(_))
    }

    /// The finished route, or `None` while computation is still running.
    pub fn final_sequence(&self) -> Option<&[WorldTile]> {
        match self {
            Path::Finalized(tiles) => Some(tiles),
            Path::InProgress(_) => None,
        }
    }

    /// The current best candidate, or `None` when finished or nothing is known yet.
    pub fn best_effort_sequence(&self) -> Option<&[WorldTile]> {
        match self {
            Path::InProgress(best) => best.as_deref(),
            Path::Finalized(_) => None,
        }
    }

    /// Picks the one sequence that should be drawn this frame.
    pub fn active(&self) -> Option<ActivePath<'_>> {
        let (tiles, computing) = match self {
            Path::Finalized(tiles) => (tiles.as_slice(), false),
            Path::InProgress(Some(best)) => (best.as_slice(), true),
            Path::InProgress(None) => return None,
        };
        if tiles.is_empty() {
            return None;
        }
        Some(ActivePath { tiles, computing })
    }
}

/// The sequence selected for rendering, along with which state it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActivePath<'a> {
    pub tiles: &'a [WorldTile],
    pub computing: bool,
}

impl ActivePath<'_> {
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Path colour for a finished route, in-progress colour otherwise.
    pub fn color(&self, settings: &RenderSettings) -> Color {
        if self.computing {
            settings.path_calculating_color
        } else {
            settings.path_color
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiles(n: i32) -> Vec<WorldTile> {
        (0..n).map(|i| WorldTile::new(i, 0, 0)).collect()
    }

    #[test]
    fn finalized_selects_full_sequence() {
        let path = Path::Finalized(tiles(3));
        let active = path.active().unwrap();
        assert_eq!(active.len(), 3);
        assert!(!active.computing);
        assert!(!path.is_computing());
        assert_eq!(path.best_effort_sequence(), None);
    }

    #[test]
    fn in_progress_selects_best_effort() {
        let path = Path::InProgress(Some(tiles(2)));
        let active = path.active().unwrap();
        assert_eq!(active.tiles, tiles(2).as_slice());
        assert!(active.computing);
        assert_eq!(path.final_sequence(), None);
    }

    #[test]
    fn nothing_to_draw_before_first_candidate() {
        assert_eq!(Path::InProgress(None).active(), None);
        assert_eq!(Path::Finalized(Vec::new()).active(), None);
    }

    #[test]
    fn colour_follows_state() {
        let settings = RenderSettings::default();
        let done = Path::Finalized(tiles(1));
        let busy = Path::InProgress(Some(tiles(1)));
        assert_eq!(done.active().unwrap().color(&settings), settings.path_color);
        assert_eq!(
            busy.active().unwrap().color(&settings),
            settings.path_calculating_color
        );
    }
}
