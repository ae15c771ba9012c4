//! The visible area of the world map for one frame.

use crate::math::rect::Rect;

/// The map widget's rectangle with every open obscuring panel cut out.
///
/// Stored as disjoint rectangles so that containment stays exact while the
/// bounding rectangle still reflects what was removed: a panel covering a
/// full-height strip on one side shrinks the bounds, one in a corner does not.
/// Rebuilt every frame, since panels open and close between frames.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewportClipRegion {
    pieces: Vec<Rect>,
}

impl ViewportClipRegion {
    pub fn new(base: Rect) -> Self {
        let pieces = if base.is_empty() { Vec::new() } else { vec![base] };
        Self { pieces }
    }

    /// Builds the region for `base` minus each of `obscuring`.
    pub fn with_obscured<I>(base: Rect, obscuring: I) -> Self
    where
        I: IntoIterator<Item = Rect>,
    {
        let mut region = Self::new(base);
        for panel in obscuring {
            region.subtract(&panel);
        }
        region
    }

    pub fn subtract(&mut self, hole: &Rect) {
        if hole.is_empty() {
            return;
        }
        self.pieces = self
            .pieces
            .iter()
            .flat_map(|piece| piece.subtract(hole))
            .collect();
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.pieces.iter().any(|piece| piece.contains(x, y))
    }

    /// Bounding rectangle of what is left, or `None` if nothing is visible.
    pub fn bounds(&self) -> Option<Rect> {
        let (first, rest) = self.pieces.split_first()?;
        Some(rest.iter().fold(*first, |acc, piece| acc.union(piece)))
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}
