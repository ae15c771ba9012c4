//! Liang–Barsky line clipping.
//!
//! The segment is treated parametrically as `P(t) = P0 + t * (P1 - P0)` for
//! `t` in `[0, 1]`. Each rectangle edge contributes one inequality
//! `p * t <= q`, where `p` is the segment's direction component across that
//! edge and `q` the distance from `P0` to the edge. Edges with `p < 0` are
//! entry edges and raise `t0`; edges with `p > 0` are exit edges and lower
//! `t1`. The segment survives if `t0 <= t1` after all four.

use crate::math::rect::Rect;
use crate::math::vec2::Vec2;

/// A directed line segment in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// The point at parameter `t` along the segment.
    pub fn at(&self, t: f32) -> Vec2 {
        self.start.lerp(self.end, t)
    }
}

/// One edge inequality `p * t <= q`.
#[derive(Clone, Copy, Debug)]
struct EdgeCheck {
    p: f32,
    q: f32,
}

/// Clips `segment` to `bounds`.
///
/// Returns the part of the segment inside the rectangle, keeping its
/// direction, or `None` if no part of it is inside.
pub fn clip_line(segment: Segment, bounds: &Rect) -> Option<Segment> {
    clip_parameters(segment, bounds).map(|(t0, t1)| Segment::new(segment.at(t0), segment.at(t1)))
}

/// The `(t0, t1)` range of `segment` that lies inside `bounds`.
///
/// Always satisfies `0 <= t0 <= t1 <= 1` when present.
pub fn clip_parameters(segment: Segment, bounds: &Rect) -> Option<(f32, f32)> {
    let Segment { start, end } = segment;
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    let edges = [
        EdgeCheck { p: -dx, q: start.x - bounds.min_x() },
        EdgeCheck { p: dx, q: bounds.max_x() - start.x },
        EdgeCheck { p: -dy, q: start.y - bounds.min_y() },
        EdgeCheck { p: dy, q: bounds.max_y() - start.y },
    ];

    let mut t0 = 0.0f32;
    let mut t1 = 1.0f32;

    for EdgeCheck { p, q } in edges {
        if p == 0.0 {
            // Parallel to this edge: either wholly outside it or unconstrained.
            if q < 0.0 {
                return None;
            }
            continue;
        }

        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some((t0, t1))
}
