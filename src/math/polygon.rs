use super::rect::Rect;
use super::vec2::Vec2;

/// A closed outline in screen space, such as a scene tile's projected footprint.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub points: Vec<Vec2>,
}

impl Polygon {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// A polygon needs at least three points to cover any area.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 3
    }

    /// Axis-aligned bounding rectangle. Empty for a polygon with no points.
    pub fn bounds(&self) -> Rect {
        let Some(first) = self.points.first() else {
            return Rect::default();
        };
        let (mut min, mut max) = (*first, *first);
        for p in &self.points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Rect::from_corners(min, max)
    }

    /// Centre of the bounding rectangle, where labels are anchored.
    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }
}

impl From<Vec<Vec2>> for Polygon {
    fn from(points: Vec<Vec2>) -> Self {
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_of_diamond() {
        let diamond = Polygon::new(vec![
            Vec2::new(10.0, 0.0),
            Vec2::new(20.0, 5.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 5.0),
        ]);
        assert_eq!(diamond.bounds(), Rect::new(0.0, 0.0, 20.0, 10.0));
        assert_eq!(diamond.center(), Vec2::new(10.0, 5.0));
    }

    #[test]
    fn empty_polygon_has_empty_bounds() {
        let empty = Polygon::default();
        assert!(empty.is_degenerate());
        assert!(empty.bounds().is_empty());
    }
}
