use super::vec2::Vec2;

/// An axis-aligned rectangle in screen space.
///
/// Containment is half-open: a point on the right or bottom edge is outside,
/// the same convention host widget bounds use.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds the smallest rectangle spanning both corners, in any order.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let min_x = a.x.min(b.x);
        let min_y = a.y.min(b.y);
        Self::new(min_x, min_y, a.x.max(b.x) - min_x, a.y.max(b.y) - min_y)
    }

    pub fn min_x(&self) -> f32 {
        self.x
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn min_y(&self) -> f32 {
        self.y
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.min_x() && x < self.max_x() && y >= self.min_y() && y < self.max_y()
    }

    /// Returns the overlapping part of two rectangles, if they overlap at all.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let min_x = self.min_x().max(other.min_x());
        let min_y = self.min_y().max(other.min_y());
        let max_x = self.max_x().min(other.max_x());
        let max_y = self.max_y().min(other.max_y());
        if max_x <= min_x || max_y <= min_y {
            return None;
        }
        Some(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }

    /// Returns the smallest rectangle covering both.
    pub fn union(&self, other: &Rect) -> Rect {
        let min_x = self.min_x().min(other.min_x());
        let min_y = self.min_y().min(other.min_y());
        let max_x = self.max_x().max(other.max_x());
        let max_y = self.max_y().max(other.max_y());
        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Removes `hole` from this rectangle.
    ///
    /// The remainder is returned as up to four disjoint rectangles: full-width
    /// bands above and below the hole, then the pieces left and right of it.
    pub fn subtract(&self, hole: &Rect) -> Vec<Rect> {
        let Some(cut) = self.intersection(hole) else {
            return vec![*self];
        };

        let mut pieces = Vec::with_capacity(4);
        if cut.min_y() > self.min_y() {
            pieces.push(Rect::new(self.x, self.y, self.width, cut.min_y() - self.min_y()));
        }
        if cut.max_y() < self.max_y() {
            pieces.push(Rect::new(
                self.x,
                cut.max_y(),
                self.width,
                self.max_y() - cut.max_y(),
            ));
        }
        if cut.min_x() > self.min_x() {
            pieces.push(Rect::new(self.x, cut.y, cut.min_x() - self.min_x(), cut.height));
        }
        if cut.max_x() < self.max_x() {
            pieces.push(Rect::new(cut.max_x(), cut.y, self.max_x() - cut.max_x(), cut.height));
        }
        pieces
    }
}
