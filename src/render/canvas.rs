use crate::colors::Color;
use crate::math::polygon::Polygon;
use crate::math::rect::Rect;
use crate::math::vec2::Vec2;

/// The drawing operations an overlay may issue.
///
/// Every call carries its colour; there is no current-colour state to leak
/// between draws.
pub trait Canvas {
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn fill_polygon(&mut self, polygon: &Polygon, color: Color);

    /// Draws `text` with its baseline at `at.y`, starting at `at.x`.
    fn draw_text(&mut self, text: &str, at: Vec2, color: Color);

    /// Advance width of `text` in screen units.
    fn text_width(&self, text: &str) -> f32;

    /// Fills a `width` x `height` rectangle centred on `center`, rotated by
    /// `angle` radians about its centre.
    fn fill_rotated_rect(&mut self, center: Vec2, width: f32, height: f32, angle: f32, color: Color) {
        let half = Vec2::new(width / 2.0, height / 2.0);
        let corners = [
            Vec2::new(-half.x, -half.y),
            Vec2::new(half.x, -half.y),
            Vec2::new(half.x, half.y),
            Vec2::new(-half.x, half.y),
        ]
        .map(|offset| (center + offset).rotate_about(center, angle));
        self.fill_polygon(&Polygon::new(corners.to_vec()), color);
    }

    /// Draws `text` horizontally centred on `center.x`, baseline at `center.y`.
    fn draw_text_centered(&mut self, text: &str, center: Vec2, color: Color) {
        let x = center.x - self.text_width(text) / 2.0;
        self.draw_text(text, Vec2::new(x, center.y), color);
    }
}
