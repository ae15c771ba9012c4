//! CPU framebuffer canvas.
//!
//! Owns an ARGB8888 colour buffer and rasterizes overlay primitives into it:
//! Bresenham lines, span-filled rectangles and polygons, and bitmap-font text.
//! Translucent colours are blended over what is already in the buffer.

use std::path::Path;

use super::canvas::Canvas;
use super::font;
use crate::colors::{self, Color};
use crate::math::polygon::Polygon;
use crate::math::rect::Rect;
use crate::math::vec2::Vec2;

pub struct PixelCanvas {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            color_buffer: vec![colors::BACKGROUND; (width * height) as usize],
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.color_buffer = vec![colors::BACKGROUND; (width * height) as usize];
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    /// Get the packed colour at (x, y), or None if out of bounds.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|i| self.color_buffer[i])
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some((y as u32 * self.width + x as u32) as usize)
        } else {
            None
        }
    }

    /// Blends `color` into the pixel at (x, y). Out-of-bounds writes are ignored.
    #[inline]
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.color_buffer[i] = color.blend_over(self.color_buffer[i]);
        }
    }

    /// Fills the pixel span `[x0, x1)` on row `y`, clamped to the buffer.
    #[inline]
    fn fill_span(&mut self, y: i32, x0: i32, x1: i32, color: Color) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let x0 = x0.max(0);
        let x1 = x1.min(self.width as i32);
        for x in x0..x1 {
            self.blend_pixel(x, y, color);
        }
    }

    /// Draws a line using Bresenham's algorithm.
    ///
    /// The error term tracks the distance between the ideal line and the
    /// current pixel; each step moves along the major axis and also along the
    /// minor axis once the accumulated error crosses half a pixel.
    pub fn draw_line_bresenham(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let x_incr_direction = if x0 < x1 { 1 } else { -1 };
        let y_incr_direction = if y0 < y1 { 1 } else { -1 };

        let mut err = dx - dy;
        let mut x = x0;
        let mut y = y0;

        loop {
            self.blend_pixel(x, y, color);
            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += x_incr_direction;
            }
            if e2 < dx {
                err += dx;
                y += y_incr_direction;
            }
        }
    }

    /// Even-odd scanline fill sampled at pixel centres.
    ///
    /// Each covered pixel is written exactly once, so translucent fills blend
    /// evenly with no seams. Works for concave outlines too.
    fn fill_polygon_scanline(&mut self, points: &[Vec2], color: Color) {
        let bounds = Polygon::new(points.to_vec()).bounds();
        let y_start = (bounds.min_y().floor() as i32).max(0);
        let y_end = (bounds.max_y().ceil() as i32).min(self.height as i32);

        let mut crossings: Vec<f32> = Vec::with_capacity(points.len());
        for y in y_start..y_end {
            let sample_y = y as f32 + 0.5;
            crossings.clear();

            for (i, a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                // Half-open on y so shared vertices are counted once.
                if (a.y <= sample_y) != (b.y <= sample_y) {
                    let t = (sample_y - a.y) / (b.y - a.y);
                    crossings.push(a.x + t * (b.x - a.x));
                }
            }

            crossings.sort_by(f32::total_cmp);
            for pair in crossings.chunks_exact(2) {
                let x0 = (pair[0] - 0.5).ceil() as i32;
                let x1 = (pair[1] - 0.5).ceil() as i32;
                self.fill_span(y, x0, x1, color);
            }
        }
    }

    /// Returns the buffer as bytes (ARGB8888, native endian), for SDL2 textures.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and any byte pattern is a valid u8; the
        // slice covers exactly the buffer's memory and borrows it from self.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            let argb = self.color_buffer[(y * self.width + x) as usize];
            let (r, g, b, a) = colors::unpack_argb(argb);
            image::Rgba([r, g, b, a])
        })
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), image::ImageError> {
        self.to_image()
            .save_with_format(path, image::ImageFormat::Png)
    }
}

impl Canvas for PixelCanvas {
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        let (from, to) = (from.round(), to.round());
        self.draw_line_bresenham(from.x as i32, from.y as i32, to.x as i32, to.y as i32, color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let rect = Rect::from_corners(
            Vec2::new(rect.min_x(), rect.min_y()),
            Vec2::new(rect.max_x(), rect.max_y()),
        );
        let x0 = rect.min_x().round() as i32;
        let x1 = rect.max_x().round() as i32;
        let y0 = (rect.min_y().round() as i32).max(0);
        let y1 = (rect.max_y().round() as i32).min(self.height as i32);
        for y in y0..y1 {
            self.fill_span(y, x0, x1, color);
        }
    }

    fn fill_polygon(&mut self, polygon: &Polygon, color: Color) {
        if polygon.is_degenerate() {
            return;
        }
        self.fill_polygon_scanline(&polygon.points, color);
    }

    fn draw_text(&mut self, text: &str, at: Vec2, color: Color) {
        let origin_x = at.x.round() as i32;
        let top = at.y.round() as i32 - font::HEIGHT;

        for (n, c) in text.chars().enumerate() {
            let Some(rows) = font::glyph(c) else {
                continue;
            };
            let glyph_x = origin_x + n as i32 * font::ADVANCE;
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..font::GLYPH_COLUMNS {
                    if bits & (0b100 >> col) == 0 {
                        continue;
                    }
                    let px = glyph_x + col * font::SCALE;
                    let py = top + row as i32 * font::SCALE;
                    for sy in 0..font::SCALE {
                        self.fill_span(py + sy, px, px + font::SCALE, color);
                    }
                }
            }
        }
    }

    fn text_width(&self, text: &str) -> f32 {
        font::text_width(text) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argb(c: Color) -> u32 {
        c.to_argb()
    }

    #[test]
    fn fill_rect_covers_exact_pixels() {
        let mut canvas = PixelCanvas::new(10, 10);
        canvas.clear(0xFF000000);
        canvas.fill_rect(Rect::new(2.0, 3.0, 4.0, 2.0), Color::RED);
        assert_eq!(canvas.pixel(2, 3), Some(argb(Color::RED)));
        assert_eq!(canvas.pixel(5, 4), Some(argb(Color::RED)));
        assert_eq!(canvas.pixel(6, 4), Some(0xFF000000));
        assert_eq!(canvas.pixel(2, 5), Some(0xFF000000));
    }

    #[test]
    fn fill_rect_clips_to_buffer() {
        let mut canvas = PixelCanvas::new(4, 4);
        canvas.fill_rect(Rect::new(-10.0, -10.0, 100.0, 100.0), Color::GREEN);
        assert!((0..4).all(|y| (0..4).all(|x| canvas.pixel(x, y) == Some(argb(Color::GREEN)))));
    }

    #[test]
    fn line_hits_both_endpoints() {
        let mut canvas = PixelCanvas::new(20, 20);
        canvas.draw_line(Vec2::new(1.0, 1.0), Vec2::new(15.0, 7.0), Color::WHITE);
        assert_eq!(canvas.pixel(1, 1), Some(argb(Color::WHITE)));
        assert_eq!(canvas.pixel(15, 7), Some(argb(Color::WHITE)));
    }

    #[test]
    fn translucent_polygon_blends_once_per_pixel() {
        let mut canvas = PixelCanvas::new(10, 10);
        canvas.clear(0xFF000000);
        let square = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ]);
        canvas.fill_polygon(&square, Color::WHITE.with_alpha(128));
        let expected = Color::WHITE.with_alpha(128).blend_over(0xFF000000);
        assert!((0..10).all(|y| (0..10).all(|x| canvas.pixel(x, y) == Some(expected))));
    }

    #[test]
    fn triangle_fill_leaves_outside_untouched() {
        let mut canvas = PixelCanvas::new(10, 10);
        canvas.clear(0xFF000000);
        let tri = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(0.0, 10.0),
        ]);
        canvas.fill_polygon(&tri, Color::BLUE);
        assert_eq!(canvas.pixel(1, 1), Some(argb(Color::BLUE)));
        assert_eq!(canvas.pixel(9, 9), Some(0xFF000000));
    }

    #[test]
    fn rotated_rect_quarter_turn_matches_plain_square() {
        let mut canvas = PixelCanvas::new(16, 16);
        canvas.clear(0xFF000000);
        canvas.fill_rotated_rect(
            Vec2::new(8.0, 8.0),
            4.0,
            4.0,
            std::f32::consts::FRAC_PI_2,
            Color::RED,
        );
        assert_eq!(canvas.pixel(6, 6), Some(argb(Color::RED)));
        assert_eq!(canvas.pixel(9, 9), Some(argb(Color::RED)));
        assert_eq!(canvas.pixel(10, 8), Some(0xFF000000));
    }

    #[test]
    fn text_paints_glyph_cells_above_baseline() {
        let mut canvas = PixelCanvas::new(20, 20);
        canvas.clear(0xFF000000);
        canvas.draw_text("-", Vec2::new(2.0, 12.0), Color::WHITE);
        // '-' is the middle row only: rows 6..8 of a glyph whose top is y = 2.
        assert_eq!(canvas.pixel(2, 6), Some(argb(Color::WHITE)));
        assert_eq!(canvas.pixel(7, 7), Some(argb(Color::WHITE)));
        assert_eq!(canvas.pixel(2, 2), Some(0xFF000000));
    }

    #[test]
    fn resize_reallocates_to_new_dimensions() {
        let mut canvas = PixelCanvas::new(4, 4);
        canvas.resize(6, 3);
        assert_eq!((canvas.width(), canvas.height()), (6, 3));
        assert_eq!(canvas.pixel(5, 2), Some(colors::BACKGROUND));
        assert_eq!(canvas.pixel(0, 3), None);
    }

    #[test]
    fn image_export_preserves_colours() {
        let mut canvas = PixelCanvas::new(2, 1);
        canvas.clear(Color::rgb(10, 20, 30).to_argb());
        let img = canvas.to_image();
        assert_eq!(img.get_pixel(1, 0).0, [10, 20, 30, 255]);
    }
}
