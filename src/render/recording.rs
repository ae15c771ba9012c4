use super::canvas::Canvas;
use super::font;
use crate::colors::Color;
use crate::math::polygon::Polygon;
use crate::math::rect::Rect;
use crate::math::vec2::Vec2;

/// One recorded canvas call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
    },
    Rect {
        rect: Rect,
        color: Color,
    },
    RotatedRect {
        center: Vec2,
        width: f32,
        height: f32,
        angle: f32,
        color: Color,
    },
    Polygon {
        polygon: Polygon,
        color: Color,
    },
    Text {
        text: String,
        at: Vec2,
        color: Color,
    },
}

/// A canvas that keeps every call in order instead of drawing it.
///
/// Text is measured with the built-in bitmap font, so recorded label
/// positions match what [`PixelCanvas`](super::PixelCanvas) would draw.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, color } => Some((*from, *to, *color)),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = (Rect, Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Rect { rect, color } => Some((*rect, *color)),
            _ => None,
        })
    }

    pub fn polygons(&self) -> impl Iterator<Item = (&Polygon, Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Polygon { polygon, color } => Some((polygon, *color)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, Vec2)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, at, .. } => Some((text.as_str(), *at)),
            _ => None,
        })
    }

    pub fn rotated_rects(&self) -> impl Iterator<Item = (Vec2, f32, Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::RotatedRect {
                center, angle, color, ..
            } => Some((*center, *angle, *color)),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn fill_polygon(&mut self, polygon: &Polygon, color: Color) {
        self.commands.push(DrawCommand::Polygon {
            polygon: polygon.clone(),
            color,
        });
    }

    fn draw_text(&mut self, text: &str, at: Vec2, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            color,
        });
    }

    fn text_width(&self, text: &str) -> f32 {
        font::text_width(text) as f32
    }

    fn fill_rotated_rect(&mut self, center: Vec2, width: f32, height: f32, angle: f32, color: Color) {
        self.commands.push(DrawCommand::RotatedRect {
            center,
            width,
            height,
            angle,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centred_text_is_offset_by_half_width() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_text_centered("12", Vec2::new(50.0, 20.0), Color::WHITE);
        assert_eq!(canvas.texts().collect::<Vec<_>>(), vec![("12", Vec2::new(43.0, 20.0))]);
    }
}
