//! A tiny bitmap font covering the characters overlay labels use.
//!
//! Glyphs are 3x5 cells drawn at [`SCALE`] pixels per cell. Digits cover the
//! tile counters, `+ - =` the transport plane markers and `n s e w` the
//! collision labels.

pub const GLYPH_COLUMNS: i32 = 3;
pub const GLYPH_ROWS: i32 = 5;
pub const SCALE: i32 = 2;
/// Horizontal distance between consecutive glyph origins, in pixels.
pub const ADVANCE: i32 = (GLYPH_COLUMNS + 1) * SCALE;
/// Glyph height above the baseline, in pixels.
pub const HEIGHT: i32 = GLYPH_ROWS * SCALE;

/// Rows top to bottom; bit 2 is the leftmost column.
pub fn glyph(c: char) -> Option<[u8; 5]> {
    let rows = match c {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        '+' => [0b000, 0b010, 0b111, 0b010, 0b000],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '=' => [0b000, 0b111, 0b000, 0b111, 0b000],
        'n' => [0b000, 0b110, 0b101, 0b101, 0b101],
        's' => [0b011, 0b100, 0b010, 0b001, 0b110],
        'e' => [0b010, 0b101, 0b111, 0b100, 0b011],
        'w' => [0b101, 0b101, 0b101, 0b111, 0b101],
        ' ' => [0; 5],
        _ => return None,
    };
    Some(rows)
}

/// Width of `text` in pixels, without trailing spacing.
pub fn text_width(text: &str) -> i32 {
    let count = text.chars().count() as i32;
    if count == 0 {
        0
    } else {
        count * ADVANCE - SCALE
    }
}
