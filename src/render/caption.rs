//! Blocky bitmap captions for labelling rendered images
//!
//! Glyphs are 3x5 font pixels, enough for level labels such as `LEVEL 5`.

use crate::render::raster::CoverageMask;

const GLYPH_WIDTH: usize = 3;
/// Height of a glyph in font pixels
pub const GLYPH_HEIGHT: usize = 5;

// One entry per row, top first; the leftmost font pixel is the highest of the three bits
const fn glyph(ch: char) -> Option<[u8; GLYPH_HEIGHT]> {
    let rows = match ch.to_ascii_uppercase() {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b010, 0b010, 0b010],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'E' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        ' ' => [0; GLYPH_HEIGHT],
        _ => return None,
    };
    Some(rows)
}

/// Width in pixels of `text` drawn at `scale`, with one blank font pixel between glyphs
pub fn text_width(text: &str, scale: usize) -> usize {
    let advance = (GLYPH_WIDTH + 1) * text.chars().count();
    advance.saturating_sub(1) * scale
}

/// Draw `text` with its top-left corner at `(left, top)`
///
/// Each font pixel becomes a `scale` x `scale` block. Characters without a glyph leave a
/// blank cell. Anything past the mask edge is clipped.
pub fn draw_text(mask: &mut CoverageMask, text: &str, left: usize, top: usize, scale: usize) {
    let cell = (GLYPH_WIDTH + 1) * scale;

    for (index, ch) in text.chars().enumerate() {
        let Some(rows) = glyph(ch) else {
            continue;
        };
        let origin = left + index * cell;

        for (row, bits) in rows.into_iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if (bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 1 {
                    mask.fill_rect(origin + col * scale, top + row * scale, scale, scale);
                }
            }
        }
    }
}
