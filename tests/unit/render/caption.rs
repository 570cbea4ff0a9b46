//! Tests for bitmap captions

#[cfg(test)]
mod tests {
    use kochflake::render::CoverageMask;
    use kochflake::render::caption::{GLYPH_HEIGHT, draw_text, text_width};

    // Tests width accounts for one blank font pixel between glyphs
    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 3), 0);
        assert_eq!(text_width("1", 1), 3);
        assert_eq!(text_width("LEVEL 5", 1), 27);
        assert_eq!(text_width("LEVEL 5", 2), 54);
    }

    // Tests each font pixel becomes a scale x scale block
    #[test]
    fn test_draw_single_glyph() {
        let mut mask = CoverageMask::new(20, 20);

        draw_text(&mut mask, "1", 2, 3, 2);

        // "1" lights 8 font pixels
        assert_eq!(mask.covered_pixels(), 8 * 4);
        assert!((mask.coverage(4, 3) - 1.0).abs() < f32::EPSILON);
        assert!(mask.coverage(2, 3).abs() < f32::EPSILON);
        assert!(mask.coverage(2, 3 + 2 * (GLYPH_HEIGHT - 1)) > 0.0);
    }

    // Tests lowercase letters share the uppercase glyphs and unknown characters stay blank
    #[test]
    fn test_glyph_lookup() {
        let mut upper = CoverageMask::new(40, 10);
        draw_text(&mut upper, "LEVEL", 0, 0, 1);

        let mut lower = CoverageMask::new(40, 10);
        draw_text(&mut lower, "level", 0, 0, 1);
        assert_eq!(upper.covered_pixels(), lower.covered_pixels());

        let mut unknown = CoverageMask::new(40, 10);
        draw_text(&mut unknown, "?#", 0, 0, 1);
        assert_eq!(unknown.covered_pixels(), 0);
    }

    // Tests text running past the mask edge is clipped
    #[test]
    fn test_draw_clips_to_mask() {
        let mut mask = CoverageMask::new(5, 4);

        draw_text(&mut mask, "888", 1, 1, 2);

        assert!(mask.covered_pixels() > 0);
        assert!(mask.covered_pixels() <= 5 * 4);
    }
}
