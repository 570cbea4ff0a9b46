//! Tests for configuration constants and their relationships

#[cfg(test)]
mod tests {
    use kochflake::io::configuration::{
        ANIMATION_PREFIX, BACKGROUND_COLOR, DEFAULT_SIDE_LENGTH, FILL_COLOR, FINAL_FRAME_HOLD,
        IMAGE_HEIGHT, IMAGE_MARGIN, IMAGE_WIDTH, LEVEL_CEILING, MAX_RECURSION_LEVEL, OUTPUT_DIR,
        OUTPUT_PREFIX, STROKE_COLOR,
    };

    // Tests the default level cap and its ceiling
    #[test]
    fn test_level_limits() {
        assert_eq!(MAX_RECURSION_LEVEL, 7);
        assert!(MAX_RECURSION_LEVEL <= LEVEL_CEILING);
    }

    // Tests the default triangle size
    #[test]
    fn test_default_side_length() {
        assert!((DEFAULT_SIDE_LENGTH - 300.0).abs() < f64::EPSILON);
    }

    // Tests the default canvas leaves room inside the margin
    #[test]
    fn test_canvas_exceeds_margin() {
        assert!(IMAGE_WIDTH > IMAGE_MARGIN * 2);
        assert!(IMAGE_HEIGHT > IMAGE_MARGIN * 2);
    }

    // Tests outline is opaque and fill is translucent
    #[test]
    fn test_colours() {
        assert_eq!(STROKE_COLOR[3], 255);
        assert_eq!(FILL_COLOR[3], 51);
        assert_eq!(BACKGROUND_COLOR, [255, 255, 255, 255]);
    }

    // Tests filesystem safety of output names
    #[test]
    fn test_output_names_are_filesystem_safe() {
        for name in [OUTPUT_DIR, OUTPUT_PREFIX, ANIMATION_PREFIX] {
            assert!(!name.is_empty());
            for ch in name.chars() {
                assert!(
                    ch.is_ascii_alphanumeric() || ch == '_' || ch == '-',
                    "Output name contains invalid character: {ch}"
                );
            }
        }
        assert!(OUTPUT_PREFIX.ends_with('_'));
        assert!(ANIMATION_PREFIX.ends_with('_'));
    }

    // Tests the final animation frame is held longer than the others
    #[test]
    fn test_final_frame_hold() {
        assert!(FINAL_FRAME_HOLD > 1);
    }
}
