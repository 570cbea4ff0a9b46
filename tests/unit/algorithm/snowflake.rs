//! Tests for snowflake assembly and its geometric invariants

#[cfg(test)]
mod tests {
    use kochflake::algorithm::snowflake::{
        build_snowflake, expected_segment_count, triangle_vertices,
    };
    use kochflake::geometry::{Point, Segment};

    const TOLERANCE: f64 = 1e-9;

    // Tests the starting triangle is equilateral and counter-clockwise
    #[test]
    fn test_triangle_vertices() {
        let [a, b, c] = triangle_vertices(300.0);

        assert_eq!(a, Point::ORIGIN);
        assert_eq!(b, Point::new(300.0, 0.0));
        assert!((a.distance(c) - 300.0).abs() < TOLERANCE);
        assert!((b.distance(c) - 300.0).abs() < TOLERANCE);
        assert!(c.y > 0.0);
    }

    // Tests level zero is exactly the triangle edges in order
    #[test]
    fn test_level_zero_is_triangle() {
        let [a, b, c] = triangle_vertices(10.0);
        let curve = build_snowflake(0, 10.0);

        assert_eq!(
            curve.segments(),
            &[Segment::new(a, b), Segment::new(b, c), Segment::new(c, a)]
        );
    }

    // Tests the segment count is 3 * 4^level
    #[test]
    fn test_segment_count() {
        for level in 0..=6 {
            let curve = build_snowflake(level, 1.0);
            assert_eq!(curve.len(), 3 * 4usize.pow(level));
            assert_eq!(expected_segment_count(level), Some(curve.len()));
        }
        assert_eq!(expected_segment_count(u32::MAX), None);
    }

    // Tests the outline is closed and continuous
    #[test]
    fn test_closed_and_continuous() {
        for level in 0..=5 {
            let curve = build_snowflake(level, 300.0);
            assert!(curve.is_closed(TOLERANCE), "level {level} not closed");
            assert!(curve.is_continuous(TOLERANCE), "level {level} not continuous");
        }
    }

    // Tests the perimeter grows by 4/3 per level
    #[test]
    fn test_perimeter_closed_form() {
        let size = 300.0;
        for level in 0..=5 {
            let expected = 3.0 * size * (4.0f64 / 3.0).powi(level as i32);
            let perimeter = build_snowflake(level, size).length();
            assert!(
                (perimeter - expected).abs() < 1e-6,
                "level {level}: {perimeter} vs {expected}"
            );
        }
    }

    // Tests the enclosed area matches the closed form, which holds only for outward bumps
    #[test]
    fn test_area_closed_form() {
        let size = 9.0;
        let triangle_area = 3f64.sqrt() / 4.0 * size * size;

        for level in 0..=5 {
            let expected =
                triangle_area * (8.0 / 5.0 - 3.0 / 5.0 * (4.0f64 / 9.0).powi(level as i32));
            let area = build_snowflake(level, size).area();
            assert!(
                (area - expected).abs() < 1e-9,
                "level {level}: {area} vs {expected}"
            );
        }
    }

    // Tests bumps on the base edge point away from the interior
    #[test]
    fn test_bumps_point_outward() {
        let bounds = build_snowflake(1, 3.0).bounds().unwrap();

        // Base edge bump dips below the x axis; the apex stays the original top vertex
        assert!((bounds.min.y + 3f64.sqrt() / 2.0).abs() < 1e-9);
        assert!((bounds.max.y - 3f64.sqrt() * 1.5).abs() < 1e-9);
    }

    // Tests scaling the triangle scales every coordinate
    #[test]
    fn test_scale_invariance() {
        let level = 3;
        let base = build_snowflake(level, 1.0);
        let factor = 37.5;
        let scaled = build_snowflake(level, factor);

        assert_eq!(base.len(), scaled.len());
        for (expected, actual) in base.scaled(factor).iter().zip(scaled.iter()) {
            assert!(expected.approx_eq(actual, 1e-9));
        }
    }

    // Tests identical inputs produce identical curves
    #[test]
    fn test_deterministic() {
        assert_eq!(build_snowflake(4, 123.0), build_snowflake(4, 123.0));
    }
}
