//! Snowflake assembly from three Koch curves

use crate::algorithm::koch::{segment_count, subdivide};
use crate::geometry::{Curve, Point};

const HALF_SQRT_3: f64 = 0.866_025_403_784_438_6;

/// Vertices of the starting equilateral triangle, counter-clockwise from the origin
pub const fn triangle_vertices(size: f64) -> [Point; 3] {
    [
        Point::ORIGIN,
        Point::new(size, 0.0),
        Point::new(size / 2.0, size * HALF_SQRT_3),
    ]
}

/// Number of segments in a snowflake of the given level
///
/// Returns `None` when the count does not fit in `usize`.
pub const fn expected_segment_count(level: u32) -> Option<usize> {
    match segment_count(level) {
        Some(per_side) => per_side.checked_mul(3),
        None => None,
    }
}

/// Build the closed Koch snowflake outline for a triangle of side `size`
///
/// The three sides are subdivided independently and concatenated in order, so the
/// result is continuous and ends exactly at its starting point.
pub fn build_snowflake(level: u32, size: f64) -> Curve {
    let [a, b, c] = triangle_vertices(size);

    [(a, b), (b, c), (c, a)]
        .into_iter()
        .flat_map(|(start, end)| subdivide(start, end, level))
        .collect()
}
