//! Koch curve subdivision
//!
//! Each application of the rule splits a segment into thirds and erects an equilateral bump
//! on the middle third, turning one segment into four. The bump sits to the right of the
//! travel direction, so a counter-clockwise polygon grows outwards.

use crate::geometry::{Point, Segment};

const COS_60: f64 = 0.5;
const SIN_60: f64 = 0.866_025_403_784_438_6;

/// Number of segments produced by subdividing one segment `level` times
///
/// Returns `None` when the count does not fit in `usize`.
pub const fn segment_count(level: u32) -> Option<usize> {
    4usize.checked_pow(level)
}

/// The five path points of one subdivision step from `start` to `end`
///
/// Returned in path order: the start, the first third, the bump apex, the second third
/// and the end.
pub fn bump_points(start: Point, end: Point) -> [Point; 5] {
    let dx = (end.x - start.x) / 3.0;
    let dy = (end.y - start.y) / 3.0;

    let first_third = Point::new(start.x + dx, start.y + dy);
    let second_third = Point::new(2.0f64.mul_add(dx, start.x), 2.0f64.mul_add(dy, start.y));

    // (dx, dy) rotated by -60 degrees, anchored at the first third
    let apex = Point::new(
        dy.mul_add(SIN_60, dx.mul_add(COS_60, first_third.x)),
        dy.mul_add(COS_60, (-dx).mul_add(SIN_60, first_third.y)),
    );

    [start, first_third, apex, second_third, end]
}

/// Replace the segment `start → end` with its Koch curve at the given depth
///
/// Level 0 returns the segment unchanged; every further level multiplies the segment
/// count by four. Segments come back in path order from `start` to `end`.
pub fn subdivide(start: Point, end: Point, level: u32) -> Vec<Segment> {
    if level == 0 {
        return vec![Segment::new(start, end)];
    }

    let points = bump_points(start, end);
    let mut segments = Vec::with_capacity(segment_count(level).unwrap_or(0));
    for pair in points.windows(2) {
        if let [from, to] = *pair {
            segments.extend(subdivide(from, to, level - 1));
        }
    }
    segments
}

/// Same output as [`subdivide`], built with an explicit work stack
///
/// Avoids call-stack growth proportional to `level`, for callers that lift the usual
/// level cap.
pub fn subdivide_iterative(start: Point, end: Point, level: u32) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(segment_count(level).unwrap_or(0));
    let mut pending = vec![(start, end, level)];

    while let Some((from, to, remaining)) = pending.pop() {
        if remaining == 0 {
            segments.push(Segment::new(from, to));
            continue;
        }

        let points = bump_points(from, to);
        // Reversed so the first sub-segment is popped first
        for pair in points.windows(2).rev() {
            if let [a, b] = *pair {
                pending.push((a, b, remaining - 1));
            }
        }
    }

    segments
}
