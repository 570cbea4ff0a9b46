//! Ordered segment sequences with the measurements needed for validation and rendering
//!
//! A [`Curve`] is a plain value: it is built once by the construction routines and never
//! mutated afterwards. Segment order matters only for traversal, so closure and continuity
//! are checked explicitly rather than assumed.

use crate::geometry::point::{Point, Segment};

/// Axis-aligned rectangle enclosing a set of points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimum corner (inclusive)
    pub min: Point,
    /// Maximum corner (inclusive)
    pub max: Point,
}

impl Bounds {
    /// Degenerate bounds containing a single point
    pub const fn from_point(point: Point) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Grow the bounds so they contain `point`
    pub const fn include(&mut self, point: Point) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    /// Horizontal extent
    pub const fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Vertical extent
    pub const fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Midpoint of the rectangle
    pub const fn center(&self) -> Point {
        Point::new(
            f64::midpoint(self.min.x, self.max.x),
            f64::midpoint(self.min.y, self.max.y),
        )
    }

    /// Check if a point lies inside or on the boundary
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// An ordered sequence of segments
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Curve {
    segments: Vec<Segment>,
}

impl Curve {
    /// Wrap an already ordered list of segments
    pub const fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// All segments in traversal order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Consume the curve, returning its segments
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// Number of segments
    pub const fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if the curve has no segments
    pub const fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterate over segments in traversal order
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Start point of the first segment
    pub fn first_point(&self) -> Option<Point> {
        self.segments.first().map(|segment| segment.start)
    }

    /// End point of the last segment
    pub fn last_point(&self) -> Option<Point> {
        self.segments.last().map(|segment| segment.end)
    }

    /// Polyline vertices: every segment start followed by the final end point
    ///
    /// Only meaningful for continuous curves, where each end coincides with the next start.
    pub fn vertices(&self) -> Vec<Point> {
        let mut vertices: Vec<Point> = self.segments.iter().map(|s| s.start).collect();
        if let Some(last) = self.last_point() {
            vertices.push(last);
        }
        vertices
    }

    /// Check that every segment starts where the previous one ended
    pub fn is_continuous(&self, tolerance: f64) -> bool {
        self.segments
            .windows(2)
            .all(|pair| match pair {
                [previous, next] => previous.end.approx_eq(next.start, tolerance),
                _ => true,
            })
    }

    /// Check that the curve ends where it starts
    ///
    /// An empty curve is not closed.
    pub fn is_closed(&self, tolerance: f64) -> bool {
        match (self.first_point(), self.last_point()) {
            (Some(first), Some(last)) => first.approx_eq(last, tolerance),
            _ => false,
        }
    }

    /// Total length of all segments
    pub fn length(&self) -> f64 {
        self.segments.iter().map(Segment::length).sum()
    }

    /// Enclosed area by the shoelace formula
    ///
    /// Orientation is ignored. The result is only meaningful for closed, non-self-intersecting
    /// curves.
    pub fn area(&self) -> f64 {
        let twice_signed: f64 = self
            .segments
            .iter()
            .map(|s| s.start.x.mul_add(s.end.y, -(s.end.x * s.start.y)))
            .sum();
        twice_signed.abs() / 2.0
    }

    /// Smallest axis-aligned rectangle containing every endpoint
    pub fn bounds(&self) -> Option<Bounds> {
        let mut points = self
            .segments
            .iter()
            .flat_map(|segment| [segment.start, segment.end]);
        let mut bounds = Bounds::from_point(points.next()?);
        for point in points {
            bounds.include(point);
        }
        Some(bounds)
    }

    /// The same curve with every coordinate multiplied by `factor`
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        self.segments.iter().map(|s| s.scaled(factor)).collect()
    }
}

impl FromIterator<Segment> for Curve {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self::from_segments(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Curve {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
