//! Points in the plane and the directed segments between them

use std::ops::{Add, Mul, Sub};

/// A point (or displacement) in the plane
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// The coordinate origin
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a point from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Self) -> f64 {
        (other - self).norm()
    }

    /// Length of the vector from the origin to this point
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Component-wise comparison within an absolute tolerance
    pub const fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// A directed straight line from `start` to `end`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Where the segment begins
    pub start: Point,
    /// Where the segment ends
    pub end: Point,
}

impl Segment {
    /// Create a segment between two points
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Euclidean length of the segment
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// The same segment with both endpoints multiplied by `factor`
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.start * factor, self.end * factor)
    }

    /// Endpoint-wise comparison within an absolute tolerance
    pub const fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.start.approx_eq(other.start, tolerance) && self.end.approx_eq(other.end, tolerance)
    }
}

impl From<(Point, Point)> for Segment {
    fn from((start, end): (Point, Point)) -> Self {
        Self::new(start, end)
    }
}
