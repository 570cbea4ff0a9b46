//! Planar geometry primitives shared by curve construction and rendering

/// Ordered segment sequences and their measurements
pub mod curve;
/// Points and directed segments
pub mod point;

pub use curve::{Bounds, Curve};
pub use point::{Point, Segment};
