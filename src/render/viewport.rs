//! Fit-to-canvas transform with equal axis scaling
//!
//! Curve space has y pointing up; pixel space has y pointing down with the origin at the
//! top-left corner. Pixel `(col, row)` covers the square `[col, col + 1) x [row, row + 1)`.

use crate::geometry::{Bounds, Point};
use crate::io::error::{Result, computation_error, invalid_parameter};

/// Uniform scale and translation from curve space into a pixel canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    scale: f64,
    origin: Point,
    canvas_height: f64,
}

impl Viewport {
    /// Fit `bounds` into a `width` x `height` canvas, centred, keeping `margin` pixels free
    ///
    /// Both axes share one scale factor so shapes are not distorted.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The canvas is not larger than twice the margin in both directions
    /// - The bounds have no extent or are not finite
    pub fn fit(bounds: &Bounds, width: u32, height: u32, margin: u32) -> Result<Self> {
        let usable_width = width.saturating_sub(margin.saturating_mul(2));
        let usable_height = height.saturating_sub(margin.saturating_mul(2));
        if usable_width == 0 || usable_height == 0 {
            return Err(invalid_parameter(
                "canvas",
                &format!("{width}x{height}"),
                &format!("must be larger than twice the margin of {margin}px"),
            ));
        }

        let extent = bounds.width().max(bounds.height());
        if !extent.is_finite() || extent <= 0.0 {
            return Err(computation_error(
                "viewport fit",
                &format!("curve extent {extent} cannot be scaled"),
            ));
        }

        let scale = (f64::from(usable_width) / bounds.width().max(f64::MIN_POSITIVE))
            .min(f64::from(usable_height) / bounds.height().max(f64::MIN_POSITIVE));

        // Pixel position of the curve-space origin, chosen so the bounds centre lands on
        // the canvas centre
        let center = bounds.center();
        let origin = Point::new(
            (-center.x).mul_add(scale, f64::from(width) / 2.0),
            (-center.y).mul_add(scale, f64::from(height) / 2.0),
        );

        Ok(Self {
            scale,
            origin,
            canvas_height: f64::from(height),
        })
    }

    /// Pixels per curve unit
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Map a curve-space point to continuous pixel coordinates
    pub fn to_pixel(&self, point: Point) -> Point {
        let x = point.x.mul_add(self.scale, self.origin.x);
        let y_up = point.y.mul_add(self.scale, self.origin.y);
        Point::new(x, self.canvas_height - y_up)
    }
}
