//! Coverage masks for stroking segments and filling polygons
//!
//! Masks store one coverage value in `[0, 1]` per pixel, indexed `[row, col]`. Drawing
//! operations combine with existing coverage by taking the maximum, so overlapping strokes
//! never exceed full coverage and draw order does not matter.

use crate::geometry::Point;
use ndarray::Array2;

/// Per-pixel coverage accumulated by drawing operations
#[derive(Debug, Clone)]
pub struct CoverageMask {
    cells: Array2<f32>,
}

impl CoverageMask {
    /// Create an empty mask of `width` x `height` pixels
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            cells: Array2::zeros((height as usize, width as usize)),
        }
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Coverage at pixel `(col, row)`; zero outside the mask
    pub fn coverage(&self, col: usize, row: usize) -> f32 {
        self.cells.get([row, col]).copied().unwrap_or(0.0)
    }

    /// Number of pixels with any coverage
    pub fn covered_pixels(&self) -> usize {
        self.cells.iter().filter(|&&value| value > 0.0).count()
    }

    fn accumulate(&mut self, col: usize, row: usize, coverage: f32) {
        if let Some(cell) = self.cells.get_mut([row, col]) {
            *cell = cell.max(coverage.clamp(0.0, 1.0));
        }
    }

    /// Fully cover the `width` x `height` pixel block whose top-left pixel is `(col, row)`
    ///
    /// Parts of the block outside the mask are ignored.
    pub fn fill_rect(&mut self, col: usize, row: usize, width: usize, height: usize) {
        let col_end = col.saturating_add(width).min(self.width());
        let row_end = row.saturating_add(height).min(self.height());
        for r in row..row_end {
            for c in col..col_end {
                self.accumulate(c, r, 1.0);
            }
        }
    }

    /// Draw an anti-aliased line of the given pixel width between two pixel-space points
    ///
    /// Coverage falls off linearly over one pixel at the edge of the stroke, measured from
    /// each pixel centre to the nearest point on the segment.
    pub fn stroke_segment(&mut self, from: Point, to: Point, width: f64) {
        let half_width = width.max(0.0) / 2.0;
        let reach = half_width + 1.0;

        let Some((col_range, row_range)) = self.pixel_span(
            from.x.min(to.x) - reach,
            from.x.max(to.x) + reach,
            from.y.min(to.y) - reach,
            from.y.max(to.y) + reach,
        ) else {
            return;
        };

        for row in row_range {
            for col in col_range.clone() {
                let center = Point::new(col as f64 + 0.5, row as f64 + 0.5);
                let distance = distance_to_segment(center, from, to);
                let coverage = (half_width + 0.5 - distance).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.accumulate(col, row, coverage as f32);
                }
            }
        }
    }

    /// Fill the interior of a closed polygon using the even-odd rule
    ///
    /// Pixels are sampled at their centres. The polygon closes implicitly from the last
    /// vertex back to the first.
    pub fn fill_polygon(&mut self, vertices: &[Point]) {
        if vertices.len() < 3 {
            return;
        }

        let (min_y, max_y) = vertices
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.y), hi.max(p.y))
            });
        let Some((_, row_range)) = self.pixel_span(0.0, 0.0, min_y, max_y) else {
            return;
        };

        let closing = vertices.last().copied().zip(vertices.first().copied());
        let mut crossings = Vec::new();

        for row in row_range {
            let scan_y = row as f64 + 0.5;
            crossings.clear();

            let edges = vertices
                .windows(2)
                .filter_map(|pair| match pair {
                    [a, b] => Some((*a, *b)),
                    _ => None,
                })
                .chain(closing);

            for (a, b) in edges {
                // Half-open test counts shared vertices exactly once
                if (a.y <= scan_y) != (b.y <= scan_y) {
                    let t = (scan_y - a.y) / (b.y - a.y);
                    crossings.push(t.mul_add(b.x - a.x, a.x));
                }
            }

            crossings.sort_by(f64::total_cmp);

            for span in crossings.chunks_exact(2) {
                if let [left, right] = *span {
                    self.fill_span(row, left, right);
                }
            }
        }
    }

    // Fills pixels whose centres lie in [left, right)
    fn fill_span(&mut self, row: usize, left: f64, right: f64) {
        let first = (left - 0.5).ceil().max(0.0);
        let last = ((right - 0.5).ceil() - 1.0).min(self.width() as f64 - 1.0);
        if last < first {
            return;
        }
        for col in (first as usize)..=(last as usize) {
            self.accumulate(col, row, 1.0);
        }
    }

    // Clips a continuous pixel-space rectangle to the mask, returning column and row ranges
    fn pixel_span(
        &self,
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
    ) -> Option<(std::ops::Range<usize>, std::ops::Range<usize>)> {
        let width = self.width() as f64;
        let height = self.height() as f64;
        if max_x < 0.0 || max_y < 0.0 || min_x >= width || min_y >= height {
            return None;
        }

        let col_start = min_x.floor().max(0.0) as usize;
        let col_end = (max_x.ceil() + 1.0).min(width) as usize;
        let row_start = min_y.floor().max(0.0) as usize;
        let row_end = (max_y.ceil() + 1.0).min(height) as usize;

        Some((col_start..col_end, row_start..row_end))
    }
}

/// Shortest distance from `point` to the segment `a → b`
pub fn distance_to_segment(point: Point, a: Point, b: Point) -> f64 {
    let direction = b - a;
    let length_squared = direction.x.mul_add(direction.x, direction.y * direction.y);
    if length_squared <= f64::EPSILON {
        return point.distance(a);
    }

    let offset = point - a;
    let projection = offset.x.mul_add(direction.x, offset.y * direction.y) / length_squared;
    let t = projection.clamp(0.0, 1.0);
    point.distance(a + direction * t)
}
