//! Rasterisation of curves into pixel coverage

/// Bitmap text for image captions
pub mod caption;
/// Anti-aliased stroking and polygon filling into coverage masks
pub mod raster;
/// Mapping from curve coordinates to pixel coordinates
pub mod viewport;

pub use raster::CoverageMask;
pub use viewport::Viewport;
