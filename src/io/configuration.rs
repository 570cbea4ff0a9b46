//! Construction limits, rendering defaults and output naming

// Recursion limits
/// Default upper bound for accepted recursion levels
pub const MAX_RECURSION_LEVEL: u32 = 7;

// 3 * 4^10 segments is roughly 100 MB of geometry
/// Highest value `--max-level` may be raised to
pub const LEVEL_CEILING: u32 = 10;

// Geometry
/// Side length of the initial equilateral triangle
pub const DEFAULT_SIDE_LENGTH: f64 = 300.0;

/// Tolerance used when checking continuity and closure of generated curves
pub const CONTINUITY_TOLERANCE: f64 = 1e-9;

// Canvas settings
/// Width of rendered images in pixels
pub const IMAGE_WIDTH: u32 = 1200;
/// Height of rendered images in pixels
pub const IMAGE_HEIGHT: u32 = 1200;
/// Blank border kept around the curve in pixels
pub const IMAGE_MARGIN: u32 = 40;
/// Stroke width of curve segments in pixels
pub const STROKE_WIDTH: f64 = 1.5;

// Colours (RGBA)
/// Outline colour
pub const STROKE_COLOR: [u8; 4] = [0, 0, 255, 255];
/// Interior colour, 20% opaque
pub const FILL_COLOR: [u8; 4] = [0, 191, 191, 51];
/// Canvas background colour
pub const BACKGROUND_COLOR: [u8; 4] = [255, 255, 255, 255];

// Output settings
/// Directory receiving rendered images unless overridden
pub const OUTPUT_DIR: &str = "koch_snowflake";
/// File name prefix for single-level renders, followed by the level
pub const OUTPUT_PREFIX: &str = "koch_snowflake_level_";
/// File name prefix for growth animations, followed by the final level
pub const ANIMATION_PREFIX: &str = "koch_snowflake_growth_";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 600;
/// How many frame delays the last animation frame stays on screen
pub const FINAL_FRAME_HOLD: u32 = 4;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
