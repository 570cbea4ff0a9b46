//! Koch snowflake construction and rendering
//!
//! The geometry core recursively replaces straight segments with the four-segment Koch
//! motif and assembles three such curves into a closed snowflake. Rendering, image export
//! and the command-line front end consume the resulting segment sequence.

#![forbid(unsafe_code)]

/// Koch curve subdivision, snowflake assembly and level validation
pub mod algorithm;
/// Points, segments and curves
pub mod geometry;
/// Input/output operations and error handling
pub mod io;
/// Rasterisation of curves into pixel coverage
pub mod render;

pub use algorithm::koch::subdivide;
pub use algorithm::snowflake::build_snowflake;
pub use io::error::{Result, SnowflakeError};
