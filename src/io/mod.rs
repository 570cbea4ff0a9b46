//! Input/output around the geometry core
//!
//! This module contains everything that touches the outside world:
//! - Command-line parsing and the interactive prompt
//! - PNG and GIF export of rendered curves
//! - Progress display and error types

/// Command-line parsing and render orchestration
pub mod cli;
/// Limits, defaults and output naming
pub mod configuration;
/// Opening saved images in the system viewer
pub mod display;
/// Error types shared across the crate
pub mod error;
/// PNG rendering and export
pub mod image;
/// Progress bars for batch renders
pub mod progress;
/// Interactive level prompt
pub mod prompt;
/// Growth animation export
pub mod visualization;
