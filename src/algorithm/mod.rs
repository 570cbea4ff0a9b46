//! Koch curve construction and the validated inputs it accepts

/// Recursive segment subdivision
pub mod koch;
/// Caller-facing recursion level validation
pub mod level;
/// Three-sided snowflake assembly
pub mod snowflake;
